//! Candidate-word normalization.

use smallvec::SmallVec;

/// A candidate word, normalized for matching.
///
/// Holds the lowercased characters of the query word (inline for words up
/// to 16 characters) together with the normalized key used for tallying.
/// Duplicate query words normalize to the same key, so their matches land
/// on one tally entry. An empty needle never matches anywhere.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Needle {
    key: String,
    chars: SmallVec<[char; 16]>,
}

impl Needle {
    /// Normalize a raw query word.
    pub fn new(raw: &str) -> Self {
        let chars: SmallVec<[char; 16]> = raw.chars().map(fold_lower).collect();
        let key: String = chars.iter().collect();
        Self { key, chars }
    }

    /// The normalized tally key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The normalized characters, in order.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of characters in the normalized word.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// `true` for the empty word, which never matches.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

/// Fold one character to its first lowercase scalar.
///
/// Taking only the first scalar keeps one input character mapped to one
/// cell, so multi-character case expansions cannot shift later columns.
pub fn fold_lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_to_lowercase() {
        let n = Needle::new("ChIlL");
        assert_eq!(n.key(), "chill");
        assert_eq!(n.chars(), &['c', 'h', 'i', 'l', 'l']);
        assert_eq!(n.len(), 5);
    }

    #[test]
    fn empty_word_is_empty() {
        let n = Needle::new("");
        assert!(n.is_empty());
        assert_eq!(n.key(), "");
    }

    #[test]
    fn mixed_case_duplicates_share_a_key() {
        assert_eq!(Needle::new("WIND").key(), Needle::new("wind").key());
    }

    #[test]
    fn non_ascii_lowercasing_keeps_one_cell_per_char() {
        // U+0130 expands to two scalars under full lowercasing; only the
        // first is kept so positions after it stay aligned.
        let n = Needle::new("\u{0130}x");
        assert_eq!(n.len(), 2);
        assert_eq!(n.chars()[1], 'x');
    }
}
