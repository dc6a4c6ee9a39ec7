//! Per-word occurrence tallies.

use indexmap::IndexMap;

/// Insertion-ordered mapping from normalized word to occurrence count.
///
/// A tally is only mutated by the search pass that owns it. Repeated
/// searches are independent unless the caller reuses one tally explicitly
/// via [`WordSearch::scan_into`](crate::WordSearch::scan_into), in which
/// case counts accumulate.
///
/// Unmatched words are omitted entirely — there are no zero entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchTally {
    counts: IndexMap<String, u64>,
}

impl MatchTally {
    /// An empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one match for `word`.
    pub fn record(&mut self, word: &str) {
        self.add(word, 1);
    }

    /// Record `hits` matches for `word`.
    ///
    /// Zero hits leave the tally untouched, preserving the omit-zero
    /// policy.
    pub fn add(&mut self, word: &str, hits: u64) {
        if hits == 0 {
            return;
        }
        if let Some(count) = self.counts.get_mut(word) {
            *count += hits;
        } else {
            self.counts.insert(word.to_owned(), hits);
        }
    }

    /// Sum another tally into this one.
    ///
    /// The monoid fold used by the parallel fan-in: merging worker-local
    /// tallies in a fixed order yields the same counts as one sequential
    /// pass.
    pub fn merge(&mut self, other: MatchTally) {
        for (word, hits) in other.counts {
            *self.counts.entry(word).or_insert(0) += hits;
        }
    }

    /// Count for `word`, zero if absent.
    pub fn count(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct matched words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// `true` if nothing matched.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total matches across all words.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Iterate `(word, count)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(word, &count)| (word.as_str(), count))
    }

    /// The ranked word list: descending count, ties broken by ascending
    /// lexicographic order, truncated to `limit`.
    ///
    /// The tie-break makes the ranking independent of insertion order, so
    /// the sequential and parallel drivers agree even though they fill
    /// the tally in different orders.
    pub fn ranked(&self, limit: usize) -> Vec<String> {
        let mut entries: Vec<(&str, u64)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
            .into_iter()
            .take(limit)
            .map(|(word, _)| word.to_owned())
            .collect()
    }
}
