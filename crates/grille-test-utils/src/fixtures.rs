//! Reusable grid and word-list fixtures.

use grille_core::{Direction, GRID_COLS, GRID_ROWS};
use rand::{RngExt, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Padding character for cells that must be set but must not spell
/// anything: `.` never appears in a letter word.
const FILLER: char = '.';

/// Rows for a grid that contains `word` written at `(row, col)` along
/// `dir`, and nothing else that could match a letter word.
///
/// Cells before the word on its row(s) are filled with [`FILLER`] so the
/// word lands at the requested column; all other cells stay unset.
pub fn rows_with_word(word: &str, row: usize, col: usize, dir: Direction) -> Vec<String> {
    let mut rows: Vec<String> = vec![String::new(); row];
    let pad: String = std::iter::repeat(FILLER).take(col).collect();
    match dir {
        Direction::Across => {
            rows.push(format!("{pad}{word}"));
        }
        Direction::Down => {
            for ch in word.chars() {
                rows.push(format!("{pad}{ch}"));
            }
        }
    }
    rows
}

/// Rows for a fully populated 64×64 grid of seeded random lowercase
/// letters. Same seed, same grid.
pub fn random_rows(seed: u64) -> Vec<String> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..GRID_ROWS)
        .map(|_| {
            (0..GRID_COLS)
                .map(|_| rng.random_range(b'a'..=b'z') as char)
                .collect()
        })
        .collect()
}

/// Deterministically lift `count` words of length `len` out of `rows`,
/// reading across from random origins.
///
/// Every returned word is guaranteed to occur in the grid built from
/// `rows` (at least where it was lifted from), which keeps benches and
/// equivalence tests from searching only for absent words.
pub fn words_from_rows(rows: &[String], seed: u64, count: usize, len: usize) -> Vec<String> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let row = &rows[rng.random_range(0..rows.len())];
            let max_start = row.len().saturating_sub(len);
            let start = rng.random_range(0..=max_start);
            row[start..(start + len).min(row.len())].to_string()
        })
        .collect()
}
