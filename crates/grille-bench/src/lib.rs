//! Benchmark profiles and utilities for the grille word-search engine.
//!
//! Provides pre-built searches and word lists for benchmarks and examples:
//!
//! - [`reference_search`]: fully populated seeded 64×64 grid
//! - [`reference_words`]: mixed query list (words lifted from the grid
//!   plus words that cannot occur)

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use grille_core::LetterGrid;
use grille_engine::{SearchConfig, WordSearch};
use grille_test_utils::{random_rows, words_from_rows};

/// Build the reference search: a fully populated seeded 64×64 grid with
/// the given parallel worker count.
pub fn reference_search(seed: u64, workers: usize) -> WordSearch {
    let config = SearchConfig {
        worker_count: Some(workers),
        ..Default::default()
    };
    WordSearch::with_config(LetterGrid::from_rows(random_rows(seed)), config)
}

/// A mixed query list: `present` four-letter words lifted from the grid
/// rows plus `absent` words that contain a digit and therefore never
/// match a letter grid.
pub fn reference_words(seed: u64, present: usize, absent: usize) -> Vec<String> {
    let rows = random_rows(seed);
    let mut words = words_from_rows(&rows, seed.wrapping_mul(31), present, 4);
    words.extend((0..absent).map(|i| format!("absent{i}")));
    words
}
