//! Test fixtures for grille development.
//!
//! Row builders for placing words at known origins, plus seeded random
//! grids and word lists for equivalence tests and benches.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod fixtures;

pub use fixtures::{random_rows, rows_with_word, words_from_rows};
