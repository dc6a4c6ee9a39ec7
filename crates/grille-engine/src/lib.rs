//! Word-search engine over a [`LetterGrid`](grille_core::LetterGrid).
//!
//! [`WordSearch`] is the user-facing API. It offers two count-equivalent
//! drivers: the sequential scan ([`run`](WordSearch::run)) and the
//! word-sharded parallel scan ([`run_parallel`](WordSearch::run_parallel)).
//! For identical input both produce identical tallies and, because ranking
//! ties are broken deterministically, identical ranked results.
//!
//! The parallel driver aggregates with worker-local tallies merged in a
//! fixed order on the driver thread — no shared mutable map, no lock on
//! the hot path (see [`error`](grille_core::error) for the one hazard
//! that remains).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod metrics;
mod parallel;
mod scan;
mod search;
pub mod tally;

pub use config::SearchConfig;
pub use metrics::ScanMetrics;
pub use search::{SearchReport, WordSearch};
pub use tally::MatchTally;
