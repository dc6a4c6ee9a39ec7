//! grille: word-search over a fixed 64×64 letter grid.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the grille sub-crates. For most users, adding `grille` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use grille::prelude::*;
//!
//! // Build the grid once from row strings; input is lowercased and
//! // anything past 64 rows / 64 columns is ignored.
//! let grid = LetterGrid::from_rows([
//!     "chill",
//!     "ensoe",
//! ]);
//!
//! let search = WordSearch::new(grid);
//!
//! // Sequential and parallel drivers produce identical counts.
//! let report = search.run(["chill", "hi", "notfound"]);
//! assert_eq!(report.tally.count("chill"), 1);
//! assert_eq!(report.ranking, vec!["chill".to_string(), "hi".to_string()]);
//!
//! let parallel = search.run_parallel(["chill", "hi", "notfound"]).unwrap();
//! assert_eq!(parallel.tally, report.tally);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `grille-core` | [`LetterGrid`](types::LetterGrid), [`Direction`](types::Direction), [`Needle`](types::Needle), [`SearchError`](types::SearchError) |
//! | [`engine`] | `grille-engine` | [`WordSearch`](engine::WordSearch), [`MatchTally`](engine::MatchTally), [`SearchConfig`](engine::SearchConfig), [`ScanMetrics`](engine::ScanMetrics) |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Re-exports from `grille-core`.
pub mod types {
    pub use grille_core::*;
}

/// Re-exports from `grille-engine`.
pub mod engine {
    pub use grille_engine::*;
}

/// Common imports for typical use.
pub mod prelude {
    pub use grille_core::{Direction, LetterGrid, SearchError};
    pub use grille_engine::{MatchTally, ScanMetrics, SearchConfig, SearchReport, WordSearch};
}
