//! Error types for the grille search subsystem.

use std::error::Error;
use std::fmt;

/// Errors from the parallel search driver.
///
/// The sequential driver is infallible: out-of-bounds and unset-cell
/// accesses are designed "no match" outcomes, and malformed words (empty,
/// longer than the grid) degrade to "never matched". The parallel driver
/// eliminates tally contention by construction (workers write only their
/// own local tallies, merged on the driver thread), so the one failure
/// left is losing a worker's contribution during fan-in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchError {
    /// A worker batch never reported back during fan-in: a worker thread
    /// panicked or its report channel disconnected early. The merged
    /// counts would be partial, so no result is produced.
    ConcurrencyHazard {
        /// Description of the lost batch or disconnect.
        reason: String,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConcurrencyHazard { reason } => {
                write!(f, "concurrency hazard: {reason}")
            }
        }
    }
}

impl Error for SearchError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_reason() {
        let err = SearchError::ConcurrencyHazard {
            reason: "batch 3 of 4 lost".into(),
        };
        assert_eq!(err.to_string(), "concurrency hazard: batch 3 of 4 lost");
    }
}
