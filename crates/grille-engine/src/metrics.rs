//! Per-search performance metrics.

/// Counters collected during a single search pass.
///
/// Populated by both drivers after each [`run`](crate::WordSearch::run) /
/// [`run_parallel`](crate::WordSearch::run_parallel) call. `checks` and
/// `matches` are identical across the two drivers for identical input;
/// only `workers` and `elapsed_us` differ.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanMetrics {
    /// Worker threads used (1 for the sequential driver).
    pub workers: usize,
    /// Number of (origin, word) pairs checked.
    pub checks: u64,
    /// Number of (origin, word) pairs that matched.
    pub matches: u64,
    /// Wall-clock time for the pass, in microseconds.
    pub elapsed_us: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = ScanMetrics::default();
        assert_eq!(m.workers, 0);
        assert_eq!(m.checks, 0);
        assert_eq!(m.matches, 0);
        assert_eq!(m.elapsed_us, 0);
    }
}
