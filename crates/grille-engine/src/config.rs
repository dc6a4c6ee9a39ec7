//! Search configuration.

/// Configuration for a [`WordSearch`](crate::WordSearch).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Number of worker threads for the parallel driver. `None` =
    /// auto-detect (`available_parallelism / 2`, clamped to `[2, 16]`).
    pub worker_count: Option<usize>,
    /// Maximum number of words in a ranked result. Default: 10.
    pub result_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            worker_count: None,
            result_limit: 10,
        }
    }
}

impl SearchConfig {
    /// Resolve the actual worker count, applying auto-detection if `None`.
    pub fn resolve_worker_count(&self) -> usize {
        match self.worker_count {
            Some(n) => n.max(1),
            None => {
                let cpus = std::thread::available_parallelism()
                    .map(|n| n.get())
                    .unwrap_or(4);
                (cpus / 2).clamp(2, 16)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limit_is_ten() {
        assert_eq!(SearchConfig::default().result_limit, 10);
    }

    #[test]
    fn explicit_worker_count_is_kept() {
        let config = SearchConfig {
            worker_count: Some(3),
            ..Default::default()
        };
        assert_eq!(config.resolve_worker_count(), 3);
    }

    #[test]
    fn zero_workers_resolves_to_one() {
        let config = SearchConfig {
            worker_count: Some(0),
            ..Default::default()
        };
        assert_eq!(config.resolve_worker_count(), 1);
    }

    #[test]
    fn auto_detect_stays_in_bounds() {
        let resolved = SearchConfig::default().resolve_worker_count();
        assert!((2..=16).contains(&resolved));
    }
}
