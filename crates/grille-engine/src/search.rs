//! The user-facing search API and sequential driver.

use std::time::Instant;

use grille_core::{LetterGrid, Needle, SearchError, GRID_COLS, GRID_ROWS};

use crate::config::SearchConfig;
use crate::metrics::ScanMetrics;
use crate::parallel;
use crate::scan;
use crate::tally::MatchTally;

// ── SearchReport ────────────────────────────────────────────────

/// Result of a completed search pass.
#[derive(Clone, Debug)]
pub struct SearchReport {
    /// Words ordered by descending count (ties ascending lexicographic),
    /// truncated to the configured result limit.
    pub ranking: Vec<String>,
    /// Full per-word counts for every matched word.
    pub tally: MatchTally,
    /// Performance counters for the pass.
    pub metrics: ScanMetrics,
}

// ── WordSearch ──────────────────────────────────────────────────

/// Word-search over one immutable [`LetterGrid`].
///
/// Holds the grid and a [`SearchConfig`]. Every search call starts from a
/// fresh tally, so repeated calls with the same input return the same
/// result; accumulation across calls happens only through
/// [`scan_into`](WordSearch::scan_into) with a caller-owned tally.
///
/// # Example
///
/// ```
/// use grille_core::LetterGrid;
/// use grille_engine::WordSearch;
///
/// let grid = LetterGrid::from_rows(["cold", "oxxx", "lxxx", "dxxx"]);
/// let search = WordSearch::new(grid);
/// // "cold" matches across and down from (0, 0): one origin, one count.
/// let report = search.run(["cold", "absent"]);
/// assert_eq!(report.tally.count("cold"), 1);
/// assert_eq!(report.ranking, vec!["cold".to_string()]);
/// ```
pub struct WordSearch {
    grid: LetterGrid,
    config: SearchConfig,
}

impl WordSearch {
    /// Create a search over `grid` with the default configuration.
    pub fn new(grid: LetterGrid) -> Self {
        Self::with_config(grid, SearchConfig::default())
    }

    /// Create a search over `grid` with an explicit configuration.
    pub fn with_config(grid: LetterGrid, config: SearchConfig) -> Self {
        Self { grid, config }
    }

    /// The grid being searched.
    pub fn grid(&self) -> &LetterGrid {
        &self.grid
    }

    /// The active configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Sequential search, returning only the ranked words.
    pub fn find<I, S>(&self, words: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.run(words).ranking
    }

    /// Parallel search, returning only the ranked words.
    pub fn find_parallel<I, S>(&self, words: I) -> Result<Vec<String>, SearchError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(self.run_parallel(words)?.ranking)
    }

    /// Sequential search with the full outcome.
    ///
    /// Visits every origin in row-major order and checks every word at
    /// each origin, across first then down, recording one hit per
    /// matching (origin, word) pair.
    pub fn run<I, S>(&self, words: I) -> SearchReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let needles = normalize(words);
        let started = Instant::now();
        let mut tally = MatchTally::new();
        let checks = self.scan_needles(&needles, &mut tally);
        self.report(tally, 1, checks, started)
    }

    /// Parallel search with the full outcome.
    ///
    /// Counts are exactly those of [`run`](WordSearch::run) for identical
    /// input; see [`SearchError::ConcurrencyHazard`] for the one way this
    /// can fail instead.
    pub fn run_parallel<I, S>(&self, words: I) -> Result<SearchReport, SearchError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let needles = normalize(words);
        let started = Instant::now();
        let outcome = parallel::scan(&self.grid, &needles, self.config.resolve_worker_count())?;
        Ok(self.report(outcome.tally, outcome.workers, outcome.checks, started))
    }

    /// Accumulating sequential scan into a caller-owned tally.
    ///
    /// This is the explicit opt-in for carrying counts across calls:
    /// scanning the same words twice into one tally doubles every count.
    /// [`run`](WordSearch::run) is this with a fresh tally.
    pub fn scan_into<I, S>(&self, words: I, tally: &mut MatchTally)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let needles = normalize(words);
        self.scan_needles(&needles, tally);
    }

    fn scan_needles(&self, needles: &[Needle], tally: &mut MatchTally) -> u64 {
        let mut checks = 0;
        for row in 0..GRID_ROWS {
            for col in 0..GRID_COLS {
                for needle in needles {
                    checks += 1;
                    if scan::matches_at_origin(&self.grid, needle, row, col) {
                        tally.record(needle.key());
                    }
                }
            }
        }
        checks
    }

    fn report(
        &self,
        tally: MatchTally,
        workers: usize,
        checks: u64,
        started: Instant,
    ) -> SearchReport {
        let metrics = ScanMetrics {
            workers,
            checks,
            matches: tally.total(),
            elapsed_us: started.elapsed().as_micros() as u64,
        };
        SearchReport {
            ranking: tally.ranked(self.config.result_limit),
            tally,
            metrics,
        }
    }
}

fn normalize<I, S>(words: I) -> Vec<Needle>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words.into_iter().map(|w| Needle::new(w.as_ref())).collect()
}
