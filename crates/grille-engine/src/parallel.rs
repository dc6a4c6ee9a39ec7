//! Parallel search driver: word-sharded workers with deterministic fan-in.
//!
//! The query words are dealt round-robin into one batch per worker. Each
//! worker pulls its batch from a bounded crossbeam channel, scans the
//! full grid row-major for every word in the batch into a worker-local
//! [`MatchTally`], and reports the tally back tagged with its batch
//! index. The driver merges reports in batch-index order.
//!
//! No two workers ever write the same tally, so the read-check-then-write
//! race of a shared counting map cannot occur, and the merged counts
//! exactly equal the sequential driver's. The only failure left is losing
//! a worker's report — surfaced as
//! [`SearchError::ConcurrencyHazard`], never as a partial count.

use crossbeam_channel::{bounded, unbounded};

use grille_core::{LetterGrid, Needle, SearchError, GRID_COLS, GRID_ROWS};

use crate::scan::count_origins;
use crate::tally::MatchTally;

/// The shard of query words assigned to one worker.
struct Batch {
    index: usize,
    needles: Vec<Needle>,
}

/// One worker's contribution, tagged for ordered merging.
struct BatchReport {
    index: usize,
    tally: MatchTally,
    checks: u64,
}

/// Outcome of a parallel scan: merged tally, total (origin, word) checks,
/// and the number of workers actually used.
pub(crate) struct ParallelScan {
    pub tally: MatchTally,
    pub checks: u64,
    pub workers: usize,
}

/// Scan `needles` against `grid` with up to `worker_count` threads.
///
/// Workers are capped at the number of needles so every batch is
/// non-empty. An empty query skips the pool entirely.
pub(crate) fn scan(
    grid: &LetterGrid,
    needles: &[Needle],
    worker_count: usize,
) -> Result<ParallelScan, SearchError> {
    if needles.is_empty() {
        return Ok(ParallelScan {
            tally: MatchTally::new(),
            checks: 0,
            workers: 0,
        });
    }

    let workers = worker_count.clamp(1, needles.len());
    let batches = shard(needles, workers);
    let expected = batches.len();

    let (job_tx, job_rx) = bounded::<Batch>(expected);
    let (report_tx, report_rx) = unbounded::<BatchReport>();

    let mut reports: Vec<BatchReport> = Vec::with_capacity(expected);
    let panicked = std::thread::scope(|scope| {
        let mut handles = Vec::with_capacity(workers);
        for _ in 0..workers {
            let job_rx = job_rx.clone();
            let report_tx = report_tx.clone();
            handles.push(scope.spawn(move || {
                while let Ok(batch) = job_rx.recv() {
                    let mut tally = MatchTally::new();
                    for needle in &batch.needles {
                        tally.add(needle.key(), count_origins(grid, needle));
                    }
                    let checks = batch.needles.len() as u64 * (GRID_ROWS * GRID_COLS) as u64;
                    let report = BatchReport {
                        index: batch.index,
                        tally,
                        checks,
                    };
                    if report_tx.send(report).is_err() {
                        return;
                    }
                }
            }));
        }
        // The driver keeps no ends of its own: workers hold the clones.
        drop(job_rx);
        drop(report_tx);

        for batch in batches {
            // The channel holds `expected` slots, so sends cannot block;
            // an Err means every worker is already gone, which the join
            // below reports.
            if job_tx.send(batch).is_err() {
                break;
            }
        }
        drop(job_tx);

        while let Ok(report) = report_rx.recv() {
            reports.push(report);
        }

        let mut any_panicked = false;
        for handle in handles {
            any_panicked |= handle.join().is_err();
        }
        any_panicked
    });

    if panicked || reports.len() != expected {
        return Err(SearchError::ConcurrencyHazard {
            reason: format!(
                "fan-in received {} of {} worker batches",
                reports.len(),
                expected
            ),
        });
    }

    // Merge in batch-index order so the tally is deterministic.
    reports.sort_by_key(|r| r.index);
    let mut tally = MatchTally::new();
    let mut checks = 0;
    for report in reports {
        checks += report.checks;
        tally.merge(report.tally);
    }

    Ok(ParallelScan {
        tally,
        checks,
        workers,
    })
}

/// Deal needles round-robin into `workers` batches.
///
/// Round-robin keeps batch sizes within one of each other, so no worker
/// is idle while another drains a long tail.
fn shard(needles: &[Needle], workers: usize) -> Vec<Batch> {
    let mut batches: Vec<Batch> = (0..workers)
        .map(|index| Batch {
            index,
            needles: Vec::with_capacity(needles.len() / workers + 1),
        })
        .collect();
    for (i, needle) in needles.iter().enumerate() {
        batches[i % workers].needles.push(needle.clone());
    }
    batches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn needles(words: &[&str]) -> Vec<Needle> {
        words.iter().map(|w| Needle::new(w)).collect()
    }

    #[test]
    fn empty_query_uses_no_workers() {
        let grid = LetterGrid::from_rows(["abc"]);
        let outcome = scan(&grid, &[], 4).unwrap();
        assert!(outcome.tally.is_empty());
        assert_eq!(outcome.workers, 0);
        assert_eq!(outcome.checks, 0);
    }

    #[test]
    fn workers_capped_at_needle_count() {
        let grid = LetterGrid::from_rows(["abc"]);
        let outcome = scan(&grid, &needles(&["abc"]), 8).unwrap();
        assert_eq!(outcome.workers, 1);
        assert_eq!(outcome.tally.count("abc"), 1);
    }

    #[test]
    fn shard_deals_round_robin() {
        let batches = shard(&needles(&["a", "b", "c", "d", "e"]), 2);
        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0].needles.len(), 3);
        assert_eq!(batches[1].needles.len(), 2);
        assert_eq!(batches[0].needles[0].key(), "a");
        assert_eq!(batches[1].needles[0].key(), "b");
    }

    #[test]
    fn duplicate_words_across_batches_sum() {
        // Two duplicates land in different round-robin batches and must
        // still merge onto one key.
        let grid = LetterGrid::from_rows(["haze"]);
        let outcome = scan(&grid, &needles(&["haze", "haze"]), 2).unwrap();
        assert_eq!(outcome.workers, 2);
        assert_eq!(outcome.tally.count("haze"), 2);
    }

    #[test]
    fn checks_cover_every_origin_word_pair() {
        let grid = LetterGrid::from_rows(["abc"]);
        let outcome = scan(&grid, &needles(&["abc", "xyz", "bc"]), 2).unwrap();
        assert_eq!(outcome.checks, 3 * (GRID_ROWS * GRID_COLS) as u64);
    }
}
