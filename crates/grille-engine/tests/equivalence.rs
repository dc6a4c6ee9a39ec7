//! Sequential/parallel count-equivalence properties.

use grille_core::LetterGrid;
use grille_engine::{SearchConfig, WordSearch};
use grille_test_utils::{random_rows, words_from_rows};
use proptest::prelude::*;

fn search_with_workers(rows: &[String], workers: usize) -> WordSearch {
    let config = SearchConfig {
        worker_count: Some(workers),
        ..Default::default()
    };
    WordSearch::with_config(LetterGrid::from_rows(rows), config)
}

#[test]
fn seeded_full_grids_agree() {
    for seed in [1u64, 7, 42] {
        let rows = random_rows(seed);
        let mut words = words_from_rows(&rows, seed ^ 0xfeed, 24, 4);
        words.push("absentword".into());
        let search = search_with_workers(&rows, 4);

        let seq = search.run(&words);
        let par = search.run_parallel(&words).unwrap();

        assert_eq!(&seq.tally, &par.tally, "seed {seed}");
        assert_eq!(seq.ranking, par.ranking, "seed {seed}");
        assert_eq!(seq.metrics.checks, par.metrics.checks);
        assert_eq!(seq.metrics.matches, par.metrics.matches);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // A narrow alphabet makes collisions (and thus real matches) common
    // enough that the property exercises the tally, not just misses.
    #[test]
    fn parallel_counts_equal_sequential(
        rows in proptest::collection::vec("[a-c]{0,70}", 0..70),
        words in proptest::collection::vec("[a-c]{0,6}", 0..40),
        workers in 1usize..8,
    ) {
        let search = search_with_workers(&rows, workers);

        let seq = search.run(&words);
        let par = search.run_parallel(&words).unwrap();

        prop_assert_eq!(&seq.tally, &par.tally);
        prop_assert_eq!(seq.ranking, par.ranking);
        prop_assert_eq!(seq.metrics.matches, par.metrics.matches);
    }

    #[test]
    fn rerun_is_deterministic(
        rows in proptest::collection::vec("[a-c]{0,70}", 0..20),
        words in proptest::collection::vec("[a-c]{1,4}", 0..10),
    ) {
        let search = search_with_workers(&rows, 3);
        let first = search.run_parallel(&words).unwrap();
        let second = search.run_parallel(&words).unwrap();
        prop_assert_eq!(&first.tally, &second.tally);
        prop_assert_eq!(first.ranking, second.ranking);
    }
}
