//! End-to-end word hunt example.
//!
//! Demonstrates: build a seeded grid → run the sequential driver → run the
//! parallel driver → compare rankings and metrics.

use grille_bench::{reference_search, reference_words};

fn main() {
    println!("=== grille word hunt ===\n");

    let search = reference_search(42, 4);
    let words = reference_words(42, 24, 8);
    println!("searching for {} words\n", words.len());

    let seq = search.run(&words);
    println!("sequential: {} matches in {} us", seq.metrics.matches, seq.metrics.elapsed_us);

    let par = search
        .run_parallel(&words)
        .expect("parallel search failed");
    println!(
        "parallel:   {} matches in {} us on {} workers\n",
        par.metrics.matches, par.metrics.elapsed_us, par.metrics.workers
    );

    assert_eq!(seq.tally, par.tally, "drivers disagree");

    println!("top words:");
    for word in &par.ranking {
        println!("  {:>6}  {}", par.tally.count(word), word);
    }
}
