//! Criterion micro-benchmarks for the search drivers.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use grille_bench::{reference_search, reference_words};

/// Benchmark: sequential scan of a full 64×64 grid for 32 words.
fn bench_sequential_64x64(c: &mut Criterion) {
    let search = reference_search(42, 1);
    let words = reference_words(42, 24, 8);

    c.bench_function("sequential_64x64_32w", |b| {
        b.iter(|| {
            let report = search.run(black_box(&words));
            black_box(report.tally.total())
        });
    });
}

/// Benchmark: parallel scan of the same grid and words with 4 workers.
fn bench_parallel_64x64(c: &mut Criterion) {
    let search = reference_search(42, 4);
    let words = reference_words(42, 24, 8);

    c.bench_function("parallel_64x64_32w_4t", |b| {
        b.iter(|| {
            let report = search.run_parallel(black_box(&words)).unwrap();
            black_box(report.tally.total())
        });
    });
}

/// Benchmark: sequential scan with a 10x larger word list, the regime
/// the parallel driver exists for.
fn bench_sequential_wide_query(c: &mut Criterion) {
    let search = reference_search(7, 1);
    let words = reference_words(7, 240, 80);

    c.bench_function("sequential_64x64_320w", |b| {
        b.iter(|| {
            let report = search.run(black_box(&words));
            black_box(report.tally.total())
        });
    });
}

/// Benchmark: parallel scan of the wide query.
fn bench_parallel_wide_query(c: &mut Criterion) {
    let search = reference_search(7, 4);
    let words = reference_words(7, 240, 80);

    c.bench_function("parallel_64x64_320w_4t", |b| {
        b.iter(|| {
            let report = search.run_parallel(black_box(&words)).unwrap();
            black_box(report.tally.total())
        });
    });
}

criterion_group!(
    benches,
    bench_sequential_64x64,
    bench_parallel_64x64,
    bench_sequential_wide_query,
    bench_parallel_wide_query,
);
criterion_main!(benches);
