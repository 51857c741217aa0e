//! Ranking performance benchmarks
//!
//! Measures performance of:
//! - Transition model construction
//! - Sampling estimator
//! - Iteration estimator

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use linkrank_core::{iterate_rank, sample_rank, transition, Corpus, RngSource};

/// Ring of `n` pages where each page also links to every seventh page
fn generate_corpus(n: usize) -> Corpus {
    Corpus::new((0..n).map(|i| {
        let mut links = vec![format!("{}.html", (i + 1) % n)];
        if i % 7 == 0 {
            links.push(format!("{}.html", (i * 3) % n));
        }
        (format!("{i}.html"), links)
    }))
}

fn bench_transition(c: &mut Criterion) {
    let corpus = generate_corpus(500);
    c.bench_function("transition_500", |b| {
        b.iter(|| transition(black_box(&corpus), black_box("7.html"), 0.85))
    });
}

fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_rank");
    for size in [10, 100, 1_000] {
        let corpus = generate_corpus(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &corpus, |b, corpus| {
            b.iter(|| sample_rank(corpus, 0.85, 10_000, &mut RngSource::seeded(42)))
        });
    }
    group.finish();
}

fn bench_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterate_rank");
    for size in [10, 100, 1_000] {
        let corpus = generate_corpus(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &corpus, |b, corpus| {
            b.iter(|| iterate_rank(corpus, 0.85))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_transition, bench_sampling, bench_iteration);
criterion_main!(benches);
