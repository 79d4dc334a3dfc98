//! Criterion benchmarks for the scaling-vector pipeline.
//! Focus sizes: n in {8, 16, 32} terms, k in {2, 3, 4} coordinates; plus
//! (k, n) in {(7, 28), (8, 30)} for the high-dimensional hull path.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p asy

use asy::gen::{random_cloud, CloudCfg, ReplayToken};
use asy::prelude::*;
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

fn cloud(dim: usize, points: usize, seed: u64) -> PointMatrix {
    let cfg = CloudCfg {
        points,
        dim,
        max_exponent: 6,
    };
    let rows = random_cloud(cfg, ReplayToken { seed, index: 0 });
    match PointMatrix::from_rows(&rows) {
        Ok(p) => p,
        Err(e) => panic!("generated cloud rejected: {e}"),
    }
}

fn bench_reduce(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduce");
    let pipeline = Pipeline::new(HullCfg::default());
    for &n in &[8usize, 16, 32] {
        group.bench_with_input(BenchmarkId::new("k3", n), &n, |b, &n| {
            b.iter_batched(
                || cloud(3, n, 41),
                |p| {
                    let _frame = pipeline.reduce(&p);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_scaling_vectors(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling_vectors");
    let pipeline = Pipeline::new(HullCfg::default());
    for &k in &[2usize, 3, 4] {
        for &n in &[8usize, 16, 32] {
            let id = BenchmarkId::new(format!("k{k}"), n);
            group.bench_with_input(id, &n, |b, &n| {
                b.iter_batched(
                    || cloud(k, n, 42),
                    |p| {
                        let _res = pipeline.scaling_vectors(&p).unwrap();
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

fn bench_high_dimension(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling_vectors_high");
    group.sample_size(10);
    let pipeline = Pipeline::new(HullCfg::default());
    for &(k, n) in &[(7usize, 28usize), (8, 30)] {
        group.bench_with_input(BenchmarkId::new(format!("k{k}"), n), &n, |b, &n| {
            b.iter_batched(
                || cloud(k, n, 43),
                |p| {
                    let _res = pipeline.scaling_vectors(&p).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_reduce,
    bench_scaling_vectors,
    bench_high_dimension
);
criterion_main!(benches);
