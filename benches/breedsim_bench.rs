//! Criterion benchmarks for the breeding simulator.
//!
//! Fixed seeds keep the workloads comparable across runs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use breedsim::population::populate;
use breedsim::{SimConfig, SimRunner, WeightRange};

fn bench_populate(c: &mut Criterion) {
    let range = WeightRange {
        min: 200,
        max: 600,
        mode: 300,
    };

    let mut group = c.benchmark_group("populate");
    for size in [100usize, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut rng = StdRng::seed_from_u64(42);
            b.iter(|| black_box(populate(size, &range, &mut rng)));
        });
    }
    group.finish();
}

fn bench_full_run(c: &mut Criterion) {
    c.bench_function("run_50_generations", |b| {
        let config = SimConfig::default()
            .with_generation_limit(50)
            .with_seed(42);
        b.iter(|| black_box(SimRunner::run(&config)));
    });

    c.bench_function("run_reference_scenario", |b| {
        let config = SimConfig::default().with_seed(42);
        b.iter(|| black_box(SimRunner::run(&config)));
    });
}

criterion_group!(benches, bench_populate, bench_full_run);
criterion_main!(benches);
