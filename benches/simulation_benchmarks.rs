//! Micro-benchmarks for a full simulation run.
//!
//! The draw is O(sample_size) in statrs, so this tracks how interactive the
//! run trigger stays as visitor counts grow.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use splitsim::experiment::{ExperimentConfig, VariantConfig, VariantLabel};
use splitsim::simulation::ExperimentSimulator;

fn bench_simulation_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulation_run");

    for size in [1_000u64, 10_000, 100_000] {
        let config = ExperimentConfig {
            variant_a: VariantConfig::new(VariantLabel::A, size, 0.10),
            variant_b: VariantConfig::new(VariantLabel::B, size, 0.12),
            ..ExperimentConfig::default()
        };

        group.bench_with_input(
            BenchmarkId::new("visitors_per_arm", size),
            &config,
            |b, config| {
                b.iter(|| ExperimentSimulator::run(black_box(config)).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_simulation_run);
criterion_main!(benches);
