//! Criterion benchmarks for the Monte Carlo estimator.
//!
//! Measures per-trial cost of each experiment and the overhead of splitting
//! a run into independently seeded partitions.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pp_core::experiments::{
    self, BirthdayExperiment, CoinExperiment, ConsensusExperiment, Experiment,
    MontyHallExperiment,
};
use pp_core::monte_carlo::{estimate_partitioned, MonteCarloEstimator};
use rand::rngs::StdRng;
use rand::SeedableRng;

const TRIALS: u64 = 10_000;

fn bench_experiment<E: Experiment>(c: &mut Criterion, experiment: &E) {
    let mut group = c.benchmark_group("experiments");
    group.throughput(Throughput::Elements(TRIALS));
    group.bench_function(experiment.name(), |b| {
        let estimator = MonteCarloEstimator::new();
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(black_box(7));
            black_box(experiments::run(&estimator, experiment, TRIALS, &mut rng))
        });
    });
    group.finish();
}

fn bench_experiments(c: &mut Criterion) {
    bench_experiment(c, &CoinExperiment::fair());
    if let Ok(birthday) = BirthdayExperiment::new(365, 23) {
        bench_experiment(c, &birthday);
    }
    if let Ok(consensus) = ConsensusExperiment::new(3, 4) {
        bench_experiment(c, &consensus);
    }
    bench_experiment(c, &MontyHallExperiment::default());
}

fn bench_partitions(c: &mut Criterion) {
    let mut group = c.benchmark_group("partitioned");
    group.throughput(Throughput::Elements(TRIALS));
    let coin = CoinExperiment::fair();

    for partitions in [1u64, 8, 64] {
        group.bench_with_input(
            BenchmarkId::new("coin", partitions),
            &partitions,
            |b, &partitions| {
                b.iter(|| {
                    black_box(estimate_partitioned(TRIALS, partitions, 7, |rng| {
                        coin.trial(rng)
                    }))
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_experiments, bench_partitions);
criterion_main!(benches);
