//! Statistical tests for the Monte Carlo estimator and experiments.
//!
//! Every test runs on a fixed seed. Bands are several standard errors wide,
//! so a failure points at a real bias rather than bad luck.

use pp_core::experiments::{
    self, Birthday, BirthdayExperiment, Coin, CoinExperiment, ConsensusDegree,
    ConsensusExperiment, Experiment, MontyHall, MontyHallExperiment,
};
use pp_core::monte_carlo::{
    estimate, estimate_partitioned, CancelToken, EstimateError, MonteCarloEstimator,
};
use pp_core::reference;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Passes iff `min - epsilon <= value <= max + epsilon`.
fn assert_between(value: f64, min: f64, max: f64, epsilon: f64) {
    assert!(
        value >= min - epsilon && value <= max + epsilon,
        "{value} not in [{min}, {max}] ± {epsilon}"
    );
}

fn run<E: Experiment>(
    experiment: &E,
    trials: u64,
    seed: u64,
) -> pp_core::monte_carlo::Distribution<E::Bucket> {
    let mut rng = StdRng::seed_from_u64(seed);
    experiments::run(&MonteCarloEstimator::new(), experiment, trials, &mut rng)
        .expect("estimation failed")
}

// ============================================================================
// Experiments
// ============================================================================

#[test]
fn coin_toss_is_fair() {
    let dist = run(&CoinExperiment::fair(), 1000, 42);
    assert_eq!(dist.total(), 1000);
    assert_between(dist.probability(&Coin::Heads), 0.5, 0.5, 0.05);
    assert_between(dist.probability(&Coin::Tails), 0.5, 0.5, 0.05);
    assert!((dist.probability(&Coin::Heads) + dist.probability(&Coin::Tails) - 1.0).abs() < 1e-12);
}

#[test]
fn biased_coin_tracks_p() {
    let dist = run(&CoinExperiment::new(0.2).unwrap(), 20_000, 7);
    assert_between(dist.probability(&Coin::Heads), 0.2, 0.2, 0.015);
}

#[test]
fn degenerate_coins_never_flip() {
    let always = run(&CoinExperiment::new(1.0).unwrap(), 500, 3);
    assert_eq!(always.probability(&Coin::Heads), 1.0);
    let never = run(&CoinExperiment::new(0.0).unwrap(), 500, 3);
    assert_eq!(never.probability(&Coin::Tails), 1.0);
}

#[test]
fn birthday_closed_forms_agree() {
    let iterative = reference::birthday_iterative(365, 23).unwrap();
    let lgamma = reference::birthday_lgamma(365, 23).unwrap();
    assert_between(iterative, 0.48, 0.51, 0.0);
    assert_between(lgamma, 0.48, 0.51, 0.0);
    assert!((iterative - lgamma).abs() < 1e-9);
}

#[test]
fn birthday_simulation_matches_closed_form() {
    let experiment = BirthdayExperiment::new(365, 23).unwrap();
    let dist = run(&experiment, 2000, 2024);
    assert_between(dist.probability(&Birthday::Shared), 0.48, 0.51, 0.05);
}

#[test]
fn consensus_three_voters_four_options() {
    let experiment = ConsensusExperiment::new(3, 4).unwrap();
    let tasks = 10_000;
    let dist = run(&experiment, tasks, 1);

    let exact = experiment.exact_distribution().unwrap();
    assert!((exact[3] - 0.0625).abs() < 1e-12);
    assert!((exact[2] - 0.5625).abs() < 1e-12);
    assert!((exact[1] - 0.375).abs() < 1e-12);

    assert_between(dist.probability(&ConsensusDegree(3)), 0.06, 0.08, 0.01);
    assert_between(dist.probability(&ConsensusDegree(1)), 0.35, 0.38, 0.01);

    let p2 = dist.probability(&ConsensusDegree(2));
    let band = 4.0 * dist.std_error(&ConsensusDegree(2));
    assert_between(p2, exact[2], exact[2], band);
    assert_eq!(dist.count(&ConsensusDegree(0)), 0);
}

#[test]
fn consensus_estimate_converges_to_reference() {
    let experiment = ConsensusExperiment::new(6, 3).unwrap();
    let dist = run(&experiment, 50_000, 9);
    let reference = experiment.reference().unwrap();
    let deviation = dist.max_abs_deviation(reference.iter().map(|(b, p)| (b, *p)));
    assert!(deviation < 0.015, "max deviation {deviation}");
}

#[test]
fn monty_hall_switching_wins_two_thirds() {
    let dist = run(&MontyHallExperiment::default(), 100_000, 5);
    assert_between(dist.probability(&MontyHall::StayWins), 1.0 / 3.0, 1.0 / 3.0, 0.01);
    assert_between(dist.probability(&MontyHall::SwitchWins), 2.0 / 3.0, 2.0 / 3.0, 0.01);
}

#[test]
fn monty_hall_more_doors_favours_switching() {
    let experiment = MontyHallExperiment::with_doors(10).unwrap();
    let dist = run(&experiment, 50_000, 5);
    assert_between(dist.probability(&MontyHall::SwitchWins), 0.9, 0.9, 0.01);
}

// ============================================================================
// Estimator behaviour
// ============================================================================

#[test]
fn more_trials_do_not_increase_error() {
    let experiment = CoinExperiment::fair();
    let mean_abs_deviation = |trials: u64| -> f64 {
        let seeds = 0..20u64;
        let total: f64 = seeds
            .clone()
            .map(|seed| (run(&experiment, trials, seed).probability(&Coin::Heads) - 0.5).abs())
            .sum();
        total / seeds.count() as f64
    };

    let small = mean_abs_deviation(1_000);
    let large = mean_abs_deviation(10_000);
    assert!(large <= small, "10x trials: {large} > {small}");
}

#[test]
fn same_seed_same_distribution() {
    let experiment = ConsensusExperiment::new(5, 4).unwrap();
    assert_eq!(run(&experiment, 3000, 77), run(&experiment, 3000, 77));
}

#[test]
fn partitioned_runs_are_reproducible() {
    let experiment = BirthdayExperiment::new(365, 30).unwrap();
    let a = estimate_partitioned(5000, 4, 11, |rng| experiment.trial(rng)).unwrap();
    let b = estimate_partitioned(5000, 4, 11, |rng| experiment.trial(rng)).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.total(), 5000);

    let exact = experiment.collision_probability();
    let band = 4.0 * a.std_error(&Birthday::Shared);
    assert_between(a.probability(&Birthday::Shared), exact, exact, band);
}

#[test]
fn closure_trials_work_without_the_trait() {
    let mut rng = StdRng::seed_from_u64(8);
    let dist = estimate(6000, &mut rng, |r| rand::Rng::random_range(r, 1..=6u8)).unwrap();
    for face in 1..=6u8 {
        assert_between(dist.probability(&face), 1.0 / 6.0, 1.0 / 6.0, 0.025);
    }
    assert_eq!(dist.probability(&7), 0.0);
}

#[test]
fn cancelled_before_start_reports_zero_completed() {
    let token = CancelToken::new();
    token.cancel();
    let estimator = MonteCarloEstimator::new().with_cancel(token);
    let mut rng = StdRng::seed_from_u64(1);
    let err = experiments::run(&estimator, &CoinExperiment::fair(), 100, &mut rng).unwrap_err();
    assert_eq!(err, EstimateError::Cancelled { completed: 0 });
}

#[test]
fn cancel_mid_run_stops_between_trials() {
    let token = CancelToken::new();
    let estimator = MonteCarloEstimator::new().with_cancel(token.clone());
    let mut rng = StdRng::seed_from_u64(1);
    let mut seen = 0u64;
    let err = estimator
        .run(1000, &mut rng, |_| {
            seen += 1;
            if seen == 10 {
                token.cancel();
            }
            seen % 2
        })
        .unwrap_err();
    assert_eq!(err, EstimateError::Cancelled { completed: 10 });
}

#[test]
fn binomial_reference_values() {
    assert_eq!(reference::binomial_pmf(1, 1, 0.5).unwrap(), 0.5);
    for n in 1..=30u64 {
        for i in 0..=20 {
            let p = 0.05 * i as f64;
            assert_eq!(reference::binomial_pmf(n, n, p).unwrap(), p.powi(n as i32));
        }
    }
    assert!(reference::binomial_pmf(3, 4, 0.5).is_err());
    assert!(reference::binomial_pmf(3, 1, 1.5).is_err());
}
