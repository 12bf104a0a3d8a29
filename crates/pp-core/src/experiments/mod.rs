//! Concrete experiments built on the Monte Carlo estimator.
//!
//! Each experiment owns its parameters, validates them once at construction
//! and exposes a single-trial function plus, where one exists, the exact
//! distribution the estimate should converge to.

pub mod autoscaling;
pub mod birthday;
pub mod coin;
pub mod consensus;
pub mod monty_hall;

pub use autoscaling::{cpu_scale, scale_instances, Range, Recommendation, ScalingContext};
pub use birthday::{Birthday, BirthdayExperiment};
pub use coin::{Coin, CoinExperiment};
pub use consensus::{ConsensusDegree, ConsensusExperiment};
pub use monty_hall::{MontyHall, MontyHallExperiment};

use crate::monte_carlo::{Distribution, EstimateError, MonteCarloEstimator};
use rand::Rng;
use std::fmt::Display;

/// A repeatable random trial with a closed set of outcomes.
pub trait Experiment {
    type Bucket: Ord + Clone + Display;

    /// Short name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Run one trial.
    fn trial<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Bucket;

    /// Exact probability of each bucket, when known.
    fn reference(&self) -> Option<Vec<(Self::Bucket, f64)>> {
        None
    }
}

/// Estimate `experiment` over `trials` runs on `rng`.
pub fn run<E, R>(
    estimator: &MonteCarloEstimator,
    experiment: &E,
    trials: u64,
    rng: &mut R,
) -> Result<Distribution<E::Bucket>, EstimateError>
where
    E: Experiment,
    R: Rng + ?Sized,
{
    tracing::debug!(experiment = experiment.name(), trials, "running experiment");
    estimator.run(trials, rng, |r| experiment.trial(r))
}

pub(crate) fn invalid(message: impl Into<String>) -> EstimateError {
    EstimateError::InvalidArgument(message.into())
}
