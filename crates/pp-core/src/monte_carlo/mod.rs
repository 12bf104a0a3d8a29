//! Monte Carlo estimation of outcome distributions.
//!
//! A trial is a closure that consumes randomness from a caller-owned stream
//! and returns exactly one outcome bucket. The estimator runs it a fixed
//! number of times, tallies buckets and divides by the trial count:
//!
//! ```text
//! P̂(b) = #{trials landing in b} / trials
//! ```
//!
//! The estimator holds no seed state. Reproducibility comes from seeding the
//! stream (`StdRng::seed_from_u64`) or from [`StreamSeeds`] when the trials
//! are split into partitions.

pub mod cancel;
pub mod distribution;
pub mod streams;
pub mod sweep;

pub use cancel::CancelToken;
pub use distribution::{BucketReport, Distribution, DistributionReport, OutcomeCounts};
pub use streams::{partition_sizes, StreamSeeds};
pub use sweep::{sweep, SweepPoint};

use rand::rngs::StdRng;
use rand::Rng;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EstimateError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("estimation cancelled after {completed} trials")]
    Cancelled { completed: u64 },
}

/// Runs trials and tallies their buckets, optionally under a cancel token.
#[derive(Debug, Clone, Default)]
pub struct MonteCarloEstimator {
    cancel: Option<CancelToken>,
}

impl MonteCarloEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop between trials once `token` is cancelled.
    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelToken::is_cancelled)
    }

    /// Run `sample` exactly `trials` times on `rng`.
    pub fn run<B, R, F>(
        &self,
        trials: u64,
        rng: &mut R,
        sample: F,
    ) -> Result<Distribution<B>, EstimateError>
    where
        B: Ord,
        R: Rng + ?Sized,
        F: FnMut(&mut R) -> B,
    {
        if trials == 0 {
            return Err(EstimateError::InvalidArgument(
                "trials must be positive".to_string(),
            ));
        }

        tracing::debug!(trials, "estimation started");
        let mut counts = OutcomeCounts::new();
        self.tally(trials, rng, sample, &mut counts, 0)?;
        tracing::debug!(trials, buckets = counts.buckets(), "estimation finished");

        counts
            .into_distribution()
            .ok_or_else(|| EstimateError::InvalidArgument("no trials were run".to_string()))
    }

    /// Split `trials` across `partitions` independent streams derived from
    /// `master_seed` and merge the tallies.
    ///
    /// Partitions run one after another; the result depends only on
    /// `(trials, partitions, master_seed)` and the trial function.
    pub fn run_partitioned<B, F>(
        &self,
        trials: u64,
        partitions: u64,
        master_seed: u64,
        mut sample: F,
    ) -> Result<Distribution<B>, EstimateError>
    where
        B: Ord,
        F: FnMut(&mut StdRng) -> B,
    {
        if trials == 0 {
            return Err(EstimateError::InvalidArgument(
                "trials must be positive".to_string(),
            ));
        }
        if partitions == 0 {
            return Err(EstimateError::InvalidArgument(
                "partitions must be positive".to_string(),
            ));
        }

        let seeds = StreamSeeds::new(master_seed);
        let mut merged = OutcomeCounts::new();
        for (index, size) in partition_sizes(trials, partitions).into_iter().enumerate() {
            if size == 0 {
                continue;
            }
            let mut rng = seeds.stream(index as u64);
            let mut part = OutcomeCounts::new();
            self.tally(size, &mut rng, &mut sample, &mut part, merged.total())?;
            tracing::trace!(partition = index, trials = size, "partition finished");
            merged.merge(part);
        }

        merged
            .into_distribution()
            .ok_or_else(|| EstimateError::InvalidArgument("no trials were run".to_string()))
    }

    fn tally<B, R, F>(
        &self,
        trials: u64,
        rng: &mut R,
        mut sample: F,
        counts: &mut OutcomeCounts<B>,
        already_completed: u64,
    ) -> Result<(), EstimateError>
    where
        B: Ord,
        R: Rng + ?Sized,
        F: FnMut(&mut R) -> B,
    {
        for _ in 0..trials {
            if self.is_cancelled() {
                let completed = already_completed + counts.total();
                tracing::info!(completed, "estimation cancelled");
                return Err(EstimateError::Cancelled { completed });
            }
            counts.record(sample(rng));
        }
        Ok(())
    }
}

/// Estimate a distribution from `trials` runs of `sample` on `rng`.
///
/// `trials` must be positive. Every bucket hit at least once appears in the
/// result with `count / trials`; others read as zero.
pub fn estimate<B, R, F>(
    trials: u64,
    rng: &mut R,
    sample: F,
) -> Result<Distribution<B>, EstimateError>
where
    B: Ord,
    R: Rng + ?Sized,
    F: FnMut(&mut R) -> B,
{
    MonteCarloEstimator::new().run(trials, rng, sample)
}

/// [`MonteCarloEstimator::run_partitioned`] without cancellation.
pub fn estimate_partitioned<B, F>(
    trials: u64,
    partitions: u64,
    master_seed: u64,
    sample: F,
) -> Result<Distribution<B>, EstimateError>
where
    B: Ord,
    F: FnMut(&mut StdRng) -> B,
{
    MonteCarloEstimator::new().run_partitioned(trials, partitions, master_seed, sample)
}
