//! Crowd consensus: `voters` workers independently pick one of `options`
//! answers uniformly at random. The consensus degree of a task is the size of
//! the largest group that agreed; which answer won is not recorded.

use super::{invalid, Experiment};
use crate::monte_carlo::EstimateError;
use pp_math::consensus::degree_distribution;
use rand::Rng;

/// Largest number of voters agreeing on a single option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ConsensusDegree(pub u32);

impl std::fmt::Display for ConsensusDegree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Largest crowd for which the exact degree distribution is computed.
pub const MAX_EXACT_VOTERS: u32 = 500;

#[derive(Debug, Clone, Copy)]
pub struct ConsensusExperiment {
    voters: u32,
    options: u32,
}

impl ConsensusExperiment {
    pub fn new(voters: u32, options: u32) -> Result<Self, EstimateError> {
        if voters == 0 {
            return Err(invalid("voters must be positive"));
        }
        if options == 0 {
            return Err(invalid("options must be positive"));
        }
        Ok(Self { voters, options })
    }

    pub fn voters(&self) -> u32 {
        self.voters
    }

    pub fn options(&self) -> u32 {
        self.options
    }

    /// Exact probability of each degree, indexed `0..=voters`.
    ///
    /// `None` above [`MAX_EXACT_VOTERS`]; the estimate alone is reported there.
    pub fn exact_distribution(&self) -> Option<Vec<f64>> {
        if self.voters > MAX_EXACT_VOTERS {
            return None;
        }
        degree_distribution(u64::from(self.voters), u64::from(self.options))
    }
}

impl Experiment for ConsensusExperiment {
    type Bucket = ConsensusDegree;

    fn name(&self) -> &'static str {
        "consensus"
    }

    fn trial<R: Rng + ?Sized>(&self, rng: &mut R) -> ConsensusDegree {
        let mut votes = vec![0u32; self.options as usize];
        for _ in 0..self.voters {
            votes[rng.random_range(0..self.options as usize)] += 1;
        }
        ConsensusDegree(votes.into_iter().max().unwrap_or(0))
    }

    fn reference(&self) -> Option<Vec<(ConsensusDegree, f64)>> {
        let exact = self.exact_distribution()?;
        Some(
            exact
                .into_iter()
                .enumerate()
                .filter(|(_, p)| *p > 0.0)
                .map(|(d, p)| (ConsensusDegree(d as u32), p))
                .collect(),
        )
    }
}
