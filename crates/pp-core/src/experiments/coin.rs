//! Coin toss.

use super::{invalid, Experiment};
use crate::monte_carlo::EstimateError;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Coin {
    Heads,
    Tails,
}

impl std::fmt::Display for Coin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Coin::Heads => write!(f, "heads"),
            Coin::Tails => write!(f, "tails"),
        }
    }
}

/// Bernoulli(p) toss where heads has probability `p`.
#[derive(Debug, Clone, Copy)]
pub struct CoinExperiment {
    p: f64,
}

impl CoinExperiment {
    pub fn new(p: f64) -> Result<Self, EstimateError> {
        if !(0.0..=1.0).contains(&p) {
            return Err(invalid(format!("p must be in [0, 1], got {p}")));
        }
        Ok(Self { p })
    }

    pub fn fair() -> Self {
        Self { p: 0.5 }
    }

    pub fn p(&self) -> f64 {
        self.p
    }
}

impl Experiment for CoinExperiment {
    type Bucket = Coin;

    fn name(&self) -> &'static str {
        "coin"
    }

    fn trial<R: Rng + ?Sized>(&self, rng: &mut R) -> Coin {
        // random() is in [0, 1), so p = 1 always lands heads and p = 0 never does.
        if rng.random::<f64>() < self.p {
            Coin::Heads
        } else {
            Coin::Tails
        }
    }

    fn reference(&self) -> Option<Vec<(Coin, f64)>> {
        Some(vec![(Coin::Heads, self.p), (Coin::Tails, 1.0 - self.p)])
    }
}
