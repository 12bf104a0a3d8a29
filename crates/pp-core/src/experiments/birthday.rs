//! Birthday problem: does a group of `k` people drawn from `n` equally likely
//! days contain a shared birthday?

use super::{invalid, Experiment};
use crate::monte_carlo::EstimateError;
use pp_math::birthday::{collision_probability_iterative, collision_probability_lgamma};
use rand::Rng;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Birthday {
    Shared,
    Distinct,
}

impl std::fmt::Display for Birthday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Birthday::Shared => write!(f, "shared"),
            Birthday::Distinct => write!(f, "distinct"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BirthdayExperiment {
    days: u64,
    group_size: u64,
}

impl BirthdayExperiment {
    pub fn new(days: u64, group_size: u64) -> Result<Self, EstimateError> {
        if days == 0 {
            return Err(invalid("days must be positive"));
        }
        Ok(Self { days, group_size })
    }

    pub fn days(&self) -> u64 {
        self.days
    }

    pub fn group_size(&self) -> u64 {
        self.group_size
    }

    /// Same calendar, different group size.
    pub fn with_group_size(self, group_size: u64) -> Self {
        Self { group_size, ..self }
    }

    /// Closed-form collision probability (log-gamma form).
    pub fn collision_probability(&self) -> f64 {
        collision_probability_lgamma(self.days, self.group_size)
    }

    /// Closed-form collision probability (iterative form).
    pub fn collision_probability_iterative(&self) -> f64 {
        collision_probability_iterative(self.days, self.group_size)
    }
}

impl Experiment for BirthdayExperiment {
    type Bucket = Birthday;

    fn name(&self) -> &'static str {
        "birthday"
    }

    /// Draws birthdays one at a time and stops at the first repeat.
    fn trial<R: Rng + ?Sized>(&self, rng: &mut R) -> Birthday {
        let mut seen = HashSet::with_capacity(self.group_size.min(self.days) as usize);
        for _ in 0..self.group_size {
            if !seen.insert(rng.random_range(0..self.days)) {
                return Birthday::Shared;
            }
        }
        Birthday::Distinct
    }

    fn reference(&self) -> Option<Vec<(Birthday, f64)>> {
        let p = self.collision_probability();
        Some(vec![(Birthday::Shared, p), (Birthday::Distinct, 1.0 - p)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn empty_calendar_rejected() {
        assert!(BirthdayExperiment::new(0, 5).is_err());
    }

    #[test]
    fn tiny_groups_never_collide() {
        let mut rng = StdRng::seed_from_u64(5);
        for k in 0..=1 {
            let e = BirthdayExperiment::new(365, k).unwrap();
            for _ in 0..50 {
                assert_eq!(e.trial(&mut rng), Birthday::Distinct);
            }
        }
    }

    #[test]
    fn pigeonhole_always_collides() {
        let mut rng = StdRng::seed_from_u64(5);
        let e = BirthdayExperiment::new(7, 8).unwrap();
        for _ in 0..50 {
            assert_eq!(e.trial(&mut rng), Birthday::Shared);
        }
        assert_eq!(e.collision_probability(), 1.0);
    }

    #[test]
    fn closed_forms_agree() {
        let e = BirthdayExperiment::new(365, 23).unwrap();
        assert!((e.collision_probability() - e.collision_probability_iterative()).abs() < 1e-9);
    }
}
