//! Monty Hall: three doors, one prize, the host always opens a goat door.

use super::{invalid, Experiment};
use crate::monte_carlo::EstimateError;
use rand::Rng;

/// Which strategy wins a game. Exactly one of them does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MontyHall {
    StayWins,
    SwitchWins,
}

impl std::fmt::Display for MontyHall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MontyHall::StayWins => write!(f, "stay_wins"),
            MontyHall::SwitchWins => write!(f, "switch_wins"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MontyHallExperiment {
    doors: u32,
}

impl Default for MontyHallExperiment {
    fn default() -> Self {
        Self { doors: 3 }
    }
}

impl MontyHallExperiment {
    /// Generalised game: the host opens every unpicked goat door but one.
    pub fn with_doors(doors: u32) -> Result<Self, EstimateError> {
        if doors < 3 {
            return Err(invalid(format!("need at least 3 doors, got {doors}")));
        }
        Ok(Self { doors })
    }

    pub fn doors(&self) -> u32 {
        self.doors
    }
}

impl Experiment for MontyHallExperiment {
    type Bucket = MontyHall;

    fn name(&self) -> &'static str {
        "monty_hall"
    }

    fn trial<R: Rng + ?Sized>(&self, rng: &mut R) -> MontyHall {
        let prize = rng.random_range(0..self.doors);
        let pick = rng.random_range(0..self.doors);

        // The host leaves closed the prize door, or a random goat door when
        // the contestant already holds the prize.
        let switch_to = if pick == prize {
            let offset = rng.random_range(1..self.doors);
            (pick + offset) % self.doors
        } else {
            prize
        };

        if switch_to == prize {
            MontyHall::SwitchWins
        } else {
            MontyHall::StayWins
        }
    }

    fn reference(&self) -> Option<Vec<(MontyHall, f64)>> {
        let stay = 1.0 / self.doors as f64;
        Some(vec![
            (MontyHall::StayWins, stay),
            (MontyHall::SwitchWins, 1.0 - stay),
        ])
    }
}
