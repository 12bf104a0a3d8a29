//! Experiment configuration types.
//!
//! Every section carries its own defaults so a file only needs to mention
//! what it overrides.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Complete experiments configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct Experiments {
    pub schema_version: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Seed for the random stream; 0 is a valid seed like any other.
    #[serde(default)]
    pub seed: u64,

    #[serde(default)]
    pub coin: CoinConfig,

    #[serde(default)]
    pub birthday: BirthdayConfig,

    #[serde(default)]
    pub consensus: ConsensusConfig,

    #[serde(default)]
    pub monty_hall: MontyHallConfig,

    #[serde(default)]
    pub autoscaling: AutoscalingConfig,

    #[serde(default)]
    pub classifier: ClassifierConfig,
}

impl Default for Experiments {
    fn default() -> Self {
        Self {
            schema_version: crate::CONFIG_SCHEMA_VERSION.to_string(),
            description: None,
            seed: 0,
            coin: CoinConfig::default(),
            birthday: BirthdayConfig::default(),
            consensus: ConsensusConfig::default(),
            monty_hall: MontyHallConfig::default(),
            autoscaling: AutoscalingConfig::default(),
            classifier: ClassifierConfig::default(),
        }
    }
}

impl Experiments {
    /// Load experiments from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, crate::validate::ValidationError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            crate::validate::ValidationError::IoError(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))
        })?;

        Self::parse_json(&content)
    }

    /// Parse experiments from a JSON string.
    pub fn parse_json(json: &str) -> Result<Self, crate::validate::ValidationError> {
        serde_json::from_str(json).map_err(|e| {
            crate::validate::ValidationError::ParseError(format!("Invalid JSON: {}", e))
        })
    }
}

/// Repeated tosses of a possibly biased coin.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct CoinConfig {
    pub trials: u64,
    /// Probability of heads.
    pub p: f64,
}

impl Default for CoinConfig {
    fn default() -> Self {
        Self {
            trials: 1000,
            p: 0.5,
        }
    }
}

/// Shared birthdays in a group drawn from a calendar of `days`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct BirthdayConfig {
    pub days: u64,
    pub group_size: u64,
    pub samples: u64,
}

impl Default for BirthdayConfig {
    fn default() -> Self {
        Self {
            days: 365,
            group_size: 23,
            samples: 1000,
        }
    }
}

/// Crowd-sourced labelling: how often do independent voters agree?
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct ConsensusConfig {
    pub tasks: u64,
    pub voters: u32,
    pub options: u32,
}

impl Default for ConsensusConfig {
    fn default() -> Self {
        Self {
            tasks: 10_000,
            voters: 3,
            options: 4,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct MontyHallConfig {
    pub games: u64,
}

impl Default for MontyHallConfig {
    fn default() -> Self {
        Self { games: 100_000 }
    }
}

/// CPU utilisation thresholds in percent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct AutoscalingConfig {
    /// Lower bound of the utilisation band where no scaling happens.
    pub noop_min: f64,
    /// Upper bound of the same band.
    pub noop_max: f64,
    /// Utilisation the fleet should settle at after scaling.
    pub maintain: f64,
}

impl Default for AutoscalingConfig {
    fn default() -> Self {
        Self {
            noop_min: 80.0,
            noop_max: 90.0,
            maintain: 85.0,
        }
    }
}

/// How posteriors are combined across classes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum ClassifierMode {
    /// One normalized posterior vector over all classes.
    #[default]
    Joint,
    /// Each of two classes folded on its own.
    Independent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct ClassifierConfig {
    pub mode: ClassifierMode,
    /// Prior probability per class label.
    pub prior: BTreeMap<String, f64>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        let mut prior = BTreeMap::new();
        prior.insert("spam".to_string(), 0.5);
        prior.insert("ham".to_string(), 0.5);
        Self {
            mode: ClassifierMode::Joint,
            prior,
        }
    }
}
