//! Configuration validation errors and semantic validation.

use crate::experiments::{
    AutoscalingConfig, BirthdayConfig, ClassifierConfig, CoinConfig, ConsensusConfig, Experiments,
};
use thiserror::Error;

/// How far the class priors may sum from one before they are rejected.
pub const PRIOR_SUM_TOLERANCE: f64 = 1e-6;

/// Validation result type.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Configuration validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Semantic validation failed: {0}")]
    SemanticError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Version mismatch: expected {expected}, got {actual}")]
    VersionMismatch { expected: String, actual: String },
}

impl ValidationError {
    /// Error code for structured error reporting.
    pub fn code(&self) -> u32 {
        match self {
            ValidationError::IoError(_) => 60,
            ValidationError::ParseError(_) => 61,
            ValidationError::SemanticError(_) => 63,
            ValidationError::InvalidValue { .. } => 65,
            ValidationError::VersionMismatch { .. } => 66,
        }
    }
}

/// Validate experiments configuration semantically.
pub fn validate_experiments(experiments: &Experiments) -> ValidationResult<()> {
    if experiments.schema_version != crate::CONFIG_SCHEMA_VERSION {
        return Err(ValidationError::VersionMismatch {
            expected: crate::CONFIG_SCHEMA_VERSION.to_string(),
            actual: experiments.schema_version.clone(),
        });
    }

    validate_coin(&experiments.coin)?;
    validate_birthday(&experiments.birthday)?;
    validate_consensus(&experiments.consensus)?;
    require_positive("monty_hall.games", experiments.monty_hall.games)?;
    validate_autoscaling(&experiments.autoscaling)?;
    validate_classifier(&experiments.classifier)?;

    Ok(())
}

fn validate_coin(coin: &CoinConfig) -> ValidationResult<()> {
    require_positive("coin.trials", coin.trials)?;
    require_probability("coin.p", coin.p)
}

fn validate_birthday(birthday: &BirthdayConfig) -> ValidationResult<()> {
    require_positive("birthday.days", birthday.days)?;
    require_positive("birthday.samples", birthday.samples)
}

fn validate_consensus(consensus: &ConsensusConfig) -> ValidationResult<()> {
    require_positive("consensus.tasks", consensus.tasks)?;
    require_positive("consensus.voters", u64::from(consensus.voters))?;
    require_positive("consensus.options", u64::from(consensus.options))
}

fn validate_autoscaling(autoscaling: &AutoscalingConfig) -> ValidationResult<()> {
    for (field, value) in [
        ("autoscaling.noop_min", autoscaling.noop_min),
        ("autoscaling.noop_max", autoscaling.noop_max),
        ("autoscaling.maintain", autoscaling.maintain),
    ] {
        if !value.is_finite() {
            return Err(ValidationError::InvalidValue {
                field: field.to_string(),
                message: format!("Must be finite, got {}", value),
            });
        }
    }

    if autoscaling.maintain <= 0.0 {
        return Err(ValidationError::InvalidValue {
            field: "autoscaling.maintain".to_string(),
            message: format!("Must be positive, got {}", autoscaling.maintain),
        });
    }

    if autoscaling.noop_min > autoscaling.noop_max {
        return Err(ValidationError::SemanticError(format!(
            "autoscaling.noop_min ({}) must not exceed autoscaling.noop_max ({})",
            autoscaling.noop_min, autoscaling.noop_max
        )));
    }

    Ok(())
}

fn validate_classifier(classifier: &ClassifierConfig) -> ValidationResult<()> {
    if classifier.prior.len() < 2 {
        return Err(ValidationError::SemanticError(format!(
            "classifier.prior needs at least two classes, got {}",
            classifier.prior.len()
        )));
    }

    for (label, p) in &classifier.prior {
        if label.is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "classifier.prior".to_string(),
                message: "Class labels must not be empty".to_string(),
            });
        }
        require_probability(&format!("classifier.prior.{}", label), *p)?;
    }

    let total: f64 = classifier.prior.values().sum();
    if (total - 1.0).abs() > PRIOR_SUM_TOLERANCE {
        return Err(ValidationError::SemanticError(format!(
            "classifier.prior must sum to 1, got {}",
            total
        )));
    }

    Ok(())
}

fn require_positive(field: &str, value: u64) -> ValidationResult<()> {
    if value == 0 {
        return Err(ValidationError::InvalidValue {
            field: field.to_string(),
            message: "Must be positive, got 0".to_string(),
        });
    }
    Ok(())
}

fn require_probability(field: &str, value: f64) -> ValidationResult<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ValidationError::InvalidValue {
            field: field.to_string(),
            message: format!("Must be in [0, 1], got {}", value),
        });
    }
    Ok(())
}
