//! Probability playground configuration loading and validation.
//!
//! This crate provides:
//! - Typed Rust structs for experiments.json
//! - Config resolution (CLI → env → XDG → defaults)
//! - Semantic validation

pub mod experiments;
pub mod resolve;
pub mod validate;

pub use experiments::Experiments;
pub use resolve::{resolve_config, ConfigPaths, ConfigSource};
pub use validate::{
    validate_experiments, ValidationError, ValidationResult, PRIOR_SUM_TOLERANCE,
};

/// Schema version for configuration files.
pub const CONFIG_SCHEMA_VERSION: &str = "1.0.0";
