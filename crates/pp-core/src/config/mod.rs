//! Configuration loading and validation for pp-core.
//!
//! This module handles:
//! - Loading experiments.json
//! - Config resolution order (CLI > env > XDG > defaults)
//! - Semantic validation (probabilities, positive counts, prior classes)
//! - A config snapshot for the `check` command

pub use pp_config::experiments;
pub use pp_config::experiments::{ClassifierMode, Experiments};
pub use pp_config::resolve::ConfigSource;
pub use pp_config::validate::ValidationError;
pub use pp_config::CONFIG_SCHEMA_VERSION;

use pp_config::resolve::resolve_config;
use pp_config::validate::validate_experiments;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during config loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Invalid JSON in config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Semantic validation failed: {0}")]
    ValidationError(#[from] ValidationError),

    #[error("I/O error reading {path}: {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Schema version mismatch: expected {expected}, got {actual}")]
    VersionMismatch { expected: String, actual: String },
}

/// Resolved configuration with provenance information.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub experiments: Experiments,
    /// Path to the experiments file (None if using defaults).
    pub path: Option<PathBuf>,
    /// SHA-256 of the file content (None if using defaults).
    pub hash: Option<String>,
    pub source: ConfigSource,
}

impl ResolvedConfig {
    pub fn snapshot(&self) -> ConfigSnapshot {
        ConfigSnapshot {
            path: self.path.clone(),
            hash: self.hash.clone(),
            source: self.source.to_string(),
            schema_version: self.experiments.schema_version.clone(),
            seed: self.experiments.seed,
        }
    }
}

/// What the `check` command reports about the loaded configuration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ConfigSnapshot {
    pub path: Option<PathBuf>,
    pub hash: Option<String>,
    pub source: String,
    pub schema_version: String,
    pub seed: u64,
}

/// Configuration resolution options.
#[derive(Debug, Default)]
pub struct ConfigOptions {
    /// Explicit config directory.
    pub config_dir: Option<PathBuf>,
    /// Explicit experiments file path (highest priority).
    pub experiments_path: Option<PathBuf>,
}

/// Load configuration with the standard resolution order.
///
/// Resolution order (highest to lowest priority):
/// 1. Explicit file (`--experiments`); must exist
/// 2. Explicit directory (`--config`)
/// 3. Environment variable (PROBABILITY_PLAYGROUND_CONFIG)
/// 4. XDG config home (~/.config/probability-playground/)
/// 5. Built-in defaults
pub fn load_config(options: &ConfigOptions) -> Result<ResolvedConfig, ConfigError> {
    if let Some(path) = &options.experiments_path {
        if !path.exists() {
            return Err(ConfigError::NotFound { path: path.clone() });
        }
    }

    let paths = resolve_config(
        options.experiments_path.as_deref(),
        options.config_dir.as_deref(),
    );

    let resolved = match paths.experiments {
        Some(path) => {
            let (experiments, hash) = load_experiments_from_file(&path)?;
            ResolvedConfig {
                experiments,
                path: Some(path),
                hash: Some(hash),
                source: paths.source,
            }
        }
        None => ResolvedConfig {
            experiments: Experiments::default(),
            path: None,
            hash: None,
            source: paths.source,
        },
    };

    validate_experiments(&resolved.experiments)?;
    Ok(resolved)
}

/// Load experiments from a specific file.
fn load_experiments_from_file(path: &Path) -> Result<(Experiments, String), ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let hash = compute_hash(&content);

    let experiments: Experiments =
        serde_json::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

    if experiments.schema_version != CONFIG_SCHEMA_VERSION {
        return Err(ConfigError::VersionMismatch {
            expected: CONFIG_SCHEMA_VERSION.to_string(),
            actual: experiments.schema_version.clone(),
        });
    }

    Ok((experiments, hash))
}

fn compute_hash(content: &str) -> String {
    hex::encode(Sha256::digest(content.as_bytes()))
}
