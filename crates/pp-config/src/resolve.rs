//! Configuration resolution and path discovery.
//!
//! Resolution order: CLI arguments → environment variables → XDG paths → defaults.

use std::path::{Path, PathBuf};

/// Discovered configuration file path.
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    /// Path to experiments.json (or None if not found).
    pub experiments: Option<PathBuf>,

    /// Source of the experiments config (for diagnostics).
    pub source: ConfigSource,
}

/// Where a configuration file was found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicitly provided via CLI argument.
    CliArgument,

    /// Set via environment variable.
    Environment,

    /// Found in XDG config directory.
    XdgConfig,

    /// Using built-in defaults.
    #[default]
    BuiltinDefault,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::CliArgument => write!(f, "CLI argument"),
            ConfigSource::Environment => write!(f, "environment variable"),
            ConfigSource::XdgConfig => write!(f, "XDG config"),
            ConfigSource::BuiltinDefault => write!(f, "builtin default"),
        }
    }
}

/// Environment variable naming a config directory.
pub const ENV_CONFIG_DIR: &str = "PROBABILITY_PLAYGROUND_CONFIG";

/// Standard config file name.
pub const EXPERIMENTS_FILENAME: &str = "experiments.json";

/// Application name for XDG directories.
const APP_NAME: &str = "probability-playground";

/// Resolve the experiments config path.
///
/// Resolution order:
/// 1. Explicit CLI file (if it exists)
/// 2. Explicit CLI directory + filename
/// 3. PROBABILITY_PLAYGROUND_CONFIG environment variable + filename
/// 4. XDG config directory (~/.config/probability-playground/)
/// 5. Built-in defaults (None)
///
/// Explicit paths that do not exist are skipped here; callers that want a
/// hard failure for a missing explicit file check it themselves.
pub fn resolve_config(cli_file: Option<&Path>, cli_dir: Option<&Path>) -> ConfigPaths {
    // 1. CLI file
    if let Some(path) = cli_file {
        if path.is_file() {
            return found(path.to_path_buf(), ConfigSource::CliArgument);
        }
    }

    // 2. CLI directory
    if let Some(dir) = cli_dir {
        let path = dir.join(EXPERIMENTS_FILENAME);
        if path.is_file() {
            return found(path, ConfigSource::CliArgument);
        }
    }

    // 3. Environment variable (config dir)
    if let Ok(config_dir) = std::env::var(ENV_CONFIG_DIR) {
        let path = PathBuf::from(config_dir).join(EXPERIMENTS_FILENAME);
        if path.is_file() {
            return found(path, ConfigSource::Environment);
        }
    }

    // 4. XDG config directory
    if let Some(dir) = xdg_config_dir() {
        let path = dir.join(EXPERIMENTS_FILENAME);
        if path.is_file() {
            return found(path, ConfigSource::XdgConfig);
        }
    }

    // 5. Built-in default
    ConfigPaths::default()
}

fn found(path: PathBuf, source: ConfigSource) -> ConfigPaths {
    ConfigPaths {
        experiments: Some(path),
        source,
    }
}

/// Get the XDG config directory for the playground.
pub fn xdg_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_NAME))
}
