//! Where the stderr log level and format come from.
//!
//! Precedence, highest first: `-q`/`-v` and `--log-format` on the command
//! line, then `PP_LOG` and `PP_LOG_FORMAT`, then raw `RUST_LOG` directives,
//! then `info` in human format.

use std::fmt;
use std::str::FromStr;

pub const ENV_LOG_LEVEL: &str = "PP_LOG";
pub const ENV_LOG_FORMAT: &str = "PP_LOG_FORMAT";
pub const ENV_RUST_LOG: &str = "RUST_LOG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Human,
    /// One JSON object per line.
    Jsonl,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" | "text" => Ok(Self::Human),
            "jsonl" | "json" => Ok(Self::Jsonl),
            other => Err(format!("unknown log format {other:?} (expected human or jsonl)")),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Human => "human",
            Self::Jsonl => "jsonl",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    Off,
}

impl LogLevel {
    /// Level implied by `-q` and a count of `-v` flags; `None` when neither
    /// was given.
    pub fn from_flags(verbose: u8, quiet: bool) -> Option<Self> {
        match (quiet, verbose) {
            (true, _) => Some(Self::Error),
            (false, 0) => None,
            (false, 1) => Some(Self::Debug),
            (false, _) => Some(Self::Trace),
        }
    }

    /// Directive understood by `tracing_subscriber::EnvFilter`.
    pub fn as_directive(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Off => "off",
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            "off" | "quiet" => Ok(Self::Off),
            other => Err(format!("unknown log level {other:?}")),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_directive())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogConfig {
    pub format: LogFormat,
    pub level: LogLevel,
    /// `RUST_LOG` directives, kept only when nothing more specific set a level.
    pub directives: Option<String>,
}

impl LogConfig {
    /// Read `PP_LOG`, `PP_LOG_FORMAT` and `RUST_LOG`, then apply CLI overrides.
    pub fn from_env(cli_level: Option<LogLevel>, cli_format: Option<LogFormat>) -> Self {
        let var = |name: &str| std::env::var(name).ok();
        Self::resolve(
            cli_level,
            cli_format,
            var(ENV_LOG_LEVEL).as_deref(),
            var(ENV_LOG_FORMAT).as_deref(),
            var(ENV_RUST_LOG).as_deref(),
        )
    }

    /// Combine flag values with raw environment values. Unparseable
    /// environment values are ignored.
    pub fn resolve(
        cli_level: Option<LogLevel>,
        cli_format: Option<LogFormat>,
        pp_log: Option<&str>,
        pp_log_format: Option<&str>,
        rust_log: Option<&str>,
    ) -> Self {
        let env_level = pp_log.and_then(|v| v.parse().ok());
        let level = cli_level.or(env_level);
        let directives = match level {
            Some(_) => None,
            None => rust_log
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_string),
        };

        Self {
            format: cli_format
                .or_else(|| pp_log_format.and_then(|v| v.parse().ok()))
                .unwrap_or_default(),
            level: level.unwrap_or_default(),
            directives,
        }
    }

    /// Filter string handed to the subscriber.
    pub fn filter_directives(&self) -> String {
        self.directives
            .clone()
            .unwrap_or_else(|| self.level.as_directive().to_string())
    }
}
