//! Stable names for what gets logged: run stages, event identifiers and the
//! per-run context every event carries.

use serde::Serialize;

/// Part of a run an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Init,
    Simulate,
    Train,
    Classify,
    Report,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Init => "init",
            Stage::Simulate => "simulate",
            Stage::Train => "train",
            Stage::Classify => "classify",
            Stage::Report => "report",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Values of the `event` field. Scripts filter on these, so renaming one is a
/// breaking change.
pub mod event_names {
    pub const RUN_STARTED: &str = "run.started";
    pub const RUN_FINISHED: &str = "run.finished";

    pub const SIMULATE_STARTED: &str = "simulate.started";
    pub const SIMULATE_CANCELLED: &str = "simulate.cancelled";
    pub const SIMULATE_FINISHED: &str = "simulate.finished";

    pub const TRAIN_FINISHED: &str = "train.finished";

    pub const CLASSIFY_STARTED: &str = "classify.started";
    pub const CLASSIFY_TOKEN_SKIPPED: &str = "classify.token_skipped";
    pub const CLASSIFY_FINISHED: &str = "classify.finished";

    pub const CONFIG_LOADED: &str = "config.loaded";
    pub const CONFIG_DEFAULT_USED: &str = "config.default_used";
    pub const CONFIG_ERROR: &str = "config.error";

    pub const SIGNAL_HANDLER_FAILED: &str = "signal.handler_failed";
    pub const INTERNAL_ERROR: &str = "internal_error";
}

/// Identifiers attached to every event of one `pp-core` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogContext {
    pub run_id: String,
    pub host_id: String,
    /// Set once a command knows which experiment it is running.
    pub experiment: Option<String>,
}

impl LogContext {
    pub fn new(run_id: impl Into<String>, host_id: impl Into<String>) -> Self {
        Self {
            run_id: run_id.into(),
            host_id: host_id.into(),
            experiment: None,
        }
    }

    pub fn with_experiment(self, experiment: impl Into<String>) -> Self {
        Self {
            experiment: Some(experiment.into()),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_display_matches_json() {
        for stage in [
            Stage::Init,
            Stage::Simulate,
            Stage::Train,
            Stage::Classify,
            Stage::Report,
        ] {
            let json = serde_json::to_string(&stage).unwrap();
            assert_eq!(json, format!("\"{stage}\""));
        }
    }

    #[test]
    fn experiment_is_scoped_to_the_clone() {
        let run = LogContext::new("run-1", "host-1");
        let coin = run.clone().with_experiment("coin");
        assert_eq!(run.experiment, None);
        assert_eq!(coin.experiment.as_deref(), Some("coin"));
        assert_eq!(coin.run_id, run.run_id);
    }
}
