//! JSON Schema generation for CLI output and configuration types.
//!
//! ```bash
//! pp-core schema --list
//! pp-core schema DistributionReport
//! pp-core schema --all
//! ```

use schemars::schema_for;
use serde_json::Value;
use std::collections::BTreeMap;

pub use crate::bayes::{Posterior, PosteriorMode};
pub use crate::config::{ConfigSnapshot, Experiments};
pub use crate::experiments::autoscaling::{
    Range, Recommendation, ScalingContext, ScalingStep,
};
pub use crate::monte_carlo::{BucketReport, DistributionReport};

/// Available schema types with their descriptions.
pub fn available_schemas() -> Vec<(&'static str, &'static str)> {
    vec![
        // Estimation output
        ("DistributionReport", "Estimated distribution over outcome buckets"),
        ("BucketReport", "Count, probability and standard error of one bucket"),
        // Autoscaling
        ("Range", "Inclusive utilisation band"),
        ("ScalingContext", "Inputs to one scaling decision"),
        ("Recommendation", "Instances to add or remove"),
        ("ScalingStep", "One tick of a replayed utilisation series"),
        // Classification
        ("PosteriorMode", "How token evidence is combined (joint, independent)"),
        ("Posterior", "Posterior over class labels after classification"),
        // Configuration
        ("Experiments", "experiments.json configuration file"),
        ("ConfigSnapshot", "Resolved configuration provenance"),
    ]
}

/// Generate JSON Schema for a type by name, or None if the type is unknown.
pub fn generate_schema(type_name: &str) -> Option<Value> {
    let schema = match type_name {
        "DistributionReport" => schema_for!(DistributionReport),
        "BucketReport" => schema_for!(BucketReport),
        "Range" => schema_for!(Range),
        "ScalingContext" => schema_for!(ScalingContext),
        "Recommendation" => schema_for!(Recommendation),
        "ScalingStep" => schema_for!(ScalingStep),
        "PosteriorMode" => schema_for!(PosteriorMode),
        "Posterior" => schema_for!(Posterior<String>),
        "Experiments" => schema_for!(Experiments),
        "ConfigSnapshot" => schema_for!(ConfigSnapshot),
        _ => return None,
    };

    serde_json::to_value(schema).ok()
}

/// Generate all schemas as a map from type name to schema.
pub fn generate_all_schemas() -> BTreeMap<String, Value> {
    available_schemas()
        .into_iter()
        .filter_map(|(name, _)| generate_schema(name).map(|s| (name.to_string(), s)))
        .collect()
}

/// Schema output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaFormat {
    /// Pretty-printed JSON (default)
    Json,
    /// Compact single-line JSON
    JsonCompact,
}

pub fn format_schema(schema: &Value, format: SchemaFormat) -> Result<String, serde_json::Error> {
    match format {
        SchemaFormat::Json => serde_json::to_string_pretty(schema),
        SchemaFormat::JsonCompact => serde_json::to_string(schema),
    }
}
