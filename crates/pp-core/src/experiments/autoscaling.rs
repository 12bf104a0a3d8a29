//! CPU-based autoscaling heuristic.
//!
//! While average utilisation stays inside the no-op band nothing changes.
//! Outside it, the fleet is resized so the same total load would run at the
//! `maintain` utilisation:
//!
//! ```text
//! delta = ceil(instances · utilisation / maintain − instances)
//! ```
//!
//! All utilisation values are percentages.

use crate::reference::ReferenceError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Inclusive utilisation band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub fn new(min: f64, max: f64) -> Result<Self, ReferenceError> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(ReferenceError::InvalidArgument(format!(
                "invalid range [{min}, {max}]"
            )));
        }
        Ok(Self { min, max })
    }

    /// True iff `min <= v <= max`.
    pub fn contains(&self, v: f64) -> bool {
        self.min <= v && v <= self.max
    }
}

/// Instance count change that brings `utilisation` back to `maintain`.
pub fn scale_instances(
    instances: f64,
    utilisation: f64,
    maintain: f64,
) -> Result<i64, ReferenceError> {
    if maintain.is_nan() || maintain <= 0.0 {
        return Err(ReferenceError::InvalidArgument(format!(
            "maintain must be positive, got {maintain}"
        )));
    }
    if !instances.is_finite() || !utilisation.is_finite() {
        return Err(ReferenceError::InvalidArgument(
            "instances and utilisation must be finite".to_string(),
        ));
    }
    let candidate = instances * utilisation / maintain;
    Ok((candidate - instances).ceil() as i64)
}

/// Inputs to one scaling decision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ScalingContext {
    pub noop_range: Range,
    pub maintain: f64,
    pub utilisation: f64,
    pub instances: u32,
}

/// Change in instance count for `ctx`; zero inside the no-op band.
pub fn cpu_scale(ctx: &ScalingContext) -> Result<i64, ReferenceError> {
    if ctx.noop_range.contains(ctx.utilisation) {
        return Ok(0);
    }
    scale_instances(f64::from(ctx.instances), ctx.utilisation, ctx.maintain)
}

/// Non-negative split of a signed delta. At most one side is non-zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Recommendation {
    pub scale_up: u64,
    pub scale_down: u64,
}

impl Recommendation {
    pub fn from_delta(delta: i64) -> Self {
        if delta > 0 {
            Self {
                scale_up: delta.unsigned_abs(),
                scale_down: 0,
            }
        } else {
            Self {
                scale_up: 0,
                scale_down: delta.unsigned_abs(),
            }
        }
    }
}

/// One tick of a replayed utilisation series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ScalingStep {
    pub utilisation: f64,
    pub change: i64,
    /// Fleet size after applying `change`.
    pub instances: u32,
}

/// Apply [`cpu_scale`] to each observed utilisation in turn, carrying the
/// fleet size forward.
pub fn replay(
    mut ctx: ScalingContext,
    utilisations: &[f64],
) -> Result<Vec<ScalingStep>, ReferenceError> {
    let mut steps = Vec::with_capacity(utilisations.len());
    for &utilisation in utilisations {
        if utilisation < 0.0 {
            return Err(ReferenceError::InvalidArgument(format!(
                "utilisation must be non-negative, got {utilisation}"
            )));
        }
        ctx.utilisation = utilisation;
        let change = cpu_scale(&ctx)?;
        let next = i64::from(ctx.instances).saturating_add(change).max(0);
        ctx.instances = u32::try_from(next).unwrap_or(u32::MAX);
        steps.push(ScalingStep {
            utilisation,
            change,
            instances: ctx.instances,
        });
    }
    Ok(steps)
}
