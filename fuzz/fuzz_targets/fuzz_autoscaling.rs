//! Fuzz target for the autoscaling heuristic.
//!
//! Arbitrary floats must produce a decision or an error, never a panic.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pp_core::experiments::autoscaling::{cpu_scale, replay, Range, Recommendation, ScalingContext};

#[derive(Debug, Arbitrary)]
struct Input {
    noop_min: f64,
    noop_max: f64,
    maintain: f64,
    instances: u32,
    utilisations: Vec<f64>,
}

fuzz_target!(|input: Input| {
    let Ok(noop_range) = Range::new(input.noop_min, input.noop_max) else {
        return;
    };
    let ctx = ScalingContext {
        noop_range,
        maintain: input.maintain,
        utilisation: input.utilisations.first().copied().unwrap_or(0.0),
        instances: input.instances,
    };

    if let Ok(delta) = cpu_scale(&ctx) {
        let rec = Recommendation::from_delta(delta);
        assert!(rec.scale_up == 0 || rec.scale_down == 0);
    }
    let _ = replay(ctx, &input.utilisations);
});
