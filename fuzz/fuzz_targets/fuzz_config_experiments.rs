//! Fuzz target for experiments.json parsing and validation.
//!
//! Parsing may fail and validation may reject, but neither may panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use pp_config::{validate_experiments, Experiments};

fuzz_target!(|data: &[u8]| {
    if let Ok(experiments) = serde_json::from_slice::<Experiments>(data) {
        let _ = validate_experiments(&experiments);
    }
});
