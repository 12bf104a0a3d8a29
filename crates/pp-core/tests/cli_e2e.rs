//! End-to-end CLI tests for pp-core.
//!
//! Every invocation runs with the config env var and XDG home pointed at an
//! empty temp dir, so a developer's own experiments.json never leaks in.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn pp_core(sandbox: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pp-core").expect("pp-core binary should exist");
    cmd.env("PROBABILITY_PLAYGROUND_CONFIG", sandbox.path())
        .env("XDG_CONFIG_HOME", sandbox.path())
        .env_remove("PP_LOG")
        .env_remove("RUST_LOG")
        .env_remove("PP_LOG_FORMAT");
    cmd
}

fn run_json(args: &[&str]) -> Value {
    let sandbox = TempDir::new().unwrap();
    let output = pp_core(&sandbox).args(args).assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).expect("stdout should be JSON")
}

fn bucket_probability(result: &Value, bucket: &str) -> f64 {
    result["distribution"]["buckets"]
        .as_array()
        .unwrap()
        .iter()
        .find(|b| b["bucket"] == bucket)
        .and_then(|b| b["probability"].as_f64())
        .unwrap_or(0.0)
}

// ============================================================================
// Basics
// ============================================================================

mod basics {
    use super::*;

    #[test]
    fn version_prints_json() {
        let sandbox = TempDir::new().unwrap();
        pp_core(&sandbox)
            .arg("version")
            .assert()
            .success()
            .stdout(predicate::str::contains("pp_core_version"));
    }

    #[test]
    fn unknown_command_fails() {
        let sandbox = TempDir::new().unwrap();
        pp_core(&sandbox)
            .arg("nonexistent-command")
            .assert()
            .failure()
            .stderr(predicate::str::contains("error"));
    }

    #[test]
    fn envelope_fields_present() {
        let out = run_json(&["coin", "--trials", "10"]);
        assert_eq!(out["status"], "ok");
        assert_eq!(out["command"], "coin");
        assert_eq!(out["schema_version"], "1.0.0");
        assert!(out["run_id"].as_str().unwrap().starts_with("run-"));
    }
}

// ============================================================================
// Simulations
// ============================================================================

mod simulations {
    use super::*;

    #[test]
    fn coin_counts_every_trial() {
        let out = run_json(&["coin", "--trials", "1000", "--seed", "42"]);
        let result = &out["result"];
        assert_eq!(result["distribution"]["trials"], 1000);
        let heads = bucket_probability(result, "heads");
        let tails = bucket_probability(result, "tails");
        assert!((heads + tails - 1.0).abs() < 1e-12);
        assert!((0.45..=0.55).contains(&heads), "heads {heads}");
    }

    #[test]
    fn same_seed_same_result() {
        let a = run_json(&["consensus", "--tasks", "500", "--seed", "3"]);
        let b = run_json(&["consensus", "--tasks", "500", "--seed", "3"]);
        assert_eq!(a["result"], b["result"]);
        assert_ne!(a["run_id"], b["run_id"]);
    }

    #[test]
    fn invalid_probability_is_args_error() {
        let sandbox = TempDir::new().unwrap();
        pp_core(&sandbox)
            .args(["coin", "--p", "1.5"])
            .assert()
            .code(10)
            .stderr(predicate::str::contains("ERR_ARGS"));
    }

    #[test]
    fn birthday_reports_closed_forms() {
        let out = run_json(&["birthday", "--samples", "300", "--seed", "1"]);
        let closed = &out["result"]["collision_probability"];
        let lgamma = closed["lgamma"].as_f64().unwrap();
        let iterative = closed["iterative"].as_f64().unwrap();
        assert!((0.48..=0.51).contains(&lgamma));
        assert!((lgamma - iterative).abs() < 1e-9);
    }

    #[test]
    fn birthday_sweep_covers_each_group_size() {
        let out = run_json(&["birthday", "--sweep", "5", "--samples", "200"]);
        let rows = out["result"]["sweep"].as_array().unwrap();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0]["group_size"], 1);
        assert_eq!(rows[0]["exact"].as_f64(), Some(0.0));
        assert_eq!(rows[0]["estimate"].as_f64(), Some(0.0));
    }

    #[test]
    fn consensus_reference_lists_possible_degrees() {
        let out = run_json(&["consensus", "--tasks", "2000", "--voters", "3", "--options", "4"]);
        let reference = out["result"]["reference"].as_array().unwrap();
        let buckets: Vec<&str> = reference.iter().map(|r| r["bucket"].as_str().unwrap()).collect();
        assert_eq!(buckets, vec!["1", "2", "3"]);
        assert!(out["result"]["max_abs_deviation"].as_f64().unwrap() < 0.05);
    }

    #[test]
    fn large_consensus_skips_exact_reference() {
        let out = run_json(&["consensus", "--tasks", "50", "--voters", "2000", "--options", "4"]);
        let result = &out["result"];
        assert_eq!(result["distribution"]["trials"], 50);
        assert!(result["reference"].is_null());
        assert!(result["max_abs_deviation"].is_null());
    }

    #[test]
    fn monty_hall_partitioned() {
        let out = run_json(&["monty-hall", "--games", "3000", "--partitions", "4"]);
        let result = &out["result"];
        assert_eq!(result["distribution"]["trials"], 3000);
        assert_eq!(result["doors"], 3);
        assert!(bucket_probability(result, "switch_wins") > 0.6);
    }

    #[test]
    fn monty_hall_rejects_two_doors() {
        let sandbox = TempDir::new().unwrap();
        pp_core(&sandbox)
            .args(["monty-hall", "--doors", "2"])
            .assert()
            .code(10);
    }
}

// ============================================================================
// Closed forms
// ============================================================================

mod closed_forms {
    use super::*;

    #[test]
    fn binomial_all_successes() {
        let out = run_json(&["binomial", "--n", "3", "--k", "3", "--p", "0.5"]);
        assert_eq!(out["result"]["pmf"].as_f64(), Some(0.125));
    }

    #[test]
    fn binomial_k_above_n_rejected() {
        let sandbox = TempDir::new().unwrap();
        pp_core(&sandbox)
            .args(["binomial", "--n", "3", "--k", "4", "--p", "0.5"])
            .assert()
            .code(10);
    }

    #[test]
    fn autoscale_single_decision() {
        let out = run_json(&["autoscale", "--instances", "3", "--utilisation", "91"]);
        let result = &out["result"];
        assert_eq!(result["change"], 1);
        assert_eq!(result["recommendation"]["scale_up"], 1);
        assert_eq!(result["recommendation"]["scale_down"], 0);
    }

    #[test]
    fn autoscale_replay() {
        let out = run_json(&[
            "autoscale", "--instances", "3", "--utilisation", "80", "91", "90", "98", "50",
        ]);
        let sizes: Vec<u64> = out["result"]["steps"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["instances"].as_u64().unwrap())
            .collect();
        assert_eq!(sizes, vec![3, 4, 4, 5, 3]);
    }
}

// ============================================================================
// Classification
// ============================================================================

mod classify {
    use super::*;

    const TRAINING: [&str; 8] = [
        "--train",
        "spam=send me your password",
        "--train",
        "spam=what is your password",
        "--train",
        "ham=send me your picture",
        "--train",
        "ham=what is your name",
    ];

    fn classify_args(extra: &[&'static str]) -> Vec<&'static str> {
        let mut args = vec!["classify"];
        args.extend(TRAINING);
        args.extend(["--text", "what is your password"]);
        args.extend(extra);
        args
    }

    #[test]
    fn worked_example_is_spam() {
        let out = run_json(&classify_args(&[]));
        let result = &out["result"];
        assert_eq!(result["posterior"]["probabilities"]["spam"].as_f64(), Some(1.0));
        assert_eq!(result["most_likely"]["label"], "spam");
        assert_eq!(result["posterior"]["mode"], "joint");
        assert!(result["trace"].is_null());
    }

    #[test]
    fn independent_mode_and_trace() {
        let out = run_json(&classify_args(&["--mode", "independent", "--trace"]));
        let result = &out["result"];
        assert_eq!(result["posterior"]["mode"], "independent");
        let trace = result["trace"].as_array().unwrap();
        assert_eq!(trace.len(), 4);
        assert_eq!(trace[3]["token"], "password");
        assert_eq!(trace[3]["strength"], "decisive");
    }

    #[test]
    fn explicit_prior() {
        let out = run_json(&classify_args(&["--prior", "spam=0.1", "--prior", "ham=0.9"]));
        assert_eq!(out["result"]["posterior"]["probabilities"]["spam"].as_f64(), Some(1.0));
    }

    #[test]
    fn malformed_prior_is_args_error() {
        let sandbox = TempDir::new().unwrap();
        pp_core(&sandbox)
            .args(classify_args(&["--prior", "spam=lots", "--prior", "ham=0.5"]))
            .assert()
            .code(10)
            .stderr(predicate::str::contains("--prior"));
    }

    #[test]
    fn prior_must_sum_to_one() {
        let sandbox = TempDir::new().unwrap();
        pp_core(&sandbox)
            .args(classify_args(&["--prior", "spam=0.3", "--prior", "ham=0.3"]))
            .assert()
            .code(10)
            .stderr(predicate::str::contains("sum to 1"));
    }

    #[test]
    fn missing_class_is_division_by_zero() {
        let sandbox = TempDir::new().unwrap();
        pp_core(&sandbox)
            .args([
                "classify",
                "--train",
                "spam=send me your password",
                "--text",
                "password",
            ])
            .assert()
            .code(10)
            .stderr(predicate::str::contains("ham has no observations"));
    }
}

// ============================================================================
// Configuration
// ============================================================================

mod configuration {
    use super::*;

    #[test]
    fn check_uses_defaults_in_empty_sandbox() {
        let out = run_json(&["check"]);
        assert_eq!(out["result"]["config"]["source"], "builtin default");
        assert_eq!(out["result"]["experiments"]["coin"]["trials"], 1000);
    }

    #[test]
    fn check_reports_explicit_file() {
        let sandbox = TempDir::new().unwrap();
        let path = sandbox.path().join("custom.json");
        std::fs::write(&path, r#"{"schema_version": "1.0.0", "seed": 5}"#).unwrap();

        let output = pp_core(&sandbox)
            .args(["check", "--experiments", path.to_str().unwrap()])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        let out: Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(out["result"]["config"]["seed"], 5);
        assert_eq!(out["result"]["config"]["hash"].as_str().unwrap().len(), 64);
    }

    #[test]
    fn configured_seed_is_used_and_cli_overrides_it() {
        let sandbox = TempDir::new().unwrap();
        std::fs::write(
            sandbox.path().join("experiments.json"),
            r#"{"schema_version": "1.0.0", "seed": 99, "coin": {"trials": 50}}"#,
        )
        .unwrap();

        let run = |extra: &[&str]| -> Value {
            let mut args = vec!["coin"];
            args.extend(extra);
            let out = pp_core(&sandbox).args(&args).assert().success().get_output().stdout.clone();
            serde_json::from_slice(&out).unwrap()
        };

        let configured = run(&[]);
        assert_eq!(configured["result"]["seed"], 99);
        assert_eq!(configured["result"]["distribution"]["trials"], 50);
        let overridden = run(&["--seed", "1"]);
        assert_eq!(overridden["result"]["seed"], 1);
    }

    #[test]
    fn invalid_config_is_config_error() {
        let sandbox = TempDir::new().unwrap();
        let path = sandbox.path().join("bad.json");
        let body = r#"{"schema_version": "1.0.0", "monty_hall": {"games": 0}}"#;
        std::fs::write(&path, body).unwrap();

        pp_core(&sandbox)
            .args(["check", "--experiments", path.to_str().unwrap()])
            .assert()
            .code(11)
            .stderr(predicate::str::contains("ERR_CONFIG"));
    }

    #[test]
    fn unnormalised_configured_prior_is_config_error() {
        let sandbox = TempDir::new().unwrap();
        let path = sandbox.path().join("prior.json");
        std::fs::write(
            &path,
            r#"{"schema_version": "1.0.0", "classifier": {"prior": {"spam": 0.3, "ham": 0.3}}}"#,
        )
        .unwrap();

        pp_core(&sandbox)
            .args(["check", "--experiments", path.to_str().unwrap()])
            .assert()
            .code(11)
            .stderr(predicate::str::contains("sum to 1"));
    }

    #[test]
    fn missing_explicit_file_is_config_error() {
        let sandbox = TempDir::new().unwrap();
        let path = sandbox.path().join("absent.json");
        pp_core(&sandbox)
            .args(["coin", "--experiments", path.to_str().unwrap()])
            .assert()
            .code(11);
    }
}

// ============================================================================
// Schema
// ============================================================================

mod schema {
    use super::*;

    #[test]
    fn list_names_types() {
        let sandbox = TempDir::new().unwrap();
        pp_core(&sandbox)
            .args(["schema", "--list"])
            .assert()
            .success()
            .stdout(predicate::str::contains("DistributionReport"))
            .stdout(predicate::str::contains("Experiments"));
    }

    #[test]
    fn single_schema_is_json() {
        let out = {
            let sandbox = TempDir::new().unwrap();
            let bytes = pp_core(&sandbox)
                .args(["schema", "Experiments"])
                .assert()
                .success()
                .get_output()
                .stdout
                .clone();
            serde_json::from_slice::<Value>(&bytes).unwrap()
        };
        assert!(out["properties"]["classifier"].is_object());
    }

    #[test]
    fn unknown_schema_fails() {
        let sandbox = TempDir::new().unwrap();
        pp_core(&sandbox)
            .args(["schema", "Nope"])
            .assert()
            .code(10)
            .stderr(predicate::str::contains("Unknown schema type"));
    }
}

// ============================================================================
// Interrupts
// ============================================================================

#[cfg(unix)]
mod interrupt {
    use super::*;
    use std::process::{Command as StdCommand, Stdio};
    use std::time::{Duration, Instant};

    #[test]
    fn sigint_cancels_simulation() {
        let sandbox = TempDir::new().unwrap();
        let mut child = StdCommand::new(assert_cmd::cargo::cargo_bin("pp-core"))
            .args(["coin", "--trials", "1000000000000"])
            .env("PROBABILITY_PLAYGROUND_CONFIG", sandbox.path())
            .env("XDG_CONFIG_HOME", sandbox.path())
            .env_remove("PP_LOG")
            .env_remove("RUST_LOG")
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .unwrap();

        std::thread::sleep(Duration::from_millis(1000));
        let sent = StdCommand::new("kill")
            .args(["-INT", &child.id().to_string()])
            .status()
            .unwrap();
        assert!(sent.success());

        let deadline = Instant::now() + Duration::from_secs(30);
        while child.try_wait().unwrap().is_none() {
            if Instant::now() > deadline {
                child.kill().unwrap();
                panic!("pp-core ignored SIGINT");
            }
            std::thread::sleep(Duration::from_millis(50));
        }

        let output = child.wait_with_output().unwrap();
        assert_eq!(output.status.code(), Some(12));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("ERR_CANCELLED"), "stderr: {stderr}");
        assert!(output.stdout.is_empty());
    }
}
