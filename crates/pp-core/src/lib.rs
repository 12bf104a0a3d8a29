//! Probability Playground Core Library
//!
//! This library provides:
//! - A seedable Monte Carlo estimator with optional cancellation
//! - Experiments (coin, birthday, consensus, Monty Hall, autoscaling)
//! - Exact reference values to compare estimates against
//! - A naive-Bayes bag-of-words text classifier
//! - Configuration loading, logging and exit codes for the CLI
//!
//! The binary entry point is in `main.rs`.

pub mod bayes;
pub mod config;
pub mod exit_codes;
pub mod experiments;
pub mod logging;
pub mod monte_carlo;
pub mod reference;
pub mod schema;
