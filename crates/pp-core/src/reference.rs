//! Closed-form references with argument checking.
//!
//! `pp-math` returns NaN for undefined inputs so it can sit inside numeric
//! pipelines. The wrappers here turn those inputs into a typed error for
//! CLI and library callers that want a hard precondition check.

use pp_math::binomial;
use pp_math::birthday;
use pp_math::consensus;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReferenceError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub(crate) fn check_probability(name: &str, p: f64) -> Result<(), ReferenceError> {
    if !(0.0..=1.0).contains(&p) {
        return Err(ReferenceError::InvalidArgument(format!(
            "{name} must be in [0, 1], got {p}"
        )));
    }
    Ok(())
}

/// `P(k successes in n trials)` for per-trial success probability `p`.
pub fn binomial_pmf(n: u64, k: u64, p: f64) -> Result<f64, ReferenceError> {
    check_probability("p", p)?;
    if k > n {
        return Err(ReferenceError::InvalidArgument(format!(
            "k ({k}) must not exceed n ({n})"
        )));
    }
    Ok(binomial::binomial_pmf(n, k, p))
}

/// Birthday collision probability, iterative log-domain form.
pub fn birthday_iterative(days: u64, group: u64) -> Result<f64, ReferenceError> {
    check_days(days)?;
    Ok(birthday::collision_probability_iterative(days, group))
}

/// Birthday collision probability, log-gamma form.
pub fn birthday_lgamma(days: u64, group: u64) -> Result<f64, ReferenceError> {
    check_days(days)?;
    Ok(birthday::collision_probability_lgamma(days, group))
}

fn check_days(days: u64) -> Result<(), ReferenceError> {
    if days == 0 {
        return Err(ReferenceError::InvalidArgument(
            "days must be positive".to_string(),
        ));
    }
    Ok(())
}

/// Exact consensus degree distribution, indexed by degree.
pub fn consensus_distribution(voters: u32, options: u32) -> Result<Vec<f64>, ReferenceError> {
    if voters == 0 || options == 0 {
        return Err(ReferenceError::InvalidArgument(
            "voters and options must be positive".to_string(),
        ));
    }
    consensus::degree_distribution(u64::from(voters), u64::from(options)).ok_or_else(|| {
        ReferenceError::InvalidArgument("no options to vote for".to_string())
    })
}
