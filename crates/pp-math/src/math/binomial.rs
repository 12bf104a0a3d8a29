//! Binomial distribution: coefficient, probability mass, and the sampling
//! error of an empirical proportion.
//!
//! `f(n, k, p) = C(n, k) · p^k · (1 - p)^(n - k)`
//!
//! The coefficient is computed exactly in integer arithmetic while it fits in
//! `u128`; past that the whole mass is evaluated in log domain. The edge
//! coefficients `C(n, 0)` and `C(n, n)` are exactly one, so the probability of
//! `n` successes in `n` trials is bit-for-bit `p^n`.

use super::stable::log_binomial;

/// Exact `C(n, k)` if it fits in `u128`.
///
/// Uses the multiplicative form `C(n, i+1) = C(n, i) · (n - i) / (i + 1)`,
/// which stays integral at every step.
pub fn binomial_coefficient_exact(n: u64, k: u64) -> Option<u128> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 0..k {
        acc = acc.checked_mul(u128::from(n - i))? / u128::from(i + 1);
    }
    Some(acc)
}

/// `C(n, k)` as `f64`, exact while representable, log-gamma otherwise.
pub fn binomial_coefficient(n: u64, k: u64) -> f64 {
    match binomial_coefficient_exact(n, k) {
        Some(c) => c as f64,
        None => log_binomial(n, k).exp(),
    }
}

fn valid_probability(p: f64) -> bool {
    !p.is_nan() && (0.0..=1.0).contains(&p)
}

/// `k · ln(p)` with the convention `0 · ln(0) = 0`.
fn scaled_ln(k: u64, p: f64) -> f64 {
    if k == 0 {
        0.0
    } else {
        (k as f64) * p.ln()
    }
}

/// Log probability of exactly `k` successes in `n` Bernoulli(p) trials.
///
/// Returns NaN when `p` is outside [0, 1] and -inf when `k > n`.
pub fn binomial_log_pmf(n: u64, k: u64, p: f64) -> f64 {
    if !valid_probability(p) {
        return f64::NAN;
    }
    if k > n {
        return f64::NEG_INFINITY;
    }
    log_binomial(n, k) + scaled_ln(k, p) + scaled_ln(n - k, 1.0 - p)
}

/// Probability of exactly `k` successes in `n` Bernoulli(p) trials.
///
/// Returns NaN when `p` is outside [0, 1] and 0 when `k > n`.
pub fn binomial_pmf(n: u64, k: u64, p: f64) -> f64 {
    if !valid_probability(p) {
        return f64::NAN;
    }
    if k > n {
        return 0.0;
    }
    let small_exponents = i32::try_from(n).is_ok();
    match binomial_coefficient_exact(n, k) {
        Some(c) if small_exponents => {
            (c as f64) * p.powi(k as i32) * (1.0 - p).powi((n - k) as i32)
        }
        _ => binomial_log_pmf(n, k, p).exp(),
    }
}

/// Standard error of an empirical proportion `p` measured over `n` trials.
///
/// `sqrt(p(1-p)/n)`; a Monte Carlo estimate's deviation from the true
/// probability shrinks as `O(1/sqrt(n))`.
pub fn proportion_std_error(p: f64, n: u64) -> f64 {
    if !valid_probability(p) || n == 0 {
        return f64::NAN;
    }
    (p * (1.0 - p) / n as f64).sqrt()
}
