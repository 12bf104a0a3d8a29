//! Generalized birthday problem: probability that among `k` draws from `n`
//! equally likely values at least two coincide.
//!
//! By the complement rule,
//!
//! ```text
//! P(collision) = 1 - n/n · (n-1)/n · ... · (n-k+1)/n
//!              = 1 - n! / ((n-k)! · n^k)
//! ```
//!
//! Both forms below stay in log domain. The iterative one sums
//! `ln((n-i)/n)` term by term; the log-gamma one evaluates the factorial
//! ratio directly and is the robust path for very large `n` (hash spaces).
//!
//! Edge cases shared by both: `k <= 1` never collides, `k > n` always
//! collides (pigeonhole), and `n == 0` is undefined (NaN).

use super::stable::log_gamma;

fn edge_case(n: u64, k: u64) -> Option<f64> {
    if n == 0 {
        return Some(f64::NAN);
    }
    if k <= 1 {
        return Some(0.0);
    }
    if k > n {
        return Some(1.0);
    }
    None
}

/// Collision probability accumulated as `Σ ln((n-i)/n)` for `i` in `1..k`.
pub fn collision_probability_iterative(n: u64, k: u64) -> f64 {
    if let Some(p) = edge_case(n, k) {
        return p;
    }
    let ln_n = (n as f64).ln();
    let log_unique: f64 = (1..k).map(|i| ((n - i) as f64).ln() - ln_n).sum();
    -log_unique.exp_m1()
}

/// Collision probability via `lgamma(n+1) - lgamma(n-k+1) - k·ln(n)`.
pub fn collision_probability_lgamma(n: u64, k: u64) -> f64 {
    if let Some(p) = edge_case(n, k) {
        return p;
    }
    let (n_f, k_f) = (n as f64, k as f64);
    let log_unique = log_gamma(n_f + 1.0) - log_gamma(n_f - k_f + 1.0) - k_f * n_f.ln();
    -log_unique.exp_m1()
}
