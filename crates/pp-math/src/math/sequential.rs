//! Sequential (online) form of Bayes' rule for a binary hypothesis.
//!
//! ```text
//!                  P(H) · P(E|H)
//! P(H|E) = --------------------------------
//!           P(H) · P(E|H) + P(¬H) · P(E|¬H)
//! ```
//!
//! Feeding each posterior back in as the next prior folds a stream of
//! conditionally independent evidence into a single probability. Up to
//! rounding the result does not depend on the order of the evidence.

/// One step of the sequential update.
///
/// Returns `None` when the evidence is impossible under both hypotheses given
/// the current prior (the denominator is zero) or any input is NaN; the
/// caller decides whether such evidence is skipped or rejected.
pub fn bayes_update(prior: f64, likelihood_h: f64, likelihood_not_h: f64) -> Option<f64> {
    if prior.is_nan() || likelihood_h.is_nan() || likelihood_not_h.is_nan() {
        return None;
    }
    let support_h = prior * likelihood_h;
    let denominator = support_h + (1.0 - prior) * likelihood_not_h;
    if denominator <= 0.0 || !denominator.is_finite() {
        return None;
    }
    Some(support_h / denominator)
}

/// Fold a sequence of `(P(E|H), P(E|¬H))` pairs into a posterior.
///
/// Steps for which [`bayes_update`] yields `None` leave the running
/// posterior untouched.
pub fn bayes_fold<I>(prior: f64, evidence: I) -> f64
where
    I: IntoIterator<Item = (f64, f64)>,
{
    evidence
        .into_iter()
        .fold(prior, |p, (lh, lnh)| bayes_update(p, lh, lnh).unwrap_or(p))
}

/// Log Bayes factor `ln(P(E|H) / P(E|¬H))` in nats.
///
/// Infinite when exactly one likelihood is zero, NaN when both are.
pub fn log_bayes_factor(likelihood_h: f64, likelihood_not_h: f64) -> f64 {
    if likelihood_h == 0.0 && likelihood_not_h == 0.0 {
        return f64::NAN;
    }
    likelihood_h.ln() - likelihood_not_h.ln()
}
