//! Naive-Bayes bag-of-words classifier.

use super::bag::BagOfWords;
use super::label::Label;
use crate::config::ClassifierMode;
use pp_config::PRIOR_SUM_TOLERANCE;
use pp_math::bayes_factor::EvidenceStrength;
use pp_math::{bayes_update, log_bayes_factor, log_sum_exp};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::{debug, trace};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifierError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("class {class} has no observations")]
    DivisionByZero { class: String },
}

/// How per-token evidence is combined across classes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PosteriorMode {
    /// One normalised posterior vector over every class, updated in log space.
    #[default]
    Joint,
    /// Each class of a two-class prior folded on its own against the other.
    /// The results need not sum to one.
    Independent,
}

impl From<ClassifierMode> for PosteriorMode {
    fn from(mode: ClassifierMode) -> Self {
        match mode {
            ClassifierMode::Joint => PosteriorMode::Joint,
            ClassifierMode::Independent => PosteriorMode::Independent,
        }
    }
}

impl std::fmt::Display for PosteriorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PosteriorMode::Joint => write!(f, "joint"),
            PosteriorMode::Independent => write!(f, "independent"),
        }
    }
}

impl std::str::FromStr for PosteriorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "joint" => Ok(PosteriorMode::Joint),
            "independent" => Ok(PosteriorMode::Independent),
            _ => Err(format!("unknown posterior mode: {}", s)),
        }
    }
}

/// Result of classifying one token sequence.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct Posterior<L: Ord> {
    pub mode: PosteriorMode,
    pub probabilities: BTreeMap<L, f64>,
    /// Tokens that moved the posterior.
    pub tokens_used: usize,
    /// Tokens with no evidence, in input order.
    pub skipped: Vec<String>,
}

impl<L: Label> Posterior<L> {
    pub fn probability(&self, class: &L) -> Option<f64> {
        self.probabilities.get(class).copied()
    }

    /// Class with the highest posterior. Ties go to the smallest label.
    pub fn most_likely(&self) -> Option<(&L, f64)> {
        self.probabilities
            .iter()
            .fold(None, |best: Option<(&L, f64)>, (label, &p)| match best {
                Some((_, bp)) if bp >= p => best,
                _ => Some((label, p)),
            })
    }
}

/// Posterior after a single token, for `--trace` output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceStep<L: Ord> {
    pub token: String,
    pub posterior: BTreeMap<L, f64>,
    /// ln(P(token|first class) / P(token|second class)).
    pub log_bayes_factor: f64,
    pub strength: EvidenceStrength,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TracedPosterior<L: Ord> {
    pub posterior: Posterior<L>,
    pub steps: Vec<TraceStep<L>>,
}

struct FoldState<L: Ord> {
    /// Log posteriors in joint mode, plain probabilities in independent mode.
    state: Vec<f64>,
    used: usize,
    skipped: Vec<String>,
    steps: Vec<TraceStep<L>>,
}

/// Per-class word counts plus the posterior fold over them.
#[derive(Debug, Clone)]
pub struct BayesTextClassifier<L: Label> {
    classes: BTreeMap<L, BagOfWords>,
}

impl<L: Label> Default for BayesTextClassifier<L> {
    fn default() -> Self {
        Self {
            classes: BTreeMap::new(),
        }
    }
}

impl<L: Label> BayesTextClassifier<L> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, class: L, token: &str) {
        self.classes.entry(class).or_default().observe(token);
    }

    /// Whitespace-tokenize `text` and observe every token.
    pub fn observe_text(&mut self, class: L, text: &str) {
        let bag = self.classes.entry(class).or_default();
        for token in text.split_whitespace() {
            bag.observe(token);
        }
    }

    pub fn train<I, S>(&mut self, samples: I)
    where
        I: IntoIterator<Item = (L, S)>,
        S: AsRef<str>,
    {
        for (class, text) in samples {
            self.observe_text(class, text.as_ref());
        }
    }

    /// Share of `class`'s observations that were `token`.
    pub fn proportion(&self, class: &L, token: &str) -> Result<f64, ClassifierError> {
        match self.classes.get(class) {
            Some(bag) if !bag.is_empty() => Ok(bag.count(token) as f64 / bag.total() as f64),
            _ => Err(ClassifierError::DivisionByZero {
                class: class.to_string(),
            }),
        }
    }

    /// True iff any class has seen `token`.
    pub fn has_token(&self, token: &str) -> bool {
        self.classes.values().any(|bag| bag.count(token) > 0)
    }

    pub fn has_observations(&self, class: &L) -> bool {
        self.classes.get(class).is_some_and(|bag| !bag.is_empty())
    }

    pub fn classes(&self) -> impl Iterator<Item = (&L, &BagOfWords)> + '_ {
        self.classes.iter()
    }

    pub fn classify<I, S>(
        &self,
        tokens: I,
        prior: &BTreeMap<L, f64>,
    ) -> Result<Posterior<L>, ClassifierError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.classify_with_mode(tokens, prior, PosteriorMode::default())
    }

    pub fn classify_with_mode<I, S>(
        &self,
        tokens: I,
        prior: &BTreeMap<L, f64>,
        mode: PosteriorMode,
    ) -> Result<Posterior<L>, ClassifierError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.fold(tokens, prior, mode, false).map(|t| t.posterior)
    }

    /// Classify whitespace-separated `text`.
    pub fn classify_text(
        &self,
        text: &str,
        prior: &BTreeMap<L, f64>,
        mode: PosteriorMode,
    ) -> Result<Posterior<L>, ClassifierError> {
        self.classify_with_mode(text.split_whitespace(), prior, mode)
    }

    /// Like [`classify_with_mode`](Self::classify_with_mode), also recording
    /// the posterior after every token that carried evidence.
    pub fn classify_traced<I, S>(
        &self,
        tokens: I,
        prior: &BTreeMap<L, f64>,
        mode: PosteriorMode,
    ) -> Result<TracedPosterior<L>, ClassifierError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.fold(tokens, prior, mode, true)
    }

    fn check_prior(
        &self,
        prior: &BTreeMap<L, f64>,
        mode: PosteriorMode,
    ) -> Result<(), ClassifierError> {
        if prior.len() < 2 {
            return Err(ClassifierError::InvalidArgument(format!(
                "prior needs at least two classes, got {}",
                prior.len()
            )));
        }
        if mode == PosteriorMode::Independent && prior.len() != 2 {
            return Err(ClassifierError::InvalidArgument(format!(
                "independent mode needs exactly two classes, got {}",
                prior.len()
            )));
        }
        for (class, &p) in prior {
            if !(0.0..=1.0).contains(&p) {
                return Err(ClassifierError::InvalidArgument(format!(
                    "prior for {class} must be in [0, 1], got {p}"
                )));
            }
            if !self.has_observations(class) {
                return Err(ClassifierError::DivisionByZero {
                    class: class.to_string(),
                });
            }
        }
        let total: f64 = prior.values().sum();
        if (total - 1.0).abs() > PRIOR_SUM_TOLERANCE {
            return Err(ClassifierError::InvalidArgument(format!(
                "prior must sum to 1, got {total}"
            )));
        }
        Ok(())
    }

    fn fold<I, S>(
        &self,
        tokens: I,
        prior: &BTreeMap<L, f64>,
        mode: PosteriorMode,
        traced: bool,
    ) -> Result<TracedPosterior<L>, ClassifierError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.check_prior(prior, mode)?;
        let labels: Vec<&L> = prior.keys().collect();

        let init = FoldState {
            state: match mode {
                PosteriorMode::Joint => prior.values().map(|p| p.ln()).collect(),
                PosteriorMode::Independent => prior.values().copied().collect(),
            },
            used: 0,
            skipped: Vec::new(),
            steps: Vec::new(),
        };

        let done = tokens.into_iter().try_fold(init, |mut acc, token| {
            let token = token.as_ref();
            if !self.has_token(token) {
                trace!(token, "token not in vocabulary");
                acc.skipped.push(token.to_string());
                return Ok::<_, ClassifierError>(acc);
            }

            let props = labels
                .iter()
                .map(|class| self.proportion(class, token))
                .collect::<Result<Vec<f64>, _>>()?;

            let next = match mode {
                PosteriorMode::Joint => joint_step(&acc.state, &props),
                PosteriorMode::Independent => independent_step(&acc.state, &props),
            };

            match next {
                None => {
                    debug!(token, "token has zero support under every live class");
                    acc.skipped.push(token.to_string());
                }
                Some(state) => {
                    acc.state = state;
                    acc.used += 1;
                    if traced {
                        let log_bf = log_bayes_factor(props[0], props[1]);
                        acc.steps.push(TraceStep {
                            token: token.to_string(),
                            posterior: label_map(&labels, probabilities(mode, &acc.state)),
                            log_bayes_factor: log_bf,
                            strength: EvidenceStrength::from_log_bf(log_bf),
                        });
                    }
                }
            }
            Ok(acc)
        })?;

        let posterior = if done.used == 0 {
            prior.clone()
        } else {
            label_map(&labels, probabilities(mode, &done.state))
        };

        Ok(TracedPosterior {
            posterior: Posterior {
                mode,
                probabilities: posterior,
                tokens_used: done.used,
                skipped: done.skipped,
            },
            steps: done.steps,
        })
    }
}

/// Add each class's log proportion and renormalise. `None` when no class
/// keeps any mass.
fn joint_step(log_posterior: &[f64], props: &[f64]) -> Option<Vec<f64>> {
    let weights: Vec<f64> = log_posterior
        .iter()
        .zip(props)
        .map(|(lp, q)| lp + q.ln())
        .collect();
    let lse = log_sum_exp(&weights);
    if !lse.is_finite() {
        return None;
    }
    Some(weights.into_iter().map(|w| w - lse).collect())
}

/// Sequential update of each class against the other. A class whose update
/// is 0/0 keeps its value; `None` when both are.
fn independent_step(posterior: &[f64], props: &[f64]) -> Option<Vec<f64>> {
    let a = bayes_update(posterior[0], props[0], props[1]);
    let b = bayes_update(posterior[1], props[1], props[0]);
    if a.is_none() && b.is_none() {
        return None;
    }
    Some(vec![a.unwrap_or(posterior[0]), b.unwrap_or(posterior[1])])
}

fn probabilities(mode: PosteriorMode, state: &[f64]) -> Vec<f64> {
    match mode {
        PosteriorMode::Joint => state.iter().map(|lp| lp.exp()).collect(),
        PosteriorMode::Independent => state.to_vec(),
    }
}

fn label_map<L: Label>(labels: &[&L], values: Vec<f64>) -> BTreeMap<L, f64> {
    labels
        .iter()
        .map(|l| (*l).clone())
        .zip(values)
        .collect()
}
