//! Jeffreys-scale labels for per-token Bayes factors.
//!
//! A Bayes factor `BF = P(E|A) / P(E|B)` says how much one observation moves
//! the odds between two classes. In log domain `log_bf = ln P(E|A) - ln P(E|B)`;
//! a token seen only in class A has `log_bf = +inf`. The label only grades the
//! magnitude. Callers keep the signed `log_bf` next to it.

use serde::Serialize;

const LN_3_2: f64 = 1.163_150_809_678_64;
const LN_32: f64 = 3.465_735_902_799_727;
const LN_100: f64 = 4.605_170_185_988_092;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceStrength {
    /// `log_bf` is zero or undefined.
    None,
    Anecdotal,
    Substantial,
    Strong,
    VeryStrong,
    /// `|log_bf| >= ln(100)`, including tokens exclusive to one class.
    Decisive,
}

impl EvidenceStrength {
    pub fn from_log_bf(log_bf: f64) -> Self {
        let magnitude = log_bf.abs();
        match magnitude {
            m if m.is_nan() || m < f64::EPSILON => EvidenceStrength::None,
            m if m < LN_3_2 => EvidenceStrength::Anecdotal,
            m if m < std::f64::consts::LN_10 => EvidenceStrength::Substantial,
            m if m < LN_32 => EvidenceStrength::Strong,
            m if m < LN_100 => EvidenceStrength::VeryStrong,
            _ => EvidenceStrength::Decisive,
        }
    }
}

impl std::fmt::Display for EvidenceStrength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            EvidenceStrength::None => "none",
            EvidenceStrength::Anecdotal => "anecdotal",
            EvidenceStrength::Substantial => "substantial",
            EvidenceStrength::Strong => "strong",
            EvidenceStrength::VeryStrong => "very strong",
            EvidenceStrength::Decisive => "decisive",
        })
    }
}
