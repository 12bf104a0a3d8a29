//! Class labels.

use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display};

/// Anything that can name a class.
pub trait Label: Ord + Clone + Debug + Display {}

impl<T: Ord + Clone + Debug + Display> Label for T {}

/// The classic two-class spam filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpamLabel {
    Spam,
    Ham,
}

impl Display for SpamLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpamLabel::Spam => write!(f, "spam"),
            SpamLabel::Ham => write!(f, "ham"),
        }
    }
}

impl std::str::FromStr for SpamLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "spam" => Ok(SpamLabel::Spam),
            "ham" => Ok(SpamLabel::Ham),
            _ => Err(format!("unknown label: {}", s)),
        }
    }
}
