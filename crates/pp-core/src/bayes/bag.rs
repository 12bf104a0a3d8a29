//! Word frequency table.

use std::collections::BTreeMap;

/// Token → count with a running total.
///
/// Counts only ever grow by one, so `total` always equals the sum of all
/// counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BagOfWords {
    counts: BTreeMap<String, u64>,
    total: u64,
}

impl BagOfWords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, token: &str) {
        match self.counts.get_mut(token) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(token.to_string(), 1);
            }
        }
        self.total += 1;
    }

    /// Occurrences of `token`; 0 if never seen.
    pub fn count(&self, token: &str) -> u64 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct tokens.
    pub fn vocabulary_size(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.counts.iter().map(|(t, &c)| (t.as_str(), c))
    }
}
