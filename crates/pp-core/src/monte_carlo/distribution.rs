//! Empirical distributions over outcome buckets.

use pp_math::binomial::proportion_std_error;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;

/// Hit counts per bucket, accumulated while trials run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeCounts<B: Ord> {
    counts: BTreeMap<B, u64>,
    total: u64,
}

impl<B: Ord> Default for OutcomeCounts<B> {
    fn default() -> Self {
        Self {
            counts: BTreeMap::new(),
            total: 0,
        }
    }
}

impl<B: Ord> OutcomeCounts<B> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, bucket: B) {
        *self.counts.entry(bucket).or_insert(0) += 1;
        self.total += 1;
    }

    /// Fold another tally into this one.
    pub fn merge(&mut self, other: OutcomeCounts<B>) {
        for (bucket, count) in other.counts {
            *self.counts.entry(bucket).or_insert(0) += count;
        }
        self.total += other.total;
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct buckets hit so far.
    pub fn buckets(&self) -> usize {
        self.counts.len()
    }

    /// Freeze into a read-only distribution. `None` when nothing was recorded.
    pub fn into_distribution(self) -> Option<Distribution<B>> {
        if self.total == 0 {
            return None;
        }
        Some(Distribution {
            counts: self.counts,
            total: self.total,
        })
    }
}

/// Read-only view of bucket → count / total.
///
/// Only buckets hit at least once are stored; every other bucket reads as 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distribution<B: Ord> {
    counts: BTreeMap<B, u64>,
    total: u64,
}

impl<B: Ord> Distribution<B> {
    /// Estimated probability of `bucket`.
    pub fn probability(&self, bucket: &B) -> f64 {
        self.count(bucket) as f64 / self.total as f64
    }

    pub fn count(&self, bucket: &B) -> u64 {
        self.counts.get(bucket).copied().unwrap_or(0)
    }

    pub fn counts(&self) -> &BTreeMap<B, u64> {
        &self.counts
    }

    /// Number of trials behind this distribution.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// `(bucket, probability)` in bucket order.
    pub fn iter(&self) -> impl Iterator<Item = (&B, f64)> + '_ {
        let total = self.total as f64;
        self.counts.iter().map(move |(b, &c)| (b, c as f64 / total))
    }

    /// Standard error of the estimate for `bucket`.
    pub fn std_error(&self, bucket: &B) -> f64 {
        proportion_std_error(self.probability(bucket), self.total)
    }

    /// Largest absolute difference from `reference` over the union of buckets.
    pub fn max_abs_deviation<'a>(&self, reference: impl IntoIterator<Item = (&'a B, f64)>) -> f64
    where
        B: 'a,
    {
        let mut worst: f64 = 0.0;
        let mut seen = 0u64;
        for (bucket, expected) in reference {
            seen += self.count(bucket);
            worst = worst.max((self.probability(bucket) - expected).abs());
        }
        // Mass in buckets the reference never mentions counts as deviation too.
        let unexplained = (self.total - seen.min(self.total)) as f64 / self.total as f64;
        worst.max(unexplained)
    }
}

impl<B: Ord + Display> Distribution<B> {
    /// Plain-data form for the reporting collaborator.
    pub fn to_report(&self) -> DistributionReport {
        DistributionReport {
            trials: self.total,
            buckets: self
                .counts
                .iter()
                .map(|(bucket, &count)| {
                    let probability = count as f64 / self.total as f64;
                    BucketReport {
                        bucket: bucket.to_string(),
                        count,
                        probability,
                        std_error: proportion_std_error(probability, self.total),
                    }
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DistributionReport {
    pub trials: u64,
    pub buckets: Vec<BucketReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BucketReport {
    pub bucket: String,
    pub count: u64,
    pub probability: f64,
    pub std_error: f64,
}
