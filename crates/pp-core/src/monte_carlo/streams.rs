//! Reproducible per-partition random streams.
//!
//! A master seed fans out into one `StdRng` per partition index. Streams are
//! derived by running the index through a SplitMix64 finalizer before seeding,
//! so neighbouring indices start from unrelated states and the same
//! `(master, index)` pair always yields the same stream.

use rand::rngs::StdRng;
use rand::SeedableRng;

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

fn splitmix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamSeeds {
    master: u64,
}

impl StreamSeeds {
    pub fn new(master: u64) -> Self {
        Self { master }
    }

    pub fn master(&self) -> u64 {
        self.master
    }

    /// Seed for partition `index`.
    pub fn seed(&self, index: u64) -> u64 {
        splitmix64(
            self.master
                .wrapping_add(index.wrapping_add(1).wrapping_mul(GOLDEN_GAMMA)),
        )
    }

    /// Fresh random stream for partition `index`.
    pub fn stream(&self, index: u64) -> StdRng {
        StdRng::seed_from_u64(self.seed(index))
    }
}

/// Split `trials` into `partitions` sizes that differ by at most one.
pub fn partition_sizes(trials: u64, partitions: u64) -> Vec<u64> {
    if partitions == 0 {
        return Vec::new();
    }
    let base = trials / partitions;
    let extra = trials % partitions;
    (0..partitions)
        .map(|i| base + u64::from(i < extra))
        .collect()
}
