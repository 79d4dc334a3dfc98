//! Reproducible random exponent clouds for benches and tests.
//!
//! Determinism uses a replay token `(seed, index)` mixed into a single RNG,
//! so the `index`-th cloud of a stream can be regenerated on its own.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Shape of a random exponent cloud.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    /// Number of terms n.
    pub points: usize,
    /// Ambient dimension k (last coordinate is the order axis).
    pub dim: usize,
    /// Entries are drawn uniformly from `0..=max_exponent`.
    pub max_exponent: i64,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            points: 8,
            dim: 3,
            max_exponent: 3,
        }
    }
}

/// Names one cloud: `seed` picks a stream, `index` the cloud within it.
///
/// A bench or property run that logs the token can regenerate the exact
/// cloud it failed on without replaying the stream up to `index`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    /// RNG for this cloud alone; neighbouring indices give unrelated streams.
    fn rng(self) -> StdRng {
        let golden = 0x9e37_79b9_7f4a_7c15;
        let key = splitmix64(self.seed ^ splitmix64(self.index.wrapping_add(golden)));
        StdRng::seed_from_u64(key)
    }
}

/// SplitMix64 finalizer.
fn splitmix64(mut x: u64) -> u64 {
    x = (x ^ (x >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    x ^ (x >> 31)
}

/// Draw `cfg.points` rows of `cfg.dim` exponents.
pub fn random_cloud(cfg: CloudCfg, tok: ReplayToken) -> Vec<Vec<i64>> {
    let mut rng = tok.rng();
    let hi = cfg.max_exponent.max(0);
    (0..cfg.points)
        .map(|_| (0..cfg.dim).map(|_| rng.gen_range(0..=hi)).collect())
        .collect()
}
