//! Uniform cylinder sampler backed by xoshiro256++

use super::Distribution;
use crate::geometry::DiskGeometry;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Every cylinder of the disk is equally likely
pub struct UniformDistribution {
    rng: Xoshiro256PlusPlus,
}

impl UniformDistribution {
    /// Seeded from OS entropy; each run sees a different workload
    pub fn new() -> Self {
        Self::from_rng(Xoshiro256PlusPlus::from_entropy())
    }

    /// Reproducible sampler; the same seed yields the same request sequence
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(Xoshiro256PlusPlus::seed_from_u64(seed))
    }

    fn from_rng(rng: Xoshiro256PlusPlus) -> Self {
        Self { rng }
    }
}

impl Default for UniformDistribution {
    fn default() -> Self {
        Self::new()
    }
}

impl Distribution for UniformDistribution {
    #[inline]
    fn next_cylinder(&mut self, geometry: &DiskGeometry) -> u64 {
        // a geometry always holds at least cylinder 0
        self.rng.gen_range(0..=geometry.last_cylinder())
    }
}
