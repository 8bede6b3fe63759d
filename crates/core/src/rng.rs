//! RNG module - where roll randomness comes from
//!
//! Rolls either draw from process entropy or from a fixed seed. A seeded
//! source always yields the same sequence, which is what tests and
//! reproducible sessions rely on.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Randomness source for a roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Entropy {
    /// Fresh randomness from the operating system.
    #[default]
    Process,
    /// Deterministic stream derived from the seed.
    Seed(u64),
}

impl Entropy {
    /// Build a generator for this source.
    pub fn rng(self) -> StdRng {
        match self {
            Entropy::Process => StdRng::from_rng(&mut rand::rng()),
            Entropy::Seed(seed) => StdRng::seed_from_u64(seed),
        }
    }

    pub fn is_seeded(&self) -> bool {
        matches!(self, Entropy::Seed(_))
    }
}

impl From<Option<u64>> for Entropy {
    fn from(seed: Option<u64>) -> Self {
        seed.map_or(Entropy::Process, Entropy::Seed)
    }
}
