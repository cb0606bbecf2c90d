// src/combat/src/rng.rs
use rand::{
    Rng, SeedableRng,
    distr::uniform::{SampleRange, SampleUniform},
};
use rand_pcg::Pcg32;

/// 战斗专用的确定性RNG
///
/// Owned by the battle and handed to behaviours explicitly, so a seed fully
/// determines a run.
#[derive(Debug, Clone)]
pub struct BattleRng {
    rng: Pcg32,
    seed: u64,
}

impl BattleRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Rewinds to the start of the current seed's sequence.
    pub fn reset(&mut self) {
        self.rng = Pcg32::seed_from_u64(self.seed);
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: SampleUniform,
        R: SampleRange<T>,
    {
        self.rng.random_range(range)
    }
}
