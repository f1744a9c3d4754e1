/// Fair coin backed by a small fast RNG.
#[derive(Debug, Clone)]
pub struct Flip(SmallRng);

impl Flip {
    /// Reproducible coin for replaying a session.
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl Default for Flip {
    fn default() -> Self {
        Self(SmallRng::from_os_rng())
    }
}

impl Coin for Flip {
    fn flip(&mut self) -> Pick {
        Pick::from(self.0.random::<bool>())
    }
}

/// Coin that always lands the same way.
#[derive(Debug, Default, Clone, Copy)]
pub struct Always(pub Pick);

impl Coin for Always {
    fn flip(&mut self) -> Pick {
        self.0
    }
}

/// Coin that cycles through a fixed sequence and counts its flips.
#[derive(Debug, Default, Clone)]
pub struct Cycle {
    bits: Vec<Pick>,
    flips: usize,
}

impl Cycle {
    pub fn flips(&self) -> usize {
        self.flips
    }
}

impl From<Vec<Pick>> for Cycle {
    fn from(bits: Vec<Pick>) -> Self {
        Self { bits, flips: 0 }
    }
}

impl Coin for Cycle {
    fn flip(&mut self) -> Pick {
        let pick = self
            .bits
            .get(self.flips % self.bits.len().max(1))
            .copied()
            .unwrap_or_default();
        self.flips += 1;
        pick
    }
}

use super::Coin;
use crate::game::Pick;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
