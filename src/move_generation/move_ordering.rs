//! Seeded move-order shuffling.
//!
//! Search explores side-wide move lists in random order so that equally
//! scored moves are not always resolved the same way. With `NoRandom` the
//! seed is fixed to 0 and every run reproduces the same choices.

use chrono::Utc;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone)]
pub struct MoveOrdering {
    rng: StdRng,
    seed: u64,
}

impl MoveOrdering {
    pub fn new(no_random: bool) -> Self {
        let seed = if no_random { 0 } else { clock_seed() };
        Self::with_seed(seed)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[inline]
    pub fn shuffle(&mut self, moves: &mut [Move]) {
        moves.shuffle(&mut self.rng);
    }

    /// Mutable access for callers that draw other random choices from the same stream.
    #[inline]
    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}

fn clock_seed() -> u64 {
    Utc::now().timestamp_micros().unsigned_abs()
}
