use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::trace;

use crate::error::DiceError;

/// Generator state. A fixed seed replays the same draw sequence.
#[derive(Debug, Clone)]
pub(crate) struct DiceRng {
    rng: ChaCha8Rng,
}

impl DiceRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Non-deterministic seeding for callers that did not ask for one.
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Draw a single die, uniform over `1..=sides`. Exactly one draw per
    /// call, so a seed plus a call sequence fully determines the results.
    pub fn roll_one(&mut self, sides: i32) -> Result<i32, DiceError> {
        if sides <= 0 {
            return Err(DiceError::InvalidSides(sides));
        }
        let result = self.rng.gen_range(1..=sides);
        trace!(sides, result, "die roll");
        Ok(result)
    }
}
