//! Deterministic, seedable dice rolling with RPG-style notation.
//!
//! An [`Engine`] owns its own generator state; seed it for reproducible
//! sequences or construct it from entropy for one-off rolls. Notation
//! strings like `3d6+2` are parsed by [`parse`] and rolled by
//! [`Engine::roll_notation`].

mod error;
mod notation;
mod rng;
mod roll;

pub use error::DiceError;
pub use notation::parse;
pub use roll::{RollRequest, RollResult};

use rng::DiceRng;
use tracing::debug;

/// Library version descriptor.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Install a process-wide subscriber that prints engine events, down to
/// the per-die `trace!` level. Safe to call more than once; later calls
/// are no-ops. Intended for adapters (CLI `--verbose` and the like).
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_target(false)
        .try_init();
}

/// The dice engine: generator state plus the roll operations.
///
/// All operations take `&mut self` and validate their inputs before the
/// first draw, so a failed call consumes no randomness. Re-seeding via
/// [`Engine::reseed`] likewise requires exclusive access, which rules out
/// racing an in-flight draw by construction.
#[derive(Debug, Clone)]
pub struct Engine {
    rng: DiceRng,
}

impl Engine {
    /// Entropy-seeded engine; repeated process runs differ.
    pub fn new() -> Self {
        Self::seeded(None)
    }

    /// Deterministic engine; a fixed seed replays the same sequence.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: DiceRng::from_seed(seed),
        }
    }

    /// Explicit seed when given, entropy otherwise.
    pub fn seeded(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self {
                rng: DiceRng::from_entropy(),
            },
        }
    }

    /// Reset generator state, discarding all draw history.
    pub fn reseed(&mut self, seed: Option<u64>) {
        self.rng = match seed {
            Some(seed) => DiceRng::from_seed(seed),
            None => DiceRng::from_entropy(),
        };
    }

    /// Roll one die, uniform over `[1, sides]`.
    pub fn roll(&mut self, sides: i32) -> Result<i32, DiceError> {
        self.rng.roll_one(sides)
    }

    /// Roll `count` dice and return only their sum.
    pub fn roll_multiple(&mut self, count: i32, sides: i32) -> Result<i32, DiceError> {
        Ok(roll::roll_many(&mut self.rng, count, sides)?.sum)
    }

    /// Roll `count` dice and return the ordered per-die results and sum.
    pub fn roll_individual(&mut self, count: i32, sides: i32) -> Result<RollResult, DiceError> {
        roll::roll_many(&mut self.rng, count, sides)
    }

    /// Parse `text` as dice notation, roll it, and apply the modifier.
    /// The aggregator re-validates what the parser accepted; both layers
    /// check, neither trusts the other.
    pub fn roll_notation(&mut self, text: &str) -> Result<i32, DiceError> {
        let request = notation::parse(text)?;
        debug!(%request, "rolling notation");
        let result = roll::roll_many(&mut self.rng, request.count, request.sides)?;
        Ok(result.sum + request.modifier)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
