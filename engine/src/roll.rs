use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DiceError;
use crate::rng::DiceRng;

/// A structured roll: `count` dice with `sides` sides each, plus a flat
/// modifier applied to the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollRequest {
    pub count: i32,
    pub sides: i32,
    pub modifier: i32,
}

impl RollRequest {
    /// Validated constructor; `count` and `sides` must be positive.
    pub fn new(count: i32, sides: i32, modifier: i32) -> Result<Self, DiceError> {
        if count <= 0 || sides <= 0 {
            return Err(DiceError::InvalidParameters { count, sides });
        }
        Ok(Self {
            count,
            sides,
            modifier,
        })
    }
}

impl fmt::Display for RollRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)?;
        if self.modifier > 0 {
            write!(f, "+{}", self.modifier)?;
        } else if self.modifier < 0 {
            write!(f, "{}", self.modifier)?;
        }
        Ok(())
    }
}

/// Per-die results in draw order, and their sum.
///
/// `sum` is the plain total of `rolls`; notation modifiers are applied by
/// the engine on top, after aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollResult {
    pub rolls: Vec<i32>,
    pub sum: i32,
}

/// Roll `count` dice in order. Validates before the first draw, so a
/// rejected request never advances the generator.
pub(crate) fn roll_many(
    rng: &mut DiceRng,
    count: i32,
    sides: i32,
) -> Result<RollResult, DiceError> {
    if count <= 0 || sides <= 0 {
        return Err(DiceError::InvalidParameters { count, sides });
    }
    let mut rolls = Vec::with_capacity(count as usize);
    for _ in 0..count {
        rolls.push(rng.roll_one(sides)?);
    }
    let sum = rolls.iter().sum();
    Ok(RollResult { rolls, sum })
}
