use thiserror::Error;

/// Failures reported by the dice engine.
///
/// Every variant is recoverable: a failed call performs no draws and leaves
/// generator state untouched, so the next call behaves as if the failure
/// never happened.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiceError {
    /// Single-die roll with a non-positive side count.
    #[error("invalid number of sides: {0}")]
    InvalidSides(i32),
    /// Multi-die roll with a non-positive count or side count.
    #[error("invalid roll parameters: count={count}, sides={sides}")]
    InvalidParameters { count: i32, sides: i32 },
    /// Input text that does not match `<count>d<sides>[+/-<modifier>]`.
    /// Carries the offending input for diagnostics.
    #[error("invalid dice notation: {0:?}")]
    InvalidNotation(String),
}
