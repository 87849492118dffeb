//! Error types.

use crate::face::Tile;

/// Error when a scramble length is not a non-negative integer.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ScrambleLengthError {
    /// The length is negative.
    #[error("scramble length must not be negative (got {0})")]
    Negative(i64),
    /// The length does not fit in the supported range.
    #[error("scramble length {0} is too large")]
    TooLarge(i64),
    /// The input is not an integer at all.
    #[error("scramble length {0:?} is not an integer")]
    NotAnInteger(String),
}

/// Error when the cube has reached a state that no sequence of moves can
/// produce. This always indicates a bug in a move.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// A color appears more or fewer than 9 times.
    #[error("expected 9 {tile} tiles but found {count}")]
    WrongTileCount {
        /// Tile value whose count is wrong.
        tile: Tile,
        /// Number of tiles found.
        count: usize,
    },
}
