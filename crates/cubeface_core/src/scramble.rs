//! Random scrambles.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::error::ScrambleLengthError;
use crate::moves::Move;

/// Number of moves in a scramble when no length is given.
pub const DEFAULT_SCRAMBLE_LENGTH: u32 = 50;

/// Validated number of moves in a scramble.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScrambleLength(u32);

impl Default for ScrambleLength {
    fn default() -> Self {
        Self(DEFAULT_SCRAMBLE_LENGTH)
    }
}

impl fmt::Display for ScrambleLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u32> for ScrambleLength {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl TryFrom<i64> for ScrambleLength {
    type Error = ScrambleLengthError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < 0 {
            return Err(ScrambleLengthError::Negative(value));
        }
        u32::try_from(value)
            .map(Self)
            .map_err(|_| ScrambleLengthError::TooLarge(value))
    }
}

impl FromStr for ScrambleLength {
    type Err = ScrambleLengthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let value: i64 = s
            .parse()
            .map_err(|_| ScrambleLengthError::NotAnInteger(s.to_owned()))?;
        Self::try_from(value)
    }
}

impl ScrambleLength {
    /// Returns the number of moves.
    pub fn get(self) -> u32 {
        self.0
    }
}

/// Returns a primitive move chosen uniformly at random.
pub fn random_primitive<R: Rng + ?Sized>(rng: &mut R) -> Move {
    Move::PRIMITIVES[rng.random_range(0..Move::PRIMITIVES.len())]
}
