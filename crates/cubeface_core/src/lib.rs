//! Face-based model of a 3x3x3 puzzle cube.
//!
//! The cube is stored as six [`Face`]s, each a row-major 3x3 grid of
//! [`Tile`]s. Every move is a shift of one row or column of the front face
//! through the four faces of its ring, sometimes followed by a quarter turn of
//! the face on that layer. Whole-cube reorientations and the front/back layer
//! turns are built from those.
//!
//! ```
//! use cubeface_core::{Cube, FaceId};
//!
//! let mut cube = Cube::new();
//! cube.r();
//! cube.rr();
//! assert!(cube.is_solved());
//! assert_eq!(FaceId::Front, cube.tiles(FaceId::Front)[4]);
//! ```

mod cube;
mod error;
mod face;
mod faces;
mod moves;
mod scramble;
mod topology;

#[cfg(test)]
mod tests;

pub use cube::{Cube, StateListener};
pub use error::{InvariantViolation, ScrambleLengthError};
pub use face::{Face, Line, SIDE_LEN, Strip, TILE_COUNT, Tile};
pub use faces::Faces;
pub use moves::{Move, MoveKind};
pub use scramble::{DEFAULT_SCRAMBLE_LENGTH, ScrambleLength, random_primitive};
pub use topology::{Direction, FaceId, TwistDirection};

/// Version string such as `cubeface_core v1.2.3`.
pub const VERSION_STRING: &str = concat!(env!("CARGO_PKG_NAME"), " v", env!("CARGO_PKG_VERSION"));
