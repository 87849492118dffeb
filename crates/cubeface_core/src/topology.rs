//! Face labels, directions, and the fixed adjacency between faces.

use std::fmt;

use strum::EnumIter;

/// One of the six faces of the cube.
///
/// The declaration order is the label order used everywhere else: the solved
/// tile value of each face is its position in this list, starting from 1.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter)]
pub enum FaceId {
    /// Face pointing towards the viewer.
    Front,
    /// Face on the viewer's left.
    Left,
    /// Face on the viewer's right.
    Right,
    /// Top face.
    Up,
    /// Bottom face.
    Down,
    /// Face pointing away from the viewer.
    Back,
}

impl fmt::Display for FaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FaceId {
    /// Number of faces on a cube.
    pub const COUNT: usize = 6;

    /// All faces, in label order.
    pub const ALL: [FaceId; 6] = [
        FaceId::Front,
        FaceId::Left,
        FaceId::Right,
        FaceId::Up,
        FaceId::Down,
        FaceId::Back,
    ];

    /// Returns an integer index for this face, in the range `0..6`.
    pub const fn index(self) -> usize {
        match self {
            FaceId::Front => 0,
            FaceId::Left => 1,
            FaceId::Right => 2,
            FaceId::Up => 3,
            FaceId::Down => 4,
            FaceId::Back => 5,
        }
    }

    /// Returns the tile value of this face's color, in the range `1..=6`.
    pub const fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Returns the face whose tile value is `n`, or `None` if `n` is not in
    /// the range `1..=6`.
    pub const fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(FaceId::Front),
            2 => Some(FaceId::Left),
            3 => Some(FaceId::Right),
            4 => Some(FaceId::Up),
            5 => Some(FaceId::Down),
            6 => Some(FaceId::Back),
            _ => None,
        }
    }

    /// Returns the lowercase name of the face.
    pub const fn name(self) -> &'static str {
        match self {
            FaceId::Front => "front",
            FaceId::Left => "left",
            FaceId::Right => "right",
            FaceId::Up => "up",
            FaceId::Down => "down",
            FaceId::Back => "back",
        }
    }

    /// Returns the one-letter symbol for the face.
    pub const fn symbol(self) -> char {
        match self {
            FaceId::Front => 'F',
            FaceId::Left => 'L',
            FaceId::Right => 'R',
            FaceId::Up => 'U',
            FaceId::Down => 'D',
            FaceId::Back => 'B',
        }
    }

    /// Returns the face reached by leaving this one in direction `dir`, or
    /// `None` if this face has no neighbor in that direction.
    pub const fn adjacent(self, dir: Direction) -> Option<FaceId> {
        ADJACENCY[self.index()][dir.index()]
    }

    /// Returns whether the face's stored layout is a 180-degree rotation of
    /// the layout it has along the vertical ring.
    ///
    /// Only the back face is stored this way: its rows are laid out as seen
    /// from behind with the up face on top, which is upside down relative to
    /// the ring front -> up -> back -> down.
    pub const fn is_inverted(self) -> bool {
        matches!(self, FaceId::Back)
    }
}

/// Direction in which a strip of tiles can be shifted.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter)]
pub enum Direction {
    /// Left.
    Left,
    /// Right.
    Right,
    /// Up.
    Up,
    /// Down.
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}

impl Direction {
    /// Returns an integer index for this direction, in the range `0..4`.
    pub const fn index(self) -> usize {
        match self {
            Direction::Left => 0,
            Direction::Right => 1,
            Direction::Up => 2,
            Direction::Down => 3,
        }
    }

    /// Returns the opposite direction.
    #[must_use]
    pub const fn rev(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Returns whether rows (as opposed to columns) move in this direction.
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

/// Rotation direction of a face, as seen from outside the cube.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TwistDirection {
    /// Clockwise.
    #[default]
    CW,
    /// Counterclockwise.
    CCW,
}

impl TwistDirection {
    /// Returns the reverse direction.
    #[must_use]
    pub const fn rev(self) -> Self {
        match self {
            TwistDirection::CW => TwistDirection::CCW,
            TwistDirection::CCW => TwistDirection::CW,
        }
    }
}

impl From<bool> for TwistDirection {
    /// Converts a "clockwise?" flag.
    fn from(clockwise: bool) -> Self {
        match clockwise {
            true => TwistDirection::CW,
            false => TwistDirection::CCW,
        }
    }
}

use FaceId::*;

/// Neighbor of each face in each direction, indexed by [`FaceId::index()`]
/// then [`Direction::index()`] (left, right, up, down).
///
/// Left/right wrap around the equator (front -> right -> back -> left) and
/// up/down wrap around the vertical ring (front -> up -> back -> down). The
/// back face sees both rings reversed. The side faces have no up/down
/// neighbors and the top and bottom faces have no left/right neighbors.
const ADJACENCY: [[Option<FaceId>; 4]; FaceId::COUNT] = [
    /* Front */ [Some(Left), Some(Right), Some(Up), Some(Down)],
    /* Left  */ [Some(Back), Some(Front), None, None],
    /* Right */ [Some(Front), Some(Back), None, None],
    /* Up    */ [None, None, Some(Back), Some(Front)],
    /* Down  */ [None, None, Some(Front), Some(Back)],
    /* Back  */ [Some(Right), Some(Left), Some(Down), Some(Up)],
];
