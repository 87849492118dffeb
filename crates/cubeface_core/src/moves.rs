//! Move vocabulary.

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Command that changes which tiles are where.
///
/// The names (`u`, `ur`, `turn_left`, ...) are the command names accepted by
/// front ends. A trailing `r` means "reversed".
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter, EnumString, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Move {
    /// Top layer, shifting the front row left.
    U,
    /// Top layer, shifting the front row right.
    Ur,
    /// Middle horizontal slice, shifting left.
    Cl,
    /// Middle horizontal slice, shifting right.
    Cr,
    /// Bottom layer, shifting the front row right.
    D,
    /// Bottom layer, shifting the front row left.
    Dr,
    /// Left layer, shifting the front column down.
    L,
    /// Left layer, shifting the front column up.
    Lr,
    /// Middle vertical slice, shifting up.
    Cu,
    /// Middle vertical slice, shifting down.
    Cd,
    /// Right layer, shifting the front column up.
    R,
    /// Right layer, shifting the front column down.
    Rr,
    /// Whole cube, so that the right face comes to the front.
    TurnLeft,
    /// Whole cube, so that the left face comes to the front.
    TurnRight,
    /// Whole cube, so that the down face comes to the front.
    TurnUp,
    /// Whole cube, so that the up face comes to the front.
    TurnDown,
    /// Front layer clockwise.
    F,
    /// Front layer counterclockwise.
    Fr,
    /// Back layer.
    B,
    /// Back layer, reversed.
    Br,
}

/// How a move is implemented.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display)]
pub enum MoveKind {
    /// One shift, plus a turn of the face on that layer if it has one.
    Primitive,
    /// Three parallel primitives that together turn the whole cube.
    Reorientation,
    /// A primitive conjugated by a reorientation.
    Compound,
}

impl Move {
    /// Moves that are applied directly as a shift plus an optional face turn.
    /// Scrambles draw from this list.
    pub const PRIMITIVES: [Move; 12] = [
        Move::L,
        Move::Lr,
        Move::R,
        Move::Rr,
        Move::U,
        Move::Ur,
        Move::D,
        Move::Dr,
        Move::Cl,
        Move::Cr,
        Move::Cu,
        Move::Cd,
    ];

    /// Returns how the move is built.
    pub fn kind(self) -> MoveKind {
        use Move::*;

        match self {
            U | Ur | Cl | Cr | D | Dr | L | Lr | Cu | Cd | R | Rr => MoveKind::Primitive,
            TurnLeft | TurnRight | TurnUp | TurnDown => MoveKind::Reorientation,
            F | Fr | B | Br => MoveKind::Compound,
        }
    }

    /// Returns whether the move is one of [`Move::PRIMITIVES`].
    pub fn is_primitive(self) -> bool {
        self.kind() == MoveKind::Primitive
    }

    /// Returns the move that undoes this one.
    #[must_use]
    pub fn inverse(self) -> Self {
        use Move::*;

        match self {
            U => Ur,
            Ur => U,
            Cl => Cr,
            Cr => Cl,
            D => Dr,
            Dr => D,
            L => Lr,
            Lr => L,
            Cu => Cd,
            Cd => Cu,
            R => Rr,
            Rr => R,
            TurnLeft => TurnRight,
            TurnRight => TurnLeft,
            TurnUp => TurnDown,
            TurnDown => TurnUp,
            F => Fr,
            Fr => F,
            B => Br,
            Br => B,
        }
    }

    /// Returns the command name of the move.
    pub fn name(self) -> &'static str {
        self.into()
    }
}
