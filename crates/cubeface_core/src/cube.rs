//! 3x3x3 puzzle cube built from six [`Face`]s.

use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;

use crate::error::InvariantViolation;
use crate::face::{Face, Line, TILE_COUNT, Tile};
use crate::faces::Faces;
use crate::moves::Move;
use crate::scramble;
use crate::topology::{Direction, FaceId, TwistDirection};

/// Receiver for "the tiles have changed" notifications.
///
/// A front end should re-read whatever tiles it displays when this is called.
/// It is called synchronously at the end of every primitive move, at the end
/// of every reorientation (in addition to the calls from the three primitives
/// it is made of), and after a reset.
pub trait StateListener {
    /// Called after the cube's tiles have changed.
    fn state_changed(&mut self, faces: &Faces);
}

impl<F: FnMut(&Faces)> StateListener for F {
    fn state_changed(&mut self, faces: &Faces) {
        self(faces);
    }
}

/// Strip shift of the front face, plus the turn of the face on the same layer
/// if there is one.
struct Primitive {
    line: Line,
    dir: Direction,
    turn: Option<(FaceId, TwistDirection)>,
}

/// Returns the definition of a primitive move, or `None` if `m` is built from
/// other moves.
fn primitive(m: Move) -> Option<Primitive> {
    use Direction::{Down, Left, Right, Up};
    use TwistDirection::{CCW, CW};

    let (line, dir, turn) = match m {
        Move::U => (Line::Row(0), Left, Some((FaceId::Up, CW))),
        Move::Ur => (Line::Row(0), Right, Some((FaceId::Up, CCW))),
        Move::Cl => (Line::Row(1), Left, None),
        Move::Cr => (Line::Row(1), Right, None),
        Move::D => (Line::Row(2), Right, Some((FaceId::Down, CW))),
        Move::Dr => (Line::Row(2), Left, Some((FaceId::Down, CCW))),
        Move::L => (Line::Column(0), Down, Some((FaceId::Left, CW))),
        Move::Lr => (Line::Column(0), Up, Some((FaceId::Left, CCW))),
        Move::Cu => (Line::Column(1), Up, None),
        Move::Cd => (Line::Column(1), Down, None),
        Move::R => (Line::Column(2), Up, Some((FaceId::Right, CW))),
        Move::Rr => (Line::Column(2), Down, Some((FaceId::Right, CCW))),
        _ => return None,
    };
    Some(Primitive { line, dir, turn })
}

/// State of a 3x3x3 puzzle cube, plus an optional listener that is told about
/// every change.
///
/// Every mutating method runs to completion before returning. Moves never
/// fail; an index or adjacency error inside a move is a bug and panics.
pub struct Cube {
    faces: Faces,
    listener: Option<Box<dyn StateListener>>,
}

impl Default for Cube {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cube")
            .field("faces", &self.faces)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}

impl Cube {
    /// Constructs a solved cube with no listener.
    pub fn new() -> Self {
        Self {
            faces: Faces::new(),
            listener: None,
        }
    }

    /// Constructs a solved cube that reports changes to `listener`. The
    /// listener is notified once immediately, for the initial reset.
    pub fn with_listener(listener: impl StateListener + 'static) -> Self {
        let mut ret = Self::new();
        ret.set_listener(listener);
        ret.reset();
        ret
    }

    /// Sets the listener, replacing any existing one.
    pub fn set_listener(&mut self, listener: impl StateListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Removes and returns the listener.
    pub fn take_listener(&mut self) -> Option<Box<dyn StateListener>> {
        self.listener.take()
    }

    /// Returns all six faces.
    pub fn faces(&self) -> &Faces {
        &self.faces
    }

    /// Returns a face.
    pub fn face(&self, id: FaceId) -> &Face {
        &self.faces[id]
    }

    /// Returns the 9 current tiles of a face, in row-major order.
    pub fn tiles(&self, id: FaceId) -> &[Tile; TILE_COUNT] {
        self.faces.tiles(id)
    }

    /// Returns whether every face is a single color.
    pub fn is_solved(&self) -> bool {
        self.faces.is_solved()
    }

    /// Checks that each color still appears exactly 9 times.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        self.faces.check_invariants()
    }

    /// Sets every face back to its own color.
    pub fn reset(&mut self) {
        log::debug!("resetting cube");
        self.faces.reset();
        self.debug_check_invariants();
        self.notify();
    }

    /// Applies a move.
    pub fn apply(&mut self, m: Move) {
        match m {
            Move::TurnLeft => self.turn_left(),
            Move::TurnRight => self.turn_right(),
            Move::TurnUp => self.turn_up(),
            Move::TurnDown => self.turn_down(),
            Move::F => self.f(),
            Move::Fr => self.fr(),
            Move::B => self.b(),
            Move::Br => self.br(),
            _ => self.apply_primitive(m),
        }
    }

    /// Applies a sequence of moves in order.
    pub fn apply_all(&mut self, moves: impl IntoIterator<Item = Move>) {
        for m in moves {
            self.apply(m);
        }
    }

    /// Turns the top layer, moving the front face's top row to the left face.
    pub fn u(&mut self) {
        self.apply_primitive(Move::U);
    }
    /// Reverse of [`Cube::u()`].
    pub fn ur(&mut self) {
        self.apply_primitive(Move::Ur);
    }
    /// Moves the middle horizontal slice to the left.
    pub fn cl(&mut self) {
        self.apply_primitive(Move::Cl);
    }
    /// Moves the middle horizontal slice to the right.
    pub fn cr(&mut self) {
        self.apply_primitive(Move::Cr);
    }
    /// Turns the bottom layer, moving the front face's bottom row to the right
    /// face.
    pub fn d(&mut self) {
        self.apply_primitive(Move::D);
    }
    /// Reverse of [`Cube::d()`].
    pub fn dr(&mut self) {
        self.apply_primitive(Move::Dr);
    }
    /// Turns the left layer, moving the front face's left column down.
    pub fn l(&mut self) {
        self.apply_primitive(Move::L);
    }
    /// Reverse of [`Cube::l()`].
    pub fn lr(&mut self) {
        self.apply_primitive(Move::Lr);
    }
    /// Moves the middle vertical slice up.
    pub fn cu(&mut self) {
        self.apply_primitive(Move::Cu);
    }
    /// Moves the middle vertical slice down.
    pub fn cd(&mut self) {
        self.apply_primitive(Move::Cd);
    }
    /// Turns the right layer, moving the front face's right column up.
    pub fn r(&mut self) {
        self.apply_primitive(Move::R);
    }
    /// Reverse of [`Cube::r()`].
    pub fn rr(&mut self) {
        self.apply_primitive(Move::Rr);
    }

    /// Turns the whole cube so that the right face comes to the front.
    pub fn turn_left(&mut self) {
        self.u();
        self.cl();
        self.dr();
        self.notify();
    }
    /// Turns the whole cube so that the left face comes to the front.
    pub fn turn_right(&mut self) {
        self.ur();
        self.cr();
        self.d();
        self.notify();
    }
    /// Turns the whole cube so that the down face comes to the front.
    pub fn turn_up(&mut self) {
        self.lr();
        self.cu();
        self.r();
        self.notify();
    }
    /// Turns the whole cube so that the up face comes to the front.
    pub fn turn_down(&mut self) {
        self.l();
        self.cd();
        self.rr();
        self.notify();
    }

    /// Turns the front layer clockwise.
    pub fn f(&mut self) {
        self.turn_right();
        self.r();
        self.turn_left();
    }
    /// Turns the front layer counterclockwise.
    pub fn fr(&mut self) {
        self.turn_left();
        self.lr();
        self.turn_right();
    }
    /// Turns the back layer.
    pub fn b(&mut self) {
        self.turn_right();
        self.l();
        self.turn_left();
    }
    /// Reverse of [`Cube::b()`].
    pub fn br(&mut self) {
        self.turn_left();
        self.rr();
        self.turn_right();
    }

    /// Applies `len` primitive moves chosen uniformly at random, using the
    /// thread-local RNG. Returns the moves applied.
    pub fn scramble(&mut self, len: u32) -> Vec<Move> {
        self.scramble_with_rng(len, &mut rand::rng())
    }

    /// Applies `len` primitive moves chosen uniformly at random from a
    /// generator seeded with `seed`. The same seed always gives the same
    /// moves.
    pub fn scramble_seeded(&mut self, len: u32, seed: u64) -> Vec<Move> {
        self.scramble_with_rng(len, &mut ChaCha12Rng::seed_from_u64(seed))
    }

    /// Applies `len` primitive moves chosen uniformly at random from `rng`.
    /// Returns the moves applied.
    pub fn scramble_with_rng<R: Rng + ?Sized>(
        &mut self,
        len: u32,
        rng: &mut R,
    ) -> Vec<Move> {
        log::debug!("scrambling with {len} moves");
        let moves: Vec<Move> = (0..len)
            .map(|_| scramble::random_primitive(rng))
            .collect();
        for &m in &moves {
            self.apply_primitive(m);
        }
        moves
    }

    fn apply_primitive(&mut self, m: Move) {
        let Some(Primitive { line, dir, turn }) = primitive(m) else {
            panic!("{m} is not a primitive move");
        };
        log::trace!("applying {m}");
        self.faces.shift(FaceId::Front, line, dir);
        if let Some((face, direction)) = turn {
            self.faces[face].turn(direction);
        }
        self.debug_check_invariants();
        self.notify();
    }

    fn notify(&mut self) {
        if let Some(listener) = &mut self.listener {
            listener.state_changed(&self.faces);
        }
    }

    fn debug_check_invariants(&self) {
        debug_assert_eq!(
            Ok(()),
            self.check_invariants(),
            "cube invariant violated",
        );
    }
}
