//! The six faces of a cube and the shift that moves strips between them.

use std::ops::{Index, IndexMut};

use itertools::Itertools;

use crate::error::InvariantViolation;
use crate::face::{Face, Line, TILE_COUNT, Tile};
use crate::topology::{Direction, FaceId};

/// Number of faces visited by one shift, including the starting face.
const RING_LEN: usize = 4;

/// All six faces of a cube, indexed by [`FaceId`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Faces([Face; FaceId::COUNT]);

impl Default for Faces {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<FaceId> for Faces {
    type Output = Face;

    fn index(&self, id: FaceId) -> &Face {
        &self.0[id.index()]
    }
}

impl IndexMut<FaceId> for Faces {
    fn index_mut(&mut self, id: FaceId) -> &mut Face {
        &mut self.0[id.index()]
    }
}

impl Faces {
    /// Constructs six solved faces wired together according to the cube
    /// topology.
    pub fn new() -> Self {
        Self(FaceId::ALL.map(Face::new))
    }

    /// Returns an iterator over all faces, in label order.
    pub fn iter(&self) -> impl Iterator<Item = &Face> {
        self.0.iter()
    }

    /// Returns the 9 tiles of a face in stored row-major order.
    pub fn tiles(&self, id: FaceId) -> &[Tile; TILE_COUNT] {
        self[id].tiles()
    }

    /// Sets every face to its own color.
    pub fn reset(&mut self) {
        for face in &mut self.0 {
            face.fill(face.id());
        }
    }

    /// Returns whether every face is a single color.
    pub fn is_solved(&self) -> bool {
        self.iter().all(|face| face.is_uniform(face.tiles()[4]))
    }

    /// Shifts row `row` of `origin` one face over in direction `dir`, and
    /// likewise for the same row on the other three faces of the ring.
    ///
    /// # Panics
    ///
    /// Panics if `dir` is not horizontal, if `row` is out of range, or if a
    /// face along the way has no neighbor in direction `dir`.
    pub fn shift_row(&mut self, origin: FaceId, row: usize, dir: Direction) {
        self.shift(origin, Line::Row(row), dir);
    }

    /// Shifts column `column` of `origin` one face over in direction `dir`,
    /// and likewise for the same column on the other three faces of the ring.
    ///
    /// # Panics
    ///
    /// Panics if `dir` is not vertical, if `column` is out of range, or if a
    /// face along the way has no neighbor in direction `dir`.
    pub fn shift_column(&mut self, origin: FaceId, column: usize, dir: Direction) {
        self.shift(origin, Line::Column(column), dir);
    }

    /// Moves `line` of each face on the ring through `origin` into the next
    /// face in direction `dir`.
    ///
    /// Each write hands back the strip it replaced, which is carried to the
    /// next face; the last strip carried lands back on `origin`.
    pub fn shift(&mut self, origin: FaceId, line: Line, dir: Direction) {
        assert!(line.moves_along(dir), "cannot shift {line} {dir}");

        let mut carried = self[origin].get(line);
        let mut current = origin;
        for _ in 1..RING_LEN {
            current = self.neighbor(current, dir);
            carried = self[current].replace(line, carried);
        }
        assert_eq!(
            origin,
            self.neighbor(current, dir),
            "ring through {origin} going {dir} is not {RING_LEN} faces long",
        );
        self[origin].replace(line, carried);
    }

    /// Returns how many times each tile value appears across all faces.
    pub fn tile_counts(&self) -> [usize; FaceId::COUNT] {
        let counts = self
            .iter()
            .flat_map(|face| face.tiles().iter().copied())
            .counts();
        FaceId::ALL.map(|tile| counts.get(&tile).copied().unwrap_or(0))
    }

    /// Checks that each of the six colors appears exactly 9 times.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        match FaceId::ALL
            .into_iter()
            .zip(self.tile_counts())
            .find(|&(_, count)| count != TILE_COUNT)
        {
            Some((tile, count)) => Err(InvariantViolation::WrongTileCount { tile, count }),
            None => Ok(()),
        }
    }

    fn neighbor(&self, face: FaceId, dir: Direction) -> FaceId {
        match self[face].adjacent(dir) {
            Some(neighbor) => neighbor,
            None => panic!("{face} face has no neighbor going {dir}"),
        }
    }
}
