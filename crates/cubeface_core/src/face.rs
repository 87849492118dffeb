//! A single 3x3 face of the cube.

use std::fmt;

use crate::topology::{Direction, FaceId, TwistDirection};

/// Sticker value. A tile is identified by the face whose color it carries.
pub type Tile = FaceId;

/// Number of tiles on a face.
pub const TILE_COUNT: usize = 9;

/// Number of rows (and columns) on a face.
pub const SIDE_LEN: usize = 3;

/// Three tiles from one row or column, listed left-to-right or top-to-bottom
/// as seen from outside the cube.
pub type Strip = [Tile; SIDE_LEN];

/// Swaps that rotate a face 90 degrees clockwise: first the edges 1, 5, 7, 3
/// and then the corners 0, 2, 8, 6.
const CW_SWAPS: [(usize, usize); 6] = [(1, 5), (1, 7), (1, 3), (0, 2), (0, 8), (0, 6)];
/// Swaps that rotate a face 90 degrees counterclockwise.
const CCW_SWAPS: [(usize, usize); 6] = [(1, 3), (1, 7), (1, 5), (0, 6), (0, 8), (0, 2)];
/// Swaps that rotate a face 180 degrees. This is its own inverse.
const INVERT_SWAPS: [(usize, usize); 4] = [(0, 8), (1, 7), (2, 6), (3, 5)];

/// Row or column of a face.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Line {
    /// Row, counted from the top (0..3).
    Row(usize),
    /// Column, counted from the left (0..3).
    Column(usize),
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Row(i) => write!(f, "row {i}"),
            Line::Column(i) => write!(f, "column {i}"),
        }
    }
}

impl Line {
    /// Returns the logical tile indices of the line, in reading order.
    ///
    /// # Panics
    ///
    /// Panics if the row or column index is not in the range `0..3`.
    pub fn indices(self) -> [usize; SIDE_LEN] {
        match self {
            Line::Row(i) => {
                assert!(i < SIDE_LEN, "row index {i} out of range");
                [3 * i, 3 * i + 1, 3 * i + 2]
            }
            Line::Column(i) => {
                assert!(i < SIDE_LEN, "column index {i} out of range");
                [i, i + 3, i + 6]
            }
        }
    }

    /// Returns whether a line of this kind moves when shifting in `dir`.
    pub fn moves_along(self, dir: Direction) -> bool {
        match self {
            Line::Row(_) => dir.is_horizontal(),
            Line::Column(_) => !dir.is_horizontal(),
        }
    }
}

/// Single face of the cube: a row-major 3x3 grid of tiles plus the faces it
/// borders.
///
/// Rows are always read and written in the stored layout. Columns are read
/// and written in the layout the face has on the vertical ring, which for an
/// inverted face is the stored layout rotated 180 degrees. See
/// [`FaceId::is_inverted()`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Face {
    id: FaceId,
    tiles: [Tile; TILE_COUNT],
    adjacent: [Option<FaceId>; 4],
    is_inverted: bool,
}

impl Face {
    /// Constructs a solved face, with its adjacency and orientation taken from
    /// the cube topology.
    pub fn new(id: FaceId) -> Self {
        Self::with_tiles(id, [id; TILE_COUNT])
    }

    /// Constructs a face with arbitrary tiles, in stored order.
    pub fn with_tiles(id: FaceId, tiles: [Tile; TILE_COUNT]) -> Self {
        let adjacent = [
            Direction::Left,
            Direction::Right,
            Direction::Up,
            Direction::Down,
        ]
        .map(|dir| id.adjacent(dir));
        Self {
            id,
            tiles,
            adjacent,
            is_inverted: id.is_inverted(),
        }
    }

    /// Returns which face this is.
    pub fn id(&self) -> FaceId {
        self.id
    }

    /// Returns all 9 tiles in stored row-major order.
    pub fn tiles(&self) -> &[Tile; TILE_COUNT] {
        &self.tiles
    }

    /// Returns whether columns are accessed through a 180-degree rotation.
    pub fn is_inverted(&self) -> bool {
        self.is_inverted
    }

    /// Returns the neighbor in direction `dir`, if the face has one.
    pub fn adjacent(&self, dir: Direction) -> Option<FaceId> {
        self.adjacent[dir.index()]
    }

    /// Returns whether every tile on the face is `tile`.
    pub fn is_uniform(&self, tile: Tile) -> bool {
        self.tiles.iter().all(|&t| t == tile)
    }

    /// Sets every tile on the face to `tile`.
    pub fn fill(&mut self, tile: Tile) {
        self.tiles = [tile; TILE_COUNT];
    }

    /// Swaps the tiles at two stored indices.
    ///
    /// # Panics
    ///
    /// Panics if either index is not in the range `0..9`.
    pub fn swap_tiles(&mut self, i1: usize, i2: usize) {
        self.tiles.swap(i1, i2);
    }

    /// Returns row `i`, left to right.
    pub fn row(&self, i: usize) -> Strip {
        self.get(Line::Row(i))
    }

    /// Returns column `i`, top to bottom, in vertical-ring orientation.
    pub fn column(&self, i: usize) -> Strip {
        self.get(Line::Column(i))
    }

    /// Overwrites row `i` and returns the tiles that were there before.
    pub fn replace_row(&mut self, i: usize, row: Strip) -> Strip {
        self.replace(Line::Row(i), row)
    }

    /// Overwrites column `i` and returns the tiles that were there before.
    pub fn replace_column(&mut self, i: usize, column: Strip) -> Strip {
        self.replace(Line::Column(i), column)
    }

    /// Returns the tiles of a row or column.
    pub fn get(&self, line: Line) -> Strip {
        line.indices().map(|i| self.tiles[self.storage_index(line, i)])
    }

    /// Overwrites a row or column and returns the tiles that were there
    /// before.
    pub fn replace(&mut self, line: Line, new: Strip) -> Strip {
        let old = self.get(line);
        for (i, tile) in line.indices().into_iter().zip(new) {
            let i = self.storage_index(line, i);
            self.tiles[i] = tile;
        }
        old
    }

    /// Rotates the face's own tiles by 90 degrees. Neighboring faces are not
    /// touched.
    pub fn turn(&mut self, direction: impl Into<TwistDirection>) {
        let swaps = match direction.into() {
            TwistDirection::CW => &CW_SWAPS,
            TwistDirection::CCW => &CCW_SWAPS,
        };
        for &(i1, i2) in swaps {
            self.swap_tiles(i1, i2);
        }
    }

    /// Rotates the stored tiles by 180 degrees (a point reflection through
    /// the center tile). Applying this twice has no effect.
    pub fn invert(&mut self) {
        for (i1, i2) in INVERT_SWAPS {
            self.swap_tiles(i1, i2);
        }
    }

    /// Maps a logical tile index to a stored one.
    ///
    /// Reading column `i` of an inverted face gives the same result as
    /// inverting, reading, and inverting back; since index `k` of the inverted
    /// grid is index `8 - k` of the stored one, the mapping is done here
    /// instead of mutating the face.
    fn storage_index(&self, line: Line, logical: usize) -> usize {
        match line {
            Line::Column(_) if self.is_inverted => TILE_COUNT - 1 - logical,
            _ => logical,
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.tiles.chunks(SIDE_LEN).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for tile in row {
                write!(f, "{}", tile.number())?;
            }
        }
        Ok(())
    }
}
