//! Keyboard-style selection of a front row or column.

use cubeface_core::{Direction, Move, SIDE_LEN};

/// Selected row and column of the front face. Nudging moves whichever
/// strip is selected along the nudge direction.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Controls {
    /// Selected row, counted from the top.
    pub row: Option<usize>,
    /// Selected column, counted from the left.
    pub column: Option<usize>,
}

impl Controls {
    /// Moves the row or column selection one step in `dir`.
    ///
    /// Stepping past the edge clears the selection; stepping again from no
    /// selection wraps around to the far edge.
    pub fn select(&mut self, dir: Direction) {
        match dir {
            Direction::Up => self.row = step_back(self.row),
            Direction::Down => self.row = step_forward(self.row),
            Direction::Left => self.column = step_back(self.column),
            Direction::Right => self.column = step_forward(self.column),
        }
    }

    /// Returns the move that shifts the selected strip in `dir`, or `None` if
    /// nothing is selected along that axis.
    pub fn nudge(&self, dir: Direction) -> Option<Move> {
        let moves = match dir {
            Direction::Up => [Move::Lr, Move::Cu, Move::R],
            Direction::Down => [Move::L, Move::Cd, Move::Rr],
            Direction::Left => [Move::U, Move::Cl, Move::Dr],
            Direction::Right => [Move::Ur, Move::Cr, Move::D],
        };
        let selected = match dir.is_horizontal() {
            true => self.row,
            false => self.column,
        };
        selected.map(|i| moves[i])
    }
}

fn step_back(selected: Option<usize>) -> Option<usize> {
    match selected {
        None => Some(SIDE_LEN - 1),
        Some(0) => None,
        Some(i) => Some(i - 1),
    }
}

fn step_forward(selected: Option<usize>) -> Option<usize> {
    match selected {
        None => Some(0),
        Some(i) if i + 1 >= SIDE_LEN => None,
        Some(i) => Some(i + 1),
    }
}
