//! The grid and wall model: cells, the four axis directions, and the two
//! boolean wall matrices the maze is carved out of.

use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::error::MazeError;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Cell {
        Cell { row, col }
    }
}

/// The four axis directions, declared in the exact base order the carver and
/// the walker shuffle their candidates from.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, EnumIter, Serialize, Deserialize)]
pub enum Direction {
    Right,
    Down,
    Left,
    Up,
}

impl Direction {
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Up => (-1, 0),
        }
    }
}

/// Wall state of a `rows` x `cols` grid.
///
/// `horizontal[r][c]` separates cell `(r - 1, c)` from `(r, c)`; rows 0 and
/// `rows` are the outer boundary. `vertical[r][c]` separates cell
/// `(r, c - 1)` from `(r, c)`; columns 0 and `cols` are the outer boundary.
/// A fresh grid is fully walled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallGrid {
    pub rows: usize,
    pub cols: usize,
    pub horizontal: Vec<Vec<bool>>,
    pub vertical: Vec<Vec<bool>>,
}

impl WallGrid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            horizontal: vec![vec![true; cols]; rows + 1],
            vertical: vec![vec![true; cols + 1]; rows],
        }
    }

    /// The in-bounds neighbor of `cell` in `direction`, if there is one.
    pub fn neighbor(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        let (dr, dc) = direction.delta();
        let row = cell.row as isize + dr;
        let col = cell.col as isize + dc;

        let in_bounds =
            row >= 0 && row < self.rows as isize && col >= 0 && col < self.cols as isize;
        if !in_bounds {
            return None;
        }

        Some(Cell::new(row as usize, col as usize))
    }

    /// Whether the wall on the given side of `cell` is standing. Every cell
    /// has a wall entry on all four sides, boundary included.
    pub fn is_blocked(&self, cell: Cell, direction: Direction) -> Result<bool, MazeError> {
        self.check_cell(cell)?;
        Ok(self.wall(cell, direction))
    }

    /// Clears the wall between `cell` and its in-bounds neighbor in
    /// `direction`. Opening toward the outside is a caller bug and is
    /// reported as `InvalidEdge`.
    pub fn open_wall(&mut self, cell: Cell, direction: Direction) -> Result<(), MazeError> {
        self.check_cell(cell)?;
        if self.neighbor(cell, direction).is_none() {
            return Err(MazeError::InvalidEdge {
                row: cell.row,
                col: cell.col,
                direction,
            });
        }

        *self.wall_mut(cell, direction) = false;
        Ok(())
    }

    fn check_cell(&self, cell: Cell) -> Result<(), MazeError> {
        if cell.row >= self.rows || cell.col >= self.cols {
            return Err(MazeError::OutOfBounds {
                row: cell.row,
                col: cell.col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    // Callers inside the crate guarantee `cell` is in bounds.
    pub(crate) fn wall(&self, cell: Cell, direction: Direction) -> bool {
        match direction {
            Direction::Right => self.vertical[cell.row][cell.col + 1],
            Direction::Down => self.horizontal[cell.row + 1][cell.col],
            Direction::Left => self.vertical[cell.row][cell.col],
            Direction::Up => self.horizontal[cell.row][cell.col],
        }
    }

    pub(crate) fn wall_mut(&mut self, cell: Cell, direction: Direction) -> &mut bool {
        match direction {
            Direction::Right => &mut self.vertical[cell.row][cell.col + 1],
            Direction::Down => &mut self.horizontal[cell.row + 1][cell.col],
            Direction::Left => &mut self.vertical[cell.row][cell.col],
            Direction::Up => &mut self.horizontal[cell.row][cell.col],
        }
    }
}
