mod carver;
mod solver;
mod walker;

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::{
    error::MazeError,
    grid::{Cell, Direction, WallGrid},
    rng::Lcg,
};

/// A perfect maze over a `rows` x `cols` grid: the open interior edges form
/// a spanning tree, so exactly one simple path joins any two cells. The
/// entry (left of the top-left cell) and the exit (right of the bottom-right
/// cell) are punched through the outer boundary on top of the tree.
#[derive(Clone, Serialize, Deserialize)]
pub struct Maze {
    pub rows: usize,
    pub cols: usize,
    pub walls: WallGrid,
}

impl Maze {
    /// Carves a maze with a randomized depth-first backtracker driven by
    /// `rng`. The caller owns the generator handle so the traversal can
    /// continue from the state carving leaves behind.
    pub fn generate(rows: usize, cols: usize, rng: &mut Lcg) -> Result<Self, MazeError> {
        if rows == 0 || cols == 0 {
            return Err(MazeError::InvalidDimensions { rows, cols });
        }

        let walls = carver::carve(rows, cols, rng);
        Ok(Self { rows, cols, walls })
    }

    /// Runs the whole pipeline: seed from the dimensions, carve, traverse.
    pub fn with_route(rows: usize, cols: usize) -> Result<(Self, Vec<Cell>), MazeError> {
        let mut rng = Lcg::from_dimensions(rows, cols);
        let maze = Self::generate(rows, cols, &mut rng)?;
        let route = maze.traverse(&mut rng);
        Ok((maze, route))
    }

    /// Full-coverage depth-first walk from (0, 0), including the backtrack
    /// re-visits that keep consecutive entries grid-adjacent. Drives the
    /// eating animation: position in the returned sequence is the timestamp.
    pub fn traverse(&self, rng: &mut Lcg) -> Vec<Cell> {
        walker::walk(self, rng)
    }

    /// Shortest path from the top-left to the bottom-right cell. In a
    /// perfect maze this is the unique simple path between the two.
    pub fn solve(&self) -> Vec<Cell> {
        solver::shortest_path(self)
    }

    pub fn log(&self) -> String {
        let mut out = String::new();

        for r in 0..self.rows {
            for c in 0..self.cols {
                out.push('+');
                out.push_str(if self.walls.horizontal[r][c] { "--" } else { "  " });
            }
            out.push_str("+\n");

            for c in 0..self.cols {
                out.push(if self.walls.vertical[r][c] { '|' } else { ' ' });
                out.push_str("  ");
            }
            out.push(if self.walls.vertical[r][self.cols] { '|' } else { ' ' });
            out.push('\n');
        }

        for c in 0..self.cols {
            out.push('+');
            out.push_str(if self.walls.horizontal[self.rows][c] { "--" } else { "  " });
        }
        out.push('+');

        out
    }
}

// One shuffled hand of candidate directions per cell, held on the explicit
// work stack instead of the native call stack: a serpentine maze would
// otherwise recurse `rows * cols` deep.
struct Frame {
    cell: Cell,
    directions: Vec<Direction>,
    cursor: usize,
}

impl Frame {
    fn open(cell: Cell, rng: &mut Lcg) -> Self {
        let mut directions: Vec<Direction> = Direction::iter().collect();
        rng.shuffle(&mut directions);
        Self {
            cell,
            directions,
            cursor: 0,
        }
    }
}

impl fmt::Debug for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.log())
    }
}
