use thiserror::Error;

use crate::grid::Direction;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum MazeError {
    #[error("maze dimensions must be positive, got {rows} rows and {cols} columns")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("cell ({row}, {col}) lies outside the {rows} x {cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("no wall to open {direction:?} of cell ({row}, {col})")]
    InvalidEdge {
        row: usize,
        col: usize,
        direction: Direction,
    },
}
