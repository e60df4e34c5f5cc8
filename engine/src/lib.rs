//! Deterministic maze engine for the animated contribution-calendar graphic.
//!
//! The maze shape is a pure function of the grid dimensions: the generator
//! and the traversal share one seeded linear congruential generator, so the
//! same calendar always produces the same walls and the same eating route.

pub mod error;
pub mod grid;
pub mod maze;
pub mod rng;
pub mod timeline;

pub use error::MazeError;
pub use grid::{Cell, Direction, WallGrid};
pub use maze::Maze;
pub use rng::Lcg;
