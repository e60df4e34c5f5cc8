//! Spanning-tree carving with a randomized depth-first backtracker.

use super::Frame;
use crate::{
    grid::{Cell, Direction, WallGrid},
    rng::Lcg,
};

/// Carves a perfect maze into a fully walled grid, then punches the entry
/// and exit through the outer boundary. Dimensions are validated by the
/// caller and are at least 1 x 1 here.
pub(super) fn carve(rows: usize, cols: usize, rng: &mut Lcg) -> WallGrid {
    let mut walls = WallGrid::new(rows, cols);
    let mut visited = vec![vec![false; cols]; rows];

    visited[0][0] = true;
    let mut stack = vec![Frame::open(Cell::new(0, 0), rng)];

    while !stack.is_empty() {
        match next_unvisited(&mut stack, &walls, &visited) {
            Some((cell, direction, next)) => {
                *walls.wall_mut(cell, direction) = false;
                visited[next.row][next.col] = true;
                stack.push(Frame::open(next, rng));
            }
            None => {
                stack.pop();
            }
        }
    }

    // The tree never touches the boundary, so these two are the only
    // openings in the outer wall.
    walls.vertical[0][0] = false;
    walls.vertical[rows - 1][cols] = false;

    walls
}

// Advances the top frame's cursor to the next in-bounds unvisited neighbor.
// The cursor survives descents, so a cell resumes its own shuffled hand
// after a branch backtracks into it.
fn next_unvisited(
    stack: &mut [Frame],
    walls: &WallGrid,
    visited: &[Vec<bool>],
) -> Option<(Cell, Direction, Cell)> {
    let frame = stack.last_mut()?;

    while frame.cursor < frame.directions.len() {
        let direction = frame.directions[frame.cursor];
        frame.cursor += 1;

        if let Some(next) = walls.neighbor(frame.cell, direction) {
            if !visited[next.row][next.col] {
                return Some((frame.cell, direction, next));
            }
        }
    }

    None
}
