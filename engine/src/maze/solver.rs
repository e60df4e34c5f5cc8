//! Breadth-first search from the entry cell to the exit cell.

use std::collections::VecDeque;

use strum::IntoEnumIterator;

use super::Maze;
use crate::grid::{Cell, Direction};

/// Shortest path from (0, 0) to the bottom-right cell, start to finish.
/// Deterministic: candidate directions are probed in their base order and no
/// random draws are consumed.
pub(super) fn shortest_path(maze: &Maze) -> Vec<Cell> {
    let finish = Cell::new(maze.rows - 1, maze.cols - 1);

    let mut visited = vec![vec![false; maze.cols]; maze.rows];
    let mut parent: Vec<Vec<Option<Cell>>> = vec![vec![None; maze.cols]; maze.rows];
    let mut queue = VecDeque::new();

    visited[0][0] = true;
    queue.push_back(Cell::new(0, 0));

    while let Some(cell) = queue.pop_front() {
        if cell == finish {
            break;
        }

        for direction in Direction::iter() {
            let Some(next) = maze.walls.neighbor(cell, direction) else {
                continue;
            };
            if visited[next.row][next.col] || maze.walls.wall(cell, direction) {
                continue;
            }

            visited[next.row][next.col] = true;
            parent[next.row][next.col] = Some(cell);
            queue.push_back(next);
        }
    }

    let mut path = vec![finish];
    let mut current = finish;
    while let Some(previous) = parent[current.row][current.col] {
        path.push(previous);
        current = previous;
    }

    path.reverse();
    path
}
