//! The full-coverage walk that drives the eating animation.

use super::{Frame, Maze};
use crate::{grid::Cell, rng::Lcg};

/// Depth-first covering walk from (0, 0) over open walls.
///
/// Each cell is appended on first entry; when a branch backtracks, the cells
/// it unwinds through are appended again, so consecutive entries are always
/// grid-adjacent and the token never teleports. The walk continues the
/// carver's generator state rather than reseeding, which the reproducibility
/// of the combined pipeline depends on.
pub(super) fn walk(maze: &Maze, rng: &mut Lcg) -> Vec<Cell> {
    let mut visited = vec![vec![false; maze.cols]; maze.rows];
    let mut route = Vec::new();
    let mut last_discovery = 0;

    let start = Cell::new(0, 0);
    visited[0][0] = true;
    route.push(start);
    let mut stack = vec![Frame::open(start, rng)];

    while !stack.is_empty() {
        match next_passage(&mut stack, maze, &visited) {
            Some(next) => {
                visited[next.row][next.col] = true;
                last_discovery = route.len();
                route.push(next);
                stack.push(Frame::open(next, rng));
            }
            None => {
                stack.pop();
                if let Some(frame) = stack.last() {
                    route.push(frame.cell);
                }
            }
        }
    }

    // Drop the unwind back to the start after the last new cell: nothing is
    // eaten there, and a branchless corridor stays revisit-free.
    route.truncate(last_discovery + 1);
    route
}

fn next_passage(stack: &mut [Frame], maze: &Maze, visited: &[Vec<bool>]) -> Option<Cell> {
    let frame = stack.last_mut()?;

    while frame.cursor < frame.directions.len() {
        let direction = frame.directions[frame.cursor];
        frame.cursor += 1;

        if let Some(next) = maze.walls.neighbor(frame.cell, direction) {
            if !visited[next.row][next.col] && !maze.walls.wall(frame.cell, direction) {
                return Some(next);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_cell_route() {
        let (_, route) = Maze::with_route(1, 1).unwrap();
        assert_eq!(route, vec![Cell::new(0, 0)]);
    }

    #[test]
    fn test_single_column_route_has_no_backtracks() {
        // A 7 x 1 maze degenerates to one corridor: no branch points, so no
        // revisits in the route.
        let (_, route) = Maze::with_route(7, 1).unwrap();

        let expected: Vec<Cell> = (0..7).map(|row| Cell::new(row, 0)).collect();
        assert_eq!(route, expected);
    }

    #[test]
    fn test_two_by_two_route_matches_hand_computed_trace() {
        let (_, route) = Maze::with_route(2, 2).unwrap();

        assert_eq!(
            route,
            vec![
                Cell::new(0, 0),
                Cell::new(0, 1),
                Cell::new(1, 1),
                Cell::new(1, 0),
            ]
        );
    }

    #[test]
    fn test_three_by_three_route_matches_hand_computed_trace() {
        let (_, route) = Maze::with_route(3, 3).unwrap();

        let expected = [
            (0, 0),
            (1, 0),
            (2, 0),
            (2, 1),
            (1, 1),
            (0, 1),
            (0, 2),
            (1, 2),
            (2, 2),
        ];
        let expected: Vec<Cell> = expected.iter().map(|&(r, c)| Cell::new(r, c)).collect();
        assert_eq!(route, expected);
    }

    #[test]
    fn test_branched_maze_revisits_cells_while_backtracking() {
        let (_, route) = Maze::with_route(5, 8).unwrap();

        assert_eq!(route.len(), 59);
        assert!(route.len() > 5 * 8, "backtrack steps revisit cells");
    }

    #[test]
    fn test_route_depends_on_continued_generator_state() {
        let mut rng = Lcg::from_dimensions(5, 8);
        let maze = Maze::generate(5, 8, &mut rng).unwrap();
        let continued = maze.traverse(&mut rng);

        // Reseeding before the walk still yields a valid covering walk,
        // but a different one.
        let mut reseeded = Lcg::from_dimensions(5, 8);
        let restarted = maze.traverse(&mut reseeded);

        assert_ne!(continued, restarted);
    }
}
