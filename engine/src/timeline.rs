//! Maps a covering route to per-cell consumption moments.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::grid::Cell;

/// The moment a cell is first entered, and eaten, by the animated token.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Visit {
    pub cell: Cell,
    pub seconds: f64,
}

/// Spreads a route of length `n` evenly over `total_seconds`: entry `i`
/// happens at `i / n * total_seconds`. Backtrack re-visits carry later
/// duplicate timestamps for cells already eaten, so only the first
/// occurrence of each cell counts (first-write-wins).
pub fn consumption_times(route: &[Cell], total_seconds: f64) -> Vec<Visit> {
    let mut eaten = HashSet::new();
    let mut visits = Vec::new();

    for (i, &cell) in route.iter().enumerate() {
        if !eaten.insert(cell) {
            continue;
        }
        visits.push(Visit {
            cell,
            seconds: i as f64 / route.len() as f64 * total_seconds,
        });
    }

    visits
}
