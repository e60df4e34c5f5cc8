use std::{env, process, str::FromStr};

use engine::{Maze, timeline};

fn main() {
    // A `.env` file in the working directory may override the defaults.
    dotenvy::dotenv().ok();

    let rows = read_or("MAZE_ROWS", 7);
    let cols = read_or("MAZE_COLS", 53);
    let seconds: f64 = read_or("ANIMATION_SECONDS", 20.0);

    let (maze, route) = match Maze::with_route(rows, cols) {
        Ok(pair) => pair,
        Err(e) => {
            eprintln!("Error: {}.", e);
            process::exit(1);
        }
    };

    let visits = timeline::consumption_times(&route, seconds);
    let solution = maze.solve();

    println!("  Grid size:       {} x {}", rows, cols);
    println!("  Route length:    {}", route.len());
    println!("  Cells consumed:  {}", visits.len());
    println!("  Solution length: {}", solution.len());
    println!("  Animation time:  {}s", seconds);
    println!();
    println!("{}", maze);
    println!();

    for visit in visits.iter().take(5) {
        println!(
            "  ({}, {}) eaten at {:.2}s",
            visit.cell.row, visit.cell.col, visit.seconds
        );
    }
    if visits.len() > 5 {
        println!("  ... and {} more", visits.len() - 5);
    }
}

fn read_or<T: FromStr + Copy>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => value.trim().parse().unwrap_or_else(|_| {
            eprintln!("Error: {} must be a number, got {:?}.", key, value);
            process::exit(1);
        }),
        _ => default,
    }
}
