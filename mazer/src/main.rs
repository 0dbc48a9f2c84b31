//! mazer — interactive maze solver.
//!
//! Builds a maze (the bundled sample map, or a random one with
//! `--random [seed]`), asks which algorithm to run, and prints the solved
//! maze to the terminal.

use std::error::Error;
use std::io::{self, BufRead, Write};

use mazer_core::{Grid, Point};
use mazer_maze::MazeGen;
use mazer_paths::{Graph, coord_to_index};
use mazer_render::Renderer;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// The bundled 25x15 sample maze.
const SAMPLE_MAP: &str = "\
#########################
#..####.................#
#..#....#.##............#
#..#....#.#.............#
#..#....#.#....#........#
#..#..#.#.#....#........#
#.....#.#......#..#.....#
#.....#..#.....#..#.....#
#.....#..#..#.....#.#...#
#.....#..#..#.....#.#...#
#.....#.....#.....#.#...#
#.....#.....#.....#.....#
#..#..#..#..#..#........#
#.......................#
#########################";

const SAMPLE_START: Point = Point::new(1, 1);
const SAMPLE_GOAL: Point = Point::new(23, 13);

fn main() -> Result<(), Box<dyn Error>> {
    println!("Simple Maze Solver (graph + BFS/DFS)");
    println!("Choose an algorithm to find a path from S to G.");
    println!();

    let (grid, start, goal) = select_maze()?;
    let graph = Graph::from_grid(&grid)?;
    let start_idx = coord_to_index(start, grid.width());
    let goal_idx = coord_to_index(goal, grid.width());

    println!(
        "Start: ({},{})  Goal: ({},{})",
        start.x, start.y, goal.x, goal.y
    );
    println!("Available algorithms:");
    println!("  1) BFS (shortest path)");
    println!("  2) DFS (may find non-shortest path)");
    print!("Enter choice (1 or 2): ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    let solution = if line.trim() == "2" {
        println!("Running DFS...");
        graph.dfs(start_idx, goal_idx)?
    } else {
        // Anything else, including EOF, runs BFS.
        println!("Running BFS...");
        graph.bfs(start_idx, goal_idx)?
    };

    let renderer = Renderer::new();
    match solution {
        Some(path) => {
            println!("Path found! length={}", path.len());
            println!();
            print!("{}", renderer.render(&grid, Some(&path), start, goal));
        }
        None => {
            println!("No path found between S and G.");
            println!();
            print!("{}", renderer.render(&grid, None, start, goal));
        }
    }
    Ok(())
}

/// Pick the maze to solve: `--random [seed]` carves one, anything else uses
/// the bundled sample map.
fn select_maze() -> Result<(Grid, Point, Point), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.first().map(String::as_str) == Some("--random") {
        let rng = match args.get(1) {
            Some(seed) => StdRng::seed_from_u64(seed.parse()?),
            None => rand::make_rng(),
        };
        let mut grid = Grid::new(25, 15);
        MazeGen::new(rng).backtracker(&mut grid);
        let goal = Point::new(grid.width() - 2, grid.height() - 2);
        Ok((grid, Point::new(1, 1), goal))
    } else {
        let grid = mazer_maze::parse(SAMPLE_MAP)?;
        Ok((grid, SAMPLE_START, SAMPLE_GOAL))
    }
}
