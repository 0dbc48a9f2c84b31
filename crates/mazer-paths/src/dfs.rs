use mazer_core::Point;

use crate::graph::{Graph, NodeIndex};
use crate::path::{PredecessorMap, SearchError, reconstruct};

impl Graph {
    /// Find a path from `start` to `goal` by iterative depth-first search.
    ///
    /// Same contract as [`Graph::bfs`] except for the shortest-path
    /// guarantee: the returned path is valid but may be arbitrarily longer
    /// than the optimum (bounded by the number of floor cells). Neighbours
    /// are pushed in derivation order (up, down, left, right) and therefore
    /// popped in reverse (right, left, down, up) — deterministic, but the
    /// particular path chosen is an implementation artifact, not a
    /// contract.
    pub fn dfs(&self, start: NodeIndex, goal: NodeIndex) -> Result<Option<Vec<Point>>, SearchError> {
        self.check_node(start)?;
        self.check_node(goal)?;

        let mut visited = vec![false; self.num_nodes()];
        let mut prev = PredecessorMap::new(self.num_nodes());
        let mut stack: Vec<NodeIndex> = Vec::new();

        // Visited is marked at push time, like BFS marks at enqueue time.
        visited[start] = true;
        stack.push(start);

        while let Some(cur) = stack.pop() {
            if cur == goal {
                break;
            }
            for &n in self.neighbors(cur) {
                if !visited[n] {
                    visited[n] = true;
                    prev.set(n, cur);
                    stack.push(n);
                }
            }
        }

        reconstruct(&prev, start, goal, self.width())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::coord_to_index;
    use crate::manhattan;
    use mazer_core::{Cell, Grid};

    fn grid_from(text: &str) -> Grid {
        let lines: Vec<&str> = text.lines().collect();
        let mut g = Grid::new(lines[0].len() as i32, lines.len() as i32);
        for (y, line) in lines.iter().enumerate() {
            for (x, ch) in line.chars().enumerate() {
                if ch == '#' {
                    g.set_wall(Point::new(x as i32, y as i32));
                }
            }
        }
        g
    }

    fn solve(grid: &Grid, start: Point, goal: Point) -> Option<Vec<Point>> {
        let g = Graph::from_grid(grid).unwrap();
        g.dfs(
            coord_to_index(start, grid.width()),
            coord_to_index(goal, grid.width()),
        )
        .unwrap()
    }

    fn assert_valid_path(grid: &Grid, path: &[Point], start: Point, goal: Point) {
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&goal));
        for p in path {
            assert_eq!(grid.at(*p), Some(Cell::Floor), "path crosses wall at {p}");
        }
        for pair in path.windows(2) {
            assert_eq!(manhattan(pair[0], pair[1]), 1, "jump in path");
        }
    }

    #[test]
    fn start_equals_goal() {
        let grid = grid_from(
            "###\n\
             #.#\n\
             ###",
        );
        let path = solve(&grid, Point::new(1, 1), Point::new(1, 1)).unwrap();
        assert_eq!(path, vec![Point::new(1, 1)]);
    }

    #[test]
    fn finds_a_valid_path_around_walls() {
        let grid = grid_from(
            "...\n\
             .#.\n\
             ...",
        );
        let start = Point::new(0, 0);
        let goal = Point::new(2, 2);
        let path = solve(&grid, start, goal).unwrap();
        assert_valid_path(&grid, &path, start, goal);
        assert!(!path.contains(&Point::new(1, 1)));
        // No shortest-path guarantee, but never longer than the floor count.
        assert!(path.len() <= grid.count(Cell::Floor));
    }

    #[test]
    fn deterministic_given_fixed_neighbor_order() {
        let grid = grid_from(
            "....\n\
             .##.\n\
             ....",
        );
        let start = Point::new(0, 0);
        let goal = Point::new(3, 2);
        let a = solve(&grid, start, goal).unwrap();
        let b = solve(&grid, start, goal).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn wall_column_splits_grid() {
        let grid = grid_from(
            "..#..\n\
             ..#..\n\
             ..#..",
        );
        assert_eq!(solve(&grid, Point::new(0, 0), Point::new(4, 2)), None);
    }

    #[test]
    fn out_of_range_index_is_an_error() {
        let g = Graph::from_grid(&Grid::new(3, 3)).unwrap();
        assert_eq!(
            g.dfs(9, 0),
            Err(SearchError::InvalidNode {
                index: 9,
                num_nodes: 9
            })
        );
    }

    #[test]
    fn reaches_exactly_what_bfs_reaches() {
        // DFS completeness: a path exists for DFS iff it exists for BFS.
        let texts = [
            "......\n\
             .##.#.\n\
             .#..#.\n\
             .#.##.\n\
             ...#..\n\
             .#....",
            ".#..\n\
             .#..\n\
             .#..\n\
             ....",
            "##\n\
             ##",
        ];
        for text in texts {
            let grid = grid_from(text);
            let g = Graph::from_grid(&grid).unwrap();
            for start in 0..g.num_nodes() {
                for goal in 0..g.num_nodes() {
                    let via_dfs = g.dfs(start, goal).unwrap();
                    let via_bfs = g.bfs(start, goal).unwrap();
                    assert_eq!(
                        via_dfs.is_some(),
                        via_bfs.is_some(),
                        "reachability disagrees for {start}->{goal}"
                    );
                }
            }
        }
    }
}
