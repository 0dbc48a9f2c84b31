//! Adjacency graph derived from a maze grid.

use std::fmt;

use mazer_core::{Grid, Point};

use crate::path::SearchError;

/// Dense vertex identifier: `index = y * width + x`.
///
/// Every cell of the source grid owns an index, walls included; wall indices
/// simply never carry edges. Keeping the mapping dense lets adjacency live
/// in one flat `Vec` keyed by index.
pub type NodeIndex = usize;

/// Convert grid coordinates to a node index. `width` must be positive.
#[inline]
pub fn coord_to_index(p: Point, width: i32) -> NodeIndex {
    (p.y * width + p.x) as NodeIndex
}

/// Convert a node index back to grid coordinates. `width` must be positive.
#[inline]
pub fn index_to_coord(idx: NodeIndex, width: i32) -> Point {
    Point::new(idx as i32 % width, idx as i32 / width)
}

/// Error raised by graph construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// The source grid has a non-positive width or height.
    InvalidDimensions { width: i32, height: i32 },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "grid dimensions must be positive, got {width}x{height}")
            }
        }
    }
}

impl std::error::Error for GraphError {}

/// 4-connected adjacency over the floor cells of a grid.
///
/// Read-only after construction. Each node's neighbour list holds the
/// in-bounds floor neighbours in order up, down, left, right; wall nodes
/// keep an empty list. Adjacency is symmetric: the passability relation
/// used to build edges does not depend on direction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Graph {
    width: i32,
    height: i32,
    adj: Vec<Vec<NodeIndex>>,
}

impl Graph {
    /// Build the adjacency graph for a grid.
    ///
    /// Walls contribute no edges. A floor cell enclosed by walls or grid
    /// edges is a valid node with zero neighbours.
    pub fn from_grid(grid: &Grid) -> Result<Self, GraphError> {
        let width = grid.width();
        let height = grid.height();
        if width <= 0 || height <= 0 {
            return Err(GraphError::InvalidDimensions { width, height });
        }

        let num_nodes = (width as usize) * (height as usize);
        let mut adj = vec![Vec::new(); num_nodes];

        for (p, cell) in grid.iter() {
            if cell.is_wall() {
                continue;
            }
            let idx = coord_to_index(p, width);
            for n in p.neighbors_4() {
                if grid.at(n).is_some_and(|c| c.is_floor()) {
                    adj[idx].push(coord_to_index(n, width));
                }
            }
        }

        Ok(Self { width, height, adj })
    }

    /// Width of the source grid.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height of the source grid.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Total number of nodes (`width * height`, walls included).
    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.adj.len()
    }

    /// Neighbour indices of a node, in derivation order.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of range; searches validate their inputs with
    /// [`check_node`](Self::check_node) first.
    #[inline]
    pub fn neighbors(&self, idx: NodeIndex) -> &[NodeIndex] {
        &self.adj[idx]
    }

    /// The grid coordinates of a node index.
    #[inline]
    pub fn point(&self, idx: NodeIndex) -> Point {
        index_to_coord(idx, self.width)
    }

    /// Validate that `idx` names a node of this graph.
    pub fn check_node(&self, idx: NodeIndex) -> Result<(), SearchError> {
        if idx < self.num_nodes() {
            Ok(())
        } else {
            Err(SearchError::InvalidNode {
                index: idx,
                num_nodes: self.num_nodes(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazer_core::Cell;

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

    #[test]
    fn index_round_trip() {
        let w = 7;
        for y in 0..5 {
            for x in 0..w {
                let p = Point::new(x, y);
                assert_eq!(index_to_coord(coord_to_index(p, w), w), p);
            }
        }
        assert_eq!(coord_to_index(Point::new(3, 2), 7), 17);
        assert_eq!(index_to_coord(17, 7), Point::new(3, 2));
    }

    #[test]
    fn invalid_dimensions_rejected() {
        assert_eq!(
            Graph::from_grid(&Grid::new(0, 5)),
            Err(GraphError::InvalidDimensions {
                width: 0,
                height: 5
            })
        );
        assert_eq!(
            Graph::from_grid(&Grid::new(4, -1)),
            Err(GraphError::InvalidDimensions {
                width: 4,
                height: -1
            })
        );
    }

    #[test]
    fn open_grid_adjacency() {
        let g = Graph::from_grid(&Grid::new(3, 3)).unwrap();
        assert_eq!(g.num_nodes(), 9);
        // Corner: down, right.
        assert_eq!(g.neighbors(0), &[3, 1]);
        // Center: up, down, left, right.
        assert_eq!(g.neighbors(4), &[1, 7, 3, 5]);
    }

    #[test]
    fn walls_have_no_edges_and_are_not_targets() {
        let grid = grid_from(
            "...\n\
             .#.\n\
             ...",
        );
        let g = Graph::from_grid(&grid).unwrap();
        let center = coord_to_index(Point::new(1, 1), 3);
        assert!(g.neighbors(center).is_empty());
        for idx in 0..g.num_nodes() {
            assert!(!g.neighbors(idx).contains(&center));
        }
    }

    #[test]
    fn adjacency_is_symmetric() {
        let grid = grid_from(
            "..#.\n\
             .#..\n\
             ....",
        );
        let g = Graph::from_grid(&grid).unwrap();
        for u in 0..g.num_nodes() {
            for &v in g.neighbors(u) {
                assert!(
                    g.neighbors(v).contains(&u),
                    "edge {u}->{v} has no reverse"
                );
            }
        }
    }

    #[test]
    fn isolated_floor_cell_is_a_valid_node() {
        let grid = grid_from(
            "###\n\
             #.#\n\
             ###",
        );
        let g = Graph::from_grid(&grid).unwrap();
        let center = coord_to_index(Point::new(1, 1), 3);
        assert!(g.neighbors(center).is_empty());
        assert_eq!(grid.at(Point::new(1, 1)), Some(Cell::Floor));
    }

    #[test]
    fn neighbor_order_is_up_down_left_right() {
        let g = Graph::from_grid(&Grid::new(5, 5)).unwrap();
        let center = coord_to_index(Point::new(2, 2), 5);
        assert_eq!(g.point(center), Point::new(2, 2));
        let expected: Vec<NodeIndex> = [
            Point::new(2, 1),
            Point::new(2, 3),
            Point::new(1, 2),
            Point::new(3, 2),
        ]
        .iter()
        .map(|&p| coord_to_index(p, 5))
        .collect();
        assert_eq!(g.neighbors(center), expected.as_slice());
    }

    #[test]
    fn check_node_range() {
        let g = Graph::from_grid(&Grid::new(2, 2)).unwrap();
        assert!(g.check_node(3).is_ok());
        assert_eq!(
            g.check_node(4),
            Err(SearchError::InvalidNode {
                index: 4,
                num_nodes: 4
            })
        );
    }
}
