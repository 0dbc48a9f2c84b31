//! Graph search for grid mazes.
//!
//! This crate turns a [`mazer_core::Grid`] into a 4-connected [`Graph`] and
//! finds paths between cells with uninformed search:
//!
//! - **BFS** shortest-path search ([`Graph::bfs`])
//! - **DFS** arbitrary-path search ([`Graph::dfs`])
//!
//! Both searches produce a [`PredecessorMap`] internally and hand it to
//! [`reconstruct`], which walks the discovery links backward from the goal
//! and emits the path as an ordered coordinate sequence.
//!
//! "No path" is a result, not an error: searches return `Ok(None)` when the
//! goal is unreachable and reserve [`SearchError`] for precondition
//! violations (out-of-range node indices).

mod bfs;
mod dfs;
mod distance;
mod graph;
mod path;

pub use distance::manhattan;
pub use graph::{Graph, GraphError, NodeIndex, coord_to_index, index_to_coord};
pub use path::{PredecessorMap, SearchError, reconstruct};
