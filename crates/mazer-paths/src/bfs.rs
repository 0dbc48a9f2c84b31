use std::collections::VecDeque;

use mazer_core::Point;

use crate::graph::{Graph, NodeIndex};
use crate::path::{PredecessorMap, SearchError, reconstruct};

impl Graph {
    /// Find a shortest path from `start` to `goal` by breadth-first search.
    ///
    /// Returns the full path including both endpoints, `Ok(None)` when no
    /// path exists, and [`SearchError::InvalidNode`] when either index is
    /// out of range. The returned path is shortest in edge count; among
    /// equally short paths, the one following neighbour derivation order
    /// (up, down, left, right) wins. `start == goal` yields a
    /// single-element path.
    pub fn bfs(&self, start: NodeIndex, goal: NodeIndex) -> Result<Option<Vec<Point>>, SearchError> {
        self.check_node(start)?;
        self.check_node(goal)?;

        let mut visited = vec![false; self.num_nodes()];
        let mut prev = PredecessorMap::new(self.num_nodes());
        let mut queue: VecDeque<NodeIndex> = VecDeque::new();

        // A node is marked visited and gets its predecessor when first
        // enqueued, never on dequeue.
        visited[start] = true;
        queue.push_back(start);

        while let Some(cur) = queue.pop_front() {
            if cur == goal {
                // Early stop; continuing would not change the result.
                break;
            }
            for &n in self.neighbors(cur) {
                if !visited[n] {
                    visited[n] = true;
                    prev.set(n, cur);
                    queue.push_back(n);
                }
            }
        }

        reconstruct(&prev, start, goal, self.width())
    }
}
