//! Random maze generation.
//!
//! [`MazeGen`] carves corridors with an iterative backtracking walk over
//! the odd-coordinate lattice: the grid is filled with walls, then a random
//! depth-first walk knocks out the wall between the current cell and an
//! uncarved cell two steps away. The result is fully connected: every floor
//! cell is reachable from the carve origin `(1, 1)`.

use mazer_core::{Cell, Grid, Point};
use rand::RngExt;

/// Steps to the four lattice neighbours two cells away.
const JUMPS: [Point; 4] = [
    Point::new(0, -2),
    Point::new(0, 2),
    Point::new(-2, 0),
    Point::new(2, 0),
];

/// Random maze carver owning its RNG.
pub struct MazeGen<R: RngExt> {
    rng: R,
}

impl<R: RngExt> MazeGen<R> {
    /// Create a new generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Carve a maze into `grid`, replacing its contents.
    ///
    /// The outermost ring always stays wall. Odd grid dimensions give the
    /// usual wall/corridor alternation; grids smaller than 3x3 have no room
    /// to carve and come back all wall. Returns the number of floor cells
    /// carved.
    pub fn backtracker(&mut self, grid: &mut Grid) -> usize {
        grid.fill(Cell::Wall);
        let origin = Point::new(1, 1);
        if grid.width() < 3 || grid.height() < 3 {
            return 0;
        }

        grid.set_floor(origin);
        let mut carved = 1;
        let mut stack = vec![origin];

        while let Some(&cur) = stack.last() {
            let mut candidates = [Point::ZERO; 4];
            let mut count = 0;
            for d in JUMPS {
                let next = cur + d;
                // Stay inside the border ring.
                if next.x < 1
                    || next.y < 1
                    || next.x > grid.width() - 2
                    || next.y > grid.height() - 2
                {
                    continue;
                }
                if grid.at(next) == Some(Cell::Wall) {
                    candidates[count] = next;
                    count += 1;
                }
            }

            if count == 0 {
                stack.pop();
                continue;
            }

            let next = candidates[self.rng.random_range(0..count)];
            grid.set_floor((cur + next) / 2);
            grid.set_floor(next);
            carved += 2;
            stack.push(next);
        }

        log::debug!(
            "backtracker carved {carved} floor cells in a {}x{} grid",
            grid.width(),
            grid.height()
        );
        carved
    }
}
