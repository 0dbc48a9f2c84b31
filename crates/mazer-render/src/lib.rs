//! Terminal rendering for mazer.
//!
//! [`Renderer`] turns a grid and an optional solution path into a display
//! string: a bordered map with two characters per cell, colored with ANSI
//! escapes via crossterm when enabled. Rendering is pure — the caller
//! decides where the string goes.

use crossterm::style::Stylize;

use mazer_core::{Grid, Point};

/// What a cell displays as, after overlaying the solution and endpoints.
///
/// Precedence: start and goal beat the path, the path beats the base cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tile {
    Floor,
    Wall,
    Route,
    Start,
    Goal,
}

/// Renders a maze (and optionally its solution) to a `String`.
pub struct Renderer {
    color: bool,
}

impl Renderer {
    /// Create a new renderer with colors enabled.
    pub fn new() -> Self {
        Self { color: true }
    }

    /// Configure whether ANSI colors are emitted.
    pub fn with_color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    /// Render `grid` with the solution overlay.
    ///
    /// `path` cells are drawn as route markers except where they coincide
    /// with `start` or `goal`, which always show as `SS` / `GG`. Pass
    /// `None` for an unsolved maze (endpoints are still shown).
    pub fn render(
        &self,
        grid: &Grid,
        path: Option<&[Point]>,
        start: Point,
        goal: Point,
    ) -> String {
        let w = grid.width().max(0) as usize;
        let h = grid.height().max(0) as usize;

        let mut tiles = vec![Tile::Floor; w * h];
        for (p, cell) in grid.iter() {
            if cell.is_wall() {
                tiles[(p.y as usize) * w + p.x as usize] = Tile::Wall;
            }
        }
        if let Some(path) = path {
            for &p in path {
                if p == start || p == goal || !grid.contains(p) {
                    continue;
                }
                tiles[(p.y as usize) * w + p.x as usize] = Tile::Route;
            }
        }
        if grid.contains(start) {
            tiles[(start.y as usize) * w + start.x as usize] = Tile::Start;
        }
        if grid.contains(goal) {
            tiles[(goal.y as usize) * w + goal.x as usize] = Tile::Goal;
        }

        let mut out = String::new();
        let border: String = format!("+{}+\n", "-".repeat(w * 2));
        out.push_str(&border);
        for y in 0..h {
            out.push('|');
            for x in 0..w {
                self.push_tile(&mut out, tiles[y * w + x]);
            }
            out.push_str("|\n");
        }
        out.push_str(&border);
        out
    }

    fn push_tile(&self, out: &mut String, tile: Tile) {
        let glyph = match tile {
            Tile::Floor => "..",
            Tile::Wall => "##",
            Tile::Route => "**",
            Tile::Start => "SS",
            Tile::Goal => "GG",
        };
        if !self.color {
            out.push_str(glyph);
            return;
        }
        let styled = match tile {
            Tile::Floor => glyph.on_blue(),
            Tile::Wall => glyph.white().on_black(),
            Tile::Route => glyph.white().on_green(),
            Tile::Start => glyph.white().on_cyan(),
            Tile::Goal => glyph.white().on_red(),
        };
        out.push_str(&styled.to_string());
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
