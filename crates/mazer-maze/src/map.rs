//! ASCII maze maps.
//!
//! A map is a newline-separated block of equal-width lines where `#` is a
//! wall and `.` (or a space) is floor. This is the authoring format the
//! bundled sample maze uses.

use std::fmt;

use mazer_core::{Cell, Grid, Point};

/// Errors that can occur when parsing an ASCII map.
#[derive(Debug, Clone)]
pub enum MapError {
    /// Lines have inconsistent widths.
    InconsistentSize(String),
    /// A character not in the allowed set was found.
    InvalidChar {
        ch: char,
        pos: Point,
        content: String,
    },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentSize(s) => write!(f, "map has inconsistent line widths:\n{s}"),
            Self::InvalidChar { ch, pos, content } => {
                write!(
                    f,
                    "map contains invalid character \u{201c}{ch}\u{201d} at ({}, {}):\n{content}",
                    pos.x, pos.y
                )
            }
        }
    }
}

impl std::error::Error for MapError {}

/// Parse an ASCII map into a [`Grid`].
///
/// Every line must have the same width. `#` becomes [`Cell::Wall`]; `.` and
/// space become [`Cell::Floor`]. An empty string parses to an inert 0x0
/// grid (which graph construction rejects downstream).
pub fn parse(text: &str) -> Result<Grid, MapError> {
    let lines: Vec<&str> = text.lines().collect();
    let height = lines.len() as i32;
    let width = lines.first().map_or(0, |l| l.chars().count()) as i32;

    let mut grid = Grid::new(width, height);
    for (y, line) in lines.iter().enumerate() {
        if line.chars().count() as i32 != width {
            return Err(MapError::InconsistentSize(text.to_string()));
        }
        for (x, ch) in line.chars().enumerate() {
            let pos = Point::new(x as i32, y as i32);
            match ch {
                '#' => grid.set(pos, Cell::Wall),
                '.' | ' ' => grid.set(pos, Cell::Floor),
                _ => {
                    return Err(MapError::InvalidChar {
                        ch,
                        pos,
                        content: text.to_string(),
                    });
                }
            }
        }
    }
    Ok(grid)
}
