//! Maze authoring utilities for mazer.
//!
//! Two ways to populate a [`mazer_core::Grid`] before handing it to the
//! solver: parse a hand-written ASCII map ([`map::parse`]) or carve a
//! random maze ([`MazeGen`]).

pub mod map;
pub mod mapgen;

pub use map::{MapError, parse};
pub use mapgen::MazeGen;
