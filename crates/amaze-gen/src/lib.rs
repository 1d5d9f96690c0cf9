//! Random maze generation.
//!
//! Provides three generators, all driven by a caller-supplied RNG so that a
//! seed reproduces the same maze:
//! - **Carve**: a perfect maze (exactly one route between any two open
//!   cells) dug by a randomized depth-first walk.
//! - **Braid**: knocks holes into an existing maze's walls to add loops.
//! - **Scatter**: independent random walls, which may or may not leave the
//!   goal reachable.

mod mazegen;

pub use mazegen::{MAX_DIM, MazeGen};
