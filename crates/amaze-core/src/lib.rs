//! **amaze-core**: the maze model shared by the *amaze* crates.
//!
//! This crate provides the leaf types of the workspace: geometry primitives,
//! the immutable passability [`Grid`] with its start/goal invariant, and the
//! line-oriented text loader that turns maze files into validated grids.

pub mod error;
pub mod geom;
pub mod grid;
pub mod text;

pub use error::{GridError, LoadError};
pub use geom::{Dir, Pos};
pub use grid::{Grid, GridIter};
pub use text::{load_maze, parse_maze};
