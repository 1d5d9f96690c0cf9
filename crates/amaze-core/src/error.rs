//! Error types for grid construction and maze loading.

use thiserror::Error;

use crate::geom::Pos;

/// A precondition violation detected while building a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Width or height is zero or negative.
    #[error("grid dimensions must be positive, got {width}x{height}")]
    EmptyDimensions { width: i32, height: i32 },

    /// The cell buffer does not hold `width * height` entries.
    #[error("expected {expected} cells for the grid, found {found}")]
    CellCount { expected: usize, found: usize },

    /// A row passed to [`Grid::from_rows`](crate::Grid::from_rows) has the
    /// wrong length.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The start position lies outside the grid.
    #[error("start {0} is out of bounds")]
    StartOutOfBounds(Pos),

    /// The goal position lies outside the grid.
    #[error("goal {0} is out of bounds")]
    GoalOutOfBounds(Pos),

    /// The start position is a wall.
    #[error("start {0} is not passable")]
    StartBlocked(Pos),

    /// The goal position is a wall.
    #[error("goal {0} is not passable")]
    GoalBlocked(Pos),
}

/// Errors raised while reading a maze from its text form.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no maze found in input")]
    Empty,

    #[error("row {row} has length {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid maze character {ch:?} at row {row}, column {col}")]
    InvalidChar { ch: char, row: usize, col: usize },

    #[error("maze has no start marker 'o'")]
    MissingStart,

    #[error("maze has no goal marker '*'")]
    MissingGoal,

    #[error("second start marker at {second}, first was at {first}")]
    DuplicateStart { first: Pos, second: Pos },

    #[error("second goal marker at {second}, first was at {first}")]
    DuplicateGoal { first: Pos, second: Pos },

    #[error("failed to read maze: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Grid(#[from] GridError),
}
