//! Geometry primitives: [`Pos`] and [`Dir`].
//!
//! Positions are `(row, col)` pairs, zero-indexed, with rows growing
//! downwards. Ordering is row-major.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Dir
// ---------------------------------------------------------------------------

/// One of the four orthogonal moves allowed in a maze.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dir {
    North,
    South,
    East,
    West,
}

impl Dir {
    /// All directions in neighbour enumeration order.
    ///
    /// Search tie-breaking depends on this order, so it must never change.
    pub const ALL: [Dir; 4] = [Dir::North, Dir::South, Dir::East, Dir::West];

    /// The `(drow, dcol)` offset of a single step in this direction.
    #[inline]
    pub const fn delta(self) -> Pos {
        match self {
            Dir::North => Pos::new(-1, 0),
            Dir::South => Pos::new(1, 0),
            Dir::East => Pos::new(0, 1),
            Dir::West => Pos::new(0, -1),
        }
    }
}

// ---------------------------------------------------------------------------
// Pos
// ---------------------------------------------------------------------------

/// A cell position in a maze.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new position.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a position shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The position one step away in `dir`.
    #[inline]
    pub const fn step(self, dir: Dir) -> Self {
        let d = dir.delta();
        self.shift(d.row, d.col)
    }

    /// The four orthogonal neighbours in [`Dir::ALL`] order (north, south,
    /// east, west). Bounds are not checked.
    #[inline]
    pub const fn neighbors_4(self) -> [Pos; 4] {
        [
            self.step(Dir::North),
            self.step(Dir::South),
            self.step(Dir::East),
            self.step(Dir::West),
        ]
    }

    /// Whether `other` is exactly one orthogonal step away.
    #[inline]
    pub fn is_adjacent(self, other: Pos) -> bool {
        let d = other - self;
        d.row.abs() + d.col.abs() == 1
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Add for Pos {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Pos {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}
