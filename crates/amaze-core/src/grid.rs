//! The [`Grid`] type - a read-only passability map with start and goal.
//!
//! A `Grid` is built once from validated input and never changes afterwards.
//! Cloning is cheap: clones share the same immutable cell buffer, so a grid
//! can be handed to a background search thread without copying.

use std::sync::Arc;

use crate::error::GridError;
use crate::geom::Pos;

/// A 2D maze of open and wall cells with explicit start and goal positions.
///
/// Invariant: `start` and `goal` are inside the grid and passable. Every
/// constructor checks this, so code holding a `Grid` can rely on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Arc<[bool]>,
    width: i32,
    height: i32,
    start: Pos,
    goal: Pos,
}

impl Grid {
    /// Create a grid from a row-major buffer of passability flags.
    ///
    /// `cells[row * width + col]` is `true` for open cells.
    pub fn new(
        width: i32,
        height: i32,
        cells: Vec<bool>,
        start: Pos,
        goal: Pos,
    ) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::EmptyDimensions { width, height });
        }
        let expected = width as usize * height as usize;
        if cells.len() != expected {
            return Err(GridError::CellCount {
                expected,
                found: cells.len(),
            });
        }
        let grid = Self {
            cells: cells.into(),
            width,
            height,
            start,
            goal,
        };
        if !grid.contains(start) {
            return Err(GridError::StartOutOfBounds(start));
        }
        if !grid.contains(goal) {
            return Err(GridError::GoalOutOfBounds(goal));
        }
        if !grid.passable(start) {
            return Err(GridError::StartBlocked(start));
        }
        if !grid.passable(goal) {
            return Err(GridError::GoalBlocked(goal));
        }
        Ok(grid)
    }

    /// Create a grid from rows of passability flags. All rows must have the
    /// same length.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R], start: Pos, goal: Pos) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut cells = Vec::with_capacity(width * height);
        for (row, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != width {
                return Err(GridError::RaggedRow {
                    row,
                    expected: width,
                    found: r.len(),
                });
            }
            cells.extend_from_slice(r);
        }
        Self::new(width as i32, height as i32, cells, start, goal)
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Total number of cells, walls included.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: a valid grid has at least its start cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn start(&self) -> Pos {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Pos {
        self.goal
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Pos) -> bool {
        p.row >= 0 && p.col >= 0 && p.row < self.height && p.col < self.width
    }

    /// Flat row-major index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Pos) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.row as usize * self.width as usize + p.col as usize)
    }

    /// Position of a flat row-major index. The index must be below
    /// [`len`](Self::len).
    #[inline]
    pub fn pos(&self, idx: usize) -> Pos {
        let w = self.width as usize;
        Pos::new((idx / w) as i32, (idx % w) as i32)
    }

    /// Whether `p` is an open cell. Positions outside the grid are walls.
    #[inline]
    pub fn passable(&self, p: Pos) -> bool {
        self.index(p).is_some_and(|i| self.cells[i])
    }

    #[inline]
    pub fn is_goal(&self, p: Pos) -> bool {
        p == self.goal
    }

    /// Passable orthogonal neighbours of `p`, in north, south, east, west
    /// order.
    pub fn neighbors(&self, p: Pos) -> impl Iterator<Item = Pos> + '_ {
        p.neighbors_4()
            .into_iter()
            .filter(|&n| self.passable(n))
    }

    /// Number of open cells.
    pub fn open_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Row-major iterator over `(Pos, passable)` pairs.
    pub fn iter(&self) -> GridIter<'_> {
        GridIter { grid: self, idx: 0 }
    }
}

/// Iterator over `(Pos, bool)` pairs of a [`Grid`] in row-major order.
pub struct GridIter<'a> {
    grid: &'a Grid,
    idx: usize,
}

impl Iterator for GridIter<'_> {
    type Item = (Pos, bool);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let open = *self.grid.cells.get(self.idx)?;
        let p = self.grid.pos(self.idx);
        self.idx += 1;
        Some((p, open))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.grid.cells.len() - self.idx;
        (n, Some(n))
    }
}

impl ExactSizeIterator for GridIter<'_> {}
