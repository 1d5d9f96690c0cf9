use amaze_core::{Grid, Pos};

use crate::distance::manhattan;

/// Minimal search interface: a flat index space plus neighbour enumeration.
pub trait Pather {
    /// Size of the index space returned by [`index`](Self::index).
    fn cell_count(&self) -> usize;

    /// Flat index of `p`, or `None` if `p` is outside the searchable area.
    fn index(&self, p: Pos) -> Option<usize>;

    /// Append the reachable neighbours of `p` into `buf`. The caller clears
    /// `buf` before calling. Order matters: it decides ties.
    fn neighbors(&self, p: Pos, buf: &mut Vec<Pos>);
}

/// Pather with an admissible, consistent heuristic for A*.
///
/// Every step costs 1, so `estimate` must never exceed the number of steps
/// left and may drop by at most 1 per step.
pub trait AstarPather: Pather {
    fn estimate(&self, from: Pos, to: Pos) -> u32;
}

impl Pather for Grid {
    #[inline]
    fn cell_count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn index(&self, p: Pos) -> Option<usize> {
        Grid::index(self, p)
    }

    fn neighbors(&self, p: Pos, buf: &mut Vec<Pos>) {
        buf.extend(Grid::neighbors(self, p));
    }
}

impl AstarPather for Grid {
    #[inline]
    fn estimate(&self, from: Pos, to: Pos) -> u32 {
        manhattan(from, to)
    }
}
