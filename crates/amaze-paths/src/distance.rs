use amaze_core::Pos;

/// Manhattan (L1) distance between two positions.
///
/// Exact for an open grid with orthogonal unit steps, so it never
/// overestimates the remaining path length in a maze.
#[inline]
pub fn manhattan(a: Pos, b: Pos) -> u32 {
    a.row.abs_diff(b.row) + a.col.abs_diff(b.col)
}
