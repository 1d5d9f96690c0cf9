use amaze_core::Pos;

use crate::Solver;
use crate::solver::{PathNode, UNREACHABLE};
use crate::traits::Pather;

impl Solver {
    /// Compute a breadth-first distance map from `source`.
    ///
    /// Each step has cost 1. Returns every reached position in visiting
    /// order, `source` first. An out-of-range `source` reaches nothing.
    pub fn bfs_map<P: Pather>(&mut self, pather: &P, source: Pos) -> &[PathNode] {
        let len = pather.cell_count();
        self.bfs_map.clear();
        self.bfs_map.resize(len, UNREACHABLE);
        self.bfs_queue.clear();
        self.bfs_results.clear();

        let Some(si) = pather.index(source) else {
            return &self.bfs_results;
        };
        let root = PathNode {
            pos: source,
            cost: 0,
        };
        self.bfs_map[si] = 0;
        self.bfs_queue.push_back(root);
        self.bfs_results.push(root);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(current) = self.bfs_queue.pop_front() {
            nbuf.clear();
            pather.neighbors(current.pos, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = pather.index(np) else {
                    continue;
                };
                if self.bfs_map[ni] != UNREACHABLE {
                    continue;
                }
                let next = PathNode {
                    pos: np,
                    cost: current.cost + 1,
                };
                self.bfs_map[ni] = next.cost;
                self.bfs_queue.push_back(next);
                self.bfs_results.push(next);
            }
        }

        self.nbuf = nbuf;
        &self.bfs_results
    }

    /// Query the distance at `p` from the last [`bfs_map`](Self::bfs_map)
    /// call.
    ///
    /// Returns [`UNREACHABLE`] if `p` was not reached or is out of range.
    pub fn bfs_at<P: Pather>(&self, pather: &P, p: Pos) -> u32 {
        match pather.index(p) {
            Some(i) => self.bfs_map.get(i).copied().unwrap_or(UNREACHABLE),
            None => UNREACHABLE,
        }
    }
}

/// Shortest number of steps from `from` to `to`, or `None` if `to` cannot
/// be reached.
pub fn bfs_distance<P: Pather>(pather: &P, from: Pos, to: Pos) -> Option<u32> {
    let mut solver = Solver::new();
    solver.bfs_map(pather, from);
    match solver.bfs_at(pather, to) {
        UNREACHABLE => None,
        d => Some(d),
    }
}
