use std::time::Instant;

use amaze_core::{Grid, Pos};

use crate::Solver;
use crate::cancel::CancelToken;
use crate::node::{NodeId, SearchNode};
use crate::observer::{ExploreStep, SearchObserver};
use crate::result::{CancelReason, SearchResult, SearchStats, SearchStatus};
use crate::traits::AstarPather;

impl Solver {
    /// Solve `grid` from its start to its goal.
    pub fn solve(&mut self, grid: &Grid) -> SearchResult {
        self.solve_with(grid, &mut (), None)
    }

    /// Solve `grid`, streaming finalized positions to `observer` and
    /// stopping early if `cancel` is triggered.
    pub fn solve_with<O: SearchObserver>(
        &mut self,
        grid: &Grid,
        observer: &mut O,
        cancel: Option<&CancelToken>,
    ) -> SearchResult {
        self.astar(grid, grid.start(), grid.goal(), observer, cancel)
    }

    /// Run A* from `from` to `to`.
    ///
    /// Nodes are popped by ascending `f = g + h`, first-in-first-out among
    /// equal `f`. There is no decrease-key: a position may sit in the
    /// frontier several times and every pop of an already finalized
    /// position is discarded. With unit step costs and a consistent
    /// heuristic the first pop of a position carries its shortest `g`.
    ///
    /// If `from` is outside the pather's index space the result is
    /// unsolvable with nothing explored.
    pub fn astar<P: AstarPather, O: SearchObserver>(
        &mut self,
        pather: &P,
        from: Pos,
        to: Pos,
        observer: &mut O,
        cancel: Option<&CancelToken>,
    ) -> SearchResult {
        let started = Instant::now();
        log::debug!("astar: searching {from} -> {to}");

        self.arena.clear();
        self.frontier.clear();
        self.finalized.reset(pather.cell_count());

        let mut explored = Vec::new();
        let mut stats = SearchStats::default();

        let goal = if pather.index(from).is_some() {
            let root = self.arena.push(SearchNode::root(from, pather.estimate(from, to)));
            self.frontier.push(root, self.arena.get(root).f());
            self.expand_until_done(pather, to, observer, cancel, &mut explored, &mut stats)
        } else {
            Err(SearchStatus::Unsolvable)
        };

        let (status, path) = match goal {
            Ok(id) => (SearchStatus::Solved, self.arena.path_to(id)),
            Err(status) => (status, Vec::new()),
        };
        stats.generated = self.arena.len();
        observer.finished(status);

        let elapsed = started.elapsed();
        log::debug!(
            "astar: {status:?} after {} expansions ({} generated, {} stale) in {elapsed:?}",
            self.finalized.len(),
            stats.generated,
            stats.stale,
        );

        SearchResult {
            status,
            path,
            explored,
            expansions: self.finalized.len(),
            stats,
            elapsed,
        }
    }

    /// Main loop. Returns the goal node, or the status the search ended
    /// with when no goal was reached.
    fn expand_until_done<P: AstarPather, O: SearchObserver>(
        &mut self,
        pather: &P,
        to: Pos,
        observer: &mut O,
        cancel: Option<&CancelToken>,
        explored: &mut Vec<Pos>,
        stats: &mut SearchStats,
    ) -> Result<NodeId, SearchStatus> {
        let mut nbuf = std::mem::take(&mut self.nbuf);

        let outcome = loop {
            if cancel.is_some_and(CancelToken::is_cancelled) {
                break Err(SearchStatus::Cancelled(CancelReason::Requested));
            }
            if self
                .config
                .max_expansions
                .is_some_and(|limit| self.finalized.len() >= limit)
            {
                break Err(SearchStatus::Cancelled(CancelReason::ExpansionLimit));
            }

            stats.peak_frontier = stats.peak_frontier.max(self.frontier.len());
            let Some(ci) = self.frontier.pop() else {
                break Err(SearchStatus::Unsolvable);
            };
            let current = *self.arena.get(ci);

            let Some(idx) = pather.index(current.pos) else {
                continue;
            };
            // Skip stale entries.
            if !self.finalized.insert(idx) {
                stats.stale += 1;
                continue;
            }

            let step = ExploreStep {
                index: self.finalized.len() - 1,
                pos: current.pos,
                g: current.g,
                h: current.h,
            };
            log::trace!("astar: finalized {} g={} h={}", step.pos, step.g, step.h);
            if self.config.record_trace {
                explored.push(current.pos);
            }
            observer.explored(step);

            if current.pos == to {
                break Ok(ci);
            }

            let g = current
                .g
                .checked_add(1)
                .expect("path cost overflowed u32");

            nbuf.clear();
            pather.neighbors(current.pos, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = pather.index(np) else {
                    continue;
                };
                if self.finalized.contains(ni) {
                    continue;
                }
                let node = SearchNode {
                    pos: np,
                    parent: Some(ci),
                    g,
                    h: pather.estimate(np, to),
                };
                let f = node.f();
                let id = self.arena.push(node);
                self.frontier.push(id, f);
            }
        };

        self.nbuf = nbuf;
        outcome
    }
}
