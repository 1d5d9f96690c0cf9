use std::collections::VecDeque;

use amaze_core::{Grid, Pos};

use crate::finalized::Finalized;
use crate::frontier::Frontier;
use crate::node::NodeArena;
use crate::result::SearchResult;

/// A position with its distance from the source, returned from BFS map
/// queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Pos,
    pub cost: u32,
}

/// Sentinel value meaning "unreachable" in BFS maps.
pub const UNREACHABLE: u32 = u32::MAX;

/// Tunables for a [`Solver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolverConfig {
    /// Record finalized positions into [`SearchResult::explored`].
    /// Observers are notified either way.
    pub record_trace: bool,
    /// Stop with [`CancelReason::ExpansionLimit`](crate::CancelReason) once
    /// this many positions have been finalized.
    pub max_expansions: Option<usize>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            record_trace: true,
            max_expansions: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Solver
// ---------------------------------------------------------------------------

/// Reusable search engine.
///
/// `Solver` owns the node arena, frontier heap, finalized set and BFS
/// buffers, so repeated searches allocate nothing once the buffers have
/// grown to fit the largest grid seen.
#[derive(Debug, Default)]
pub struct Solver {
    pub(crate) config: SolverConfig,
    // A* state
    pub(crate) arena: NodeArena,
    pub(crate) frontier: Frontier,
    pub(crate) finalized: Finalized,
    // BFS caches
    pub(crate) bfs_map: Vec<u32>,
    pub(crate) bfs_queue: VecDeque<PathNode>,
    pub(crate) bfs_results: Vec<PathNode>,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Pos>,
}

impl Solver {
    pub fn new() -> Self {
        Self::with_config(SolverConfig::default())
    }

    pub fn with_config(config: SolverConfig) -> Self {
        Self {
            config,
            arena: NodeArena::default(),
            frontier: Frontier::default(),
            finalized: Finalized::default(),
            bfs_map: Vec::new(),
            bfs_queue: VecDeque::new(),
            bfs_results: Vec::new(),
            nbuf: Vec::with_capacity(4),
        }
    }

    #[inline]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: SolverConfig) {
        self.config = config;
    }
}

/// Solve `grid` from its start to its goal with a fresh [`Solver`].
pub fn solve(grid: &Grid) -> SearchResult {
    Solver::new().solve(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_records_trace() {
        let s = Solver::new();
        assert!(s.config().record_trace);
        assert_eq!(s.config().max_expansions, None);
    }

    #[test]
    fn set_config_replaces() {
        let mut s = Solver::default();
        let cfg = SolverConfig {
            record_trace: false,
            max_expansions: Some(10),
        };
        s.set_config(cfg);
        assert_eq!(*s.config(), cfg);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_missing_fields_use_defaults() {
        let cfg: SolverConfig = serde_json::from_str(r#"{"max_expansions": 5}"#).unwrap();
        assert!(cfg.record_trace);
        assert_eq!(cfg.max_expansions, Some(5));
    }

    #[test]
    fn pathnode_round_trip() {
        let node = PathNode {
            pos: Pos::new(3, 7),
            cost: 42,
        };
        let json = serde_json::to_string(&node).unwrap();
        let back: PathNode = serde_json::from_str(&json).unwrap();
        assert_eq!(node, back);
    }
}
