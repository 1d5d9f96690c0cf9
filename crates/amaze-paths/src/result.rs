use std::fmt;
use std::time::Duration;

use amaze_core::Pos;

/// Why a search stopped before reaching a verdict.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CancelReason {
    /// A [`CancelToken`](crate::CancelToken) was triggered.
    Requested,
    /// [`SolverConfig::max_expansions`](crate::SolverConfig::max_expansions)
    /// was reached.
    ExpansionLimit,
}

/// Terminal state of a search.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchStatus {
    /// The goal was reached.
    Solved,
    /// The frontier ran dry: no route connects start and goal.
    Unsolvable,
    /// The search was stopped before it could decide.
    Cancelled(CancelReason),
}

impl fmt::Display for CancelReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Requested => f.write_str("requested"),
            Self::ExpansionLimit => f.write_str("expansion limit"),
        }
    }
}

impl fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solved => f.write_str("solved"),
            Self::Unsolvable => f.write_str("unsolvable"),
            Self::Cancelled(reason) => write!(f, "cancelled ({reason})"),
        }
    }
}

/// Advisory counters collected during a search.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Nodes created, the root included.
    pub generated: usize,
    /// Frontier pops discarded because their position was already finalized.
    pub stale: usize,
    /// Largest frontier size seen.
    pub peak_frontier: usize,
}

/// Outcome of a search.
///
/// When solved, `path` runs from start to goal (both included) and every
/// consecutive pair is one orthogonal step apart. Otherwise `path` is empty.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    pub status: SearchStatus,
    pub path: Vec<Pos>,
    /// Positions in the order they were finalized. Each position appears at
    /// most once. Empty when trace capture is disabled in the
    /// [`SolverConfig`](crate::SolverConfig).
    pub explored: Vec<Pos>,
    /// Number of positions finalized, whether or not `explored` was
    /// recorded.
    pub expansions: usize,
    pub stats: SearchStats,
    /// Wall-clock time spent in the search. Informational only.
    pub elapsed: Duration,
}

impl SearchResult {
    #[inline]
    pub fn solvable(&self) -> bool {
        self.status == SearchStatus::Solved
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        matches!(self.status, SearchStatus::Cancelled(_))
    }

    /// Number of steps in the path, or `None` if no path was found.
    pub fn path_len(&self) -> Option<usize> {
        if self.solvable() {
            Some(self.path.len().saturating_sub(1))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(status: SearchStatus, path: Vec<Pos>) -> SearchResult {
        SearchResult {
            status,
            path,
            explored: Vec::new(),
            expansions: 0,
            stats: SearchStats::default(),
            elapsed: Duration::ZERO,
        }
    }

    #[test]
    fn path_len_counts_steps() {
        let r = result(
            SearchStatus::Solved,
            vec![Pos::new(0, 0), Pos::new(0, 1), Pos::new(1, 1)],
        );
        assert!(r.solvable());
        assert_eq!(r.path_len(), Some(2));

        let single = result(SearchStatus::Solved, vec![Pos::new(4, 4)]);
        assert_eq!(single.path_len(), Some(0));
    }

    #[test]
    fn cancelled_is_not_unsolvable() {
        let r = result(SearchStatus::Cancelled(CancelReason::Requested), vec![]);
        assert!(!r.solvable());
        assert!(r.is_cancelled());
        assert_eq!(r.path_len(), None);

        let u = result(SearchStatus::Unsolvable, vec![]);
        assert!(!u.is_cancelled());
        assert_ne!(u.status, r.status);
    }

    #[test]
    fn status_display() {
        assert_eq!(SearchStatus::Solved.to_string(), "solved");
        assert_eq!(SearchStatus::Unsolvable.to_string(), "unsolvable");
        assert_eq!(
            SearchStatus::Cancelled(CancelReason::ExpansionLimit).to_string(),
            "cancelled (expansion limit)"
        );
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn result_round_trip() {
        let r = SearchResult {
            status: SearchStatus::Cancelled(CancelReason::ExpansionLimit),
            path: vec![],
            explored: vec![Pos::new(0, 0), Pos::new(1, 0)],
            expansions: 2,
            stats: SearchStats {
                generated: 3,
                stale: 0,
                peak_frontier: 2,
            },
            elapsed: Duration::from_micros(15),
        };
        let json = serde_json::to_string(&r).unwrap();
        let back: SearchResult = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
    }
}
