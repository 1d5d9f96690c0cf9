//! A* search over maze grids.
//!
//! This crate is the search engine of *amaze*. Given a [`Grid`] it runs an
//! informed best-first search (A\* with the Manhattan heuristic) from the
//! start cell to the goal cell and returns a [`SearchResult`] holding:
//!
//! - the outcome ([`SearchStatus`]): solved, unsolvable or cancelled,
//! - the shortest path from start to goal,
//! - the order in which cells were finalized, for replaying the search.
//!
//! ```
//! use amaze_core::parse_maze;
//!
//! let grid = parse_maze("o  \n## \n*  \n").unwrap();
//! let result = amaze_paths::solve(&grid);
//! assert!(result.solvable());
//! assert_eq!(result.path.len(), 7);
//! ```
//!
//! Repeated searches should go through a [`Solver`], which keeps its
//! scratch buffers between calls.
//!
//! # Streaming
//!
//! [`Solver::solve_with`] reports every finalized cell to a
//! [`SearchObserver`] as it happens. Observers are one-way: an `mpsc`
//! sender works out of the box and the search never waits on the receiver.
//! A [`CancelToken`] stops a running search between two expansions.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS distances |
//! | [`AstarPather`] : [`Pather`] | A* |
//!
//! [`Grid`]: amaze_core::Grid

mod astar;
mod bfs;
mod cancel;
mod distance;
mod finalized;
mod frontier;
mod node;
mod observer;
mod result;
mod solver;
mod traits;

pub use bfs::bfs_distance;
pub use cancel::CancelToken;
pub use distance::manhattan;
pub use node::{NodeId, SearchNode};
pub use observer::{ExploreStep, FnObserver, SearchEvent, SearchObserver};
pub use result::{CancelReason, SearchResult, SearchStats, SearchStatus};
pub use solver::{PathNode, Solver, SolverConfig, UNREACHABLE, solve};
pub use traits::{AstarPather, Pather};
