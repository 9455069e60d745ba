//! 0/1 knapsack solvers.
//!
//! Two independently written dynamic-programming solvers share the
//! [`KnapsackSolver`] interface so their results can be cross-checked:
//!
//! - [`MemoizedSolver`]: top-down, caches `(i, w)` subproblems, recovers
//!   the selection by replaying the optimality condition.
//! - [`TabulatedSolver`]: iterative, fills a value table and a decision
//!   table, recovers the selection by replaying recorded decisions.
//!
//! [`ExhaustiveSolver`] enumerates all subsets and serves as an oracle for
//! small catalogs.
//!
//! Both dynamic-programming solvers run in `O(n * capacity)` time and space.
//!
//! # References
//!
//! Kellerer, Pferschy & Pisinger (2004), "Knapsack Problems", ch. 2

mod config;
mod exhaustive;
mod memoized;
mod tabulated;
mod types;

pub use config::SolverConfig;
pub use exhaustive::ExhaustiveSolver;
pub use memoized::MemoizedSolver;
pub use tabulated::TabulatedSolver;
pub use types::{KnapsackSolver, Solution};
