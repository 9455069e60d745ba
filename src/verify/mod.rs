//! Cross-validation of the two dynamic-programming solvers.
//!
//! [`Optimizer`] runs [`MemoizedSolver`](crate::solver::MemoizedSolver) and
//! [`TabulatedSolver`](crate::solver::TabulatedSolver) on the same input and
//! [`verify`] classifies the pair as agreeing, agreeing on value with a
//! different selection, or disagreeing. Only disagreement indicates a bug.

mod runner;
mod types;

pub use runner::{verify, Optimizer};
pub use types::{Comparison, Verdict, Verification};
