//! Course selection under an hours budget as a 0/1 knapsack problem.
//!
//! Given an ordered catalog of courses, each with an hours cost and a
//! career-impact score, find the subset with maximum total impact whose
//! hours fit the budget.
//!
//! - **Catalog**: validated course list ([`catalog::Catalog`]), optional JSON
//!   loading (feature `serde`) and a seeded synthetic generator.
//! - **Solvers**: two independent dynamic-programming implementations
//!   behind [`solver::KnapsackSolver`], top-down with a memo cache and
//!   bottom-up with value and decision tables, plus an exhaustive oracle.
//! - **Verify**: runs both solvers and classifies the pair of results
//!   ([`verify::Verdict`]).
//! - **Report**: plain-text rendering for the `reskill` binary.
//!
//! # Example
//!
//! ```
//! use reskill_knapsack::catalog::{Catalog, Course};
//! use reskill_knapsack::solver::{KnapsackSolver, TabulatedSolver};
//!
//! let catalog = Catalog::new(vec![
//!     Course::new(1, 3, 10),
//!     Course::new(2, 4, 15),
//!     Course::new(3, 5, 20),
//! ])?;
//!
//! let solution = TabulatedSolver::default().solve(&catalog, 7)?;
//! assert_eq!(solution.value, 25);
//! assert_eq!(solution.ids_sorted(), vec![1, 2]);
//! # Ok::<(), reskill_knapsack::KnapsackError>(())
//! ```
//!
//! # Features
//!
//! - `serde`: serde derives on [`catalog::Course`] and JSON catalog files
//! - `parallel`: rayon row filling and concurrent solver runs
//! - `cli`: the `reskill` binary

pub mod catalog;
mod error;
pub mod report;
pub mod solver;
pub mod verify;

pub use error::KnapsackError;
