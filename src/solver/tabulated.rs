//! Bottom-up solver with a value table and a decision table.
//!
//! # Algorithm
//!
//! `dp[i][w]` is the best impact using the first `i` courses within `w`
//! hours; `keep[i][w]` records whether course `i` was taken for that cell.
//!
//! For each course `i` in catalog order and each `w` in `0..=capacity`:
//!
//! 1. `dp[i][w] = dp[i - 1][w]` (exclude by default)
//! 2. if `hours_i <= w` and `impact_i + dp[i - 1][w - hours_i] > dp[i][w]`,
//!    take the include value and set `keep[i][w]`
//!
//! The comparison is strict, so ties favor exclusion. Row `i` depends only
//! on row `i - 1`, which allows filling a row in parallel across `w`.
//!
//! The selection is recovered by replaying `keep` from `(n, capacity)`.

use super::config::SolverConfig;
use super::types::{KnapsackSolver, Solution};
use crate::catalog::{Catalog, Course};
use crate::error::KnapsackError;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Iterative dynamic-programming solver.
#[derive(Debug, Clone, Default)]
pub struct TabulatedSolver {
    config: SolverConfig,
}

impl TabulatedSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }
}

impl KnapsackSolver for TabulatedSolver {
    fn name(&self) -> &'static str {
        "tabulated (bottom-up)"
    }

    fn solve(&self, catalog: &Catalog, capacity: usize) -> Result<Solution, KnapsackError> {
        self.config.validate()?;
        if catalog.is_empty() || capacity == 0 {
            return Ok(Solution::empty());
        }
        self.config.check_table(catalog, capacity)?;

        let table = Table::fill(catalog.courses(), capacity, self.config.use_rayon());
        let value = table.value(catalog.len(), capacity);
        let indices = table.reconstruct(catalog.courses(), capacity);

        log::debug!(
            "tabulated: n={} capacity={} value={} cells={} selected={}",
            catalog.len(),
            capacity,
            value,
            table.dp.len(),
            indices.len()
        );

        Ok(Solution::from_indices(value, catalog, indices))
    }
}

/// Dense `(n + 1) x (capacity + 1)` value and decision tables, row-major.
struct Table {
    width: usize,
    dp: Vec<u64>,
    keep: Vec<bool>,
}

impl Table {
    fn fill(courses: &[Course], capacity: usize, parallel: bool) -> Self {
        let width = capacity + 1;
        let rows = courses.len() + 1;
        let mut dp = vec![0u64; rows * width];
        let mut keep = vec![false; rows * width];

        for (i, course) in courses.iter().enumerate().map(|(k, c)| (k + 1, c)) {
            let (done, pending) = dp.split_at_mut(i * width);
            let prev = &done[(i - 1) * width..];
            let row = &mut pending[..width];
            let keep_row = &mut keep[i * width..(i + 1) * width];

            if parallel {
                fill_row_parallel(prev, row, keep_row, course);
            } else {
                fill_row(prev, row, keep_row, course);
            }
        }

        Self { width, dp, keep }
    }

    fn value(&self, i: usize, w: usize) -> u64 {
        self.dp[i * self.width + w]
    }

    fn kept(&self, i: usize, w: usize) -> bool {
        self.keep[i * self.width + w]
    }

    fn reconstruct(&self, courses: &[Course], capacity: usize) -> Vec<usize> {
        let mut picked = Vec::new();
        let mut i = courses.len();
        let mut w = capacity;

        while i > 0 && w > 0 {
            if self.kept(i, w) {
                let course = &courses[i - 1];
                log::trace!("tabulated: take course {} at (i={i}, w={w})", course.id);
                picked.push(i - 1);
                w -= course.hours;
            }
            i -= 1;
        }

        picked.reverse();
        picked
    }
}

/// Computes one cell from the previous row.
#[inline]
fn cell(prev: &[u64], w: usize, course: &Course) -> (u64, bool) {
    let exclude = prev[w];
    if course.hours <= w {
        let include = course.impact + prev[w - course.hours];
        if include > exclude {
            return (include, true);
        }
    }
    (exclude, false)
}

fn fill_row(prev: &[u64], row: &mut [u64], keep_row: &mut [bool], course: &Course) {
    for (w, (value, kept)) in row.iter_mut().zip(keep_row.iter_mut()).enumerate() {
        (*value, *kept) = cell(prev, w, course);
    }
}

#[cfg(feature = "parallel")]
fn fill_row_parallel(prev: &[u64], row: &mut [u64], keep_row: &mut [bool], course: &Course) {
    row.par_iter_mut()
        .zip(keep_row.par_iter_mut())
        .enumerate()
        .for_each(|(w, (value, kept))| {
            (*value, *kept) = cell(prev, w, course);
        });
}

#[cfg(not(feature = "parallel"))]
fn fill_row_parallel(prev: &[u64], row: &mut [u64], keep_row: &mut [bool], course: &Course) {
    fill_row(prev, row, keep_row, course);
}
