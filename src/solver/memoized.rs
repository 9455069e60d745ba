//! Top-down solver with a memoized subproblem cache.
//!
//! # Algorithm
//!
//! For subproblem `(i, w)` (first `i` courses, `w` hours remaining):
//!
//! 1. `i == 0` or `w == 0`: value 0
//! 2. course `i` needs more than `w` hours: `best(i - 1, w)`
//! 3. otherwise: `max(best(i - 1, w), impact_i + best(i - 1, w - hours_i))`
//!
//! Each `(i, w)` is computed at most once and cached in a dense
//! `(n + 1) x (capacity + 1)` table owned by the call.
//!
//! The selection is recovered by replaying the optimality condition from
//! `(n, capacity)` downward: course `i` was taken iff it fits, the
//! remainder `(i - 1, w - hours_i)` is known, and
//! `impact_i + best(i - 1, w - hours_i) == best(i, w)`. Under ties this
//! prefers inclusion, unlike [`TabulatedSolver`](super::TabulatedSolver).
//!
//! Subproblems are resolved on an explicit work stack rather than the call
//! stack, so a long catalog cannot overflow the thread stack. Only states
//! reachable from `(n, capacity)` are ever evaluated.

use super::config::SolverConfig;
use super::types::{KnapsackSolver, Solution};
use crate::catalog::{Catalog, Course};
use crate::error::KnapsackError;

/// Recursive dynamic-programming solver.
#[derive(Debug, Clone, Default)]
pub struct MemoizedSolver {
    config: SolverConfig,
}

impl MemoizedSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }
}

impl KnapsackSolver for MemoizedSolver {
    fn name(&self) -> &'static str {
        "memoized (top-down)"
    }

    fn solve(&self, catalog: &Catalog, capacity: usize) -> Result<Solution, KnapsackError> {
        self.config.validate()?;
        if catalog.is_empty() || capacity == 0 {
            return Ok(Solution::empty());
        }
        self.config.check_table(catalog, capacity)?;

        let mut memo = Memo::new(catalog.courses(), capacity);
        let value = memo.best(catalog.len(), capacity);
        let indices = memo.reconstruct(capacity);

        log::debug!(
            "memoized: n={} capacity={} value={} states={} selected={}",
            catalog.len(),
            capacity,
            value,
            memo.computed,
            indices.len()
        );

        Ok(Solution::from_indices(value, catalog, indices))
    }
}

/// Subproblem cache for one solve call.
struct Memo<'a> {
    courses: &'a [Course],
    width: usize,
    cells: Vec<Option<u64>>,
    computed: usize,
}

impl<'a> Memo<'a> {
    fn new(courses: &'a [Course], capacity: usize) -> Self {
        let width = capacity + 1;
        Self {
            courses,
            width,
            cells: vec![None; (courses.len() + 1) * width],
            computed: 0,
        }
    }

    /// Evaluates `(i, w)`, resolving missing subproblems first.
    ///
    /// A frame stays on the work stack until both of its children are
    /// known; it is then computed once and popped.
    fn best(&mut self, i: usize, w: usize) -> u64 {
        if let Some(value) = self.lookup(i, w) {
            return value;
        }

        let mut stack = vec![(i, w)];
        while let Some(&(i, w)) = stack.last() {
            if self.lookup(i, w).is_some() {
                // pushed twice by different parents
                stack.pop();
                continue;
            }

            let course = &self.courses[i - 1];
            let (hours, impact) = (course.hours, course.impact);

            let without = self.lookup(i - 1, w);
            if without.is_none() {
                stack.push((i - 1, w));
            }
            let remainder = if hours <= w {
                let r = self.lookup(i - 1, w - hours);
                if r.is_none() {
                    stack.push((i - 1, w - hours));
                }
                r
            } else {
                Some(0)
            };

            let (Some(without), Some(remainder)) = (without, remainder) else {
                continue;
            };
            let value = if hours > w {
                without
            } else {
                // bounded by Catalog::total_impact
                without.max(impact + remainder)
            };

            self.cells[i * self.width + w] = Some(value);
            self.computed += 1;
            stack.pop();
        }

        self.lookup(i, w).unwrap_or_default()
    }

    /// Cached value of `(i, w)`. Base cases are always known.
    fn lookup(&self, i: usize, w: usize) -> Option<u64> {
        if i == 0 || w == 0 {
            Some(0)
        } else {
            self.cells[i * self.width + w]
        }
    }

    /// Walks from `(n, capacity)` down to row 0 and returns the selected
    /// positions in catalog order.
    fn reconstruct(&self, capacity: usize) -> Vec<usize> {
        let mut picked = Vec::new();
        let mut w = capacity;

        for i in (1..=self.courses.len()).rev() {
            if w == 0 {
                break;
            }
            let course = &self.courses[i - 1];
            if course.hours > w {
                continue;
            }
            let remainder = self.lookup(i - 1, w - course.hours);
            let here = self.lookup(i, w);
            if let (Some(remainder), Some(here)) = (remainder, here) {
                if remainder + course.impact == here {
                    log::trace!("memoized: take course {} at (i={i}, w={w})", course.id);
                    picked.push(i - 1);
                    w -= course.hours;
                }
            }
        }

        picked.reverse();
        picked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(items: &[(u32, usize, u64)]) -> Catalog {
        Catalog::new(
            items
                .iter()
                .map(|&(id, hours, impact)| Course::new(id, hours, impact))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_three_course_scenario() {
        let catalog = catalog(&[(1, 3, 10), (2, 4, 15), (3, 5, 20)]);
        let solution = MemoizedSolver::default().solve(&catalog, 7).unwrap();

        assert_eq!(solution.value, 25);
        assert_eq!(solution.total_hours, 7);
        assert_eq!(solution.ids_sorted(), vec![1, 2]);
        assert_eq!(solution.indices, vec![0, 1]);
    }

    #[test]
    fn test_first_course_is_selectable() {
        // the remainder after taking course 1 is a base case (row 0)
        let catalog = catalog(&[(1, 4, 9)]);
        let solution = MemoizedSolver::default().solve(&catalog, 10).unwrap();

        assert_eq!(solution.value, 9);
        assert_eq!(solution.ids_sorted(), vec![1]);
    }

    #[test]
    fn test_exact_fit_is_selectable() {
        // the remainder after taking course 2 is a base case (w == 0)
        let catalog = catalog(&[(1, 2, 1), (2, 6, 30)]);
        let solution = MemoizedSolver::default().solve(&catalog, 6).unwrap();

        assert_eq!(solution.value, 30);
        assert_eq!(solution.ids_sorted(), vec![2]);
        assert_eq!(solution.total_hours, 6);
    }

    #[test]
    fn test_single_course_too_long() {
        let catalog = catalog(&[(1, 8, 50)]);
        let solution = MemoizedSolver::default().solve(&catalog, 7).unwrap();
        assert_eq!(solution, Solution::empty());
    }

    #[test]
    fn test_nothing_fits() {
        let catalog = catalog(&[(1, 5, 10), (2, 6, 20), (3, 9, 1)]);
        let solution = MemoizedSolver::default().solve(&catalog, 4).unwrap();
        assert_eq!(solution.value, 0);
        assert!(solution.is_empty());
    }

    #[test]
    fn test_empty_catalog_and_zero_capacity() {
        let solver = MemoizedSolver::default();
        assert_eq!(solver.solve(&Catalog::empty(), 10).unwrap(), Solution::empty());

        let catalog = catalog(&[(1, 1, 10)]);
        assert_eq!(solver.solve(&catalog, 0).unwrap(), Solution::empty());
    }

    #[test]
    fn test_tie_prefers_inclusion_of_later_course() {
        let catalog = catalog(&[(1, 2, 5), (2, 2, 5)]);
        let solution = MemoizedSolver::default().solve(&catalog, 3).unwrap();

        assert_eq!(solution.value, 5);
        assert_eq!(solution.ids_sorted(), vec![2]);
    }

    #[test]
    fn test_each_state_computed_once() {
        let courses: Vec<Course> = (1..=12)
            .map(|id| Course::new(id, (id as usize % 5) + 1, u64::from(id * 3 % 7)))
            .collect();
        let catalog = Catalog::new(courses).unwrap();
        let capacity = 20;

        let mut memo = Memo::new(catalog.courses(), capacity);
        let first = memo.best(catalog.len(), capacity);
        let computed = memo.computed;
        let second = memo.best(catalog.len(), capacity);

        assert_eq!(first, second);
        assert_eq!(memo.computed, computed, "cached state was recomputed");
        assert_eq!(memo.cells.iter().filter(|c| c.is_some()).count(), computed);
        assert!(computed <= catalog.len() * capacity);
    }

    #[test]
    fn test_long_catalog_small_budget() {
        let courses: Vec<Course> = (1..=200_000).map(|id| Course::new(id, 1, 1)).collect();
        let catalog = Catalog::new(courses).unwrap();

        let solution = MemoizedSolver::default().solve(&catalog, 2).unwrap();
        assert_eq!(solution.value, 2);
        assert_eq!(solution.indices, vec![199_998, 199_999]);

        let tabulated = crate::solver::TabulatedSolver::default()
            .solve(&catalog, 2)
            .unwrap();
        assert_eq!(tabulated.value, solution.value);
    }

    #[test]
    fn test_only_reachable_states_evaluated() {
        // hours 4 and 6 from w = 10 never reach odd capacities
        let catalog = catalog(&[(1, 4, 3), (2, 6, 5), (3, 4, 4)]);
        let mut memo = Memo::new(catalog.courses(), 10);
        assert_eq!(memo.best(3, 10), 9);
        for i in 1..=3 {
            for w in (1..=10).step_by(2) {
                assert!(memo.lookup(i, w).is_none(), "({i}, {w}) was evaluated");
            }
        }
    }

    #[test]
    fn test_table_limit() {
        let catalog = catalog(&[(1, 1, 1), (2, 1, 1)]);
        let solver = MemoizedSolver::new(SolverConfig::default().with_max_table_cells(10));
        assert!(matches!(
            solver.solve(&catalog, 100),
            Err(KnapsackError::TableTooLarge { .. })
        ));
    }

    #[test]
    fn test_idempotent() {
        let catalog = catalog(&[(1, 3, 4), (2, 2, 3), (3, 4, 5), (4, 5, 6)]);
        let solver = MemoizedSolver::default();
        let a = solver.solve(&catalog, 5).unwrap();
        let b = solver.solve(&catalog, 5).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.value, 7);
    }
}
