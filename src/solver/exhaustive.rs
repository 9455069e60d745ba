//! Exhaustive subset enumeration, used as a reference for small catalogs.

use super::types::{KnapsackSolver, Solution};
use crate::catalog::Catalog;
use crate::error::KnapsackError;

/// Enumerates all `2^n` subsets and keeps the best feasible one.
///
/// Among subsets with the maximum impact, the one with the lowest bitmask
/// (bit `k` = catalog position `k`) wins. Limited to
/// [`ExhaustiveSolver::MAX_ITEMS`] courses.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExhaustiveSolver;

impl ExhaustiveSolver {
    /// Largest catalog accepted.
    pub const MAX_ITEMS: usize = 20;

    pub fn new() -> Self {
        Self
    }
}

impl KnapsackSolver for ExhaustiveSolver {
    fn name(&self) -> &'static str {
        "exhaustive"
    }

    fn solve(&self, catalog: &Catalog, capacity: usize) -> Result<Solution, KnapsackError> {
        let n = catalog.len();
        if n > Self::MAX_ITEMS {
            return Err(KnapsackError::TooManyItems {
                count: n,
                max: Self::MAX_ITEMS,
            });
        }
        if n == 0 || capacity == 0 {
            return Ok(Solution::empty());
        }

        let courses = catalog.courses();
        let mut best_mask = 0u32;
        let mut best_value = 0u64;

        for mask in 1..(1u32 << n) {
            let mut hours = 0usize;
            let mut impact = 0u64;
            for (k, course) in courses.iter().enumerate() {
                if mask & (1 << k) != 0 {
                    hours += course.hours;
                    impact += course.impact;
                }
            }
            if hours <= capacity && impact > best_value {
                best_value = impact;
                best_mask = mask;
            }
        }

        let indices: Vec<usize> = (0..n).filter(|&k| best_mask & (1 << k) != 0).collect();
        log::debug!("exhaustive: n={n} capacity={capacity} value={best_value}");
        Ok(Solution::from_indices(best_value, catalog, indices))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Course;

    #[test]
    fn test_three_course_scenario() {
        let catalog = Catalog::new(vec![
            Course::new(1, 3, 10),
            Course::new(2, 4, 15),
            Course::new(3, 5, 20),
        ])
        .unwrap();

        let solution = ExhaustiveSolver.solve(&catalog, 7).unwrap();
        assert_eq!(solution.value, 25);
        assert_eq!(solution.indices, vec![0, 1]);
    }

    #[test]
    fn test_rejects_large_catalog() {
        let courses = (1..=21).map(|id| Course::new(id, 1, 1)).collect();
        let catalog = Catalog::new(courses).unwrap();
        assert!(matches!(
            ExhaustiveSolver.solve(&catalog, 5),
            Err(KnapsackError::TooManyItems { count: 21, max: 20 })
        ));
    }

    #[test]
    fn test_nothing_fits() {
        let catalog = Catalog::new(vec![Course::new(1, 9, 9)]).unwrap();
        assert_eq!(ExhaustiveSolver.solve(&catalog, 8).unwrap(), Solution::empty());
    }
}
