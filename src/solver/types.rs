//! Solver trait and solution type.

use crate::catalog::{Catalog, Course};
use crate::error::KnapsackError;

/// A 0/1 knapsack solver over a course catalog.
///
/// Implementations own all of their working tables for the duration of
/// one `solve` call; nothing is shared between calls or between solvers.
///
/// # Contract
///
/// For a validated catalog and any capacity, the returned [`Solution`]
/// satisfies:
///
/// - `value` is the maximum impact sum over all subsets whose hours fit
///   within `capacity`
/// - `total_hours <= capacity`
/// - the impact of `selected` sums to `value`
/// - `selected` preserves catalog order
///
/// A capacity of zero or an empty catalog yields [`Solution::empty`].
pub trait KnapsackSolver: Send + Sync {
    /// Short human-readable solver name, used in logs and reports.
    fn name(&self) -> &'static str;

    /// Computes an optimal selection.
    fn solve(&self, catalog: &Catalog, capacity: usize) -> Result<Solution, KnapsackError>;
}

/// Result of a single solver run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Optimal total impact.
    pub value: u64,

    /// Selected courses, in catalog order.
    pub selected: Vec<Course>,

    /// 0-based catalog positions of the selected courses, strictly increasing.
    pub indices: Vec<usize>,

    /// Sum of hours over the selected courses.
    pub total_hours: usize,
}

impl Solution {
    /// The empty selection with value 0.
    pub fn empty() -> Self {
        Self {
            value: 0,
            selected: Vec::new(),
            indices: Vec::new(),
            total_hours: 0,
        }
    }

    /// Builds a solution from catalog positions given in ascending order.
    pub(crate) fn from_indices(value: u64, catalog: &Catalog, indices: Vec<usize>) -> Self {
        let selected: Vec<Course> = indices
            .iter()
            .filter_map(|&i| catalog.get(i).cloned())
            .collect();
        let total_hours = selected.iter().map(|c| c.hours).sum();
        Self {
            value,
            selected,
            indices,
            total_hours,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Impact recomputed from the selected courses.
    pub fn total_impact(&self) -> u64 {
        self.selected.iter().map(|c| c.impact).sum()
    }

    /// Ids of the selected courses, sorted ascending.
    pub fn ids_sorted(&self) -> Vec<u32> {
        let mut ids: Vec<u32> = self.selected.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        ids
    }
}
