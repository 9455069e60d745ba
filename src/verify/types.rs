//! Verification outcome types.

use crate::error::KnapsackError;
use crate::solver::Solution;

/// Consistency verdict between the two dynamic-programming solvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Same value and the same set of course ids.
    Agree,

    /// Same value, but a different selection.
    ///
    /// Legitimate when several selections reach the optimum (equal-impact
    /// alternatives); the two solvers break such ties differently.
    ///
    /// Also covers equal values with different hours totals. Only the value
    /// decides correctness, so a tied optimum that spends fewer hours is
    /// reported here rather than as [`Verdict::Disagree`].
    ItemsetDiffers,

    /// Different optimal values. One of the solvers is defective.
    Disagree,
}

/// Comparison data between the memoized and tabulated solutions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verification {
    pub verdict: Verdict,
    pub memoized_value: u64,
    pub tabulated_value: u64,
    pub memoized_hours: usize,
    pub tabulated_hours: usize,
    /// Selected ids from the memoized solver, sorted ascending.
    pub memoized_ids: Vec<u32>,
    /// Selected ids from the tabulated solver, sorted ascending.
    pub tabulated_ids: Vec<u32>,
}

impl Verification {
    /// Whether the reported optimum can be trusted.
    pub fn is_consistent(&self) -> bool {
        self.verdict != Verdict::Disagree
    }

    /// Whether both solvers spent the same number of hours.
    pub fn hours_match(&self) -> bool {
        self.memoized_hours == self.tabulated_hours
    }

    /// Converts a `Disagree` verdict into [`KnapsackError::SolverMismatch`].
    pub fn into_result(self) -> Result<Self, KnapsackError> {
        match self.verdict {
            Verdict::Disagree => Err(KnapsackError::SolverMismatch {
                memoized: self.memoized_value,
                tabulated: self.tabulated_value,
            }),
            _ => Ok(self),
        }
    }
}

/// Full output of one optimization run.
#[derive(Debug, Clone)]
pub struct Comparison {
    /// Hours budget the run was solved for.
    pub capacity: usize,
    pub memoized: Solution,
    pub tabulated: Solution,
    pub verification: Verification,
}

impl Comparison {
    /// The value both solvers agree on, if they do.
    pub fn optimal_value(&self) -> Option<u64> {
        self.verification
            .is_consistent()
            .then_some(self.memoized.value)
    }
}
