//! Solution comparison and the two-solver optimization run.

use super::types::{Comparison, Verdict, Verification};
use crate::catalog::Catalog;
use crate::error::KnapsackError;
use crate::solver::{KnapsackSolver, MemoizedSolver, Solution, SolverConfig, TabulatedSolver};

/// Compares the memoized and tabulated solutions.
///
/// - values differ: [`Verdict::Disagree`]
/// - values equal, ids and hours equal: [`Verdict::Agree`]
/// - values equal, ids or hours differ: [`Verdict::ItemsetDiffers`]
pub fn verify(memoized: &Solution, tabulated: &Solution) -> Verification {
    let memoized_ids = memoized.ids_sorted();
    let tabulated_ids = tabulated.ids_sorted();

    let verdict = if memoized.value != tabulated.value {
        Verdict::Disagree
    } else if memoized.total_hours == tabulated.total_hours && memoized_ids == tabulated_ids {
        Verdict::Agree
    } else {
        Verdict::ItemsetDiffers
    };

    Verification {
        verdict,
        memoized_value: memoized.value,
        tabulated_value: tabulated.value,
        memoized_hours: memoized.total_hours,
        tabulated_hours: tabulated.total_hours,
        memoized_ids,
        tabulated_ids,
    }
}

/// Runs both dynamic-programming solvers on one catalog and verifies them.
///
/// # Examples
///
/// ```
/// use reskill_knapsack::catalog::{Catalog, Course};
/// use reskill_knapsack::verify::{Optimizer, Verdict};
///
/// let catalog = Catalog::new(vec![
///     Course::new(1, 3, 10),
///     Course::new(2, 4, 15),
///     Course::new(3, 5, 20),
/// ]).unwrap();
///
/// let run = Optimizer::default().run(&catalog, 7).unwrap();
/// assert_eq!(run.verification.verdict, Verdict::Agree);
/// assert_eq!(run.optimal_value(), Some(25));
/// assert_eq!(run.tabulated.total_hours, 7);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Optimizer {
    memoized: MemoizedSolver,
    tabulated: TabulatedSolver,
}

impl Optimizer {
    pub fn new(config: SolverConfig) -> Self {
        Self {
            memoized: MemoizedSolver::new(config.clone()),
            tabulated: TabulatedSolver::new(config),
        }
    }

    pub fn config(&self) -> &SolverConfig {
        self.tabulated.config()
    }

    /// Solves for `capacity` hours with both solvers and compares them.
    ///
    /// Rejects `capacity == 0`. A [`Verdict::Disagree`] is returned as data,
    /// not as an error; use [`Verification::into_result`] to escalate it.
    pub fn run(&self, catalog: &Catalog, capacity: usize) -> Result<Comparison, KnapsackError> {
        if capacity == 0 {
            return Err(KnapsackError::InvalidCapacity { capacity });
        }
        self.config().validate()?;

        log::debug!(
            "optimizing {} courses for {} hours (parallel={})",
            catalog.len(),
            capacity,
            self.config().use_rayon()
        );

        let (memoized, tabulated) = self.solve_both(catalog, capacity);
        let memoized = memoized?;
        let tabulated = tabulated?;

        let verification = verify(&memoized, &tabulated);
        match verification.verdict {
            Verdict::Agree => log::info!(
                "{} and {} agree: value {} in {} hours",
                self.memoized.name(),
                self.tabulated.name(),
                memoized.value,
                memoized.total_hours
            ),
            Verdict::ItemsetDiffers => log::warn!(
                "equal value {} but different selections: {:?} ({}h) vs {:?} ({}h)",
                memoized.value,
                verification.memoized_ids,
                verification.memoized_hours,
                verification.tabulated_ids,
                verification.tabulated_hours
            ),
            Verdict::Disagree => log::error!(
                "solvers diverged: {} = {}, {} = {}",
                self.memoized.name(),
                memoized.value,
                self.tabulated.name(),
                tabulated.value
            ),
        }

        Ok(Comparison {
            capacity,
            memoized,
            tabulated,
            verification,
        })
    }

    #[cfg(feature = "parallel")]
    fn solve_both(
        &self,
        catalog: &Catalog,
        capacity: usize,
    ) -> (Result<Solution, KnapsackError>, Result<Solution, KnapsackError>) {
        if self.config().parallel {
            rayon::join(
                || self.memoized.solve(catalog, capacity),
                || self.tabulated.solve(catalog, capacity),
            )
        } else {
            (
                self.memoized.solve(catalog, capacity),
                self.tabulated.solve(catalog, capacity),
            )
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn solve_both(
        &self,
        catalog: &Catalog,
        capacity: usize,
    ) -> (Result<Solution, KnapsackError>, Result<Solution, KnapsackError>) {
        (
            self.memoized.solve(catalog, capacity),
            self.tabulated.solve(catalog, capacity),
        )
    }
}
