//! Solver configuration.

use crate::catalog::Catalog;
use crate::error::KnapsackError;

/// Configuration shared by the dynamic-programming solvers.
///
/// # Examples
///
/// ```
/// use reskill_knapsack::solver::SolverConfig;
///
/// let config = SolverConfig::default()
///     .with_max_table_cells(1_000_000)
///     .with_parallel(false);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Upper bound on `(n + 1) * (capacity + 1)`.
    ///
    /// Both solvers allocate dense tables of this size; a larger instance
    /// is rejected with [`KnapsackError::TableTooLarge`] instead of
    /// attempting the allocation.
    pub max_table_cells: u64,

    /// Whether to use rayon where results are unaffected: row filling in
    /// the tabulated solver and running the two solvers side by side.
    ///
    /// Has no effect unless the crate is built with the `parallel` feature.
    pub parallel: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_table_cells: 50_000_000,
            parallel: false,
        }
    }
}

impl SolverConfig {
    pub fn with_max_table_cells(mut self, n: u64) -> Self {
        self.max_table_cells = n;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), KnapsackError> {
        if self.max_table_cells == 0 {
            return Err(KnapsackError::InvalidConfig {
                reason: "max_table_cells must be positive".into(),
            });
        }
        Ok(())
    }

    /// Whether rayon should actually be used.
    pub(crate) fn use_rayon(&self) -> bool {
        cfg!(feature = "parallel") && self.parallel
    }

    /// Rejects instances whose table would exceed `max_table_cells`.
    pub(crate) fn check_table(&self, catalog: &Catalog, capacity: usize) -> Result<(), KnapsackError> {
        let cells = catalog.table_cells(capacity);
        let limit = u128::from(self.max_table_cells);
        if cells > limit {
            return Err(KnapsackError::TableTooLarge { cells, limit });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Course;

    #[test]
    fn test_default_is_valid() {
        let config = SolverConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.parallel);
    }

    #[test]
    fn test_zero_cell_limit_is_invalid() {
        let config = SolverConfig::default().with_max_table_cells(0);
        assert!(matches!(
            config.validate(),
            Err(KnapsackError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_check_table() {
        let catalog = Catalog::new(vec![Course::new(1, 1, 1), Course::new(2, 1, 1)]).unwrap();
        let config = SolverConfig::default().with_max_table_cells(33);

        // 3 rows x 11 columns
        assert!(config.check_table(&catalog, 10).is_ok());
        match config.check_table(&catalog, 11) {
            Err(KnapsackError::TableTooLarge { cells, limit }) => {
                assert_eq!(cells, 36);
                assert_eq!(limit, 33);
            }
            other => panic!("expected TableTooLarge, got {other:?}"),
        }
    }
}
