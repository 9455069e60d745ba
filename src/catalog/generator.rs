//! Seeded synthetic catalogs for property tests and benchmarks.

use super::types::{Catalog, Course};
use crate::error::KnapsackError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generates random catalogs with ids `1..=n`.
///
/// # Examples
///
/// ```
/// use reskill_knapsack::catalog::CatalogGenerator;
///
/// let catalog = CatalogGenerator::default()
///     .with_max_hours(10)
///     .with_seed(42)
///     .generate(25)?;
/// assert_eq!(catalog.len(), 25);
/// assert!(catalog.iter().all(|c| (1..=10).contains(&c.hours)));
/// # Ok::<(), reskill_knapsack::KnapsackError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CatalogGenerator {
    /// Upper bound (inclusive) for course hours. Lower bound is 1.
    pub max_hours: usize,

    /// Upper bound (inclusive) for course impact. Lower bound is 0.
    pub max_impact: u64,

    /// Random seed for reproducibility. `None` draws a fresh seed.
    pub seed: Option<u64>,
}

impl Default for CatalogGenerator {
    fn default() -> Self {
        Self {
            max_hours: 40,
            max_impact: 100,
            seed: None,
        }
    }
}

impl CatalogGenerator {
    pub fn with_max_hours(mut self, h: usize) -> Self {
        self.max_hours = h.max(1);
        self
    }

    pub fn with_max_impact(mut self, v: u64) -> Self {
        self.max_impact = v;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Generates a catalog of `n` courses.
    ///
    /// Fails when `n` exceeds the id space (`u32`) or when the drawn impacts
    /// overflow the catalog total.
    pub fn generate(&self, n: usize) -> Result<Catalog, KnapsackError> {
        let count = u32::try_from(n).map_err(|_| KnapsackError::TooManyItems {
            count: n,
            max: u32::MAX as usize,
        })?;
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        let max_hours = self.max_hours.max(1);

        let courses = (1..=count)
            .map(|id| {
                let hours = rng.random_range(1..=max_hours);
                let impact = rng.random_range(0..=self.max_impact);
                Course::new(id, hours, impact).with_name(format!("Course {id}"))
            })
            .collect();

        Catalog::new(courses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_is_reproducible() {
        let generator = CatalogGenerator::default().with_seed(7);
        assert_eq!(generator.generate(30).unwrap(), generator.generate(30).unwrap());
    }

    #[test]
    fn test_generator_respects_bounds() {
        let catalog = CatalogGenerator::default()
            .with_max_hours(5)
            .with_max_impact(9)
            .with_seed(1)
            .generate(200)
            .unwrap();

        assert_eq!(catalog.len(), 200);
        for (i, course) in catalog.iter().enumerate() {
            assert_eq!(course.id as usize, i + 1);
            assert!((1..=5).contains(&course.hours));
            assert!(course.impact <= 9);
        }
    }

    #[test]
    fn test_generator_zero_courses() {
        assert!(CatalogGenerator::default().with_seed(3).generate(0).unwrap().is_empty());
    }

    #[test]
    fn test_zero_max_hours_is_clamped() {
        let catalog = CatalogGenerator::default()
            .with_max_hours(0)
            .with_seed(5)
            .generate(10)
            .unwrap();
        assert!(catalog.iter().all(|c| c.hours == 1));
    }

    #[test]
    fn test_impact_overflow_is_reported() {
        let err = CatalogGenerator::default()
            .with_max_impact(u64::MAX)
            .with_seed(9)
            .generate(200)
            .unwrap_err();
        assert!(matches!(err, KnapsackError::ImpactOverflow { .. }));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_count_beyond_id_space() {
        let n = u32::MAX as usize + 1;
        let err = CatalogGenerator::default().with_seed(1).generate(n).unwrap_err();
        assert!(matches!(err, KnapsackError::TooManyItems { count, .. } if count == n));
    }
}
