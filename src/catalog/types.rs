//! Course and catalog types.

use crate::error::KnapsackError;
use std::collections::HashMap;

/// A single training course.
///
/// Only `id`, `hours` and `impact` take part in the optimization;
/// `name` and `category` are carried for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Course {
    /// Unique identifier within a catalog.
    pub id: u32,

    /// Display label.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,

    /// Time cost in hours. Must be positive.
    pub hours: usize,

    /// Career-impact score gained when the course is selected.
    pub impact: u64,

    /// Display category.
    #[cfg_attr(feature = "serde", serde(default))]
    pub category: String,
}

impl Course {
    /// Creates a course with empty display fields.
    pub fn new(id: u32, hours: usize, impact: u64) -> Self {
        Self {
            id,
            name: String::new(),
            hours,
            impact,
            category: String::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the display category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }
}

/// An ordered, validated sequence of courses.
///
/// Catalog order defines the item indexing used by every solver. Once
/// constructed, a catalog is never mutated.
///
/// # Examples
///
/// ```
/// use reskill_knapsack::catalog::{Catalog, Course};
///
/// let catalog = Catalog::new(vec![
///     Course::new(1, 3, 10),
///     Course::new(2, 4, 15),
/// ]).unwrap();
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.total_hours(), 7);
///
/// assert!(Catalog::new(vec![Course::new(1, 3, 10), Course::new(1, 2, 5)]).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    courses: Vec<Course>,
    total_hours: usize,
    total_impact: u64,
}

impl Catalog {
    /// Validates and wraps a list of courses.
    ///
    /// Rejects zero-hour courses, duplicate ids, and catalogs whose total
    /// hours or total impact do not fit their integer type. Every sum a
    /// solver forms is bounded by these totals.
    pub fn new(courses: Vec<Course>) -> Result<Self, KnapsackError> {
        let mut seen: HashMap<u32, usize> = HashMap::with_capacity(courses.len());
        let mut total_hours = 0usize;
        let mut total_impact = 0u64;
        for (index, course) in courses.iter().enumerate() {
            if course.hours == 0 {
                return Err(KnapsackError::ZeroHours { id: course.id });
            }
            total_hours = total_hours
                .checked_add(course.hours)
                .ok_or(KnapsackError::HoursOverflow { id: course.id })?;
            total_impact = total_impact
                .checked_add(course.impact)
                .ok_or(KnapsackError::ImpactOverflow { id: course.id })?;
            if let Some(&first) = seen.get(&course.id) {
                return Err(KnapsackError::DuplicateId {
                    id: course.id,
                    first,
                    second: index,
                });
            }
            seen.insert(course.id, index);
        }
        Ok(Self {
            courses,
            total_hours,
            total_impact,
        })
    }

    /// Creates an empty catalog.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Returns the course at a 0-based catalog position.
    pub fn get(&self, index: usize) -> Option<&Course> {
        self.courses.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Course> {
        self.courses.iter()
    }

    /// Sum of hours over the whole catalog.
    pub fn total_hours(&self) -> usize {
        self.total_hours
    }

    /// Sum of impact over the whole catalog.
    pub fn total_impact(&self) -> u64 {
        self.total_impact
    }

    /// Number of cells in an `(n + 1) x (capacity + 1)` table for this catalog.
    pub fn table_cells(&self, capacity: usize) -> u128 {
        (self.courses.len() as u128 + 1) * (capacity as u128 + 1)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Course;
    type IntoIter = std::slice::Iter<'a, Course>;

    fn into_iter(self) -> Self::IntoIter {
        self.courses.iter()
    }
}
