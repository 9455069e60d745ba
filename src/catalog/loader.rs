//! JSON catalog loading.
//!
//! A catalog file is a JSON array of course objects:
//!
//! ```json
//! [
//!   { "id": 1, "name": "Python for Data", "hours": 40, "impact": 85, "category": "Data" },
//!   { "id": 2, "name": "Cloud Basics", "hours": 25, "impact": 60, "category": "Infra" }
//! ]
//! ```
//!
//! `name` and `category` may be omitted. Parsed courses go through the same
//! validation as [`Catalog::new`].

use super::types::{Catalog, Course};
use crate::error::KnapsackError;
use std::path::Path;

impl Catalog {
    /// Parses a catalog from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, KnapsackError> {
        let courses: Vec<Course> = serde_json::from_str(json)?;
        Catalog::new(courses)
    }

    /// Reads and parses a catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, KnapsackError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json)?;
        log::debug!("loaded {} courses from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Serializes the catalog back to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, KnapsackError> {
        Ok(serde_json::to_string_pretty(self.courses())?)
    }
}
