//! Course catalog model.
//!
//! A [`Catalog`] is the ordered, validated list of [`Course`]s that every
//! solver indexes into. Validation happens once, at construction, so the
//! solvers can assume positive hours and unique ids.

mod generator;
#[cfg(feature = "serde")]
mod loader;
mod types;

pub use generator::CatalogGenerator;
pub use types::{Catalog, Course};
