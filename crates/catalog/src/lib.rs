//! # Lexicon Catalog
//!
//! The canonical programming-glossary data: term records grouped into ordered
//! categories, compiled into the binary and built exactly once at startup.
//!
//! The catalog is read-only for the life of the process. `Catalog::load()`
//! validates the embedded definition (required fields, closed difficulty
//! enumeration, catalog-wide id uniqueness) and fails hard on any structural
//! problem; everything downstream can then treat the data as trusted.

mod error;
mod store;
mod types;

pub use error::{CatalogError, Result};
pub use store::{display_name_for, Catalog, CategoryInfo};
pub use types::{Category, Difficulty, Term};
