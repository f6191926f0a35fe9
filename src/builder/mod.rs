//! Builder API for catalog construction.
//!
//! This module provides a fluent builder and a macro for creating catalogs
//! while validating every entry against the keypad grid.

pub mod catalog;
pub mod error;
pub mod macros;

pub use catalog::{CatalogBuilder, ProductEntry};
pub use error::{BuildError, EntryError};
