//! Build errors for the catalog builder.

use crate::catalog::ProductCode;
use thiserror::Error;

/// Problems with a single catalog entry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EntryError {
    #[error("Invalid product code '{0}': expected a letter A-D followed by a digit 1-4")]
    InvalidCode(String),

    #[error("Product code {0} is listed more than once")]
    DuplicateCode(ProductCode),

    #[error("Product '{code}' has an empty name")]
    EmptyName { code: String },

    #[error("Product '{code}' must have a price above zero")]
    ZeroPrice { code: String },
}

/// Errors that can occur when building a catalog.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("No products defined. Add at least one product")]
    NoProducts,

    /// Every invalid entry, not just the first one found
    #[error("Catalog has {} invalid entries: {}", .0.len(), summarize(.0))]
    InvalidEntries(Vec<EntryError>),
}

fn summarize(errors: &[EntryError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
