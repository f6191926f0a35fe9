//! Catalog error types.

use super::ProductCode;
use thiserror::Error;

/// Invariant violations raised by catalog mutation.
///
/// The engine guards every dispense, so these indicate a programming error
/// rather than a user mistake.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Stock was requested for a code the catalog does not hold
    #[error("invariant violation: product {0} is not in the catalog")]
    UnknownProduct(ProductCode),

    /// Stock would go negative
    #[error("invariant violation: product {0} is already out of stock")]
    OutOfStock(ProductCode),
}
