//! Builder for constructing catalogs.

use crate::builder::error::{BuildError, EntryError};
use crate::catalog::{Catalog, Product, ProductCode};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// An unvalidated catalog entry, as written by hand or read from config.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductEntry {
    pub code: String,
    pub name: String,
    pub price: u32,
    pub stock: u32,
}

/// Builder for constructing catalogs with a fluent API.
///
/// Validation accumulates every problem across all entries, so a broken
/// config reports all of its mistakes in one go.
///
/// ```rust
/// use mealy_vend::builder::{BuildError, CatalogBuilder};
///
/// let catalog = CatalogBuilder::new()
///     .product("A1", "Water", 10, 3)
///     .product("A2", "Soda", 15, 0)
///     .build()
///     .unwrap();
/// assert_eq!(catalog.len(), 2);
///
/// let err = CatalogBuilder::new()
///     .product("Z9", "", 0, 1)
///     .build()
///     .unwrap_err();
/// assert!(matches!(err, BuildError::InvalidEntries(errors) if errors.len() == 3));
/// ```
#[derive(Clone, Debug, Default)]
pub struct CatalogBuilder {
    entries: Vec<ProductEntry>,
}

impl CatalogBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add a product slot.
    pub fn product(
        mut self,
        code: impl Into<String>,
        name: impl Into<String>,
        price: u32,
        stock: u32,
    ) -> Self {
        self.entries.push(ProductEntry {
            code: code.into(),
            name: name.into(),
            price,
            stock,
        });
        self
    }

    /// Add multiple entries at once.
    pub fn entries(mut self, entries: impl IntoIterator<Item = ProductEntry>) -> Self {
        self.entries.extend(entries);
        self
    }

    /// Check every entry, accumulating ALL problems.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<EntryError>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<EntryError>>> = Vec::new();
        let mut seen = HashSet::new();

        for entry in &self.entries {
            let check = match entry.code.parse::<ProductCode>() {
                Ok(code) => {
                    if seen.insert(code) {
                        Validation::success(())
                    } else {
                        Validation::fail(EntryError::DuplicateCode(code))
                    }
                }
                Err(_) => Validation::fail(EntryError::InvalidCode(entry.code.clone())),
            };
            checks.push(check);

            if entry.name.trim().is_empty() {
                checks.push(Validation::fail(EntryError::EmptyName {
                    code: entry.code.clone(),
                }));
            }

            if entry.price == 0 {
                checks.push(Validation::fail(EntryError::ZeroPrice {
                    code: entry.code.clone(),
                }));
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Build the catalog.
    /// Returns an error if there are no entries or any entry is invalid.
    pub fn build(self) -> Result<Catalog, BuildError> {
        if self.entries.is_empty() {
            return Err(BuildError::NoProducts);
        }

        if let Validation::Failure(errors) = self.validate() {
            return Err(BuildError::InvalidEntries(errors.iter().cloned().collect()));
        }

        let products = self.entries.into_iter().filter_map(|entry| {
            let code = entry.code.parse().ok()?;
            Some(Product {
                code,
                name: entry.name.trim().to_string(),
                price: entry.price,
                stock: entry.stock,
            })
        });

        Ok(Catalog::from_products(products))
    }
}
