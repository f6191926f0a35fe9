//! Product catalog.
//!
//! The catalog maps product codes to name, price and stock. It is built once
//! (either the standard 16-product table or a validated custom list) and
//! handed to the engine, which is then its only writer: the sole mutation is
//! [`Catalog::decrement_stock`] on a successful dispense.

mod code;
pub mod error;

pub use code::{is_valid_letter, ParseCodeError, ProductCode, DIGITS, LETTERS};
pub use error::CatalogError;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A product slot in the machine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub code: ProductCode,
    pub name: String,
    /// Price in whole currency units, always above zero
    pub price: u32,
    pub stock: u32,
}

impl Product {
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

/// Products keyed by code, iterated in code order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    products: BTreeMap<ProductCode, Product>,
}

impl Catalog {
    /// Wrap already-validated products. Use
    /// [`CatalogBuilder`](crate::builder::CatalogBuilder) for anything else.
    pub(crate) fn from_products(products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            products: products.into_iter().map(|p| (p.code, p)).collect(),
        }
    }

    /// The machine's stock as it leaves the factory.
    ///
    /// ```rust
    /// use mealy_vend::catalog::Catalog;
    ///
    /// let catalog = Catalog::standard();
    /// let water = catalog.lookup(&"A1".parse().unwrap()).unwrap();
    /// assert_eq!(water.name, "Agua Ciel");
    /// assert_eq!(water.price, 12);
    /// assert_eq!(catalog.len(), 16);
    /// ```
    pub fn standard() -> Self {
        crate::catalog! {
            A1 => "Agua Ciel", 12, 10;
            A2 => "Coca Cola", 18, 8;
            A3 => "Pepsi", 17, 7;
            A4 => "Sprite", 18, 6;
            B1 => "Sabritas", 19, 10;
            B2 => "Doritos", 20, 8;
            B3 => "Ruffles", 21, 5;
            B4 => "Takis", 22, 6;
            C1 => "Galletas Emperador", 14, 12;
            C2 => "Galletas Oreo", 16, 9;
            C3 => "Barrita Marinela", 13, 11;
            C4 => "Chokis", 15, 10;
            D1 => "Chocolate Hershey's", 17, 7;
            D2 => "Chocolate Carlos V", 15, 8;
            D3 => "Bubulubu", 10, 10;
            D4 => "Panditas", 12, 9;
        }
        .expect("standard catalog table is valid")
    }

    /// Find a product by code.
    pub fn lookup(&self, code: &ProductCode) -> Option<&Product> {
        self.products.get(code)
    }

    /// Take one unit of `code` out of stock, returning what is left.
    ///
    /// Fails without touching the catalog if the code is unknown or the
    /// product is already sold out.
    pub fn decrement_stock(&mut self, code: &ProductCode) -> Result<u32, CatalogError> {
        let product = self
            .products
            .get_mut(code)
            .ok_or(CatalogError::UnknownProduct(*code))?;

        product.stock = product
            .stock
            .checked_sub(1)
            .ok_or(CatalogError::OutOfStock(*code))?;

        Ok(product.stock)
    }

    /// Products in code order.
    pub fn products(&self) -> impl Iterator<Item = &Product> + '_ {
        self.products.values()
    }

    /// Units left across every product.
    pub fn total_stock(&self) -> u64 {
        self.products.values().map(|p| u64::from(p.stock)).sum()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
