//! Macros for ergonomic catalog construction.

/// Build a [`Catalog`](crate::catalog::Catalog) from a literal table.
///
/// Each row is `CODE => name, price, stock;`. Expands to a
/// [`CatalogBuilder`](crate::builder::CatalogBuilder) chain, so the result is
/// a `Result<Catalog, BuildError>` and every row is validated.
///
/// # Example
///
/// ```
/// use mealy_vend::catalog;
///
/// let catalog = catalog! {
///     A1 => "Water", 10, 5;
///     A2 => "Soda", 15, 2;
/// }
/// .unwrap();
///
/// assert_eq!(catalog.len(), 2);
/// ```
#[macro_export]
macro_rules! catalog {
    (
        $(
            $code:ident => $name:expr, $price:expr, $stock:expr
        );* $(;)?
    ) => {
        $crate::builder::CatalogBuilder::new()
            $(
                .product(stringify!($code), $name, $price, $stock)
            )*
            .build()
    };
}
