//! Starting inventory for a console session.

use shop_core::{Money, Product, ShopError, ShopResult, Store};
use tracing::info;

/// (name, price in whole dollars, quantity)
pub const SEED_CATALOG: &[(&str, i64, i64)] = &[
    ("MacBook Air M2", 1450, 100),
    ("Bose QuietComfort Earbuds", 250, 500),
    ("Google Pixel 7", 500, 250),
];

/// Builds a fresh store holding the seed catalog.
pub fn seed_store() -> ShopResult<Store> {
    let mut store = Store::default();
    for &(name, dollars, quantity) in SEED_CATALOG {
        let price = Money::from_major_minor(dollars, 0)
            .ok_or(ShopError::Overflow { what: "Price" })?;
        let product = Product::new(name, price, quantity)?;
        store.add_product(product.into_shared())?;
    }
    info!(products = SEED_CATALOG.len(), total = store.total_quantity()?, "Store seeded");
    Ok(store)
}
