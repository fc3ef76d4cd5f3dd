//! # Store
//!
//! The catalog: an ordered collection of shared product handles, plus order
//! placement across them.
//!
//! ## Order Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Store::order(shopping_list)                          │
//! │                                                                         │
//! │  [(MacBook, 2), (Pixel, 500), (Bose, 1)]                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  MacBook.buy(2) ──► Ok($2900.00)   stock 100 → 98   (stays applied)     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Pixel.buy(500) ──► Err(InsufficientStock) ──► returned to caller       │
//! │                                                                         │
//! │  Bose is never touched. MacBook keeps its reduced stock.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `order` applies lines one at a time and does not roll back. Callers that
//! need all-or-nothing behaviour use [`Store::order_all_or_nothing`] (or
//! [`Store::place_order`] with [`OrderPolicy::AllOrNothing`]).

use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::{ShopError, ShopResult, ValidationError};
use crate::money::Money;
use crate::product::SharedProduct;

/// One requested purchase: a product handle and how many units.
pub type OrderLine = (SharedProduct, i64);

// =============================================================================
// Order Policy
// =============================================================================

/// How a multi-line order behaves when one line fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderPolicy {
    /// Lines before the failing one stay applied.
    #[default]
    Partial,
    /// Nothing is applied unless every line would succeed.
    AllOrNothing,
}

impl OrderPolicy {
    /// Every spelling `from_str` accepts (case and surrounding space aside).
    pub const ALLOWED: [&'static str; 2] = ["partial", "all_or_nothing"];
}

impl FromStr for OrderPolicy {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "partial" => Ok(OrderPolicy::Partial),
            "all_or_nothing" => Ok(OrderPolicy::AllOrNothing),
            _ => Err(ValidationError::NotAllowed {
                field: "order policy".to_string(),
                allowed: Self::ALLOWED.iter().map(|s| s.to_string()).collect(),
            }),
        }
    }
}

// =============================================================================
// Store
// =============================================================================

/// The product catalog.
///
/// ## Invariants
/// - Insertion order is preserved.
/// - `add_product` never lets the same product (by id) in twice. The
///   constructor takes the initial list as given.
#[derive(Debug, Default)]
pub struct Store {
    products: Vec<SharedProduct>,
}

impl Store {
    /// Creates a store holding the given handles.
    ///
    /// The handles are shared, not copied: stock changes made through the
    /// store are visible to anyone else holding the same handle.
    pub fn new(products: Vec<SharedProduct>) -> Self {
        Store { products }
    }

    fn position(&self, id: Uuid) -> Option<usize> {
        self.products.iter().position(|p| p.borrow().id() == id)
    }

    /// Appends a product to the end of the catalog.
    ///
    /// ## Errors
    /// `DuplicateProduct` if this product is already in the catalog.
    pub fn add_product(&mut self, product: SharedProduct) -> ShopResult<()> {
        let (id, name) = {
            let p = product.borrow();
            (p.id(), p.name().to_string())
        };

        if self.position(id).is_some() {
            return Err(ShopError::DuplicateProduct { name });
        }

        debug!(product = %name, %id, "Product added to catalog");
        self.products.push(product);
        Ok(())
    }

    /// Removes a product from the catalog.
    ///
    /// ## Errors
    /// `ProductNotFound` if this product is not in the catalog.
    pub fn remove_product(&mut self, product: &SharedProduct) -> ShopResult<()> {
        let (id, name) = {
            let p = product.borrow();
            (p.id(), p.name().to_string())
        };

        match self.position(id) {
            Some(index) => {
                self.products.remove(index);
                debug!(product = %name, %id, "Product removed from catalog");
                Ok(())
            }
            None => Err(ShopError::ProductNotFound { name }),
        }
    }

    /// Total units in stock across every product, active or not.
    ///
    /// ## Errors
    /// `Overflow` if the sum does not fit in `i64`.
    pub fn total_quantity(&self) -> ShopResult<i64> {
        self.products.iter().try_fold(0i64, |sum, p| {
            sum.checked_add(p.borrow().quantity())
                .ok_or(ShopError::Overflow { what: "Total quantity" })
        })
    }

    /// Active products in catalog order. Inactive ones are left out entirely.
    pub fn all_products(&self) -> Vec<SharedProduct> {
        self.products
            .iter()
            .filter(|p| p.borrow().is_active())
            .cloned()
            .collect()
    }

    /// Places an order line by line and returns the total paid.
    ///
    /// ## Behavior
    /// - Lines run strictly in the given order; repeated products are not
    ///   merged.
    /// - The first failing line's error is returned. Lines before it stay
    ///   applied; the failing line itself changes nothing, including when
    ///   its cost would overflow the running total.
    pub fn order(&self, shopping_list: &[OrderLine]) -> ShopResult<Money> {
        let mut total = Money::zero();

        for (applied, (product, quantity)) in shopping_list.iter().enumerate() {
            let quote = product.borrow().quote(*quantity);
            let line = quote
                .and_then(|cost| add_to_total(total, cost))
                .and_then(|next| product.borrow_mut().buy(*quantity).map(|_| next));

            match line {
                Ok(next) => total = next,
                Err(err) => {
                    if applied > 0 {
                        warn!(
                            applied,
                            lines = shopping_list.len(),
                            error = %err,
                            "Order aborted after applying earlier lines"
                        );
                    }
                    return Err(err);
                }
            }
        }

        debug!(lines = shopping_list.len(), total = %total, "Order placed");
        Ok(total)
    }

    /// Places an order only if every line would succeed.
    ///
    /// ## How It Works
    /// ```text
    /// 1. Project: walk the lines in order against a scratch copy of each
    ///    product's (active, stock). Same checks as `buy`; a line that takes
    ///    the projected stock to zero makes later lines see it inactive.
    ///    The running total is checked for overflow as well.
    /// 2. Any failure → return that error, nothing has changed.
    /// 3. All pass → run `order`, which now cannot fail.
    /// ```
    pub fn order_all_or_nothing(&self, shopping_list: &[OrderLine]) -> ShopResult<Money> {
        let mut projected: HashMap<Uuid, (bool, i64)> = HashMap::new();
        let mut total = Money::zero();

        for (product, quantity) in shopping_list {
            let product = product.borrow();
            let state = projected
                .entry(product.id())
                .or_insert((product.is_active(), product.quantity()));

            let cost = product.check_purchase(state.0, state.1, *quantity)?;
            total = add_to_total(total, cost)?;

            state.1 -= quantity;
            if state.1 == 0 {
                state.0 = false;
            }
        }

        self.order(shopping_list)
    }

    /// Places an order with the given failure policy.
    pub fn place_order(&self, shopping_list: &[OrderLine], policy: OrderPolicy) -> ShopResult<Money> {
        match policy {
            OrderPolicy::Partial => self.order(shopping_list),
            OrderPolicy::AllOrNothing => self.order_all_or_nothing(shopping_list),
        }
    }
}

fn add_to_total(total: Money, cost: Money) -> ShopResult<Money> {
    total
        .checked_add(cost)
        .ok_or(ShopError::Overflow { what: "Order total" })
}

// =============================================================================
// Unit Tests
// =============================================================================
