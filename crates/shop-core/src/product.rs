//! # Product
//!
//! A single sellable item: its price, its stock and whether it can be sold.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Product Active Flag                              │
//! │                                                                         │
//! │   Product::new ──► ACTIVE ──── set_quantity(0) / buy to zero ───┐       │
//! │                      ▲  │                                       │       │
//! │                      │  └──────────── deactivate() ─────────────┤       │
//! │                      │                                          ▼       │
//! │                      └────────────── activate() ──────────── INACTIVE   │
//! │                                                                         │
//! │   set_quantity(n > 0) on an INACTIVE product leaves it INACTIVE.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Every product gets a UUID v4 at construction. `Product` is not
//! `Clone`, so an id names exactly one product; the store compares ids when it
//! checks membership. Products are shared through [`SharedProduct`] handles so
//! the store and the caller building an order see the same stock.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;
use uuid::Uuid;

use crate::error::{ShopError, ShopResult, ValidationError};
use crate::money::Money;
use crate::validation::{validate_price, validate_product_name, validate_stock_quantity};

/// Shared, mutable handle to a product.
///
/// Single-threaded by construction (`Rc` is `!Send`).
pub type SharedProduct = Rc<RefCell<Product>>;

/// A product available for sale.
#[derive(Debug)]
pub struct Product {
    id: Uuid,
    name: String,
    price: Money,
    quantity: i64,
    active: bool,
}

impl Product {
    /// Creates an active product.
    ///
    /// ## Errors
    /// `ValidationError` if the name is empty, the price is negative or the
    /// quantity is negative. Checked in that order.
    ///
    /// ## Example
    /// ```rust
    /// use shop_core::{Money, Product};
    ///
    /// let product = Product::new("Google Pixel 7", Money::from_major_minor(500, 0).unwrap(), 250).unwrap();
    /// assert!(product.is_active());
    /// assert!(Product::new("", Money::zero(), 1).is_err());
    /// ```
    pub fn new(
        name: impl Into<String>,
        price: Money,
        quantity: i64,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        validate_product_name(&name)?;
        validate_price(price)?;
        validate_stock_quantity(quantity)?;

        Ok(Product {
            id: Uuid::new_v4(),
            name,
            price,
            quantity,
            active: true,
        })
    }

    /// Wraps the product in a shared handle.
    pub fn into_shared(self) -> SharedProduct {
        Rc::new(RefCell::new(self))
    }

    #[inline]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price.
    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    /// Current stock.
    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Sets the stock level.
    ///
    /// ## Rules
    /// - Negative values are rejected and nothing changes.
    /// - Zero deactivates the product.
    /// - Any other value only changes the stock; an inactive product stays
    ///   inactive until [`Product::activate`] is called.
    pub fn set_quantity(&mut self, quantity: i64) -> Result<(), ValidationError> {
        validate_stock_quantity(quantity)?;

        if quantity == 0 {
            self.deactivate();
        }
        self.quantity = quantity;
        Ok(())
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// One-line catalog summary.
    ///
    /// ## Example
    /// ```rust
    /// use shop_core::{Money, Product};
    ///
    /// let product = Product::new("MacBook Air M2", Money::from_major_minor(1450, 0).unwrap(), 100).unwrap();
    /// assert_eq!(product.describe_line(), "MacBook Air M2, Price: $1450.00, Quantity: 100");
    /// ```
    pub fn describe_line(&self) -> String {
        format!(
            "{}, Price: {}, Quantity: {}",
            self.name, self.price, self.quantity
        )
    }

    /// Buys `quantity` units and returns what they cost.
    ///
    /// ## Check Order
    /// ```text
    /// buy(q)
    ///   │
    ///   ├── inactive?      → InactiveProduct   (regardless of q)
    ///   ├── q > stock?     → InsufficientStock
    ///   ├── q < 1?         → InvalidQuantity
    ///   ├── q × price overflows? → Overflow
    ///   │
    ///   └── stock -= q via set_quantity (zero deactivates), return q × price
    /// ```
    ///
    /// Stock only changes once every check has passed.
    pub fn buy(&mut self, quantity: i64) -> ShopResult<Money> {
        let paid = self.quote(quantity)?;

        self.set_quantity(self.quantity - quantity)?;

        debug!(
            product = %self.name,
            quantity,
            paid = %paid,
            remaining = self.quantity,
            "Product purchased"
        );
        Ok(paid)
    }

    /// What buying `quantity` units would cost right now, with the same
    /// checks and errors as [`Product::buy`]. Changes nothing.
    pub(crate) fn quote(&self, quantity: i64) -> ShopResult<Money> {
        self.check_purchase(self.active, self.quantity, quantity)
    }

    /// Runs the purchase checks against a given state without touching the
    /// product and returns what the purchase would cost. Used by `buy` and by
    /// the all-or-nothing order projection.
    pub(crate) fn check_purchase(
        &self,
        active: bool,
        available: i64,
        requested: i64,
    ) -> ShopResult<Money> {
        if !active {
            return Err(ShopError::InactiveProduct {
                name: self.name.clone(),
            });
        }

        if requested > available {
            return Err(ShopError::InsufficientStock {
                name: self.name.clone(),
                available,
                requested,
            });
        }

        if requested < 1 {
            return Err(ShopError::InvalidQuantity { requested });
        }

        self.price
            .multiply_quantity(requested)
            .ok_or(ShopError::Overflow { what: "Line total" })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
