//! # shop-core: Catalog and Ordering Logic
//!
//! This crate is the **heart** of the shop console. It holds the product and
//! store rules as plain synchronous code with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shop Console Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    shop-cli (console)                           │   │
//! │  │    Menu ──► List Products ──► Show Total ──► Make Order         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ function calls                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shop-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  product  │  │   store   │  │   money   │  │ validation│  │   │
//! │  │   │  Product  │  │   Store   │  │   Money   │  │   rules   │  │   │
//! │  │   │   buy()   │  │  order()  │  │           │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PERSISTENCE • SINGLE THREADED                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`product`] - Product, its stock rules and `buy`
//! - [`store`] - Store catalog and order placement
//! - [`money`] - Money type with integer arithmetic
//! - [`error`] - Domain error types
//! - [`validation`] - Field validation
//!
//! ## Example Usage
//!
//! ```rust
//! use shop_core::{Money, Product, Store};
//!
//! let x = Product::new("X", Money::from_major_minor(10, 0).unwrap(), 5).unwrap().into_shared();
//! let store = Store::new(vec![x.clone()]);
//! assert_eq!(store.total_quantity().unwrap(), 5);
//!
//! let total = store.order(&[(x, 3)]).unwrap();
//! assert_eq!(total.to_string(), "$30.00");
//! assert_eq!(store.total_quantity().unwrap(), 2);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod product;
pub mod store;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{ShopError, ShopResult, ValidationError};
pub use money::Money;
pub use product::{Product, SharedProduct};
pub use store::{OrderLine, OrderPolicy, Store};
