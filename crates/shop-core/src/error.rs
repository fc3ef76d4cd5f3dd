//! # Error Types
//!
//! Domain-specific error types for shop-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shop-core errors (this file)                                          │
//! │  ├── ShopError        - Purchase and catalog failures                  │
//! │  └── ValidationError  - Invalid construction/mutation input            │
//! │                                                                         │
//! │  shop-cli errors (app crate)                                           │
//! │  ├── ConfigError      - Bad flag or environment value                  │
//! │  └── ConsoleError     - Terminal I/O failures                          │
//! │                                                                         │
//! │  Flow: ValidationError → ShopError → printed by the console            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product name, stock, etc.)
//! 3. Errors are enum variants, never String
//! 4. The core never swallows its own errors; every failure reaches the caller

use thiserror::Error;

// =============================================================================
// Shop Error
// =============================================================================

/// Purchase and catalog errors.
///
/// The purchase variants are what the console reports when an order fails;
/// their messages are shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShopError {
    /// Purchase attempted on a deactivated product.
    ///
    /// Checked before anything else in [`crate::Product::buy`], so an inactive
    /// product reports this even when the requested quantity is also bad.
    #[error("Product Inactive")]
    InactiveProduct { name: String },

    /// Requested quantity exceeds the stock on hand.
    ///
    /// ## User Workflow
    /// ```text
    /// Order line: (Google Pixel 7, 500)
    ///      │
    ///      ▼
    /// Check stock: available=3
    ///      │
    ///      ▼
    /// InsufficientStock { available: 3, requested: 500 }
    ///      │
    ///      ▼
    /// Console shows: "Product only has 3 in stock"
    /// ```
    #[error("Product only has {available} in stock")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// Requested quantity is below one.
    #[error("Product Quantity Invalid")]
    InvalidQuantity { requested: i64 },

    /// A line total, order total or stock sum does not fit in `i64`.
    ///
    /// Raised before any stock is touched for the failing line.
    #[error("{what} is too large")]
    Overflow { what: &'static str },

    /// The same product (by identity) is already in the catalog.
    #[error("This product is already in store inventory.")]
    DuplicateProduct { name: String },

    /// The product is not part of the catalog.
    #[error("This product does not exist in store inventory.")]
    ProductNotFound { name: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl ShopError {
    /// True for the errors a purchase can raise.
    ///
    /// The console catches exactly these while placing an order.
    pub fn is_purchase_error(&self) -> bool {
        matches!(
            self,
            ShopError::InactiveProduct { .. }
                | ShopError::InsufficientStock { .. }
                | ShopError::InvalidQuantity { .. }
                | ShopError::Overflow { .. }
        )
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised at the point of the invalid construction or mutation. Values are
/// never clamped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is below zero.
    #[error("{field} cannot be less than zero (got {value})")]
    Negative { field: String, value: i64 },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ShopError.
pub type ShopResult<T> = Result<T, ShopError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_purchase_error_messages() {
        let err = ShopError::InsufficientStock {
            name: "Google Pixel 7".to_string(),
            available: 3,
            requested: 5,
        };
        assert_eq!(err.to_string(), "Product only has 3 in stock");

        let err = ShopError::InactiveProduct {
            name: "Google Pixel 7".to_string(),
        };
        assert_eq!(err.to_string(), "Product Inactive");

        let err = ShopError::InvalidQuantity { requested: 0 };
        assert_eq!(err.to_string(), "Product Quantity Invalid");

        let err = ShopError::Overflow { what: "Line total" };
        assert_eq!(err.to_string(), "Line total is too large");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::Negative {
            field: "price".to_string(),
            value: -5,
        };
        assert_eq!(err.to_string(), "price cannot be less than zero (got -5)");
    }

    #[test]
    fn test_validation_converts_to_shop_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let shop_err: ShopError = validation_err.into();
        assert!(matches!(shop_err, ShopError::Validation(_)));
        assert!(!shop_err.is_purchase_error());
    }

    #[test]
    fn test_is_purchase_error() {
        assert!(ShopError::InvalidQuantity { requested: -1 }.is_purchase_error());
        assert!(ShopError::Overflow { what: "Order total" }.is_purchase_error());
        assert!(!ShopError::ProductNotFound {
            name: "X".to_string()
        }
        .is_purchase_error());
    }
}
