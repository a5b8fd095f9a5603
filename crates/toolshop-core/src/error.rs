//! # Error Types
//!
//! Domain-specific error types for toolshop-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  toolshop-core errors (this file)                                      │
//! │  ├── CoreError        - Domain errors (lookups, auth, hierarchy)       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  storefront app errors                                                 │
//! │  ├── ConfigError      - Config file / environment problems             │
//! │  └── ApiError         - What the UI sees (serialized)                  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → UI                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use crate::types::{CategoryId, MenuId, MenuItemId, MethodId, ProductId};

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Product cannot be found.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Category cannot be found.
    #[error("Category not found: {0}")]
    CategoryNotFound(CategoryId),

    /// Menu cannot be found.
    #[error("Menu not found: {0}")]
    MenuNotFound(MenuId),

    /// Menu item is not part of the menu being edited.
    #[error("Menu item not found: {0}")]
    MenuItemNotFound(MenuItemId),

    /// Order cannot be found.
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    /// Shipping method cannot be found.
    #[error("Shipping method not found: {0}")]
    ShippingMethodNotFound(MethodId),

    /// Payment method cannot be found.
    #[error("Payment method not found: {0}")]
    PaymentMethodNotFound(MethodId),

    /// Re-parenting would make a node its own ancestor.
    ///
    /// ## When This Occurs
    /// ```text
    /// Electric Tools (1)
    ///   └── Drills (4)
    ///
    /// update_category { id: 1, parent_id: 4 }
    ///      │
    ///      ▼
    /// walk ancestors of 4: 4 → 1  ← reaches the node being moved
    ///      │
    ///      ▼
    /// HierarchyCycle { id: 1, parent_id: 4 }
    /// ```
    #[error("Cannot move {id} under {parent_id}: it would become its own ancestor")]
    HierarchyCycle { id: i64, parent_id: i64 },

    /// Username/password pair was rejected.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Operation requires a session that is not present.
    #[error("Not authorized: {0}")]
    NotAuthorized(String),

    /// Checkout attempted with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., malformed mobile number, bad slug).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., duplicate SKU).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(CoreError::ProductNotFound(5).to_string(), "Product not found: 5");
        assert_eq!(
            CoreError::HierarchyCycle { id: 1, parent_id: 4 }.to_string(),
            "Cannot move 1 under 4: it would become its own ancestor"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "sku".to_string(),
        };
        assert_eq!(err.to_string(), "sku is required");

        let err = ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        };
        assert_eq!(err.to_string(), "name must be at most 200 characters");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "sku".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
