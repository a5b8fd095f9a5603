//! # Validation Module
//!
//! Input validation utilities for Toolshop.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: UI forms                                                     │
//! │  ├── required attributes, input types                                  │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Command arguments (serde)                                    │
//! │  └── Type validation (deserialization)                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: THIS MODULE                                                  │
//! │  ├── Business rule validation (mobile format, sku charset, qty > 0)    │
//! │  └── Runs inside the store before any mutation                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use toolshop_core::validation::{validate_mobile, validate_quantity};
//!
//! assert!(validate_mobile("09123456789").is_ok());
//! assert_eq!(validate_quantity(3).unwrap(), 3);
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{MenuItemDraft, MenuItemKind, PriceTiers, Product, ProductDraft};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const MAX_SKU_LEN: usize = 50;
const MAX_NAME_LEN: usize = 200;
const MAX_QUERY_LEN: usize = 100;

// =============================================================================
// Helpers
// =============================================================================

fn required<'a>(field: &str, value: &'a str) -> ValidationResult<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(value)
}

fn max_chars(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }
    Ok(())
}

// =============================================================================
// Identity
// =============================================================================

/// Validates an Iranian mobile number: `09` followed by exactly nine digits.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Login modal                                                            │
/// │                                                                         │
/// │  User enters mobile: 09123456789                                       │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_mobile() ← THIS FUNCTION                                     │
/// │       │                                                                 │
/// │       ├── wrong shape? → Error, login blocked, user alerted            │
/// │       │                                                                 │
/// │       └── OK → session gets the customer                               │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_mobile(mobile: &str) -> ValidationResult<()> {
    let well_formed = mobile.len() == 11
        && mobile.starts_with("09")
        && mobile.bytes().all(|b| b.is_ascii_digit());

    if !well_formed {
        return Err(ValidationError::InvalidFormat {
            field: "mobile".to_string(),
            reason: "must be 11 digits starting with 09".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Catalog
// =============================================================================

/// Validates a SKU (Stock Keeping Unit).
///
/// ## Rules
/// - Must not be empty
/// - At most 50 characters
/// - Only ASCII letters, digits, hyphens and underscores
///
/// ## Example
/// ```rust
/// use toolshop_core::validation::validate_sku;
///
/// assert!(validate_sku("RNX-8612").is_ok());
/// assert!(validate_sku("").is_err());
/// assert!(validate_sku("has space").is_err());
/// ```
pub fn validate_sku(sku: &str) -> ValidationResult<()> {
    let sku = required("sku", sku)?;
    max_chars("sku", sku, MAX_SKU_LEN)?;

    if !sku
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "sku".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates a product name (1-200 characters after trimming).
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = required("name", name)?;
    max_chars("name", name, MAX_NAME_LEN)
}

/// Validates a price. Zero is allowed, negative prices are not.
pub fn validate_price(field: &str, price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: i64::MAX,
        });
    }
    Ok(())
}

/// Validates both price tiers of a product.
pub fn validate_prices(prices: &PriceTiers) -> ValidationResult<()> {
    validate_price("retail price", prices.retail)?;
    validate_price("wholesale price", prices.wholesale)
}

fn validate_catalog_fields(
    sku: &str,
    name: &str,
    prices: &PriceTiers,
    category: &str,
) -> ValidationResult<()> {
    validate_sku(sku)?;
    validate_product_name(name)?;
    validate_prices(prices)?;
    required("category", category)?;
    Ok(())
}

/// Validates everything submitted from the product form.
pub fn validate_product_draft(draft: &ProductDraft) -> ValidationResult<()> {
    validate_catalog_fields(&draft.sku, &draft.name, &draft.prices, &draft.category)
}

/// Validates an edited product before it replaces the stored one.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_catalog_fields(
        &product.sku,
        &product.name,
        &product.prices,
        &product.category,
    )
}

/// Validates and trims a search query.
///
/// ## Rules
/// - Can be empty (matches everything)
/// - Maximum 100 characters
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();
    max_chars("query", query, MAX_QUERY_LEN)?;
    Ok(query.to_string())
}

// =============================================================================
// Cart
// =============================================================================

/// Validates a quantity added to the cart and narrows it to `u32`.
///
/// ## Rules
/// - Must be positive (> 0)
/// - No upper bound against stock
pub fn validate_quantity(qty: i64) -> ValidationResult<u32> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    u32::try_from(qty).map_err(|_| ValidationError::OutOfRange {
        field: "quantity".to_string(),
        min: 1,
        max: i64::from(u32::MAX),
    })
}

// =============================================================================
// Categories
// =============================================================================

/// Derives a slug from a display name: lower-case, whitespace runs become `-`.
///
/// ## Example
/// ```rust
/// use toolshop_core::validation::slugify;
///
/// assert_eq!(slugify("Hand  Tools"), "hand-tools");
/// assert_eq!(slugify(" Cordless Tools "), "cordless-tools");
/// ```
pub fn slugify(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Validates a category name.
pub fn validate_category_name(name: &str) -> ValidationResult<()> {
    let name = required("name", name)?;
    max_chars("name", name, MAX_NAME_LEN)
}

/// Validates a slug: non-empty, no whitespace, no `/`.
pub fn validate_slug(slug: &str) -> ValidationResult<()> {
    if slug.is_empty() {
        return Err(ValidationError::Required {
            field: "slug".to_string(),
        });
    }
    if slug.chars().any(|c| c.is_whitespace() || c == '/') {
        return Err(ValidationError::InvalidFormat {
            field: "slug".to_string(),
            reason: "must not contain spaces or slashes".to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Menus & Settings
// =============================================================================

/// Validates a menu item before it is added to a working copy.
///
/// Custom links must be absolute `http(s)` URLs.
pub fn validate_menu_item_draft(draft: &MenuItemDraft) -> ValidationResult<()> {
    let title = required("title", &draft.title)?;
    max_chars("title", title, MAX_NAME_LEN)?;
    let value = required("value", &draft.value)?;

    if draft.kind == MenuItemKind::Custom
        && !(value.starts_with("http://") || value.starts_with("https://"))
    {
        return Err(ValidationError::InvalidFormat {
            field: "value".to_string(),
            reason: "custom links must start with http:// or https://".to_string(),
        });
    }

    Ok(())
}

/// Validates the name of a shipping or payment method.
pub fn validate_method_name(name: &str) -> ValidationResult<()> {
    let name = required("name", name)?;
    max_chars("name", name, MAX_NAME_LEN)
}

// =============================================================================
// Unit Tests
// =============================================================================
