//! # toolshop-core: Pure Business Logic for the Toolshop Storefront
//!
//! Everything the storefront and admin console compute, as pure functions
//! and plain data. No I/O, no logging subscribers, no global state.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Toolshop Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              apps/storefront (host shell, commands)             │   │
//! │  │    config ── state holders ── invoke(command, json) ── stdio   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              toolshop-store (the one mutable Store)             │   │
//! │  │    collections · session · settings · seed data · tracing      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ toolshop-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   types · money · cart · catalog · hierarchy · menu            │   │
//! │  │   dashboard · settings · validation · ids · error              │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Category, MenuItem, Order, ...)
//! - [`money`] - Whole-toman money type
//! - [`cart`] - Cart entries and tier-priced aggregation
//! - [`catalog`] - Product filtering and sorting
//! - [`hierarchy`] - Parent-pointer lists to depth lists and trees
//! - [`menu`] - The menu editor's working copy
//! - [`dashboard`] - Admin and customer summary figures
//! - [`settings`] - Site settings and the document head
//! - [`validation`] - Business rule validation
//! - [`ids`] - Timestamp-derived identifiers
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use toolshop_core::{Cart, Money, PriceTier, PriceTiers, Product};
//!
//! let pliers = Product {
//!     id: 5,
//!     sku: "IP-10".to_string(),
//!     name: "Locking Pliers".to_string(),
//!     image: String::new(),
//!     gallery: vec![],
//!     stock: 120,
//!     prices: PriceTiers {
//!         retail: Money::from_toman(350_000),
//!         wholesale: Money::from_toman(310_000),
//!     },
//!     category: "Hand Tools".to_string(),
//!     description: String::new(),
//! };
//!
//! let mut cart = Cart::new();
//! cart.add(5, 2).unwrap();
//! assert_eq!(cart.total(&[pliers], PriceTier::Wholesale).toman(), 620_000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod dashboard;
pub mod error;
pub mod hierarchy;
pub mod ids;
pub mod menu;
pub mod money;
pub mod settings;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartLine};
pub use catalog::{CatalogQuery, CategoryFilter, HomeSections, SortKey};
pub use dashboard::{AdminStats, CustomerStats, ProductSales};
pub use error::{CoreError, CoreResult, ValidationError};
pub use hierarchy::{Depthed, ParentLinked, TreeNode};
pub use ids::IdGenerator;
pub use menu::MenuWorkingCopy;
pub use money::Money;
pub use settings::*;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default length of the recently-viewed list.
pub const RECENTLY_VIEWED_LIMIT: usize = 8;

/// Admin console credentials. There is no account backend.
pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "admin";

/// Category filter value that matches every product.
pub const CATEGORY_FILTER_ALL: &str = "all";
