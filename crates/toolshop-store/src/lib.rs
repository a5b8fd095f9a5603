//! # toolshop-store: The Toolshop State Holder
//!
//! One explicit [`Store`] object owns every collection of the storefront and
//! admin console. The host shell passes it around by reference (or behind a
//! lock); its mutator methods are the only write path.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  command (add_to_cart, save_menu, ...)                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  toolshop-store (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   Store ── guards (admin / signed in) ── validation ── mutate  │   │
//! │  │     │                                                           │   │
//! │  │     └── tracing::debug! on every mutation                      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ pure rules                             │
//! │                                ▼                                        │
//! │                          toolshop-core                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use toolshop_store::Store;
//!
//! let mut store = Store::with_mock_data();
//! store.add_to_cart(5, 2).unwrap();
//! assert_eq!(store.cart_total().toman(), 700_000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod seed;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use seed::SeedData;
pub use store::{Browsing, Session, Store, StoreOptions};
