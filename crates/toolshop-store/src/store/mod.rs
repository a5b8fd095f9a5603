//! # Store
//!
//! The single application state holder. Every collection lives here and the
//! mutator methods are the only write path.
//!
//! ## Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                              Store                                      │
//! │                                                                         │
//! │   Catalog           Storefront          Admin              Site         │
//! │   ───────           ──────────          ─────              ────         │
//! │   products          cart                categories         settings     │
//! │                     session             menus, menu_items  pages        │
//! │                     browsing            orders                          │
//! │                                                                         │
//! │   ids: IdGenerator (timestamp-derived, strictly increasing)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The methods are split by concern across the submodules:
//!
//! - [`products`] - catalog reads and product CRUD
//! - [`cart`] - cart mutations and tier-priced totals
//! - [`session`] - customer/admin login and the price tier
//! - [`browsing`] - selected product, recently viewed, category filter
//! - [`categories`] - category CRUD and hierarchy views
//! - [`menus`] - committed menus and saving working copies
//! - [`orders`] - checkout, status updates and dashboards
//! - [`settings`] - site settings and the document head

pub mod browsing;
pub mod cart;
pub mod categories;
pub mod menus;
pub mod orders;
pub mod products;
pub mod session;
pub mod settings;

use serde::Serialize;
use toolshop_core::{
    AppSettings, Cart, Category, CategoryFilter, CoreError, CoreResult, IdGenerator, Menu,
    MenuItem, Order, PageLink, PriceTier, Product, ProductId, User, RECENTLY_VIEWED_LIMIT,
};
use tracing::info;

use crate::seed::{self, SeedData};

/// Knobs the host shell can turn when building a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreOptions {
    /// Maximum length of the recently-viewed list.
    pub recently_viewed_limit: usize,
    /// Tier preference a fresh session starts with.
    pub initial_price_tier: PriceTier,
}

impl Default for StoreOptions {
    fn default() -> Self {
        StoreOptions {
            recently_viewed_limit: RECENTLY_VIEWED_LIMIT,
            initial_price_tier: PriceTier::Retail,
        }
    }
}

/// Who is signed in and which tier they asked for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user: Option<User>,
    pub is_admin: bool,
    /// The stored preference. See [`Store::effective_price_tier`].
    pub price_tier: PriceTier,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Navigation state of the storefront.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Browsing {
    pub selected_product_id: Option<ProductId>,
    /// Most recent first, no duplicates.
    pub recently_viewed: Vec<ProductId>,
    pub category_filter: CategoryFilter,
}

/// The in-memory store.
#[derive(Debug, Clone)]
pub struct Store {
    products: Vec<Product>,
    categories: Vec<Category>,
    menus: Vec<Menu>,
    menu_items: Vec<MenuItem>,
    orders: Vec<Order>,
    settings: AppSettings,
    pages: Vec<PageLink>,
    cart: Cart,
    session: Session,
    browsing: Browsing,
    options: StoreOptions,
    ids: IdGenerator,
}

impl Default for Store {
    fn default() -> Self {
        Store::new(SeedData::default(), StoreOptions::default())
    }
}

impl Store {
    /// Creates a store from seed data.
    pub fn new(seed: SeedData, options: StoreOptions) -> Self {
        info!(
            products = seed.products.len(),
            categories = seed.categories.len(),
            menu_items = seed.menu_items.len(),
            orders = seed.orders.len(),
            "Store initialised"
        );

        let ids = IdGenerator::starting_after(seed.max_id());
        Store {
            products: seed.products,
            categories: seed.categories,
            menus: seed.menus,
            menu_items: seed.menu_items,
            orders: seed.orders,
            settings: seed.settings,
            pages: seed::available_pages(),
            cart: Cart::new(),
            session: Session {
                price_tier: options.initial_price_tier,
                ..Session::default()
            },
            browsing: Browsing::default(),
            options,
            ids,
        }
    }

    /// A store loaded with the mock catalog and default options.
    pub fn with_mock_data() -> Self {
        Store::new(seed::mock_data(), StoreOptions::default())
    }

    pub fn options(&self) -> StoreOptions {
        self.options
    }

    /// Hands out a fresh entity id.
    pub fn next_id(&mut self) -> i64 {
        self.ids.next_id()
    }

    /// Fails with `NotAuthorized` unless the admin is signed in.
    fn require_admin(&self, action: &str) -> CoreResult<()> {
        if self.session.is_admin {
            Ok(())
        } else {
            Err(CoreError::NotAuthorized(format!("{action} requires admin login")))
        }
    }

    /// Fails with `NotAuthorized` unless a customer is signed in.
    fn require_user(&self, action: &str) -> CoreResult<&User> {
        self.session
            .user
            .as_ref()
            .ok_or_else(|| CoreError::NotAuthorized(format!("{action} requires login")))
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use toolshop_core::{ADMIN_PASSWORD, ADMIN_USERNAME};

    /// Mock store with the admin signed in.
    pub fn admin_store() -> Store {
        let mut store = Store::with_mock_data();
        store
            .admin_login(ADMIN_USERNAME, ADMIN_PASSWORD)
            .expect("admin login");
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_store_starts_anonymous_at_retail() {
        let store = Store::with_mock_data();
        assert!(store.session().user.is_none());
        assert!(!store.session().is_admin);
        assert_eq!(store.session().price_tier, PriceTier::Retail);
        assert!(store.cart_items().is_empty());
    }

    #[test]
    fn test_new_ids_are_above_seeded_ids() {
        let mut store = Store::with_mock_data();
        assert!(store.next_id() > 6);
    }

    #[test]
    fn test_initial_tier_from_options() {
        let store = Store::new(
            SeedData::default(),
            StoreOptions {
                initial_price_tier: PriceTier::Wholesale,
                ..StoreOptions::default()
            },
        );
        assert_eq!(store.session().price_tier, PriceTier::Wholesale);
        // Anonymous sessions still price at retail.
        assert_eq!(store.effective_price_tier(), PriceTier::Retail);
    }

    #[test]
    fn test_admin_guard() {
        let store = Store::with_mock_data();
        assert!(matches!(
            store.require_admin("Deleting products"),
            Err(CoreError::NotAuthorized(_))
        ));
        assert!(store.require_user("Checkout").is_err());
    }
}
