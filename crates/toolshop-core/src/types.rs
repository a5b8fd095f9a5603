//! # Domain Types
//!
//! Core domain types used throughout Toolshop.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    CartItem     │   │     Order       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (i64)       │   │  product_id ───►│   │  id (ref code)  │       │
//! │  │  sku            │   │  quantity ≥ 1   │   │  items (frozen) │       │
//! │  │  prices {r, w}  │   └─────────────────┘   │  total, status  │       │
//! │  │  category (txt) │                         └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Category     │   │      Menu       │   │    MenuItem     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id, slug       │   │  id, name       │   │  menu_id ──────►│       │
//! │  │  parent_id? ─┐  │   │  location       │   │  parent_id? ─┐  │       │
//! │  │       ▲──────┘  │   └─────────────────┘   │       ▲──────┘  │       │
//! │  └─────────────────┘                         │  order          │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Entities use numeric ids derived from the creation timestamp
//! (see [`crate::ids::IdGenerator`]). Orders carry a human-readable
//! reference code instead (`ABC-123`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Identifiers
// =============================================================================

pub type ProductId = i64;
pub type CategoryId = i64;
pub type MenuId = i64;
pub type MenuItemId = i64;
pub type MethodId = i64;
pub type UserId = i64;

// =============================================================================
// Price Tier
// =============================================================================

/// The pricing mode applied to every listing and cart line.
///
/// ## Tier Resolution
/// ```text
/// stored tier ──┬── user logged in? ── yes ──► stored tier
///               │
///               └───────────────────── no  ──► Retail
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum PriceTier {
    #[default]
    Retail,
    Wholesale,
}

impl PriceTier {
    /// Resolves the tier actually used for pricing.
    ///
    /// Anonymous visitors always see retail prices.
    #[inline]
    pub fn effective(self, authenticated: bool) -> PriceTier {
        if authenticated {
            self
        } else {
            PriceTier::Retail
        }
    }
}

impl fmt::Display for PriceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceTier::Retail => write!(f, "retail"),
            PriceTier::Wholesale => write!(f, "wholesale"),
        }
    }
}

impl FromStr for PriceTier {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "retail" => Ok(PriceTier::Retail),
            "wholesale" => Ok(PriceTier::Wholesale),
            other => Err(ValidationError::InvalidFormat {
                field: "price_tier".to_string(),
                reason: format!("unknown tier '{}', expected retail or wholesale", other),
            }),
        }
    }
}

/// Retail and wholesale prices of one product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PriceTiers {
    pub retail: Money,
    pub wholesale: Money,
}

impl PriceTiers {
    /// Returns the price at the given tier.
    #[inline]
    pub fn at(&self, tier: PriceTier) -> Money {
        match tier {
            PriceTier::Retail => self.retail,
            PriceTier::Wholesale => self.wholesale,
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    pub id: ProductId,

    /// Stock Keeping Unit - business identifier.
    pub sku: String,

    pub name: String,

    /// Main image reference (URL or inline data).
    pub image: String,

    /// Ordered image gallery.
    pub gallery: Vec<String>,

    pub stock: u32,

    pub prices: PriceTiers,

    /// Free-text category label. Not a reference to [`Category::id`].
    pub category: String,

    pub description: String,
}

impl Product {
    /// Returns the price at the given tier.
    #[inline]
    pub fn price(&self, tier: PriceTier) -> Money {
        self.prices.at(tier)
    }

    /// Whether the product can be added to a cart from a listing.
    #[inline]
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

/// Product data submitted from the admin product form (no id yet).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductDraft {
    pub sku: String,
    pub name: String,
    pub image: String,
    #[serde(default)]
    pub gallery: Vec<String>,
    pub stock: u32,
    pub prices: PriceTiers,
    pub category: String,
    #[serde(default)]
    pub description: String,
}

impl ProductDraft {
    /// Attaches an id, producing a catalog product.
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            sku: self.sku,
            name: self.name,
            image: self.image,
            gallery: self.gallery,
            stock: self.stock,
            prices: self.prices,
            category: self.category,
            description: self.description,
        }
    }
}

// =============================================================================
// Cart Item
// =============================================================================

/// One cart entry. Unique per `product_id`.
///
/// The product is referenced by id only; deleting the product leaves the
/// entry in place and it is skipped when totals are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartItem {
    pub product_id: ProductId,
    pub quantity: u32,
}

// =============================================================================
// User
// =============================================================================

/// A storefront customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct User {
    pub id: UserId,
    pub mobile: String,
    pub name: String,
}

// =============================================================================
// Orders
// =============================================================================

/// The fulfilment status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum OrderStatus {
    #[default]
    Processing,
    Shipped,
    Delivered,
}

impl OrderStatus {
    /// Orders that have not reached the customer yet.
    #[inline]
    pub fn is_open(&self) -> bool {
        matches!(self, OrderStatus::Processing | OrderStatus::Shipped)
    }
}

/// A line of an order.
/// Uses snapshot pattern to freeze product data at time of purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OrderLine {
    /// Product name at time of purchase (frozen).
    pub product_name: String,
    pub quantity: u32,
    /// Unit price at time of purchase (frozen).
    pub price: Money,
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Order {
    /// Human-readable reference code.
    pub id: String,
    /// Display date as recorded when the order was placed.
    pub date: String,
    pub items: Vec<OrderLine>,
    pub total: Money,
    pub status: OrderStatus,
}

// =============================================================================
// Categories
// =============================================================================

/// A product category. Categories form a forest through `parent_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
    pub parent_id: Option<CategoryId>,
}

/// Category form data. A blank slug is derived from the name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CategoryDraft {
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub parent_id: Option<CategoryId>,
}

// =============================================================================
// Menus
// =============================================================================

/// Where a menu is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum MenuLocation {
    Header,
    Footer,
}

/// A named container of menu items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Menu {
    pub id: MenuId,
    pub name: String,
    pub location: MenuLocation,
}

/// What a menu item links to. The meaning of [`MenuItem::value`] depends on it:
///
/// | kind       | value                       |
/// |------------|-----------------------------|
/// | `page`     | a [`View`] name (`products`) |
/// | `category` | a category slug             |
/// | `custom`   | an absolute URL             |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum MenuItemKind {
    Page,
    Category,
    Custom,
}

/// One entry of a navigation menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub menu_id: MenuId,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: MenuItemKind,
    pub value: String,
    /// Parent within the same menu.
    pub parent_id: Option<MenuItemId>,
    /// Position among siblings. Renumbered 1..N on save.
    pub order: i64,
}

/// Data for a new menu item picked from pages, categories or a custom link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MenuItemDraft {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: MenuItemKind,
    pub value: String,
}

// =============================================================================
// Pages
// =============================================================================

/// Storefront pages that menu items of kind `page` may link to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum View {
    Home,
    Products,
    ProductList,
    ProductDetail,
    Cart,
    Dashboard,
    AdminLogin,
    Admin,
}

/// A linkable page with its menu title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PageLink {
    pub view: View,
    pub title: String,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn pliers() -> Product {
        Product {
            id: 5,
            sku: "IP-10".to_string(),
            name: "Locking Pliers".to_string(),
            image: String::new(),
            gallery: vec![],
            stock: 120,
            prices: PriceTiers {
                retail: Money::from_toman(350_000),
                wholesale: Money::from_toman(310_000),
            },
            category: "Hand Tools".to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn test_price_at_tier() {
        let product = pliers();
        assert_eq!(product.price(PriceTier::Retail).toman(), 350_000);
        assert_eq!(product.price(PriceTier::Wholesale).toman(), 310_000);
    }

    #[test]
    fn test_effective_tier_for_anonymous_is_retail() {
        assert_eq!(PriceTier::Wholesale.effective(false), PriceTier::Retail);
        assert_eq!(PriceTier::Wholesale.effective(true), PriceTier::Wholesale);
        assert_eq!(PriceTier::Retail.effective(true), PriceTier::Retail);
    }

    #[test]
    fn test_price_tier_parsing() {
        assert_eq!("retail".parse::<PriceTier>().unwrap(), PriceTier::Retail);
        assert_eq!(" Wholesale ".parse::<PriceTier>().unwrap(), PriceTier::Wholesale);
        assert!("vip".parse::<PriceTier>().is_err());
        assert_eq!(PriceTier::default(), PriceTier::Retail);
    }

    #[test]
    fn test_order_status_open() {
        assert!(OrderStatus::Processing.is_open());
        assert!(OrderStatus::Shipped.is_open());
        assert!(!OrderStatus::Delivered.is_open());
    }

    #[test]
    fn test_menu_item_wire_format() {
        let item = MenuItem {
            id: 3,
            menu_id: 1,
            title: "Electric Tools".to_string(),
            kind: MenuItemKind::Category,
            value: "electric-tools".to_string(),
            parent_id: Some(2),
            order: 1,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "category");
        assert_eq!(json["menuId"], 1);
        assert_eq!(json["parentId"], 2);
    }

    #[test]
    fn test_draft_into_product() {
        let draft = ProductDraft {
            sku: "LSR-50M".to_string(),
            name: "Laser Distance Meter".to_string(),
            image: String::new(),
            gallery: vec![],
            stock: 15,
            prices: PriceTiers {
                retail: Money::from_toman(950_000),
                wholesale: Money::from_toman(880_000),
            },
            category: "Measuring Tools".to_string(),
            description: String::new(),
        };
        let product = draft.into_product(42);
        assert_eq!(product.id, 42);
        assert_eq!(product.sku, "LSR-50M");
        assert!(product.in_stock());
    }
}
