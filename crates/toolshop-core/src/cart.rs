//! # Cart
//!
//! The shopping cart and its price aggregation.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Storefront Action        Cart Method             Cart Change           │
//! │  ─────────────────        ───────────             ───────────           │
//! │                                                                         │
//! │  Add to cart ───────────► add(id, qty) ─────────► qty += n or push     │
//! │                                                                         │
//! │  Change quantity ───────► set_quantity(id, n) ──► qty = n (n ≤ 0: drop)│
//! │                                                                         │
//! │  Remove ────────────────► remove(id) ───────────► entry dropped        │
//! │                                                                         │
//! │  View cart ─────────────► lines(products, tier) ► (read only)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Live Pricing
//! Entries hold a product id and a quantity, nothing else. Prices are looked
//! up at read time against the current catalog and the effective tier, so a
//! tier switch reprices every line at once. An entry whose product has been
//! deleted stays in the cart but contributes nothing.

use serde::Serialize;

use crate::error::CoreResult;
use crate::money::Money;
use crate::types::{CartItem, OrderLine, PriceTier, Product, ProductId};
use crate::validation::validate_quantity;

/// A cart entry resolved against the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
    pub unit_price: Money,
    pub line_total: Money,
}

impl CartLine {
    /// Freezes the line for an order.
    pub fn to_order_line(&self) -> OrderLine {
        OrderLine {
            product_name: self.product.name.clone(),
            quantity: self.quantity,
            price: self.unit_price,
        }
    }
}

/// The shopping cart.
///
/// ## Invariants
/// - At most one entry per `product_id`
/// - Every entry has `quantity >= 1`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct products in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of all quantities (the badge on the cart icon).
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    pub fn quantity_of(&self, product_id: ProductId) -> Option<u32> {
        self.items
            .iter()
            .find(|i| i.product_id == product_id)
            .map(|i| i.quantity)
    }

    /// Adds `qty` of a product, merging with an existing entry.
    ///
    /// Stock is not checked. A non-positive `qty` is rejected.
    ///
    /// ## Example
    /// ```rust
    /// use toolshop_core::cart::Cart;
    ///
    /// let mut cart = Cart::new();
    /// cart.add(5, 1).unwrap();
    /// cart.add(5, 2).unwrap();
    /// assert_eq!(cart.quantity_of(5), Some(3));
    /// assert_eq!(cart.item_count(), 1);
    /// ```
    pub fn add(&mut self, product_id: ProductId, qty: i64) -> CoreResult<u32> {
        let qty = validate_quantity(qty)?;

        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product_id) {
            item.quantity = item.quantity.saturating_add(qty);
            return Ok(item.quantity);
        }

        self.items.push(CartItem {
            product_id,
            quantity: qty,
        });
        Ok(qty)
    }

    /// Sets the quantity of an entry exactly. `qty <= 0` removes it.
    ///
    /// Returns the new quantity, or `None` when the entry is gone (or was
    /// never there; updating an absent product does nothing).
    pub fn set_quantity(&mut self, product_id: ProductId, qty: i64) -> Option<u32> {
        if qty <= 0 {
            self.remove(product_id);
            return None;
        }

        let qty = u32::try_from(qty).unwrap_or(u32::MAX);
        let item = self.items.iter_mut().find(|i| i.product_id == product_id)?;
        item.quantity = qty;
        Some(qty)
    }

    /// Drops the entry for a product. Returns whether one existed.
    pub fn remove(&mut self, product_id: ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.product_id != product_id);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Resolves every entry against the catalog at the given tier.
    ///
    /// Entries whose product no longer exists are skipped.
    pub fn lines(&self, products: &[Product], tier: PriceTier) -> Vec<CartLine> {
        self.items
            .iter()
            .filter_map(|item| {
                let product = products.iter().find(|p| p.id == item.product_id)?;
                let unit_price = product.price(tier);
                Some(CartLine {
                    product: product.clone(),
                    quantity: item.quantity,
                    unit_price,
                    line_total: unit_price * item.quantity,
                })
            })
            .collect()
    }

    /// Σ price-at-tier × quantity over entries whose product still exists.
    pub fn total(&self, products: &[Product], tier: PriceTier) -> Money {
        self.items
            .iter()
            .filter_map(|item| {
                products
                    .iter()
                    .find(|p| p.id == item.product_id)
                    .map(|p| p.price(tier) * item.quantity)
            })
            .sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PriceTiers;

    fn product(id: ProductId, retail: i64, wholesale: i64) -> Product {
        Product {
            id,
            sku: format!("SKU-{id}"),
            name: format!("Product {id}"),
            image: String::new(),
            gallery: vec![],
            stock: 10,
            prices: PriceTiers {
                retail: Money::from_toman(retail),
                wholesale: Money::from_toman(wholesale),
            },
            category: "Hand Tools".to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn test_repeated_adds_merge_into_one_entry() {
        let mut cart = Cart::new();
        for qty in [1, 4, 2, 7] {
            cart.add(3, qty).unwrap();
        }
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.quantity_of(3), Some(14));
    }

    #[test]
    fn test_add_rejects_non_positive_quantity() {
        let mut cart = Cart::new();
        assert!(cart.add(1, 0).is_err());
        assert!(cart.add(1, -2).is_err());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_ignores_stock() {
        let mut cart = Cart::new();
        assert_eq!(cart.add(1, 500).unwrap(), 500);
    }

    #[test]
    fn test_set_quantity_sets_not_adds() {
        let mut cart = Cart::new();
        cart.add(1, 3).unwrap();
        assert_eq!(cart.set_quantity(1, 5), Some(5));
        assert_eq!(cart.quantity_of(1), Some(5));
    }

    #[test]
    fn test_set_quantity_zero_removes() {
        let mut cart = Cart::new();
        cart.add(1, 3).unwrap();
        cart.add(2, 1).unwrap();
        assert_eq!(cart.set_quantity(1, 0), None);
        assert_eq!(cart.quantity_of(1), None);
        assert_eq!(cart.set_quantity(2, -1), None);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_on_absent_product_is_noop() {
        let mut cart = Cart::new();
        assert_eq!(cart.set_quantity(9, 4), None);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_total_at_tier() {
        let products = vec![product(5, 350_000, 310_000)];
        let mut cart = Cart::new();
        cart.add(5, 2).unwrap();

        assert_eq!(cart.total(&products, PriceTier::Retail).toman(), 700_000);
        assert_eq!(cart.total(&products, PriceTier::Wholesale).toman(), 620_000);
    }

    #[test]
    fn test_total_with_retail_price_310000() {
        let products = vec![product(5, 310_000, 290_000)];
        let mut cart = Cart::new();
        cart.add(5, 2).unwrap();
        assert_eq!(cart.total(&products, PriceTier::Retail).toman(), 620_000);
    }

    #[test]
    fn test_missing_products_contribute_nothing() {
        let products = vec![product(1, 100, 90)];
        let mut cart = Cart::new();
        cart.add(1, 2).unwrap();
        cart.add(42, 3).unwrap();

        assert_eq!(cart.total(&products, PriceTier::Retail).toman(), 200);
        let lines = cart.lines(&products, PriceTier::Retail);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].line_total.toman(), 200);
        // The dangling entry is kept.
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total_quantity(), 5);
    }

    #[test]
    fn test_line_freezes_into_order_line() {
        let products = vec![product(2, 1_000, 800)];
        let mut cart = Cart::new();
        cart.add(2, 3).unwrap();
        let line = cart.lines(&products, PriceTier::Wholesale).remove(0);
        let frozen = line.to_order_line();
        assert_eq!(frozen.product_name, "Product 2");
        assert_eq!(frozen.quantity, 3);
        assert_eq!(frozen.price.toman(), 800);
    }
}
