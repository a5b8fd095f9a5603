//! # Cart
//!
//! Cart mutations and totals. Every price is taken at the *effective* tier:
//! the stored preference for signed-in customers, retail for everyone else.

use toolshop_core::{CartItem, CartLine, CoreError, CoreResult, Money, ProductId};
use tracing::debug;

use super::Store;

impl Store {
    pub fn cart_items(&self) -> &[CartItem] {
        self.cart.items()
    }

    /// Adds `qty` of a product. Returns the resulting quantity.
    ///
    /// The product must exist at the time it is added; it may be deleted
    /// later without affecting the entry.
    pub fn add_to_cart(&mut self, product_id: ProductId, qty: i64) -> CoreResult<u32> {
        if self.product(product_id).is_none() {
            return Err(CoreError::ProductNotFound(product_id));
        }

        let quantity = self.cart.add(product_id, qty)?;
        debug!(product_id = product_id, added = qty, quantity = quantity, "Added to cart");
        Ok(quantity)
    }

    /// Sets a quantity exactly; `qty <= 0` removes the entry.
    pub fn update_cart_quantity(&mut self, product_id: ProductId, qty: i64) -> Option<u32> {
        let quantity = self.cart.set_quantity(product_id, qty);
        debug!(
            product_id = product_id,
            requested = qty,
            quantity = ?quantity,
            "Updated cart quantity"
        );
        quantity
    }

    pub fn remove_from_cart(&mut self, product_id: ProductId) -> bool {
        let removed = self.cart.remove(product_id);
        debug!(product_id = product_id, removed = removed, "Removed from cart");
        removed
    }

    pub fn clear_cart(&mut self) {
        debug!(items = self.cart.item_count(), "Clearing cart");
        self.cart.clear();
    }

    /// Cart entries priced at the effective tier. Deleted products are skipped.
    pub fn cart_lines(&self) -> Vec<CartLine> {
        self.cart.lines(&self.products, self.effective_price_tier())
    }

    pub fn cart_total(&self) -> Money {
        self.cart.total(&self.products, self.effective_price_tier())
    }

    pub fn cart_item_count(&self) -> usize {
        self.cart.item_count()
    }

    pub fn cart_total_quantity(&self) -> u64 {
        self.cart.total_quantity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolshop_core::PriceTier;

    #[test]
    fn test_cart_total_follows_effective_tier() {
        let mut store = Store::with_mock_data();
        store.add_to_cart(5, 2).unwrap();

        // Anonymous: wholesale preference is ignored.
        store.set_price_tier(PriceTier::Wholesale);
        assert_eq!(store.cart_total().toman(), 700_000);

        store.login("09123456789").unwrap();
        assert_eq!(store.cart_total().toman(), 620_000);

        store.set_price_tier(PriceTier::Retail);
        assert_eq!(store.cart_total().toman(), 700_000);
    }

    #[test]
    fn test_add_merges_and_update_sets() {
        let mut store = Store::with_mock_data();
        assert_eq!(store.add_to_cart(1, 1).unwrap(), 1);
        assert_eq!(store.add_to_cart(1, 2).unwrap(), 3);
        assert_eq!(store.cart_item_count(), 1);

        assert_eq!(store.update_cart_quantity(1, 7), Some(7));
        assert_eq!(store.cart_total_quantity(), 7);

        assert_eq!(store.update_cart_quantity(1, 0), None);
        assert!(store.cart_items().is_empty());
    }

    #[test]
    fn test_add_unknown_product_or_bad_quantity() {
        let mut store = Store::with_mock_data();
        assert_eq!(store.add_to_cart(404, 1), Err(CoreError::ProductNotFound(404)));
        assert!(matches!(store.add_to_cart(1, 0), Err(CoreError::Validation(_))));
        assert!(store.cart_items().is_empty());
    }

    #[test]
    fn test_remove_and_clear() {
        let mut store = Store::with_mock_data();
        store.add_to_cart(1, 1).unwrap();
        store.add_to_cart(2, 1).unwrap();

        assert!(store.remove_from_cart(1));
        assert!(!store.remove_from_cart(1));
        assert_eq!(store.cart_item_count(), 1);

        store.clear_cart();
        assert!(store.cart_lines().is_empty());
        assert!(store.cart_total().is_zero());
    }
}
