//! # Orders
//!
//! Checkout, order status updates and the dashboard figures derived from
//! the order list.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  place_order(shipping_method_id)                                        │
//! │       │                                                                 │
//! │       ├── nobody signed in? ──────────► NotAuthorized                  │
//! │       ├── cart has no priced lines? ──► EmptyCart                      │
//! │       ├── unknown shipping method? ───► ShippingMethodNotFound         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  lines frozen at the effective tier (name, qty, unit price)            │
//! │  total = Σ lines + shipping cost                                       │
//! │  status = processing, newest order first                               │
//! │  cart cleared                                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use toolshop_core::{
    AdminStats, CoreError, CoreResult, CustomerStats, MethodId, Money, Order, OrderLine,
    OrderStatus,
};
use tracing::{debug, info};
use uuid::Uuid;

use super::Store;

/// A short, human-readable reference code such as `3FA-9C1`.
fn order_reference() -> String {
    let hex = Uuid::new_v4().simple().to_string().to_uppercase();
    format!("{}-{}", &hex[..3], &hex[3..6])
}

impl Store {
    /// All orders, newest first.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn order(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    pub fn update_order_status(&mut self, id: &str, status: OrderStatus) -> CoreResult<()> {
        self.require_admin("Updating orders")?;

        let order = self
            .orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| CoreError::OrderNotFound(id.to_string()))?;

        debug!(order_id = %id, from = ?order.status, to = ?status, "Updating order status");
        order.status = status;
        Ok(())
    }

    /// Turns the cart into an order for the signed-in customer.
    pub fn place_order(&mut self, shipping_method_id: Option<MethodId>) -> CoreResult<Order> {
        let user_id = self.require_user("Placing an order")?.id;

        let shipping = match shipping_method_id {
            Some(id) => self
                .settings
                .shipping_method(id)
                .map(|m| m.cost)
                .ok_or(CoreError::ShippingMethodNotFound(id))?,
            None => Money::zero(),
        };

        let items: Vec<OrderLine> = self
            .cart_lines()
            .iter()
            .map(|line| line.to_order_line())
            .collect();
        if items.is_empty() {
            return Err(CoreError::EmptyCart);
        }

        let subtotal: Money = items.iter().map(|l| l.price * l.quantity).sum();
        let order = Order {
            id: order_reference(),
            date: Utc::now().format("%Y-%m-%d").to_string(),
            items,
            total: subtotal + shipping,
            status: OrderStatus::Processing,
        };

        info!(
            order_id = %order.id,
            user_id = user_id,
            lines = order.items.len(),
            total = %order.total,
            "Order placed"
        );
        self.orders.insert(0, order.clone());
        self.cart.clear();
        Ok(order)
    }

    /// Admin dashboard figures.
    pub fn admin_stats(&self) -> CoreResult<AdminStats> {
        self.require_admin("Viewing the admin dashboard")?;
        Ok(AdminStats::compute(&self.orders, self.products.len()))
    }

    /// Customer dashboard figures.
    pub fn customer_stats(&self) -> CoreResult<CustomerStats> {
        self.require_user("Viewing the dashboard")?;
        Ok(CustomerStats::compute(&self.orders))
    }
}
