//! # Dashboard Statistics
//!
//! Summary figures for the admin dashboard and the customer dashboard,
//! computed from the order list (newest first).

use serde::Serialize;
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Order, OrderStatus};

/// How many best sellers the admin dashboard lists.
pub const TOP_PRODUCTS: usize = 3;

/// A product name with the quantity sold across all orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductSales {
    pub product_name: String,
    pub quantity: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AdminStats {
    /// Total of the most recent order.
    pub today_sales: Money,
    /// 1 when there is any order, 0 otherwise.
    pub today_orders: usize,
    pub pending_orders: usize,
    pub product_count: usize,
    pub top_products: Vec<ProductSales>,
}

impl AdminStats {
    /// `orders` must be newest first, as the store keeps them.
    pub fn compute(orders: &[Order], product_count: usize) -> Self {
        AdminStats {
            today_sales: orders.first().map(|o| o.total).unwrap_or_default(),
            today_orders: usize::from(!orders.is_empty()),
            pending_orders: orders
                .iter()
                .filter(|o| o.status == OrderStatus::Processing)
                .count(),
            product_count,
            top_products: top_products(orders, TOP_PRODUCTS),
        }
    }
}

/// Best sellers by quantity, keyed by the product name frozen in each order.
/// Equal quantities keep first-seen order.
pub fn top_products(orders: &[Order], limit: usize) -> Vec<ProductSales> {
    let mut totals: Vec<ProductSales> = Vec::new();
    for line in orders.iter().flat_map(|o| &o.items) {
        match totals.iter_mut().find(|t| t.product_name == line.product_name) {
            Some(entry) => entry.quantity += u64::from(line.quantity),
            None => totals.push(ProductSales {
                product_name: line.product_name.clone(),
                quantity: u64::from(line.quantity),
            }),
        }
    }
    totals.sort_by(|a, b| b.quantity.cmp(&a.quantity));
    totals.truncate(limit);
    totals
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CustomerStats {
    pub order_count: usize,
    pub total_spent: Money,
    /// Orders still processing or shipped.
    pub open_orders: usize,
}

impl CustomerStats {
    pub fn compute(orders: &[Order]) -> Self {
        CustomerStats {
            order_count: orders.len(),
            total_spent: orders.iter().map(|o| o.total).sum(),
            open_orders: orders.iter().filter(|o| o.status.is_open()).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OrderLine;

    fn line(name: &str, quantity: u32) -> OrderLine {
        OrderLine {
            product_name: name.to_string(),
            quantity,
            price: Money::from_toman(1_000),
        }
    }

    fn orders() -> Vec<Order> {
        vec![
            Order {
                id: "ORD-2".to_string(),
                date: "2024-05-02".to_string(),
                items: vec![line("Drill", 1), line("Pliers", 4)],
                total: Money::from_toman(5_000),
                status: OrderStatus::Processing,
            },
            Order {
                id: "ORD-1".to_string(),
                date: "2024-05-01".to_string(),
                items: vec![line("Drill", 2), line("Meter", 1), line("Saw", 3)],
                total: Money::from_toman(6_000),
                status: OrderStatus::Delivered,
            },
            Order {
                id: "ORD-0".to_string(),
                date: "2024-04-30".to_string(),
                items: vec![line("Meter", 1)],
                total: Money::from_toman(1_000),
                status: OrderStatus::Shipped,
            },
        ]
    }

    #[test]
    fn test_admin_stats() {
        let stats = AdminStats::compute(&orders(), 6);
        assert_eq!(stats.today_sales.toman(), 5_000);
        assert_eq!(stats.today_orders, 1);
        assert_eq!(stats.pending_orders, 1);
        assert_eq!(stats.product_count, 6);

        let top: Vec<(&str, u64)> = stats
            .top_products
            .iter()
            .map(|p| (p.product_name.as_str(), p.quantity))
            .collect();
        // Drill and Saw tie at 3; Drill was seen first.
        assert_eq!(top, vec![("Pliers", 4), ("Drill", 3), ("Saw", 3)]);
    }

    #[test]
    fn test_admin_stats_without_orders() {
        let stats = AdminStats::compute(&[], 0);
        assert!(stats.today_sales.is_zero());
        assert_eq!(stats.today_orders, 0);
        assert!(stats.top_products.is_empty());
    }

    #[test]
    fn test_customer_stats() {
        let stats = CustomerStats::compute(&orders());
        assert_eq!(stats.order_count, 3);
        assert_eq!(stats.total_spent.toman(), 12_000);
        assert_eq!(stats.open_orders, 2);
    }
}
