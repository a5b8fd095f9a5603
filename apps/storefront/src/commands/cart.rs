//! # Cart Commands
//!
//! Cart manipulation and checkout.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│ Shipping │────►│  Order   │       │
//! │  │  Cart    │     │          │     │  chosen  │     │  placed  │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                                 │              │
//! │                   add_to_cart                       place_order        │
//! │                   update_cart_quantity                   │              │
//! │                   remove_from_cart                       ▼              │
//! │                        │                            cart cleared       │
//! │                        ▼                                                │
//! │                   clear_cart ──────────────────────► (back to empty)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Unlike a till, prices are not frozen in the cart: every response is
//! priced at the current effective tier. Prices freeze when the order is
//! placed.

use serde::{Deserialize, Serialize};
use toolshop_core::{CartLine, MethodId, Money, Order, PriceTier, ProductId};
use toolshop_store::Store;
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::state::StoreState;

/// Cart response including lines and totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub lines: Vec<CartLine>,
    /// Distinct products (header badge).
    pub item_count: usize,
    pub total_quantity: u64,
    pub total: Money,
    pub price_tier: PriceTier,
}

impl From<&Store> for CartResponse {
    fn from(store: &Store) -> Self {
        CartResponse {
            lines: store.cart_lines(),
            item_count: store.cart_item_count(),
            total_quantity: store.cart_total_quantity(),
            total: store.cart_total(),
            price_tier: store.effective_price_tier(),
        }
    }
}

// =============================================================================
// Arguments
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartArgs {
    pub product_id: ProductId,
    /// Defaults to 1.
    pub quantity: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuantityArgs {
    pub product_id: ProductId,
    /// 0 or less removes the line.
    pub quantity: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveFromCartArgs {
    pub product_id: ProductId,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderArgs {
    pub shipping_method_id: Option<MethodId>,
}

// =============================================================================
// Commands
// =============================================================================

pub fn get_cart(state: &StoreState) -> Result<CartResponse, ApiError> {
    Ok(state.with_store(|s| CartResponse::from(s)))
}

/// Adds a product, merging with an existing line.
pub fn add_to_cart(state: &StoreState, args: AddToCartArgs) -> Result<CartResponse, ApiError> {
    let quantity = args.quantity.unwrap_or(1);
    debug!(product_id = args.product_id, quantity = quantity, "add_to_cart command");

    state.with_store_mut(|s| {
        s.add_to_cart(args.product_id, quantity)?;
        Ok(CartResponse::from(&*s))
    })
}

pub fn update_cart_quantity(
    state: &StoreState,
    args: UpdateQuantityArgs,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = args.product_id, quantity = args.quantity, "update_cart_quantity command");
    Ok(state.with_store_mut(|s| {
        s.update_cart_quantity(args.product_id, args.quantity);
        CartResponse::from(&*s)
    }))
}

pub fn remove_from_cart(
    state: &StoreState,
    args: RemoveFromCartArgs,
) -> Result<CartResponse, ApiError> {
    Ok(state.with_store_mut(|s| {
        s.remove_from_cart(args.product_id);
        CartResponse::from(&*s)
    }))
}

pub fn clear_cart(state: &StoreState) -> Result<CartResponse, ApiError> {
    Ok(state.with_store_mut(|s| {
        s.clear_cart();
        CartResponse::from(&*s)
    }))
}

/// Checks out the cart for the signed-in customer.
pub fn place_order(
    state: &StoreState,
    config: &AppConfig,
    args: PlaceOrderArgs,
) -> Result<Order, ApiError> {
    let order = state.with_store_mut(|s| s.place_order(args.shipping_method_id))?;
    info!(
        order_id = %order.id,
        total = %config.format_price(order.total),
        "place_order command"
    );
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use toolshop_core::OrderStatus;

    fn add(state: &StoreState, product_id: ProductId, quantity: i64) -> CartResponse {
        add_to_cart(
            state,
            AddToCartArgs {
                product_id,
                quantity: Some(quantity),
            },
        )
        .unwrap()
    }

    #[test]
    fn test_repeated_adds_merge() {
        let state = StoreState::default();
        add(&state, 5, 1);
        let cart = add(&state, 5, 2);
        assert_eq!(cart.item_count, 1);
        assert_eq!(cart.total_quantity, 3);
        assert_eq!(cart.total.toman(), 1_050_000);
    }

    #[test]
    fn test_update_to_zero_removes() {
        let state = StoreState::default();
        add(&state, 5, 2);
        add(&state, 1, 1);

        let cart = update_cart_quantity(
            &state,
            UpdateQuantityArgs {
                product_id: 5,
                quantity: 0,
            },
        )
        .unwrap();
        assert_eq!(cart.item_count, 1);
        assert_eq!(cart.lines[0].product.id, 1);

        let cart = remove_from_cart(&state, RemoveFromCartArgs { product_id: 1 }).unwrap();
        assert!(cart.lines.is_empty());
        assert!(cart.total.is_zero());
    }

    #[test]
    fn test_add_rejects_bad_quantity_and_unknown_product() {
        let state = StoreState::default();
        let err = add_to_cart(
            &state,
            AddToCartArgs {
                product_id: 5,
                quantity: Some(0),
            },
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = add_to_cart(
            &state,
            AddToCartArgs {
                product_id: 404,
                quantity: None,
            },
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_place_order_requires_login() {
        let state = StoreState::default();
        add(&state, 5, 1);

        let config = AppConfig::default();
        let err = place_order(&state, &config, PlaceOrderArgs::default()).unwrap_err();
        assert_eq!(err.code, ErrorCode::Unauthorized);

        state.with_store_mut(|s| s.login("09123456789").map(|_| ())).unwrap();
        let order = place_order(
            &state,
            &config,
            PlaceOrderArgs {
                shipping_method_id: Some(1),
            },
        )
        .unwrap();
        assert_eq!(order.status, OrderStatus::Processing);
        assert_eq!(order.total.toman(), 350_000 + 35_000);
        assert!(get_cart(&state).unwrap().lines.is_empty());
    }
}
