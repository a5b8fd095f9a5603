//! # Admin Commands
//!
//! Product, category and order management plus the admin dashboard. The
//! store refuses all of these unless the admin is signed in.
//!
//! ## Admin Console Sections
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Dashboard   get_admin_stats                                            │
//! │  Products    add_product / update_product / delete_product              │
//! │  Categories  get_category_list / get_category_tree                      │
//! │              add_category / update_category / delete_category           │
//! │  Orders      get_orders / update_order_status                           │
//! │  Menus       see menus.rs                                               │
//! │  Settings    see settings.rs                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use toolshop_core::{
    AdminStats, Category, CategoryDraft, CategoryId, Depthed, Order, OrderStatus, Product,
    ProductDraft, ProductId, TreeNode,
};
use tracing::debug;

use crate::error::ApiError;
use crate::state::StoreState;

// =============================================================================
// Arguments
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraftArgs {
    pub product: ProductDraft,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductArgs {
    pub product: Product,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductIdArgs {
    pub id: ProductId,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDraftArgs {
    pub category: CategoryDraft,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryArgs {
    pub category: Category,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryIdArgs {
    pub id: CategoryId,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusArgs {
    pub id: String,
    pub status: OrderStatus,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedResponse {
    pub removed: usize,
}

// =============================================================================
// Dashboard & Orders
// =============================================================================

pub fn get_admin_stats(state: &StoreState) -> Result<AdminStats, ApiError> {
    Ok(state.with_store(|s| s.admin_stats())?)
}

pub fn get_orders(state: &StoreState) -> Result<Vec<Order>, ApiError> {
    Ok(state.with_store(|s| s.orders().to_vec()))
}

pub fn update_order_status(state: &StoreState, args: OrderStatusArgs) -> Result<Order, ApiError> {
    debug!(order_id = %args.id, status = ?args.status, "update_order_status command");
    state.with_store_mut(|s| {
        s.update_order_status(&args.id, args.status)?;
        s.order(&args.id)
            .cloned()
            .ok_or_else(|| ApiError::not_found("Order", &args.id))
    })
}

// =============================================================================
// Products
// =============================================================================

pub fn add_product(state: &StoreState, args: ProductDraftArgs) -> Result<Product, ApiError> {
    Ok(state.with_store_mut(|s| s.add_product(args.product))?)
}

/// Replaces a product by id.
pub fn update_product(state: &StoreState, args: ProductArgs) -> Result<Product, ApiError> {
    let product = args.product;
    state.with_store_mut(|s| s.update_product(product.clone()))?;
    Ok(product)
}

pub fn delete_product(state: &StoreState, args: ProductIdArgs) -> Result<(), ApiError> {
    Ok(state.with_store_mut(|s| s.delete_product(args.id))?)
}

// =============================================================================
// Categories
// =============================================================================

/// Depth-annotated rows for the indented category table.
pub fn get_category_list(state: &StoreState) -> Result<Vec<Depthed<Category>>, ApiError> {
    Ok(state.with_store(|s| s.category_list()))
}

pub fn get_category_tree(state: &StoreState) -> Result<Vec<TreeNode<Category>>, ApiError> {
    Ok(state.with_store(|s| s.category_tree()))
}

/// Categories that no longer hang off a root.
pub fn get_orphaned_categories(state: &StoreState) -> Result<Vec<Category>, ApiError> {
    Ok(state.with_store(|s| s.orphaned_categories().into_iter().cloned().collect()))
}

pub fn add_category(state: &StoreState, args: CategoryDraftArgs) -> Result<Category, ApiError> {
    Ok(state.with_store_mut(|s| s.add_category(args.category))?)
}

pub fn update_category(state: &StoreState, args: CategoryArgs) -> Result<Category, ApiError> {
    Ok(state.with_store_mut(|s| s.update_category(args.category))?)
}

/// Deletes a category and its direct children.
pub fn delete_category(
    state: &StoreState,
    args: CategoryIdArgs,
) -> Result<DeletedResponse, ApiError> {
    let removed = state.with_store_mut(|s| s.delete_category(args.id))?;
    Ok(DeletedResponse { removed })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use toolshop_core::{Money, PriceTiers, ADMIN_PASSWORD, ADMIN_USERNAME};

    fn admin_state() -> StoreState {
        let state = StoreState::default();
        state
            .with_store_mut(|s| s.admin_login(ADMIN_USERNAME, ADMIN_PASSWORD))
            .unwrap();
        state
    }

    fn draft() -> ProductDraft {
        ProductDraft {
            sku: "MK-7".to_string(),
            name: "Makita Jigsaw".to_string(),
            image: String::new(),
            gallery: Vec::new(),
            stock: 4,
            prices: PriceTiers {
                retail: Money::from_toman(4_200_000),
                wholesale: Money::from_toman(3_900_000),
            },
            category: "Electric Tools".to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn test_admin_commands_require_login() {
        let state = StoreState::default();
        let err = add_product(&state, ProductDraftArgs { product: draft() }).unwrap_err();
        assert_eq!(err.code, ErrorCode::Unauthorized);
        assert_eq!(get_admin_stats(&state).unwrap_err().code, ErrorCode::Unauthorized);
    }

    #[test]
    fn test_product_crud() {
        let state = admin_state();
        let added = add_product(&state, ProductDraftArgs { product: draft() }).unwrap();
        assert_eq!(get_admin_stats(&state).unwrap().product_count, 7);

        let renamed = Product {
            name: "Makita Jigsaw 4329".to_string(),
            ..added.clone()
        };
        update_product(&state, ProductArgs { product: renamed }).unwrap();
        assert_eq!(
            state.with_store(|s| s.product(added.id).map(|p| p.name.clone())),
            Some("Makita Jigsaw 4329".to_string())
        );

        delete_product(&state, ProductIdArgs { id: added.id }).unwrap();
        let err = delete_product(&state, ProductIdArgs { id: added.id }).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_category_commands() {
        let state = admin_state();
        let list = get_category_list(&state).unwrap();
        assert_eq!(list.len(), 6);
        assert_eq!(list[1].depth, 1);

        let deleted = delete_category(&state, CategoryIdArgs { id: 1 }).unwrap();
        assert_eq!(deleted.removed, 3);
        assert!(get_orphaned_categories(&state).unwrap().is_empty());

        let mut hand = state.with_store(|s| s.category(3).cloned()).unwrap();
        hand.parent_id = Some(6);
        let err = update_category(&state, CategoryArgs { category: hand }).unwrap_err();
        assert_eq!(err.code, ErrorCode::BusinessLogic);
    }

    #[test]
    fn test_update_order_status() {
        let state = admin_state();
        let order = update_order_status(
            &state,
            OrderStatusArgs {
                id: "DEF-456".to_string(),
                status: OrderStatus::Delivered,
            },
        )
        .unwrap();
        assert_eq!(order.status, OrderStatus::Delivered);
        assert_eq!(get_orders(&state).unwrap()[0].status, OrderStatus::Delivered);
    }
}
