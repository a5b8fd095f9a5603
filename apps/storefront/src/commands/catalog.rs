//! # Catalog Commands
//!
//! Product listing, search and browsing for the storefront.
//!
//! Every product leaves this module as a [`ProductCard`], carrying the price
//! at the session's effective tier, so the UI never picks a tier itself.
//!
//! ## Product Grid Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  set_category_filter("Hand Tools")                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  search_products({ category, search, minPrice, maxPrice, sort })       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  [ProductCard { ...product, price, inStock }]                          │
//! │       │                                                                 │
//! │       ▼  click                                                          │
//! │  view_product(id) ──► recently viewed list updated                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use toolshop_core::{CatalogQuery, CategoryFilter, Money, PriceTier, Product, ProductId};
use toolshop_store::Store;
use tracing::debug;

use crate::error::ApiError;
use crate::state::StoreState;

/// A product with its price at the effective tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    #[serde(flatten)]
    pub product: Product,
    pub price: Money,
    pub in_stock: bool,
}

impl ProductCard {
    pub fn new(product: &Product, tier: PriceTier) -> Self {
        ProductCard {
            product: product.clone(),
            price: product.price(tier),
            in_stock: product.in_stock(),
        }
    }
}

fn cards<'a>(store: &Store, products: impl IntoIterator<Item = &'a Product>) -> Vec<ProductCard> {
    let tier = store.effective_price_tier();
    products
        .into_iter()
        .map(|p| ProductCard::new(p, tier))
        .collect()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeResponse {
    pub featured: Vec<ProductCard>,
    pub newest: Vec<ProductCard>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowsingResponse {
    pub selected_product: Option<ProductCard>,
    pub recently_viewed: Vec<ProductCard>,
    pub category_filter: CategoryFilter,
}

// =============================================================================
// Arguments
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchArgs {
    #[serde(default)]
    pub query: CatalogQuery,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickSearchArgs {
    pub term: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductIdArgs {
    pub id: ProductId,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryFilterArgs {
    pub category: CategoryFilter,
}

// =============================================================================
// Commands
// =============================================================================

pub fn get_products(state: &StoreState) -> Result<Vec<ProductCard>, ApiError> {
    Ok(state.with_store(|s| cards(s, s.products())))
}

/// Filtered and sorted product grid.
pub fn search_products(state: &StoreState, args: SearchArgs) -> Result<Vec<ProductCard>, ApiError> {
    debug!(category = %args.query.category, search = %args.query.search, "search_products command");
    state.with_store(|s| {
        let found = s.search_products(&args.query)?;
        Ok(cards(s, &found))
    })
}

/// Header search box suggestions.
pub fn quick_search(
    state: &StoreState,
    args: QuickSearchArgs,
) -> Result<Vec<ProductCard>, ApiError> {
    state.with_store(|s| {
        let found = s.quick_search(&args.term)?;
        Ok(cards(s, &found))
    })
}

pub fn get_product(state: &StoreState, args: ProductIdArgs) -> Result<ProductCard, ApiError> {
    state.with_store(|s| {
        let product = s
            .product(args.id)
            .ok_or_else(|| ApiError::not_found("Product", args.id))?;
        Ok(ProductCard::new(product, s.effective_price_tier()))
    })
}

/// Opens the product detail page.
pub fn view_product(state: &StoreState, args: ProductIdArgs) -> Result<ProductCard, ApiError> {
    debug!(product_id = args.id, "view_product command");
    state.with_store_mut(|s| {
        let tier = s.effective_price_tier();
        let product = s.view_product(args.id)?;
        Ok(ProductCard::new(product, tier))
    })
}

/// Distinct category labels used by products, for the filter dropdown.
pub fn get_product_categories(state: &StoreState) -> Result<Vec<String>, ApiError> {
    Ok(state.with_store(|s| s.product_categories()))
}

pub fn get_home_sections(state: &StoreState) -> Result<HomeResponse, ApiError> {
    Ok(state.with_store(|s| {
        let sections = s.home_sections();
        HomeResponse {
            featured: cards(s, &sections.featured),
            newest: cards(s, &sections.newest),
        }
    }))
}

pub fn get_browsing(state: &StoreState) -> Result<BrowsingResponse, ApiError> {
    Ok(state.with_store(|s| {
        let tier = s.effective_price_tier();
        BrowsingResponse {
            selected_product: s.selected_product().map(|p| ProductCard::new(p, tier)),
            recently_viewed: cards(s, s.recently_viewed()),
            category_filter: s.category_filter().clone(),
        }
    }))
}

pub fn set_category_filter(state: &StoreState, args: CategoryFilterArgs) -> Result<(), ApiError> {
    state.with_store_mut(|s| s.set_category_filter(args.category));
    Ok(())
}
