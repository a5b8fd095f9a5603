//! # Catalog Filtering & Sorting
//!
//! Pure, stateless queries over the product list. Every call recomputes from
//! scratch; nothing is cached.
//!
//! ## Pipeline
//! ```text
//! products
//!    │
//!    ├─► 1. category  == filter         (or pass-through for "all")
//!    ├─► 2. name OR sku contains term   (case-insensitive)
//!    ├─► 3. min <= retail price <= max  (blank bound = unbounded)
//!    └─► 4. sort                        (default | price ± | name)
//! ```
//!
//! Names sort with Persian collation rules (پ after ب, گ after ک), not by
//! code point.
//!
//! Price bounds always apply to the **retail** price, whatever tier the
//! visitor is shopping at.

use std::fmt;

use icu_collator::{Collator, CollatorOptions};
use icu_locid::locale;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::Product;
use crate::CATEGORY_FILTER_ALL;

// =============================================================================
// Query Types
// =============================================================================

/// Category selector with an "all" sentinel.
///
/// On the wire this is a plain string: `"all"` or a category label.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => product.category == *name,
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        if value == CATEGORY_FILTER_ALL {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(value)
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        CategoryFilter::from(value.to_string())
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.to_string()
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "{}", CATEGORY_FILTER_ALL),
            CategoryFilter::Named(name) => write!(f, "{}", name),
        }
    }
}

/// Sort order of the product grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum SortKey {
    /// Catalog order, unchanged.
    #[default]
    Default,
    PriceAsc,
    PriceDesc,
    NameAsc,
}

/// Everything the product grid filters and sorts by.
///
/// Price bounds are kept as the raw text the visitor typed; see
/// [`parse_price_bound`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogQuery {
    pub category: CategoryFilter,
    pub search: String,
    pub min_price: String,
    pub max_price: String,
    pub sort: SortKey,
}

// =============================================================================
// Helpers
// =============================================================================

/// Parses a price bound leniently: the leading number of the trimmed text,
/// with an optional sign, fraction and exponent.
///
/// Blank or non-numeric text means "no bound". Trailing junk after a number
/// is ignored (`"500k"` is 500), and an exponent marker without digits is
/// treated as junk (`"3e"` is 3).
///
/// ## Example
/// ```rust
/// use toolshop_core::catalog::parse_price_bound;
///
/// assert_eq!(parse_price_bound("  250000 "), Some(250000.0));
/// assert_eq!(parse_price_bound("12.5x"), Some(12.5));
/// assert_eq!(parse_price_bound("1e6"), Some(1_000_000.0));
/// assert_eq!(parse_price_bound(""), None);
/// assert_eq!(parse_price_bound("abc"), None);
/// ```
pub fn parse_price_bound(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    let bytes = raw.as_bytes();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let mut seen_digit = false;
    let mut seen_dot = false;
    while let Some(&b) = bytes.get(end) {
        match b {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }
    if !seen_digit {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let digits = bytes[exp..].iter().take_while(|b| b.is_ascii_digit()).count();
        if digits > 0 {
            end = exp + digits;
        }
    }

    raw[..end].parse().ok()
}

/// Collator for product names. `None` only if the bundled locale data is
/// unusable, in which case names fall back to case-insensitive order.
fn name_collator() -> Option<Collator> {
    Collator::try_new(&locale!("fa").into(), CollatorOptions::new()).ok()
}

fn matches_search(product: &Product, needle: &str) -> bool {
    needle.is_empty()
        || product.name.to_lowercase().contains(needle)
        || product.sku.to_lowercase().contains(needle)
}

// =============================================================================
// Queries
// =============================================================================

/// Runs the full filter-and-sort pipeline.
pub fn apply(products: &[Product], query: &CatalogQuery) -> Vec<Product> {
    let needle = query.search.trim().to_lowercase();
    let min = parse_price_bound(&query.min_price);
    let max = parse_price_bound(&query.max_price);

    let mut filtered: Vec<Product> = products
        .iter()
        .filter(|p| query.category.matches(p))
        .filter(|p| matches_search(p, &needle))
        .filter(|p| {
            let price = p.prices.retail.toman() as f64;
            min.map_or(true, |m| price >= m) && max.map_or(true, |m| price <= m)
        })
        .cloned()
        .collect();

    sort(&mut filtered, query.sort);
    filtered
}

/// Sorts in place. All sorts are stable; ties keep their input order.
pub fn sort(products: &mut [Product], key: SortKey) {
    match key {
        SortKey::Default => {}
        SortKey::PriceAsc => products.sort_by_key(|p| p.prices.retail),
        SortKey::PriceDesc => products.sort_by(|a, b| b.prices.retail.cmp(&a.prices.retail)),
        SortKey::NameAsc => match name_collator() {
            Some(collator) => products.sort_by(|a, b| collator.compare(&a.name, &b.name)),
            None => products.sort_by_cached_key(|p| p.name.to_lowercase()),
        },
    }
}

/// Name/SKU search only, as used by the price list page.
pub fn quick_search(products: &[Product], term: &str) -> Vec<Product> {
    let needle = term.trim().to_lowercase();
    products
        .iter()
        .filter(|p| matches_search(p, &needle))
        .cloned()
        .collect()
}

/// Distinct product category labels in first-seen order.
pub fn category_names(products: &[Product]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for product in products {
        if !names.contains(&product.category) {
            names.push(product.category.clone());
        }
    }
    names
}

/// Product groups shown on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeSections {
    pub featured: Vec<Product>,
    pub newest: Vec<Product>,
}

/// Featured = first four products, newest = the next four.
pub fn home_sections(products: &[Product]) -> HomeSections {
    HomeSections {
        featured: products.iter().take(4).cloned().collect(),
        newest: products.iter().skip(4).take(4).cloned().collect(),
    }
}
