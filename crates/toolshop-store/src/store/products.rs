//! # Products
//!
//! Catalog reads for the storefront and product CRUD for the admin console.
//!
//! Updates are full-record replacements by id. Deleting a product does not
//! touch carts, orders or the recently-viewed list.

use toolshop_core::catalog::{self, CatalogQuery, HomeSections};
use toolshop_core::validation::{validate_product, validate_product_draft, validate_search_query};
use toolshop_core::{CoreError, CoreResult, Product, ProductDraft, ProductId};
use tracing::debug;

use super::Store;

impl Store {
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Filtered and sorted product grid.
    pub fn search_products(&self, query: &CatalogQuery) -> CoreResult<Vec<Product>> {
        let mut query = query.clone();
        query.search = validate_search_query(&query.search)?;

        let results = catalog::apply(&self.products, &query);
        debug!(
            search = %query.search,
            category = %query.category,
            count = results.len(),
            "Searched products"
        );
        Ok(results)
    }

    /// Name/SKU search for the quick price list.
    pub fn quick_search(&self, term: &str) -> CoreResult<Vec<Product>> {
        let term = validate_search_query(term)?;
        Ok(catalog::quick_search(&self.products, &term))
    }

    /// Distinct category labels of the catalog, first-seen order.
    pub fn product_categories(&self) -> Vec<String> {
        catalog::category_names(&self.products)
    }

    pub fn home_sections(&self) -> HomeSections {
        catalog::home_sections(&self.products)
    }

    // =========================================================================
    // Admin
    // =========================================================================

    pub fn add_product(&mut self, draft: ProductDraft) -> CoreResult<Product> {
        self.require_admin("Adding products")?;
        validate_product_draft(&draft)?;

        let id = self.next_id();
        let product = draft.into_product(id);
        debug!(id = id, sku = %product.sku, "Adding product");
        self.products.push(product.clone());
        Ok(product)
    }

    pub fn update_product(&mut self, product: Product) -> CoreResult<()> {
        self.require_admin("Updating products")?;
        validate_product(&product)?;

        let slot = self
            .products
            .iter_mut()
            .find(|p| p.id == product.id)
            .ok_or(CoreError::ProductNotFound(product.id))?;

        debug!(id = product.id, sku = %product.sku, "Updating product");
        *slot = product;
        Ok(())
    }

    pub fn delete_product(&mut self, id: ProductId) -> CoreResult<()> {
        self.require_admin("Deleting products")?;

        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        if self.products.len() == before {
            return Err(CoreError::ProductNotFound(id));
        }

        debug!(id = id, "Deleted product");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::admin_store;
    use super::*;
    use toolshop_core::{Money, PriceTiers, SortKey};

    fn draft() -> ProductDraft {
        ProductDraft {
            sku: "BSH-GSB".to_string(),
            name: "Bosch Impact Drill".to_string(),
            image: String::new(),
            gallery: vec![],
            stock: 12,
            prices: PriceTiers {
                retail: Money::from_toman(3_100_000),
                wholesale: Money::from_toman(2_900_000),
            },
            category: "Electric Tools".to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn test_add_update_delete_product() {
        let mut store = admin_store();
        let added = store.add_product(draft()).unwrap();
        assert_eq!(store.products().len(), 7);
        assert_eq!(store.products().last().map(|p| p.id), Some(added.id));

        let mut changed = added.clone();
        changed.stock = 0;
        store.update_product(changed).unwrap();
        assert!(!store.product(added.id).unwrap().in_stock());

        store.delete_product(added.id).unwrap();
        assert!(store.product(added.id).is_none());
        assert!(matches!(
            store.delete_product(added.id),
            Err(CoreError::ProductNotFound(_))
        ));
    }

    #[test]
    fn test_product_admin_requires_login() {
        let mut store = Store::with_mock_data();
        assert!(matches!(
            store.add_product(draft()),
            Err(CoreError::NotAuthorized(_))
        ));
        assert!(store.delete_product(1).is_err());
        assert_eq!(store.products().len(), 6);
    }

    #[test]
    fn test_invalid_product_rejected() {
        let mut store = admin_store();
        let bad = ProductDraft {
            sku: "has space".to_string(),
            ..draft()
        };
        assert!(matches!(store.add_product(bad), Err(CoreError::Validation(_))));
    }

    #[test]
    fn test_update_missing_product() {
        let mut store = admin_store();
        let ghost = draft().into_product(404);
        assert_eq!(
            store.update_product(ghost),
            Err(CoreError::ProductNotFound(404))
        );
    }

    #[test]
    fn test_deleted_product_stays_in_cart_but_is_skipped() {
        let mut store = admin_store();
        store.add_to_cart(5, 2).unwrap();
        store.add_to_cart(4, 1).unwrap();
        store.delete_product(4).unwrap();

        assert_eq!(store.cart_items().len(), 2);
        assert_eq!(store.cart_lines().len(), 1);
        assert_eq!(store.cart_total().toman(), 700_000);
    }

    #[test]
    fn test_search_products() {
        let store = Store::with_mock_data();
        let query = CatalogQuery {
            category: "Hand Tools".into(),
            sort: SortKey::PriceAsc,
            ..CatalogQuery::default()
        };
        let ids: Vec<i64> = store
            .search_products(&query)
            .unwrap()
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![5, 3]);

        assert_eq!(store.quick_search("lsr").unwrap().len(), 1);
        assert_eq!(
            store.product_categories(),
            vec!["Cordless Tools", "Electric Tools", "Hand Tools", "Measuring Tools"]
        );
        assert_eq!(store.home_sections().featured.len(), 4);
        assert_eq!(store.home_sections().newest.len(), 2);
    }
}
