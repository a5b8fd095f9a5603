//! # Browsing
//!
//! Which product is open, what was viewed recently and the active category
//! filter of the product grid.

use toolshop_core::{CategoryFilter, CoreError, CoreResult, Product, ProductId};
use tracing::debug;

use super::{Browsing, Store};

impl Store {
    pub fn browsing(&self) -> &Browsing {
        &self.browsing
    }

    /// Opens a product and moves it to the front of the recently-viewed list.
    pub fn view_product(&mut self, id: ProductId) -> CoreResult<&Product> {
        let index = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or(CoreError::ProductNotFound(id))?;

        let history = &mut self.browsing.recently_viewed;
        history.retain(|viewed| *viewed != id);
        history.insert(0, id);
        history.truncate(self.options.recently_viewed_limit);
        self.browsing.selected_product_id = Some(id);

        debug!(product_id = id, history = history.len(), "Viewed product");
        Ok(&self.products[index])
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.browsing
            .selected_product_id
            .and_then(|id| self.product(id))
    }

    /// Recently viewed products, most recent first. Deleted ones are skipped.
    pub fn recently_viewed(&self) -> Vec<&Product> {
        self.browsing
            .recently_viewed
            .iter()
            .filter_map(|id| self.product(*id))
            .collect()
    }

    pub fn category_filter(&self) -> &CategoryFilter {
        &self.browsing.category_filter
    }

    pub fn set_category_filter(&mut self, filter: CategoryFilter) {
        debug!(filter = %filter, "Category filter changed");
        self.browsing.category_filter = filter;
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::admin_store;
    use super::*;
    use crate::seed::SeedData;
    use crate::store::StoreOptions;

    fn viewed_ids(store: &Store) -> Vec<ProductId> {
        store.browsing().recently_viewed.clone()
    }

    #[test]
    fn test_view_product_dedups_and_moves_to_front() {
        let mut store = Store::with_mock_data();
        for id in [1, 2, 3, 2] {
            store.view_product(id).unwrap();
        }
        assert_eq!(viewed_ids(&store), vec![2, 3, 1]);
        assert_eq!(store.selected_product().map(|p| p.id), Some(2));
    }

    #[test]
    fn test_recently_viewed_is_capped() {
        let mut seed = crate::seed::mock_data();
        let template = seed.products[0].clone();
        seed.products.extend((7..=12).map(|id| {
            let mut p = template.clone();
            p.id = id;
            p
        }));
        let mut store = Store::new(seed, StoreOptions::default());
        for id in 1..=12 {
            store.view_product(id).unwrap();
        }
        assert_eq!(viewed_ids(&store), vec![12, 11, 10, 9, 8, 7, 6, 5]);
    }

    #[test]
    fn test_recently_viewed_limit_is_configurable() {
        let options = StoreOptions {
            recently_viewed_limit: 2,
            ..StoreOptions::default()
        };
        let mut store = Store::new(crate::seed::mock_data(), options);
        for id in [1, 2, 3] {
            store.view_product(id).unwrap();
        }
        assert_eq!(viewed_ids(&store), vec![3, 2]);

        let empty = Store::new(SeedData::default(), options);
        assert!(empty.recently_viewed().is_empty());
    }

    #[test]
    fn test_view_unknown_product() {
        let mut store = Store::with_mock_data();
        assert_eq!(
            store.view_product(404).map(|p| p.id),
            Err(CoreError::ProductNotFound(404))
        );
        assert!(viewed_ids(&store).is_empty());
    }

    #[test]
    fn test_recently_viewed_skips_deleted_products() {
        let mut store = admin_store();
        store.view_product(1).unwrap();
        store.view_product(2).unwrap();
        store.delete_product(1).unwrap();

        let ids: Vec<ProductId> = store.recently_viewed().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_category_filter() {
        let mut store = Store::with_mock_data();
        assert_eq!(*store.category_filter(), CategoryFilter::All);
        store.set_category_filter("Hand Tools".into());
        assert_eq!(store.category_filter().to_string(), "Hand Tools");
    }
}
