//! # Store State
//!
//! Shares the one [`Store`] between commands.
//!
//! ## Thread Safety
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Store State Operations                               │
//! │                                                                         │
//! │  Command                  Access                  Lock                  │
//! │  ───────                  ──────                  ────                  │
//! │                                                                         │
//! │  get_cart() ─────────────► with_store() ────────► shared, brief        │
//! │                                                                         │
//! │  add_to_cart() ──────────► with_store_mut() ────► exclusive            │
//! │                                                                         │
//! │  save_menu() ────────────► with_store_mut() ────► exclusive            │
//! │                                                                         │
//! │  NOTE: Every operation is synchronous, so a Mutex is enough.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use toolshop_store::Store;

#[derive(Debug, Clone)]
pub struct StoreState {
    store: Arc<Mutex<Store>>,
}

impl StoreState {
    pub fn new(store: Store) -> Self {
        StoreState {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Executes a function with read access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let total = state.with_store(|s| s.cart_total());
    /// ```
    pub fn with_store<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Store) -> R,
    {
        // Mutators validate before writing, so a poisoned store is still consistent.
        let store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        f(&store)
    }

    /// Executes a function with write access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// state.with_store_mut(|s| s.add_to_cart(5, 1))?;
    /// ```
    pub fn with_store_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Store) -> R,
    {
        let mut store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut store)
    }
}

impl Default for StoreState {
    fn default() -> Self {
        Self::new(Store::with_mock_data())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_one_store() {
        let state = StoreState::default();
        let other = state.clone();

        other.with_store_mut(|s| s.add_to_cart(5, 2)).unwrap();
        assert_eq!(state.with_store(|s| s.cart_total().toman()), 700_000);
    }
}
