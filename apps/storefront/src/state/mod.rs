//! # State Module
//!
//! Application state for the storefront host.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                         AppState                                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │          ┌──────────────────┼──────────────────┐                       │
//! │          ▼                  ▼                  ▼                        │
//! │  ┌──────────────┐  ┌──────────────────┐  ┌──────────────┐              │
//! │  │  StoreState  │  │ MenuEditorState  │  │  AppConfig   │              │
//! │  │              │  │                  │  │              │              │
//! │  │  Arc<Mutex<  │  │  Arc<Mutex<      │  │  read-only   │              │
//! │  │    Store     │  │   Option<Menu    │  │  after load  │              │
//! │  │  >>          │  │   WorkingCopy>>> │  │              │              │
//! │  └──────────────┘  └──────────────────┘  └──────────────┘              │
//! │                                                                         │
//! │  LOCK ORDER: StoreState before MenuEditorState when a command needs    │
//! │  both (save_menu, menu_add_item).                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod menu_editor;
mod store;

pub use menu_editor::MenuEditorState;
pub use store::StoreState;

use toolshop_store::{seed, Store};
use tracing::info;

use crate::config::AppConfig;

/// Every state holder the commands draw from.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: StoreState,
    pub menu_editor: MenuEditorState,
    pub config: AppConfig,
}

impl AppState {
    /// Builds the store the configuration asks for.
    pub fn from_config(config: AppConfig) -> Self {
        let data = if config.seed_mock_data {
            seed::mock_data()
        } else {
            seed::SeedData::default()
        };
        info!(
            mock_data = config.seed_mock_data,
            price_tier = %config.default_price_tier,
            "Building store"
        );

        AppState {
            store: StoreState::new(Store::new(data, config.store_options())),
            menu_editor: MenuEditorState::new(),
            config,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(AppConfig::default())
    }
}
