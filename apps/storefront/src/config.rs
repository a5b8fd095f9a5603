//! # Storefront Configuration
//!
//! Configuration management for the storefront host.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     TOOLSHOP_PRICE_TIER=wholesale                                      │
//! │     TOOLSHOP_RECENTLY_VIEWED_LIMIT=12                                  │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <path>, or                                                │
//! │     ~/.config/toolshop/storefront.toml (Linux)                         │
//! │     ~/Library/Application Support/com.toolshop.storefront/ (macOS)     │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     mock catalog, 8 recently viewed, retail, "Toman"                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # storefront.toml
//! seed_mock_data = true
//! recently_viewed_limit = 8
//! default_price_tier = "retail"   # retail | wholesale
//! currency_label = "Toman"
//! log_filter = "info,toolshop=debug"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use toolshop_core::{Money, PriceTier, RECENTLY_VIEWED_LIMIT};
use toolshop_store::StoreOptions;
use tracing::{debug, info, warn};

/// Upper bound for `recently_viewed_limit`.
pub const MAX_RECENTLY_VIEWED: usize = 50;

/// Default `tracing` filter when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_FILTER: &str = "info,toolshop=debug";

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// App Config
// =============================================================================

/// Settings the host reads once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Start with the demo catalog, categories, menu and orders.
    pub seed_mock_data: bool,

    /// Length of the recently-viewed list.
    pub recently_viewed_limit: usize,

    /// Tier a fresh session starts with.
    pub default_price_tier: PriceTier,

    /// Unit shown next to amounts in log lines.
    pub currency_label: String,

    /// `tracing` filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            seed_mock_data: true,
            recently_viewed_limit: RECENTLY_VIEWED_LIMIT,
            default_price_tier: PriceTier::Retail,
            currency_label: "Toman".to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`storefront.toml`)
    /// 3. Environment variables
    ///
    /// A missing file is not an error; an unreadable or malformed one is.
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = match config_path.or_else(Self::default_config_path) {
            Some(path) if path.exists() => Self::from_file(&path)?,
            Some(path) => {
                debug!(?path, "Config file not found, using defaults");
                Self::default()
            }
            None => Self::default(),
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Parses one TOML file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        info!(?path, "Loading storefront config from file");
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.recently_viewed_limit == 0 || self.recently_viewed_limit > MAX_RECENTLY_VIEWED {
            return Err(ConfigError::Invalid(format!(
                "recently_viewed_limit must be between 1 and {}, got {}",
                MAX_RECENTLY_VIEWED, self.recently_viewed_limit
            )));
        }
        if self.currency_label.trim().is_empty() {
            return Err(ConfigError::Invalid("currency_label must not be empty".into()));
        }
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies `TOOLSHOP_*` overrides from `lookup`. Unparseable values are
    /// logged and ignored.
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup("TOOLSHOP_SEED_MOCK_DATA") {
            match raw.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" => self.seed_mock_data = true,
                "0" | "false" | "no" => self.seed_mock_data = false,
                _ => warn!(value = %raw, "Ignoring TOOLSHOP_SEED_MOCK_DATA"),
            }
        }

        if let Some(raw) = lookup("TOOLSHOP_RECENTLY_VIEWED_LIMIT") {
            match raw.trim().parse::<usize>() {
                Ok(limit) => {
                    debug!(limit = limit, "Overriding recently viewed limit from environment");
                    self.recently_viewed_limit = limit;
                }
                Err(_) => warn!(value = %raw, "Ignoring TOOLSHOP_RECENTLY_VIEWED_LIMIT"),
            }
        }

        if let Some(raw) = lookup("TOOLSHOP_PRICE_TIER") {
            match raw.parse::<PriceTier>() {
                Ok(tier) => {
                    debug!(tier = %tier, "Overriding price tier from environment");
                    self.default_price_tier = tier;
                }
                Err(e) => warn!(error = %e, "Ignoring TOOLSHOP_PRICE_TIER"),
            }
        }

        if let Some(label) = lookup("TOOLSHOP_CURRENCY_LABEL") {
            self.currency_label = label;
        }

        if let Some(filter) = lookup("TOOLSHOP_LOG") {
            self.log_filter = filter;
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "toolshop", "storefront")
            .map(|dirs| dirs.config_dir().join("storefront.toml"))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            recently_viewed_limit: self.recently_viewed_limit,
            initial_price_tier: self.default_price_tier,
        }
    }

    /// Renders an amount for log lines, e.g. `2,500,000 Toman`.
    pub fn format_price(&self, amount: Money) -> String {
        format!("{} {}", amount, self.currency_label)
    }
}
