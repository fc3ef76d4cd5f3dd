//! # Configuration
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command line flags (applied in `main`)
//! 2. Environment variables (`SHOP_*`)
//! 3. Defaults (this file)
//!
//! Configuration is read-only once the session starts.

use serde::{Deserialize, Serialize};
use shop_core::OrderPolicy;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopConfig {
    /// Shown in the menu header as "{store_name} Menu".
    pub store_name: String,

    /// What happens to earlier order lines when a later one fails.
    pub order_policy: OrderPolicy,

    /// `tracing` filter used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for ShopConfig {
    /// ## Default Values
    /// - Store: "Store" (menu header "Store Menu")
    /// - Order policy: partial (earlier lines stay applied)
    /// - Log filter: "warn"
    fn default() -> Self {
        ShopConfig {
            store_name: "Store".to_string(),
            order_policy: OrderPolicy::Partial,
            log_filter: "warn".to_string(),
        }
    }
}

impl ShopConfig {
    /// Loads configuration from the process environment.
    ///
    /// ## Environment Variables
    /// - `SHOP_STORE_NAME`: Override store name
    /// - `SHOP_ORDER_POLICY`: `partial` or `all_or_nothing`
    /// - `SHOP_LOG`: Default log filter (e.g., "info")
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ShopConfig::default();

        if let Some(store_name) = lookup("SHOP_STORE_NAME") {
            if store_name.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    name: "SHOP_STORE_NAME".to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
            config.store_name = store_name;
        }

        if let Some(policy) = lookup("SHOP_ORDER_POLICY") {
            config.order_policy = policy.parse().map_err(|e: shop_core::ValidationError| {
                ConfigError::InvalidValue {
                    name: "SHOP_ORDER_POLICY".to_string(),
                    reason: e.to_string(),
                }
            })?;
        }

        if let Some(filter) = lookup("SHOP_LOG") {
            config.log_filter = filter;
        }

        Ok(config)
    }

    /// Menu header text.
    pub fn menu_title(&self) -> String {
        format!("{} Menu", self.store_name)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {reason}")]
    InvalidValue { name: String, reason: String },
}
