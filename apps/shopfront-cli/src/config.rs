//! # Shop Configuration
//!
//! Settings for a checkout run.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     SHOPFRONT_SHIPPING_RATE=1000        (cents per kg)                 │
//! │     SHOPFRONT_CUSTOMER_NAME=Malak                                      │
//! │     SHOPFRONT_CUSTOMER_BALANCE=100000   (cents)                        │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     $SHOPFRONT_CONFIG, or                                              │
//! │     ~/.config/shopfront/shopfront.toml (Linux)                         │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     10 per kg shipping, customer "Malak" with 1000                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # shopfront.toml
//! [shipping]
//! rate_per_kg_cents = 1000
//!
//! [customer]
//! name = "Malak"
//! balance_cents = 100000
//! ```

use serde::{Deserialize, Serialize};
use shopfront_core::validation::{validate_shipping_rate, ValidationResult};
use shopfront_core::{Customer, Money, ShippingRate, ValidationError};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::ConfigError;

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "SHOPFRONT_CONFIG";

const SHIPPING_RATE_ENV: &str = "SHOPFRONT_SHIPPING_RATE";
const CUSTOMER_NAME_ENV: &str = "SHOPFRONT_CUSTOMER_NAME";
const CUSTOMER_BALANCE_ENV: &str = "SHOPFRONT_CUSTOMER_BALANCE";

// =============================================================================
// Shipping Settings
// =============================================================================

/// Shipping settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShippingSettings {
    /// Flat rate in cents per kilogram.
    #[serde(default = "default_rate_per_kg_cents")]
    pub rate_per_kg_cents: i64,
}

fn default_rate_per_kg_cents() -> i64 {
    ShippingRate::STANDARD.cents_per_kg()
}

impl Default for ShippingSettings {
    fn default() -> Self {
        ShippingSettings {
            rate_per_kg_cents: default_rate_per_kg_cents(),
        }
    }
}

// =============================================================================
// Customer Settings
// =============================================================================

/// The customer who checks out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerSettings {
    #[serde(default = "default_customer_name")]
    pub name: String,

    /// Starting balance in cents.
    #[serde(default = "default_balance_cents")]
    pub balance_cents: i64,
}

fn default_customer_name() -> String {
    "Malak".to_string()
}

fn default_balance_cents() -> i64 {
    Money::from_units(1000).cents()
}

impl Default for CustomerSettings {
    fn default() -> Self {
        CustomerSettings {
            name: default_customer_name(),
            balance_cents: default_balance_cents(),
        }
    }
}

// =============================================================================
// Shop Config
// =============================================================================

/// Complete run configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShopConfig {
    #[serde(default)]
    pub shipping: ShippingSettings,

    #[serde(default)]
    pub customer: CustomerSettings,
}

impl ShopConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (shopfront.toml)
    /// 3. Environment variables
    ///
    /// A missing file is not an error.
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let path = config_path
            .or_else(|| std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from))
            .or_else(Self::default_config_path);

        let mut config = match path {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Reads a TOML file, falling back to defaults when it does not exist.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(?path, "Config file not found, using defaults");
            return Ok(Self::default());
        }

        info!(?path, "Loading shop config from file");
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Applies overrides from a key lookup (the process environment in
    /// production). Unparsable numbers are logged and ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(rate) = lookup(SHIPPING_RATE_ENV) {
            match rate.trim().parse::<i64>() {
                Ok(cents) => {
                    debug!(cents, "Overriding shipping rate from environment");
                    self.shipping.rate_per_kg_cents = cents;
                }
                Err(_) => warn!(value = %rate, "Ignoring invalid {}", SHIPPING_RATE_ENV),
            }
        }

        if let Some(name) = lookup(CUSTOMER_NAME_ENV) {
            self.customer.name = name;
        }

        if let Some(balance) = lookup(CUSTOMER_BALANCE_ENV) {
            match balance.trim().parse::<i64>() {
                Ok(cents) => {
                    debug!(cents, "Overriding customer balance from environment");
                    self.customer.balance_cents = cents;
                }
                Err(_) => warn!(value = %balance, "Ignoring invalid {}", CUSTOMER_BALANCE_ENV),
            }
        }
    }

    /// Checks values that parsed but make no sense.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_shipping_rate(self.shipping_rate())?;

        if self.customer.name.trim().is_empty() {
            return Err(ValidationError::Required {
                field: "customer name".to_string(),
            });
        }

        Ok(())
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "shopfront", "shopfront")
            .map(|dirs| dirs.config_dir().join("shopfront.toml"))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    pub fn shipping_rate(&self) -> ShippingRate {
        ShippingRate::from_cents_per_kg(self.shipping.rate_per_kg_cents)
    }

    /// Builds the configured customer.
    pub fn customer(&self) -> Customer {
        Customer::new(
            self.customer.name.clone(),
            Money::from_cents(self.customer.balance_cents),
        )
    }
}
