//! # Storefront Configuration
//!
//! ## Configuration Sources (Priority Order)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Environment Variables (highest priority)                            │
//! │     AOIN_LOCALE=en-IN  AOIN_CURRENCY=INR  AOIN_SHIPPING_FEE=5000        │
//! │                                                                         │
//! │  2. TOML Config File                                                    │
//! │     $AOIN_CONFIG, or ~/.config/marketplace/storefront.toml (Linux)      │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                    │
//! │     en-IN / INR, ₹50.00 shipping, toast durations 3s / 4s / 2s          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [currency]
//! locale = "en-IN"
//! code = "INR"
//!
//! [notifications]
//! success_ms = 3000
//! error_ms = 4000
//!
//! [storefront]
//! name = "Aoin"
//! shipping_fee_cents = 5000
//! ```
//!
//! Configuration is read-only after startup, so it is shared by value.

use std::path::{Path, PathBuf};

use aoin_core::CurrencyFormat;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::ConfigError;

/// Locale and currency used for every amount the storefront displays.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencySettings {
    #[serde(default = "default_locale")]
    pub locale: String,

    #[serde(default = "default_currency_code")]
    pub code: String,
}

fn default_locale() -> String {
    "en-IN".to_string()
}

fn default_currency_code() -> String {
    "INR".to_string()
}

impl Default for CurrencySettings {
    fn default() -> Self {
        CurrencySettings {
            locale: default_locale(),
            code: default_currency_code(),
        }
    }
}

/// How long each kind of toast stays on screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationSettings {
    #[serde(default = "default_success_ms")]
    pub success_ms: u64,

    #[serde(default = "default_error_ms")]
    pub error_ms: u64,

    #[serde(default = "default_info_ms")]
    pub info_ms: u64,
}

fn default_success_ms() -> u64 {
    3000
}

fn default_error_ms() -> u64 {
    4000
}

fn default_info_ms() -> u64 {
    2000
}

impl Default for NotificationSettings {
    fn default() -> Self {
        NotificationSettings {
            success_ms: default_success_ms(),
            error_ms: default_error_ms(),
            info_ms: default_info_ms(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorefrontSettings {
    /// Display name of the marketplace.
    #[serde(default = "default_store_name")]
    pub name: String,

    /// Flat shipping fee (minor units) charged on a non-empty cart.
    #[serde(default = "default_shipping_fee")]
    pub shipping_fee_cents: i64,
}

fn default_store_name() -> String {
    "Aoin".to_string()
}

fn default_shipping_fee() -> i64 {
    5000
}

impl Default for StorefrontSettings {
    fn default() -> Self {
        StorefrontSettings {
            name: default_store_name(),
            shipping_fee_cents: default_shipping_fee(),
        }
    }
}

/// Complete storefront configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub currency: CurrencySettings,

    #[serde(default)]
    pub notifications: NotificationSettings,

    #[serde(default)]
    pub storefront: StorefrontSettings,
}

impl StorefrontConfig {
    /// Loads configuration from file, then environment, then validates.
    ///
    /// A missing file is not an error; defaults are used.
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut config = StorefrontConfig::default();

        let path = config_path
            .or_else(|| std::env::var("AOIN_CONFIG").ok().map(PathBuf::from))
            .or_else(Self::default_config_path);

        if let Some(path) = path {
            if path.exists() {
                info!(?path, "Loading storefront config from file");
                config = Self::from_file(&path)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Like [`load`](Self::load), but falls back to defaults on any error.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load storefront config: {}. Using defaults.", e);
            Self::default()
        })
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        info!(?path, "Storefront config saved");
        Ok(())
    }

    /// Platform config location:
    /// - Linux: `~/.config/marketplace/storefront.toml`
    /// - macOS: `~/Library/Application Support/com.aoin.marketplace/storefront.toml`
    pub fn default_config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "aoin", "marketplace")
            .map(|dirs| dirs.config_dir().join("storefront.toml"))
    }

    /// Applies `AOIN_*` overrides. `lookup` is `std::env::var` in production.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(locale) = lookup("AOIN_LOCALE") {
            debug!(locale = %locale, "Overriding locale from environment");
            self.currency.locale = locale;
        }

        if let Some(code) = lookup("AOIN_CURRENCY") {
            debug!(code = %code, "Overriding currency from environment");
            self.currency.code = code;
        }

        if let Some(fee) = lookup("AOIN_SHIPPING_FEE") {
            match fee.parse::<i64>() {
                Ok(cents) => self.storefront.shipping_fee_cents = cents,
                Err(_) => warn!(value = %fee, "Ignoring non-numeric AOIN_SHIPPING_FEE"),
            }
        }

        if let Some(name) = lookup("AOIN_STORE_NAME") {
            self.storefront.name = name;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.currency_format()?;

        if self.storefront.shipping_fee_cents < 0 {
            return Err(ConfigError::Invalid(
                "shipping_fee_cents must not be negative".into(),
            ));
        }

        Ok(())
    }

    /// The formatter every displayed amount goes through.
    pub fn currency_format(&self) -> Result<CurrencyFormat, ConfigError> {
        Ok(CurrencyFormat::for_locale(
            &self.currency.locale,
            &self.currency.code,
        )?)
    }
}
