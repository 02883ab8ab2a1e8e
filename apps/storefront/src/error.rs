//! # Storefront Error Types
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront                         │
//! │                                                                         │
//! │  Cart operation (CartScreen::add_item, ...)                             │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  CoreError::QuantityTooLarge ──────────┐                                │
//! │  ValidationError::Required ────────────┼──► ApiError { code, message }  │
//! │  RouteError::TooManyRedirects ─────────┤         │                      │
//! │  ConfigError (startup only) ───────────┘         │                      │
//! │                                                  ▼                      │
//! │                                    web shell shows `message`,           │
//! │                                    switches on `code`                   │
//! │                                                                         │
//! │  Promo application is NOT on this path: its failures stop at the        │
//! │  order summary widget and surface as a toast.                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use aoin_core::{CoreError, ValidationError};
use serde::Serialize;
use thiserror::Error;

use crate::router::RouteError;

/// Error returned from storefront operations the web shell invokes.
///
/// Serialized as:
/// ```json
/// { "code": "CART_ERROR", "message": "Cart cannot have more than 100 items" }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    NotFound,
    ValidationError,
    CartError,
    ConfigError,
    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn cart(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::CartError, message)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::CartTooLarge { .. } => ApiError::cart(err.to_string()),
            CoreError::QuantityTooLarge { .. } => ApiError::validation(err.to_string()),
            CoreError::ItemNotInCart(id) => ApiError::not_found("Cart item", &id),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<RouteError> for ApiError {
    fn from(err: RouteError) -> Self {
        match err {
            RouteError::InvalidPattern { .. } => ApiError::new(ErrorCode::Internal, err.to_string()),
            RouteError::TooManyRedirects { ref path, .. } => {
                tracing::warn!(%path, "redirect limit reached");
                ApiError::not_found("Page", path)
            }
        }
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        tracing::error!("Configuration error: {}", err);
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Failures while loading `storefront.toml` and environment overrides.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Invalid configuration: {0}")]
    Validation(#[from] ValidationError),
}
