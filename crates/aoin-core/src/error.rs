//! # Error Types
//!
//! Domain-specific error types for aoin-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  aoin-core errors (this file)                                           │
//! │  ├── CoreError        - Cart rule violations                            │
//! │  └── ValidationError  - Input validation failures (empty promo, etc.)   │
//! │                                                                         │
//! │  storefront errors (app crate)                                          │
//! │  ├── ConfigError      - storefront.toml / env problems                  │
//! │  └── ApiError         - What the web shell sees (serialized)            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → web shell               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Core client-side rule violations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Cart has reached the maximum number of distinct items.
    #[error("Cart cannot have more than {max} items")]
    CartTooLarge { max: usize },

    /// Item quantity exceeds maximum allowed.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// Operation refers to a product that is not in the cart.
    #[error("Product {0} is not in the cart")]
    ItemNotInCart(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Input validation errors.
///
/// These occur before anything is delegated to a backend port.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    #[error("{field} must be positive")]
    MustBePositive { field: String },

    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in the allowed option list.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
