//! # aoin-core: Pure Client Logic for the Aoin Marketplace
//!
//! This crate holds the parts of the marketplace client that are plain
//! computation: money, currency formatting, promo code parsing and the
//! order summary numbers shown on the cart screen.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Aoin Marketplace Client                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Web shell (renders views)                    │   │
//! │  │    Storefront ──► Cart ──► Payment ──► Orders                   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ view models (serde / ts-rs)            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 apps/storefront (aoin-storefront)               │   │
//! │  │    router, order summary widget, state handles, ports           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                ★ aoin-core (THIS CRATE) ★                       │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │   money   │  │ currency  │  │   promo   │  │  summary  │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`currency`] - Locale-aware currency formatting
//! - [`promo`] - Promo code parsing
//! - [`summary`] - Subtotal / shipping / total triple
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use aoin_core::currency::CurrencyFormat;
//! use aoin_core::money::Money;
//!
//! let inr = CurrencyFormat::inr();
//! assert_eq!(inr.format(Money::from_cents(123_450)), "₹1,234.50");
//! ```

pub mod currency;
pub mod error;
pub mod money;
pub mod promo;
pub mod summary;
pub mod validation;

pub use currency::{CurrencyFormat, DigitGrouping};
pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use promo::PromoCode;
pub use summary::OrderSummary;

/// Maximum distinct items allowed in a single cart.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single item in cart.
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Longest promo code the in-process promo service accepts.
pub const MAX_PROMO_CODE_LEN: usize = 64;
