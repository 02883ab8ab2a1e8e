//! # Promo Codes
//!
//! A promo code is an opaque string typed by the shopper. The client only
//! guarantees it is trimmed and non-empty; whether it means anything is the
//! promo service's call.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::validation::validate_promo_code;

/// A trimmed, non-empty promo code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PromoCode(String);

impl PromoCode {
    /// Parses a draft from the promo input box.
    ///
    /// ```rust
    /// use aoin_core::promo::PromoCode;
    ///
    /// assert_eq!(PromoCode::parse(" SAVE10 ").unwrap().as_str(), "SAVE10");
    /// assert!(PromoCode::parse("  ").is_err());
    /// ```
    pub fn parse(draft: &str) -> Result<Self, ValidationError> {
        validate_promo_code(draft).map(|code| PromoCode(code.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PromoCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PromoCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
