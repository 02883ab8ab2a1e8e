//! # Validation Module
//!
//! Input validation for values the shopper types or the shell passes in.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Layer 1: Web shell        - input masks, required attributes           │
//! │  Layer 2: THIS MODULE      - rules checked before any port is called    │
//! │  Layer 3: Backend API      - authoritative (out of scope here)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::{MAX_CART_ITEMS, MAX_ITEM_QUANTITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a promo code draft and returns the trimmed code.
///
/// ## Rules
/// - Leading/trailing whitespace is ignored
/// - Must not be empty after trimming
///
/// Anything else is forwarded; the promo service decides what it accepts.
///
/// ```rust
/// use aoin_core::validation::validate_promo_code;
///
/// assert_eq!(validate_promo_code(" SAVE10 ").unwrap(), "SAVE10");
/// assert!(validate_promo_code("   ").is_err());
/// ```
pub fn validate_promo_code(draft: &str) -> ValidationResult<&str> {
    let code = draft.trim();

    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "promo code".to_string(),
        });
    }

    Ok(code)
}

/// Validates a product identifier as passed by the catalog.
pub fn validate_product_id(id: &str) -> ValidationResult<()> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "product id".to_string(),
        });
    }

    if !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
        return Err(ValidationError::InvalidFormat {
            field: "product id".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates a quantity value (1..=999).
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a price in minor units. Zero is allowed (free items).
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates that one more distinct item still fits in the cart.
pub fn validate_cart_size(current_items: usize) -> ValidationResult<()> {
    if current_items >= MAX_CART_ITEMS {
        return Err(ValidationError::OutOfRange {
            field: "cart items".to_string(),
            min: 0,
            max: MAX_CART_ITEMS as i64,
        });
    }

    Ok(())
}

/// Checks `value` against a fixed option list.
pub fn validate_option(field: &str, value: &str, allowed: &[&str]) -> ValidationResult<()> {
    if allowed.contains(&value) {
        return Ok(());
    }

    Err(ValidationError::NotAllowed {
        field: field.to_string(),
        allowed: allowed.iter().map(|s| s.to_string()).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_promo_code() {
        assert_eq!(validate_promo_code("SAVE10").unwrap(), "SAVE10");
        assert_eq!(validate_promo_code("\t save10\n").unwrap(), "save10");

        assert!(validate_promo_code("").is_err());
        assert!(validate_promo_code("   ").is_err());
        // Length is the promo service's concern.
        assert_eq!(validate_promo_code(&"X".repeat(65)).unwrap().len(), 65);
    }

    #[test]
    fn test_validate_product_id() {
        assert!(validate_product_id("prod-001").is_ok());
        assert!(validate_product_id("").is_err());
        assert!(validate_product_id("has space").is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(1000).is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(1099).is_ok());
        assert!(validate_price_cents(-100).is_err());
    }

    #[test]
    fn test_validate_cart_size() {
        assert!(validate_cart_size(0).is_ok());
        assert!(validate_cart_size(99).is_ok());
        assert!(validate_cart_size(100).is_err());
    }

    #[test]
    fn test_validate_option() {
        let countries = ["us", "uk", "ca"];
        assert!(validate_option("country", "uk", &countries).is_ok());

        let err = validate_option("country", "fr", &countries).unwrap_err();
        assert!(matches!(err, ValidationError::NotAllowed { .. }));
    }
}
