//! # Currency Formatting
//!
//! Turns a [`Money`] amount into the string a shopper sees, e.g. `₹1,234.50`.
//!
//! ## Grouping Styles
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Western (en-US, en-GB)      1,234,567.89   groups of three             │
//! │  Indian  (en-IN, hi-IN)      12,34,567.89   three, then pairs           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The formatter always prints exactly two fractional digits and puts the
//! symbol in front of the digits. It is total: every `Money` value formats.
//! Negative amounts are outside what the cart screen displays; they render
//! with a leading `-` rather than failing.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::money::Money;

/// How the integer part of an amount is split into groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DigitGrouping {
    /// Groups of three: `1,234,567`.
    Western,
    /// Last three digits, then groups of two: `12,34,567`.
    #[default]
    Indian,
}

/// A fixed locale + currency pairing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyFormat {
    /// ISO 4217 code, e.g. `INR`.
    pub code: String,
    /// Symbol placed before the digits.
    pub symbol: String,
    /// BCP 47 locale tag the grouping was derived from.
    pub locale: String,
    pub grouping: DigitGrouping,
}

/// Locales we know how to group, with their grouping style.
const LOCALES: &[(&str, DigitGrouping)] = &[
    ("en-IN", DigitGrouping::Indian),
    ("hi-IN", DigitGrouping::Indian),
    ("en-US", DigitGrouping::Western),
    ("en-GB", DigitGrouping::Western),
];

/// Currency codes we know a symbol for.
const SYMBOLS: &[(&str, &str)] = &[("INR", "₹"), ("USD", "$"), ("GBP", "£"), ("EUR", "€")];

impl CurrencyFormat {
    /// Indian rupees formatted for `en-IN`. This is the storefront default.
    pub fn inr() -> Self {
        CurrencyFormat {
            code: "INR".to_string(),
            symbol: "₹".to_string(),
            locale: "en-IN".to_string(),
            grouping: DigitGrouping::Indian,
        }
    }

    /// US dollars formatted for `en-US`.
    pub fn usd() -> Self {
        CurrencyFormat {
            code: "USD".to_string(),
            symbol: "$".to_string(),
            locale: "en-US".to_string(),
            grouping: DigitGrouping::Western,
        }
    }

    /// Builds a format from a locale tag and a currency code.
    ///
    /// ```rust
    /// use aoin_core::currency::CurrencyFormat;
    /// use aoin_core::money::Money;
    ///
    /// let gbp = CurrencyFormat::for_locale("en-GB", "GBP").unwrap();
    /// assert_eq!(gbp.format(Money::from_cents(123_456_789)), "£1,234,567.89");
    /// assert!(CurrencyFormat::for_locale("xx-XX", "INR").is_err());
    /// ```
    pub fn for_locale(locale: &str, code: &str) -> Result<Self, ValidationError> {
        let grouping = LOCALES
            .iter()
            .find(|(tag, _)| tag.eq_ignore_ascii_case(locale))
            .map(|(_, g)| *g)
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "locale".to_string(),
                allowed: LOCALES.iter().map(|(tag, _)| tag.to_string()).collect(),
            })?;

        let code = code.to_ascii_uppercase();
        let symbol = SYMBOLS
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, s)| s.to_string())
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "currency".to_string(),
                allowed: SYMBOLS.iter().map(|(c, _)| c.to_string()).collect(),
            })?;

        Ok(CurrencyFormat {
            code,
            symbol,
            locale: locale.to_string(),
            grouping,
        })
    }

    /// Formats an amount with symbol, grouping and two fractional digits.
    ///
    /// ```rust
    /// use aoin_core::currency::CurrencyFormat;
    /// use aoin_core::money::Money;
    ///
    /// let inr = CurrencyFormat::inr();
    /// assert_eq!(inr.format(Money::from_cents(123_450)), "₹1,234.50");
    /// assert_eq!(inr.format(Money::from_cents(123_456_789)), "₹12,34,567.89");
    /// ```
    pub fn format(&self, amount: Money) -> String {
        let sign = if amount.is_negative() { "-" } else { "" };
        let magnitude = amount.cents().unsigned_abs();
        let whole = (magnitude / 100).to_string();
        let frac = magnitude % 100;

        format!(
            "{}{}{}.{:02}",
            sign,
            self.symbol,
            group_digits(&whole, self.grouping),
            frac
        )
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        CurrencyFormat::inr()
    }
}

/// Inserts thousands separators into a string of ASCII digits.
fn group_digits(digits: &str, grouping: DigitGrouping) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let head_group = match grouping {
        DigitGrouping::Western => 3,
        DigitGrouping::Indian => 2,
    };

    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(head_group);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    let mut out = groups.join(",");
    out.push(',');
    out.push_str(tail);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inr_formatting() {
        let inr = CurrencyFormat::inr();
        assert_eq!(inr.format(Money::zero()), "₹0.00");
        assert_eq!(inr.format(Money::from_cents(1)), "₹0.01");
        assert_eq!(inr.format(Money::from_cents(55_000)), "₹550.00");
        assert_eq!(inr.format(Money::from_cents(123_450)), "₹1,234.50");
        assert_eq!(inr.format(Money::from_cents(10_000_000)), "₹1,00,000.00");
        assert_eq!(inr.format(Money::from_cents(123_456_789)), "₹12,34,567.89");
    }

    #[test]
    fn test_usd_formatting() {
        let usd = CurrencyFormat::usd();
        assert_eq!(usd.format(Money::from_cents(999)), "$9.99");
        assert_eq!(usd.format(Money::from_cents(100_000_000)), "$1,000,000.00");
    }

    #[test]
    fn test_always_two_fraction_digits_and_symbol_prefix() {
        let inr = CurrencyFormat::inr();
        for cents in [0, 5, 10, 99, 100, 101, 1_000_050, 987_654_321] {
            let text = inr.format(Money::from_cents(cents));
            assert!(text.starts_with('₹'), "{text}");
            let (_, frac) = text.rsplit_once('.').unwrap();
            assert_eq!(frac.len(), 2, "{text}");
        }
    }

    #[test]
    fn test_negative_does_not_panic() {
        assert_eq!(CurrencyFormat::inr().format(Money::from_cents(-550)), "-₹5.50");
    }

    #[test]
    fn test_for_locale() {
        let fmt = CurrencyFormat::for_locale("en-IN", "inr").unwrap();
        assert_eq!(fmt, CurrencyFormat::inr());

        let usd_in_india = CurrencyFormat::for_locale("en-IN", "USD").unwrap();
        assert_eq!(usd_in_india.format(Money::from_cents(10_000_000)), "$1,00,000.00");

        assert!(CurrencyFormat::for_locale("en-IN", "XYZ").is_err());
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits("1", DigitGrouping::Indian), "1");
        assert_eq!(group_digits("1234", DigitGrouping::Indian), "1,234");
        assert_eq!(group_digits("123456", DigitGrouping::Indian), "1,23,456");
        assert_eq!(group_digits("1234567", DigitGrouping::Western), "1,234,567");
    }
}
