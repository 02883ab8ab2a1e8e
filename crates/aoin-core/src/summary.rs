//! # Order Summary
//!
//! The (subtotal, shipping, total) triple shown in the cart sidebar.
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │  Your Cart                           │
//! │  Sub Total                ₹500.00    │
//! │  Fee Shipping          ▾  ₹50.00     │
//! │  Apply Promo Code      ▾             │
//! │  Total                    ₹550.00    │
//! │  [      Payment Process      ]       │
//! └──────────────────────────────────────┘
//! ```
//!
//! The widget that shows this never recomputes it. Whoever builds the
//! summary is responsible for `total` matching `subtotal + shipping - discount`.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub subtotal: Money,
    pub shipping: Money,
    pub total: Money,
}

impl OrderSummary {
    /// Wraps caller-computed values as-is.
    pub const fn new(subtotal: Money, shipping: Money, total: Money) -> Self {
        OrderSummary {
            subtotal,
            shipping,
            total,
        }
    }

    /// Derives the total from its parts, flooring at zero when the discount
    /// is larger than the order.
    ///
    /// ```rust
    /// use aoin_core::{Money, OrderSummary};
    ///
    /// let s = OrderSummary::compute(
    ///     Money::from_cents(50_000),
    ///     Money::from_cents(5_000),
    ///     Money::zero(),
    /// );
    /// assert_eq!(s.total.cents(), 55_000);
    /// ```
    pub fn compute(subtotal: Money, shipping: Money, discount: Money) -> Self {
        let total = (subtotal + shipping).saturating_sub_floor_zero(discount);
        OrderSummary::new(subtotal, shipping, total)
    }

    /// A zero-value order must not be checked out.
    pub const fn is_checkout_eligible(&self) -> bool {
        !self.total.is_zero()
    }
}
