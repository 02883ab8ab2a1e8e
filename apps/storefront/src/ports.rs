//! # Ports
//!
//! The seams between client logic and everything it delegates.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  OrderSummaryWidget                                                     │
//! │     │ apply_promo(code).await ──► PromoPort     (backend promo API)     │
//! │     │ checkout()              ──► CheckoutPort  (host navigation)       │
//! │     │ notify(..)              ──► Notifier      (toast layer)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Contracts
//! - `PromoPort::apply_promo` settles exactly once per call. `Ok(())` means
//!   the code was accepted, `Err` means it was rejected for any reason
//!   (unknown code, network, timeout). Timeouts are the port's business.
//! - `CheckoutPort::checkout` cannot fail from the caller's point of view;
//!   an implementation that can fail must report it itself.
//! - `Notifier::notify` must not block.

use std::collections::HashMap;

use aoin_core::{PromoCode, MAX_PROMO_CODE_LEN};
use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info};

use crate::notify::Notification;
use crate::state::CartHandle;

/// Why a promo code was not applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("promo code rejected: {reason}")]
pub struct PromoRejection {
    pub reason: String,
}

impl PromoRejection {
    pub fn new(reason: impl Into<String>) -> Self {
        PromoRejection {
            reason: reason.into(),
        }
    }
}

/// Applies a promo code to the shopper's order.
#[async_trait]
pub trait PromoPort: Send + Sync {
    async fn apply_promo(&self, code: &PromoCode) -> Result<(), PromoRejection>;
}

/// Starts checkout for the current order.
pub trait CheckoutPort: Send + Sync {
    fn checkout(&self);
}

impl<F> CheckoutPort for F
where
    F: Fn() + Send + Sync,
{
    fn checkout(&self) {
        self()
    }
}

/// Non-blocking user-facing notifications.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// A promo service that runs in-process against a fixed code table.
///
/// Accepted codes grant a percentage of the subtotal as a discount on the
/// shared cart; the cart recomputes it as lines change. Codes longer than
/// [`MAX_PROMO_CODE_LEN`] are rejected here, not by the widget. Used by the
/// CLI demo and for offline development.
#[derive(Debug, Clone)]
pub struct LocalPromoService {
    cart: CartHandle,
    /// Upper-cased code -> discount in basis points.
    rates: HashMap<String, u32>,
}

impl LocalPromoService {
    pub fn new(cart: CartHandle) -> Self {
        LocalPromoService {
            cart,
            rates: HashMap::new(),
        }
    }

    /// Registers a code worth `bps` basis points off the subtotal.
    pub fn with_code(mut self, code: &str, bps: u32) -> Self {
        let code = code.trim().to_ascii_uppercase();
        debug_assert!(!code.is_empty() && code.len() <= MAX_PROMO_CODE_LEN);
        self.rates.insert(code, bps.min(10_000));
        self
    }
}

#[async_trait]
impl PromoPort for LocalPromoService {
    async fn apply_promo(&self, code: &PromoCode) -> Result<(), PromoRejection> {
        if code.as_str().chars().count() > MAX_PROMO_CODE_LEN {
            return Err(PromoRejection::new(format!(
                "promo code longer than {MAX_PROMO_CODE_LEN} characters"
            )));
        }

        let key = code.as_str().to_ascii_uppercase();
        let bps = *self
            .rates
            .get(&key)
            .ok_or_else(|| PromoRejection::new(format!("unknown promo code '{}'", code)))?;

        let discount = self.cart.with_cart_mut(|cart| {
            if cart.is_empty() {
                return Err(PromoRejection::new("cart is empty"));
            }
            cart.apply_promo(code.clone(), bps);
            Ok(cart.discount())
        })?;

        info!(code = %code, discount = %discount, "local promo accepted");
        Ok(())
    }
}

/// A checkout port that only records the request in the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingCheckout;

impl CheckoutPort for LoggingCheckout {
    fn checkout(&self) {
        debug!("checkout requested");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::CatalogItem;
    use aoin_core::Money;

    fn cart_with(price_cents: i64) -> CartHandle {
        let cart = CartHandle::new();
        cart.with_cart_mut(|c| {
            c.add_item(
                &CatalogItem {
                    id: "p1".to_string(),
                    name: "Dupatta".to_string(),
                    price: Money::from_cents(price_cents),
                },
                1,
            )
        })
        .unwrap();
        cart
    }

    #[tokio::test]
    async fn test_local_promo_accepts_known_code_case_insensitively() {
        let cart = cart_with(50_000);
        let promo = LocalPromoService::new(cart.clone()).with_code("SAVE10", 1000);

        promo
            .apply_promo(&PromoCode::parse("save10").unwrap())
            .await
            .unwrap();

        assert_eq!(cart.with_cart(|c| c.discount().cents()), 5_000);
    }

    #[tokio::test]
    async fn test_local_promo_rejects_unknown_code() {
        let cart = cart_with(50_000);
        let promo = LocalPromoService::new(cart.clone()).with_code("SAVE10", 1000);

        let err = promo
            .apply_promo(&PromoCode::parse("BAD").unwrap())
            .await
            .unwrap_err();
        assert_eq!(err.reason, "unknown promo code 'BAD'");
        assert!(cart.with_cart(|c| c.discount().is_zero()));
    }

    #[tokio::test]
    async fn test_local_promo_rejects_over_long_code() {
        let cart = cart_with(50_000);
        let promo = LocalPromoService::new(cart.clone()).with_code("SAVE10", 1000);

        let err = promo
            .apply_promo(&PromoCode::parse(&"X".repeat(65)).unwrap())
            .await
            .unwrap_err();
        assert_eq!(err.reason, "promo code longer than 64 characters");
        assert!(cart.with_cart(|c| c.applied_promo.is_none()));
    }

    #[tokio::test]
    async fn test_local_promo_rejects_on_empty_cart() {
        let promo = LocalPromoService::new(CartHandle::new()).with_code("SAVE10", 1000);
        assert!(promo
            .apply_promo(&PromoCode::parse("SAVE10").unwrap())
            .await
            .is_err());
    }

    #[test]
    fn test_closure_is_a_checkout_port() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let port = move || {
            counter.fetch_add(1, Ordering::SeqCst);
        };
        port.checkout();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
