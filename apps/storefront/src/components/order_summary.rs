//! # Order Summary Widget
//!
//! The cart sidebar: subtotal, shipping, promo entry, total and the
//! checkout button. The widget owns only UI state; the numbers come from
//! the host and every action is delegated through a port.
//!
//! ## State (independent flags, not one joint automaton)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  shipping panel   collapsed ⇄ expanded        toggle_shipping()         │
//! │  promo panel      collapsed ⇄ expanded        toggle_promo()            │
//! │  promo apply      idle ──apply_promo()──► applying                      │
//! │                     ▲                        │                          │
//! │                     └──── settlement ────────┘  (success OR failure)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Apply Flow
//! ```text
//! apply_promo()
//!   ├── already applying / loading ─────────► Busy        (button disabled)
//!   ├── draft blank ─► toast "Please enter…" ► Invalid     (port not called)
//!   └── applying = true
//!         │ PromoPort::apply_promo(trimmed).await
//!         ▼
//!       applying = false                     (always, via InFlight guard)
//!         ├── unmounted meanwhile ──────────► Discarded
//!         ├── Ok  ─► draft cleared ─────────► Applied
//!         └── Err ─► toast "Failed…" ───────► Rejected    (draft kept)
//! ```
//!
//! The state lives behind `Arc<Mutex<_>>` so panels stay responsive while an
//! apply is awaiting. The lock is never held across an await.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use aoin_core::validation::validate_option;
use aoin_core::{CurrencyFormat, OrderSummary, PromoCode, ValidationError};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use ts_rs::TS;

use crate::notify::Notification;
use crate::ports::{CheckoutPort, Notifier, PromoPort, PromoRejection};

pub const EMPTY_PROMO_MESSAGE: &str = "Please enter a promo code";
pub const PROMO_FAILED_MESSAGE: &str = "Failed to apply promo code";

/// `(value, label)` options for the shipping destination selects.
///
/// The empty value is each select's placeholder and means "nothing chosen".
/// For country the placeholder is labelled "US", so an unset country shows US.
pub const COUNTRY_OPTIONS: &[(&str, &str)] = &[("", "US"), ("uk", "UK"), ("ca", "Canada")];
pub const CITY_OPTIONS: &[(&str, &str)] =
    &[("", "Select City"), ("ny", "New York"), ("la", "Los Angeles")];
pub const DISTRICT_OPTIONS: &[(&str, &str)] =
    &[("", "Select District"), ("manhattan", "Manhattan"), ("brooklyn", "Brooklyn")];
pub const WARD_OPTIONS: &[(&str, &str)] = &[("", "Select Ward"), ("ward1", "Ward 1"), ("ward2", "Ward 2")];

/// Inputs supplied by the hosting screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrderSummaryProps {
    pub summary: OrderSummary,
    /// Host-level busy flag (e.g. checkout in progress).
    pub loading: bool,
}

impl OrderSummaryProps {
    pub fn new(summary: OrderSummary) -> Self {
        OrderSummaryProps {
            summary,
            loading: false,
        }
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }
}

/// Draft selections in the shipping panel. `None` is the placeholder
/// option. Selecting never changes totals.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ShippingDestination {
    pub country: Option<String>,
    pub city: Option<String>,
    pub district: Option<String>,
    pub ward: Option<String>,
}

#[derive(Debug, Clone, Default)]
struct WidgetState {
    props: OrderSummaryProps,
    shipping_open: bool,
    promo_open: bool,
    promo_draft: String,
    applying_promo: bool,
    destination: ShippingDestination,
    unmounted: bool,
}

/// Result of one press of the "Apply" button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromoOutcome {
    /// The promo service accepted the code; the draft was cleared.
    Applied(PromoCode),
    /// The promo service rejected the code; the draft was kept.
    Rejected(PromoRejection),
    /// The draft was blank; nothing was sent.
    Invalid(ValidationError),
    /// The button was disabled (apply in flight or host loading).
    Busy,
    /// The widget was unmounted before the call settled.
    Discarded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutOutcome {
    Started,
    Disabled,
}

/// Serializable snapshot the shell renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummaryView {
    pub title: String,
    pub subtotal: String,
    pub shipping: String,
    pub total: String,
    pub shipping_open: bool,
    pub promo_open: bool,
    pub promo_draft: String,
    pub promo_input_enabled: bool,
    pub apply_label: String,
    pub apply_enabled: bool,
    pub destination: ShippingDestination,
    pub update_shipping_enabled: bool,
    pub checkout_label: String,
    pub checkout_enabled: bool,
}

/// Clears `applying_promo` when dropped unless settled first.
///
/// Covers the apply future being dropped mid-await.
struct InFlight<'a> {
    state: &'a Mutex<WidgetState>,
    armed: bool,
}

impl InFlight<'_> {
    fn settle<R>(mut self, f: impl FnOnce(&mut WidgetState) -> R) -> R {
        self.armed = false;
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.applying_promo = false;
        f(&mut state)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.armed {
            debug!("promo apply dropped before settlement");
            self.state
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .applying_promo = false;
        }
    }
}

/// The order summary widget. Clones share the same instance state.
#[derive(Clone)]
pub struct OrderSummaryWidget {
    state: Arc<Mutex<WidgetState>>,
    currency: CurrencyFormat,
    promo: Arc<dyn PromoPort>,
    checkout: Arc<dyn CheckoutPort>,
    notifier: Arc<dyn Notifier>,
}

impl std::fmt::Debug for OrderSummaryWidget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderSummaryWidget")
            .field("state", &self.state)
            .field("currency", &self.currency.code)
            .finish_non_exhaustive()
    }
}

impl OrderSummaryWidget {
    /// Mounts a widget with both panels collapsed and an empty draft.
    pub fn new(
        props: OrderSummaryProps,
        currency: CurrencyFormat,
        promo: Arc<dyn PromoPort>,
        checkout: Arc<dyn CheckoutPort>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        OrderSummaryWidget {
            state: Arc::new(Mutex::new(WidgetState {
                props,
                ..WidgetState::default()
            })),
            currency,
            promo,
            checkout,
            notifier,
        }
    }

    fn lock(&self) -> MutexGuard<'_, WidgetState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // -------------------------------------------------------------------------
    // Props
    // -------------------------------------------------------------------------

    /// Replaces the host-supplied props. Local UI state is untouched.
    pub fn set_props(&self, props: OrderSummaryProps) {
        self.lock().props = props;
    }

    pub fn props(&self) -> OrderSummaryProps {
        self.lock().props
    }

    // -------------------------------------------------------------------------
    // Panels
    // -------------------------------------------------------------------------

    pub fn toggle_shipping(&self) -> bool {
        let mut state = self.lock();
        state.shipping_open = !state.shipping_open;
        state.shipping_open
    }

    pub fn toggle_promo(&self) -> bool {
        let mut state = self.lock();
        state.promo_open = !state.promo_open;
        state.promo_open
    }

    pub fn is_shipping_open(&self) -> bool {
        self.lock().shipping_open
    }

    pub fn is_promo_open(&self) -> bool {
        self.lock().promo_open
    }

    // -------------------------------------------------------------------------
    // Shipping destination
    // -------------------------------------------------------------------------

    pub fn select_country(&self, value: &str) -> Result<(), ValidationError> {
        self.select("country", value, COUNTRY_OPTIONS, |d| &mut d.country)
    }

    pub fn select_city(&self, value: &str) -> Result<(), ValidationError> {
        self.select("city", value, CITY_OPTIONS, |d| &mut d.city)
    }

    pub fn select_district(&self, value: &str) -> Result<(), ValidationError> {
        self.select("district", value, DISTRICT_OPTIONS, |d| &mut d.district)
    }

    pub fn select_ward(&self, value: &str) -> Result<(), ValidationError> {
        self.select("ward", value, WARD_OPTIONS, |d| &mut d.ward)
    }

    fn select(
        &self,
        field: &str,
        value: &str,
        options: &[(&str, &str)],
        slot: impl FnOnce(&mut ShippingDestination) -> &mut Option<String>,
    ) -> Result<(), ValidationError> {
        let values: Vec<&str> = options.iter().map(|(v, _)| *v).collect();
        validate_option(field, value, &values)?;
        *slot(&mut self.lock().destination) = (!value.is_empty()).then(|| value.to_string());
        Ok(())
    }

    pub fn destination(&self) -> ShippingDestination {
        self.lock().destination.clone()
    }

    /// Mirrors the shipping panel's "Update" button.
    pub fn can_update_shipping(&self) -> bool {
        !self.lock().props.loading
    }

    // -------------------------------------------------------------------------
    // Promo
    // -------------------------------------------------------------------------

    /// Edits the promo draft. Ignored (returns `false`) while applying,
    /// matching the disabled input.
    pub fn set_promo_draft(&self, text: impl Into<String>) -> bool {
        let mut state = self.lock();
        if state.applying_promo {
            return false;
        }
        state.promo_draft = text.into();
        true
    }

    pub fn promo_draft(&self) -> String {
        self.lock().promo_draft.clone()
    }

    pub fn is_applying_promo(&self) -> bool {
        self.lock().applying_promo
    }

    pub fn can_apply_promo(&self) -> bool {
        let state = self.lock();
        !state.applying_promo && !state.props.loading
    }

    /// Applies the current draft through the promo port.
    ///
    /// Never returns an error: every failure is reported to the shopper
    /// through the notifier and recovered here.
    pub async fn apply_promo(&self) -> PromoOutcome {
        let code = {
            let mut state = self.lock();
            if state.applying_promo || state.props.loading {
                debug!(
                    applying = state.applying_promo,
                    loading = state.props.loading,
                    "apply ignored, button disabled"
                );
                return PromoOutcome::Busy;
            }

            let parsed = PromoCode::parse(&state.promo_draft);
            match parsed {
                Ok(code) => {
                    state.applying_promo = true;
                    code
                }
                Err(err) => {
                    drop(state);
                    debug!(%err, "promo draft rejected before delegation");
                    self.notifier.notify(Notification::error(EMPTY_PROMO_MESSAGE));
                    return PromoOutcome::Invalid(err);
                }
            }
        };

        let in_flight = InFlight {
            state: &self.state,
            armed: true,
        };

        info!(code = %code, "applying promo code");
        let result = self.promo.apply_promo(&code).await;

        let unmounted = in_flight.settle(|state| {
            if !state.unmounted && result.is_ok() {
                state.promo_draft.clear();
            }
            state.unmounted
        });

        if unmounted {
            debug!(code = %code, "promo settled after unmount, result discarded");
            return PromoOutcome::Discarded;
        }

        match result {
            Ok(()) => {
                info!(code = %code, "promo code applied");
                PromoOutcome::Applied(code)
            }
            Err(rejection) => {
                warn!(code = %code, reason = %rejection.reason, "promo code rejected");
                self.notifier.notify(Notification::error(PROMO_FAILED_MESSAGE));
                PromoOutcome::Rejected(rejection)
            }
        }
    }

    // -------------------------------------------------------------------------
    // Checkout
    // -------------------------------------------------------------------------

    /// Disabled while the host is loading or the order total is zero.
    pub fn can_checkout(&self) -> bool {
        let props = self.lock().props;
        !props.loading && props.summary.is_checkout_eligible()
    }

    pub fn checkout(&self) -> CheckoutOutcome {
        if !self.can_checkout() {
            debug!("checkout ignored, button disabled");
            return CheckoutOutcome::Disabled;
        }

        info!("checkout started");
        self.checkout.checkout();
        CheckoutOutcome::Started
    }

    // -------------------------------------------------------------------------
    // Lifecycle & rendering
    // -------------------------------------------------------------------------

    /// Marks the widget as no longer displayed. An in-flight apply still
    /// runs to completion, but its result is discarded.
    pub fn unmount(&self) {
        self.lock().unmounted = true;
    }

    pub fn is_mounted(&self) -> bool {
        !self.lock().unmounted
    }

    pub fn render(&self) -> OrderSummaryView {
        let state = self.lock().clone();
        let summary = state.props.summary;
        let loading = state.props.loading;

        OrderSummaryView {
            title: "Your Cart".to_string(),
            subtotal: self.currency.format(summary.subtotal),
            shipping: self.currency.format(summary.shipping),
            total: self.currency.format(summary.total),
            shipping_open: state.shipping_open,
            promo_open: state.promo_open,
            promo_draft: state.promo_draft,
            promo_input_enabled: !state.applying_promo,
            apply_label: if state.applying_promo { "Applying..." } else { "Apply" }.to_string(),
            apply_enabled: !state.applying_promo && !loading,
            destination: state.destination,
            update_shipping_enabled: !loading,
            checkout_label: if loading { "Processing..." } else { "Payment Process" }.to_string(),
            checkout_enabled: !loading && summary.is_checkout_eligible(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::{NotificationLevel, ToastQueue};
    use aoin_core::Money;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio::sync::Notify;

    /// Promo stub: records calls, optionally waits on a gate, then settles.
    struct StubPromo {
        calls: Mutex<Vec<String>>,
        reject: bool,
        entered: Notify,
        gate: Option<Notify>,
    }

    impl StubPromo {
        fn resolving() -> Arc<Self> {
            Arc::new(Self::build(false, false))
        }

        fn rejecting() -> Arc<Self> {
            Arc::new(Self::build(true, false))
        }

        fn gated(reject: bool) -> Arc<Self> {
            Arc::new(Self::build(reject, true))
        }

        fn build(reject: bool, gated: bool) -> Self {
            StubPromo {
                calls: Mutex::new(Vec::new()),
                reject,
                entered: Notify::new(),
                gate: gated.then(Notify::new),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn release(&self) {
            if let Some(gate) = &self.gate {
                gate.notify_one();
            }
        }
    }

    #[async_trait]
    impl PromoPort for StubPromo {
        async fn apply_promo(&self, code: &PromoCode) -> Result<(), PromoRejection> {
            self.calls.lock().unwrap().push(code.to_string());
            self.entered.notify_one();
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            if self.reject {
                Err(PromoRejection::new("unknown code"))
            } else {
                Ok(())
            }
        }
    }

    #[derive(Default)]
    struct CountingCheckout(AtomicUsize);

    impl CheckoutPort for CountingCheckout {
        fn checkout(&self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn summary(subtotal: i64, shipping: i64, total: i64) -> OrderSummary {
        OrderSummary::new(
            Money::from_major_minor(subtotal, 0),
            Money::from_major_minor(shipping, 0),
            Money::from_major_minor(total, 0),
        )
    }

    struct Harness {
        widget: OrderSummaryWidget,
        promo: Arc<StubPromo>,
        checkout: Arc<CountingCheckout>,
        toasts: ToastQueue,
    }

    fn harness(props: OrderSummaryProps, promo: Arc<StubPromo>) -> Harness {
        let checkout = Arc::new(CountingCheckout::default());
        let toasts = ToastQueue::default();
        let widget = OrderSummaryWidget::new(
            props,
            CurrencyFormat::inr(),
            promo.clone(),
            checkout.clone(),
            Arc::new(toasts.clone()),
        );
        Harness {
            widget,
            promo,
            checkout,
            toasts,
        }
    }

    fn default_harness(promo: Arc<StubPromo>) -> Harness {
        harness(OrderSummaryProps::new(summary(500, 50, 550)), promo)
    }

    #[test]
    fn test_initial_state() {
        let h = default_harness(StubPromo::resolving());
        assert!(!h.widget.is_shipping_open());
        assert!(!h.widget.is_promo_open());
        assert_eq!(h.widget.promo_draft(), "");
        assert!(!h.widget.is_applying_promo());
        assert!(h.widget.is_mounted());
    }

    #[test]
    fn test_toggle_shipping_twice_restores_state() {
        let h = default_harness(StubPromo::resolving());
        assert!(h.widget.toggle_shipping());
        assert!(!h.widget.toggle_shipping());
        assert!(!h.widget.is_shipping_open());
        // Independent flags
        assert!(h.widget.toggle_promo());
        assert!(!h.widget.is_shipping_open());
    }

    #[tokio::test]
    async fn test_blank_draft_never_reaches_port() {
        let h = default_harness(StubPromo::resolving());

        for draft in ["", "   ", "\t\n"] {
            h.widget.set_promo_draft(draft);
            let outcome = h.widget.apply_promo().await;
            assert!(matches!(outcome, PromoOutcome::Invalid(_)));
        }

        assert!(h.promo.calls().is_empty());
        assert!(!h.widget.is_applying_promo());
        let toasts = h.toasts.snapshot();
        assert_eq!(toasts.len(), 3);
        assert!(toasts
            .iter()
            .all(|t| t.level == NotificationLevel::Error && t.message == EMPTY_PROMO_MESSAGE));
    }

    #[tokio::test]
    async fn test_successful_apply_clears_draft() {
        let h = default_harness(StubPromo::resolving());
        h.widget.set_promo_draft(" SAVE10 ");

        let outcome = h.widget.apply_promo().await;

        assert_eq!(outcome, PromoOutcome::Applied(PromoCode::parse("SAVE10").unwrap()));
        assert_eq!(h.promo.calls(), vec!["SAVE10".to_string()]);
        assert_eq!(h.widget.promo_draft(), "");
        assert!(!h.widget.is_applying_promo());
        assert!(h.toasts.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_long_code_is_forwarded_to_port() {
        let h = default_harness(StubPromo::resolving());
        let long_code = "X".repeat(65);
        h.widget.set_promo_draft(format!("  {long_code}  "));

        let outcome = h.widget.apply_promo().await;

        assert!(matches!(outcome, PromoOutcome::Applied(_)));
        assert_eq!(h.promo.calls(), vec![long_code]);
        assert!(h.toasts.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_rejected_apply_keeps_draft_and_notifies() {
        let h = default_harness(StubPromo::rejecting());
        h.widget.set_promo_draft("BAD");

        let outcome = h.widget.apply_promo().await;

        assert!(matches!(outcome, PromoOutcome::Rejected(_)));
        assert_eq!(h.widget.promo_draft(), "BAD");
        assert!(!h.widget.is_applying_promo());
        let toasts = h.toasts.snapshot();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].message, PROMO_FAILED_MESSAGE);
    }

    #[tokio::test]
    async fn test_retry_after_rejection_calls_port_again() {
        let h = default_harness(StubPromo::rejecting());
        h.widget.set_promo_draft("BAD");

        h.widget.apply_promo().await;
        h.widget.apply_promo().await;

        assert_eq!(h.promo.calls(), vec!["BAD".to_string(), "BAD".to_string()]);
    }

    #[tokio::test]
    async fn test_apply_is_disabled_until_settlement() {
        let h = default_harness(StubPromo::gated(false));
        h.widget.set_promo_draft("SAVE10");

        let widget = h.widget.clone();
        let pending = tokio::spawn(async move { widget.apply_promo().await });
        h.promo.entered.notified().await;

        assert!(h.widget.is_applying_promo());
        assert!(!h.widget.can_apply_promo());
        assert_eq!(h.widget.render().apply_label, "Applying...");
        assert_eq!(h.widget.apply_promo().await, PromoOutcome::Busy);
        assert!(!h.widget.set_promo_draft("OTHER"));

        // Panels stay responsive while the call is pending.
        assert!(h.widget.toggle_shipping());

        h.promo.release();
        let outcome = pending.await.unwrap();

        assert!(matches!(outcome, PromoOutcome::Applied(_)));
        assert_eq!(h.promo.calls().len(), 1);
        assert!(!h.widget.is_applying_promo());
        assert_eq!(h.widget.render().apply_label, "Apply");
    }

    #[tokio::test]
    async fn test_gated_rejection_clears_flag() {
        let h = default_harness(StubPromo::gated(true));
        h.widget.set_promo_draft("BAD");

        let widget = h.widget.clone();
        let pending = tokio::spawn(async move { widget.apply_promo().await });
        h.promo.entered.notified().await;
        assert!(h.widget.is_applying_promo());

        h.promo.release();
        assert!(matches!(pending.await.unwrap(), PromoOutcome::Rejected(_)));
        assert!(!h.widget.is_applying_promo());
        assert_eq!(h.widget.promo_draft(), "BAD");
    }

    #[tokio::test]
    async fn test_unmount_during_apply_discards_result() {
        let h = default_harness(StubPromo::gated(true));
        h.widget.set_promo_draft("BAD");

        let widget = h.widget.clone();
        let pending = tokio::spawn(async move { widget.apply_promo().await });
        h.promo.entered.notified().await;

        h.widget.unmount();
        h.promo.release();

        assert_eq!(pending.await.unwrap(), PromoOutcome::Discarded);
        assert!(!h.widget.is_applying_promo());
        assert!(h.toasts.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_dropped_apply_future_clears_flag() {
        let h = default_harness(StubPromo::gated(false));
        h.widget.set_promo_draft("SAVE10");

        let timed_out =
            tokio::time::timeout(Duration::from_millis(20), h.widget.apply_promo()).await;

        assert!(timed_out.is_err());
        assert!(!h.widget.is_applying_promo());
    }

    #[tokio::test]
    async fn test_apply_disabled_while_loading() {
        let h = harness(
            OrderSummaryProps::new(summary(500, 50, 550)).loading(true),
            StubPromo::resolving(),
        );
        h.widget.set_promo_draft("SAVE10");

        assert_eq!(h.widget.apply_promo().await, PromoOutcome::Busy);
        assert!(h.promo.calls().is_empty());
    }

    #[test]
    fn test_checkout_enabled_for_non_zero_total() {
        let h = default_harness(StubPromo::resolving());

        assert!(h.widget.can_checkout());
        assert_eq!(h.widget.checkout(), CheckoutOutcome::Started);
        assert_eq!(h.checkout.0.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_checkout_disabled_for_zero_total_regardless_of_loading() {
        for loading in [false, true] {
            let h = harness(
                OrderSummaryProps::new(summary(0, 0, 0)).loading(loading),
                StubPromo::resolving(),
            );
            assert!(!h.widget.can_checkout());
            assert_eq!(h.widget.checkout(), CheckoutOutcome::Disabled);
            assert_eq!(h.checkout.0.load(Ordering::SeqCst), 0);
        }
    }

    #[test]
    fn test_checkout_disabled_while_loading() {
        let h = harness(
            OrderSummaryProps::new(summary(500, 50, 550)).loading(true),
            StubPromo::resolving(),
        );
        assert_eq!(h.widget.checkout(), CheckoutOutcome::Disabled);

        h.widget.set_props(OrderSummaryProps::new(summary(500, 50, 550)));
        assert_eq!(h.widget.checkout(), CheckoutOutcome::Started);
        assert_eq!(h.checkout.0.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_destination_selection() {
        let h = default_harness(StubPromo::resolving());
        assert_eq!(h.widget.destination(), ShippingDestination::default());
        assert!(h.widget.select_country("us").is_err());

        h.widget.select_country("uk").unwrap();
        h.widget.select_ward("ward2").unwrap();
        assert!(h.widget.select_city("paris").is_err());

        let destination = h.widget.destination();
        assert_eq!(destination.country.as_deref(), Some("uk"));
        assert_eq!(destination.city, None);
        assert_eq!(destination.ward.as_deref(), Some("ward2"));
        // Totals are untouched by selection.
        assert_eq!(h.widget.props().summary, summary(500, 50, 550));

        // Back to the placeholder.
        h.widget.select_country("").unwrap();
        assert_eq!(h.widget.destination().country, None);
    }

    #[test]
    fn test_render() {
        let h = default_harness(StubPromo::resolving());
        h.widget.toggle_promo();
        h.widget.set_promo_draft("SAVE10");

        let view = h.widget.render();
        assert_eq!(view.subtotal, "₹500.00");
        assert_eq!(view.shipping, "₹50.00");
        assert_eq!(view.total, "₹550.00");
        assert!(view.promo_open);
        assert!(!view.shipping_open);
        assert_eq!(view.promo_draft, "SAVE10");
        assert_eq!(view.apply_label, "Apply");
        assert_eq!(view.checkout_label, "Payment Process");
        assert!(view.checkout_enabled);
        assert!(view.update_shipping_enabled);
    }

    #[test]
    fn test_render_while_loading() {
        let h = harness(
            OrderSummaryProps::new(summary(1234, 0, 1234)).loading(true),
            StubPromo::resolving(),
        );
        let view = h.widget.render();
        assert_eq!(view.total, "₹1,234.00");
        assert_eq!(view.checkout_label, "Processing...");
        assert!(!view.checkout_enabled);
        assert!(!view.apply_enabled);
        assert!(!view.update_shipping_enabled);
        assert!(!h.widget.can_update_shipping());
    }
}
