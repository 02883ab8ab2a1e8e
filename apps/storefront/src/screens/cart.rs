//! # Cart Screen
//!
//! Hosts the [`OrderSummaryWidget`] next to the cart lines. The screen is
//! the widget's "host": it derives the props from the shared cart and
//! turns checkout into navigation.
//!
//! ```text
//! CartHandle ──► subtotal / shipping / discount ──► OrderSummaryProps
//!                                                        │ refresh()
//!                                                        ▼
//!                                              OrderSummaryWidget
//!                                                        │ checkout()
//!                                                        ▼
//!                                            Navigator::push("/payment")
//! ```

use std::sync::Arc;

use aoin_core::Money;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use ts_rs::TS;

use crate::components::{
    CheckoutOutcome, OrderSummaryProps, OrderSummaryView, OrderSummaryWidget, PromoOutcome,
};
use crate::error::ApiError;
use crate::ports::PromoPort;
use crate::router::Navigator;
use crate::state::{AppContext, Cart, CatalogItem};

pub const PAYMENT_PATH: &str = "/payment";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLineView {
    pub product_id: String,
    pub name: String,
    #[ts(type = "number")]
    pub quantity: i64,
    pub unit_price: String,
    pub line_total: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    #[ts(type = "number")]
    pub total_quantity: i64,
    pub applied_promo: Option<String>,
    pub discount: String,
    pub summary: OrderSummaryView,
}

#[derive(Debug, Clone)]
pub struct CartScreen {
    ctx: AppContext,
    widget: OrderSummaryWidget,
}

impl CartScreen {
    pub fn new(ctx: AppContext, promo: Arc<dyn PromoPort>, navigator: Navigator) -> Self {
        let checkout = move || {
            if let Err(err) = navigator.push(PAYMENT_PATH) {
                warn!(%err, "checkout navigation failed");
            }
        };

        let widget = OrderSummaryWidget::new(
            Self::props_from(&ctx, false),
            ctx.currency.clone(),
            promo,
            Arc::new(checkout),
            Arc::new(ctx.toasts.clone()),
        );

        CartScreen { ctx, widget }
    }

    fn props_from(ctx: &AppContext, loading: bool) -> OrderSummaryProps {
        let summary = ctx.cart.with_cart(|cart| cart.summary(ctx.shipping_fee()));
        OrderSummaryProps::new(summary).loading(loading)
    }

    pub fn widget(&self) -> &OrderSummaryWidget {
        &self.widget
    }

    /// Recomputes the widget props from the cart. Keeps the loading flag.
    pub fn refresh(&self) {
        let loading = self.widget.props().loading;
        let props = Self::props_from(&self.ctx, loading);
        debug!(total = %props.summary.total, "cart summary refreshed");
        self.widget.set_props(props);
    }

    pub fn set_loading(&self, loading: bool) {
        let props = self.widget.props().loading(loading);
        self.widget.set_props(props);
    }

    pub fn add_item(&self, item: &CatalogItem, quantity: i64) -> Result<CartView, ApiError> {
        self.ctx.cart.with_cart_mut(|cart| cart.add_item(item, quantity))?;
        self.refresh();
        Ok(self.render())
    }

    pub fn update_item(&self, product_id: &str, quantity: i64) -> Result<CartView, ApiError> {
        self.ctx
            .cart
            .with_cart_mut(|cart| cart.update_quantity(product_id, quantity))?;
        self.refresh();
        Ok(self.render())
    }

    pub fn remove_item(&self, product_id: &str) -> Result<CartView, ApiError> {
        self.ctx.cart.with_cart_mut(|cart| cart.remove_item(product_id))?;
        self.refresh();
        Ok(self.render())
    }

    /// Applies the widget's promo draft, then picks up any discount the
    /// promo service wrote to the cart.
    pub async fn apply_promo(&self) -> PromoOutcome {
        let outcome = self.widget.apply_promo().await;
        if matches!(outcome, PromoOutcome::Applied(_)) {
            self.refresh();
        }
        outcome
    }

    pub fn checkout(&self) -> CheckoutOutcome {
        self.widget.checkout()
    }

    pub fn unmount(&self) {
        self.widget.unmount();
    }

    pub fn render(&self) -> CartView {
        let currency = &self.ctx.currency;
        let (lines, total_quantity, applied_promo, discount) = self.ctx.cart.with_cart(|cart| {
            let lines = cart
                .items
                .iter()
                .map(|item| CartLineView {
                    product_id: item.product_id.clone(),
                    name: item.name.clone(),
                    quantity: item.quantity,
                    unit_price: currency.format(item.unit_price),
                    line_total: currency.format(item.line_total()),
                })
                .collect::<Vec<_>>();
            (
                lines,
                cart.total_quantity(),
                cart.applied_promo.as_ref().map(|p| p.code.to_string()),
                cart.discount(),
            )
        });

        CartView {
            lines,
            total_quantity,
            applied_promo,
            discount: currency.format(discount),
            summary: self.widget.render(),
        }
    }

    pub fn discount(&self) -> Money {
        self.ctx.cart.with_cart(Cart::discount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::ports::LocalPromoService;
    use crate::router::{Page, RouteTable};
    use crate::state::StorefrontConfig;

    fn screen() -> (CartScreen, Navigator, AppContext) {
        let ctx = AppContext::new(StorefrontConfig::default()).unwrap();
        let navigator = Navigator::new(Arc::new(RouteTable::marketplace()));
        let promo = LocalPromoService::new(ctx.cart.clone()).with_code("SAVE10", 1000);
        let screen = CartScreen::new(ctx.clone(), Arc::new(promo), navigator.clone());
        (screen, navigator, ctx)
    }

    fn kurta() -> CatalogItem {
        CatalogItem {
            id: "kurta-1".to_string(),
            name: "Cotton Kurta".to_string(),
            price: Money::from_major_minor(250, 0),
        }
    }

    #[test]
    fn test_empty_cart_cannot_check_out() {
        let (screen, navigator, _) = screen();
        let view = screen.render();
        assert_eq!(view.summary.total, "₹0.00");
        assert!(!view.summary.checkout_enabled);
        assert_eq!(screen.checkout(), CheckoutOutcome::Disabled);
        assert!(navigator.current().is_none());
    }

    #[test]
    fn test_adding_items_updates_summary() {
        let (screen, _, _) = screen();
        let view = screen.add_item(&kurta(), 2).unwrap();

        assert_eq!(view.lines.len(), 1);
        assert_eq!(view.lines[0].line_total, "₹500.00");
        assert_eq!(view.summary.subtotal, "₹500.00");
        assert_eq!(view.summary.shipping, "₹50.00");
        assert_eq!(view.summary.total, "₹550.00");
        assert!(view.summary.checkout_enabled);
    }

    #[test]
    fn test_checkout_navigates_to_payment() {
        let (screen, navigator, _) = screen();
        screen.add_item(&kurta(), 1).unwrap();

        assert_eq!(screen.checkout(), CheckoutOutcome::Started);
        assert_eq!(navigator.current().unwrap().page, Page::Payment);
    }

    #[test]
    fn test_invalid_quantity_is_api_error() {
        let (screen, _, _) = screen();
        let err = screen.add_item(&kurta(), 0).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = screen.remove_item("missing").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_applied_promo_refreshes_total() {
        let (screen, _, ctx) = screen();
        screen.add_item(&kurta(), 2).unwrap();
        screen.widget().set_promo_draft("save10");

        let outcome = screen.apply_promo().await;

        assert!(matches!(outcome, PromoOutcome::Applied(_)));
        assert_eq!(screen.discount(), Money::from_major_minor(50, 0));
        let view = screen.render();
        assert_eq!(view.summary.total, "₹500.00");
        assert_eq!(view.applied_promo.as_deref(), Some("save10"));
        assert!(ctx.toasts.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_discount_tracks_quantity_after_promo() {
        let (screen, _, _) = screen();
        screen.add_item(&kurta(), 4).unwrap();
        screen.widget().set_promo_draft("SAVE10");
        assert!(matches!(screen.apply_promo().await, PromoOutcome::Applied(_)));
        assert_eq!(screen.render().discount, "₹100.00");

        let view = screen.update_item("kurta-1", 1).unwrap();

        assert_eq!(view.discount, "₹25.00");
        assert_eq!(view.summary.subtotal, "₹250.00");
        assert_eq!(view.summary.total, "₹275.00");
    }

    #[test]
    fn test_negative_price_is_api_error() {
        let (screen, _, _) = screen();
        let refund = CatalogItem {
            price: Money::from_cents(-10_000),
            ..kurta()
        };

        let err = screen.add_item(&refund, 1).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(screen.render().lines.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_promo_shows_toast() {
        let (screen, _, ctx) = screen();
        screen.add_item(&kurta(), 1).unwrap();
        screen.widget().set_promo_draft("NOPE");

        let outcome = screen.apply_promo().await;

        assert!(matches!(outcome, PromoOutcome::Rejected(_)));
        assert_eq!(ctx.toasts.error_count(), 1);
        assert_eq!(screen.render().summary.promo_draft, "NOPE");
    }

    #[test]
    fn test_loading_survives_refresh() {
        let (screen, _, _) = screen();
        screen.add_item(&kurta(), 1).unwrap();
        screen.set_loading(true);
        screen.update_item("kurta-1", 3).unwrap();

        let view = screen.render();
        assert_eq!(view.summary.checkout_label, "Processing...");
        assert_eq!(view.total_quantity, 3);
    }
}
