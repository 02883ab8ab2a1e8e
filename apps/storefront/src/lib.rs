//! # Aoin Storefront
//!
//! Client logic for the Aoin marketplace: the page table, the cart screen
//! with its order summary widget, and the explicit state handles the web
//! shell renders from.
//!
//! ## Module Organization
//! ```text
//! aoin_storefront/
//! ├── lib.rs          ◄─── You are here (assembly & logging)
//! ├── state/
//! │   ├── mod.rs      ◄─── AppContext
//! │   ├── cart.rs     ◄─── CartHandle
//! │   ├── wishlist.rs ◄─── WishlistHandle
//! │   ├── auth.rs     ◄─── AuthHandle
//! │   └── config.rs   ◄─── storefront.toml + AOIN_* overrides
//! ├── router/         ◄─── RouteTable, Page, Navigator
//! ├── components/
//! │   └── order_summary.rs ◄─── OrderSummaryWidget
//! ├── screens/
//! │   └── cart.rs     ◄─── CartScreen (widget host)
//! ├── ports.rs        ◄─── PromoPort, CheckoutPort, Notifier
//! ├── notify.rs       ◄─── ToastQueue
//! └── error.rs        ◄─── ApiError, ConfigError
//! ```

pub mod components;
pub mod error;
pub mod notify;
pub mod ports;
pub mod router;
pub mod screens;
pub mod state;

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use error::{ApiError, ConfigError};
use ports::{LocalPromoService, PromoPort};
use router::{Navigator, PageView, RouteTable};
use screens::CartScreen;
use state::{AppContext, StorefrontConfig};

/// Promo code the local promo service accepts out of the box.
pub const DEMO_PROMO_CODE: &str = "SAVE10";

/// Top-level assembly. Owns the shared state and the navigator and hands
/// them to screens explicitly.
#[derive(Debug, Clone)]
pub struct Storefront {
    ctx: AppContext,
    navigator: Navigator,
}

impl Storefront {
    pub fn new(config: StorefrontConfig) -> Result<Self, ConfigError> {
        let ctx = AppContext::new(config)?;
        let navigator = Navigator::new(Arc::new(RouteTable::marketplace()));
        info!(store = %ctx.config.storefront.name, currency = %ctx.currency.code, "storefront ready");
        Ok(Storefront { ctx, navigator })
    }

    /// Loads configuration (file, then `AOIN_*` overrides) and assembles.
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        Self::new(StorefrontConfig::load(config_path)?)
    }

    pub fn context(&self) -> &AppContext {
        &self.ctx
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// Navigates to `path` and returns the page to draw.
    pub fn open(&self, path: &str) -> Result<PageView, ApiError> {
        Ok(self.navigator.push(path)?)
    }

    pub fn cart_screen(&self, promo: Arc<dyn PromoPort>) -> CartScreen {
        CartScreen::new(self.ctx.clone(), promo, self.navigator.clone())
    }

    /// In-process promo service over this storefront's cart.
    pub fn local_promo(&self) -> LocalPromoService {
        LocalPromoService::new(self.ctx.cart.clone()).with_code(DEMO_PROMO_CODE, 1000)
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// `RUST_LOG` overrides the default of `info,aoin=debug`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,aoin=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::Section;

    #[test]
    fn test_open_resolves_through_navigator() {
        let store = Storefront::new(StorefrontConfig::default()).unwrap();
        let view = store.open("/superadmin").unwrap();
        assert_eq!(view.title, "Dashboard");
        assert_eq!(view.section, Section::SuperAdmin);
        assert_eq!(store.navigator().depth(), 1);
    }

    #[test]
    fn test_cart_screen_shares_context() {
        let store = Storefront::new(StorefrontConfig::default()).unwrap();
        let screen = store.cart_screen(Arc::new(store.local_promo()));
        store.context().cart.with_cart_mut(|c| {
            c.add_item(
                &state::CatalogItem {
                    id: "p1".to_string(),
                    name: "Saree".to_string(),
                    price: aoin_core::Money::from_cents(99_900),
                },
                1,
            )
        })
        .unwrap();
        screen.refresh();
        assert_eq!(screen.render().summary.subtotal, "₹999.00");
    }
}
