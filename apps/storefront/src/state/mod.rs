//! # State Module
//!
//! Shared client state, passed explicitly instead of read from ambient
//! providers.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │   Storefront::new(config)                                               │
//! │        │ builds once                                                    │
//! │        ▼                                                                │
//! │   AppContext { cart, wishlist, auth, config, toasts }                   │
//! │        │ cloned into each screen that needs it                          │
//! │        ▼                                                                │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐  ┌────────────┐  │
//! │  │  CartHandle  │  │WishlistHandle│  │  AuthHandle  │  │  Config    │  │
//! │  │ Arc<Mutex<   │  │ Arc<Mutex<   │  │ Arc<Mutex<   │  │ read-only  │  │
//! │  │   Cart>>     │  │   Vec>>      │  │   Session>>  │  │            │  │
//! │  └──────────────┘  └──────────────┘  └──────────────┘  └────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod auth;
mod cart;
mod config;
mod wishlist;

use std::sync::Arc;

use aoin_core::{CurrencyFormat, Money};

pub use auth::{AuthHandle, Role, Session};
pub use cart::{AppliedPromo, CatalogItem, Cart, CartHandle, CartItem};
pub use config::{CurrencySettings, NotificationSettings, StorefrontConfig, StorefrontSettings};
pub use wishlist::WishlistHandle;

use crate::error::ConfigError;
use crate::notify::ToastQueue;

/// Everything a screen may depend on, owned by the top-level assembly.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub cart: CartHandle,
    pub wishlist: WishlistHandle,
    pub auth: AuthHandle,
    pub config: Arc<StorefrontConfig>,
    pub currency: CurrencyFormat,
    pub toasts: ToastQueue,
}

impl AppContext {
    pub fn new(config: StorefrontConfig) -> Result<Self, ConfigError> {
        let currency = config.currency_format()?;
        Ok(AppContext {
            cart: CartHandle::new(),
            wishlist: WishlistHandle::new(),
            auth: AuthHandle::new(),
            toasts: ToastQueue::new(config.notifications.clone()),
            config: Arc::new(config),
            currency,
        })
    }

    pub fn shipping_fee(&self) -> Money {
        Money::from_cents(self.config.storefront.shipping_fee_cents)
    }
}
