//! # Cart State
//!
//! The shopper's cart, shared by every screen that needs it through an
//! explicit [`CartHandle`].
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Shopper Action           CartScreen op           Cart State Change     │
//! │  ──────────────           ─────────────           ─────────────────     │
//! │  Add to cart  ──────────► add_item() ───────────► items.push(item)     │
//! │  Change quantity ───────► update_item() ────────► items[i].qty = n     │
//! │  Remove ────────────────► remove_item() ────────► items.remove(i)      │
//! │  Promo accepted ────────► apply_promo() ────────► promo = (code, bps)  │
//! │                                                                         │
//! │  All access goes through with_cart / with_cart_mut; the lock is never  │
//! │  held across an await.                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use aoin_core::validation::{
    validate_cart_size, validate_price_cents, validate_product_id, validate_quantity,
};
use aoin_core::{CoreError, Money, OrderSummary, PromoCode, MAX_CART_ITEMS, MAX_ITEM_QUANTITY};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The catalog data a cart line is created from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    pub price: Money,
}

/// A line in the cart.
///
/// Name and price are frozen when the line is created so the cart does not
/// shift under the shopper if the catalog changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: String,
    pub name: String,
    pub unit_price: Money,
    pub quantity: i64,
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    pub fn from_catalog(item: &CatalogItem, quantity: i64) -> Self {
        CartItem {
            product_id: item.id.clone(),
            name: item.name.clone(),
            unit_price: item.price,
            quantity,
            added_at: Utc::now(),
        }
    }

    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

/// The shopping cart.
///
/// ## Invariants
/// - Items are unique by `product_id` (adding again increases quantity)
/// - Every quantity is in `1..=MAX_ITEM_QUANTITY`
/// - At most `MAX_CART_ITEMS` distinct items
/// - Unit prices are never negative
/// - The discount always tracks the current subtotal
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub items: Vec<CartItem>,

    pub applied_promo: Option<AppliedPromo>,
}

/// A code the promo service accepted and the rate it grants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedPromo {
    pub code: PromoCode,
    /// Discount in basis points of the subtotal.
    pub rate_bps: u32,
}

impl Cart {
    pub fn new() -> Self {
        Cart::default()
    }

    /// Adds a catalog item or increases its quantity if already present.
    pub fn add_item(&mut self, item: &CatalogItem, quantity: i64) -> Result<(), CoreError> {
        validate_product_id(&item.id)?;
        validate_quantity(quantity)?;
        validate_price_cents(item.price.cents())?;

        if let Some(line) = self.items.iter_mut().find(|i| i.product_id == item.id) {
            let new_qty = line.quantity + quantity;
            if new_qty > MAX_ITEM_QUANTITY {
                return Err(CoreError::QuantityTooLarge {
                    requested: new_qty,
                    max: MAX_ITEM_QUANTITY,
                });
            }
            line.quantity = new_qty;
            return Ok(());
        }

        validate_cart_size(self.items.len()).map_err(|_| CoreError::CartTooLarge {
            max: MAX_CART_ITEMS,
        })?;

        self.items.push(CartItem::from_catalog(item, quantity));
        Ok(())
    }

    /// Sets the quantity of a line. Quantity 0 removes it.
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) -> Result<(), CoreError> {
        if quantity == 0 {
            return self.remove_item(product_id);
        }

        if quantity > MAX_ITEM_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested: quantity,
                max: MAX_ITEM_QUANTITY,
            });
        }
        validate_quantity(quantity)?;

        let line = self
            .items
            .iter_mut()
            .find(|i| i.product_id == product_id)
            .ok_or_else(|| CoreError::ItemNotInCart(product_id.to_string()))?;
        line.quantity = quantity;
        Ok(())
    }

    pub fn remove_item(&mut self, product_id: &str) -> Result<(), CoreError> {
        let initial_len = self.items.len();
        self.items.retain(|i| i.product_id != product_id);

        if self.items.len() == initial_len {
            return Err(CoreError::ItemNotInCart(product_id.to_string()));
        }

        if self.items.is_empty() {
            self.clear_promo();
        }
        Ok(())
    }

    /// Empties the cart and drops any applied promo.
    pub fn clear(&mut self) {
        self.items.clear();
        self.clear_promo();
    }

    pub fn apply_promo(&mut self, code: PromoCode, rate_bps: u32) {
        self.applied_promo = Some(AppliedPromo { code, rate_bps });
    }

    pub fn clear_promo(&mut self) {
        self.applied_promo = None;
    }

    /// Discount for the applied promo, recomputed from the current subtotal.
    pub fn discount(&self) -> Money {
        self.applied_promo
            .as_ref()
            .map_or(Money::zero(), |promo| self.subtotal().percentage_of(promo.rate_bps))
    }

    /// Number of distinct items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    pub fn subtotal(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Builds the order summary. Shipping is only charged on a non-empty cart.
    pub fn summary(&self, shipping_fee: Money) -> OrderSummary {
        let shipping = if self.is_empty() {
            Money::zero()
        } else {
            shipping_fee
        };
        OrderSummary::compute(self.subtotal(), shipping, self.discount())
    }
}

/// Shared handle to the shopper's cart.
///
/// Cloning the handle shares the same cart.
#[derive(Debug, Clone, Default)]
pub struct CartHandle {
    cart: Arc<Mutex<Cart>>,
}

impl CartHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes a function with read access to the cart.
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().unwrap_or_else(PoisonError::into_inner);
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut cart)
    }
}
