//! # Screens
//!
//! Page-level hosts that wire shared state and ports into widgets.

pub mod cart;

pub use cart::{CartLineView, CartScreen, CartView, PAYMENT_PATH};
