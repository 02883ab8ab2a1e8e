//! # Components
//!
//! Interactive widgets. Each widget owns its UI state and reaches the
//! outside world only through the ports it was constructed with.

pub mod order_summary;

pub use order_summary::{
    CheckoutOutcome, OrderSummaryProps, OrderSummaryView, OrderSummaryWidget, PromoOutcome,
    ShippingDestination,
};
