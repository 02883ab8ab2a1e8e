//! Wishlist state: an insertion-ordered set of product ids.

use std::sync::{Arc, Mutex, PoisonError};

use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct WishlistHandle {
    items: Arc<Mutex<Vec<String>>>,
}

impl WishlistHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the product if absent, removes it if present.
    ///
    /// Returns `true` when the product is on the wishlist afterwards.
    pub fn toggle(&self, product_id: &str) -> bool {
        let mut items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        let saved = match items.iter().position(|id| id == product_id) {
            Some(idx) => {
                items.remove(idx);
                false
            }
            None => {
                items.push(product_id.to_string());
                true
            }
        };
        debug!(product_id = %product_id, saved, "wishlist toggled");
        saved
    }

    pub fn contains(&self, product_id: &str) -> bool {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|id| id == product_id)
    }

    pub fn len(&self) -> usize {
        self.items.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of the saved product ids, oldest first.
    pub fn items(&self) -> Vec<String> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}
