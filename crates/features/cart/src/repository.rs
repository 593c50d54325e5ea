use crate::error::{CartError, CartErrorExt};
use basket_domain::Cart;
use basket_storage::{KeyValueStore, StorageKey};
use std::sync::Arc;
use tracing::{debug, trace};

/// Persistence adapter: the cart as a JSON array under a single storage key.
#[derive(Debug, Clone)]
pub struct CartRepository {
    store: Arc<dyn KeyValueStore>,
    key: StorageKey,
}

impl CartRepository {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>, key: StorageKey) -> Self {
        Self { store, key }
    }

    #[must_use]
    pub const fn key(&self) -> &StorageKey {
        &self.key
    }

    /// Reads the persisted cart. `Ok(None)` when nothing was saved yet.
    ///
    /// # Errors
    /// * [`CartError::CorruptState`] if the value is not a valid cart (bad JSON, out-of-range
    ///   quantity, negative price, duplicate reference).
    /// * [`CartError::Storage`] if the store cannot be read.
    pub fn load(&self) -> Result<Option<Cart>, CartError> {
        let Some(raw) = self.store.get(&self.key).context("Failed to read cart")? else {
            trace!(key = %self.key, "No persisted cart");
            return Ok(None);
        };

        let cart: Cart = serde_json::from_str(&raw).context("Failed to decode persisted cart")?;
        debug!(key = %self.key, items = cart.len(), "Persisted cart decoded");
        Ok(Some(cart))
    }

    /// Overwrites the persisted cart.
    ///
    /// # Errors
    /// Returns [`CartError::Storage`] if the write fails.
    pub fn save(&self, cart: &Cart) -> Result<(), CartError> {
        let raw = serde_json::to_string(cart).map_err(|e| CartError::Internal {
            message: e.to_string().into(),
            context: Some("Failed to encode cart".into()),
        })?;

        self.store.set(&self.key, &raw).context("Failed to write cart")?;
        trace!(key = %self.key, bytes = raw.len(), "Cart persisted");
        Ok(())
    }

    /// Drops the persisted cart. Returns whether one existed.
    ///
    /// # Errors
    /// Returns [`CartError::Storage`] if the store cannot be updated.
    pub fn clear(&self) -> Result<bool, CartError> {
        self.store.remove(&self.key).context("Failed to clear cart")
    }
}
