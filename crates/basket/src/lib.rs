//! Facade crate for the basket widget.
//! Re-exports domain/kernel primitives and composes the cart slice into a ready [`Session`].
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Load a [`domain::config::BasketConfig`] with [`kernel::config::load_basket_config`].
//! - Call [`init`] to open the profile store, restore the cart and draw the first table.

pub use basket_cart as cart;
pub use basket_domain as domain;
pub use basket_event_bus as events;
pub use basket_kernel as kernel;
pub use basket_storage as storage;

use basket_cart::{CartError, CartRepository, CartStore, TableRenderer};
use basket_domain::Cart;
use basket_domain::config::BasketConfig;
use basket_event_bus::EventBus;
use basket_storage::{FileStore, KeyValueStore, StorageKey};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Everything the shell needs to drive the widget.
#[derive(Debug)]
pub struct Session {
    pub store: CartStore,
    pub table: TableRenderer,
    pub events: EventBus,
}

/// Opens the file store under `storage.data_dir` and starts a session on it.
///
/// # Errors
/// Returns [`CartError::Storage`] if the data directory cannot be prepared or read.
pub fn init(config: &BasketConfig) -> Result<Session, CartError> {
    let files = FileStore::builder().root(&config.storage.data_dir).connect()?;
    init_with_store(config, Arc::new(files))
}

/// Starts a session on an arbitrary store.
///
/// The cart starts as the sample cart and is replaced by the persisted one when present.
/// A corrupt persisted cart is logged and ignored; the next save overwrites it.
///
/// # Errors
/// Returns [`CartError::Storage`] for an invalid `storage.cart_key` or an unreadable store.
pub fn init_with_store(
    config: &BasketConfig,
    store: Arc<dyn KeyValueStore>,
) -> Result<Session, CartError> {
    let key = StorageKey::try_from(config.storage.cart_key.as_str())?;
    let events = EventBus::new();
    let table = TableRenderer::new(&events);

    let mut cart = CartStore::new(CartRepository::new(Arc::clone(&store), key), events.clone())
        .with_cart(Cart::sample())
        .with_pricing(config.pricing)
        .with_autosave(config.storage.autosave);

    match cart.load() {
        Ok(true) => {}
        Ok(false) => {
            info!("Starting with the sample cart");
            log_other_keys(store.as_ref(), &config.storage.cart_key);
        }
        Err(e @ CartError::CorruptState { .. }) => {
            warn!(error = %e, "Persisted cart is unreadable, starting with the sample cart");
        }
        Err(e) => return Err(e),
    }

    let mut session = Session { store: cart, table, events };
    session.table.render(&session.store);
    info!(items = session.store.cart().len(), mode = %session.store.delivery_mode(), "Session ready");
    Ok(session)
}

/// A missing cart next to other stored values usually means `storage.cart_key` was changed.
fn log_other_keys(store: &dyn KeyValueStore, cart_key: &str) {
    match store.keys() {
        Ok(keys) if !keys.is_empty() => {
            let keys: Vec<&str> = keys.iter().map(StorageKey::as_str).collect();
            warn!(cart_key, ?keys, "No cart under the configured key, but the store holds other values");
        }
        Ok(_) => {}
        Err(e) => debug!(error = %e, "Could not list stored keys"),
    }
}
