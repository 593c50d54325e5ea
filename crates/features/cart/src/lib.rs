//! # Cart
//!
//! The shopping-cart slice: an owned [`CartStore`] with explicit mutators, a pure
//! [`TotalsCalculator`], a JSON [`CartRepository`] over any `KeyValueStore`, the
//! [`TableRenderer`] view model and the [`ProductForm`] validator.
//!
//! ## Flow
//!
//! 1. The shell builds a store over a repository and an event bus, then calls
//!    [`CartStore::load`] (falling back to the sample cart).
//! 2. [`TableRenderer::render`] draws every row and registers per-row bindings.
//! 3. Row actions go through [`TableRenderer::dispatch`]; the store publishes a
//!    [`CartEvent`] and autosaves; the renderer redraws only what the event requires.
//!
//! ```rust
//! use basket_cart::{CartRepository, CartStore, RowAction, TableRenderer};
//! use basket_domain::Cart;
//! use basket_event_bus::EventBus;
//! use basket_storage::{MemoryStore, StorageKey};
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let events = EventBus::new();
//! let repository = CartRepository::new(Arc::new(MemoryStore::new()), StorageKey::try_from("cart")?);
//! let mut store = CartStore::new(repository, events.clone()).with_cart(Cart::sample());
//! let mut table = TableRenderer::new(&events);
//!
//! table.render(&store);
//! let reference = table.view().rows[0].reference.clone();
//! table.dispatch(&mut store, RowAction::SetQuantity { reference, input: "10".into() })?;
//!
//! assert_eq!(table.view().rows[0].line_price_text(), "60.00");
//! # Ok(())
//! # }
//! ```

mod error;
mod events;
mod form;
mod repository;
mod store;
mod table;
mod totals;

pub use error::{CartError, CartErrorExt};
pub use events::{CartEvent, Redraw};
pub use form::{FieldError, FormError, FormField, ProductForm};
pub use repository::CartRepository;
pub use store::CartStore;
pub use table::{
    FooterView, RenderStats, RowAction, RowView, TableRenderer, TableView, parse_delivery_mode,
    parse_quantity,
};
pub use totals::TotalsCalculator;
