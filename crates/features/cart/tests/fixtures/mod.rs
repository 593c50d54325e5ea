#![allow(dead_code, unreachable_pub)]

use basket_cart::{CartEvent, CartRepository, CartStore};
use basket_domain::{Cart, LineItem, Quantity, Reference, UnitPrice};
use basket_event_bus::{EventBus, Subscription};
use basket_storage::{MemoryStore, StorageKey};
use parking_lot::Mutex;
use std::sync::Arc;

pub struct Harness {
    pub events: EventBus,
    pub memory: MemoryStore,
    pub store: CartStore,
}

pub fn key() -> StorageKey {
    StorageKey::try_from("cart").unwrap()
}

pub fn item(reference: &str, name: &str, price: f64, quantity: i64) -> LineItem {
    LineItem::new(
        Reference::try_from(reference).unwrap(),
        name,
        UnitPrice::new(price).unwrap(),
        Quantity::try_new(quantity).unwrap(),
    )
}

/// A single line `{5K96, Savon, 6, 4}`.
pub fn soap_cart() -> Cart {
    Cart::try_from(vec![item("5K96", "Savon", 6.0, 4)]).unwrap()
}

pub fn harness(cart: Cart) -> Harness {
    let events = EventBus::new();
    let memory = MemoryStore::new();
    let repository = CartRepository::new(Arc::new(memory.clone()), key());
    let store = CartStore::new(repository, events.clone()).with_cart(cart);
    Harness { events, memory, store }
}

pub fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// Records every published [`CartEvent`].
pub fn recorder(events: &EventBus) -> (Arc<Mutex<Vec<CartEvent>>>, Subscription) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let sub = events.subscribe(move |event: &CartEvent| sink.lock().push(event.clone()));
    (seen, sub)
}
