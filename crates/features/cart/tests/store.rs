mod fixtures;

use basket_cart::{CartError, CartEvent, CartRepository, CartStore, ProductForm};
use basket_domain::{Cart, DeliveryMode, Quantity};
use basket_event_bus::EventBus;
use basket_storage::{KeyValueStore, MemoryStore};
use fixtures::*;
use std::sync::Arc;

#[test]
fn relay_and_home_scenarios() {
    let mut h = harness(soap_cart());

    let totals = h.store.totals();
    assert!(close(totals.subtotal, 24.0));
    assert!(close(totals.vat, 4.8));
    assert!(close(totals.delivery_fee, 5.0));
    assert!(close(totals.grand_total, 33.8));

    h.store.set_delivery_mode(DeliveryMode::Home);
    assert!(close(h.store.totals().grand_total, 40.8));
}

#[test]
fn quantity_ten_recomputes_line_and_totals() {
    let mut h = harness(soap_cart());

    assert_eq!(h.store.set_quantity("5K96", 10).unwrap().get(), 10);
    assert!(close(h.store.line("5K96").unwrap().line_price(), 60.0));
    assert!(close(h.store.totals().grand_total, 60.0 + 12.0 + 5.0));
}

#[test]
fn quantity_is_clamped() {
    let mut h = harness(soap_cart());

    assert_eq!(h.store.set_quantity("5K96", 0).unwrap(), Quantity::MIN);
    assert_eq!(h.store.set_quantity("5K96", 42).unwrap(), Quantity::MAX);
    assert_eq!(h.store.set_quantity("5K96", -7).unwrap(), Quantity::MIN);
}

#[test]
fn unknown_reference_is_item_not_found() {
    let mut h = harness(soap_cart());
    let err = h.store.set_quantity("nope", 3).unwrap_err();
    assert!(matches!(err, CartError::ItemNotFound { .. }));
}

#[test]
fn removing_absent_reference_changes_nothing() {
    let mut h = harness(Cart::sample());
    let (seen, _sub) = recorder(&h.events);

    assert!(h.store.remove("ZZZZ").is_none());
    assert_eq!(h.store.cart(), &Cart::sample());
    assert!(seen.lock().is_empty());
    assert!(h.memory.is_empty(), "no-op must not trigger an autosave");
}

#[test]
fn remove_keeps_order_of_remaining_lines() {
    let mut h = harness(Cart::sample());

    let removed = h.store.remove("98Y3").unwrap();
    assert_eq!(removed.name, "Coquillette");
    let refs: Vec<_> = h.store.cart().iter().map(|l| l.reference.to_string()).collect();
    assert_eq!(refs, ["5K96", "365D"]);
}

#[test]
fn duplicate_reference_is_rejected() {
    let mut h = harness(soap_cart());

    let err = h.store.add(item("5K96", "Other soap", 1.0, 1)).unwrap_err();
    assert!(matches!(err, CartError::DuplicateReference { .. }));
    assert_eq!(h.store.cart(), &soap_cart());
}

#[test]
fn invalid_form_leaves_cart_unchanged() {
    let mut h = harness(soap_cart());

    let err = h.store.add_from_form(&ProductForm::new("A1", "Pain", "abc", "x")).unwrap_err();
    let CartError::Form { source, .. } = err else { panic!("expected a form error, got {err:?}") };
    assert_eq!(source.fields().len(), 2);
    assert_eq!(h.store.cart(), &soap_cart());
    assert!(h.memory.is_empty());
}

#[test]
fn valid_form_appends_at_the_end() {
    let mut h = harness(soap_cart());

    let reference = h.store.add_from_form(&ProductForm::new("A1", "Pain", "1.5", "2")).unwrap();
    assert_eq!(reference, "A1");
    assert_eq!(h.store.cart().items().last().unwrap().reference, "A1");
    assert!(close(h.store.totals().subtotal, 27.0));
}

#[test]
fn every_mutation_publishes_and_autosaves() {
    let mut h = harness(soap_cart());
    let (seen, _sub) = recorder(&h.events);

    h.store.add(item("A1", "Pain", 1.0, 1)).unwrap();
    h.store.set_quantity("A1", 3).unwrap();
    h.store.set_delivery_mode(DeliveryMode::Home);
    h.store.remove("5K96").unwrap();

    let seen = seen.lock();
    assert_eq!(seen.len(), 4);
    assert!(matches!(seen[0], CartEvent::ItemAdded { .. }));
    assert!(matches!(seen[1], CartEvent::QuantityChanged { .. }));
    assert_eq!(seen[2], CartEvent::DeliveryModeChanged { mode: DeliveryMode::Home });
    assert!(matches!(seen[3], CartEvent::ItemRemoved { .. }));

    let saved = h.memory.get(&key()).unwrap().unwrap();
    let persisted: Cart = serde_json::from_str(&saved).unwrap();
    assert_eq!(&persisted, h.store.cart());
}

#[test]
fn autosave_can_be_disabled() {
    let memory = MemoryStore::new();
    let repository = CartRepository::new(Arc::new(memory.clone()), key());
    let mut store = CartStore::new(repository, EventBus::new()).with_cart(soap_cart()).with_autosave(false);

    store.set_quantity("5K96", 2).unwrap();
    assert!(memory.is_empty());

    store.save().unwrap();
    assert!(memory.get(&key()).unwrap().is_some());
}

#[test]
fn load_replaces_cart_when_persisted() {
    let mut h = harness(Cart::sample());
    assert!(!h.store.load().unwrap(), "nothing persisted yet");
    assert_eq!(h.store.cart(), &Cart::sample());

    h.memory.set(&key(), &serde_json::to_string(&soap_cart()).unwrap()).unwrap();
    let (seen, _sub) = recorder(&h.events);

    assert!(h.store.load().unwrap());
    assert_eq!(h.store.cart(), &soap_cart());
    assert_eq!(seen.lock().as_slice(), [CartEvent::Loaded { items: 1 }]);
}

#[test]
fn reset_drops_persisted_cart_and_restores_sample() {
    let mut h = harness(soap_cart());
    h.store.set_delivery_mode(DeliveryMode::Home);
    h.store.save().unwrap();
    let (seen, _sub) = recorder(&h.events);

    assert!(h.store.reset().unwrap());
    assert_eq!(h.store.cart(), &Cart::sample());
    assert_eq!(h.store.delivery_mode(), DeliveryMode::Home);
    assert_eq!(h.memory.get(&key()).unwrap(), None, "reset must not write the sample back");
    assert_eq!(seen.lock().as_slice(), [CartEvent::Reset { items: 3 }]);

    assert!(!h.store.reset().unwrap());
    assert!(!h.store.load().unwrap());
}

#[test]
fn integer_prices_written_by_older_widget_load() {
    let mut h = harness(Cart::sample());
    h.memory
        .set(&key(), r#"[{"reference":"5K96","name":"Savon","unitPrice":6,"quantity":4}]"#)
        .unwrap();

    assert!(h.store.load().unwrap());
    assert_eq!(h.store.cart(), &Cart::try_from(vec![item("5K96", "Savon", 6.0, 4)]).unwrap());
    assert!(close(h.store.totals().subtotal, 24.0));
}

#[test]
fn corrupt_storage_keeps_in_memory_cart() {
    let mut h = harness(Cart::sample());
    h.memory.set(&key(), r#"[{"reference":"x","name":"y","unitPrice":1,"quantity":99}]"#).unwrap();

    let err = h.store.load().unwrap_err();
    assert!(matches!(err, CartError::CorruptState { .. }));
    assert_eq!(h.store.cart(), &Cart::sample());

    h.store.save().unwrap();
    assert!(h.store.load().unwrap(), "next save overwrites the corrupt entry");
}
