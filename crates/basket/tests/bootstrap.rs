use basket::cart::CartError;
use basket::domain::Cart;
use basket::domain::config::BasketConfig;
use basket::storage::{KeyValueStore, MemoryStore, StorageKey};
use std::sync::Arc;
use tempfile::TempDir;

fn config_in(dir: &TempDir) -> BasketConfig {
    let mut config = BasketConfig::default();
    config.storage.data_dir = dir.path().join("profile");
    config
}

#[test]
fn first_launch_uses_sample_cart() {
    let dir = TempDir::new().unwrap();
    let session = basket::init(&config_in(&dir)).unwrap();

    assert_eq!(session.store.cart(), &Cart::sample());
    assert_eq!(session.table.view().rows.len(), 3);
    assert_eq!(session.table.stats().full, 1);
    assert!(dir.path().join("profile").is_dir());
}

#[test]
fn second_launch_restores_edits() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);

    let mut first = basket::init(&config).unwrap();
    first.store.remove("98Y3").unwrap();
    drop(first);

    let second = basket::init(&config).unwrap();
    assert_eq!(second.store.cart().len(), 2);
    assert!(second.table.view().rows.iter().all(|r| r.reference != "98Y3"));
}

#[test]
fn corrupt_cart_falls_back_to_sample() {
    let memory = MemoryStore::new();
    memory.set(&StorageKey::try_from("cart").unwrap(), "not json at all").unwrap();

    let session = basket::init_with_store(&BasketConfig::default(), Arc::new(memory)).unwrap();
    assert_eq!(session.store.cart(), &Cart::sample());
}

#[test]
fn invalid_cart_key_is_a_storage_error() {
    let mut config = BasketConfig::default();
    config.storage.cart_key = "../escape".to_owned();

    let err = basket::init_with_store(&config, Arc::new(MemoryStore::new())).unwrap_err();
    assert!(matches!(err, CartError::Storage { .. }));
}

#[test]
fn cart_under_another_key_is_left_alone() {
    let memory = MemoryStore::new();
    let old = StorageKey::try_from("old-cart").unwrap();
    memory.set(&old, "[]").unwrap();

    let session = basket::init_with_store(&BasketConfig::default(), Arc::new(memory.clone())).unwrap();

    assert_eq!(session.store.cart(), &Cart::sample());
    assert_eq!(memory.keys().unwrap(), vec![old.clone()]);
    assert_eq!(memory.get(&old).unwrap().as_deref(), Some("[]"));
}
