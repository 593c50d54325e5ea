use basket_domain::DeliveryMode;
use basket_domain::config::{BasketConfig, LogConfig, PricingConfig, StorageConfig, WindowConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let pricing = PricingConfig::default();
    assert!((pricing.vat_rate - 0.20).abs() < f64::EPSILON);
    assert!((pricing.delivery.fee(DeliveryMode::Relay) - 5.0).abs() < f64::EPSILON);
    assert!((pricing.delivery.fee(DeliveryMode::Home) - 12.0).abs() < f64::EPSILON);

    let storage = StorageConfig::default();
    assert_eq!(storage.cart_key, "cart");
    assert_eq!(storage.data_dir, std::path::PathBuf::from(".basket"));
    assert!(storage.autosave);

    let log = LogConfig::default();
    assert_eq!(log.level, "info");
    assert!(log.directory.is_none());
    assert!(!log.json);

    assert_eq!(WindowConfig::default().title, "Basket");
}

#[test]
fn basket_config_deserializes_partial_input() {
    let raw = json!({
        "pricing": { "delivery": { "home": 15.5 } },
        "storage": { "data_dir": "/tmp/basket", "autosave": false },
        "log": { "level": "debug", "directory": "/tmp/logs" }
    });

    let cfg: BasketConfig = serde_json::from_value(raw).expect("config deserialize");
    assert!((cfg.pricing.vat_rate - 0.20).abs() < f64::EPSILON);
    assert!((cfg.pricing.delivery.home - 15.5).abs() < f64::EPSILON);
    assert!((cfg.pricing.delivery.relay - 5.0).abs() < f64::EPSILON);
    assert_eq!(cfg.storage.data_dir, std::path::PathBuf::from("/tmp/basket"));
    assert_eq!(cfg.storage.cart_key, "cart");
    assert!(!cfg.storage.autosave);
    assert_eq!(cfg.log.level, "debug");
}

#[test]
fn cloned_config_is_copy_on_write() {
    let base = BasketConfig::default();
    let mut edited = base.clone();
    edited.storage.autosave = false;

    assert!(base.storage.autosave);
    assert!(!edited.storage.autosave);
}
