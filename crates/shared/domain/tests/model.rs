use basket_domain::{Cart, LineItem, Quantity, Reference, UnitPrice};
use serde_json::json;

#[test]
fn cart_serializes_as_camel_case_array() {
    let value = serde_json::to_value(Cart::sample()).unwrap();
    assert_eq!(
        value,
        json!([
            { "reference": "5K96", "name": "Savon", "unitPrice": 6.0, "quantity": 4 },
            { "reference": "98Y3", "name": "Coquillette", "unitPrice": 3.0, "quantity": 8 },
            { "reference": "365D", "name": "Yaourt nature", "unitPrice": 8.0, "quantity": 2 }
        ])
    );
}

#[test]
fn cart_json_roundtrip_preserves_order() {
    let mut cart = Cart::sample();
    cart.push(LineItem::new(
        Reference::try_from("A1").unwrap(),
        "Pain",
        UnitPrice::new(1.25).unwrap(),
        Quantity::try_new(3).unwrap(),
    ))
    .unwrap();

    let text = serde_json::to_string(&cart).unwrap();
    let back: Cart = serde_json::from_str(&text).unwrap();
    assert_eq!(back, cart);
}

#[test]
fn invalid_persisted_content_is_rejected() {
    let cases = [
        json!({ "reference": "x" }),
        json!([{ "reference": "", "name": "a", "unitPrice": 1.0, "quantity": 1 }]),
        json!([{ "reference": "a", "name": "a", "unitPrice": -1.0, "quantity": 1 }]),
        json!([{ "reference": "a", "name": "a", "unitPrice": 1.0, "quantity": 0 }]),
        json!([{ "reference": "a", "name": "a", "unitPrice": 1.0, "quantity": 11 }]),
        json!([{ "reference": "a", "name": "a", "unitPrice": null, "quantity": 1 }]),
        json!([
            { "reference": "a", "name": "a", "unitPrice": 1.0, "quantity": 1 },
            { "reference": "a", "name": "b", "unitPrice": 2.0, "quantity": 2 }
        ]),
    ];

    for case in cases {
        assert!(serde_json::from_value::<Cart>(case.clone()).is_err(), "accepted {case}");
    }
}

#[test]
fn empty_array_is_an_empty_cart() {
    let cart: Cart = serde_json::from_str("[]").unwrap();
    assert!(cart.is_empty());
}
