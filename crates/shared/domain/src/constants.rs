/// VAT applied to the pre-delivery subtotal.
pub const VAT_RATE: f64 = 0.20;

/// Relay-point delivery fee.
pub const RELAY_FEE: f64 = 5.0;

/// Home delivery fee.
pub const HOME_FEE: f64 = 12.0;

/// Storage key holding the serialized cart.
pub const CART_KEY: &str = "cart";

pub const MIN_QUANTITY: u8 = 1;
pub const MAX_QUANTITY: u8 = 10;
