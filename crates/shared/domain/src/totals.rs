use serde::Serialize;

/// Derived cart figures. Never stored; recomputed from the cart on every change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    /// Sum of line prices, before tax and delivery.
    pub subtotal: f64,
    /// Tax computed on `subtotal` only.
    pub vat: f64,
    pub delivery_fee: f64,
    /// `subtotal + delivery_fee`.
    pub total_with_delivery: f64,
    /// `total_with_delivery + vat`.
    pub grand_total: f64,
}

/// Formats a monetary amount with exactly two decimals (`4.8` → `"4.80"`).
#[must_use]
pub fn format_amount(value: f64) -> String {
    format!("{value:.2}")
}
