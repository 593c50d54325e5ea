use basket_domain::config::PricingConfig;
use basket_domain::{Cart, DeliveryMode, LineItem, Totals};

/// Derives [`Totals`] from a cart and a delivery mode.
///
/// VAT is charged on the pre-delivery subtotal; the delivery fee is added untaxed.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TotalsCalculator {
    pricing: PricingConfig,
}

impl TotalsCalculator {
    #[must_use]
    pub const fn new(pricing: PricingConfig) -> Self {
        Self { pricing }
    }

    #[must_use]
    pub const fn pricing(&self) -> &PricingConfig {
        &self.pricing
    }

    #[must_use]
    pub fn compute(&self, cart: &Cart, mode: DeliveryMode) -> Totals {
        let subtotal: f64 = cart.iter().map(LineItem::line_price).sum();
        let vat = subtotal * self.pricing.vat_rate;
        let delivery_fee = self.pricing.delivery.fee(mode);
        let total_with_delivery = subtotal + delivery_fee;

        Totals { subtotal, vat, delivery_fee, total_with_delivery, grand_total: total_with_delivery + vat }
    }
}
