use crate::error::{CartError, CartErrorExt};
use crate::events::CartEvent;
use crate::form::ProductForm;
use crate::repository::CartRepository;
use crate::totals::TotalsCalculator;
use basket_domain::config::PricingConfig;
use basket_domain::{Cart, DeliveryMode, LineItem, Quantity, Reference, Totals};
use basket_event_bus::EventBus;
use tracing::{debug, info, warn};

/// Owner of the cart and the selected delivery mode.
///
/// Every mutation publishes a [`CartEvent`] and, with autosave on, persists the cart.
/// A failed autosave is logged and the mutation is kept.
#[derive(Debug)]
pub struct CartStore {
    cart: Cart,
    mode: DeliveryMode,
    calculator: TotalsCalculator,
    repository: CartRepository,
    events: EventBus,
    autosave: bool,
}

impl CartStore {
    /// Creates a store holding an empty cart, relay delivery and default pricing.
    #[must_use]
    pub fn new(repository: CartRepository, events: EventBus) -> Self {
        Self {
            cart: Cart::new(),
            mode: DeliveryMode::default(),
            calculator: TotalsCalculator::default(),
            repository,
            events,
            autosave: true,
        }
    }

    /// Replaces the initial cart without publishing or saving.
    #[must_use]
    pub fn with_cart(mut self, cart: Cart) -> Self {
        self.cart = cart;
        self
    }

    #[must_use]
    pub fn with_pricing(mut self, pricing: PricingConfig) -> Self {
        self.calculator = TotalsCalculator::new(pricing);
        self
    }

    #[must_use]
    pub fn with_autosave(mut self, autosave: bool) -> Self {
        self.autosave = autosave;
        self
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub const fn delivery_mode(&self) -> DeliveryMode {
        self.mode
    }

    #[must_use]
    pub const fn events(&self) -> &EventBus {
        &self.events
    }

    #[must_use]
    pub const fn pricing(&self) -> &PricingConfig {
        self.calculator.pricing()
    }

    #[must_use]
    pub fn line(&self, reference: &str) -> Option<&LineItem> {
        self.cart.get(reference)
    }

    /// Appends a validated item.
    ///
    /// # Errors
    /// Returns [`CartError::DuplicateReference`] if the reference is already present; the cart
    /// is left unchanged.
    pub fn add(&mut self, item: LineItem) -> Result<(), CartError> {
        let reference = item.reference.clone();
        self.cart.push(item).map_err(|rejected| CartError::DuplicateReference {
            message: format!("'{}' is already in the cart", rejected.reference).into(),
            context: None,
        })?;

        debug!(%reference, items = self.cart.len(), "Item added");
        self.commit(CartEvent::ItemAdded { reference });
        Ok(())
    }

    /// Validates `form` and appends the resulting item.
    ///
    /// # Errors
    /// * [`CartError::Form`] listing every invalid field.
    /// * [`CartError::DuplicateReference`] as for [`CartStore::add`].
    pub fn add_from_form(&mut self, form: &ProductForm) -> Result<Reference, CartError> {
        let item = form.validate().context("Add product")?;
        let reference = item.reference.clone();
        self.add(item)?;
        Ok(reference)
    }

    /// Drops the line with `reference`. An absent reference is a no-op returning `None`.
    pub fn remove(&mut self, reference: &str) -> Option<LineItem> {
        let removed = self.cart.remove(reference)?;

        debug!(reference = %removed.reference, items = self.cart.len(), "Item removed");
        self.commit(CartEvent::ItemRemoved { reference: removed.reference.clone() });
        Some(removed)
    }

    /// Sets the quantity of a line, clamped into `1..=10`. Returns the stored value.
    ///
    /// # Errors
    /// Returns [`CartError::ItemNotFound`] for an unknown reference.
    pub fn set_quantity(&mut self, reference: &str, quantity: i64) -> Result<Quantity, CartError> {
        let Some(line) = self.cart.get_mut(reference) else {
            return Err(CartError::ItemNotFound {
                message: format!("no line with reference '{reference}'").into(),
                context: Some("Set quantity".into()),
            });
        };

        let clamped = Quantity::clamped(quantity);
        if i64::from(clamped.get()) != quantity {
            debug!(%reference, requested = quantity, stored = clamped.get(), "Quantity clamped");
        }
        line.quantity = clamped;
        let reference = line.reference.clone();

        self.commit(CartEvent::QuantityChanged { reference, quantity: clamped });
        Ok(clamped)
    }

    pub fn set_delivery_mode(&mut self, mode: DeliveryMode) {
        self.mode = mode;
        debug!(%mode, "Delivery mode selected");
        self.commit(CartEvent::DeliveryModeChanged { mode });
    }

    /// Replaces the in-memory cart with the persisted one, if any.
    ///
    /// Returns whether a persisted cart was found.
    ///
    /// # Errors
    /// * [`CartError::CorruptState`] if the persisted value is not a valid cart. The in-memory
    ///   cart is left untouched.
    /// * [`CartError::Storage`] if the store cannot be read.
    pub fn load(&mut self) -> Result<bool, CartError> {
        let Some(cart) = self.repository.load()? else {
            info!(key = %self.repository.key(), "No persisted cart, keeping current one");
            return Ok(false);
        };

        self.cart = cart;
        info!(key = %self.repository.key(), items = self.cart.len(), "Cart loaded");
        self.publish(&CartEvent::Loaded { items: self.cart.len() });
        Ok(true)
    }

    /// Drops the persisted cart and restores the sample cart. The delivery mode is kept.
    ///
    /// Returns whether a persisted cart existed.
    ///
    /// # Errors
    /// Returns [`CartError::Storage`] if the persisted cart cannot be removed. The in-memory
    /// cart is left untouched.
    pub fn reset(&mut self) -> Result<bool, CartError> {
        let existed = self.repository.clear()?;

        self.cart = Cart::sample();
        info!(key = %self.repository.key(), existed, "Cart reset to sample");
        self.publish(&CartEvent::Reset { items: self.cart.len() });
        Ok(existed)
    }

    /// Persists the current cart.
    ///
    /// # Errors
    /// Returns [`CartError::Storage`] if the write fails.
    pub fn save(&self) -> Result<(), CartError> {
        self.repository.save(&self.cart)
    }

    #[must_use]
    pub fn totals(&self) -> Totals {
        self.calculator.compute(&self.cart, self.mode)
    }

    fn commit(&self, event: CartEvent) {
        if self.autosave && event.is_persistent() {
            if let Err(e) = self.save() {
                warn!(error = %e, "Autosave failed; change kept in memory");
            }
        }
        self.publish(&event);
    }

    fn publish(&self, event: &CartEvent) {
        if let Err(e) = self.events.publish(event) {
            warn!(error = %e, "Cart event was not delivered");
        }
    }
}
