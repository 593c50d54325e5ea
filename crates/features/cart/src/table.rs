//! Table view model and its redraw bookkeeping.
//!
//! The renderer keeps the last drawn [`TableView`] and one binding per row, keyed by
//! reference and re-registered on every full render. Store mutations reach it as
//! [`CartEvent`]s; pending redraws are coalesced and applied by [`TableRenderer::refresh`].

use crate::error::CartError;
use crate::events::{CartEvent, Redraw};
use crate::store::CartStore;
use basket_domain::{DeliveryMode, LineItem, Quantity, Reference, Totals, format_amount};
use basket_event_bus::{EventBus, Subscription};
use fxhash::FxHashMap;
use parking_lot::Mutex;
use std::num::IntErrorKind;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, trace};

/// One drawn table row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub reference: Reference,
    pub name: String,
    pub unit_price: f64,
    pub quantity: Quantity,
    pub line_price: f64,
    /// Bumped on every partial redraw of this row, reset by a full render. Widgets key
    /// row inputs on it so an edit the store clamped still shows the stored quantity.
    pub revision: u64,
}

impl RowView {
    fn from_line(line: &LineItem) -> Self {
        Self {
            reference: line.reference.clone(),
            name: line.name.clone(),
            unit_price: line.unit_price.value(),
            quantity: line.quantity,
            line_price: line.line_price(),
            revision: 0,
        }
    }

    #[must_use]
    pub fn unit_price_text(&self) -> String {
        format_amount(self.unit_price)
    }

    #[must_use]
    pub fn line_price_text(&self) -> String {
        format_amount(self.line_price)
    }
}

/// Totals footer together with the selected delivery mode.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FooterView {
    pub mode: DeliveryMode,
    pub totals: Totals,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableView {
    pub rows: Vec<RowView>,
    pub footer: FooterView,
}

/// User interaction on a drawn row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowAction {
    /// Raw text of the quantity input.
    SetQuantity { reference: Reference, input: String },
    Delete { reference: Reference },
}

impl RowAction {
    #[must_use]
    pub const fn reference(&self) -> &Reference {
        match self {
            Self::SetQuantity { reference, .. } | Self::Delete { reference } => reference,
        }
    }
}

/// Redraw counters since the renderer was created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub full: u64,
    pub rows: u64,
    pub footer: u64,
}

#[derive(Debug)]
pub struct TableRenderer {
    view: TableView,
    bindings: FxHashMap<Reference, usize>,
    pending: Arc<Mutex<Option<Redraw>>>,
    stats: RenderStats,
    _subscription: Subscription,
}

impl TableRenderer {
    /// Creates a renderer listening for [`CartEvent`]s on `events`. Nothing is drawn yet.
    #[must_use]
    pub fn new(events: &EventBus) -> Self {
        let pending: Arc<Mutex<Option<Redraw>>> = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&pending);

        let subscription = events.subscribe(move |event: &CartEvent| {
            let mut slot = sink.lock();
            let next = event.redraw();
            *slot = Some(match slot.take() {
                Some(current) => current.merge(next),
                None => next,
            });
        });

        Self {
            view: TableView::default(),
            bindings: FxHashMap::default(),
            pending,
            stats: RenderStats::default(),
            _subscription: subscription,
        }
    }

    #[must_use]
    pub const fn view(&self) -> &TableView {
        &self.view
    }

    #[must_use]
    pub const fn stats(&self) -> RenderStats {
        self.stats
    }

    /// Whether a row for `reference` was registered by the last full render.
    #[must_use]
    pub fn is_bound(&self, reference: &str) -> bool {
        self.bindings.contains_key(reference)
    }

    /// Redraw waiting to be applied, if any.
    #[must_use]
    pub fn pending(&self) -> Option<Redraw> {
        self.pending.lock().clone()
    }

    /// Rebuilds every row and the footer, re-registering row bindings.
    pub fn render(&mut self, store: &CartStore) -> &TableView {
        self.pending.lock().take();

        self.view.rows = store.cart().iter().map(RowView::from_line).collect();
        self.bindings = self
            .view
            .rows
            .iter()
            .enumerate()
            .map(|(index, row)| (row.reference.clone(), index))
            .collect();
        self.draw_footer(store);

        self.stats.full += 1;
        trace!(rows = self.view.rows.len(), "Table rendered");
        &self.view
    }

    /// Applies whatever the store reported since the last draw. Returns what was redrawn.
    pub fn refresh(&mut self, store: &CartStore) -> Option<Redraw> {
        let redraw = self.pending.lock().take()?;

        match &redraw {
            Redraw::Full => {
                self.render(store);
            }
            Redraw::Rows(references) => {
                if !self.draw_rows(store, references) {
                    debug!("Row binding out of date, rebuilding table");
                    self.render(store);
                    return Some(Redraw::Full);
                }
                self.draw_footer(store);
                self.stats.rows += 1;
            }
            Redraw::Footer => {
                self.draw_footer(store);
                self.stats.footer += 1;
            }
        }

        Some(redraw)
    }

    /// Routes a row action into the store and redraws what changed.
    ///
    /// # Errors
    /// * [`CartError::UnknownRow`] if no row is bound to the action's reference.
    /// * [`CartError::InvalidInput`] if the quantity text is not an integer.
    /// * [`CartError::ItemNotFound`] if the store lost the line behind a bound row.
    pub fn dispatch(
        &mut self,
        store: &mut CartStore,
        action: RowAction,
    ) -> Result<Option<Redraw>, CartError> {
        if !self.is_bound(action.reference().as_str()) {
            return Err(CartError::UnknownRow {
                message: format!("no row bound to '{}'", action.reference()).into(),
                context: None,
            });
        }

        match action {
            RowAction::SetQuantity { reference, input } => {
                let quantity = parse_quantity(&input)?;
                store.set_quantity(reference.as_str(), quantity)?;
            }
            RowAction::Delete { reference } => {
                store.remove(reference.as_str());
            }
        }

        Ok(self.refresh(store))
    }

    /// Selects the delivery mode and refreshes the footer.
    pub fn select_delivery(&mut self, store: &mut CartStore, mode: DeliveryMode) -> Option<Redraw> {
        store.set_delivery_mode(mode);
        self.refresh(store)
    }

    fn draw_rows(&mut self, store: &CartStore, references: &[Reference]) -> bool {
        for reference in references {
            let (Some(&index), Some(line)) =
                (self.bindings.get(reference), store.line(reference.as_str()))
            else {
                return false;
            };
            let Some(row) = self.view.rows.get_mut(index) else {
                return false;
            };
            *row = RowView { revision: row.revision + 1, ..RowView::from_line(line) };
        }
        true
    }

    fn draw_footer(&mut self, store: &CartStore) {
        self.view.footer = FooterView { mode: store.delivery_mode(), totals: store.totals() };
    }
}

/// Reads the raw quantity input. Out-of-range integers are left for the store to clamp.
///
/// # Errors
/// Returns [`CartError::InvalidInput`] for empty or non-integer text.
pub fn parse_quantity(input: &str) -> Result<i64, CartError> {
    match input.trim().parse::<i64>() {
        Ok(value) => Ok(value),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(i64::MAX),
        Err(e) if *e.kind() == IntErrorKind::NegOverflow => Ok(i64::MIN),
        Err(_) => Err(CartError::InvalidInput {
            message: format!("quantity '{input}' is not an integer").into(),
            context: None,
        }),
    }
}

/// Reads the delivery selector value (`relay` / `home`).
///
/// # Errors
/// Returns [`CartError::InvalidInput`] for any other text.
pub fn parse_delivery_mode(input: &str) -> Result<DeliveryMode, CartError> {
    DeliveryMode::from_str(input.trim()).map_err(|_| CartError::InvalidInput {
        message: format!("unknown delivery mode '{input}'").into(),
        context: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity(" 7 ").unwrap(), 7);
        assert_eq!(parse_quantity("-3").unwrap(), -3);
        assert_eq!(parse_quantity("99999999999999999999").unwrap(), i64::MAX);
        assert!(matches!(parse_quantity(""), Err(CartError::InvalidInput { .. })));
        assert!(matches!(parse_quantity("two"), Err(CartError::InvalidInput { .. })));
    }

    #[test]
    fn test_parse_delivery_mode() {
        assert_eq!(parse_delivery_mode("home").unwrap(), DeliveryMode::Home);
        assert_eq!(parse_delivery_mode(" relay").unwrap(), DeliveryMode::Relay);
        assert!(parse_delivery_mode("Home").is_err());
    }
}
