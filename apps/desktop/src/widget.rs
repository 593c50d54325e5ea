use basket::Session;
use basket::cart::{CartError, ProductForm, RowAction, TableView, parse_delivery_mode};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::debug;

/// Cloneable handle the components use to drive the session.
///
/// Every operation returns the table view as it stands afterwards.
#[derive(Debug, Clone)]
pub struct Widget {
    session: Arc<Mutex<Session>>,
}

impl Widget {
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self { session: Arc::new(Mutex::new(session)) }
    }

    #[must_use]
    pub fn view(&self) -> TableView {
        self.session.lock().table.view().clone()
    }

    /// Applies a quantity edit or a delete from a table row.
    ///
    /// # Errors
    /// Whatever [`basket::cart::TableRenderer::dispatch`] reports.
    pub fn dispatch(&self, action: RowAction) -> Result<TableView, CartError> {
        let mut guard = self.session.lock();
        let Session { store, table, .. } = &mut *guard;

        let redraw = table.dispatch(store, action)?;
        debug!(?redraw, "Row action applied");
        Ok(table.view().clone())
    }

    /// Applies the raw delivery selector value.
    ///
    /// # Errors
    /// Returns [`CartError::InvalidInput`] for an unknown mode.
    pub fn select_delivery(&self, input: &str) -> Result<TableView, CartError> {
        let mode = parse_delivery_mode(input)?;
        let mut guard = self.session.lock();
        let Session { store, table, .. } = &mut *guard;

        table.select_delivery(store, mode);
        Ok(table.view().clone())
    }

    /// Validates the form and appends the product.
    ///
    /// # Errors
    /// Returns [`CartError::Form`] or [`CartError::DuplicateReference`]; the cart is unchanged.
    pub fn add_product(&self, form: &ProductForm) -> Result<TableView, CartError> {
        let mut guard = self.session.lock();
        let Session { store, table, .. } = &mut *guard;

        let reference = store.add_from_form(form)?;
        table.refresh(store);
        debug!(%reference, "Product added from form");
        Ok(table.view().clone())
    }

    /// Forgets the saved cart and shows the sample cart again.
    ///
    /// # Errors
    /// Returns [`CartError::Storage`] if the saved cart cannot be removed.
    pub fn reset(&self) -> Result<TableView, CartError> {
        let mut guard = self.session.lock();
        let Session { store, table, .. } = &mut *guard;

        store.reset()?;
        table.refresh(store);
        Ok(table.view().clone())
    }
}

/// Text for the blocking notice: the user-facing part of the error only.
#[must_use]
pub fn notice_text(error: &CartError) -> String {
    match error {
        CartError::Form { source, .. } => format!("Invalid product: {source}."),
        CartError::DuplicateReference { message, .. }
        | CartError::InvalidInput { message, .. }
        | CartError::ItemNotFound { message, .. }
        | CartError::UnknownRow { message, .. } => {
            let mut text = message.to_string();
            if let Some(first) = text.get_mut(..1) {
                first.make_ascii_uppercase();
            }
            format!("{text}.")
        }
        other => other.to_string(),
    }
}
