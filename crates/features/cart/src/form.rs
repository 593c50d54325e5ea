//! Structured product entry.
//!
//! The four fields arrive as raw widget text. [`ProductForm::validate`] trims them and either
//! produces a typed [`LineItem`] or a [`FormError`] that lists every failing field at once.

use basket_domain::{LineItem, Quantity, Reference, UnitPrice};
use std::fmt;
use strum::Display;

/// Raw text of the "add product" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub reference: String,
    pub name: String,
    pub unit_price: String,
    pub quantity: String,
}

/// Form fields, named the way the notice shows them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum FormField {
    #[strum(serialize = "reference")]
    Reference,
    #[strum(serialize = "name")]
    Name,
    #[strum(serialize = "unit price")]
    UnitPrice,
    #[strum(serialize = "quantity")]
    Quantity,
}

/// One failing field and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FormField,
    pub reason: &'static str,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.reason)
    }
}

/// Every field that failed validation, in form order. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormError {
    fields: Vec<FieldError>,
}

impl FormError {
    #[must_use]
    pub fn fields(&self) -> &[FieldError] {
        &self.fields
    }

    #[must_use]
    pub fn has(&self, field: FormField) -> bool {
        self.fields.iter().any(|e| e.field == field)
    }
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for FormError {}

impl ProductForm {
    #[must_use]
    pub fn new(
        reference: impl Into<String>,
        name: impl Into<String>,
        unit_price: impl Into<String>,
        quantity: impl Into<String>,
    ) -> Self {
        Self {
            reference: reference.into(),
            name: name.into(),
            unit_price: unit_price.into(),
            quantity: quantity.into(),
        }
    }

    /// Validates the raw text into a [`LineItem`].
    ///
    /// # Errors
    /// Returns a [`FormError`] naming every field that is missing or malformed.
    pub fn validate(&self) -> Result<LineItem, FormError> {
        let mut fields = Vec::new();
        let mut fail = |field, reason| fields.push(FieldError { field, reason });

        let reference = Reference::try_from(self.reference.as_str()).ok();
        if reference.is_none() {
            fail(FormField::Reference, "is required");
        }

        let name = self.name.trim();
        if name.is_empty() {
            fail(FormField::Name, "is required");
        }

        let unit_price = self.unit_price.trim().parse::<f64>().ok().and_then(UnitPrice::new);
        if unit_price.is_none() {
            fail(FormField::UnitPrice, "must be a number greater than or equal to 0");
        }

        let quantity = self.quantity.trim().parse::<i64>().ok().and_then(Quantity::try_new);
        if quantity.is_none() {
            fail(FormField::Quantity, "must be an integer between 1 and 10");
        }

        match (reference, unit_price, quantity) {
            (Some(reference), Some(unit_price), Some(quantity)) if fields.is_empty() => {
                Ok(LineItem::new(reference, name, unit_price, quantity))
            }
            _ => Err(FormError { fields }),
        }
    }

    /// Empties every field, ready for the next entry.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
