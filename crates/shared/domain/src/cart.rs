use crate::constants::{MAX_QUANTITY, MIN_QUANTITY};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Product reference code (e.g. `5K96`). Unique within a cart.
///
/// Always trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Reference(String);

impl Reference {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Reference {
    type Error = &'static str;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err("reference must not be empty");
        }
        if trimmed.len() == value.len() {
            Ok(Self(value))
        } else {
            Ok(Self(trimmed.to_owned()))
        }
    }
}

impl TryFrom<&str> for Reference {
    type Error = &'static str;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_from(value.to_owned())
    }
}

impl From<Reference> for String {
    fn from(value: Reference) -> Self {
        value.0
    }
}

impl PartialEq<str> for Reference {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Reference {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Borrow<str> for Reference {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Reference {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Price of one unit. Finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct UnitPrice(f64);

impl UnitPrice {
    #[must_use]
    pub fn new(value: f64) -> Option<Self> {
        (value.is_finite() && value >= 0.0).then_some(Self(value))
    }

    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for UnitPrice {
    type Error = &'static str;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value).ok_or("unit price must be a finite, non-negative number")
    }
}

impl From<UnitPrice> for f64 {
    fn from(value: UnitPrice) -> Self {
        value.0
    }
}

impl fmt::Display for UnitPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Units of a product in the cart, always within `1..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Quantity(u8);

impl Quantity {
    pub const MIN: Self = Self(MIN_QUANTITY);
    pub const MAX: Self = Self(MAX_QUANTITY);

    /// Accepts only values already inside the allowed range.
    #[must_use]
    pub fn try_new(value: i64) -> Option<Self> {
        u8::try_from(value)
            .ok()
            .filter(|v| (MIN_QUANTITY..=MAX_QUANTITY).contains(v))
            .map(Self)
    }

    /// Pulls any integer into the allowed range.
    #[must_use]
    pub fn clamped(value: i64) -> Self {
        let clamped = value.clamp(i64::from(MIN_QUANTITY), i64::from(MAX_QUANTITY));
        Self(u8::try_from(clamped).unwrap_or(MAX_QUANTITY))
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::MIN
    }
}

impl TryFrom<i64> for Quantity {
    type Error = &'static str;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::try_new(value).ok_or("quantity must be an integer between 1 and 10")
    }
}

impl From<Quantity> for u8 {
    fn from(value: Quantity) -> Self {
        value.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One product line of the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub reference: Reference,
    pub name: String,
    pub unit_price: UnitPrice,
    pub quantity: Quantity,
}

impl LineItem {
    #[must_use]
    pub fn new(
        reference: Reference,
        name: impl Into<String>,
        unit_price: UnitPrice,
        quantity: Quantity,
    ) -> Self {
        Self { reference, name: name.into(), unit_price, quantity }
    }

    /// `unit_price × quantity`.
    #[must_use]
    pub fn line_price(&self) -> f64 {
        self.unit_price.value() * f64::from(self.quantity.get())
    }
}

/// Ordered list of line items with unique references.
///
/// Serializes as a plain JSON array; deserialization rejects duplicate references.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<LineItem>", into = "Vec<LineItem>")]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Demonstration cart used on first launch.
    #[must_use]
    pub fn sample() -> Self {
        let rows: [(&str, &str, f64, u8); 3] =
            [("5K96", "Savon", 6.0, 4), ("98Y3", "Coquillette", 3.0, 8), ("365D", "Yaourt nature", 8.0, 2)];

        let items = rows
            .into_iter()
            .map(|(reference, name, price, quantity)| LineItem {
                reference: Reference(reference.to_owned()),
                name: name.to_owned(),
                unit_price: UnitPrice(price),
                quantity: Quantity(quantity),
            })
            .collect();

        Self { items }
    }

    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LineItem> {
        self.items.iter()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn position(&self, reference: &str) -> Option<usize> {
        self.items.iter().position(|item| item.reference == reference)
    }

    #[must_use]
    pub fn contains(&self, reference: &str) -> bool {
        self.position(reference).is_some()
    }

    #[must_use]
    pub fn get(&self, reference: &str) -> Option<&LineItem> {
        self.items.iter().find(|item| item.reference == reference)
    }

    pub fn get_mut(&mut self, reference: &str) -> Option<&mut LineItem> {
        self.items.iter_mut().find(|item| item.reference == reference)
    }

    /// Appends `item`, handing it back if its reference is already present.
    ///
    /// # Errors
    ///
    /// Returns the rejected item when the reference is a duplicate.
    pub fn push(&mut self, item: LineItem) -> Result<(), LineItem> {
        if self.contains(item.reference.as_str()) {
            return Err(item);
        }
        self.items.push(item);
        Ok(())
    }

    /// Removes and returns the line with `reference`, preserving the order of the rest.
    pub fn remove(&mut self, reference: &str) -> Option<LineItem> {
        let index = self.position(reference)?;
        Some(self.items.remove(index))
    }
}

impl TryFrom<Vec<LineItem>> for Cart {
    type Error = String;

    fn try_from(items: Vec<LineItem>) -> Result<Self, Self::Error> {
        let mut cart = Self { items: Vec::with_capacity(items.len()) };
        for item in items {
            cart.push(item).map_err(|dup| format!("duplicate reference '{}'", dup.reference))?;
        }
        Ok(cart)
    }
}

impl From<Cart> for Vec<LineItem> {
    fn from(cart: Cart) -> Self {
        cart.items
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a LineItem;
    type IntoIter = std::slice::Iter<'a, LineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
