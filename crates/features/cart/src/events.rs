use basket_domain::{DeliveryMode, Quantity, Reference};

/// Published on the event bus after every cart mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    /// The in-memory cart was replaced by the persisted one.
    Loaded { items: usize },
    /// The persisted cart was dropped and the sample cart restored.
    Reset { items: usize },
    ItemAdded { reference: Reference },
    ItemRemoved { reference: Reference },
    QuantityChanged { reference: Reference, quantity: Quantity },
    DeliveryModeChanged { mode: DeliveryMode },
}

impl CartEvent {
    /// What the table has to refresh for this change.
    #[must_use]
    pub fn redraw(&self) -> Redraw {
        match self {
            Self::Loaded { .. }
            | Self::Reset { .. }
            | Self::ItemAdded { .. }
            | Self::ItemRemoved { .. } => Redraw::Full,
            Self::QuantityChanged { reference, .. } => Redraw::Rows(vec![reference.clone()]),
            Self::DeliveryModeChanged { .. } => Redraw::Footer,
        }
    }

    /// Whether the change has to be written back. Delivery mode lives in memory only and a
    /// reset leaves nothing persisted.
    #[must_use]
    pub const fn is_persistent(&self) -> bool {
        !matches!(self, Self::DeliveryModeChanged { .. } | Self::Reset { .. })
    }
}

/// Redraw scope, ordered from narrowest to widest.
///
/// `Rows` always includes the footer, since a line price change moves every total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Redraw {
    Footer,
    Rows(Vec<Reference>),
    Full,
}

impl Redraw {
    /// Combines two pending redraws into one that covers both.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        match (self, other) {
            (Self::Full, _) | (_, Self::Full) => Self::Full,
            (Self::Rows(mut rows), Self::Rows(more)) => {
                for reference in more {
                    if !rows.contains(&reference) {
                        rows.push(reference);
                    }
                }
                Self::Rows(rows)
            }
            (Self::Rows(rows), Self::Footer) | (Self::Footer, Self::Rows(rows)) => Self::Rows(rows),
            (Self::Footer, Self::Footer) => Self::Footer,
        }
    }
}
