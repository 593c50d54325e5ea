use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// How the order is shipped. Each mode carries a flat fee (see `DeliveryFees`).
///
/// The textual form (`relay` / `home`) is what the delivery selector submits.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DeliveryMode {
    #[default]
    Relay,
    Home,
}

impl DeliveryMode {
    /// Human-readable label for selectors.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Relay => "Relay point",
            Self::Home => "Home delivery",
        }
    }
}
