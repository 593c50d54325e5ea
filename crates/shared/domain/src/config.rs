use crate::constants::{CART_KEY, HOME_FEE, RELAY_FEE, VAT_RATE};
use crate::delivery::DeliveryMode;
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level application configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BasketConfigInner {
    pub pricing: PricingConfig,
    pub storage: StorageConfig,
    pub log: LogConfig,
    pub window: WindowConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct BasketConfig {
    #[serde(flatten, default)]
    inner: Arc<BasketConfigInner>,
}

impl Deref for BasketConfig {
    type Target = BasketConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for BasketConfig {
    fn deref_mut(&mut self) -> &mut BasketConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Tax rate and delivery fees used by the totals calculator.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    pub vat_rate: f64,
    pub delivery: DeliveryFees,
}

/// Flat fee per delivery mode.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct DeliveryFees {
    pub relay: f64,
    pub home: f64,
}

impl DeliveryFees {
    #[must_use]
    pub const fn fee(&self, mode: DeliveryMode) -> f64 {
        match mode {
            DeliveryMode::Relay => self.relay,
            DeliveryMode::Home => self.home,
        }
    }
}

/// Where the cart is persisted and whether mutations save automatically.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
    pub cart_key: String,
    pub autosave: bool,
}

/// Logger settings; `directory: None` keeps logging on the console only.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub directory: Option<PathBuf>,
    pub json: bool,
}

/// Desktop window geometry.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

// --- Default ---

impl Default for PricingConfig {
    fn default() -> Self {
        Self { vat_rate: VAT_RATE, delivery: DeliveryFees::default() }
    }
}

impl Default for DeliveryFees {
    fn default() -> Self {
        Self { relay: RELAY_FEE, home: HOME_FEE }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { data_dir: PathBuf::from(".basket"), cart_key: CART_KEY.to_owned(), autosave: true }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), directory: None, json: false }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self { title: "Basket".to_owned(), width: 960.0, height: 640.0 }
    }
}
