//! # Domain Models
//!
//! Pure cart types with minimal dependencies (`serde`, `strum`).
//! Keep it lean: no I/O and no behavior beyond the invariants the types enforce.
//! Validated constructors return `Option`/`&'static str` errors; richer errors live in the
//! feature crates.

pub mod cart;
pub mod config;
pub mod constants;
pub mod delivery;
pub mod totals;

pub use cart::{Cart, LineItem, Quantity, Reference, UnitPrice};
pub use delivery::DeliveryMode;
pub use totals::{Totals, format_amount};
