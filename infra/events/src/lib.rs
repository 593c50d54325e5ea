//! # Event Bus
//!
//! A small, type-safe, synchronous observer bus.
//!
//! ## Overview
//!
//! Components register callbacks for an event type and get a [`Subscription`] guard back.
//! Publishing runs every callback registered for that type, in subscription order, on the
//! caller's thread. Dropping the guard unregisters the callback.
//!
//! ## Features
//!
//! * **Type-Safe**: Events are identified by their Rust type.
//! * **Re-entrant**: Callbacks run outside the registry lock and may publish or subscribe.
//! * **Cheap handles**: `FxHashMap` + `parking_lot::RwLock` behind an `Arc`.
//!
//! # Example
//!
//! ```rust
//! use basket_event_bus::{EventBus, EventBusError};
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicU64, Ordering};
//!
//! struct ItemAdded { id: u64 }
//!
//! fn main() -> Result<(), EventBusError> {
//!     let bus = EventBus::new();
//!     let seen = Arc::new(AtomicU64::new(0));
//!
//!     let sink = Arc::clone(&seen);
//!     let _sub = bus.subscribe(move |event: &ItemAdded| sink.store(event.id, Ordering::SeqCst));
//!
//!     assert_eq!(bus.publish(&ItemAdded { id: 42 })?, 1);
//!     assert_eq!(seen.load(Ordering::SeqCst), 42);
//!     Ok(())
//! }
//! ```

mod bus;
mod error;

pub use bus::{Event, EventBus, Subscription, SubscriptionId};
pub use error::{EventBusError, EventBusErrorExt};
