use crate::error::EventBusError;
use fxhash::FxHashMap;
use parking_lot::RwLock;
use std::any::{Any, TypeId};
use std::sync::{Arc, Weak};
use tracing::trace;

/// Marker trait for types that can be sent across the [`EventBus`].
///
/// Any type that is `Send + Sync + 'static` automatically implements this trait.
pub trait Event: Any + Send + Sync + 'static {}
impl<T: Any + Send + Sync + 'static> Event for T {}

type Handler<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Identifies one registered callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId {
    event: TypeId,
    seq: u64,
}

#[derive(Debug)]
struct Listener {
    seq: u64,
    /// Always a `Handler<T>` for the `T` this listener is filed under.
    handler: Box<dyn Any + Send + Sync>,
}

#[derive(Debug, Default)]
struct Registry {
    listeners: FxHashMap<TypeId, Vec<Listener>>,
    next_seq: u64,
}

impl Registry {
    fn remove(&mut self, id: SubscriptionId) -> bool {
        let Some(listeners) = self.listeners.get_mut(&id.event) else {
            return false;
        };
        let before = listeners.len();
        listeners.retain(|l| l.seq != id.seq);
        let removed = listeners.len() != before;
        if listeners.is_empty() {
            self.listeners.remove(&id.event);
        }
        removed
    }
}

/// A thread-safe, synchronous observer bus.
///
/// Callbacks are indexed by the [`TypeId`] of the event. Cloning the bus yields another
/// handle to the same registry.
#[derive(Debug, Clone, Default)]
pub struct EventBus {
    registry: Arc<RwLock<Registry>>,
}

impl EventBus {
    /// Creates a new, empty `EventBus`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for events of type `T`.
    ///
    /// The callback stays registered for as long as the returned [`Subscription`] lives
    /// (or forever after [`Subscription::detach`]).
    ///
    /// # Examples
    /// ```rust
    /// use basket_event_bus::EventBus;
    ///
    /// struct Tick(u64);
    ///
    /// let bus = EventBus::new();
    /// let sub = bus.subscribe(|tick: &Tick| assert!(tick.0 > 0));
    /// assert_eq!(bus.listeners::<Tick>(), 1);
    /// drop(sub);
    /// assert_eq!(bus.listeners::<Tick>(), 0);
    /// ```
    #[must_use = "The callback is unregistered as soon as the subscription is dropped"]
    pub fn subscribe<T, F>(&self, handler: F) -> Subscription
    where
        T: Event,
        F: Fn(&T) + Send + Sync + 'static,
    {
        let event = TypeId::of::<T>();
        let handler: Handler<T> = Arc::new(handler);

        let seq = {
            let mut registry = self.registry.write();
            registry.next_seq += 1;
            let seq = registry.next_seq;
            registry
                .listeners
                .entry(event)
                .or_default()
                .push(Listener { seq, handler: Box::new(handler) });
            seq
        };

        trace!(event = std::any::type_name::<T>(), seq, "Listener registered");

        Subscription {
            id: SubscriptionId { event, seq },
            registry: Arc::downgrade(&self.registry),
            detached: false,
        }
    }

    /// Invokes every callback registered for `T` and returns how many ran.
    ///
    /// Callbacks are collected under a read lock and run after it is released.
    ///
    /// # Errors
    /// Returns [`EventBusError::TypeMismatch`] if the registry holds a callback of the wrong
    /// type under `T`'s key. Nothing is invoked in that case.
    pub fn publish<T: Event>(&self, event: &T) -> Result<usize, EventBusError> {
        let handlers = {
            let registry = self.registry.read();
            let Some(listeners) = registry.listeners.get(&TypeId::of::<T>()) else {
                trace!(event = std::any::type_name::<T>(), "Event dropped: no listeners");
                return Ok(0);
            };

            listeners
                .iter()
                .map(|l| {
                    l.handler.downcast_ref::<Handler<T>>().cloned().ok_or_else(|| {
                        EventBusError::TypeMismatch {
                            message: std::any::type_name::<T>().into(),
                            context: Some("Unexpected listener type".into()),
                        }
                    })
                })
                .collect::<Result<Vec<_>, _>>()?
        };

        for handler in &handlers {
            handler(event);
        }

        trace!(event = std::any::type_name::<T>(), count = handlers.len(), "Event dispatched");
        Ok(handlers.len())
    }

    /// Removes a callback by id.
    ///
    /// # Errors
    /// Returns [`EventBusError::SubscriptionNotFound`] if the callback is not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> Result<(), EventBusError> {
        if self.registry.write().remove(id) {
            trace!(seq = id.seq, "Listener removed");
            Ok(())
        } else {
            Err(EventBusError::SubscriptionNotFound {
                message: format!("subscription #{}", id.seq).into(),
                context: None,
            })
        }
    }

    /// Number of callbacks currently registered for `T`.
    #[must_use]
    pub fn listeners<T: Event>(&self) -> usize {
        self.registry.read().listeners.get(&TypeId::of::<T>()).map_or(0, Vec::len)
    }

    /// Drops every registered callback.
    ///
    /// Returns the number of event types that had listeners.
    #[must_use]
    pub fn shutdown(&self) -> usize {
        let mut registry = self.registry.write();
        let count = registry.listeners.len();
        registry.listeners.clear();
        count
    }
}

/// Guard for a registered callback; unregisters it on drop.
#[derive(Debug)]
pub struct Subscription {
    id: SubscriptionId,
    registry: Weak<RwLock<Registry>>,
    detached: bool,
}

impl Subscription {
    #[must_use]
    pub const fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Keeps the callback registered for the lifetime of the bus.
    ///
    /// The returned id can still be passed to [`EventBus::unsubscribe`].
    pub fn detach(mut self) -> SubscriptionId {
        self.detached = true;
        self.id
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if self.detached {
            return;
        }
        if let Some(registry) = self.registry.upgrade() {
            registry.write().remove(self.id);
        }
    }
}
