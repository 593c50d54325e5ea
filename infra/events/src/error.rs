use std::borrow::Cow;

/// Errors that can occur during event bus operations.
#[basket_derive::basket_error]
pub enum EventBusError {
    /// A registered callback does not match the event type it is filed under.
    /// This indicates an invariant violation in the type registry.
    #[error("Type mismatch{}: {message}", format_context(.context))]
    TypeMismatch { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The subscription was already removed (or never existed on this bus).
    #[error("Subscription not found{}: {message}", format_context(.context))]
    SubscriptionNotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
