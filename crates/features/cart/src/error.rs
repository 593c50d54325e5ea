use crate::form::FormError;
use basket_event_bus::EventBusError;
use basket_storage::StorageError;
use std::borrow::Cow;

/// Error types specific to the cart feature.
#[basket_derive::basket_error]
pub enum CartError {
    /// An item with the same reference is already in the cart.
    #[error("Duplicate reference{}: {message}", format_context(.context))]
    DuplicateReference { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Item not found{}: {message}", format_context(.context))]
    ItemNotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A row action addressed a reference with no registered row binding.
    #[error("Unknown table row{}: {message}", format_context(.context))]
    UnknownRow { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Raw widget input that cannot be interpreted (quantity text, delivery mode).
    #[error("Invalid input{}: {message}", format_context(.context))]
    InvalidInput { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Invalid product{}: {source}", format_context(.context))]
    Form { source: FormError, context: Option<Cow<'static, str>> },

    /// Persisted data does not describe a valid cart.
    #[error("Corrupt cart state{}: {source}", format_context(.context))]
    CorruptState { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Cart storage error{}: {source}", format_context(.context))]
    Storage { source: StorageError, context: Option<Cow<'static, str>> },

    #[error("Cart event error{}: {source}", format_context(.context))]
    EventBus { source: EventBusError, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal cart error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
