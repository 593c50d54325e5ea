use crate::error::StorageError;
use crate::key::StorageKey;
use std::fmt::Debug;
use std::sync::Arc;

/// A string-keyed, string-valued store scoped to one profile.
///
/// This is the seam between persistence adapters and the physical medium. Writes are
/// "last write wins"; there is no versioning or cross-key transaction.
pub trait KeyValueStore: Debug + Send + Sync {
    /// Returns the value stored under `key`, or `None` if nothing is stored.
    ///
    /// # Errors
    /// Returns [`StorageError::Io`] on read failure or [`StorageError::Encoding`] if the
    /// stored bytes are not UTF-8.
    fn get(&self, key: &StorageKey) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    /// Returns [`StorageError::Io`] if the value cannot be written.
    fn set(&self, key: &StorageKey, value: &str) -> Result<(), StorageError>;

    /// Removes `key`. Returns `true` if a value was present.
    ///
    /// # Errors
    /// Returns [`StorageError::Io`] if the value exists but cannot be removed.
    fn remove(&self, key: &StorageKey) -> Result<bool, StorageError>;

    /// Lists stored keys in ascending order.
    ///
    /// # Errors
    /// Returns [`StorageError::Io`] if the medium cannot be enumerated.
    fn keys(&self) -> Result<Vec<StorageKey>, StorageError>;

    /// Returns `true` if a value is stored under `key`.
    ///
    /// # Errors
    /// Propagates errors from [`KeyValueStore::get`].
    fn contains(&self, key: &StorageKey) -> Result<bool, StorageError> {
        Ok(self.get(key)?.is_some())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    fn get(&self, key: &StorageKey) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &StorageKey, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &StorageKey) -> Result<bool, StorageError> {
        (**self).remove(key)
    }

    fn keys(&self) -> Result<Vec<StorageKey>, StorageError> {
        (**self).keys()
    }
}
