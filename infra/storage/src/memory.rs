use crate::error::StorageError;
use crate::key::StorageKey;
use crate::store::KeyValueStore;
use fxhash::FxHashMap;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::trace;

/// Volatile store backed by a hash map. Clones share the same map.
///
/// Used for tests and for sessions that must not touch the disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<FxHashMap<StorageKey, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &StorageKey) -> Result<Option<String>, StorageError> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &StorageKey, value: &str) -> Result<(), StorageError> {
        self.entries.write().insert(key.clone(), value.to_owned());
        trace!(%key, bytes = value.len(), "Value stored in memory");
        Ok(())
    }

    fn remove(&self, key: &StorageKey) -> Result<bool, StorageError> {
        Ok(self.entries.write().remove(key).is_some())
    }

    fn keys(&self) -> Result<Vec<StorageKey>, StorageError> {
        let mut keys: Vec<_> = self.entries.read().keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }
}
