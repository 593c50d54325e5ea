//! A small key-value string store scoped to one user profile.
//!
//! This is the desktop counterpart of a browser's `localStorage`: a flat namespace of
//! string keys holding string values, with "last write wins" semantics.
//!
//! # Core Features
//!
//! - **Validated keys**: [`StorageKey`] rejects anything that could escape the profile
//!   directory (separators, leading dots, non-ASCII).
//! - **Atomic writes**: unique temp write + `fsync` + `rename`, so a value is either the old
//!   one or the new one, never a torn mix.
//! - **Self-healing**: stale temporary files from interrupted writes are removed on connect.
//! - **Pluggable engines**: [`FileStore`] for real profiles, [`MemoryStore`] for tests and
//!   throwaway sessions, both behind [`KeyValueStore`].
//!
//! # Examples
//!
//! ```rust
//! use basket_storage::{KeyValueStore, MemoryStore, StorageError, StorageKey};
//!
//! fn main() -> Result<(), StorageError> {
//!     let store = MemoryStore::new();
//!     let key = StorageKey::try_from("cart")?;
//!
//!     assert_eq!(store.get(&key)?, None);
//!     store.set(&key, "[]")?;
//!     assert!(store.contains(&key)?);
//!     assert!(store.remove(&key)?);
//!     Ok(())
//! }
//! ```

mod builder;
mod error;
mod file;
mod key;
mod maintenance;
mod memory;
mod store;

pub use builder::FileStoreBuilder;
pub use error::{StorageError, StorageErrorExt};
pub use file::FileStore;
pub use key::StorageKey;
pub use memory::MemoryStore;
pub use store::KeyValueStore;
