//! File-backed engine: one file per key inside a single profile directory.

use crate::builder::FileStoreBuilder;
use crate::error::{StorageError, StorageErrorExt};
use crate::key::StorageKey;
use crate::store::KeyValueStore;
use std::fs;
use std::io::{ErrorKind, Write};
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, warn};

pub(crate) const VALUE_EXTENSION: &str = "val";
pub(crate) const TMP_MARKER: &str = ".baskettmp.";
const MAX_TMP_ATTEMPTS: u32 = 16;

/// The internal shared state of a [`FileStore`] instance.
#[derive(Debug)]
pub struct FileStoreInner {
    /// The canonicalized profile directory.
    pub(crate) root: PathBuf,
    /// A unique counter used to generate temporary file names.
    pub(crate) tmp_counter: AtomicU64,
}

/// A thread-safe handle to a profile directory used as a key-value store.
///
/// Each key is stored as `<root>/<key>.val`. Writes are atomic: data goes to a unique
/// temporary file that is synced and then renamed over the target, so a crash never
/// leaves a half-written value behind.
///
/// The handle is reference-counted and cheap to clone.
///
/// # Example
///
/// ```rust
/// use basket_storage::{FileStore, KeyValueStore, StorageError, StorageKey};
///
/// fn main() -> Result<(), StorageError> {
///     # let tmp = tempfile::tempdir().unwrap();
///     # let root = tmp.path().join("profile");
///     let store = FileStore::builder().root(&root).create(true).connect()?;
///     let key = StorageKey::try_from("cart")?;
///
///     store.set(&key, "[]")?;
///     assert_eq!(store.get(&key)?.as_deref(), Some("[]"));
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct FileStore {
    pub(crate) inner: Arc<FileStoreInner>,
}

impl Deref for FileStore {
    type Target = FileStoreInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FileStore {
    #[must_use = "The store is not opened until you call .connect()"]
    pub fn builder() -> FileStoreBuilder {
        FileStoreBuilder::new()
    }

    /// The canonical profile directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Physical path of the file backing `key`.
    #[must_use]
    pub fn path_of(&self, key: &StorageKey) -> PathBuf {
        self.root.join(format!("{key}.{VALUE_EXTENSION}"))
    }

    fn write_atomic(&self, target: &Path, data: &[u8]) -> Result<(), StorageError> {
        let (temp, mut file) = self.create_tmp(target)?;
        file.write_all(data).context("Write failed")?;
        file.sync_all().context("Hardware sync failed")?;
        drop(file);

        if let Err(err) = fs::rename(&temp, target) {
            if err.kind() != ErrorKind::AlreadyExists {
                let _ = fs::remove_file(&temp);
                return Err(StorageError::Io {
                    source: err,
                    context: Some(
                        format!("Atomic swap failed: {} -> {}", temp.display(), target.display())
                            .into(),
                    ),
                });
            }
            // Platforms without atomic replace: remove, then rename.
            fs::remove_file(target)
                .context(format!("Failed to replace existing file: {}", target.display()))?;
            fs::rename(&temp, target).context(format!(
                "Atomic swap failed: {} -> {}",
                temp.display(),
                target.display()
            ))?;
        }

        self.sync_root();
        Ok(())
    }

    /// Creates a fresh temp file next to `target`, skipping names left by earlier runs.
    fn create_tmp(&self, target: &Path) -> Result<(PathBuf, fs::File), StorageError> {
        let mut attempt = 0;
        loop {
            let temp = unique_tmp_path(target, &self.tmp_counter);
            match fs::OpenOptions::new().create_new(true).write(true).open(&temp) {
                Ok(file) => return Ok((temp, file)),
                Err(err) if err.kind() == ErrorKind::AlreadyExists && attempt < MAX_TMP_ATTEMPTS => {
                    debug!(path = %temp.display(), "Temp name taken, trying the next one");
                    attempt += 1;
                },
                Err(err) => {
                    return Err(StorageError::Io {
                        source: err,
                        context: Some(format!("Temp creation failed: {}", temp.display()).into()),
                    });
                },
            }
        }
    }

    fn sync_root(&self) {
        match fs::File::open(&self.root) {
            Ok(dir) => {
                if let Err(err) = dir.sync_all() {
                    warn!(path = %self.root.display(), error = %err, "Directory sync failed");
                }
            },
            Err(err) => {
                warn!(path = %self.root.display(), error = %err, "Directory open failed");
            },
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &StorageKey) -> Result<Option<String>, StorageError> {
        let path = self.path_of(key);

        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(StorageError::Io {
                    source: err,
                    context: Some(format!("Read failed: {}", path.display()).into()),
                });
            },
        };

        String::from_utf8(bytes).map(Some).map_err(|err| StorageError::Encoding {
            message: err.to_string().into(),
            context: Some(path.display().to_string().into()),
        })
    }

    fn set(&self, key: &StorageKey, value: &str) -> Result<(), StorageError> {
        let path = self.path_of(key);
        self.write_atomic(&path, value.as_bytes())?;
        debug!(%key, bytes = value.len(), "Value saved atomically");
        Ok(())
    }

    fn remove(&self, key: &StorageKey) -> Result<bool, StorageError> {
        let path = self.path_of(key);
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(%key, "Value removed");
                Ok(true)
            },
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
            Err(err) => Err(StorageError::Io {
                source: err,
                context: Some(format!("Failed to delete: {}", path.display()).into()),
            }),
        }
    }

    fn keys(&self) -> Result<Vec<StorageKey>, StorageError> {
        let entries = fs::read_dir(&self.root)
            .context(format!("Failed to list: {}", self.root.display()))?;

        let mut keys: Vec<StorageKey> = entries
            .flatten()
            .filter(|entry| entry.file_type().is_ok_and(|t| t.is_file()))
            .filter_map(|entry| {
                let name = entry.file_name();
                let stem = name.to_str()?.strip_suffix(VALUE_EXTENSION)?.strip_suffix('.')?;
                StorageKey::try_from(stem).ok()
            })
            .collect();

        keys.sort();
        Ok(keys)
    }
}

fn unique_tmp_path(target: &Path, counter: &AtomicU64) -> PathBuf {
    let counter = counter.fetch_add(1, Ordering::Relaxed);
    let file_name = target.file_name().and_then(|s| s.to_str()).unwrap_or("value");
    target.with_file_name(format!("{file_name}{TMP_MARKER}{}.{counter}", std::process::id()))
}
