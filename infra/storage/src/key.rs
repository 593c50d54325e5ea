use crate::error::StorageError;
use std::fmt;

const MAX_KEY_LEN: usize = 128;

/// A validated storage key.
///
/// Keys map one-to-one onto file names in [`FileStore`](crate::FileStore), so they are
/// restricted to a conservative alphabet:
/// - lowercase ASCII letters, digits, `_`, `-` and `.`;
/// - input is lowercased, so `Cart` and `cart` are the same key;
/// - must not be empty, longer than 128 bytes, or start with `.`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StorageKey(String);

impl StorageKey {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for StorageKey {
    type Error = StorageError;

    fn try_from(value: &str) -> Result<Self, StorageError> {
        let key = value.trim().to_ascii_lowercase();

        if key.is_empty() {
            return Err(StorageError::InvalidKey {
                message: "EMPTY".into(),
                context: Some("Key cannot be empty".into()),
            });
        }

        if key.len() > MAX_KEY_LEN {
            return Err(StorageError::InvalidKey {
                message: format!("{} bytes", key.len()).into(),
                context: Some("Key is too long".into()),
            });
        }

        if key.starts_with('.') {
            return Err(StorageError::InvalidKey {
                message: key.into(),
                context: Some("Key cannot start with '.'".into()),
            });
        }

        if !key.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.')) {
            return Err(StorageError::InvalidKey {
                message: key.into(),
                context: Some("Key contains illegal characters".into()),
            });
        }

        Ok(Self(key))
    }
}

impl TryFrom<String> for StorageKey {
    type Error = StorageError;

    fn try_from(value: String) -> Result<Self, StorageError> {
        Self::try_from(value.as_str())
    }
}

impl AsRef<str> for StorageKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
