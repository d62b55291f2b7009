//! Errors reported by [`HashTable`](crate::HashTable) operations

use thiserror::Error;

/// Failure of a table operation.
///
/// `K` is the table's key type so that a failed lookup can hand the missing key back to the
/// caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError<K> {
    /// A constructor or setter received a value outside its valid range
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// No entry with this key is stored in the table
    #[error("key not found: {0:?}")]
    KeyNotFound(K),
}

impl<K> TableError<K> {
    /// Returns the missing key carried by a [`TableError::KeyNotFound`]
    #[must_use]
    pub fn missing_key(&self) -> Option<&K> {
        match self {
            Self::KeyNotFound(key) => Some(key),
            Self::InvalidArgument(_) => None,
        }
    }
}
