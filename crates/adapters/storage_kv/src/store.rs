//! The string key-value slot store repositories persist into.

use crate::error::StorageError;

/// A flat map of string keys to string values.
pub trait KeyValueStore {
    /// Value stored under `key`, or `None` when the slot is empty.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backing medium cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backing medium cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Empty the slot. Removing an empty slot succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backing medium cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
