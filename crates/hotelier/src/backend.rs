//! Runtime selection of the key-value backend.

use hotelier_adapter_storage_kv::{FileStore, KeyValueStore, MemoryStore, StorageError};

use crate::config::{StorageBackend, StorageConfig};

/// The store chosen by configuration. Clones share the same slots.
#[derive(Debug, Clone)]
pub enum Backend {
    Memory(MemoryStore),
    File(FileStore),
}

impl Backend {
    /// Open the backend described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the file backend's directory cannot be created.
    pub fn open(config: &StorageConfig) -> Result<Self, StorageError> {
        match config.backend {
            StorageBackend::Memory => Ok(Self::Memory(MemoryStore::new())),
            StorageBackend::File => FileStore::open(&config.dir).map(Self::File),
        }
    }
}

impl KeyValueStore for Backend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self {
            Self::Memory(store) => store.get(key),
            Self::File(store) => store.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            Self::Memory(store) => store.set(key, value),
            Self::File(store) => store.set(key, value),
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match self {
            Self::Memory(store) => store.remove(key),
            Self::File(store) => store.remove(key),
        }
    }
}
