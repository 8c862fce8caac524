//! # hotelier-adapter-storage-kv
//!
//! Key-value persistence adapter, the desktop counterpart of a browser's
//! local storage.
//!
//! ## Responsibilities
//! - Implement the `Repository` port defined in `hotelier-app::ports::storage`
//! - Keep each collection as one JSON array under its own string key
//! - Provide an in-memory store (tests, ephemeral sessions) and a
//!   file-per-key store (durable)
//!
//! ## Dependency rule
//! Depends on `hotelier-app` (for port traits) and `hotelier-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod error;
pub mod file;
pub mod memory;
pub mod repository;
pub mod store;

pub use error::StorageError;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use repository::KvRepository;
pub use store::KeyValueStore;
