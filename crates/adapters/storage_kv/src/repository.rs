//! Key-value implementation of [`Repository`].
//!
//! Each call reads the whole collection, changes it in memory, and writes the
//! whole collection back. Lookups are linear scans.

use std::marker::PhantomData;

use hotelier_app::ports::Repository;
use hotelier_domain::error::{HotelError, NotFoundError};
use hotelier_domain::record::Record;

use crate::error::StorageError;
use crate::store::KeyValueStore;

/// Repository storing every `T` as one JSON array under a single key.
pub struct KvRepository<T, S> {
    store: S,
    key: &'static str,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record, S: KeyValueStore> KvRepository<T, S> {
    /// Repository on the default slot of `T`'s collection.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self {
            store,
            key: T::COLLECTION.storage_key(),
            _record: PhantomData,
        }
    }

    /// Read the collection; missing or unparsable content reads as empty.
    fn load(&self) -> Result<Vec<T>, StorageError> {
        let raw = match self.store.get(self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Ok(Vec::new()),
            Err(StorageError::Corrupt { key }) => {
                tracing::warn!(key = %key, "discarding undecodable collection");
                return Ok(Vec::new());
            }
            Err(err) => return Err(err),
        };
        match serde_json::from_str(&raw) {
            Ok(records) => Ok(records),
            Err(err) => {
                tracing::warn!(
                    key = self.key,
                    error = %err,
                    "discarding unreadable collection"
                );
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, records: &[T]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(records)?;
        self.store.set(self.key, &raw)
    }

    fn position(records: &[T], id: T::Id) -> Result<usize, HotelError> {
        records
            .iter()
            .position(|record| record.id() == id)
            .ok_or_else(|| {
                NotFoundError {
                    entity: T::NAME,
                    id: id.to_string(),
                }
                .into()
            })
    }
}

impl<T: Record, S: KeyValueStore> Repository<T> for KvRepository<T, S> {
    fn get_all(&self) -> Result<Vec<T>, HotelError> {
        let records = self.load()?;
        tracing::debug!(key = self.key, count = records.len(), "collection read");
        Ok(records)
    }

    fn create(&self, draft: T::Draft) -> Result<T, HotelError> {
        let mut records = self.load()?;
        let record = T::from_draft(T::Id::default(), draft);
        records.push(record.clone());
        self.save(&records)?;
        Ok(record)
    }

    fn update(&self, id: T::Id, patch: T::Patch) -> Result<T, HotelError> {
        let mut records = self.load()?;
        let index = Self::position(&records, id)?;
        records[index].apply(patch);
        let record = records[index].clone();
        self.save(&records)?;
        Ok(record)
    }

    fn delete(&self, id: T::Id) -> Result<(), HotelError> {
        let mut records = self.load()?;
        let index = Self::position(&records, id)?;
        records.remove(index);
        self.save(&records)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), HotelError> {
        self.store.remove(self.key)?;
        Ok(())
    }
}
