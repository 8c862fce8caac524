//! Storage port: the repository trait every persistence backend implements.
//!
//! One repository instance owns one collection. Calls are synchronous and
//! each one completes its read/modify/write before returning, so two calls
//! never interleave; concurrent logical edits resolve as last write wins.

use hotelier_domain::error::HotelError;
use hotelier_domain::record::Record;

/// Whole-collection CRUD for records of type `T`.
pub trait Repository<T: Record> {
    /// Every record, in insertion order.
    ///
    /// An absent or unreadable collection yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`HotelError::Storage`] when the backend itself fails.
    fn get_all(&self) -> Result<Vec<T>, HotelError>;

    /// The record with `id`, if present.
    ///
    /// # Errors
    ///
    /// Returns [`HotelError::Storage`] when the backend itself fails.
    fn get_by_id(&self, id: T::Id) -> Result<Option<T>, HotelError> {
        Ok(self.get_all()?.into_iter().find(|record| record.id() == id))
    }

    /// Assign a new id, append the record, and persist the collection.
    ///
    /// # Errors
    ///
    /// Returns [`HotelError::Storage`] when the backend fails.
    fn create(&self, draft: T::Draft) -> Result<T, HotelError>;

    /// Shallow-merge `patch` onto the record with `id` and persist.
    ///
    /// # Errors
    ///
    /// Returns [`HotelError::NotFound`] when `id` is absent (nothing is
    /// written), or [`HotelError::Storage`] when the backend fails.
    fn update(&self, id: T::Id, patch: T::Patch) -> Result<T, HotelError>;

    /// Remove the record with `id` and persist the rest.
    ///
    /// # Errors
    ///
    /// Returns [`HotelError::NotFound`] when `id` is absent (nothing is
    /// written), or [`HotelError::Storage`] when the backend fails.
    fn delete(&self, id: T::Id) -> Result<(), HotelError>;

    /// Drop the whole collection. Clearing an empty collection is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`HotelError::Storage`] when the backend fails.
    fn clear(&self) -> Result<(), HotelError>;
}

impl<T: Record, R: Repository<T>> Repository<T> for std::sync::Arc<R> {
    fn get_all(&self) -> Result<Vec<T>, HotelError> {
        (**self).get_all()
    }

    fn get_by_id(&self, id: T::Id) -> Result<Option<T>, HotelError> {
        (**self).get_by_id(id)
    }

    fn create(&self, draft: T::Draft) -> Result<T, HotelError> {
        (**self).create(draft)
    }

    fn update(&self, id: T::Id, patch: T::Patch) -> Result<T, HotelError> {
        (**self).update(id, patch)
    }

    fn delete(&self, id: T::Id) -> Result<(), HotelError> {
        (**self).delete(id)
    }

    fn clear(&self) -> Result<(), HotelError> {
        (**self).clear()
    }
}
