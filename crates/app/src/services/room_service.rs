//! Room service: use-cases for managing rooms.

use hotelier_domain::error::HotelError;
use hotelier_domain::event::Collection;
use hotelier_domain::id::RoomId;
use hotelier_domain::room::{Availability, Room, RoomForm, RoomPatch};

use super::invalidate;
use crate::ports::{InvalidationPublisher, Repository};

/// Application service for room CRUD operations.
pub struct RoomService<R, P> {
    repo: R,
    publisher: P,
}

impl<R: Repository<Room>, P: InvalidationPublisher> RoomService<R, P> {
    /// Create a new service backed by the given repository and publisher.
    pub fn new(repo: R, publisher: P) -> Self {
        Self { repo, publisher }
    }

    /// List all rooms in insertion order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub fn list_rooms(&self) -> Result<Vec<Room>, HotelError> {
        self.repo.get_all()
    }

    /// Look up a room by id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub fn get_room(&self, id: RoomId) -> Result<Option<Room>, HotelError> {
        self.repo.get_by_id(id)
    }

    /// Validate the form and store a new room.
    ///
    /// # Errors
    ///
    /// Returns [`HotelError::Validation`] if the form is rejected, or a
    /// storage error propagated from the repository.
    pub fn create_room(&self, form: &RoomForm) -> Result<Room, HotelError> {
        let draft = form.validate()?;
        let room = self.repo.create(draft)?;
        tracing::info!(room_id = %room.id, number = %room.number, "room created");
        invalidate(&self.publisher, &[Collection::Rooms])?;
        Ok(room)
    }

    /// Validate the form and overwrite every field of an existing room.
    ///
    /// # Errors
    ///
    /// Returns [`HotelError::Validation`] if the form is rejected,
    /// [`HotelError::NotFound`] if the room is gone, or a storage error.
    pub fn update_room(&self, id: RoomId, form: &RoomForm) -> Result<Room, HotelError> {
        let draft = form.validate()?;
        let room = self.repo.update(id, RoomPatch::from(draft))?;
        tracing::info!(room_id = %room.id, "room updated");
        invalidate(&self.publisher, &[Collection::Rooms])?;
        Ok(room)
    }

    /// Change only the availability, leaving every other field as stored.
    ///
    /// # Errors
    ///
    /// Returns [`HotelError::NotFound`] if the room is gone, or a storage error.
    pub fn set_availability(
        &self,
        id: RoomId,
        availability: Availability,
    ) -> Result<Room, HotelError> {
        let room = self.repo.update(id, RoomPatch::availability(availability))?;
        tracing::info!(room_id = %room.id, %availability, "room availability changed");
        invalidate(&self.publisher, &[Collection::Rooms])?;
        Ok(room)
    }

    /// Delete a room by id. Reservations pointing at it are left alone.
    ///
    /// # Errors
    ///
    /// Returns [`HotelError::NotFound`] if the room is gone, or a storage error.
    pub fn delete_room(&self, id: RoomId) -> Result<(), HotelError> {
        self.repo.delete(id)?;
        tracing::info!(room_id = %id, "room deleted");
        invalidate(&self.publisher, &[Collection::Rooms])
    }
}
