//! Guest service: use-cases for managing guests.

use hotelier_domain::error::HotelError;
use hotelier_domain::event::Collection;
use hotelier_domain::guest::{Guest, GuestForm, GuestPatch};
use hotelier_domain::id::GuestId;

use super::invalidate;
use crate::ports::{InvalidationPublisher, Repository};

/// Application service for guest CRUD operations.
pub struct GuestService<R, P> {
    repo: R,
    publisher: P,
}

impl<R: Repository<Guest>, P: InvalidationPublisher> GuestService<R, P> {
    /// Create a new service backed by the given repository and publisher.
    pub fn new(repo: R, publisher: P) -> Self {
        Self { repo, publisher }
    }

    /// List all guests in insertion order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub fn list_guests(&self) -> Result<Vec<Guest>, HotelError> {
        self.repo.get_all()
    }

    /// Look up a guest by id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub fn get_guest(&self, id: GuestId) -> Result<Option<Guest>, HotelError> {
        self.repo.get_by_id(id)
    }

    /// Validate the form and store a new guest with an unmasked CPF.
    ///
    /// # Errors
    ///
    /// Returns [`HotelError::Validation`] if the form is rejected, or a
    /// storage error propagated from the repository.
    pub fn create_guest(&self, form: &GuestForm) -> Result<Guest, HotelError> {
        let draft = form.validate()?;
        let guest = self.repo.create(draft)?;
        tracing::info!(guest_id = %guest.id, "guest created");
        invalidate(&self.publisher, &[Collection::Guests])?;
        Ok(guest)
    }

    /// Validate the form and overwrite an existing guest.
    ///
    /// # Errors
    ///
    /// Returns [`HotelError::Validation`] if the form is rejected,
    /// [`HotelError::NotFound`] if the guest is gone, or a storage error.
    pub fn update_guest(&self, id: GuestId, form: &GuestForm) -> Result<Guest, HotelError> {
        let draft = form.validate()?;
        let guest = self.repo.update(id, GuestPatch::from(draft))?;
        tracing::info!(guest_id = %guest.id, "guest updated");
        invalidate(&self.publisher, &[Collection::Guests])?;
        Ok(guest)
    }

    /// Delete a guest by id. Reservations pointing at them are left alone.
    ///
    /// # Errors
    ///
    /// Returns [`HotelError::NotFound`] if the guest is gone, or a storage error.
    pub fn delete_guest(&self, id: GuestId) -> Result<(), HotelError> {
        self.repo.delete(id)?;
        tracing::info!(guest_id = %id, "guest deleted");
        invalidate(&self.publisher, &[Collection::Guests])
    }
}
