//! Reservation service: use-cases for managing reservations.
//!
//! Room and guest selections are checked against the options the caller
//! offered, not against the stored collections. Nothing here touches room
//! availability.

use hotelier_domain::error::HotelError;
use hotelier_domain::event::Collection;
use hotelier_domain::id::ReservationId;
use hotelier_domain::reservation::{
    Reservation, ReservationForm, ReservationOptions, ReservationPatch, ReservationStatus,
};

use super::invalidate;
use crate::ports::{InvalidationPublisher, Repository};

/// Reservation changes also invalidate rooms, whose listing shows reservations.
const TOUCHED: &[Collection] = &[Collection::Reservations, Collection::Rooms];

/// Application service for reservation CRUD operations.
pub struct ReservationService<R, P> {
    repo: R,
    publisher: P,
}

impl<R: Repository<Reservation>, P: InvalidationPublisher> ReservationService<R, P> {
    /// Create a new service backed by the given repository and publisher.
    pub fn new(repo: R, publisher: P) -> Self {
        Self { repo, publisher }
    }

    /// List all reservations in insertion order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub fn list_reservations(&self) -> Result<Vec<Reservation>, HotelError> {
        self.repo.get_all()
    }

    /// Look up a reservation by id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub fn get_reservation(&self, id: ReservationId) -> Result<Option<Reservation>, HotelError> {
        self.repo.get_by_id(id)
    }

    /// Validate the form against `options` and store a new reservation.
    ///
    /// # Errors
    ///
    /// Returns [`HotelError::Validation`] if the form is rejected, or a
    /// storage error propagated from the repository.
    pub fn create_reservation(
        &self,
        form: &ReservationForm,
        options: &ReservationOptions<'_>,
    ) -> Result<Reservation, HotelError> {
        let draft = form.validate(options)?;
        let reservation = self.repo.create(draft)?;
        tracing::info!(
            reservation_id = %reservation.id,
            room_id = %reservation.room_id,
            guest_id = %reservation.guest_id,
            "reservation created"
        );
        invalidate(&self.publisher, TOUCHED)?;
        Ok(reservation)
    }

    /// Validate the form against `options` and overwrite a reservation.
    ///
    /// # Errors
    ///
    /// Returns [`HotelError::Validation`] if the form is rejected,
    /// [`HotelError::NotFound`] if the reservation is gone, or a storage error.
    pub fn update_reservation(
        &self,
        id: ReservationId,
        form: &ReservationForm,
        options: &ReservationOptions<'_>,
    ) -> Result<Reservation, HotelError> {
        let draft = form.validate(options)?;
        let reservation = self.repo.update(id, ReservationPatch::from(draft))?;
        tracing::info!(reservation_id = %reservation.id, "reservation updated");
        invalidate(&self.publisher, TOUCHED)?;
        Ok(reservation)
    }

    /// Change only the status of a reservation.
    ///
    /// # Errors
    ///
    /// Returns [`HotelError::NotFound`] if the reservation is gone, or a
    /// storage error.
    pub fn set_status(
        &self,
        id: ReservationId,
        status: ReservationStatus,
    ) -> Result<Reservation, HotelError> {
        let patch = ReservationPatch {
            status: Some(status),
            ..ReservationPatch::default()
        };
        let reservation = self.repo.update(id, patch)?;
        tracing::info!(reservation_id = %reservation.id, %status, "reservation status changed");
        invalidate(&self.publisher, TOUCHED)?;
        Ok(reservation)
    }

    /// Delete a reservation by id.
    ///
    /// # Errors
    ///
    /// Returns [`HotelError::NotFound`] if the reservation is gone, or a
    /// storage error.
    pub fn delete_reservation(&self, id: ReservationId) -> Result<(), HotelError> {
        self.repo.delete(id)?;
        tracing::info!(reservation_id = %id, "reservation deleted");
        invalidate(&self.publisher, TOUCHED)
    }
}
