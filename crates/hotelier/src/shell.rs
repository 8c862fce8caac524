//! Tabbed shell driving the rooms, guests, and reservations modules.

use std::fmt;

use hotelier_domain::error::HotelError;
use hotelier_domain::guest::{Guest, GuestForm};
use hotelier_domain::id::{ReservationId, RoomId};
use hotelier_domain::reservation::{
    Reservation, ReservationForm, ReservationOptions, ReservationStatus,
};
use hotelier_domain::room::{Availability, Room, RoomForm};

use crate::hotel::Hotel;
use crate::modules::reservations::{self, ReservationDetails, ReservationNotice};
use crate::modules::EntityModule;

/// Top-level navigation tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Rooms,
    Guests,
    Reservations,
}

impl Tab {
    pub const ALL: &'static [Self] = &[Self::Rooms, Self::Guests, Self::Reservations];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Rooms => "Quartos",
            Self::Guests => "Hóspedes",
            Self::Reservations => "Reservas",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The application shell: the active tab and the form state of each module.
pub struct Shell {
    hotel: Hotel,
    tab: Tab,
    rooms: EntityModule<Room>,
    guests: EntityModule<Guest>,
    reservations: EntityModule<Reservation>,
}

impl Shell {
    #[must_use]
    pub fn new(hotel: Hotel) -> Self {
        Self {
            hotel,
            tab: Tab::default(),
            rooms: EntityModule::new(),
            guests: EntityModule::new(),
            reservations: EntityModule::new(),
        }
    }

    #[must_use]
    pub fn hotel(&self) -> &Hotel {
        &self.hotel
    }

    #[must_use]
    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn select_tab(&mut self, tab: Tab) {
        tracing::debug!(tab = %tab, "tab selected");
        self.tab = tab;
    }

    #[must_use]
    pub fn room_module(&self) -> &EntityModule<Room> {
        &self.rooms
    }

    pub fn room_module_mut(&mut self) -> &mut EntityModule<Room> {
        &mut self.rooms
    }

    #[must_use]
    pub fn guest_module(&self) -> &EntityModule<Guest> {
        &self.guests
    }

    pub fn guest_module_mut(&mut self) -> &mut EntityModule<Guest> {
        &mut self.guests
    }

    #[must_use]
    pub fn reservation_module(&self) -> &EntityModule<Reservation> {
        &self.reservations
    }

    pub fn reservation_module_mut(&mut self) -> &mut EntityModule<Reservation> {
        &mut self.reservations
    }

    /// Create or update a room depending on whether one is selected.
    ///
    /// # Errors
    ///
    /// Returns the service error; the form then stays open.
    pub fn submit_room(&mut self, form: &RoomForm) -> Result<Room, HotelError> {
        let rooms = self.hotel.rooms();
        let outcome = match self.rooms.editing_id() {
            Some(id) => rooms.update_room(id, form),
            None => rooms.create_room(form),
        };
        self.rooms.finish(outcome)
    }

    /// Create or update a guest depending on whether one is selected.
    ///
    /// # Errors
    ///
    /// Returns the service error; the form then stays open.
    pub fn submit_guest(&mut self, form: &GuestForm) -> Result<Guest, HotelError> {
        let guests = self.hotel.guests();
        let outcome = match self.guests.editing_id() {
            Some(id) => guests.update_guest(id, form),
            None => guests.create_guest(form),
        };
        self.guests.finish(outcome)
    }

    /// Create or update a reservation. A new one may only pick an available
    /// room; an edit may keep any room.
    ///
    /// # Errors
    ///
    /// Returns the service error; the form then stays open.
    pub fn submit_reservation(&mut self, form: &ReservationForm) -> Result<Reservation, HotelError> {
        let outcome = self.save_reservation(form);
        self.reservations.finish(outcome)
    }

    fn save_reservation(&self, form: &ReservationForm) -> Result<Reservation, HotelError> {
        let rooms = self.hotel.rooms().list_rooms()?;
        let guests = self.hotel.guests().list_guests()?;
        let service = self.hotel.reservations();
        match self.reservations.editing_id() {
            Some(id) => {
                service.update_reservation(id, form, &ReservationOptions::for_edit(&rooms, &guests))
            }
            None => service.create_reservation(form, &ReservationOptions::for_new(&rooms, &guests)),
        }
    }

    /// Open an empty reservation form unless the form is already open or a
    /// reservation cannot be created yet. Returns whether the form opened.
    ///
    /// # Errors
    ///
    /// Returns a storage error from reading rooms or guests.
    pub fn new_reservation(&mut self) -> Result<bool, HotelError> {
        if self.reservations.show_form() || !self.can_create_reservation()? {
            return Ok(false);
        }
        self.reservations.new_entity();
        Ok(true)
    }

    /// # Errors
    ///
    /// Returns a storage error from the room service.
    pub fn set_room_availability(
        &self,
        id: RoomId,
        availability: Availability,
    ) -> Result<Room, HotelError> {
        self.hotel.rooms().set_availability(id, availability)
    }

    /// Inline status control of the reservations list.
    ///
    /// # Errors
    ///
    /// Returns [`HotelError::NotFound`] if the reservation is gone, or a
    /// storage error.
    pub fn set_reservation_status(
        &self,
        id: ReservationId,
        status: ReservationStatus,
    ) -> Result<Reservation, HotelError> {
        self.hotel.reservations().set_status(id, status)
    }

    /// Every reservation joined with its room and guest.
    ///
    /// # Errors
    ///
    /// Returns a storage error from any of the three collections.
    pub fn reservation_details(&self) -> Result<Vec<ReservationDetails>, HotelError> {
        let reservations = self.hotel.reservations().list_reservations()?;
        let rooms = self.hotel.rooms().list_rooms()?;
        let guests = self.hotel.guests().list_guests()?;
        Ok(ReservationDetails::join(&reservations, &rooms, &guests))
    }

    /// # Errors
    ///
    /// Returns a storage error from reading rooms or guests.
    pub fn reservation_notice(&self) -> Result<Option<ReservationNotice>, HotelError> {
        let rooms = self.hotel.rooms().list_rooms()?;
        let guests = self.hotel.guests().list_guests()?;
        Ok(reservations::notice(&rooms, &guests))
    }

    /// # Errors
    ///
    /// Returns a storage error from reading rooms or guests.
    pub fn can_create_reservation(&self) -> Result<bool, HotelError> {
        Ok(self.reservation_notice()?.is_none())
    }
}
