//! Reservations tab views: each reservation joined with its room and guest,
//! and the preconditions for creating a new one.

use std::collections::HashMap;
use std::fmt;

use hotelier_domain::guest::Guest;
use hotelier_domain::id::{GuestId, RoomId};
use hotelier_domain::reservation::Reservation;
use hotelier_domain::room::{Availability, Room, RoomType};

/// A reservation with the room and guest it references.
///
/// References are not enforced by storage, so the room or guest may be gone;
/// their fields are then `None` and the room counts as available.
#[derive(Debug, Clone, PartialEq)]
pub struct ReservationDetails {
    pub reservation: Reservation,
    pub room_number: Option<String>,
    pub room_type: Option<RoomType>,
    pub room_availability: Availability,
    pub guest_name: Option<String>,
}

impl ReservationDetails {
    /// Join every reservation, in order, with its room and guest.
    #[must_use]
    pub fn join(reservations: &[Reservation], rooms: &[Room], guests: &[Guest]) -> Vec<Self> {
        let rooms: HashMap<RoomId, &Room> = rooms.iter().map(|room| (room.id, room)).collect();
        let guests: HashMap<GuestId, &Guest> =
            guests.iter().map(|guest| (guest.id, guest)).collect();

        reservations
            .iter()
            .map(|reservation| {
                let room = rooms.get(&reservation.room_id);
                let guest = guests.get(&reservation.guest_id);
                Self {
                    reservation: reservation.clone(),
                    room_number: room.map(|room| room.number.clone()),
                    room_type: room.map(|room| room.room_type),
                    room_availability: room.map_or(Availability::Available, |room| {
                        room.availability
                    }),
                    guest_name: guest.map(|guest| guest.full_name()),
                }
            })
            .collect()
    }
}

/// Why a new reservation cannot be created right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationNotice {
    NoGuests,
    NoAvailableRooms,
}

impl fmt::Display for ReservationNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoGuests => {
                f.write_str("Cadastre pelo menos um hóspede antes de criar uma reserva.")
            }
            Self::NoAvailableRooms => f.write_str("Não há quartos disponíveis no momento."),
        }
    }
}

/// The warning to show above the reservations list, if any. Missing guests
/// take precedence over missing rooms. A new reservation can be created
/// only when there is no notice.
#[must_use]
pub fn notice(rooms: &[Room], guests: &[Guest]) -> Option<ReservationNotice> {
    if guests.is_empty() {
        Some(ReservationNotice::NoGuests)
    } else if !rooms.iter().any(|room| room.availability.is_available()) {
        Some(ReservationNotice::NoAvailableRooms)
    } else {
        None
    }
}
