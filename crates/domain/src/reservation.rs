//! Reservation: a guest's stay in a room between two calendar dates.
//!
//! Room and guest are weak references by id. Nothing here checks that they
//! still exist, that stays do not overlap, or that the room's availability
//! matches the reservation status.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationErrors;
use crate::event::Collection;
use crate::guest::Guest;
use crate::id::{GuestId, ReservationId, RoomId};
use crate::record::{Record, merge};
use crate::room::Room;
use crate::time::{DATE_FORMAT, parse_date};
use crate::wire::wire_enum;

wire_enum!(
    /// Lifecycle state of a reservation.
    ReservationStatus, "status", {
        Active => "active",
        Completed => "completed",
        Cancelled => "cancelled",
    }
);

/// A booking of one room by one guest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: ReservationId,
    pub room_id: RoomId,
    pub guest_id: GuestId,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub status: ReservationStatus,
}

impl Reservation {
    /// Number of nights between check-in and check-out.
    #[must_use]
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}

/// A validated reservation that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationDraft {
    pub room_id: RoomId,
    pub guest_id: GuestId,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub status: ReservationStatus,
}

/// Fields to overwrite on an existing reservation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservationPatch {
    pub room_id: Option<RoomId>,
    pub guest_id: Option<GuestId>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub status: Option<ReservationStatus>,
}

impl From<ReservationDraft> for ReservationPatch {
    fn from(draft: ReservationDraft) -> Self {
        Self {
            room_id: Some(draft.room_id),
            guest_id: Some(draft.guest_id),
            check_in: Some(draft.check_in),
            check_out: Some(draft.check_out),
            status: Some(draft.status),
        }
    }
}

impl Record for Reservation {
    type Id = ReservationId;
    type Draft = ReservationDraft;
    type Patch = ReservationPatch;

    const NAME: &'static str = "Reservation";
    const COLLECTION: Collection = Collection::Reservations;

    fn id(&self) -> ReservationId {
        self.id
    }

    fn from_draft(id: ReservationId, draft: ReservationDraft) -> Self {
        Self {
            id,
            room_id: draft.room_id,
            guest_id: draft.guest_id,
            check_in: draft.check_in,
            check_out: draft.check_out,
            status: draft.status,
        }
    }

    fn apply(&mut self, patch: ReservationPatch) {
        merge(&mut self.room_id, patch.room_id);
        merge(&mut self.guest_id, patch.guest_id);
        merge(&mut self.check_in, patch.check_in);
        merge(&mut self.check_out, patch.check_out);
        merge(&mut self.status, patch.status);
    }
}

/// Rooms and guests a reservation form offers for selection.
///
/// A new reservation may only pick a room currently `available`; when editing,
/// every room is offered so the existing choice stays selectable.
#[derive(Debug, Clone)]
pub struct ReservationOptions<'a> {
    rooms: Vec<&'a Room>,
    guests: &'a [Guest],
}

impl<'a> ReservationOptions<'a> {
    #[must_use]
    pub fn for_new(rooms: &'a [Room], guests: &'a [Guest]) -> Self {
        Self {
            rooms: rooms
                .iter()
                .filter(|room| room.availability.is_available())
                .collect(),
            guests,
        }
    }

    #[must_use]
    pub fn for_edit(rooms: &'a [Room], guests: &'a [Guest]) -> Self {
        Self {
            rooms: rooms.iter().collect(),
            guests,
        }
    }

    #[must_use]
    pub fn rooms(&self) -> &[&'a Room] {
        &self.rooms
    }

    #[must_use]
    pub fn guests(&self) -> &'a [Guest] {
        self.guests
    }

    fn offers_room(&self, id: RoomId) -> bool {
        self.rooms.iter().any(|room| room.id == id)
    }

    fn offers_guest(&self, id: GuestId) -> bool {
        self.guests.iter().any(|guest| guest.id == id)
    }
}

/// Raw reservation input as submitted by a form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReservationForm {
    pub room_id: String,
    pub guest_id: String,
    pub check_in: String,
    pub check_out: String,
    pub status: String,
}

impl ReservationForm {
    /// Pre-fill the form from a stored reservation.
    #[must_use]
    pub fn from_reservation(reservation: &Reservation) -> Self {
        Self {
            room_id: reservation.room_id.to_string(),
            guest_id: reservation.guest_id.to_string(),
            check_in: reservation.check_in.format(DATE_FORMAT).to_string(),
            check_out: reservation.check_out.format(DATE_FORMAT).to_string(),
            status: reservation.status.to_string(),
        }
    }

    /// Validate every field against the offered options, then the date order.
    ///
    /// The date-order rule runs once both dates parsed and reports on
    /// `checkOut`.
    ///
    /// # Errors
    ///
    /// Returns the message of each rejected field, keyed by its persisted name.
    pub fn validate(
        &self,
        options: &ReservationOptions<'_>,
    ) -> Result<ReservationDraft, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let room_id = errors.check(
            "roomId",
            self.room_id
                .parse::<RoomId>()
                .ok()
                .filter(|id| options.offers_room(*id))
                .ok_or_else(|| "Selecione um quarto".to_string()),
        );
        let guest_id = errors.check(
            "guestId",
            self.guest_id
                .parse::<GuestId>()
                .ok()
                .filter(|id| options.offers_guest(*id))
                .ok_or_else(|| "Selecione um hóspede".to_string()),
        );
        let check_in = errors.check(
            "checkIn",
            parse_stay_date(&self.check_in, "Data de check-in é obrigatória"),
        );
        let check_out = errors.check(
            "checkOut",
            parse_stay_date(&self.check_out, "Data de check-out é obrigatória"),
        );
        let status = errors.check(
            "status",
            self.status
                .parse::<ReservationStatus>()
                .map_err(|_| "Selecione um status".to_string()),
        );

        if let (Some(check_in), Some(check_out)) = (check_in, check_out) {
            if check_in >= check_out {
                errors.add(
                    "checkOut",
                    "Data de check-out deve ser posterior ao check-in",
                );
            }
        }

        match (room_id, guest_id, check_in, check_out, status) {
            (Some(room_id), Some(guest_id), Some(check_in), Some(check_out), Some(status))
                if errors.is_empty() =>
            {
                Ok(ReservationDraft {
                    room_id,
                    guest_id,
                    check_in,
                    check_out,
                    status,
                })
            }
            _ => Err(errors),
        }
    }
}

fn parse_stay_date(raw: &str, required: &str) -> Result<NaiveDate, String> {
    if raw.trim().is_empty() {
        return Err(required.to_string());
    }
    parse_date(raw).map_err(|_| "Data inválida".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpf::Cpf;
    use crate::room::{Availability, BedType, RoomType};

    fn room(availability: Availability) -> Room {
        Room {
            id: RoomId::new(),
            number: "101".to_string(),
            capacity: 2,
            room_type: RoomType::Basic,
            price_per_night: 120.0,
            has_minibar: false,
            has_breakfast: true,
            has_air_conditioning: false,
            has_tv: true,
            beds: vec![BedType::Single, BedType::Single],
            availability,
        }
    }

    fn guest() -> Guest {
        Guest {
            id: GuestId::new(),
            first_name: "Maria".to_string(),
            last_name: "Souza".to_string(),
            cpf: Cpf::parse("11144477735").unwrap(),
            email: "maria@example.com".to_string(),
        }
    }

    fn form(room: &Room, guest: &Guest, check_in: &str, check_out: &str) -> ReservationForm {
        ReservationForm {
            room_id: room.id.to_string(),
            guest_id: guest.id.to_string(),
            check_in: check_in.to_string(),
            check_out: check_out.to_string(),
            status: "active".to_string(),
        }
    }

    #[test]
    fn should_accept_when_check_in_precedes_check_out() {
        let rooms = vec![room(Availability::Available)];
        let guests = vec![guest()];
        let options = ReservationOptions::for_new(&rooms, &guests);

        let draft = form(&rooms[0], &guests[0], "2024-01-05", "2024-01-10")
            .validate(&options)
            .unwrap();

        assert_eq!(draft.room_id, rooms[0].id);
        assert_eq!(draft.status, ReservationStatus::Active);
    }

    #[test]
    fn should_attach_date_order_error_to_check_out() {
        let rooms = vec![room(Availability::Available)];
        let guests = vec![guest()];
        let options = ReservationOptions::for_new(&rooms, &guests);

        let errors = form(&rooms[0], &guests[0], "2024-01-10", "2024-01-05")
            .validate(&options)
            .unwrap_err();

        assert_eq!(
            errors.get("checkOut"),
            Some("Data de check-out deve ser posterior ao check-in")
        );
        assert!(!errors.contains("checkIn"));
    }

    #[test]
    fn should_reject_same_day_stay() {
        let rooms = vec![room(Availability::Available)];
        let guests = vec![guest()];
        let options = ReservationOptions::for_new(&rooms, &guests);

        let errors = form(&rooms[0], &guests[0], "2024-01-05", "2024-01-05")
            .validate(&options)
            .unwrap_err();

        assert!(errors.contains("checkOut"));
    }

    #[test]
    fn should_only_offer_available_rooms_for_new_reservation() {
        let rooms = vec![room(Availability::Occupied)];
        let guests = vec![guest()];

        let new = ReservationOptions::for_new(&rooms, &guests);
        assert!(new.rooms().is_empty());
        let errors = form(&rooms[0], &guests[0], "2024-01-05", "2024-01-10")
            .validate(&new)
            .unwrap_err();
        assert_eq!(errors.get("roomId"), Some("Selecione um quarto"));

        let edit = ReservationOptions::for_edit(&rooms, &guests);
        assert!(
            form(&rooms[0], &guests[0], "2024-01-05", "2024-01-10")
                .validate(&edit)
                .is_ok()
        );
    }

    #[test]
    fn should_reject_unknown_guest() {
        let rooms = vec![room(Availability::Available)];
        let guests = vec![guest()];
        let options = ReservationOptions::for_new(&rooms, &guests);
        let stranger = guest();

        let errors = form(&rooms[0], &stranger, "2024-01-05", "2024-01-10")
            .validate(&options)
            .unwrap_err();

        assert_eq!(errors.get("guestId"), Some("Selecione um hóspede"));
    }

    #[test]
    fn should_report_every_missing_field() {
        let options = ReservationOptions::for_new(&[], &[]);
        let errors = ReservationForm::default().validate(&options).unwrap_err();
        assert_eq!(errors.get("roomId"), Some("Selecione um quarto"));
        assert_eq!(errors.get("guestId"), Some("Selecione um hóspede"));
        assert_eq!(errors.get("checkIn"), Some("Data de check-in é obrigatória"));
        assert_eq!(errors.get("checkOut"), Some("Data de check-out é obrigatória"));
        assert_eq!(errors.get("status"), Some("Selecione um status"));
    }

    #[test]
    fn should_persist_dates_as_iso_strings() {
        let rooms = vec![room(Availability::Available)];
        let guests = vec![guest()];
        let options = ReservationOptions::for_new(&rooms, &guests);
        let draft = form(&rooms[0], &guests[0], "2024-01-05", "2024-01-10")
            .validate(&options)
            .unwrap();
        let reservation = Reservation::from_draft(ReservationId::new(), draft);

        let json = serde_json::to_value(&reservation).unwrap();
        assert_eq!(json["checkIn"], "2024-01-05");
        assert_eq!(json["checkOut"], "2024-01-10");
        assert_eq!(json["status"], "active");
        assert_eq!(json["roomId"], rooms[0].id.to_string());
        assert_eq!(reservation.nights(), 5);
    }

    #[test]
    fn should_keep_untouched_fields_when_applying_patch() {
        let rooms = vec![room(Availability::Available)];
        let guests = vec![guest()];
        let options = ReservationOptions::for_new(&rooms, &guests);
        let draft = form(&rooms[0], &guests[0], "2024-01-05", "2024-01-10")
            .validate(&options)
            .unwrap();
        let mut reservation = Reservation::from_draft(ReservationId::new(), draft);

        reservation.apply(ReservationPatch {
            status: Some(ReservationStatus::Cancelled),
            ..ReservationPatch::default()
        });

        assert_eq!(reservation.status, ReservationStatus::Cancelled);
        assert_eq!(reservation.room_id, rooms[0].id);
        assert_eq!(reservation.nights(), 5);
    }

    #[test]
    fn should_parse_status_wire_names() {
        assert_eq!(
            "cancelled".parse::<ReservationStatus>(),
            Ok(ReservationStatus::Cancelled)
        );
        assert!("Active".parse::<ReservationStatus>().is_err());
        assert_eq!(ReservationStatus::Completed.to_string(), "completed");
    }

    #[test]
    fn should_reject_unknown_status() {
        let errors = ReservationForm {
            status: "pending".to_string(),
            ..ReservationForm::default()
        }
        .validate(&ReservationOptions::for_new(&[], &[]))
        .unwrap_err();
        assert_eq!(errors.get("status"), Some("Selecione um status"));
    }

    #[test]
    fn should_refill_form_from_stored_reservation() {
        let rooms = vec![room(Availability::Occupied)];
        let guests = vec![guest()];
        let options = ReservationOptions::for_edit(&rooms, &guests);
        let draft = form(&rooms[0], &guests[0], "2024-03-01", "2024-03-04")
            .validate(&options)
            .unwrap();
        let reservation = Reservation::from_draft(ReservationId::new(), draft.clone());

        let refilled = ReservationForm::from_reservation(&reservation)
            .validate(&options)
            .unwrap();
        assert_eq!(refilled, draft);
    }
}
