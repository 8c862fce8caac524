//! Room: a bookable unit with its amenities and current availability.

use serde::{Deserialize, Serialize};

use crate::error::ValidationErrors;
use crate::event::Collection;
use crate::id::RoomId;
use crate::record::{Record, merge};
use crate::wire::wire_enum;

pub use crate::wire::UnknownVariant;

pub const MIN_CAPACITY: u8 = 1;
pub const MAX_CAPACITY: u8 = 10;

wire_enum!(
    /// Comfort tier of a room.
    RoomType, "room type", {
        Basic => "basic",
        Modern => "modern",
        Luxury => "luxury",
    }
);

wire_enum!(
    /// Kind of bed installed in a room.
    BedType, "bed type", {
        Single => "single",
        King => "king",
        Queen => "queen",
    }
);

wire_enum!(
    /// Operational status of a room, changed by staff only.
    Availability, "availability", {
        Occupied => "occupied",
        Available => "available",
        Maintenance => "maintenance",
        Cleaning => "cleaning",
    }
);

impl Availability {
    #[must_use]
    pub fn is_available(self) -> bool {
        matches!(self, Self::Available)
    }
}

/// A hotel room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: RoomId,
    pub number: String,
    pub capacity: u8,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    pub price_per_night: f64,
    pub has_minibar: bool,
    pub has_breakfast: bool,
    pub has_air_conditioning: bool,
    #[serde(rename = "hasTV")]
    pub has_tv: bool,
    pub beds: Vec<BedType>,
    pub availability: Availability,
}

/// A validated room that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomDraft {
    pub number: String,
    pub capacity: u8,
    pub room_type: RoomType,
    pub price_per_night: f64,
    pub has_minibar: bool,
    pub has_breakfast: bool,
    pub has_air_conditioning: bool,
    pub has_tv: bool,
    pub beds: Vec<BedType>,
    pub availability: Availability,
}

/// Fields to overwrite on an existing room.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoomPatch {
    pub number: Option<String>,
    pub capacity: Option<u8>,
    pub room_type: Option<RoomType>,
    pub price_per_night: Option<f64>,
    pub has_minibar: Option<bool>,
    pub has_breakfast: Option<bool>,
    pub has_air_conditioning: Option<bool>,
    pub has_tv: Option<bool>,
    pub beds: Option<Vec<BedType>>,
    pub availability: Option<Availability>,
}

impl RoomPatch {
    /// Patch touching only the availability, as the inline status control does.
    #[must_use]
    pub fn availability(availability: Availability) -> Self {
        Self {
            availability: Some(availability),
            ..Self::default()
        }
    }
}

impl From<RoomDraft> for RoomPatch {
    fn from(draft: RoomDraft) -> Self {
        Self {
            number: Some(draft.number),
            capacity: Some(draft.capacity),
            room_type: Some(draft.room_type),
            price_per_night: Some(draft.price_per_night),
            has_minibar: Some(draft.has_minibar),
            has_breakfast: Some(draft.has_breakfast),
            has_air_conditioning: Some(draft.has_air_conditioning),
            has_tv: Some(draft.has_tv),
            beds: Some(draft.beds),
            availability: Some(draft.availability),
        }
    }
}

impl Record for Room {
    type Id = RoomId;
    type Draft = RoomDraft;
    type Patch = RoomPatch;

    const NAME: &'static str = "Room";
    const COLLECTION: Collection = Collection::Rooms;

    fn id(&self) -> RoomId {
        self.id
    }

    fn from_draft(id: RoomId, draft: RoomDraft) -> Self {
        Self {
            id,
            number: draft.number,
            capacity: draft.capacity,
            room_type: draft.room_type,
            price_per_night: draft.price_per_night,
            has_minibar: draft.has_minibar,
            has_breakfast: draft.has_breakfast,
            has_air_conditioning: draft.has_air_conditioning,
            has_tv: draft.has_tv,
            beds: draft.beds,
            availability: draft.availability,
        }
    }

    fn apply(&mut self, patch: RoomPatch) {
        merge(&mut self.number, patch.number);
        merge(&mut self.capacity, patch.capacity);
        merge(&mut self.room_type, patch.room_type);
        merge(&mut self.price_per_night, patch.price_per_night);
        merge(&mut self.has_minibar, patch.has_minibar);
        merge(&mut self.has_breakfast, patch.has_breakfast);
        merge(&mut self.has_air_conditioning, patch.has_air_conditioning);
        merge(&mut self.has_tv, patch.has_tv);
        merge(&mut self.beds, patch.beds);
        merge(&mut self.availability, patch.availability);
    }
}

/// Raw room input as submitted by a form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoomForm {
    pub number: String,
    pub capacity: String,
    #[serde(rename = "type")]
    pub room_type: String,
    pub price_per_night: String,
    pub has_minibar: bool,
    pub has_breakfast: bool,
    pub has_air_conditioning: bool,
    #[serde(rename = "hasTV")]
    pub has_tv: bool,
    pub beds: Vec<String>,
    pub availability: String,
}

impl RoomForm {
    /// Pre-fill the form from a stored room, as the edit screen does.
    #[must_use]
    pub fn from_room(room: &Room) -> Self {
        Self {
            number: room.number.clone(),
            capacity: room.capacity.to_string(),
            room_type: room.room_type.to_string(),
            price_per_night: room.price_per_night.to_string(),
            has_minibar: room.has_minibar,
            has_breakfast: room.has_breakfast,
            has_air_conditioning: room.has_air_conditioning,
            has_tv: room.has_tv,
            beds: room.beds.iter().map(ToString::to_string).collect(),
            availability: room.availability.to_string(),
        }
    }

    /// Validate every field and produce a typed draft.
    ///
    /// # Errors
    ///
    /// Returns the message of each rejected field, keyed by its persisted name.
    pub fn validate(&self) -> Result<RoomDraft, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let number = errors.check("number", parse_number(&self.number));
        let capacity = errors.check("capacity", parse_capacity(&self.capacity));
        let room_type = errors.check(
            "type",
            self.room_type
                .parse::<RoomType>()
                .map_err(|_| "Selecione um tipo de quarto".to_string()),
        );
        let price_per_night = errors.check("pricePerNight", parse_price(&self.price_per_night));
        let beds = errors.check("beds", parse_beds(&self.beds));
        let availability = errors.check(
            "availability",
            self.availability
                .parse::<Availability>()
                .map_err(|_| "Selecione uma disponibilidade".to_string()),
        );

        match (number, capacity, room_type, price_per_night, beds, availability) {
            (
                Some(number),
                Some(capacity),
                Some(room_type),
                Some(price_per_night),
                Some(beds),
                Some(availability),
            ) => Ok(RoomDraft {
                number,
                capacity,
                room_type,
                price_per_night,
                has_minibar: self.has_minibar,
                has_breakfast: self.has_breakfast,
                has_air_conditioning: self.has_air_conditioning,
                has_tv: self.has_tv,
                beds,
                availability,
            }),
            _ => Err(errors),
        }
    }
}

fn parse_number(raw: &str) -> Result<String, String> {
    if raw.is_empty() {
        return Err("Número do quarto é obrigatório".to_string());
    }
    if !raw.chars().all(|c| c.is_ascii_digit()) {
        return Err("Número do quarto deve conter apenas dígitos".to_string());
    }
    Ok(raw.to_string())
}

fn parse_capacity(raw: &str) -> Result<u8, String> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| "Capacidade deve ser um número".to_string())?;
    if value < i64::from(MIN_CAPACITY) {
        return Err(format!("Capacidade mínima é {MIN_CAPACITY}"));
    }
    u8::try_from(value)
        .ok()
        .filter(|capacity| *capacity <= MAX_CAPACITY)
        .ok_or_else(|| format!("Capacidade máxima é {MAX_CAPACITY}"))
}

fn parse_price(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .trim()
        .parse()
        .ok()
        .filter(|price: &f64| price.is_finite())
        .ok_or_else(|| "Preço deve ser um número".to_string())?;
    if value < 0.0 {
        return Err("Preço não pode ser negativo".to_string());
    }
    Ok(value)
}

fn parse_beds(raw: &[String]) -> Result<Vec<BedType>, String> {
    if raw.is_empty() {
        return Err("Selecione pelo menos uma cama".to_string());
    }
    raw.iter()
        .map(|bed| bed.parse::<BedType>())
        .collect::<Result<_, _>>()
        .map_err(|_| "Selecione um tipo de cama".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> RoomForm {
        RoomForm {
            number: "101".to_string(),
            capacity: "2".to_string(),
            room_type: "modern".to_string(),
            price_per_night: "250.5".to_string(),
            has_minibar: true,
            has_breakfast: false,
            has_air_conditioning: true,
            has_tv: true,
            beds: vec!["king".to_string()],
            availability: "available".to_string(),
        }
    }

    #[test]
    fn should_build_typed_draft_when_form_is_valid() {
        let draft = valid_form().validate().unwrap();
        assert_eq!(draft.number, "101");
        assert_eq!(draft.capacity, 2);
        assert_eq!(draft.room_type, RoomType::Modern);
        assert!((draft.price_per_night - 250.5).abs() < f64::EPSILON);
        assert_eq!(draft.beds, vec![BedType::King]);
        assert_eq!(draft.availability, Availability::Available);
        assert!(draft.has_minibar);
        assert!(!draft.has_breakfast);
    }

    #[test]
    fn should_report_every_invalid_field_at_once() {
        let form = RoomForm {
            number: "10A".to_string(),
            capacity: "0".to_string(),
            price_per_night: "-1".to_string(),
            ..RoomForm::default()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.get("number"),
            Some("Número do quarto deve conter apenas dígitos")
        );
        assert_eq!(errors.get("capacity"), Some("Capacidade mínima é 1"));
        assert_eq!(errors.get("type"), Some("Selecione um tipo de quarto"));
        assert_eq!(errors.get("pricePerNight"), Some("Preço não pode ser negativo"));
        assert_eq!(errors.get("beds"), Some("Selecione pelo menos uma cama"));
        assert_eq!(errors.get("availability"), Some("Selecione uma disponibilidade"));
    }

    #[test]
    fn should_require_room_number() {
        let form = RoomForm {
            number: String::new(),
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("number"), Some("Número do quarto é obrigatório"));
    }

    #[test]
    fn should_reject_room_number_with_surrounding_spaces() {
        let form = RoomForm {
            number: " 101".to_string(),
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.get("number"),
            Some("Número do quarto deve conter apenas dígitos")
        );
    }

    #[test]
    fn should_bound_capacity_between_one_and_ten() {
        for (raw, ok) in [("1", true), ("10", true), ("11", false), ("300", false), ("2.5", false)] {
            let form = RoomForm {
                capacity: raw.to_string(),
                ..valid_form()
            };
            assert_eq!(form.validate().is_ok(), ok, "capacity {raw}");
        }
    }

    #[test]
    fn should_reject_non_numeric_price() {
        let form = RoomForm {
            price_per_night: "abc".to_string(),
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("pricePerNight"), Some("Preço deve ser um número"));
    }

    #[test]
    fn should_accept_free_room() {
        let form = RoomForm {
            price_per_night: "0".to_string(),
            ..valid_form()
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn should_allow_duplicate_beds() {
        let form = RoomForm {
            beds: vec!["single".to_string(), "single".to_string()],
            ..valid_form()
        };
        let draft = form.validate().unwrap();
        assert_eq!(draft.beds, vec![BedType::Single, BedType::Single]);
    }

    #[test]
    fn should_reject_unknown_bed() {
        let form = RoomForm {
            beds: vec!["bunk".to_string()],
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("beds"), Some("Selecione um tipo de cama"));
    }

    #[test]
    fn should_keep_untouched_fields_when_applying_patch() {
        let draft = valid_form().validate().unwrap();
        let mut room = Room::from_draft(RoomId::new(), draft);
        let before = room.clone();

        room.apply(RoomPatch::availability(Availability::Cleaning));

        assert_eq!(room.availability, Availability::Cleaning);
        assert_eq!(room.number, before.number);
        assert_eq!(room.beds, before.beds);
        assert_eq!(room.id, before.id);
    }

    #[test]
    fn should_serialize_with_persisted_field_names() {
        let draft = valid_form().validate().unwrap();
        let room = Room::from_draft(RoomId::new(), draft);
        let json = serde_json::to_value(&room).unwrap();
        assert_eq!(json["type"], "modern");
        assert_eq!(json["pricePerNight"], 250.5);
        assert_eq!(json["hasTV"], true);
        assert_eq!(json["hasAirConditioning"], true);
        assert_eq!(json["beds"], serde_json::json!(["king"]));
        assert_eq!(json["availability"], "available");
    }

    #[test]
    fn should_refill_form_from_stored_room() {
        let draft = valid_form().validate().unwrap();
        let room = Room::from_draft(RoomId::new(), draft.clone());
        let refilled = RoomForm::from_room(&room).validate().unwrap();
        assert_eq!(refilled, draft);
    }

    #[test]
    fn should_parse_wire_names() {
        assert_eq!("luxury".parse::<RoomType>().unwrap(), RoomType::Luxury);
        assert_eq!("queen".parse::<BedType>().unwrap(), BedType::Queen);
        assert!("Luxury".parse::<RoomType>().is_err());
        assert_eq!(Availability::ALL.len(), 4);
        assert!(Availability::Available.is_available());
        assert!(!Availability::Cleaning.is_available());
    }
}
