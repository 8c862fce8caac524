//! Form state shared by the rooms, guests, and reservations tabs.

use hotelier_domain::error::HotelError;
use hotelier_domain::record::Record;

/// Whether the form is shown and which record, if any, it edits.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityModule<T> {
    show_form: bool,
    selected: Option<T>,
}

impl<T> Default for EntityModule<T> {
    fn default() -> Self {
        Self {
            show_form: false,
            selected: None,
        }
    }
}

impl<T: Record> EntityModule<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn show_form(&self) -> bool {
        self.show_form
    }

    /// The record under edit; `None` while creating.
    #[must_use]
    pub fn selected(&self) -> Option<&T> {
        self.selected.as_ref()
    }

    #[must_use]
    pub fn editing_id(&self) -> Option<T::Id> {
        self.selected.as_ref().map(Record::id)
    }

    /// Open an empty form.
    pub fn new_entity(&mut self) {
        self.selected = None;
        self.show_form = true;
    }

    /// Open the form pre-filled with `entity`.
    pub fn edit(&mut self, entity: &T) {
        self.selected = Some(entity.clone());
        self.show_form = true;
    }

    pub fn cancel(&mut self) {
        self.selected = None;
        self.show_form = false;
    }

    /// Close the form after a successful mutation.
    pub fn submitted(&mut self) {
        self.selected = None;
        self.show_form = false;
    }

    /// Close the form if `outcome` succeeded; on failure keep it open with the
    /// same selection so the input can be corrected.
    ///
    /// # Errors
    ///
    /// Returns `outcome`'s error unchanged.
    pub fn finish<R>(&mut self, outcome: Result<R, HotelError>) -> Result<R, HotelError> {
        match outcome {
            Ok(value) => {
                self.submitted();
                Ok(value)
            }
            Err(err) => {
                tracing::warn!(entity = T::NAME, error = %err, "submission rejected");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotelier_domain::error::ValidationErrors;
    use hotelier_domain::id::RoomId;
    use hotelier_domain::room::{Availability, BedType, Room, RoomType};

    fn room() -> Room {
        Room {
            id: RoomId::new(),
            number: "101".to_string(),
            capacity: 2,
            room_type: RoomType::Basic,
            price_per_night: 120.0,
            has_minibar: false,
            has_breakfast: true,
            has_air_conditioning: true,
            has_tv: true,
            beds: vec![BedType::Single, BedType::Single],
            availability: Availability::Available,
        }
    }

    #[test]
    fn should_start_closed() {
        let module: EntityModule<Room> = EntityModule::new();
        assert!(!module.show_form());
        assert!(module.selected().is_none());
    }

    #[test]
    fn should_open_empty_form_for_new_entity() {
        let mut module = EntityModule::new();
        module.edit(&room());

        module.new_entity();

        assert!(module.show_form());
        assert!(module.editing_id().is_none());
    }

    #[test]
    fn should_select_entity_when_editing() {
        let mut module = EntityModule::new();
        let room = room();

        module.edit(&room);

        assert!(module.show_form());
        assert_eq!(module.selected(), Some(&room));
        assert_eq!(module.editing_id(), Some(room.id));
    }

    #[test]
    fn should_reset_when_cancelled() {
        let mut module = EntityModule::new();
        module.edit(&room());

        module.cancel();

        assert_eq!(module, EntityModule::default());
    }

    #[test]
    fn should_close_form_when_submission_succeeds() {
        let mut module = EntityModule::new();
        module.edit(&room());

        let value = module.finish(Ok(7)).unwrap();

        assert_eq!(value, 7);
        assert!(!module.show_form());
        assert!(module.selected().is_none());
    }

    #[test]
    fn should_keep_state_when_submission_fails() {
        let mut module = EntityModule::new();
        let room = room();
        module.edit(&room);
        let mut errors = ValidationErrors::new();
        errors.add("number", "Número do quarto é obrigatório");

        let result: Result<(), _> = module.finish(Err(errors.into()));

        assert!(matches!(result, Err(HotelError::Validation(_))));
        assert!(module.show_form());
        assert_eq!(module.selected(), Some(&room));
    }
}
