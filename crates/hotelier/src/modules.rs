//! Per-tab module state: the open/closed form and the record being edited,
//! plus the cross-collection views of the reservations tab.

pub mod entity_module;
pub mod reservations;

pub use entity_module::EntityModule;
pub use reservations::{ReservationDetails, ReservationNotice};
