//! # hotelier-domain
//!
//! Pure domain model for the hotelier administration tool.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Rooms** (number, capacity, type, price, amenities, beds, availability)
//! - Define **Guests** (names, CPF, e-mail)
//! - Define **Reservations** (room + guest references, stay dates, status)
//! - Define the [`Record`](record::Record) contract shared by every persisted entity
//! - Validate raw form input into normalized drafts, reporting field-level messages
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;
mod wire;

pub mod cpf;
pub mod event;
pub mod guest;
pub mod record;
pub mod reservation;
pub mod room;
