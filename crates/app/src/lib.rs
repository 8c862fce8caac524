//! # hotelier-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `Repository<T>`: whole-collection CRUD for one record type
//!   - `InvalidationPublisher`: announce that a collection changed
//! - Define **driving/inbound ports** as use-case structs:
//!   - `RoomService`: list, get, create, update, set availability, delete
//!   - `GuestService`: list, get, create, update, delete
//!   - `ReservationService`: list, get, create, update, delete
//! - Provide **in-process infrastructure** (invalidation bus) that doesn't need IO
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `hotelier-domain` only (plus `tokio::sync` for channels).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod event_bus;
pub mod ports;
pub mod services;
