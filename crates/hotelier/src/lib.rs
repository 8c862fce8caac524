//! # hotelier
//!
//! Composition root for the hotel administration tool.
//!
//! ## Responsibilities
//! - Load configuration (`hotelier.toml` plus environment overrides)
//! - Initialize logging
//! - Pick the key-value backend and build one repository per collection
//! - Construct application services, injecting repositories and the
//!   invalidation bus via port traits
//! - Drive the rooms, guests, and reservations modules under tab navigation
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer: no domain logic belongs here.

pub mod backend;
pub mod config;
pub mod hotel;
pub mod logging;
pub mod modules;
pub mod shell;

pub use config::Config;
pub use hotel::Hotel;
pub use shell::{Shell, Tab};
