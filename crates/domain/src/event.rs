//! Invalidation notices: emitted after a collection changes so readers
//! know their cached copy is stale.

use std::fmt;

use crate::time::{self, Timestamp};

/// One of the three persisted collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Rooms,
    Guests,
    Reservations,
}

impl Collection {
    /// Name of the key-value slot holding this collection.
    #[must_use]
    pub fn storage_key(self) -> &'static str {
        match self {
            Self::Rooms => "hotel_rooms",
            Self::Guests => "hotel_guests",
            Self::Reservations => "hotel_reservations",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rooms => f.write_str("rooms"),
            Self::Guests => f.write_str("guests"),
            Self::Reservations => f.write_str("reservations"),
        }
    }
}

/// A collection was written and every cached read of it is stale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invalidation {
    pub collection: Collection,
    pub timestamp: Timestamp,
}

impl Invalidation {
    #[must_use]
    pub fn new(collection: Collection) -> Self {
        Self {
            collection,
            timestamp: time::now(),
        }
    }
}
