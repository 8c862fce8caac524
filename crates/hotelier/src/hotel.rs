//! Hotel facade: one repository per collection, one service per repository,
//! all sharing the same backend and invalidation bus.

use std::sync::Arc;

use tokio::sync::broadcast;

use hotelier_adapter_storage_kv::{KvRepository, MemoryStore};
use hotelier_app::event_bus::InProcessEventBus;
use hotelier_app::services::guest_service::GuestService;
use hotelier_app::services::reservation_service::ReservationService;
use hotelier_app::services::room_service::RoomService;
use hotelier_domain::error::HotelError;
use hotelier_domain::event::Invalidation;
use hotelier_domain::guest::Guest;
use hotelier_domain::reservation::Reservation;
use hotelier_domain::room::Room;

use crate::backend::Backend;
use crate::config::Config;

type Repo<T> = KvRepository<T, Backend>;
type Bus = Arc<InProcessEventBus>;

pub type Rooms = RoomService<Repo<Room>, Bus>;
pub type Guests = GuestService<Repo<Guest>, Bus>;
pub type Reservations = ReservationService<Repo<Reservation>, Bus>;

/// The wired application.
pub struct Hotel {
    rooms: Rooms,
    guests: Guests,
    reservations: Reservations,
    bus: Bus,
}

impl Hotel {
    /// Open the backend described by `config` and wire the services on it.
    ///
    /// # Errors
    ///
    /// Returns [`HotelError::Storage`] if the backend cannot be opened.
    pub fn open(config: &Config) -> Result<Self, HotelError> {
        let backend = Backend::open(&config.storage)?;
        tracing::info!(
            backend = ?config.storage.backend,
            dir = %config.storage.dir.display(),
            "storage opened"
        );
        Ok(Self::with_backend(backend, config.events.capacity))
    }

    /// A hotel whose data lives only as long as the process.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::with_backend(
            Backend::Memory(MemoryStore::new()),
            crate::config::EventsConfig::default().capacity,
        )
    }

    #[must_use]
    pub fn with_backend(backend: Backend, capacity: usize) -> Self {
        let bus = Arc::new(InProcessEventBus::new(capacity));
        Self {
            rooms: RoomService::new(KvRepository::new(backend.clone()), Arc::clone(&bus)),
            guests: GuestService::new(KvRepository::new(backend.clone()), Arc::clone(&bus)),
            reservations: ReservationService::new(KvRepository::new(backend), Arc::clone(&bus)),
            bus,
        }
    }

    #[must_use]
    pub fn rooms(&self) -> &Rooms {
        &self.rooms
    }

    #[must_use]
    pub fn guests(&self) -> &Guests {
        &self.guests
    }

    #[must_use]
    pub fn reservations(&self) -> &Reservations {
        &self.reservations
    }

    /// Receive an [`Invalidation`] for every collection written from now on.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Invalidation> {
        self.bus.subscribe()
    }
}
