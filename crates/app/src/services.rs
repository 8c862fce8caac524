//! Application services: use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.
//! Every successful mutation publishes an invalidation for the collections it
//! touched.

pub mod guest_service;
pub mod reservation_service;
pub mod room_service;

use hotelier_domain::error::HotelError;
use hotelier_domain::event::{Collection, Invalidation};

use crate::ports::InvalidationPublisher;

fn invalidate<P: InvalidationPublisher>(
    publisher: &P,
    collections: &[Collection],
) -> Result<(), HotelError> {
    for collection in collections {
        tracing::debug!(%collection, "invalidating collection");
        publisher.publish(Invalidation::new(*collection))?;
    }
    Ok(())
}
