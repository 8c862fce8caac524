//! Invalidation port: tell readers that a collection changed.

use hotelier_domain::error::HotelError;
use hotelier_domain::event::Invalidation;

/// Publishes [`Invalidation`] notices to interested subscribers.
pub trait InvalidationPublisher {
    /// Publish a notice to all current subscribers.
    ///
    /// # Errors
    ///
    /// Implementations may fail when their transport is broken; having no
    /// subscriber is not a failure.
    fn publish(&self, invalidation: Invalidation) -> Result<(), HotelError>;
}

impl<T: InvalidationPublisher> InvalidationPublisher for std::sync::Arc<T> {
    fn publish(&self, invalidation: Invalidation) -> Result<(), HotelError> {
        (**self).publish(invalidation)
    }
}
