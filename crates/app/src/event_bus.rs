//! In-process invalidation bus backed by a tokio broadcast channel.

use tokio::sync::broadcast;

use hotelier_domain::error::HotelError;
use hotelier_domain::event::Invalidation;

use crate::ports::InvalidationPublisher;

/// In-process invalidation bus using a tokio [`broadcast`] channel.
///
/// Publishing succeeds even when there are no active subscribers
/// (the notice is simply dropped). Sending never blocks, so the bus can be
/// driven from synchronous code.
pub struct InProcessEventBus {
    sender: broadcast::Sender<Invalidation>,
}

impl InProcessEventBus {
    /// Create a new bus with the given channel capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to notices on this bus.
    ///
    /// Returns a receiver that will get all notices published *after*
    /// the subscription is created.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Invalidation> {
        self.sender.subscribe()
    }
}

impl InvalidationPublisher for InProcessEventBus {
    fn publish(&self, invalidation: Invalidation) -> Result<(), HotelError> {
        // broadcast::send fails only when there are zero receivers.
        let _ = self.sender.send(invalidation);
        Ok(())
    }
}
