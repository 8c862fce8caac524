//! Logging initialization.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT_ONCE: Once = Once::new();

/// Install the global `tracing` subscriber with the given filter directive.
///
/// Only the first call has an effect. An invalid directive falls back to
/// `info`, and an already-installed subscriber is left in place.
pub fn init(filter: &str) {
    INIT_ONCE.call_once(|| {
        let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .try_init();
    });
}
