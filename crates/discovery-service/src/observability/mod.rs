//! Observability: tracing initialization and metrics.

pub mod metrics;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing with an env-filter.
///
/// Intended to be called once by the embedding binary; a second call is a
/// no-op rather than an error.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "discovery_service=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
