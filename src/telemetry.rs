//! Logging setup shared by every function entrypoint.

use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// Filter comes from `RUST_LOG` (default `info`). Target and timestamp are
/// omitted since the platform log sink records ingestion time.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}
