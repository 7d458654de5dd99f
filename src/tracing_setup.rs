//! Tracing subscriber setup
//!
//! Log level filter comes from RUST_LOG (default: info).

use tracing_subscriber::EnvFilter;

/// Initialize the fmt subscriber for the binaries
///
/// Call once at startup. Subsequent calls are ignored so tests that share a
/// process do not panic on double-initialization.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
