//! Tracing/logging initialization.
//!
//! Structured JSON lines on stdout, filtered through `RUST_LOG`. The
//! account service logs only at the HTTP edge; the policy and service
//! crates stay silent, so everything here is wired once in `main`.

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
