//! Diagnostic logging setup shared by both binaries

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install a stderr `tracing` subscriber.
///
/// Respects `RUST_LOG`; falls back to `warn` so unreadable-file notices are
/// visible by default. Safe to call more than once (later calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .with(filter)
        .try_init();
}
