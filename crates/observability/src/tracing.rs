//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process.
///
/// Filtering is configurable via `RUST_LOG` (default `info`). Output is
/// compact console text; `CLAIMDESK_LOG_JSON` switches to JSON lines for log
/// shippers. Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    if std::env::var_os("CLAIMDESK_LOG_JSON").is_some() {
        let _ = builder.json().try_init();
    } else {
        let _ = builder.compact().try_init();
    }
}
