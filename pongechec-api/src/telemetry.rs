//! Tracing Subscriber Initialization
//!
//! Sets up structured logging for the API process. Filtering follows the
//! standard `RUST_LOG` conventions via EnvFilter; `PONGECHEC_LOG_JSON=true`
//! switches the output to newline-delimited JSON for log shippers.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// Call once at startup, before any tracing occurs.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let json_output = std::env::var("PONGECHEC_LOG_JSON")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);

    if json_output {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
