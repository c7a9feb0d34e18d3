//! Log subscriber setup.
//!
//! Logs always go to stderr: stdout carries the console view and the RPC protocol.

use tracing_subscriber::EnvFilter;

use crate::types::settings::LoggingSettings;

/// Installs the global `tracing` subscriber. `RUST_LOG` overrides `settings.level`.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(settings: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let result = if settings.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if result.is_err() {
        tracing::debug!("log subscriber already installed");
    }
}
