//! Subscriber setup shared by the binaries.
//!
//! Library code only emits `tracing` events; binaries call [`init`] once.

use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count.
pub fn filter_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install a fmt subscriber. `RUST_LOG` takes precedence over
/// `default_filter`. A second call is a no-op.
pub fn init(default_filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .try_init();
}
