//! Tracing subscriber setup for the command-line runner

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a formatted subscriber filtered by `RUST_LOG`.
///
/// Falls back to `default_level` (e.g. "info" or "debug") when the variable is
/// unset or unparsable. Per-match events are logged at debug level.
pub fn init(default_level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
