use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global subscriber. Logs go to stderr so stdout carries only
/// the per-trial progress lines. `RUST_LOG` overrides `default_level`.
pub fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    // Ignore a second init (e.g. from tests).
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init();
}
