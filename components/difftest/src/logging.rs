//! Log subscriber setup

use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber
///
/// Logs go to stderr so stdout carries nothing but comparison blocks.
/// `RUST_LOG` takes precedence over `default_level`.
pub fn init_logging(default_level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}
