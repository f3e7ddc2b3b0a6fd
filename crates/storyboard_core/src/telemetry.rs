//! Tracing subscriber initialisation.

use storyboard_error::ConfigError;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset.
///
/// The `storyboard` target prefix covers every workspace crate.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "info,storyboard=debug"
    } else {
        "warn,storyboard=info"
    }
}

/// Initialize console tracing.
///
/// Respects `RUST_LOG`; otherwise falls back to [`default_directive`].
///
/// # Errors
///
/// Returns error if a global subscriber is already installed.
pub fn init_tracing(verbose: bool) -> Result<(), ConfigError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| ConfigError::new(format!("Failed to initialize tracing: {}", e)))
}
