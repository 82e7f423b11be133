//! Tracing subscriber setup for hosts that don't install their own.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "omegaboard=info";

/// Install a fmt subscriber filtered by `RUST_LOG` (default `omegaboard=info`).
///
/// Safe to call more than once; only the first call installs anything.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_err()
    {
        tracing::debug!("Tracing subscriber already installed");
    }
}
