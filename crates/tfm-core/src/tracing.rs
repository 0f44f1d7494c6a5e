//! Tracing subscriber setup for hosts and tests.

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the filter directive (e.g. `tfm_enum=debug`).
pub const LOG_ENV_VAR: &str = "TFM_LOG";

/// Install the global fmt subscriber with an `info` default filter.
pub fn init_tracing() -> bool {
    init_tracing_with_default("info")
}

/// Install the global fmt subscriber, reading the filter from [`LOG_ENV_VAR`]
/// and falling back to `default_directive`.
///
/// Returns `false` if a global subscriber was already installed; the existing
/// one is left untouched.
pub fn init_tracing_with_default(default_directive: &str) -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
