//! Diagnostic logging setup
//!
//! Events go to stderr so the board on stdout stays readable. `RUST_LOG`
//! overrides the default filter.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";
/// Filter used with `--quiet`
pub const QUIET_LOG_FILTER: &str = "error";

/// Pick the filter directive for the requested verbosity
pub const fn default_filter(quiet: bool) -> &'static str {
    if quiet {
        QUIET_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    }
}

/// Install the global subscriber
///
/// Returns `false` when a subscriber was already installed, which leaves the
/// existing one in place.
pub fn init_logging(quiet: bool) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(quiet)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
