//! Logging setup
//!
//! stdout carries status lines and usage text, so log output goes to
//! stderr. The filter comes from `BSR_LOG`, then `RUST_LOG`, and defaults
//! to warnings only.

use std::io::IsTerminal;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the log filter
pub const LOG_ENV_VAR: &str = "BSR_LOG";

const DEFAULT_FILTER: &str = "bsrender=warn,bsr_options=warn";

/// Build the log filter from the environment.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Call once, before configuration is
/// resolved.
pub fn init_logging() {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .without_time();

    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt_layer)
        .init();
}
