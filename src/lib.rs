//! bsrender configuration
//!
//! Resolves the single configuration record the renderer runs from. Values
//! come from built-in defaults, a config file, the command line and, when
//! serving a request, the query string. Request input can only reach
//! public options.

pub mod config;
pub mod logging;
pub mod usage;

pub use bsr_options::{BsrConfig, Trust};
pub use config::{ConfigError, ConfigOrigin, EffectiveConfig, InvocationMode};
