//! Configuration resolution
//!
//! Builds the renderer configuration from its layered sources:
//! 1. Built-in defaults
//! 2. Config file (trusted)
//! 3. Command line (trusted), or the request query string (untrusted)

mod cli;
mod effective;
mod error;
mod file;
mod mode;
mod query;

pub use cli::apply_command_line;
pub use effective::{ConfigOrigin, ConfigSource, EffectiveConfig, VERSION};
pub use error::ConfigError;
pub use file::{apply_file_contents, file_segments, load_config_file, FileLoad, MAX_LINE_LEN};
pub use mode::{InvocationMode, QUERY_STRING_VAR};
pub use query::{apply_query_string, query_segments};
