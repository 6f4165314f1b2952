//! Configuration errors
//!
//! Malformed input is never an error. The failures are an unreadable config
//! file, which the pipeline downgrades to a warning, a status line that
//! cannot be written, and a help request, which ends the configuration
//! phase early.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not open {}: {}", path.display(), source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write status output: {0}")]
    Status(#[source] io::Error),

    #[error("usage requested")]
    HelpRequested,
}
