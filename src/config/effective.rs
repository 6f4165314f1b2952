//! Effective configuration with provenance
//!
//! Runs the loaders in precedence order and records which sources
//! contributed to the final record.
//!
//! Interactive runs: defaults → command line → config file → command line.
//! The first command-line pass locates the config file and honours `-q`;
//! the second makes command-line values win over the file.
//!
//! Request-serving runs: defaults → command line → config file → query
//! string. Query-string segments are untrusted and reach public options
//! only. No status lines are printed.

use std::io::{self, Write};
use std::path::PathBuf;

use bsr_options::BsrConfig;
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::cli::apply_command_line;
use super::error::ConfigError;
use super::file::load_config_file;
use super::mode::InvocationMode;
use super::query::apply_query_string;

/// Version reported in status output
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Origin of a configuration source
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ConfigOrigin {
    Defaults,
    File,
    CommandLine,
    QueryString,
}

/// A contributing config source with provenance
#[derive(Debug, Clone, Serialize)]
pub struct ConfigSource {
    /// Origin of this source
    pub origin: ConfigOrigin,

    /// File path (config file only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// SHA-256 digest of raw file bytes (config file only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,

    /// Number of settings this source changed
    pub applied: usize,
}

impl ConfigSource {
    fn new(origin: ConfigOrigin, applied: usize) -> Self {
        Self {
            origin,
            path: None,
            digest: None,
            applied,
        }
    }
}

/// Resolved configuration plus where it came from
#[derive(Debug, Clone, Serialize)]
pub struct EffectiveConfig {
    /// When resolution finished
    pub resolved_at: DateTime<Utc>,

    /// The final record handed to the render pipeline
    pub config: BsrConfig,

    /// Contributing sources in the order they were applied
    pub sources: Vec<ConfigSource>,
}

impl EffectiveConfig {
    /// Resolve the configuration, printing status lines to stdout.
    pub fn resolve(args: &[String], mode: &InvocationMode) -> Result<Self, ConfigError> {
        let stdout = io::stdout();
        let mut status = stdout.lock();
        Self::resolve_with_status(args, mode, &mut status)
    }

    /// Resolve the configuration, printing status lines to `status`.
    ///
    /// Stops at the first help request with [`ConfigError::HelpRequested`].
    pub fn resolve_with_status<W: Write>(
        args: &[String],
        mode: &InvocationMode,
        status: &mut W,
    ) -> Result<Self, ConfigError> {
        let mut config = BsrConfig::default();
        let mut sources = vec![ConfigSource::new(ConfigOrigin::Defaults, 0)];

        let first_pass = apply_command_line(&mut config, args)?;
        if !mode.is_interactive() {
            sources.push(ConfigSource::new(ConfigOrigin::CommandLine, first_pass));
        }

        if mode.is_interactive() && config.print_status {
            writeln!(status, "bsrender version {}", VERSION).map_err(ConfigError::Status)?;
            writeln!(status, "Loading configuration file {}", config.config_file_name)
                .map_err(ConfigError::Status)?;
            status.flush().map_err(ConfigError::Status)?;
        }

        let path = PathBuf::from(&config.config_file_name);
        match load_config_file(&mut config, &path) {
            Ok(load) => sources.push(ConfigSource {
                origin: ConfigOrigin::File,
                path: Some(load.path.to_string_lossy().to_string()),
                digest: Some(load.digest),
                applied: load.applied,
            }),
            Err(ConfigError::Io { path, source }) => {
                tracing::warn!("could not open {}: {}", path.display(), source);
            }
            Err(e) => return Err(e),
        }

        match mode {
            InvocationMode::Interactive => {
                let applied = apply_command_line(&mut config, args)?;
                sources.push(ConfigSource::new(ConfigOrigin::CommandLine, applied));
            }
            InvocationMode::RequestServing { query } => {
                let applied = apply_query_string(&mut config, query)?;
                sources.push(ConfigSource::new(ConfigOrigin::QueryString, applied));
            }
        }

        tracing::debug!(sources = sources.len(), "configuration resolved");

        Ok(Self {
            resolved_at: Utc::now(),
            config,
            sources,
        })
    }

    /// First source with the given origin
    pub fn source(&self, origin: ConfigOrigin) -> Option<&ConfigSource> {
        self.sources.iter().find(|s| s.origin == origin)
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Hand the record over to its consumer
    pub fn into_config(self) -> BsrConfig {
        self.config
    }
}
