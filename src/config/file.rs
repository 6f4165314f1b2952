//! Config file loader
//!
//! The file is plain text with one `key=value` per line. Anything after a
//! `#` is a comment. Only the first [`MAX_LINE_LEN`] bytes of a line are
//! read; the rest of that line is discarded. A final line with no newline
//! is dropped, as are lines that do not parse. Every other line is applied
//! as a trusted segment.

use std::fs;
use std::path::{Path, PathBuf};

use bsr_options::{process_segment, BsrConfig, SegmentOutcome, Trust};
use sha2::{Digest, Sha256};

use super::error::ConfigError;

/// Longest line content, in bytes, that is read as a segment.
pub const MAX_LINE_LEN: usize = 254;

/// Result of applying one config file
#[derive(Debug, Clone)]
pub struct FileLoad {
    /// Path the file was read from
    pub path: PathBuf,
    /// SHA-256 digest of the raw file bytes, hex encoded
    pub digest: String,
    /// Number of segments that updated the record
    pub applied: usize,
}

/// First [`MAX_LINE_LEN`] bytes of `line`, cut back to a char boundary.
fn bounded_line(line: &str) -> &str {
    if line.len() <= MAX_LINE_LEN {
        return line;
    }
    let mut end = MAX_LINE_LEN;
    while !line.is_char_boundary(end) {
        end -= 1;
    }
    &line[..end]
}

/// Split config file text into the segments it contributes.
pub fn file_segments(contents: &str) -> impl Iterator<Item = &str> {
    contents
        .split_inclusive('\n')
        .filter_map(|line| line.strip_suffix('\n'))
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .map(bounded_line)
        .map(|line| match line.find('#') {
            Some(pos) => &line[..pos],
            None => line,
        })
        .filter(|segment| !segment.is_empty())
}

/// Apply every segment of `contents` to `config` as trusted input.
///
/// Returns the number of segments applied.
pub fn apply_file_contents(config: &mut BsrConfig, contents: &str) -> Result<usize, ConfigError> {
    let mut applied = 0;
    for segment in file_segments(contents) {
        match process_segment(config, segment, Trust::Trusted) {
            SegmentOutcome::Applied => applied += 1,
            SegmentOutcome::Ignored => {}
            SegmentOutcome::HelpRequested => return Err(ConfigError::HelpRequested),
        }
    }
    Ok(applied)
}

/// Read the config file at `path` and apply it to `config`.
///
/// A file that cannot be read yields [`ConfigError::Io`] with `config`
/// untouched.
pub fn load_config_file(config: &mut BsrConfig, path: &Path) -> Result<FileLoad, ConfigError> {
    let bytes = fs::read(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    let digest = hex::encode(hasher.finalize());

    let contents = String::from_utf8_lossy(&bytes);
    let applied = apply_file_contents(config, &contents)?;

    tracing::debug!(path = %path.display(), %digest, applied, "loaded config file");

    Ok(FileLoad {
        path: path.to_path_buf(),
        digest,
        applied,
    })
}
