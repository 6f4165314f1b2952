//! Query-string loader
//!
//! Request parameters arrive as one `&`-delimited string of `key=value`
//! segments. They are untrusted: only public options can be reached.
//! Values are taken literally, with no percent-decoding.

use bsr_options::{process_segment, BsrConfig, SegmentOutcome, Trust};

use super::error::ConfigError;

/// Split a query string into its segments. An empty string has none.
pub fn query_segments(query: &str) -> impl Iterator<Item = &str> {
    query.split('&').filter(|segment| !segment.is_empty())
}

/// Apply a request query string to `config` as untrusted input.
///
/// Returns the number of segments applied.
pub fn apply_query_string(config: &mut BsrConfig, query: &str) -> Result<usize, ConfigError> {
    let mut applied = 0;
    for segment in query_segments(query) {
        match process_segment(config, segment, Trust::Untrusted) {
            SegmentOutcome::Applied => applied += 1,
            SegmentOutcome::Ignored => {}
            SegmentOutcome::HelpRequested => return Err(ConfigError::HelpRequested),
        }
    }
    Ok(applied)
}
