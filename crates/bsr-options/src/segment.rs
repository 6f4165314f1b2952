//! Segment processor
//!
//! A segment is one `key=value` unit, whatever its origin: a config file
//! line, a `--key=value` argument or a query-string chunk. Malformed
//! segments are dropped without a diagnostic.

use crate::record::BsrConfig;
use crate::registry::{dispatch, Trust};
use crate::sanitize::sanitize_value;

/// Option names and raw values (counting the `=`) must stay below this
/// many bytes, otherwise the segment is discarded.
pub const MAX_TOKEN_LEN: usize = 254;

/// What happened to a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentOutcome {
    /// A registered option was updated
    Applied,
    /// Nothing changed: no delimiter, oversize token, or unknown option
    Ignored,
    /// The segment was the `help` keyword
    HelpRequested,
}

/// True if the segment is the bare `help` keyword.
pub fn is_help(segment: &str) -> bool {
    segment.trim().eq_ignore_ascii_case("help")
}

/// Split `segment` at its first `=`, enforcing token bounds.
pub fn split_segment(segment: &str) -> Option<(&str, &str)> {
    let (option, raw_value) = segment.split_once('=')?;
    if option.len() >= MAX_TOKEN_LEN || raw_value.len() + 1 >= MAX_TOKEN_LEN {
        return None;
    }
    Some((option, raw_value))
}

/// Process one segment against `config` at the given trust level.
///
/// Untrusted segments are dispatched against the public options only.
/// The help keyword is reported to the caller, who owns process exit.
pub fn process_segment(config: &mut BsrConfig, segment: &str, trust: Trust) -> SegmentOutcome {
    if is_help(segment) {
        return SegmentOutcome::HelpRequested;
    }

    let Some((option, raw_value)) = split_segment(segment) else {
        return SegmentOutcome::Ignored;
    };

    let value = sanitize_value(raw_value);
    if dispatch(config, option, &value, trust) {
        SegmentOutcome::Applied
    } else {
        SegmentOutcome::Ignored
    }
}
