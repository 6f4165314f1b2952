//! Value sanitizer
//!
//! Strips the padding people put around values in config files and query
//! strings: spaces, double quotes and single quotes. Only the ends are
//! touched; interior characters survive as-is.

use crate::record::floor_char_boundary;

/// Inputs longer than this many bytes are truncated before trimming.
pub const MAX_VALUE_LEN: usize = 254;

/// Padding characters removed from either end of a value.
const PADDING: &[char] = &[' ', '"', '\''];

/// Trim leading and trailing space/quote padding from a raw value.
pub fn sanitize_value(raw: &str) -> String {
    let end = floor_char_boundary(raw, MAX_VALUE_LEN);
    raw[..end].trim_matches(PADDING).to_string()
}
