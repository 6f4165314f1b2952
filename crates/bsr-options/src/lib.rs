//! Option handling for the bsrender star renderer.
//!
//! This crate owns the configuration record and everything needed to apply
//! a single `key=value` segment to it. It performs no I/O; the source
//! loaders in the `bsrender` crate feed it.

mod parse;
mod record;
mod registry;
mod sanitize;
mod segment;

pub use parse::{parse_bool, parse_double, parse_int};
pub use record::{set_bounded_string, BsrConfig, MAX_STRING_LEN};
pub use registry::{
    all_options, dispatch, lookup, options_for, Field, OptionDef, OptionKind, Privilege, Trust,
    PRIVILEGED_OPTIONS, PUBLIC_OPTIONS,
};
pub use sanitize::{sanitize_value, MAX_VALUE_LEN};
pub use segment::{is_help, process_segment, split_segment, SegmentOutcome, MAX_TOKEN_LEN};
