//! Usage text
//!
//! The option list is generated from the registry so it cannot drift from
//! what the dispatcher accepts.

use std::fmt::Write;

use bsr_options::{all_options, Privilege};

const SYNOPSIS: &str = "\
Usage: bsrender [-c <config file>] [-d <data directory>] [-o <output file>] [-q] [-h]
                [--<option>=<value> ...]

  -c <path>    configuration file (default: bsrender.cfg)
  -d <path>    data file directory
  -o <path>    output file name
  -q           suppress status output
  -h, --help   print this help and exit

Options may be set in the configuration file as option=value, one per line,
or on the command line as --option=value. Options marked (privileged) are
ignored when they arrive in a request query string.
";

/// Full usage text.
pub fn usage() -> String {
    let mut text = String::from(SYNOPSIS);
    text.push_str("\nOptions:\n");

    let width = all_options().map(|def| def.name.len()).max().unwrap_or(0);
    for def in all_options() {
        let marker = match def.privilege {
            Privilege::Privileged => " (privileged)",
            Privilege::Public => "",
        };
        // writing into a String cannot fail
        let _ = writeln!(
            text,
            "  {:<width$}  {}{}",
            def.name,
            def.kind(),
            marker,
            width = width
        );
    }
    text
}

pub fn print_usage() {
    print!("{}", usage());
}
