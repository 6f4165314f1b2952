//! Command-line loader
//!
//! Recognized arguments, keyed on the character after the leading dash:
//! - `-c <path>`: config file
//! - `-d <path>`: data file directory
//! - `-o <path>`: output file
//! - `-h`: print usage and exit
//! - `-q`: suppress status output
//! - `--<option>=<value>`: any registered option, trusted
//!
//! Path flags take their value either concatenated (`-d/data`) or from the
//! next argument when that argument does not itself start with a dash.
//! Unrecognized arguments are ignored.

use bsr_options::{process_segment, set_bounded_string, BsrConfig, SegmentOutcome, Trust};

use super::error::ConfigError;

/// Value for a path flag at `args[i]`, and how many extra arguments it used.
fn flag_value(args: &[String], i: usize) -> Option<(&str, usize)> {
    let inline = &args[i][2..];
    if !inline.is_empty() {
        return Some((inline, 0));
    }
    match args.get(i + 1) {
        Some(next) if !next.starts_with('-') => Some((next.as_str(), 1)),
        _ => None,
    }
}

/// Apply process arguments to `config`. `args[0]` is the program name.
///
/// Command-line input is always trusted. Returns the number of arguments
/// that updated the record.
pub fn apply_command_line(config: &mut BsrConfig, args: &[String]) -> Result<usize, ConfigError> {
    let mut applied = 0;
    let mut i = 1;

    while i < args.len() {
        let arg = &args[i];
        let Some(flag) = arg.strip_prefix('-').and_then(|rest| rest.chars().next()) else {
            i += 1;
            continue;
        };

        match flag {
            'c' | 'd' | 'o' => {
                if let Some((value, consumed)) = flag_value(args, i) {
                    let dest = match flag {
                        'c' => &mut config.config_file_name,
                        'd' => &mut config.data_file_directory,
                        _ => &mut config.output_file_name,
                    };
                    set_bounded_string(dest, value);
                    applied += 1;
                    i += consumed;
                }
            }
            'h' => return Err(ConfigError::HelpRequested),
            'q' => {
                config.print_status = false;
                applied += 1;
            }
            '-' => match process_segment(config, &arg[2..], Trust::Trusted) {
                SegmentOutcome::Applied => applied += 1,
                SegmentOutcome::Ignored => {}
                SegmentOutcome::HelpRequested => return Err(ConfigError::HelpRequested),
            },
            _ => {}
        }
        i += 1;
    }

    Ok(applied)
}
