//! Lenient value parsers
//!
//! Values never fail to parse. Numbers are read from the longest valid
//! prefix, the way the C library's `strtol`/`strtod` behave; anything
//! unreadable becomes zero.

/// Boolean options are true iff the value mentions "yes" anywhere.
pub fn parse_bool(value: &str) -> bool {
    value.to_ascii_lowercase().contains("yes")
}

/// Leading whitespace as C's `isspace` sees it, ASCII only.
fn skip_space(value: &str) -> &str {
    value.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '\x0b')
}

/// Base-10 integer from the longest valid prefix, saturating at `i32` bounds.
pub fn parse_int(value: &str) -> i32 {
    let s = skip_space(value);
    let bytes = s.as_bytes();
    let mut i = 0;
    let negative = match bytes.first() {
        Some(b'-') => {
            i = 1;
            true
        }
        Some(b'+') => {
            i = 1;
            false
        }
        _ => false,
    };

    let mut acc: i64 = 0;
    let mut seen_digit = false;
    while let Some(digit) = bytes.get(i).filter(|b| b.is_ascii_digit()) {
        seen_digit = true;
        acc = acc
            .saturating_mul(10)
            .saturating_add(i64::from(digit - b'0'));
        i += 1;
    }
    if !seen_digit {
        return 0;
    }

    let signed = if negative { -acc } else { acc };
    signed.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Floating point value from the longest valid prefix.
pub fn parse_double(value: &str) -> f64 {
    let s = skip_space(value);
    let len = float_prefix_len(s);
    if len == 0 {
        return 0.0;
    }
    s[..len].parse().unwrap_or(0.0)
}

/// Length of the longest prefix of `s` that reads as a float literal.
fn float_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i = 1;
    }

    // inf, infinity and nan, in any case
    let rest = &bytes[i..];
    for word in ["infinity", "inf", "nan"] {
        let word = word.as_bytes();
        if rest.len() >= word.len() && rest[..word.len()].eq_ignore_ascii_case(word) {
            return i + word.len();
        }
    }

    let int_start = i;
    while bytes.get(i).is_some_and(u8::is_ascii_digit) {
        i += 1;
    }
    let mut mantissa_digits = i - int_start;

    if bytes.get(i) == Some(&b'.') {
        let frac_start = i + 1;
        let mut j = frac_start;
        while bytes.get(j).is_some_and(u8::is_ascii_digit) {
            j += 1;
        }
        mantissa_digits += j - frac_start;
        if mantissa_digits > 0 {
            i = j;
        }
    }
    if mantissa_digits == 0 {
        return 0;
    }

    // An exponent only counts when at least one digit follows it
    if matches!(bytes.get(i), Some(b'e') | Some(b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+') | Some(b'-')) {
            j += 1;
        }
        let exp_start = j;
        while bytes.get(j).is_some_and(u8::is_ascii_digit) {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    i
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_yes_anywhere() {
        assert!(parse_bool("Yes"));
        assert!(parse_bool("YES_PLEASE"));
        assert!(parse_bool("yesterday"));
        assert!(parse_bool("oh yes"));
    }

    #[test]
    fn test_bool_everything_else_false() {
        assert!(!parse_bool("no"));
        assert!(!parse_bool("1"));
        assert!(!parse_bool("true"));
        assert!(!parse_bool(""));
        assert!(!parse_bool("ye s"));
    }

    #[test]
    fn test_int_plain() {
        assert_eq!(parse_int("42"), 42);
        assert_eq!(parse_int("-7"), -7);
        assert_eq!(parse_int("+9"), 9);
        assert_eq!(parse_int("  16"), 16);
        assert_eq!(parse_int("\t\x0b\n8"), 8);
    }

    #[test]
    fn test_non_ascii_space_is_not_skipped() {
        assert_eq!(parse_int("\u{a0}5"), 0);
        assert_eq!(parse_double("\u{a0}5"), 0.0);
        assert_eq!(parse_double("\u{2003}1.5"), 0.0);
        assert_eq!(parse_double(" \t1.5"), 1.5);
    }

    #[test]
    fn test_int_prefix_and_garbage() {
        assert_eq!(parse_int("12abc"), 12);
        assert_eq!(parse_int("3.9"), 3);
        assert_eq!(parse_int("abc"), 0);
        assert_eq!(parse_int(""), 0);
        assert_eq!(parse_int("-"), 0);
    }

    #[test]
    fn test_int_saturates() {
        assert_eq!(parse_int("99999999999999999999"), i32::MAX);
        assert_eq!(parse_int("-99999999999999999999"), i32::MIN);
    }

    #[test]
    fn test_double_plain() {
        assert_eq!(parse_double("180"), 180.0);
        assert_eq!(parse_double("4.5"), 4.5);
        assert_eq!(parse_double("-58.6"), -58.6);
        assert_eq!(parse_double(".5"), 0.5);
        assert_eq!(parse_double("5."), 5.0);
        assert_eq!(parse_double("1.0E99"), 1.0E99);
        assert_eq!(parse_double("2e-3"), 2e-3);
    }

    #[test]
    fn test_double_prefix_and_garbage() {
        assert_eq!(parse_double("180 degrees"), 180.0);
        assert_eq!(parse_double("1e"), 1.0);
        assert_eq!(parse_double("1e+"), 1.0);
        assert_eq!(parse_double("wide"), 0.0);
        assert_eq!(parse_double("."), 0.0);
        assert_eq!(parse_double(""), 0.0);
    }

    #[test]
    fn test_double_special_values() {
        assert!(parse_double("inf").is_infinite());
        assert!(parse_double("-Infinity").is_sign_negative());
        assert!(parse_double("NaN").is_nan());
    }
}
