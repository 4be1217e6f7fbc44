//! Display text for the calculator.
//!
//! The engine keeps the display as a tagged value so the error sentinel never
//! mixes with numeral text until it reaches the display sink.

use std::fmt;

/// Text shown while the calculator is in the error state.
pub const ERROR_TEXT: &str = "Error";

/// What the calculator is currently showing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DisplayState {
    /// A numeral being typed, or a formatted result.
    Numeral(String),
    /// An invalid arithmetic result. Cleared by the next input.
    Error,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::Numeral("0".to_string())
    }
}

impl DisplayState {
    /// The text handed to the display sink.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Numeral(text) => text,
            Self::Error => ERROR_TEXT,
        }
    }

    /// Check if this is the error state.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    /// Read the displayed numeral as a number.
    ///
    /// Returns `None` for the error state or text that does not start with a
    /// number.
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Numeral(text) => parse_numeral(text),
            Self::Error => None,
        }
    }
}

impl fmt::Display for DisplayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Format a number the way it should appear on the display.
///
/// Uses the shortest digit string that round-trips. Plain notation is used
/// for `1e-6 <= |x| < 1e21`, scientific notation (`1.5e-7`, `1e+21`) outside
/// that range.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value.is_sign_positive() {
            "Infinity"
        } else {
            "-Infinity"
        };
        return text.to_string();
    }
    if value == 0.0 {
        // Also covers -0.0.
        return "0".to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "1.2345e-7".
    let scientific = format!("{:e}", value.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    let len = digits.len() as i32;
    // Position of the decimal point relative to the first digit.
    let point = exponent + 1;

    let body = if len <= point && point <= 21 {
        format!("{}{}", digits, "0".repeat((point - len) as usize))
    } else if 0 < point && point <= 21 {
        let (int_part, frac_part) = digits.split_at(point as usize);
        format!("{}.{}", int_part, frac_part)
    } else if -6 < point && point <= 0 {
        format!("0.{}{}", "0".repeat((-point) as usize), digits)
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{}{}", lead, sign, exponent.abs())
        } else {
            format!("{}.{}e{}{}", lead, rest, sign, exponent.abs())
        }
    };

    if value.is_sign_negative() {
        format!("-{}", body)
    } else {
        body
    }
}

/// Parse the longest numeric prefix of `text`.
///
/// Accepts an optional sign followed by `Infinity`, or digits with an
/// optional fraction and exponent. Trailing characters are ignored, so a
/// result that had digits typed after it (`"1e-7."`) still reads as a
/// number. Returns `None` when no digits can be read.
pub fn parse_numeral(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if text[end..].starts_with("Infinity") {
        return Some(if bytes[0] == b'-' {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digit_count = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        let frac_start = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        digit_count += end - frac_start;
    }

    if digit_count == 0 {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    text[..end].parse::<f64>().ok().filter(|value| !value.is_nan())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_format_plain() {
        assert_eq!(format_number(4.0), "4");
        assert_eq!(format_number(-12.0), "-12");
        assert_eq!(format_number(1000000.0), "1000000");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_fractions_use_shortest_digits() {
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(2.0 / 3.0), "0.6666666666666666");
        assert_eq!(format_number(0.000001), "0.000001");
    }

    #[test]
    fn test_large_and_small_magnitudes_use_exponent() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(-1.5e-7), "-1.5e-7");
        assert_eq!(format_number(1.2345e25), "1.2345e+25");
    }

    #[test]
    fn test_non_finite_values() {
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    #[test]
    fn test_parse_plain_numerals() {
        assert_eq!(parse_numeral("0"), Some(0.0));
        assert_eq!(parse_numeral("0."), Some(0.0));
        assert_eq!(parse_numeral("12.5"), Some(12.5));
        assert_eq!(parse_numeral("-4"), Some(-4.0));
    }

    #[test]
    fn test_parse_reads_numeric_prefix() {
        assert_eq!(parse_numeral("1e-7."), Some(1e-7));
        assert_eq!(parse_numeral("1e+21"), Some(1e21));
        assert_eq!(parse_numeral("4e"), Some(4.0));
        assert_eq!(parse_numeral("Infinity2"), Some(f64::INFINITY));
        assert_eq!(parse_numeral("-Infinity"), Some(f64::NEG_INFINITY));
    }

    #[test]
    fn test_parse_rejects_non_numbers() {
        assert_eq!(parse_numeral(""), None);
        assert_eq!(parse_numeral("."), None);
        assert_eq!(parse_numeral("-"), None);
        assert_eq!(parse_numeral("Error"), None);
        assert_eq!(parse_numeral("NaN"), None);
    }

    #[test]
    fn test_error_state_projects_to_sentinel() {
        assert_eq!(DisplayState::Error.as_str(), "Error");
        assert_eq!(DisplayState::Error.value(), None);
        assert_eq!(DisplayState::default().as_str(), "0");
        assert_eq!(DisplayState::Numeral("3.5".into()).to_string(), "3.5");
    }
}
