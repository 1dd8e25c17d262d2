//! Lenient number parsing for values that arrive as text.

use std::sync::LazyLock;

use regex::Regex;

/// Longest leading run that forms a decimal literal.
static FLOAT_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)")
        .expect("float prefix pattern is valid")
});

/// Parse the leading decimal literal of `text`.
///
/// Leading whitespace is skipped and anything after the literal is ignored,
/// so `"12.5 MB"` parses as `12.5`. Text without a leading literal yields
/// `NaN`.
pub fn parse_float_prefix(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let Some(found) = FLOAT_PREFIX.find(trimmed) else {
        return f64::NAN;
    };

    let literal = found.as_str();
    match literal.trim_start_matches(['+', '-']) {
        "Infinity" if literal.starts_with('-') => f64::NEG_INFINITY,
        "Infinity" => f64::INFINITY,
        _ => literal.parse().unwrap_or(f64::NAN),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_float_prefix("42"), 42.0);
        assert_eq!(parse_float_prefix("  -3.25"), -3.25);
        assert_eq!(parse_float_prefix(".5"), 0.5);
        assert_eq!(parse_float_prefix("7."), 7.0);
        assert_eq!(parse_float_prefix("1e3"), 1000.0);
    }

    #[test]
    fn test_trailing_garbage_ignored() {
        assert_eq!(parse_float_prefix("12.5 MB"), 12.5);
        assert_eq!(parse_float_prefix("44927abc"), 44927.0);
        assert_eq!(parse_float_prefix("3e"), 3.0);
    }

    #[test]
    fn test_infinity() {
        assert_eq!(parse_float_prefix("Infinity"), f64::INFINITY);
        assert_eq!(parse_float_prefix("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn test_not_a_number() {
        assert!(parse_float_prefix("").is_nan());
        assert!(parse_float_prefix("abc").is_nan());
        assert!(parse_float_prefix("-").is_nan());
        assert!(parse_float_prefix(".").is_nan());
    }
}
