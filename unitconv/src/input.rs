//! Numeric input parsing
//!
//! Runs before the engine is ever invoked: empty text means "nothing to
//! convert" (no output, no message), anything that is not a finite real
//! number is an `InputError` with a one-line user-facing message.

use thiserror::Error;

/// Error for text that cannot be parsed as a finite real number
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please enter a valid numeric value.")]
    InvalidNumber(String),
}

/// Parse user input into a value to convert.
///
/// Returns `Ok(None)` for empty or whitespace-only text, `Ok(Some(v))`
/// for a finite number, and `InputError` otherwise. "inf" and "NaN"
/// parse as floats but are not convertible values, so they are rejected
/// along with non-numeric text.
pub fn parse_value(text: &str) -> Result<Option<f64>, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Some(v)),
        _ => Err(InputError::InvalidNumber(trimmed.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_none() {
        assert_eq!(parse_value(""), Ok(None));
        assert_eq!(parse_value("   "), Ok(None));
        assert_eq!(parse_value("\t\n"), Ok(None));
    }

    #[test]
    fn test_valid_numbers() {
        assert_eq!(parse_value("12"), Ok(Some(12.0)));
        assert_eq!(parse_value("-3.5"), Ok(Some(-3.5)));
        assert_eq!(parse_value(" 0.24 "), Ok(Some(0.24)));
        assert_eq!(parse_value("1e3"), Ok(Some(1000.0)));
    }

    #[test]
    fn test_invalid_input() {
        assert!(parse_value("abc").is_err());
        assert!(parse_value("12.3.4").is_err());
        assert!(parse_value("12,5").is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(parse_value("inf").is_err());
        assert!(parse_value("-inf").is_err());
        assert!(parse_value("NaN").is_err());
    }

    #[test]
    fn test_message_is_single_line() {
        let err = parse_value("abc").unwrap_err();
        assert_eq!(err.to_string(), "Please enter a valid numeric value.");
    }
}
