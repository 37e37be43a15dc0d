//! Validation of the raw `number` parameter.
//!
//! Accepted grammar: an optional `+` or `-` sign followed by one or more ASCII
//! decimal digits. No whitespace, decimal points, exponents, or separators.

use regex::Regex;
use std::sync::LazyLock;

static INTEGER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?[0-9]+$").expect("integer pattern is valid"));

/// Why a raw `number` parameter was rejected.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing number parameter")]
    Missing,

    #[error("not an integer: {0:?}")]
    Malformed(String),

    #[error("integer out of range: {0}")]
    OutOfRange(String),
}

impl ValidationError {
    /// The raw input as received, for echoing back to the client.
    ///
    /// `None` when the parameter was absent altogether.
    pub fn raw_input(&self) -> Option<&str> {
        match self {
            ValidationError::Missing => None,
            ValidationError::Malformed(raw) | ValidationError::OutOfRange(raw) => Some(raw),
        }
    }
}

/// Parse the raw query value into an `i64`.
pub fn parse_number(raw: Option<&str>) -> Result<i64, ValidationError> {
    let raw = raw.ok_or(ValidationError::Missing)?;

    if !INTEGER_RE.is_match(raw) {
        return Err(ValidationError::Malformed(raw.to_string()));
    }

    // The grammar already matched, so the only possible failure is overflow.
    raw.parse::<i64>()
        .map_err(|_| ValidationError::OutOfRange(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_plain() {
        assert_eq!(parse_number(Some("371")), Ok(371));
        assert_eq!(parse_number(Some("0")), Ok(0));
    }

    #[test]
    fn test_parse_number_signs() {
        assert_eq!(parse_number(Some("-42")), Ok(-42));
        assert_eq!(parse_number(Some("+42")), Ok(42));
    }

    #[test]
    fn test_parse_number_leading_zeros() {
        assert_eq!(parse_number(Some("007")), Ok(7));
    }

    #[test]
    fn test_parse_number_missing() {
        assert_eq!(parse_number(None), Err(ValidationError::Missing));
        assert_eq!(ValidationError::Missing.raw_input(), None);
    }

    #[test]
    fn test_parse_number_empty_is_malformed() {
        let err = parse_number(Some("")).unwrap_err();
        assert_eq!(err, ValidationError::Malformed(String::new()));
        assert_eq!(err.raw_input(), Some(""));
    }

    #[test]
    fn test_parse_number_rejects_non_integers() {
        for raw in [
            "abc", "1.5", "1e3", " 12", "12 ", "1 2", "1,000", "-", "+", "--1", "0x10", "١٢",
        ] {
            let err = parse_number(Some(raw)).unwrap_err();
            assert_eq!(err, ValidationError::Malformed(raw.to_string()), "{raw:?}");
        }
    }

    #[test]
    fn test_parse_number_bounds() {
        assert_eq!(parse_number(Some("9223372036854775807")), Ok(i64::MAX));
        assert_eq!(parse_number(Some("-9223372036854775808")), Ok(i64::MIN));
        assert_eq!(
            parse_number(Some("9223372036854775808")),
            Err(ValidationError::OutOfRange("9223372036854775808".to_string()))
        );
    }
}
