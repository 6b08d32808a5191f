//! String validation: `len`
//!
//! Lengths are byte lengths of the UTF-8 encoding, the same measure
//! `min`/`max` use for strings.

use crate::error::{SyntaxError, ViolationKind};

/// Parses a `len` parameter: a non-negative integer
pub fn parse_length(param: &str) -> Result<usize, SyntaxError> {
    let length = param
        .parse::<i64>()
        .map_err(|_| SyntaxError::NotAnInteger(param.to_string()))?;
    usize::try_from(length).map_err(|_| SyntaxError::NegativeLength(length))
}

/// Validates exact string length
pub fn validate_len(s: &str, length: usize) -> Result<(), ViolationKind> {
    if s.len() == length {
        Ok(())
    } else {
        Err(ViolationKind::Length)
    }
}

/// Byte length as a signed value, for comparing against `min`/`max` bounds
pub fn byte_len(s: &str) -> i64 {
    i64::try_from(s.len()).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_validator() {
        assert!(validate_len("abcde", 5).is_ok());
        assert!(validate_len("", 0).is_ok());
        assert_eq!(validate_len("ab", 5), Err(ViolationKind::Length));
        assert_eq!(validate_len("abcdef", 5), Err(ViolationKind::Length));
    }

    #[test]
    fn test_length_counts_bytes() {
        // "é" is two bytes in UTF-8
        assert!(validate_len("é", 2).is_ok());
        assert_eq!(byte_len("héllo"), 6);
    }

    #[test]
    fn test_parse_length() {
        assert_eq!(parse_length("0"), Ok(0));
        assert_eq!(parse_length("12"), Ok(12));
        assert_eq!(parse_length("-1"), Err(SyntaxError::NegativeLength(-1)));
        assert_eq!(
            parse_length("five"),
            Err(SyntaxError::NotAnInteger("five".to_string()))
        );
    }
}
