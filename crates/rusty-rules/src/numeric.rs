//! Numeric validation: `min` and `max`

use crate::error::{SyntaxError, ViolationKind};

/// Parses a signed integer bound (`min:-5`, `max:+10`)
///
/// Accepts an optional sign followed by decimal digits, nothing else.
pub fn parse_bound(param: &str) -> Result<i64, SyntaxError> {
    param
        .parse::<i64>()
        .map_err(|_| SyntaxError::NotAnInteger(param.to_string()))
}

/// Validates minimum value (inclusive)
pub fn validate_min<T: PartialOrd>(value: T, min: T) -> Result<(), ViolationKind> {
    if value >= min {
        Ok(())
    } else {
        Err(ViolationKind::Minimum)
    }
}

/// Validates maximum value (inclusive)
pub fn validate_max<T: PartialOrd>(value: T, max: T) -> Result<(), ViolationKind> {
    if value <= max {
        Ok(())
    } else {
        Err(ViolationKind::Maximum)
    }
}
