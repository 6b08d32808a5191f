//! Membership validation: `in`
//!
//! The parameter is a comma-separated list. Entries are taken verbatim, with
//! no trimming, so `in:a, b` allows `"a"` and `" b"`.

use crate::config::MembershipInts;
use crate::error::{SyntaxError, ViolationKind};

/// Parses an `in` list for string values
pub fn parse_str_list(param: &str) -> Result<Vec<&str>, SyntaxError> {
    if param.is_empty() {
        return Err(SyntaxError::EmptyList);
    }
    Ok(param.split(',').collect())
}

/// Parses an `in` list for integer values
///
/// In [`MembershipInts::Lenient`] mode an entry that is not an integer
/// counts as `0`, so `in:1,x` allows `1` and `0`.
pub fn parse_int_list(param: &str, mode: MembershipInts) -> Result<Vec<i64>, SyntaxError> {
    if param.is_empty() {
        return Err(SyntaxError::EmptyList);
    }
    param
        .split(',')
        .map(|entry| match (entry.parse::<i64>(), mode) {
            (Ok(n), _) => Ok(n),
            (Err(_), MembershipInts::Lenient) => Ok(0),
            (Err(_), MembershipInts::Strict) => Err(SyntaxError::BadListEntry(entry.to_string())),
        })
        .collect()
}

/// Validates that `value` is one of `allowed`
pub fn validate_in<T: PartialEq>(value: &T, allowed: &[T]) -> Result<(), ViolationKind> {
    if allowed.contains(value) {
        Ok(())
    } else {
        Err(ViolationKind::Membership)
    }
}
