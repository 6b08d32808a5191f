//! Error types
//!
//! Two severities come out of a validation call:
//!
//! - fatal errors ([`ValidateError::NotARecord`], [`ValidateError::UnexportedField`])
//!   abort the call before anything is checked;
//! - violations ([`Violation`]) are collected per field and returned together
//!   as [`ValidationErrors`] inside [`ValidateError::Invalid`].
//!
//! [`SyntaxError`] is the parser-level reason behind a
//! [`ViolationKind::Syntax`] violation. It only shows up in logs.

use std::fmt;

use thiserror::Error;

/// The failure recorded against a field.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    /// The rule parameter could not be interpreted.
    #[error("invalid validator syntax")]
    Syntax,

    /// `len` rule: string length differs from the parameter.
    #[error("len validation failed")]
    Length,

    /// `in` rule: value not in the parameter list.
    #[error("in validation failed")]
    Membership,

    /// `max` rule: value (or string length) above the parameter.
    #[error("max validation failed")]
    Maximum,

    /// `min` rule: value (or string length) below the parameter.
    #[error("min validation failed")]
    Minimum,
}

/// One failed check, tied to the field that produced it.
///
/// The kind is exposed as the error source, so callers walking
/// `Error::source()` land on the bare [`ViolationKind`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {kind}")]
pub struct Violation {
    field: String,
    #[source]
    kind: ViolationKind,
}

impl Violation {
    pub fn new(field: impl Into<String>, kind: ViolationKind) -> Self {
        Self {
            field: field.into(),
            kind,
        }
    }

    /// Name of the failing field.
    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn kind(&self) -> ViolationKind {
        self.kind
    }
}

/// Every violation found in one record, in the order they were recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    violations: Vec<Violation>,
}

impl ValidationErrors {
    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns a slice of all violations.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.violations.iter()
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<Violation> {
        self.violations
    }

    /// True if `field` failed with `kind` at least once.
    pub fn has(&self, field: &str, kind: ViolationKind) -> bool {
        self.violations
            .iter()
            .any(|v| v.field == field && v.kind == kind)
    }

    /// Field names of every violation of `kind`, repeats included.
    pub fn fields_with(&self, kind: ViolationKind) -> impl Iterator<Item = &str> + '_ {
        self.violations
            .iter()
            .filter(move |v| v.kind == kind)
            .map(|v| v.field.as_str())
    }
}

impl From<Vec<Violation>> for ValidationErrors {
    fn from(violations: Vec<Violation>) -> Self {
        Self { violations }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Result of a validation call that did not pass.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidateError {
    /// The input was not a record, even after one level of indirection.
    #[error("wrong argument given, should be a struct")]
    NotARecord,

    /// A field carries a rule but is not readable by the engine.
    #[error("validation for unexported field is not allowed: {field}")]
    UnexportedField {
        /// The first offending field in declaration order.
        field: String,
    },

    /// One or more fields failed their rules.
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
}

impl ValidateError {
    /// Whole-call errors that produced no report.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, ValidateError::Invalid(_))
    }

    pub fn violations(&self) -> Option<&ValidationErrors> {
        match self {
            ValidateError::Invalid(errors) => Some(errors),
            _ => None,
        }
    }

    pub fn into_violations(self) -> Option<ValidationErrors> {
        match self {
            ValidateError::Invalid(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Why a rule annotation or parameter was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("annotation {0:?} has no ':' between rule name and parameter")]
    MissingParameter(String),

    #[error("parameter {0:?} is not an integer")]
    NotAnInteger(String),

    #[error("length {0} is negative")]
    NegativeLength(i64),

    #[error("membership list is empty")]
    EmptyList,

    #[error("membership entry {0:?} is not an integer")]
    BadListEntry(String),

    #[error("unknown rule {0:?}")]
    UnknownRule(String),
}
