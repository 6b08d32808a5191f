//! # rusty-rules
//!
//! Annotation-driven struct field validation. Attach a `rule:parameter`
//! annotation to a field, call [`validate`], and get back every violation in
//! the record at once.
//!
//! ## Quick Start
//!
//! ```rust
//! use rusty_rules::{validate, Reflect, ViolationKind};
//!
//! #[derive(Reflect)]
//! pub struct Signup {
//!     #[validate("len:5")]
//!     pub code: String,
//!
//!     #[validate("min:18")]
//!     pub age: i64,
//!
//!     #[validate("in:admin,user")]
//!     pub roles: Vec<String>,
//! }
//!
//! let form = Signup {
//!     code: "ab".to_string(),
//!     age: 30,
//!     roles: vec!["user".to_string(), "root".to_string()],
//! };
//!
//! let err = validate(&form).unwrap_err();
//! let violations = err.violations().unwrap();
//! assert_eq!(violations.len(), 2);
//! assert!(violations.has("code", ViolationKind::Length));
//! assert!(violations.has("roles", ViolationKind::Membership));
//! assert_eq!(
//!     err.to_string(),
//!     "code: len validation failed\nroles: in validation failed"
//! );
//! ```
//!
//! ## Rules
//!
//! | Annotation | Applies to | Passes when |
//! |------------|------------|-------------|
//! | `len:N`    | strings | byte length is exactly `N` (`N >= 0`) |
//! | `min:N`    | integers, strings (length) | value `>= N` |
//! | `max:N`    | integers, strings (length) | value `<= N` |
//! | `in:a,b,c` | strings, integers | value is one of the listed entries |
//!
//! Sequences (`Vec<T>`, slices, arrays) are checked element by element.
//! `Option`, `Box`, `Rc` and `Arc` are looked through.
//!
//! ## Errors
//!
//! - [`ValidateError::NotARecord`]: the input is not a record, directly or
//!   behind one level of indirection.
//! - [`ValidateError::UnexportedField`]: a non-`pub` field carries a rule.
//! - [`ValidateError::Invalid`]: one or more fields failed. The wrapped
//!   [`ValidationErrors`] holds every [`Violation`] in field order.
//!
//! A parameter that does not parse (`min:abc`, `len:-1`, `in:`) is reported
//! as a [`ViolationKind::Syntax`] violation for its field; the other fields
//! are still checked.
//!
//! ## Configuration
//!
//! Two lenient behaviours are switchable through [`ValidatorConfig`]:
//! unknown rule names are ignored, and `in` entries that are not integers
//! count as `0` when the field is an integer. See [`UnknownRules`] and
//! [`MembershipInts`].

extern crate self as rusty_rules;

pub mod collection;
pub mod config;
pub mod error;
pub mod numeric;
pub mod record;
pub mod reflect;
pub mod report;
pub mod rule;
pub mod string;
pub mod validator;
pub mod value;

// Re-export derive macro
pub use rusty_rules_derive::Reflect;

// Re-export core types
pub use config::{MembershipInts, UnknownRules, ValidatorConfig};
pub use error::{SyntaxError, ValidateError, ValidationErrors, Violation, ViolationKind};
pub use record::{Field, RecordBuilder, RecordValue, Schema};
pub use reflect::Reflect;
pub use report::ValidationReport;
pub use rule::{Annotation, RuleName};
pub use validator::{validate, Validator};
pub use value::{Value, ValueKind};
