//! Rule dispatch
//!
//! [`Validator::validate`] reflects its input, makes sure it is a record
//! whose annotated fields are all readable, then walks the readable fields
//! in declaration order. Each annotated field has its annotation split into
//! rule name and parameter and is handed to the matching rule handler.
//!
//! A handler parses its parameter first. A parameter that does not parse
//! records one [`ViolationKind::Syntax`] for the field and ends that rule;
//! other fields are unaffected. Sequences are checked element by element,
//! and every failing element records its own violation.

use tracing::{debug, debug_span, trace};

use crate::collection::{parse_int_list, parse_str_list, validate_in};
use crate::config::{UnknownRules, ValidatorConfig};
use crate::error::{SyntaxError, ValidateError, ViolationKind};
use crate::numeric::{parse_bound, validate_max, validate_min};
use crate::reflect::Reflect;
use crate::report::ValidationReport;
use crate::rule::{Annotation, RuleName};
use crate::string::{byte_len, parse_length, validate_len};
use crate::value::Value;

/// Validates records against their field annotations.
///
/// Holds no per-call state; every call gets its own report.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidatorConfig,
}

impl Validator {
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate any reflectable value.
    ///
    /// # Errors
    ///
    /// - [`ValidateError::NotARecord`] if `value` is not a record, directly or
    ///   behind one level of indirection.
    /// - [`ValidateError::UnexportedField`] if a rule is attached to a field
    ///   the engine cannot read.
    /// - [`ValidateError::Invalid`] with every violation found otherwise.
    pub fn validate<T: Reflect + ?Sized>(&self, value: &T) -> Result<(), ValidateError> {
        self.validate_value(&value.reflect())
    }

    /// Validate an already reflected value.
    pub fn validate_value(&self, value: &Value) -> Result<(), ValidateError> {
        let record = value
            .deref_once()
            .as_record()
            .ok_or(ValidateError::NotARecord)?;

        let span = debug_span!("validate", record = record.type_name());
        let _enter = span.enter();

        if let Some(field) = record.first_unreadable_rule() {
            debug!(field, "rule attached to an unreadable field");
            return Err(ValidateError::UnexportedField {
                field: field.to_string(),
            });
        }

        let mut report = ValidationReport::new();
        for field in record.fields() {
            let Some(annotation) = record.schema().annotation(field.name()) else {
                continue;
            };
            trace!(
                field = field.name(),
                kind = %field.value().kind(),
                value = %field.value(),
                annotation,
                "checking field"
            );
            self.dispatch(field.name(), annotation, field.value(), &mut report);
        }

        debug!(violations = report.len(), "validation finished");
        report.into_result().map_err(ValidateError::Invalid)
    }

    fn dispatch(
        &self,
        field: &str,
        annotation: &str,
        value: &Value,
        report: &mut ValidationReport,
    ) {
        let mut check = FieldCheck {
            field,
            report,
            config: &self.config,
        };

        let Some(annotation) = check.syntax(Annotation::parse(annotation)) else {
            return;
        };

        let Some(rule) = annotation.rule() else {
            match self.config.unknown_rules {
                UnknownRules::Ignore => {
                    debug!(field, rule = annotation.name, "skipping unknown rule");
                }
                UnknownRules::Reject => {
                    check.reject(SyntaxError::UnknownRule(annotation.name.to_string()));
                }
            }
            return;
        };

        match rule {
            RuleName::Length => check.length(annotation.param, value),
            RuleName::Membership => check.membership(annotation.param, value),
            RuleName::Minimum => check.bound(annotation.param, value, validate_min::<i64>),
            RuleName::Maximum => check.bound(annotation.param, value, validate_max::<i64>),
        }
    }
}

/// Validate `value` with the default configuration.
///
/// Shorthand for `Validator::default().validate(value)`.
pub fn validate<T: Reflect + ?Sized>(value: &T) -> Result<(), ValidateError> {
    Validator::default().validate(value)
}

/// One rule applied to one field.
struct FieldCheck<'a> {
    field: &'a str,
    report: &'a mut ValidationReport,
    config: &'a ValidatorConfig,
}

impl FieldCheck<'_> {
    /// Unwrap a parse result, recording a syntax violation on failure.
    fn syntax<T>(&mut self, parsed: Result<T, SyntaxError>) -> Option<T> {
        match parsed {
            Ok(value) => Some(value),
            Err(err) => {
                self.reject(err);
                None
            }
        }
    }

    fn reject(&mut self, err: SyntaxError) {
        debug!(field = self.field, %err, "invalid rule syntax");
        self.report.push(self.field, ViolationKind::Syntax);
    }

    fn record(&mut self, outcome: Result<(), ViolationKind>) {
        self.report.record(self.field, outcome);
    }

    fn length(&mut self, param: &str, value: &Value) {
        let Some(expected) = self.syntax(parse_length(param)) else {
            return;
        };
        for_each_leaf(value, &mut |leaf| {
            if let Value::Str(s) = leaf {
                self.record(validate_len(s, expected));
            }
        });
    }

    fn bound(
        &mut self,
        param: &str,
        value: &Value,
        check: fn(i64, i64) -> Result<(), ViolationKind>,
    ) {
        let Some(bound) = self.syntax(parse_bound(param)) else {
            return;
        };
        for_each_leaf(value, &mut |leaf| match leaf {
            Value::Str(s) => self.record(check(byte_len(s), bound)),
            Value::Int(n) => self.record(check(*n, bound)),
            _ => {}
        });
    }

    // Each list flavour is parsed on first use and at most once.
    fn membership(&mut self, param: &str, value: &Value) {
        let mode = self.config.membership_ints;
        let mut strings: Option<Option<Vec<&str>>> = None;
        let mut ints: Option<Option<Vec<i64>>> = None;

        for_each_leaf(value, &mut |leaf| match leaf {
            Value::Str(s) => {
                let allowed = strings.get_or_insert_with(|| self.syntax(parse_str_list(param)));
                if let Some(allowed) = allowed.as_deref() {
                    self.record(validate_in(&s.as_str(), allowed));
                }
            }
            Value::Int(n) => {
                let allowed = ints.get_or_insert_with(|| self.syntax(parse_int_list(param, mode)));
                if let Some(allowed) = allowed.as_deref() {
                    self.record(validate_in(n, allowed));
                }
            }
            _ => {}
        });
    }
}

/// Visit every scalar in `value`, looking through `Ref`s and into sequences.
fn for_each_leaf<'v>(value: &'v Value, visit: &mut dyn FnMut(&'v Value)) {
    match value {
        Value::Ref(inner) => for_each_leaf(inner, visit),
        Value::Seq(items) => {
            for item in items {
                for_each_leaf(item, visit);
            }
        }
        leaf => visit(leaf),
    }
}
