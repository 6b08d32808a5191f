//! Records and their rule schema
//!
//! A [`RecordValue`] carries two things side by side:
//!
//! - the **readable fields**, in declaration order, whose values the
//!   dispatcher may inspect;
//! - a [`Schema`] mapping field names to `rule:parameter` annotations.
//!
//! The two are kept apart on purpose: a schema entry whose field is not in
//! the readable set is how an annotated private field shows up, and the
//! dispatcher rejects the whole record when it sees one.
//!
//! `#[derive(Reflect)]` fills both from the struct definition. Records can
//! also be assembled by hand with [`RecordValue::builder`].

use crate::reflect::Reflect;
use crate::value::Value;

/// A named field value.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    name: String,
    value: Value,
}

impl Field {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// Per-field rule annotations, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    rules: Vec<(String, String)>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `annotation` to `field`.
    ///
    /// An empty annotation means "no rule" and is not stored. A second
    /// annotation for the same field replaces the first.
    pub fn insert(&mut self, field: impl Into<String>, annotation: impl Into<String>) {
        let field = field.into();
        let annotation = annotation.into();
        if annotation.is_empty() {
            return;
        }
        match self.rules.iter_mut().find(|(name, _)| *name == field) {
            Some(entry) => entry.1 = annotation,
            None => self.rules.push((field, annotation)),
        }
    }

    pub fn annotation(&self, field: &str) -> Option<&str> {
        self.rules
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, annotation)| annotation.as_str())
    }

    /// `(field, annotation)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.rules
            .iter()
            .map(|(field, annotation)| (field.as_str(), annotation.as_str()))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// A record value: readable fields plus the rule schema declared for them.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordValue {
    type_name: String,
    fields: Vec<Field>,
    schema: Schema,
}

impl RecordValue {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: Vec::new(),
            schema: Schema::new(),
        }
    }

    pub fn builder(type_name: impl Into<String>) -> RecordBuilder {
        RecordBuilder {
            record: Self::new(type_name),
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Add a readable field.
    pub fn push_field(&mut self, name: impl Into<String>, value: Value) {
        self.fields.push(Field {
            name: name.into(),
            value,
        });
    }

    /// Declare a rule for `name`, readable or not.
    pub fn push_rule(&mut self, name: impl Into<String>, annotation: impl Into<String>) {
        self.schema.insert(name, annotation);
    }

    /// Readable fields in declaration order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| &f.value)
    }

    pub fn is_readable(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// First schema entry whose field the engine cannot read.
    pub fn first_unreadable_rule(&self) -> Option<&str> {
        self.schema
            .iter()
            .map(|(field, _)| field)
            .find(|field| !self.is_readable(field))
    }
}

/// Builder for hand-assembled records.
///
/// ```
/// use rusty_rules::{RecordValue, Value};
///
/// let record = RecordValue::builder("Login")
///     .field("user", "alice")
///     .rule("user", "min:3")
///     .build();
///
/// assert_eq!(record.field("user"), Some(&Value::from("alice")));
/// assert!(!record.is_readable("password"));
/// assert_eq!(record.first_unreadable_rule(), None);
/// ```
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    record: RecordValue,
}

impl RecordBuilder {
    /// Add a readable field holding `value`.
    pub fn field<T: Reflect + ?Sized>(mut self, name: impl Into<String>, value: &T) -> Self {
        self.record.push_field(name, value.reflect());
        self
    }

    /// Attach a rule to `name`. Naming a field that was never added with
    /// [`field`](Self::field) marks it as annotated but unreadable.
    pub fn rule(mut self, name: impl Into<String>, annotation: impl Into<String>) -> Self {
        self.record.push_rule(name, annotation);
        self
    }

    pub fn build(self) -> RecordValue {
        self.record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_schema_skips_empty_and_replaces_duplicates() {
        let mut schema = Schema::new();
        schema.insert("a", "len:1");
        schema.insert("b", "");
        schema.insert("a", "len:2");
        schema.insert("c", "max:3");

        assert_eq!(
            schema.iter().collect::<Vec<_>>(),
            vec![("a", "len:2"), ("c", "max:3")]
        );
        assert_eq!(schema.annotation("b"), None);
        assert_eq!(schema.len(), 2);
    }

    #[test]
    fn test_builder_orders_fields_and_rules() {
        let record = RecordValue::builder("User")
            .field("name", "bob")
            .field("age", &42)
            .rule("age", "min:18")
            .rule("name", "len:3")
            .build();

        let names: Vec<_> = record.fields().iter().map(Field::name).collect();
        assert_eq!(names, vec!["name", "age"]);
        assert_eq!(record.field("age"), Some(&Value::Int(42)));
        assert_eq!(record.schema().annotation("name"), Some("len:3"));
        assert_eq!(record.first_unreadable_rule(), None);
    }

    #[test]
    fn test_first_unreadable_rule() {
        let record = RecordValue::builder("Account")
            .field("login", "root")
            .rule("login", "min:1")
            .rule("token", "len:32")
            .build();

        assert!(!record.is_readable("token"));
        assert_eq!(record.first_unreadable_rule(), Some("token"));
    }
}
