//! Content schema validation.
//!
//! Each collection declares a fixed table of [`FieldSpec`]s. Validation is a
//! structural, field-by-field check of a raw front matter record against that
//! table. Every field is checked before reporting, so a failed record carries
//! the complete list of violations rather than just the first one.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde_yaml::{Mapping, Value};

/// Value kind a schema field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// UTF-8 string.
    Str,
    /// Boolean. Never coerced from strings.
    Bool,
    /// Date value, coerced from an RFC 3339 timestamp or a `YYYY-MM-DD`
    /// calendar date.
    Date,
    /// Ordered sequence of strings. May be empty.
    StringList,
}

impl FieldKind {
    /// Constraint description used in validation issues.
    pub fn expected(self) -> &'static str {
        match self {
            Self::Str => "a string",
            Self::Bool => "a boolean",
            Self::Date => "a date (RFC 3339 or YYYY-MM-DD)",
            Self::StringList => "a sequence of strings",
        }
    }
}

/// One field in a collection schema.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Front matter key.
    pub name: &'static str,

    /// Accepted value kind.
    pub kind: FieldKind,

    /// Whether the record is rejected when the field is absent.
    pub required: bool,
}

/// Declarative schema for one content collection.
///
/// Unknown extra fields in the input are ignored; the table only constrains
/// the fields it names.
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    /// Collection name the schema is registered under.
    pub collection: &'static str,

    /// Field table.
    pub fields: &'static [FieldSpec],
}

/// A single field constraint violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    /// Offending field name. Sequence elements are reported as `name[i]`.
    pub field: String,

    /// The constraint the field was expected to satisfy.
    pub expected: String,

    /// What the input actually contained.
    pub actual: String,
}

impl FieldIssue {
    fn new(field: impl Into<String>, expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "`{}`: expected {}, got {}",
            self.field, self.expected, self.actual
        )
    }
}

/// Validation failure for a whole record, enumerating every offending field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaValidationError {
    /// Collection whose schema was violated.
    pub collection: &'static str,

    /// All violations found in the record.
    pub issues: Vec<FieldIssue>,
}

impl SchemaValidationError {
    /// Whether the error names the given field (exact match).
    pub fn names_field(&self, field: &str) -> bool {
        self.issues.iter().any(|issue| issue.field == field)
    }
}

impl fmt::Display for SchemaValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid `{}` entry: ", self.collection)?;
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

impl std::error::Error for SchemaValidationError {}

impl Schema {
    /// Look up a field spec by name.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }

    /// Structurally check a raw record against the schema table.
    ///
    /// All fields are checked before reporting. Explicit nulls count as
    /// absent, matching how YAML front matter renders empty values.
    pub fn check(&self, record: &Mapping) -> Result<(), SchemaValidationError> {
        let mut issues = Vec::new();

        for spec in self.fields {
            match record.get(spec.name) {
                None | Some(Value::Null) => {
                    if spec.required {
                        issues.push(FieldIssue::new(
                            spec.name,
                            format!("{} (required)", spec.kind.expected()),
                            "absent",
                        ));
                    }
                }
                Some(value) => check_value(spec, value, &mut issues),
            }
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(SchemaValidationError {
                collection: self.collection,
                issues,
            })
        }
    }
}

/// Check one present value against its spec, pushing issues as found.
fn check_value(spec: &FieldSpec, value: &Value, issues: &mut Vec<FieldIssue>) {
    match spec.kind {
        FieldKind::Str => {
            if !value.is_string() {
                issues.push(FieldIssue::new(spec.name, spec.kind.expected(), describe(value)));
            }
        }
        FieldKind::Bool => {
            if !value.is_bool() {
                issues.push(FieldIssue::new(spec.name, spec.kind.expected(), describe(value)));
            }
        }
        FieldKind::Date => match value.as_str() {
            Some(raw) if parse_date(raw).is_some() => {}
            _ => issues.push(FieldIssue::new(spec.name, spec.kind.expected(), describe(value))),
        },
        FieldKind::StringList => match value.as_sequence() {
            Some(seq) => {
                for (i, element) in seq.iter().enumerate() {
                    if !element.is_string() {
                        issues.push(FieldIssue::new(
                            format!("{}[{i}]", spec.name),
                            "a string",
                            describe(element),
                        ));
                    }
                }
            }
            None => {
                issues.push(FieldIssue::new(spec.name, spec.kind.expected(), describe(value)));
            }
        },
    }
}

/// Coerce a raw scalar into a date value.
///
/// Accepts an RFC 3339 timestamp or a bare `YYYY-MM-DD` calendar date, which
/// normalizes to midnight UTC. Coercion is idempotent: parsing the RFC 3339
/// rendering of a coerced value yields the same instant.
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
}

/// Describe an input value for error reporting.
pub(crate) fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("boolean `{b}`"),
        Value::Number(n) => format!("number `{n}`"),
        Value::String(s) => format!("string \"{s}\""),
        Value::Sequence(_) => "a sequence".to_string(),
        Value::Mapping(_) => "a mapping".to_string(),
        Value::Tagged(tagged) => describe(&tagged.value),
    }
}
