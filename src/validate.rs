//! Record validation against a schema.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_yaml::Value;

use crate::errors::ValidationError;
use crate::kind::FieldKind;
use crate::record::{FieldValue, RawRecord, ValidatedRecord};
use crate::schema::Schema;

/// Validate a raw record against a schema.
///
/// Walks the schema's fields in declaration order: a missing required
/// field is a [`ValidationError::MissingField`], a present field whose
/// value fails its kind check is a [`ValidationError::TypeMismatch`],
/// and a missing optional field is simply omitted from the output.
/// Fields present in the record but not declared in the schema are
/// ignored.
///
/// All violations are accumulated, so a caller can report every problem
/// in one pass. Validation is all-or-nothing: no partial record is
/// returned on failure.
///
/// # Errors
///
/// Returns the full list of field-level violations, in schema
/// declaration order.
pub fn validate(
    schema: &Schema,
    raw: &RawRecord,
) -> Result<ValidatedRecord, Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut record = ValidatedRecord::default();

    for spec in schema.fields() {
        match raw.get(&spec.name) {
            None if spec.required => {
                errors.push(ValidationError::MissingField { field: spec.name.clone() });
            }
            None => {}
            Some(value) => match check_kind(spec.kind, value) {
                Ok(typed) => record.insert(spec.name.clone(), typed),
                Err(actual) => {
                    errors.push(ValidationError::TypeMismatch {
                        field: spec.name.clone(),
                        expected: spec.kind,
                        actual,
                    });
                }
            },
        }
    }

    if errors.is_empty() { Ok(record) } else { Err(errors) }
}

/// Check a raw value against a kind, producing the typed value or a
/// description of what was observed.
fn check_kind(kind: FieldKind, value: &Value) -> Result<FieldValue, String> {
    match (kind, value) {
        (FieldKind::String, Value::String(s)) => Ok(FieldValue::String(s.clone())),
        (FieldKind::Date, Value::String(s)) => parse_date(s)
            .map(FieldValue::Date)
            .ok_or_else(|| format!("\"{}\"", s)),
        (FieldKind::StringArray, Value::Sequence(seq)) => {
            let mut items = Vec::with_capacity(seq.len());
            for item in seq {
                match item {
                    Value::String(s) => items.push(s.clone()),
                    other => {
                        return Err(format!("list containing {}", yaml_type_name(other)));
                    }
                }
            }
            Ok(FieldValue::StringArray(items))
        }
        (_, other) => Err(yaml_type_name(other).to_string()),
    }
}

/// Parse a textual timestamp into a calendar date.
///
/// Accepts a plain date, an RFC 3339 timestamp, or an ISO 8601 datetime
/// without offset; the time-of-day portion is dropped.
fn parse_date(s: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S"))
        .map(|dt| dt.date())
        .ok()
}

/// Get a human-readable type name for a YAML value.
fn yaml_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "list",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged",
    }
}
