//! Error types for schema construction, validation, and registration.

use thiserror::Error;

use crate::kind::FieldKind;

/// Errors that can occur when constructing a schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Schema declares no fields.
    #[error("schema declares no fields")]
    Empty,

    /// A field name appears more than once.
    #[error("duplicate field in schema: {0}")]
    DuplicateField(String),
}

/// A field-level validation failure.
///
/// Both variants are ordinary outcomes of checking a record, reported
/// back to the caller as values rather than raised as faults.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing from the record.
    #[error("missing required field: {field}")]
    MissingField { field: String },

    /// A present field's value does not satisfy its declared kind.
    #[error("invalid type for field '{field}': expected {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: FieldKind,
        actual: String,
    },
}

impl ValidationError {
    /// Name of the field this error refers to.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::MissingField { field } | Self::TypeMismatch { field, .. } => field,
        }
    }
}

/// Errors from the collection registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A collection with this name is already registered.
    #[error("duplicate collection: {0}")]
    Duplicate(String),

    /// No collection with this name is registered.
    #[error("unknown collection: {0}")]
    Unknown(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_field_accessor() {
        let missing = ValidationError::MissingField { field: "title".to_string() };
        assert_eq!(missing.field(), "title");

        let mismatch = ValidationError::TypeMismatch {
            field: "date".to_string(),
            expected: FieldKind::Date,
            actual: "number".to_string(),
        };
        assert_eq!(mismatch.field(), "date");
    }

    #[test]
    fn test_error_messages() {
        let missing = ValidationError::MissingField { field: "category".to_string() };
        assert_eq!(missing.to_string(), "missing required field: category");

        let mismatch = ValidationError::TypeMismatch {
            field: "tags".to_string(),
            expected: FieldKind::StringArray,
            actual: "string".to_string(),
        };
        assert_eq!(
            mismatch.to_string(),
            "invalid type for field 'tags': expected string array, got string"
        );
    }
}
