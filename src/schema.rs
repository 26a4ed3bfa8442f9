//! Schema declarations for content records.

use crate::errors::SchemaError;
use crate::kind::FieldKind;

/// A declared front-matter field: name, kind, and required flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name, unique within a schema.
    pub name: String,
    /// Kind of value the field must hold.
    pub kind: FieldKind,
    /// Whether the field must be present.
    pub required: bool,
}

impl FieldSpec {
    /// Declare a required field.
    pub fn required(name: impl Into<String>, kind: FieldKind) -> Self {
        Self { name: name.into(), kind, required: true }
    }

    /// Declare an optional field.
    pub fn optional(name: impl Into<String>, kind: FieldKind) -> Self {
        Self { name: name.into(), kind, required: false }
    }
}

/// An ordered, name-unique set of field declarations.
///
/// Built once at startup and read-shared by every validation call;
/// there is no mutation API after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    fields: Vec<FieldSpec>,
}

impl Schema {
    /// Build a schema from field declarations.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Empty`] if no fields are declared, or
    /// [`SchemaError::DuplicateField`] if a name appears twice.
    pub fn new(fields: Vec<FieldSpec>) -> Result<Self, SchemaError> {
        if fields.is_empty() {
            return Err(SchemaError::Empty);
        }
        for (i, spec) in fields.iter().enumerate() {
            if fields[..i].iter().any(|other| other.name == spec.name) {
                return Err(SchemaError::DuplicateField(spec.name.clone()));
            }
        }
        Ok(Self { fields })
    }

    /// Declared fields, in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Get the declaration for a field.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }

    /// Check whether the schema declares a field.
    #[must_use]
    pub fn has_field(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Names of all required fields, in declaration order.
    #[must_use]
    pub fn required_fields(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|spec| spec.required)
            .map(|spec| spec.name.as_str())
            .collect()
    }

    /// Number of declared fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the schema declares no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::required("title", FieldKind::String),
            FieldSpec::required("date", FieldKind::Date),
            FieldSpec::optional("tags", FieldKind::StringArray),
        ]
    }

    #[test]
    fn test_schema_construction() {
        let schema = Schema::new(sample_fields()).unwrap();
        assert_eq!(schema.len(), 3);
        assert!(schema.has_field("title"));
        assert!(!schema.has_field("author"));
    }

    #[test]
    fn test_empty_schema_rejected() {
        assert_eq!(Schema::new(vec![]), Err(SchemaError::Empty));
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let fields = vec![
            FieldSpec::required("title", FieldKind::String),
            FieldSpec::optional("title", FieldKind::String),
        ];
        assert_eq!(
            Schema::new(fields),
            Err(SchemaError::DuplicateField("title".to_string()))
        );
    }

    #[test]
    fn test_required_fields() {
        let schema = Schema::new(sample_fields()).unwrap();
        assert_eq!(schema.required_fields(), vec!["title", "date"]);
    }

    #[test]
    fn test_declaration_order_preserved() {
        let schema = Schema::new(sample_fields()).unwrap();
        let names: Vec<_> = schema.fields().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["title", "date", "tags"]);
    }

    #[test]
    fn test_get_field() {
        let schema = Schema::new(sample_fields()).unwrap();
        let spec = schema.get("tags").unwrap();
        assert_eq!(spec.kind, FieldKind::StringArray);
        assert!(!spec.required);
    }
}
