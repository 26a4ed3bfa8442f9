//! Collection registry binding schemas to named collections.

use std::collections::HashMap;
use std::sync::Arc;

use crate::errors::{RegistryError, ValidationError};
use crate::record::{RawRecord, ValidatedRecord};
use crate::schema::Schema;
use crate::validate::validate;

/// A named group of content records sharing one schema.
#[derive(Debug, Clone)]
pub struct Collection {
    name: String,
    schema: Schema,
}

impl Collection {
    /// Create a collection from a name and a schema.
    pub fn new(name: impl Into<String>, schema: Schema) -> Self {
        Self { name: name.into(), schema }
    }

    /// Collection name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Schema shared by every record in the collection.
    #[must_use]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Validate a raw record against this collection's schema.
    ///
    /// # Errors
    ///
    /// Returns every field-level violation, in schema declaration
    /// order.
    pub fn validate(&self, raw: &RawRecord) -> Result<ValidatedRecord, Vec<ValidationError>> {
        validate(&self.schema, raw)
    }
}

/// Registry of all collections known to the content pipeline.
///
/// Constructed once at process start and read-shared afterwards. The
/// registry holds schemas, never records; records are validated against
/// a collection's schema one at a time.
#[derive(Debug, Default)]
pub struct CollectionRegistry {
    collections: HashMap<String, Arc<Collection>>,
}

impl CollectionRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a collection.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Duplicate`] if a collection with the
    /// same name is already registered.
    pub fn register(&mut self, collection: Collection) -> Result<(), RegistryError> {
        let name = collection.name().to_string();
        if self.collections.contains_key(&name) {
            return Err(RegistryError::Duplicate(name));
        }
        tracing::debug!(collection = %name, fields = collection.schema().len(), "registered collection");
        self.collections.insert(name, Arc::new(collection));
        Ok(())
    }

    /// Get a collection by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<Collection>> {
        self.collections.get(name).cloned()
    }

    /// Check whether a collection is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.collections.contains_key(name)
    }

    /// List all registered collection names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.collections.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered collections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.collections.len()
    }

    /// Whether no collections are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::FieldKind;
    use crate::schema::FieldSpec;

    fn make_collection(name: &str) -> Collection {
        let schema =
            Schema::new(vec![FieldSpec::required("title", FieldKind::String)]).unwrap();
        Collection::new(name, schema)
    }

    #[test]
    fn test_empty_registry() {
        let registry = CollectionRegistry::new();
        assert!(registry.is_empty());
        assert!(!registry.contains("blog"));
        assert!(registry.get("blog").is_none());
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = CollectionRegistry::new();
        registry.register(make_collection("blog")).unwrap();

        assert_eq!(registry.len(), 1);
        assert!(registry.contains("blog"));

        let collection = registry.get("blog").unwrap();
        assert_eq!(collection.name(), "blog");
        assert!(collection.schema().has_field("title"));
    }

    #[test]
    fn test_duplicate_collection_rejected() {
        let mut registry = CollectionRegistry::new();
        registry.register(make_collection("blog")).unwrap();

        let result = registry.register(make_collection("blog"));
        assert_eq!(result, Err(RegistryError::Duplicate("blog".to_string())));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_names_sorted() {
        let mut registry = CollectionRegistry::new();
        registry.register(make_collection("notes")).unwrap();
        registry.register(make_collection("blog")).unwrap();
        registry.register(make_collection("docs")).unwrap();

        assert_eq!(registry.names(), vec!["blog", "docs", "notes"]);
    }

    #[test]
    fn test_collection_validate_delegates() {
        let collection = make_collection("blog");
        let mut raw = RawRecord::new();
        raw.insert("title", serde_yaml::Value::String("Hello".into()));

        assert!(collection.validate(&raw).is_ok());
        assert!(collection.validate(&RawRecord::new()).is_err());
    }
}
