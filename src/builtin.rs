//! Built-in collections for the content pipeline.

use crate::kind::FieldKind;
use crate::registry::{Collection, CollectionRegistry};
use crate::schema::{FieldSpec, Schema};

/// The `blog` collection: posts with a title, short description,
/// publication date, category, and optional tags.
#[must_use]
pub fn blog() -> Collection {
    let schema = Schema::new(vec![
        FieldSpec::required("title", FieldKind::String),
        FieldSpec::required("desc", FieldKind::String),
        FieldSpec::required("date", FieldKind::Date),
        FieldSpec::required("category", FieldKind::String),
        FieldSpec::optional("tags", FieldKind::StringArray),
    ])
    .expect("blog schema is well-formed");
    Collection::new("blog", schema)
}

/// Registry with every built-in collection registered, ready for the
/// content pipeline. The key a collection is registered under is the
/// name the surrounding system matches against its content directories.
#[must_use]
pub fn default_registry() -> CollectionRegistry {
    let mut registry = CollectionRegistry::new();
    registry.register(blog()).expect("fresh registry has no duplicates");
    registry
}
