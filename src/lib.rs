#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Typed front-matter schemas for static-site content collections.
//!
//! A [`Schema`] is a declarative table of [`FieldSpec`]s interpreted by
//! one generic routine, [`validate`]: given a [`RawRecord`] decoded
//! from a content file's metadata block, it produces a typed
//! [`ValidatedRecord`] or the full list of field-level
//! [`ValidationError`]s. A [`CollectionRegistry`] binds schemas to
//! named collections once at process start; the surrounding pipeline
//! matches those names against its content directories.
//!
//! ```
//! use content_collections::{RawRecord, builtin};
//! use serde_yaml::Value;
//!
//! let registry = builtin::default_registry();
//! let blog = registry.get("blog").expect("built-in collection");
//!
//! let mut raw = RawRecord::new();
//! raw.insert("title", Value::String("Hello".into()));
//! raw.insert("desc", Value::String("World".into()));
//! raw.insert("date", Value::String("2024-01-01".into()));
//! raw.insert("category", Value::String("life".into()));
//!
//! let post = blog.validate(&raw).expect("valid post");
//! assert_eq!(post.get("title").and_then(|v| v.as_str()), Some("Hello"));
//! assert!(!post.contains("tags"));
//! ```

pub mod builtin;
pub mod errors;
pub mod kind;
pub mod record;
pub mod registry;
pub mod schema;
pub mod validate;

// Re-export commonly used types
pub use errors::{RegistryError, SchemaError, ValidationError};
pub use kind::FieldKind;
pub use record::{FieldValue, RawRecord, ValidatedRecord};
pub use registry::{Collection, CollectionRegistry};
pub use schema::{FieldSpec, Schema};
pub use validate::validate;
