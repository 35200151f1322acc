//! Nested document path compiler.
//!
//! Translates the dotted `field[:objectid]` path grammar addressing a
//! location inside a nested document (arrays-of-objects selected by
//! ObjectId, nested sub-objects) into the artifacts a document database
//! needs: aggregation-pipeline stages for reads, and a positional update
//! document with array-filter predicates for writes. A payload sanitizer
//! strips serializer `"undefined"` artifacts before persistence.
//!
//! All entry points are pure, synchronous functions of their arguments;
//! executing the compiled artifacts against a driver is the caller's job.
//!
//! # Example
//!
//! ```
//! use mongo_nested_path::{aggregation_pipeline, update_document, UpdateKind};
//! use serde_json::json;
//!
//! // Read: narrow each matching document down to its `items` elements.
//! let stages = aggregation_pipeline("items").unwrap();
//! assert_eq!(stages[0], json!({ "$unwind": "$items" }));
//!
//! // Write: append a new element to `items`.
//! let update = update_document(
//!     UpdateKind::Create,
//!     "items",
//!     Some(json!({"name": "test"})),
//! )
//! .unwrap();
//! assert_eq!(update.document, json!({ "$push": { "items": { "name": "test" } } }));
//! assert_eq!(update.options(), json!({ "arrayFilters": [] }));
//! ```

pub mod parser;
pub mod pipeline;
pub mod sanitize;
pub mod types;
pub mod update;

pub use pipeline::{aggregation_pipeline, aggregation_stages};
pub use sanitize::remove_undefined;
pub use types::{Path, PathError, Segment, Stage, UpdateKind};
pub use update::{placeholder_name, update_document, CompiledUpdate};

// Re-export the identifier primitive so callers need only one crate.
pub use mongo_nested_object_id::{is_object_id_value, is_valid, ObjectId, ObjectIdError};
