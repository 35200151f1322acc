//! Path grammar types and compiled artifacts.

use std::str::FromStr;

use mongo_nested_object_id::ObjectId;
use serde_json::{json, Value};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("Path must be a non-empty string")]
    EmptyPath,
    #[error("Invalid path segment: {0}")]
    InvalidSegment(String),
    #[error("Invalid ObjectId in path: {0}")]
    InvalidObjectId(String),
    #[error("Type must be one of: create, update, remove")]
    InvalidOperation(String),
}

/// One `field[:id]` unit of a path.
///
/// A present `id` selects the array element whose identifier field equals
/// that value; an absent `id` means "flatten this array / descend into this
/// object".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub field: String,
    pub id: Option<ObjectId>,
}

impl Segment {
    /// The match/update key for this segment.
    ///
    /// The literal field name `id` aliases the primary `_id` key, but only
    /// on identifier-bearing segments; a bare `id` field stays literal.
    pub fn key(&self) -> &str {
        if self.id.is_some() && self.field == "id" {
            "_id"
        } else {
            &self.field
        }
    }
}

/// A parsed path: ordered segments, document root first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    pub segments: Vec<Segment>,
}

/// One aggregation stage produced by the read-path compiler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage {
    /// Keep documents/elements whose `key` equals `id`.
    Match { key: String, id: ObjectId },
    /// Flatten the array at `field`, one output document per element.
    Unwind { field: String },
    /// Promote the flattened element at `field` to the document root.
    ReplaceRoot { field: String },
}

impl Stage {
    /// Render the driver-facing stage shape.
    pub fn to_value(&self) -> Value {
        match self {
            Stage::Match { key, id } => json!({ "$match": { key.as_str(): id.to_value() } }),
            Stage::Unwind { field } => json!({ "$unwind": format!("${field}") }),
            Stage::ReplaceRoot { field } => {
                json!({ "$replaceRoot": { "newRoot": format!("${field}") } })
            }
        }
    }
}

/// Write operation kinds and their update operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateKind {
    Create,
    Update,
    Remove,
}

impl UpdateKind {
    /// The MongoDB update operator this kind compiles to.
    pub fn operator(&self) -> &'static str {
        match self {
            UpdateKind::Create => "$push",
            UpdateKind::Update => "$set",
            UpdateKind::Remove => "$pull",
        }
    }
}

impl FromStr for UpdateKind {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create" => Ok(UpdateKind::Create),
            "update" => Ok(UpdateKind::Update),
            "remove" => Ok(UpdateKind::Remove),
            other => Err(PathError::InvalidOperation(other.to_string())),
        }
    }
}
