//! Read-path compiler: pipeline stages that narrow a collection down to
//! the nested element(s) a path addresses.

use serde_json::Value;

use crate::types::{Path, PathError, Stage};

/// Compile a parsed path into ordered pipeline stages.
///
/// Identifier-bearing segments emit one [`Stage::Match`]; bare segments
/// emit [`Stage::Unwind`] followed by [`Stage::ReplaceRoot`]. Segment order
/// is stage order; nothing is deduplicated or reordered. The caller
/// prepends its own initial `$match` for root-document selection.
pub fn aggregation_stages(path: &Path) -> Vec<Stage> {
    let mut stages = Vec::new();
    for segment in &path.segments {
        match &segment.id {
            Some(id) => stages.push(Stage::Match {
                key: segment.key().to_string(),
                id: id.clone(),
            }),
            None => {
                stages.push(Stage::Unwind {
                    field: segment.field.clone(),
                });
                stages.push(Stage::ReplaceRoot {
                    field: segment.field.clone(),
                });
            }
        }
    }
    stages
}

/// Parse a path string and compile it straight to driver-facing stage
/// values.
///
/// # Errors
///
/// Propagates [`Path::parse`] failures.
///
/// # Example
///
/// ```
/// use mongo_nested_path::aggregation_pipeline;
/// use serde_json::json;
///
/// let stages = aggregation_pipeline("items").unwrap();
/// assert_eq!(stages, vec![
///     json!({ "$unwind": "$items" }),
///     json!({ "$replaceRoot": { "newRoot": "$items" } }),
/// ]);
/// ```
pub fn aggregation_pipeline(path: &str) -> Result<Vec<Value>, PathError> {
    let parsed = Path::parse(path)?;
    Ok(aggregation_stages(&parsed)
        .iter()
        .map(Stage::to_value)
        .collect())
}
