//! Path parser: dot-separated `field[:id]` segments.

use mongo_nested_object_id::ObjectId;

use crate::types::{Path, PathError, Segment};

impl Path {
    /// Parse a dotted path string into ordered segments.
    ///
    /// Each chunk is split on the first `:`; the part after it, when
    /// non-empty, must be a well-formed ObjectId. An empty identifier is
    /// treated as absent, so `"items:"` parses the same as `"items"`.
    ///
    /// # Errors
    ///
    /// - [`PathError::EmptyPath`] for an empty input string
    /// - [`PathError::InvalidSegment`] when a chunk has no field name
    /// - [`PathError::InvalidObjectId`] when an identifier fails validation
    ///
    /// # Example
    ///
    /// ```
    /// use mongo_nested_path::Path;
    ///
    /// let path = Path::parse("items.id:507f1f77bcf86cd799439011.details").unwrap();
    /// assert_eq!(path.segments.len(), 3);
    /// assert_eq!(path.segments[0].field, "items");
    /// assert!(path.segments[0].id.is_none());
    /// assert!(path.segments[1].id.is_some());
    /// assert_eq!(path.segments[1].key(), "_id");
    /// ```
    pub fn parse(input: &str) -> Result<Self, PathError> {
        if input.is_empty() {
            return Err(PathError::EmptyPath);
        }

        let mut segments = Vec::new();
        for chunk in input.split('.') {
            let (field, id) = match chunk.split_once(':') {
                Some((field, id)) => (field, id),
                None => (chunk, ""),
            };

            if field.is_empty() {
                return Err(PathError::InvalidSegment(chunk.to_string()));
            }

            let id = if id.is_empty() {
                None
            } else {
                let parsed = ObjectId::parse(id)
                    .map_err(|_| PathError::InvalidObjectId(id.to_string()))?;
                Some(parsed)
            };

            segments.push(Segment {
                field: field.to_string(),
                id,
            });
        }

        Ok(Path { segments })
    }
}
