//! Payload sanitizer: strips serializer `"undefined"` artifacts from
//! containers before a payload is persisted.

use mongo_nested_object_id::is_object_id_value;
use serde_json::Value;

/// The absent marker stripped from containers. Distinct from JSON null,
/// which is a meaningful value and is preserved.
fn is_undefined(value: &Value) -> bool {
    matches!(value, Value::String(s) if s == "undefined")
}

/// Recursively remove absent markers from a payload.
///
/// Scalars pass through unchanged, including `0`, `false`, `""` and
/// `null` — and a bare top-level marker, since only container members are
/// stripped. Array elements and object values equal to the marker are
/// dropped; surviving container members are sanitized recursively, except
/// ObjectId-shaped object values, which are preserved verbatim rather
/// than destructured.
///
/// Idempotent: sanitizing an already-sanitized value is a no-op.
///
/// # Example
///
/// ```
/// use mongo_nested_path::remove_undefined;
/// use serde_json::json;
///
/// let dirty = json!({"name": "John", "age": "undefined", "tags": ["a", "undefined", "b"]});
/// assert_eq!(
///     remove_undefined(dirty),
///     json!({"name": "John", "tags": ["a", "b"]})
/// );
/// ```
pub fn remove_undefined(value: Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .filter(|item| !is_undefined(item))
                .map(remove_undefined)
                .collect(),
        ),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, v)| !is_undefined(v))
                .map(|(k, v)| {
                    let v = if (v.is_object() || v.is_array()) && !is_object_id_value(&v) {
                        remove_undefined(v)
                    } else {
                        v
                    };
                    (k, v)
                })
                .collect(),
        ),
        scalar => scalar,
    }
}
