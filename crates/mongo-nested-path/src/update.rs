//! Write-path compiler: one dotted positional path, its array-filter
//! predicates, and the operator document wrapping the payload.

use serde_json::{json, Value};

use crate::types::{Path, PathError, Segment, UpdateKind};

/// A compiled positional update: the operator document plus the
/// array-filter predicates that scope its `$[name]` tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledUpdate {
    pub document: Value,
    pub array_filters: Vec<Value>,
}

impl CompiledUpdate {
    /// Driver options shape: `{"arrayFilters": [...]}`.
    pub fn options(&self) -> Value {
        json!({ "arrayFilters": self.array_filters })
    }
}

/// Placeholder name for the `index`-th array filter.
///
/// Bijective base-26 over `a`..`z`, so the sequence is unbounded and
/// gapless: 0→`a`, 25→`z`, 26→`aa`, 27→`ab`, 701→`zz`, 702→`aaa`.
///
/// # Example
///
/// ```
/// use mongo_nested_path::placeholder_name;
///
/// assert_eq!(placeholder_name(0), "a");
/// assert_eq!(placeholder_name(25), "z");
/// assert_eq!(placeholder_name(26), "aa");
/// ```
pub fn placeholder_name(index: usize) -> String {
    let mut name = String::new();
    let mut current = index;
    loop {
        name.insert(0, (b'a' + (current % 26) as u8) as char);
        current /= 26;
        if current == 0 {
            break;
        }
        current -= 1;
    }
    name
}

/// State threaded across segments while compiling a write path.
struct Accumulator {
    tokens: Vec<String>,
    filters: Vec<Value>,
    payload: Value,
}

impl Accumulator {
    fn step(mut self, segment: &Segment, last_of_remove: bool) -> Self {
        match &segment.id {
            // The removal target itself: `$pull` removes by value match,
            // so the identifier becomes the payload instead of one more
            // positional filter.
            Some(id) if last_of_remove => {
                self.payload = json!({ segment.key(): id.to_value() });
            }
            Some(id) => {
                let name = placeholder_name(self.filters.len());
                self.tokens.push(format!("$[{name}]"));
                self.filters
                    .push(json!({ format!("{name}.{}", segment.key()): id.to_value() }));
            }
            None => self.tokens.push(segment.field.clone()),
        }
        self
    }
}

/// Compile a write path into an update document and its array filters.
///
/// `payload` is required in spirit for `Create`/`Update` and optional for
/// `Remove`; a missing payload renders as JSON null. For `Remove`, an
/// identifier on the final segment becomes the pull payload
/// `{<key>: <id>}` and contributes no filter.
///
/// # Errors
///
/// Propagates [`Path::parse`] failures; the operation kind is already
/// closed by [`UpdateKind`] (its `FromStr` rejects unknown names with
/// [`PathError::InvalidOperation`]).
///
/// # Example
///
/// ```
/// use mongo_nested_path::{update_document, UpdateKind};
/// use serde_json::json;
///
/// let update = update_document(
///     UpdateKind::Update,
///     "items.id:507f1f77bcf86cd799439011",
///     Some(json!({"name": "x"})),
/// )
/// .unwrap();
/// assert_eq!(
///     update.document,
///     json!({ "$set": { "items.$[a]": { "name": "x" } } })
/// );
/// assert_eq!(
///     update.options(),
///     json!({ "arrayFilters": [{ "a._id": { "$oid": "507f1f77bcf86cd799439011" } }] })
/// );
/// ```
pub fn update_document(
    kind: UpdateKind,
    path: &str,
    payload: Option<Value>,
) -> Result<CompiledUpdate, PathError> {
    let parsed = Path::parse(path)?;
    let last = parsed.segments.len() - 1;

    let mut acc = Accumulator {
        tokens: Vec::new(),
        filters: Vec::new(),
        payload: payload.unwrap_or(Value::Null),
    };
    for (index, segment) in parsed.segments.iter().enumerate() {
        acc = acc.step(segment, kind == UpdateKind::Remove && index == last);
    }

    let dotted = acc.tokens.join(".");
    let document = json!({ kind.operator(): { dotted: acc.payload } });
    Ok(CompiledUpdate {
        document,
        array_filters: acc.filters,
    })
}
