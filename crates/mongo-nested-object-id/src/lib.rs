//! Validated MongoDB ObjectId token.
//!
//! An [`ObjectId`] can only be constructed through [`ObjectId::parse`] (or
//! `str::parse`), which accepts exactly 24 ASCII hex digits and normalizes
//! them to lowercase. Past that boundary the token is opaque: the rest of
//! the workspace never treats it as a plain string.
//!
//! # Example
//!
//! ```
//! use mongo_nested_object_id::ObjectId;
//! use serde_json::json;
//!
//! let id = ObjectId::parse("507F1F77BCF86CD799439011").unwrap();
//! assert_eq!(id.as_hex(), "507f1f77bcf86cd799439011");
//! assert_eq!(id.to_value(), json!({"$oid": "507f1f77bcf86cd799439011"}));
//!
//! assert!(ObjectId::parse("not-an-id").is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use serde_json::{json, Value};
use thiserror::Error;

/// Hex length of the canonical ObjectId text form (12 bytes).
const HEX_LENGTH: usize = 24;

/// Extended-JSON key under which an ObjectId is rendered.
const OID_KEY: &str = "$oid";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ObjectIdError {
    #[error("ObjectId must be 24 hex characters, got {0}")]
    InvalidLength(usize),
    #[error("ObjectId contains a non-hex character: {0:?}")]
    InvalidCharacter(char),
}

/// A validated ObjectId, stored as its canonical lowercase hex form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate an ObjectId token.
    ///
    /// Accepts 24 ASCII hex digits in either case; the stored form is
    /// lowercase.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectIdError::InvalidLength`] when the input is not 24
    /// characters long, or [`ObjectIdError::InvalidCharacter`] naming the
    /// first non-hex character.
    pub fn parse(input: &str) -> Result<Self, ObjectIdError> {
        let length = input.chars().count();
        if length != HEX_LENGTH {
            return Err(ObjectIdError::InvalidLength(length));
        }
        for c in input.chars() {
            if !c.is_ascii_hexdigit() {
                return Err(ObjectIdError::InvalidCharacter(c));
            }
        }
        Ok(Self(input.to_ascii_lowercase()))
    }

    /// The canonical lowercase hex form.
    pub fn as_hex(&self) -> &str {
        &self.0
    }

    /// Render to the extended-JSON value shape: `{"$oid": "<hex>"}`.
    pub fn to_value(&self) -> Value {
        json!({ OID_KEY: self.0 })
    }
}

impl FromStr for ObjectId {
    type Err = ObjectIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Check whether a string is a well-formed ObjectId token.
///
/// # Example
///
/// ```
/// use mongo_nested_object_id::is_valid;
///
/// assert!(is_valid("507f1f77bcf86cd799439011"));
/// assert!(!is_valid("507f1f77bcf86cd79943901"));
/// assert!(!is_valid("507f1f77bcf86cd79943901z"));
/// ```
pub fn is_valid(input: &str) -> bool {
    ObjectId::parse(input).is_ok()
}

/// Check whether a `Value` is ObjectId-shaped.
///
/// Two shapes qualify: a bare 24-hex string, and the extended-JSON object
/// `{"$oid": "<24-hex>"}` with no other keys. Callers that recurse through
/// payloads use this to avoid destructuring identifier values that happen
/// to look like plain objects.
///
/// # Example
///
/// ```
/// use mongo_nested_object_id::is_object_id_value;
/// use serde_json::json;
///
/// assert!(is_object_id_value(&json!("507f1f77bcf86cd799439011")));
/// assert!(is_object_id_value(&json!({"$oid": "507f1f77bcf86cd799439011"})));
/// assert!(!is_object_id_value(&json!({"$oid": "507f1f77bcf86cd799439011", "x": 1})));
/// assert!(!is_object_id_value(&json!({"oid": "507f1f77bcf86cd799439011"})));
/// ```
pub fn is_object_id_value(value: &Value) -> bool {
    match value {
        Value::String(s) => is_valid(s),
        Value::Object(map) => {
            if map.len() != 1 {
                return false;
            }
            match map.get(OID_KEY) {
                Some(Value::String(s)) => is_valid(s),
                _ => false,
            }
        }
        _ => false,
    }
}
