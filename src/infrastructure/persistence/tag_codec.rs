//! Encoding of article tags at the storage boundary.
//!
//! Tags live in a `JSONB` column as an array of strings. Rows are read as
//! raw [`serde_json::Value`] and decoded here, so a malformed column is
//! reported instead of silently dropped.

use serde_json::Value;

/// Reasons a stored `tags` value cannot be decoded.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum TagCodecError {
    #[error("tags must be a JSON array, found {0}")]
    NotAnArray(&'static str),
    #[error("tag at index {0} is not a string")]
    NonStringElement(usize),
}

/// Encodes tags as a JSON array, preserving order.
pub fn encode_tags(tags: &[String]) -> Value {
    Value::Array(tags.iter().cloned().map(Value::String).collect())
}

/// Decodes a stored JSON value back into an ordered tag list.
///
/// # Errors
///
/// Returns [`TagCodecError`] when the value is not an array of strings.
pub fn decode_tags(value: Value) -> Result<Vec<String>, TagCodecError> {
    let items = match value {
        Value::Array(items) => items,
        other => return Err(TagCodecError::NotAnArray(json_kind(&other))),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::String(tag) => Ok(tag),
            _ => Err(TagCodecError::NonStringElement(index)),
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
