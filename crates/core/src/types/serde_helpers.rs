//! Lenient field decoders for records written by hand in the admin panel.
//!
//! The API stores whatever JSON the admin form sent, so optional text fields
//! may arrive missing, `null`, empty, or as a non-string scalar.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decode an optional text field, treating `null`, empty and
/// whitespace-only strings as absent. Numbers and booleans keep their
/// textual form; arrays and objects are treated as absent.
pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }))
}

/// Decode a required text field that the API may omit; missing and `null`
/// become the empty string.
pub fn text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    optional_text(deserializer).map(Option::unwrap_or_default)
}

/// Decode an optional RFC 3339 timestamp. Anything that does not parse is
/// treated as absent rather than failing the record.
pub fn optional_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_text(deserializer)?.and_then(|text| {
        DateTime::parse_from_rfc3339(text.trim())
            .ok()
            .map(|at| at.with_timezone(&Utc))
    }))
}
