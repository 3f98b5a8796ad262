//! Lenient collection decoding.
//!
//! The backend answers `null` for an empty collection and stores whatever
//! the admin form sent, so one bad record must not hide the rest.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decode a collection body into records.
///
/// Anything other than a JSON array yields an empty collection. Elements
/// that fail to decode (e.g. missing `id`) are skipped with a warning.
pub fn lenient_list<T: DeserializeOwned>(body: Value, resource: &'static str) -> Vec<T> {
    let items = match body {
        Value::Array(items) => items,
        Value::Null => return Vec::new(),
        other => {
            tracing::warn!(
                resource,
                kind = json_kind(&other),
                "Expected a JSON array, treating as empty"
            );
            return Vec::new();
        }
    };

    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(resource, index, error = %e, "Skipping undecodable record");
                None
            }
        })
        .collect()
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use workshop_core::{Session, Speaker};

    use super::*;

    #[test]
    fn test_null_is_empty() {
        let sessions: Vec<Session> = lenient_list(Value::Null, "sessions");
        assert!(sessions.is_empty());
    }

    #[test]
    fn test_object_is_empty() {
        let sessions: Vec<Session> = lenient_list(json!({"error": "nope"}), "sessions");
        assert!(sessions.is_empty());
    }

    #[test]
    fn test_records_without_id_are_skipped() {
        let speakers: Vec<Speaker> = lenient_list(
            json!([{"id": "s1", "name": "Ana"}, {"name": "No Id"}, null, {"id": "s2"}]),
            "speakers",
        );
        let ids: Vec<&str> = speakers.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["s1", "s2"]);
    }
}
