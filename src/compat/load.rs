use serde_json::{Map, Value};

use super::resolve;

/// Envelope marker key: present alongside `id` in serialized constructor
/// envelopes, e.g. `{"v": 1, "id": ["docindex", "schema", "Document"], ...}`.
const VERSION_KEY: &str = "v";
const ID_KEY: &str = "id";

/// Rewrite the namespace ids inside a serialized value to their current
/// locations, recursing into nested envelopes.
///
/// Only objects carrying both the version marker and an `id` array of strings
/// are rewritten; ids that [`resolve`] does not know are left untouched, as
/// are all other keys and values. This is the explicit load-time redirect:
/// deserialization runs on the upgraded value and never needs to intercept
/// attribute access or guess at old layouts.
pub fn upgrade_envelope(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let is_envelope = map.contains_key(VERSION_KEY) && map.contains_key(ID_KEY);
            let mut upgraded = Map::with_capacity(map.len());
            for (key, inner) in map {
                if is_envelope && key == ID_KEY {
                    upgraded.insert(key, upgrade_id(inner));
                } else {
                    upgraded.insert(key, upgrade_envelope(inner));
                }
            }
            Value::Object(upgraded)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(upgrade_envelope).collect()),
        other => other,
    }
}

fn upgrade_id(id: Value) -> Value {
    if let Value::Array(parts) = &id {
        let path: Option<Vec<&str>> = parts.iter().map(Value::as_str).collect();
        if let Some(path) = path {
            if let Some(mapped) = resolve(&path) {
                return Value::Array(
                    mapped
                        .iter()
                        .map(|component| Value::String((*component).to_string()))
                        .collect(),
                );
            }
        }
    }
    id
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_upgrade_rewrites_known_id() {
        let envelope = json!({
            "v": 1,
            "id": ["docindex", "schema", "Document"],
            "kwargs": {"page_content": "hello"}
        });
        let upgraded = upgrade_envelope(envelope);
        assert_eq!(
            upgraded["id"],
            json!(["docindex", "schemas", "document", "Document"])
        );
        assert_eq!(upgraded["kwargs"]["page_content"], json!("hello"));
    }

    #[test]
    fn test_upgrade_leaves_unknown_id_unchanged() {
        let envelope = json!({
            "v": 1,
            "id": ["somewhere", "else", "Entirely"],
        });
        let upgraded = upgrade_envelope(envelope.clone());
        assert_eq!(upgraded, envelope);
    }

    #[test]
    fn test_upgrade_recurses_into_nested_envelopes() {
        let envelope = json!({
            "v": 1,
            "id": ["docindex", "schema", "SourcedAnswer"],
            "kwargs": {
                "documents": [{
                    "v": 1,
                    "id": ["docindex", "Document"],
                    "kwargs": {"page_content": "nested"}
                }]
            }
        });
        let upgraded = upgrade_envelope(envelope);
        assert_eq!(
            upgraded["kwargs"]["documents"][0]["id"],
            json!(["docindex", "schemas", "document", "Document"])
        );
    }

    #[test]
    fn test_non_envelope_id_key_is_not_rewritten() {
        // A plain object with an "id" field but no version marker is data,
        // not an envelope.
        let value = json!({"id": ["docindex", "schema", "Document"], "name": "x"});
        let upgraded = upgrade_envelope(value.clone());
        assert_eq!(upgraded, value);
    }

    #[test]
    fn test_scalars_pass_through() {
        assert_eq!(upgrade_envelope(json!(42)), json!(42));
        assert_eq!(upgrade_envelope(json!("s")), json!("s"));
        assert_eq!(upgrade_envelope(Value::Null), Value::Null);
    }
}
