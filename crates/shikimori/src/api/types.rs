//! Catalog response types.
//!
//! Records are passed through exactly as the API returns them. The helpers
//! below only read a few well-known fields for display.

use serde_json::{Map, Value};

/// One JSON object returned by the API (anime, genre, studio)
pub type Record = Map<String, Value>;

/// Record id, if present and numeric
pub fn id(record: &Record) -> Option<u64> {
    record.get("id").and_then(Value::as_u64)
}

/// Original (romaji) name
pub fn name(record: &Record) -> Option<&str> {
    record.get("name").and_then(Value::as_str)
}

/// Localized title, falling back to the original name
pub fn display_title(record: &Record) -> Option<&str> {
    record
        .get("russian")
        .and_then(Value::as_str)
        .filter(|title| !title.is_empty())
        .or_else(|| name(record))
}

/// Score as sent by the API. Shikimori encodes it as a string (`"8.75"`).
pub fn score(record: &Record) -> Option<f64> {
    match record.get("score")? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {other}"),
        }
    }

    #[test]
    fn test_display_title_prefers_localized() {
        let r = record(json!({"id": 1, "name": "Shingeki no Kyojin", "russian": "Атака титанов"}));
        assert_eq!(display_title(&r), Some("Атака титанов"));
        assert_eq!(id(&r), Some(1));
    }

    #[test]
    fn test_display_title_falls_back_to_name() {
        let r = record(json!({"name": "Naruto", "russian": ""}));
        assert_eq!(display_title(&r), Some("Naruto"));

        let r = record(json!({"name": "Naruto", "russian": null}));
        assert_eq!(display_title(&r), Some("Naruto"));

        assert_eq!(display_title(&Record::new()), None);
    }

    #[test]
    fn test_score_formats() {
        assert_eq!(score(&record(json!({"score": "8.75"}))), Some(8.75));
        assert_eq!(score(&record(json!({"score": 7.1}))), Some(7.1));
        assert_eq!(score(&record(json!({"score": "n/a"}))), None);
        assert_eq!(score(&record(json!({}))), None);
    }
}
