//! JSON values with timestamps lifted into dates.
//!
//! Response bodies are walked once after parsing: every string that is
//! exactly a UTC timestamp of the form `YYYY-MM-DDTHH:MM:SSZ` becomes a
//! [`JsonValue::Date`]. Nothing else is touched, so fractional seconds and
//! explicit offsets stay strings.

use std::fmt;
use std::sync::LazyLock;

use chrono::{DateTime, NaiveDateTime, Utc};
use regex::Regex;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::{Number, Value};

/// Format used to recognise and print coerced timestamps.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

static TIMESTAMP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}Z$").expect("timestamp pattern is valid")
});

/// A JSON tree in which timestamp strings have been replaced by dates.
///
/// Objects keep the key order of the parsed document.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum JsonValue {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Date(DateTime<Utc>),
    Array(Vec<JsonValue>),
    Object(Vec<(String, JsonValue)>),
}

impl JsonValue {
    /// Look up a key of an object.
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        match self {
            JsonValue::Object(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Look up an element of an array.
    pub fn get_index(&self, index: usize) -> Option<&JsonValue> {
        match self {
            JsonValue::Array(items) => items.get(index),
            _ => None,
        }
    }

    /// The string, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// The timestamp, if this is a coerced date.
    pub fn as_date(&self) -> Option<&DateTime<Utc>> {
        match self {
            JsonValue::Date(d) => Some(d),
            _ => None,
        }
    }

    /// The items, if this is an array.
    pub fn as_array(&self) -> Option<&[JsonValue]> {
        match self {
            JsonValue::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Whether this is null.
    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }
}

/// Replace every timestamp-shaped string in `value` with a date.
///
/// Arrays and objects are walked depth-first; shape and key order are
/// preserved. Never fails.
pub fn coerce_dates(value: Value) -> JsonValue {
    match value {
        Value::Null => JsonValue::Null,
        Value::Bool(b) => JsonValue::Bool(b),
        Value::Number(n) => JsonValue::Number(n),
        Value::String(s) => match parse_timestamp(&s) {
            Some(date) => JsonValue::Date(date),
            None => JsonValue::String(s),
        },
        Value::Array(items) => JsonValue::Array(items.into_iter().map(coerce_dates).collect()),
        Value::Object(map) => JsonValue::Object(
            map.into_iter()
                .map(|(k, v)| (k, coerce_dates(v)))
                .collect(),
        ),
    }
}

/// Parse `s` if it is exactly a `YYYY-MM-DDTHH:MM:SSZ` timestamp.
///
/// Strings with the right shape but an impossible calendar value (month 13,
/// Feb 30) are not dates.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if !TIMESTAMP.is_match(s) {
        return None;
    }
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

impl From<Value> for JsonValue {
    fn from(value: Value) -> Self {
        coerce_dates(value)
    }
}

impl<'de> Deserialize<'de> for JsonValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(coerce_dates)
    }
}

impl Serialize for JsonValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            JsonValue::Null => serializer.serialize_unit(),
            JsonValue::Bool(b) => serializer.serialize_bool(*b),
            JsonValue::Number(n) => n.serialize(serializer),
            JsonValue::String(s) => serializer.serialize_str(s),
            JsonValue::Date(d) => serializer.collect_str(&d.format(TIMESTAMP_FORMAT)),
            JsonValue::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            JsonValue::Object(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (k, v) in entries {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl fmt::Display for JsonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn marker() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2021, 1, 1, 12, 30, 45).unwrap()
    }

    #[test]
    fn test_timestamp_string_becomes_date() {
        let value = coerce_dates(json!("2021-01-01T12:30:45Z"));
        assert_eq!(value, JsonValue::Date(marker()));
    }

    #[test]
    fn test_non_matching_strings_untouched() {
        for s in [
            "hello",
            "2021-01-01",
            "2021-01-01T12:30:45",
            "2021-01-01T12:30:45.123Z",
            "2021-01-01T12:30:45+00:00",
            "created 2021-01-01T12:30:45Z",
            "2021-13-01T12:30:45Z",
            "",
        ] {
            assert_eq!(coerce_dates(json!(s)), JsonValue::String(s.to_string()), "{s}");
        }
    }

    #[test]
    fn test_scalars_and_empty_containers() {
        assert_eq!(coerce_dates(json!(null)), JsonValue::Null);
        assert_eq!(coerce_dates(json!(true)), JsonValue::Bool(true));
        assert_eq!(coerce_dates(json!(42)), JsonValue::Number(42.into()));
        assert_eq!(coerce_dates(json!([])), JsonValue::Array(vec![]));
        assert_eq!(coerce_dates(json!({})), JsonValue::Object(vec![]));
    }

    #[test]
    fn test_nested_structure_preserved() {
        let input = json!({
            "zeta": "2021-01-01T12:30:45Z",
            "alpha": [
                {"when": "2021-01-01T12:30:45Z", "name": "x"},
                [null, "2021-01-01T12:30:45Z", 3]
            ],
            "empty": {}
        });

        let value = coerce_dates(input);

        let keys: Vec<&str> = match &value {
            JsonValue::Object(entries) => entries.iter().map(|(k, _)| k.as_str()).collect(),
            other => panic!("expected object, got {other:?}"),
        };
        assert_eq!(keys, vec!["zeta", "alpha", "empty"]);

        assert_eq!(value.get("zeta").and_then(JsonValue::as_date), Some(&marker()));
        let alpha = value.get("alpha").unwrap();
        let first = alpha.get_index(0).unwrap();
        assert_eq!(first.get("when").and_then(JsonValue::as_date), Some(&marker()));
        assert_eq!(first.get("name").and_then(JsonValue::as_str), Some("x"));
        let second = alpha.get_index(1).unwrap();
        assert!(second.get_index(0).unwrap().is_null());
        assert_eq!(second.get_index(1).and_then(JsonValue::as_date), Some(&marker()));
        assert_eq!(second.get_index(2), Some(&JsonValue::Number(3.into())));
        assert_eq!(value.get("empty"), Some(&JsonValue::Object(vec![])));
    }

    #[test]
    fn test_deeply_nested_does_not_fail() {
        let mut value = json!("2021-01-01T12:30:45Z");
        for _ in 0..100 {
            value = json!([value]);
        }
        let mut coerced = coerce_dates(value);
        for _ in 0..100 {
            coerced = coerced.as_array().unwrap()[0].clone();
        }
        assert_eq!(coerced, JsonValue::Date(marker()));
    }

    #[test]
    fn test_deserialize_coerces() {
        let value: JsonValue =
            serde_json::from_str(r#"{"created":"2021-01-01T12:30:45Z","n":1}"#).unwrap();
        assert_eq!(value.get("created").and_then(JsonValue::as_date), Some(&marker()));
    }

    #[test]
    fn test_serialize_restores_timestamp_strings() {
        let input = json!({"b": "2021-01-01T12:30:45Z", "a": [1, "x", null]});
        let out = serde_json::to_value(coerce_dates(input.clone())).unwrap();
        assert_eq!(out, input);
        assert_eq!(
            coerce_dates(json!({"b": 1, "a": 2})).to_string(),
            r#"{"b":1,"a":2}"#
        );
    }
}
