//! Conversions between [`PackValue`] and `serde_json::Value`.

use serde_json::{Map as JsonMap, Number, Value as JsonValue};

use crate::PackValue;

/// Convert a `serde_json::Value` to a [`PackValue`].
///
/// JSON objects become [`PackValue::Object`]; integral numbers become
/// `Integer` (or `UInteger` above `i64::MAX`).
pub fn json_to_pack(v: &JsonValue) -> PackValue {
    match v {
        JsonValue::Null => PackValue::Null,
        JsonValue::Bool(b) => PackValue::Bool(*b),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                PackValue::Integer(i)
            } else if let Some(u) = n.as_u64() {
                PackValue::UInteger(u)
            } else {
                PackValue::Float(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        JsonValue::String(s) => PackValue::Str(s.clone()),
        JsonValue::Array(items) => PackValue::Array(items.iter().map(json_to_pack).collect()),
        JsonValue::Object(obj) => PackValue::Object(
            obj.iter()
                .map(|(key, value)| (key.clone(), json_to_pack(value)))
                .collect(),
        ),
    }
}

/// Convert a [`PackValue`] to a `serde_json::Value`.
///
/// JSON has no place for some CBOR shapes, so the mapping is lossy:
/// - `Undefined` and non-finite floats become `null`
/// - bytes become an array of numbers
/// - a [`PackValue::Map`] becomes an array of `[key, value]` pairs, since
///   its keys need not be strings
/// - tags become `{"tag": n, "value": ...}`, blobs become their byte array
pub fn pack_to_json(v: PackValue) -> JsonValue {
    match v {
        PackValue::Null | PackValue::Undefined => JsonValue::Null,
        PackValue::Bool(b) => JsonValue::Bool(b),
        PackValue::Integer(i) => JsonValue::from(i),
        PackValue::UInteger(u) => JsonValue::from(u),
        PackValue::Float(f) => Number::from_f64(f).map_or(JsonValue::Null, JsonValue::Number),
        PackValue::Bytes(bytes) => bytes_to_json(bytes),
        PackValue::Str(s) => JsonValue::String(s),
        PackValue::Array(items) => JsonValue::Array(items.into_iter().map(pack_to_json).collect()),
        PackValue::Object(pairs) => JsonValue::Object(
            pairs
                .into_iter()
                .map(|(key, value)| (key, pack_to_json(value)))
                .collect::<JsonMap<String, JsonValue>>(),
        ),
        PackValue::Map(map) => JsonValue::Array(
            map.into_iter()
                .map(|(key, value)| JsonValue::Array(vec![pack_to_json(key), pack_to_json(value)]))
                .collect(),
        ),
        PackValue::Extension(ext) => {
            let mut obj = JsonMap::new();
            obj.insert("tag".to_owned(), JsonValue::from(ext.tag));
            obj.insert("value".to_owned(), pack_to_json(*ext.val));
            JsonValue::Object(obj)
        }
        PackValue::Blob(blob) => bytes_to_json(blob.val),
    }
}

fn bytes_to_json(bytes: Vec<u8>) -> JsonValue {
    JsonValue::Array(bytes.into_iter().map(JsonValue::from).collect())
}

impl From<JsonValue> for PackValue {
    fn from(v: JsonValue) -> Self {
        json_to_pack(&v)
    }
}
