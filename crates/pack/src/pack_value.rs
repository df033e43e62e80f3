//! [`PackValue`]: the value domain shared by the CBOR encoder and decoder.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use indexmap::IndexMap;

use crate::{PackBlob, PackExtension};

/// Insertion-ordered associative container with unique keys.
///
/// Keys and values are arbitrary [`PackValue`]s. Inserting an existing key
/// replaces its value and keeps the key's original position.
pub type OrderedMap = IndexMap<PackValue, PackValue>;

/// A value the CBOR codec can encode and decode.
///
/// Equality is total: floats compare by bit pattern so that `NaN` equals
/// itself and `0.0` differs from `-0.0`. This makes every value usable as an
/// [`OrderedMap`] key. `Integer` and `UInteger` are distinct variants; the
/// decoder always produces `Integer` for values that fit `i64`.
#[derive(Debug, Clone)]
pub enum PackValue {
    Null,
    Undefined,
    Bool(bool),
    Integer(i64),
    /// Unsigned integers above `i64::MAX`.
    UInteger(u64),
    Float(f64),
    Bytes(Vec<u8>),
    Str(String),
    Array(Vec<PackValue>),
    /// Plain CBOR map with text keys, kept in wire order.
    Object(Vec<(String, PackValue)>),
    /// Associative container with arbitrary keys.
    Map(OrderedMap),
    /// Tagged value with no registered decode hook.
    Extension(PackExtension),
    /// Pre-encoded CBOR, written verbatim.
    Blob(PackBlob),
}

impl PackValue {
    /// Short name of the variant, used in error and log messages.
    pub fn kind(&self) -> &'static str {
        match self {
            PackValue::Null => "null",
            PackValue::Undefined => "undefined",
            PackValue::Bool(_) => "bool",
            PackValue::Integer(_) | PackValue::UInteger(_) => "integer",
            PackValue::Float(_) => "float",
            PackValue::Bytes(_) => "bytes",
            PackValue::Str(_) => "string",
            PackValue::Array(_) => "array",
            PackValue::Object(_) => "object",
            PackValue::Map(_) => "map",
            PackValue::Extension(_) => "tag",
            PackValue::Blob(_) => "blob",
        }
    }

    pub fn as_array(&self) -> Option<&[PackValue]> {
        match self {
            PackValue::Array(items) => Some(items),
            _ => None,
        }
    }
}

impl PartialEq for PackValue {
    fn eq(&self, other: &Self) -> bool {
        use PackValue::*;
        match (self, other) {
            (Null, Null) | (Undefined, Undefined) => true,
            (Bool(a), Bool(b)) => a == b,
            (Integer(a), Integer(b)) => a == b,
            (UInteger(a), UInteger(b)) => a == b,
            (Float(a), Float(b)) => a.to_bits() == b.to_bits(),
            (Bytes(a), Bytes(b)) => a == b,
            (Str(a), Str(b)) => a == b,
            (Array(a), Array(b)) => a == b,
            (Object(a), Object(b)) => a == b,
            (Map(a), Map(b)) => a == b,
            (Extension(a), Extension(b)) => a == b,
            (Blob(a), Blob(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for PackValue {}

impl Hash for PackValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            PackValue::Null | PackValue::Undefined => {}
            PackValue::Bool(b) => b.hash(state),
            PackValue::Integer(i) => i.hash(state),
            PackValue::UInteger(u) => u.hash(state),
            PackValue::Float(f) => f.to_bits().hash(state),
            PackValue::Bytes(b) => b.hash(state),
            PackValue::Str(s) => s.hash(state),
            PackValue::Array(items) => items.hash(state),
            PackValue::Object(pairs) => pairs.hash(state),
            PackValue::Map(map) => {
                // Map equality ignores order: entry hashes are summed.
                let combined = map.iter().fold(0u64, |acc, entry| {
                    let mut hasher = DefaultHasher::new();
                    entry.hash(&mut hasher);
                    acc.wrapping_add(hasher.finish())
                });
                map.len().hash(state);
                combined.hash(state);
            }
            PackValue::Extension(ext) => ext.hash(state),
            PackValue::Blob(blob) => blob.hash(state),
        }
    }
}

impl From<bool> for PackValue {
    fn from(b: bool) -> Self {
        PackValue::Bool(b)
    }
}

impl From<i64> for PackValue {
    fn from(i: i64) -> Self {
        PackValue::Integer(i)
    }
}

impl From<i32> for PackValue {
    fn from(i: i32) -> Self {
        PackValue::Integer(i64::from(i))
    }
}

impl From<u64> for PackValue {
    fn from(u: u64) -> Self {
        match i64::try_from(u) {
            Ok(i) => PackValue::Integer(i),
            Err(_) => PackValue::UInteger(u),
        }
    }
}

impl From<f64> for PackValue {
    fn from(f: f64) -> Self {
        PackValue::Float(f)
    }
}

impl From<&str> for PackValue {
    fn from(s: &str) -> Self {
        PackValue::Str(s.to_owned())
    }
}

impl From<String> for PackValue {
    fn from(s: String) -> Self {
        PackValue::Str(s)
    }
}

impl From<Vec<u8>> for PackValue {
    fn from(bytes: Vec<u8>) -> Self {
        PackValue::Bytes(bytes)
    }
}

impl From<Vec<PackValue>> for PackValue {
    fn from(items: Vec<PackValue>) -> Self {
        PackValue::Array(items)
    }
}

impl From<OrderedMap> for PackValue {
    fn from(map: OrderedMap) -> Self {
        PackValue::Map(map)
    }
}

impl From<PackExtension> for PackValue {
    fn from(ext: PackExtension) -> Self {
        PackValue::Extension(ext)
    }
}

impl FromIterator<(PackValue, PackValue)> for PackValue {
    fn from_iter<I: IntoIterator<Item = (PackValue, PackValue)>>(iter: I) -> Self {
        PackValue::Map(iter.into_iter().collect())
    }
}
