//! Encode side: associative container to tagged flat sequence.

use cbor_tagmap_pack::{OrderedMap, PackExtension, PackValue};

/// Flattens `map` into `tag([k0, v0, k1, v1, ...])`.
///
/// Entries are emitted in the map's iteration order. Keys and values are
/// cloned as-is; nested maps stay [`PackValue::Map`] so the encoder flattens
/// them in turn.
pub fn flatten(tag: u64, map: &OrderedMap) -> PackExtension {
    let mut items = Vec::with_capacity(map.len() * 2);
    for (key, value) in map {
        items.push(key.clone());
        items.push(value.clone());
    }
    tracing::trace!(tag, entries = map.len(), "flattened map");
    PackExtension::new(tag, PackValue::Array(items))
}
