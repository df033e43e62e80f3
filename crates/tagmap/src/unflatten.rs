//! Decode side: tagged flat sequence back to an associative container.

use cbor_tagmap_pack::{OrderedMap, PackValue};
use indexmap::map::Entry;

use crate::config::{DuplicateKeyPolicy, MapTagConfig};
use crate::error::{Malformation, MapTagError};

/// Rebuilds a container from the decoded payload of a map tag.
///
/// The payload must be an array of even length, read as
/// `[k0, v0, k1, v1, ...]`. Shape checks run before any entry is inserted,
/// so a malformed payload never yields a partial container. Repeated keys
/// follow `config.duplicate_keys`.
pub fn unflatten(config: &MapTagConfig, payload: PackValue) -> Result<OrderedMap, MapTagError> {
    let items = match payload {
        PackValue::Array(items) => items,
        other => {
            return Err(config.malformed(Malformation::NotSequence {
                found: other.kind(),
            }))
        }
    };
    if items.len() % 2 != 0 {
        return Err(config.malformed(Malformation::OddLength(items.len())));
    }
    let entries = items.len() / 2;
    if let Some(limit) = config.max_entries {
        if entries > limit {
            return Err(config.malformed(Malformation::TooManyEntries { entries, limit }));
        }
    }

    let mut map = OrderedMap::with_capacity(entries);
    let mut items = items.into_iter();
    let mut index = 0;
    while let (Some(key), Some(value)) = (items.next(), items.next()) {
        match config.duplicate_keys {
            DuplicateKeyPolicy::LastWriteWins => {
                map.insert(key, value);
            }
            DuplicateKeyPolicy::Reject => match map.entry(key) {
                Entry::Occupied(_) => {
                    return Err(config.malformed(Malformation::DuplicateKey { index }));
                }
                Entry::Vacant(slot) => {
                    slot.insert(value);
                }
            },
        }
        index += 1;
    }
    tracing::trace!(tag = config.tag, entries, unique = map.len(), "unflattened map");
    Ok(map)
}
