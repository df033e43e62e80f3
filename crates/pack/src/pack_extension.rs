//! [`PackExtension`]: a CBOR tag number paired with its payload.

use crate::PackValue;

/// A tagged value (CBOR major type 6).
///
/// The encoder writes the tag head followed by `val`. The decoder produces a
/// `PackExtension` for every tag number that has no decode hook registered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackExtension {
    pub tag: u64,
    pub val: Box<PackValue>,
}

impl PackExtension {
    pub fn new(tag: u64, val: PackValue) -> Self {
        Self {
            tag,
            val: Box::new(val),
        }
    }

    /// Consumes the wrapper and returns the payload.
    pub fn into_payload(self) -> PackValue {
        *self.val
    }
}
