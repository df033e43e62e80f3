//! [`PackBlob`]: pre-encoded CBOR bytes.

/// A value that has already been encoded to CBOR.
///
/// The encoder copies `val` to the output as-is, so the bytes must form
/// exactly one well-formed data item.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackBlob {
    pub val: Vec<u8>,
}

impl PackBlob {
    pub fn new(val: Vec<u8>) -> Self {
        Self { val }
    }
}
