//! One-shot encode/decode helpers with no hooks installed.

use super::{CborDecoder, CborEncoder, CborError};
use crate::PackValue;

/// Encode a [`PackValue`] into CBOR bytes.
pub fn encode(data: &PackValue) -> Vec<u8> {
    CborEncoder::new().encode(data)
}

/// Decode CBOR bytes into a [`PackValue`].
pub fn decode(blob: &[u8]) -> Result<PackValue, CborError> {
    CborDecoder::new().decode(blob)
}
