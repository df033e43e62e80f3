//! CBOR value model, encoder and decoder for the tagged-map extension.
//!
//! The codec here is deliberately generic: it knows nothing about any
//! particular tag. Custom semantics plug in through two extension points,
//! [`MapEncodeHook`] on the encode side and [`TagDecodeHook`] on the decode
//! side, both registered before the codec is built.

mod pack_blob;
mod pack_extension;
mod pack_value;

pub mod cbor;

pub use pack_blob::PackBlob;
pub use pack_extension::PackExtension;
pub use pack_value::{OrderedMap, PackValue};

pub use cbor::{
    json_to_pack, pack_to_json, CborDecoder, CborEncoder, CborError, EncodeHooks, MapEncodeHook,
    TagDecodeHook, TagRegistry,
};
