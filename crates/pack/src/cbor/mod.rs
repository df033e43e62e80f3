//! CBOR (RFC 8949) encoding and decoding with tag extension hooks.

mod constants;
mod convert;
mod decoder;
mod encoder;
mod error;
mod hooks;
mod shared;

pub use constants::MAX_DEPTH;
pub use convert::{json_to_pack, pack_to_json};
pub use decoder::CborDecoder;
pub use encoder::CborEncoder;
pub use error::CborError;
pub use hooks::{EncodeHooks, MapEncodeHook, TagDecodeHook, TagRegistry};
pub use shared::{decode, encode};
