//! Associative containers as tagged flat CBOR arrays.
//!
//! A container with entries `[(k0, v0), (k1, v1)]` is written as
//! `tag([k0, v0, k1, v1])`, where the tag number is chosen by the caller and
//! shared out-of-band between producer and consumer. Keys and values are any
//! [`PackValue`](cbor_tagmap_pack::PackValue), so maps with integer, byte
//! string, array or nested-map keys survive a round trip.
//!
//! ```
//! use cbor_tagmap::{MapCborCodec, MapTagConfig, MAP_TAG};
//! use cbor_tagmap_pack::{OrderedMap, PackValue};
//!
//! let mut codec = MapCborCodec::new(MapTagConfig::new(MAP_TAG)).unwrap();
//!
//! let mut map = OrderedMap::new();
//! map.insert(PackValue::Integer(1), PackValue::Integer(2));
//! let bytes = codec.encode(&PackValue::Map(map.clone()));
//! assert_eq!(bytes, [0xd9, 0x01, 0x17, 0x82, 0x01, 0x02]);
//! assert_eq!(codec.decode(&bytes).unwrap(), PackValue::Map(map));
//! ```

mod codec;
mod config;
mod error;
mod flatten;
mod hook;
mod unflatten;

pub use codec::MapCborCodec;
pub use config::{DuplicateKeyPolicy, MapTagConfig, MAP_TAG};
pub use error::{Malformation, MapTagError};
pub use flatten::flatten;
pub use hook::MapTag;
pub use unflatten::unflatten;
