//! Ready-made encoder/decoder pair with the map tag installed.

use cbor_tagmap_pack::{
    CborDecoder, CborEncoder, CborError, EncodeHooks, OrderedMap, PackValue, TagRegistry,
};

use crate::config::MapTagConfig;
use crate::hook::MapTag;

/// CBOR codec whose encoder flattens every [`PackValue::Map`] and whose
/// decoder rebuilds maps from the configured tag.
pub struct MapCborCodec {
    pub encoder: CborEncoder,
    pub decoder: CborDecoder,
    config: MapTagConfig,
}

impl MapCborCodec {
    pub fn new(config: MapTagConfig) -> Result<Self, CborError> {
        Self::with_registries(config, EncodeHooks::new(), TagRegistry::new())
    }

    /// Builds the codec on top of registries that may already hold hooks for
    /// other tag numbers.
    pub fn with_registries(
        config: MapTagConfig,
        mut hooks: EncodeHooks,
        mut tags: TagRegistry,
    ) -> Result<Self, CborError> {
        MapTag::new(config.clone()).install(&mut hooks, &mut tags)?;
        Ok(Self {
            encoder: CborEncoder::with_hooks(hooks),
            decoder: CborDecoder::with_tags(tags),
            config,
        })
    }

    pub fn config(&self) -> &MapTagConfig {
        &self.config
    }

    pub fn encode(&mut self, value: &PackValue) -> Vec<u8> {
        self.encoder.encode(value)
    }

    pub fn decode(&self, bytes: &[u8]) -> Result<PackValue, CborError> {
        self.decoder.decode(bytes)
    }

    /// Encodes a single container as the top-level item.
    pub fn encode_map(&mut self, map: &OrderedMap) -> Vec<u8> {
        self.encoder.writer.reset();
        self.encoder.write_map(map);
        self.encoder.writer.flush()
    }

    /// Decodes a top-level item that must come out as a container.
    pub fn decode_map(&self, bytes: &[u8]) -> Result<OrderedMap, CborError> {
        match self.decode(bytes)? {
            PackValue::Map(map) => Ok(map),
            _ => Err(CborError::InvalidPayload),
        }
    }
}
