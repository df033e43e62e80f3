//! [`MapTag`]: the encode and decode hooks for flattened maps.

use std::sync::Arc;

use cbor_tagmap_pack::{
    CborError, EncodeHooks, MapEncodeHook, OrderedMap, PackValue, TagDecodeHook, TagRegistry,
};

use crate::config::MapTagConfig;
use crate::flatten::flatten;
use crate::unflatten::unflatten;

/// Both halves of the map tag, bound to one [`MapTagConfig`].
///
/// Installing a single `MapTag` on the encode and decode side guarantees the
/// two agree on the tag number.
#[derive(Debug, Clone)]
pub struct MapTag {
    config: MapTagConfig,
}

impl MapTag {
    pub fn new(config: MapTagConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MapTagConfig {
        &self.config
    }

    /// Registers this tag as the map encode hook and as the decode hook for
    /// `config.tag`.
    ///
    /// Fails without touching either registry when a map hook or a hook for
    /// the same tag number is already present.
    pub fn install(&self, hooks: &mut EncodeHooks, tags: &mut TagRegistry) -> Result<(), CborError> {
        if hooks.map().is_some() {
            return Err(CborError::DuplicateMapHook);
        }
        if tags.contains(self.config.tag) {
            return Err(CborError::DuplicateTag(self.config.tag));
        }
        let shared = Arc::new(self.clone());
        hooks.register_map(shared.clone())?;
        tags.register(self.config.tag, shared)?;
        tracing::debug!(
            tag = self.config.tag,
            max_entries = ?self.config.max_entries,
            duplicate_keys = ?self.config.duplicate_keys,
            "installed map tag"
        );
        Ok(())
    }
}

impl MapEncodeHook for MapTag {
    fn encode(&self, map: &OrderedMap) -> PackValue {
        PackValue::Extension(flatten(self.config.tag, map))
    }
}

impl TagDecodeHook for MapTag {
    fn decode(&self, payload: PackValue) -> Result<PackValue, CborError> {
        match unflatten(&self.config, payload) {
            Ok(map) => Ok(PackValue::Map(map)),
            Err(err) => {
                tracing::debug!(tag = self.config.tag, error = %err, "rejected map tag payload");
                Err(err.into())
            }
        }
    }
}
