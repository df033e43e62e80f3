//! Extension points for custom encode and decode transforms.
//!
//! Hooks are collected into [`EncodeHooks`] and [`TagRegistry`] before an
//! encoder or decoder is built. Both sets are immutable once handed to
//! [`CborEncoder::with_hooks`](super::CborEncoder::with_hooks) or
//! [`CborDecoder::with_tags`](super::CborDecoder::with_tags), so dispatch is
//! resolved at configuration time rather than per call.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::CborError;
use crate::{OrderedMap, PackValue};

/// Replaces an [`OrderedMap`] with the value the encoder writes in its place.
///
/// The returned value is encoded normally, so it may itself contain maps;
/// those re-enter the hook. A hook must not return the map it was given.
pub trait MapEncodeHook: Send + Sync {
    fn encode(&self, map: &OrderedMap) -> PackValue;
}

/// Rebuilds a value from the already-decoded payload of a tag.
pub trait TagDecodeHook: Send + Sync {
    fn decode(&self, payload: PackValue) -> Result<PackValue, CborError>;
}

/// Encode-side hooks.
#[derive(Clone, Default)]
pub struct EncodeHooks {
    map: Option<Arc<dyn MapEncodeHook>>,
}

impl EncodeHooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the transform applied to every [`PackValue::Map`].
    pub fn register_map(&mut self, hook: Arc<dyn MapEncodeHook>) -> Result<(), CborError> {
        if self.map.is_some() {
            return Err(CborError::DuplicateMapHook);
        }
        tracing::debug!("registered map encode hook");
        self.map = Some(hook);
        Ok(())
    }

    pub fn map(&self) -> Option<&Arc<dyn MapEncodeHook>> {
        self.map.as_ref()
    }
}

impl fmt::Debug for EncodeHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodeHooks")
            .field("map", &self.map.is_some())
            .finish()
    }
}

/// Decode-side hooks keyed by tag number.
#[derive(Clone, Default)]
pub struct TagRegistry {
    hooks: HashMap<u64, Arc<dyn TagDecodeHook>>,
}

impl TagRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Associates `tag` with a decode hook. Each tag number takes one hook.
    pub fn register(&mut self, tag: u64, hook: Arc<dyn TagDecodeHook>) -> Result<(), CborError> {
        if self.hooks.contains_key(&tag) {
            return Err(CborError::DuplicateTag(tag));
        }
        tracing::debug!(tag, "registered tag decode hook");
        self.hooks.insert(tag, hook);
        Ok(())
    }

    pub fn get(&self, tag: u64) -> Option<&Arc<dyn TagDecodeHook>> {
        self.hooks.get(&tag)
    }

    pub fn contains(&self, tag: u64) -> bool {
        self.hooks.contains_key(&tag)
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

impl fmt::Debug for TagRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tags: Vec<u64> = self.hooks.keys().copied().collect();
        tags.sort_unstable();
        f.debug_struct("TagRegistry").field("tags", &tags).finish()
    }
}
