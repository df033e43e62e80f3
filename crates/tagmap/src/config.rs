//! Map tag configuration.

use crate::error::{Malformation, MapTagError};

/// Conventional tag number for a flattened map.
///
/// Nothing picks this up implicitly: pass it to [`MapTagConfig::new`] on both
/// the producing and the consuming side.
pub const MAP_TAG: u64 = 279;

/// What to do when a payload repeats a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateKeyPolicy {
    /// A later pair overwrites the value of an earlier one. The key keeps the
    /// position of its first occurrence.
    #[default]
    LastWriteWins,
    /// A repeated key makes the payload malformed.
    Reject,
}

/// Settings shared by the encode and decode side of the map tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapTagConfig {
    /// Tag number written on encode and matched on decode.
    pub tag: u64,
    /// Upper bound on decoded entries. `None` accepts any count.
    pub max_entries: Option<usize>,
    pub duplicate_keys: DuplicateKeyPolicy,
}

impl MapTagConfig {
    pub fn new(tag: u64) -> Self {
        Self {
            tag,
            max_entries: None,
            duplicate_keys: DuplicateKeyPolicy::default(),
        }
    }

    pub fn with_max_entries(mut self, limit: usize) -> Self {
        self.max_entries = Some(limit);
        self
    }

    pub fn with_duplicate_keys(mut self, policy: DuplicateKeyPolicy) -> Self {
        self.duplicate_keys = policy;
        self
    }

    pub(crate) fn malformed(&self, reason: Malformation) -> MapTagError {
        MapTagError::MalformedTag {
            tag: self.tag,
            reason,
        }
    }
}
