use cbor_tagmap_pack::CborError;
use thiserror::Error;

/// Why a map tag payload could not be turned back into a container.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Malformation {
    #[error("payload is not a sequence (found {found})")]
    NotSequence { found: &'static str },
    #[error("odd element count {0}, cannot pair into key/value")]
    OddLength(usize),
    #[error("{entries} entries exceed the limit of {limit}")]
    TooManyEntries { entries: usize, limit: usize },
    #[error("duplicate key at pair {index}")]
    DuplicateKey { index: usize },
}

/// Error type for the map tag transforms.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MapTagError {
    #[error("malformed map tag {tag}: {reason}")]
    MalformedTag { tag: u64, reason: Malformation },
}

impl MapTagError {
    pub fn reason(&self) -> &Malformation {
        match self {
            MapTagError::MalformedTag { reason, .. } => reason,
        }
    }
}

impl From<MapTagError> for CborError {
    fn from(err: MapTagError) -> Self {
        match err {
            MapTagError::MalformedTag { tag, reason } => CborError::MalformedTag {
                tag,
                reason: reason.to_string(),
            },
        }
    }
}
