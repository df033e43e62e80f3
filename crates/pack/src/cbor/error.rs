use cbor_tagmap_buffers::BufferError;
use thiserror::Error;

/// Error type for CBOR encoding/decoding operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CborError {
    #[error("invalid cbor payload")]
    InvalidPayload,
    #[error("unexpected end of input")]
    UnexpectedEnd,
    #[error("unsupported cbor feature")]
    Unsupported,
    #[error("unexpected minor value {0}")]
    UnexpectedMinor(u8),
    #[error("unexpected break")]
    UnexpectedBreak,
    #[error("unexpected binary chunk major type")]
    UnexpectedBinChunkMajor,
    #[error("unexpected string chunk major type")]
    UnexpectedStrChunkMajor,
    #[error("invalid UTF-8 in text string")]
    InvalidUtf8,
    #[error("invalid size")]
    InvalidSize,
    #[error("{0} trailing bytes after data item")]
    TrailingBytes(usize),
    #[error("nesting depth exceeded")]
    DepthExceeded,
    #[error("decode hook already registered for tag {0}")]
    DuplicateTag(u64),
    #[error("map encode hook already registered")]
    DuplicateMapHook,
    #[error("malformed tag {tag}: {reason}")]
    MalformedTag { tag: u64, reason: String },
}

impl From<BufferError> for CborError {
    fn from(err: BufferError) -> Self {
        match err {
            BufferError::EndOfBuffer => CborError::UnexpectedEnd,
            BufferError::InvalidUtf8 => CborError::InvalidUtf8,
        }
    }
}
