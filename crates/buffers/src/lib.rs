//! Binary buffer utilities for the tagged-map CBOR codec.
//!
//! # Overview
//!
//! - [`Reader`] - Reads binary data from a byte slice with bounds-checked cursor tracking
//! - [`Writer`] - Writes binary data to an auto-growing buffer
//! - [`print_octets`] - Hex rendering of byte slices for diagnostics
//! - [`decode_f16`] - Half-precision float widening
//!
//! # Example
//!
//! ```
//! use cbor_tagmap_buffers::{Reader, Writer};
//!
//! let mut writer = Writer::new();
//! writer.u8(0x01);
//! writer.u16(0x0203);
//! writer.utf8("hello");
//! let data = writer.flush();
//!
//! let mut reader = Reader::new(&data);
//! assert_eq!(reader.u8().unwrap(), 0x01);
//! assert_eq!(reader.u16().unwrap(), 0x0203);
//! assert_eq!(reader.utf8(5).unwrap(), "hello");
//! ```

mod f16;
mod is_float32;
mod print_octets;
mod reader;
mod writer;

pub use f16::decode_f16;
pub use is_float32::is_float32;
pub use print_octets::{print_octets, print_octets_default};
pub use reader::Reader;
pub use writer::Writer;

use thiserror::Error;

/// Error type for buffer operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    /// Attempted to read past the end of the buffer.
    #[error("end of buffer")]
    EndOfBuffer,
    /// Invalid UTF-8 sequence.
    #[error("invalid UTF-8 sequence")]
    InvalidUtf8,
}
