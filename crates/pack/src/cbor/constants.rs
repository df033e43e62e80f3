//! CBOR wire constants (RFC 8949 §3).

// Major types (bits 7-5 of the initial byte).
pub const MAJOR_UIN: u8 = 0b000;
pub const MAJOR_NIN: u8 = 0b001;
pub const MAJOR_BIN: u8 = 0b010;
pub const MAJOR_STR: u8 = 0b011;
pub const MAJOR_ARR: u8 = 0b100;
pub const MAJOR_MAP: u8 = 0b101;
pub const MAJOR_TAG: u8 = 0b110;
pub const MAJOR_TKN: u8 = 0b111;

// Major types shifted into place, ready to be OR-ed with a minor value.
pub const OVERLAY_UIN: u8 = MAJOR_UIN << 5;
pub const OVERLAY_NIN: u8 = MAJOR_NIN << 5;
pub const OVERLAY_BIN: u8 = MAJOR_BIN << 5;
pub const OVERLAY_STR: u8 = MAJOR_STR << 5;
pub const OVERLAY_ARR: u8 = MAJOR_ARR << 5;
pub const OVERLAY_MAP: u8 = MAJOR_MAP << 5;
pub const OVERLAY_TAG: u8 = MAJOR_TAG << 5;
pub const OVERLAY_TKN: u8 = MAJOR_TKN << 5;

pub const MINOR_MASK: u8 = 0b11111;

// Additional-information values.
pub const MINOR_U8: u8 = 24;
pub const MINOR_U16: u8 = 25;
pub const MINOR_U32: u8 = 26;
pub const MINOR_U64: u8 = 27;
pub const MINOR_INDEFINITE: u8 = 31;

// Simple values and floats under major type 7.
pub const CBOR_FALSE: u8 = 0xf4;
pub const CBOR_TRUE: u8 = 0xf5;
pub const CBOR_NULL: u8 = 0xf6;
pub const CBOR_UNDEFINED: u8 = 0xf7;
pub const CBOR_F16: u8 = 0xf9;
pub const CBOR_F32: u8 = 0xfa;
pub const CBOR_F64: u8 = 0xfb;

/// CBOR "break" stop code.
pub const CBOR_END: u8 = 0xff;

/// Maximum nesting of arrays, maps and tags accepted by the decoder.
pub const MAX_DEPTH: usize = 512;
