//! `CborEncoder`: CBOR encoder for the full [`PackValue`] domain.
//!
//! Heads always use the shortest length encoding. Floats are written as
//! single precision when that is lossless, double precision otherwise.

use cbor_tagmap_buffers::{is_float32, Writer};

use super::constants::*;
use super::hooks::EncodeHooks;
use crate::{OrderedMap, PackValue};

/// CBOR encoder.
///
/// [`PackValue::Map`] is routed through the map hook in [`EncodeHooks`] when
/// one is installed; otherwise it is written as a plain CBOR map whose keys
/// may be any value.
pub struct CborEncoder {
    pub writer: Writer,
    hooks: EncodeHooks,
}

impl Default for CborEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl CborEncoder {
    pub fn new() -> Self {
        Self::with_hooks(EncodeHooks::new())
    }

    pub fn with_hooks(hooks: EncodeHooks) -> Self {
        Self {
            writer: Writer::new(),
            hooks,
        }
    }

    pub fn hooks(&self) -> &EncodeHooks {
        &self.hooks
    }

    /// Encode a value and return the CBOR bytes.
    pub fn encode(&mut self, value: &PackValue) -> Vec<u8> {
        self.writer.reset();
        self.write_any(value);
        self.writer.flush()
    }

    pub fn write_any(&mut self, value: &PackValue) {
        match value {
            PackValue::Null => self.write_null(),
            PackValue::Undefined => self.write_undef(),
            PackValue::Bool(b) => self.write_boolean(*b),
            PackValue::Integer(i) => self.write_integer(*i),
            PackValue::UInteger(u) => self.write_u_integer(*u),
            PackValue::Float(f) => self.write_float(*f),
            PackValue::Bytes(b) => self.write_bin(b),
            PackValue::Str(s) => self.write_str(s),
            PackValue::Array(arr) => self.write_arr(arr),
            PackValue::Object(pairs) => self.write_obj_pairs(pairs),
            PackValue::Map(map) => self.write_map(map),
            PackValue::Extension(ext) => self.write_tag(ext.tag, &ext.val),
            PackValue::Blob(blob) => self.writer.buf(&blob.val),
        }
    }

    pub fn write_null(&mut self) {
        self.writer.u8(CBOR_NULL);
    }

    pub fn write_undef(&mut self) {
        self.writer.u8(CBOR_UNDEFINED);
    }

    pub fn write_boolean(&mut self, b: bool) {
        self.writer.u8(if b { CBOR_TRUE } else { CBOR_FALSE });
    }

    pub fn write_integer(&mut self, int: i64) {
        if int >= 0 {
            self.write_u_integer(int as u64);
        } else {
            self.encode_nint(int);
        }
    }

    pub fn write_u_integer(&mut self, uint: u64) {
        self.write_head(OVERLAY_UIN, uint);
    }

    /// Negative integer: major type 1 carries `-1 - int`.
    pub fn encode_nint(&mut self, int: i64) {
        let uint = (-1i64).wrapping_sub(int) as u64;
        self.write_head(OVERLAY_NIN, uint);
    }

    pub fn write_float(&mut self, float: f64) {
        if is_float32(float) {
            self.writer.u8f32(CBOR_F32, float as f32);
        } else {
            self.writer.u8f64(CBOR_F64, float);
        }
    }

    pub fn write_bin(&mut self, buf: &[u8]) {
        self.write_bin_hdr(buf.len());
        self.writer.buf(buf);
    }

    pub fn write_bin_hdr(&mut self, length: usize) {
        self.write_head(OVERLAY_BIN, length as u64);
    }

    pub fn write_str(&mut self, s: &str) {
        self.write_str_hdr(s.len());
        self.writer.utf8(s);
    }

    pub fn write_str_hdr(&mut self, length: usize) {
        self.write_head(OVERLAY_STR, length as u64);
    }

    pub fn write_arr(&mut self, arr: &[PackValue]) {
        self.write_arr_hdr(arr.len());
        for item in arr {
            self.write_any(item);
        }
    }

    pub fn write_arr_hdr(&mut self, length: usize) {
        self.write_head(OVERLAY_ARR, length as u64);
    }

    pub fn write_obj_pairs(&mut self, pairs: &[(String, PackValue)]) {
        self.write_obj_hdr(pairs.len());
        for (key, value) in pairs {
            self.write_str(key);
            self.write_any(value);
        }
    }

    pub fn write_obj_hdr(&mut self, length: usize) {
        self.write_head(OVERLAY_MAP, length as u64);
    }

    /// Writes an associative container, through the map hook if installed.
    pub fn write_map(&mut self, map: &OrderedMap) {
        let replacement = self.hooks.map().map(|hook| hook.encode(map));
        match replacement {
            Some(value) => self.write_any(&value),
            None => self.write_map_plain(map),
        }
    }

    /// Writes an associative container as CBOR major type 5.
    pub fn write_map_plain(&mut self, map: &OrderedMap) {
        self.write_obj_hdr(map.len());
        for (key, value) in map {
            self.write_any(key);
            self.write_any(value);
        }
    }

    pub fn write_tag(&mut self, tag: u64, value: &PackValue) {
        self.write_tag_hdr(tag);
        self.write_any(value);
    }

    pub fn write_tag_hdr(&mut self, tag: u64) {
        self.write_head(OVERLAY_TAG, tag);
    }

    /// Writes an initial byte for `overlay` with `n` as its argument.
    fn write_head(&mut self, overlay: u8, n: u64) {
        let w = &mut self.writer;
        if n <= 23 {
            w.u8(overlay | n as u8);
        } else if n <= 0xff {
            w.u8(overlay | MINOR_U8);
            w.u8(n as u8);
        } else if n <= 0xffff {
            w.u8u16(overlay | MINOR_U16, n as u16);
        } else if n <= 0xffff_ffff {
            w.u8u32(overlay | MINOR_U32, n as u32);
        } else {
            w.u8u64(overlay | MINOR_U64, n);
        }
    }

    // ---- Streaming ----

    pub fn write_start_arr(&mut self) {
        self.writer.u8(OVERLAY_ARR | MINOR_INDEFINITE);
    }

    pub fn write_start_obj(&mut self) {
        self.writer.u8(OVERLAY_MAP | MINOR_INDEFINITE);
    }

    pub fn write_end(&mut self) {
        self.writer.u8(CBOR_END);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::cbor::hooks::MapEncodeHook;
    use crate::{PackBlob, PackExtension};

    fn enc(value: &PackValue) -> Vec<u8> {
        CborEncoder::new().encode(value)
    }

    #[test]
    fn test_encode_simple_values() {
        assert_eq!(enc(&PackValue::Null), vec![0xf6]);
        assert_eq!(enc(&PackValue::Undefined), vec![0xf7]);
        assert_eq!(enc(&PackValue::Bool(true)), vec![0xf5]);
        assert_eq!(enc(&PackValue::Bool(false)), vec![0xf4]);
    }

    #[test]
    fn test_encode_uint_widths() {
        assert_eq!(enc(&PackValue::Integer(0)), vec![0x00]);
        assert_eq!(enc(&PackValue::Integer(23)), vec![0x17]);
        assert_eq!(enc(&PackValue::Integer(24)), vec![0x18, 0x18]);
        assert_eq!(enc(&PackValue::Integer(256)), vec![0x19, 0x01, 0x00]);
        assert_eq!(
            enc(&PackValue::Integer(65536)),
            vec![0x1a, 0x00, 0x01, 0x00, 0x00]
        );
        assert_eq!(
            enc(&PackValue::UInteger(u64::MAX)),
            vec![0x1b, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]
        );
    }

    #[test]
    fn test_encode_nint() {
        assert_eq!(enc(&PackValue::Integer(-1)), vec![0x20]);
        assert_eq!(enc(&PackValue::Integer(-24)), vec![0x37]);
        assert_eq!(enc(&PackValue::Integer(-25)), vec![0x38, 0x18]);
        assert_eq!(enc(&PackValue::Integer(-1000)), vec![0x39, 0x03, 0xe7]);
        let bytes = enc(&PackValue::Integer(i64::MIN));
        assert_eq!(bytes[0], 0x3b);
        assert_eq!(&bytes[1..], &(i64::MAX as u64).to_be_bytes());
    }

    #[test]
    fn test_encode_float_precision() {
        assert_eq!(enc(&PackValue::Float(1.5)), vec![0xfa, 0x3f, 0xc0, 0x00, 0x00]);
        let bytes = enc(&PackValue::Float(1.1));
        assert_eq!(bytes[0], 0xfb);
        assert_eq!(bytes.len(), 9);
    }

    #[test]
    fn test_encode_str_and_bin() {
        assert_eq!(enc(&PackValue::from("a")), vec![0x61, 0x61]);
        assert_eq!(enc(&PackValue::from("")), vec![0x60]);
        let long = "x".repeat(24);
        let bytes = enc(&PackValue::Str(long));
        assert_eq!(&bytes[..2], &[0x78, 24]);
        assert_eq!(enc(&PackValue::Bytes(vec![1, 2])), vec![0x42, 1, 2]);
    }

    #[test]
    fn test_encode_array_and_object() {
        let arr = PackValue::Array(vec![PackValue::Integer(4), PackValue::Integer(5)]);
        assert_eq!(enc(&arr), vec![0x82, 0x04, 0x05]);
        let obj = PackValue::Object(vec![("a".to_owned(), PackValue::Integer(1))]);
        assert_eq!(enc(&obj), vec![0xa1, 0x61, 0x61, 0x01]);
    }

    #[test]
    fn test_encode_map_without_hook_is_plain_map() {
        let mut map = OrderedMap::new();
        map.insert(PackValue::Integer(1), PackValue::Integer(2));
        map.insert(PackValue::Bytes(vec![9]), PackValue::Null);
        assert_eq!(
            enc(&PackValue::Map(map)),
            vec![0xa2, 0x01, 0x02, 0x41, 0x09, 0xf6]
        );
    }

    #[test]
    fn test_encode_tag_widths() {
        let tagged = |tag| enc(&PackValue::Extension(PackExtension::new(tag, PackValue::Null)));
        assert_eq!(tagged(1), vec![0xc1, 0xf6]);
        assert_eq!(tagged(42), vec![0xd8, 0x2a, 0xf6]);
        assert_eq!(tagged(279), vec![0xd9, 0x01, 0x17, 0xf6]);
        assert_eq!(tagged(0x10000), vec![0xda, 0x00, 0x01, 0x00, 0x00, 0xf6]);
    }

    #[test]
    fn test_encode_blob_passes_through() {
        let blob = PackValue::Array(vec![
            PackValue::Blob(PackBlob::new(vec![0x82, 0x01, 0x02])),
            PackValue::Integer(3),
        ]);
        assert_eq!(enc(&blob), vec![0x82, 0x82, 0x01, 0x02, 0x03]);
    }

    struct PairsAsArray;

    impl MapEncodeHook for PairsAsArray {
        fn encode(&self, map: &OrderedMap) -> PackValue {
            PackValue::Array(
                map.iter()
                    .map(|(k, v)| PackValue::Array(vec![k.clone(), v.clone()]))
                    .collect(),
            )
        }
    }

    #[test]
    fn test_map_hook_replaces_nested_maps() {
        let mut hooks = EncodeHooks::new();
        hooks.register_map(Arc::new(PairsAsArray)).unwrap();
        let mut encoder = CborEncoder::with_hooks(hooks);

        let mut inner = OrderedMap::new();
        inner.insert(PackValue::Integer(2), PackValue::Integer(3));
        let mut outer = OrderedMap::new();
        outer.insert(PackValue::Integer(1), PackValue::Map(inner));

        assert_eq!(
            encoder.encode(&PackValue::Map(outer)),
            vec![0x81, 0x82, 0x01, 0x81, 0x82, 0x02, 0x03]
        );
    }

    #[test]
    fn test_streaming_heads() {
        let mut encoder = CborEncoder::new();
        encoder.write_start_arr();
        encoder.write_integer(1);
        encoder.write_end();
        assert_eq!(encoder.writer.flush(), vec![0x9f, 0x01, 0xff]);

        encoder.write_start_obj();
        encoder.write_integer(1);
        encoder.write_integer(2);
        encoder.write_end();
        assert_eq!(encoder.writer.flush(), vec![0xbf, 0x01, 0x02, 0xff]);
    }
}
