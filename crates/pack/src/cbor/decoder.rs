//! `CborDecoder`: CBOR decoder producing [`PackValue`]s.
//!
//! Tag payloads are decoded first; when the tag number has a hook in the
//! decoder's [`TagRegistry`] the hook receives the payload and its result
//! takes the tag's place. Unregistered tags become [`PackValue::Extension`].

use cbor_tagmap_buffers::{decode_f16, print_octets, Reader};

use super::constants::*;
use super::error::CborError;
use super::hooks::TagRegistry;
use crate::{OrderedMap, PackExtension, PackValue};

/// CBOR decoder.
#[derive(Debug, Clone, Default)]
pub struct CborDecoder {
    tags: TagRegistry,
}

impl CborDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tags(tags: TagRegistry) -> Self {
        Self { tags }
    }

    /// Decodes exactly one data item; trailing bytes are an error.
    pub fn decode(&self, data: &[u8]) -> Result<PackValue, CborError> {
        let (value, consumed) = self.decode_with_consumed(data)?;
        if consumed != data.len() {
            return Err(CborError::TrailingBytes(data.len() - consumed));
        }
        Ok(value)
    }

    /// Decodes the first data item and reports how many bytes it spans.
    pub fn decode_with_consumed(&self, data: &[u8]) -> Result<(PackValue, usize), CborError> {
        let mut reader = Reader::new(data);
        match self.read_any(&mut reader, 0) {
            Ok(value) => Ok((value, reader.x)),
            Err(err) => {
                tracing::trace!(
                    offset = reader.x,
                    input = %print_octets(data, 32),
                    error = %err,
                    "cbor decode failed"
                );
                Err(err)
            }
        }
    }

    fn read_any(&self, reader: &mut Reader<'_>, depth: usize) -> Result<PackValue, CborError> {
        if depth > MAX_DEPTH {
            return Err(CborError::DepthExceeded);
        }
        let octet = reader.u8()?;
        let major = octet >> 5;
        let minor = octet & MINOR_MASK;
        match major {
            MAJOR_UIN => {
                let uint = read_arg(reader, minor)?;
                Ok(PackValue::from(uint))
            }
            MAJOR_NIN => {
                let uint = read_arg(reader, minor)?;
                let int = i64::try_from(uint).map_err(|_| CborError::Unsupported)?;
                Ok(PackValue::Integer(-1 - int))
            }
            MAJOR_BIN => self.read_bin(reader, minor).map(PackValue::Bytes),
            MAJOR_STR => self.read_str(reader, minor).map(PackValue::Str),
            MAJOR_ARR => self.read_arr(reader, minor, depth),
            MAJOR_MAP => self.read_map(reader, minor, depth),
            MAJOR_TAG => self.read_tag(reader, minor, depth),
            MAJOR_TKN => read_token(reader, minor),
            _ => Err(CborError::InvalidPayload),
        }
    }

    fn read_bin(&self, reader: &mut Reader<'_>, minor: u8) -> Result<Vec<u8>, CborError> {
        if minor != MINOR_INDEFINITE {
            let length = read_len(reader, minor)?;
            return Ok(reader.buf(length)?.to_vec());
        }
        let mut out = Vec::new();
        loop {
            let octet = reader.u8()?;
            if octet == CBOR_END {
                return Ok(out);
            }
            if octet >> 5 != MAJOR_BIN || octet & MINOR_MASK == MINOR_INDEFINITE {
                return Err(CborError::UnexpectedBinChunkMajor);
            }
            let length = read_len(reader, octet & MINOR_MASK)?;
            out.extend_from_slice(reader.buf(length)?);
        }
    }

    fn read_str(&self, reader: &mut Reader<'_>, minor: u8) -> Result<String, CborError> {
        if minor != MINOR_INDEFINITE {
            let length = read_len(reader, minor)?;
            return Ok(reader.utf8(length)?.to_owned());
        }
        let mut out = String::new();
        loop {
            let octet = reader.u8()?;
            if octet == CBOR_END {
                return Ok(out);
            }
            if octet >> 5 != MAJOR_STR || octet & MINOR_MASK == MINOR_INDEFINITE {
                return Err(CborError::UnexpectedStrChunkMajor);
            }
            let length = read_len(reader, octet & MINOR_MASK)?;
            out.push_str(reader.utf8(length)?);
        }
    }

    fn read_arr(
        &self,
        reader: &mut Reader<'_>,
        minor: u8,
        depth: usize,
    ) -> Result<PackValue, CborError> {
        if minor == MINOR_INDEFINITE {
            let mut items = Vec::new();
            while !at_break(reader)? {
                items.push(self.read_any(reader, depth + 1)?);
            }
            return Ok(PackValue::Array(items));
        }
        let length = read_len(reader, minor)?;
        // Every item takes at least one byte.
        if length > reader.size() {
            return Err(CborError::InvalidSize);
        }
        let mut items = Vec::with_capacity(length);
        for _ in 0..length {
            items.push(self.read_any(reader, depth + 1)?);
        }
        Ok(PackValue::Array(items))
    }

    fn read_map(
        &self,
        reader: &mut Reader<'_>,
        minor: u8,
        depth: usize,
    ) -> Result<PackValue, CborError> {
        let mut pairs = Vec::new();
        if minor == MINOR_INDEFINITE {
            while !at_break(reader)? {
                let key = self.read_any(reader, depth + 1)?;
                let value = self.read_any(reader, depth + 1)?;
                pairs.push((key, value));
            }
        } else {
            let length = read_len(reader, minor)?;
            if length > reader.size() / 2 {
                return Err(CborError::InvalidSize);
            }
            pairs.reserve(length);
            for _ in 0..length {
                let key = self.read_any(reader, depth + 1)?;
                let value = self.read_any(reader, depth + 1)?;
                pairs.push((key, value));
            }
        }
        Ok(into_map_value(pairs))
    }

    fn read_tag(
        &self,
        reader: &mut Reader<'_>,
        minor: u8,
        depth: usize,
    ) -> Result<PackValue, CborError> {
        let tag = read_arg(reader, minor)?;
        let payload = self.read_any(reader, depth + 1)?;
        match self.tags.get(tag) {
            Some(hook) => hook.decode(payload),
            None => Ok(PackValue::Extension(PackExtension::new(tag, payload))),
        }
    }
}

/// Text-keyed maps become [`PackValue::Object`]; any other key makes it a
/// [`PackValue::Map`], where a repeated key keeps the last value.
fn into_map_value(pairs: Vec<(PackValue, PackValue)>) -> PackValue {
    if pairs.iter().all(|(key, _)| matches!(key, PackValue::Str(_))) {
        let obj = pairs
            .into_iter()
            .filter_map(|(key, value)| match key {
                PackValue::Str(key) => Some((key, value)),
                _ => None,
            })
            .collect();
        return PackValue::Object(obj);
    }
    PackValue::Map(pairs.into_iter().collect::<OrderedMap>())
}

fn at_break(reader: &mut Reader<'_>) -> Result<bool, CborError> {
    if reader.peek()? == CBOR_END {
        reader.skip(1)?;
        return Ok(true);
    }
    Ok(false)
}

fn read_arg(reader: &mut Reader<'_>, minor: u8) -> Result<u64, CborError> {
    match minor {
        0..=23 => Ok(u64::from(minor)),
        MINOR_U8 => Ok(u64::from(reader.u8()?)),
        MINOR_U16 => Ok(u64::from(reader.u16()?)),
        MINOR_U32 => Ok(u64::from(reader.u32()?)),
        MINOR_U64 => Ok(reader.u64()?),
        _ => Err(CborError::UnexpectedMinor(minor)),
    }
}

fn read_len(reader: &mut Reader<'_>, minor: u8) -> Result<usize, CborError> {
    let length = read_arg(reader, minor)?;
    usize::try_from(length).map_err(|_| CborError::InvalidSize)
}

fn read_token(reader: &mut Reader<'_>, minor: u8) -> Result<PackValue, CborError> {
    match OVERLAY_TKN | minor {
        CBOR_FALSE => Ok(PackValue::Bool(false)),
        CBOR_TRUE => Ok(PackValue::Bool(true)),
        CBOR_NULL => Ok(PackValue::Null),
        CBOR_UNDEFINED => Ok(PackValue::Undefined),
        CBOR_F16 => Ok(PackValue::Float(decode_f16(reader.u16()?))),
        CBOR_F32 => Ok(PackValue::Float(f64::from(reader.f32()?))),
        CBOR_F64 => Ok(PackValue::Float(reader.f64()?)),
        CBOR_END => Err(CborError::UnexpectedBreak),
        _ => Err(CborError::Unsupported),
    }
}
