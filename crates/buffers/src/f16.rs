//! Half-precision (16-bit) float decoding.

/// Widens the raw bits of an IEEE 754 binary16 value to `f64`.
///
/// # Example
///
/// ```
/// use cbor_tagmap_buffers::decode_f16;
///
/// assert_eq!(decode_f16(0x3c00), 1.0);
/// assert_eq!(decode_f16(0xc400), -4.0);
/// assert!(decode_f16(0x7e00).is_nan());
/// ```
pub fn decode_f16(bits: u16) -> f64 {
    let sign = if bits & 0x8000 != 0 { -1.0 } else { 1.0 };
    let exponent = i32::from((bits >> 10) & 0x1f);
    let mantissa = f64::from(bits & 0x03ff);
    match exponent {
        0 => sign * mantissa * 2f64.powi(-24),
        0x1f if mantissa == 0.0 => sign * f64::INFINITY,
        0x1f => f64::NAN,
        _ => sign * (1.0 + mantissa / 1024.0) * 2f64.powi(exponent - 15),
    }
}
