//! Hex rendering of byte slices for diagnostics and log output.

/// Renders up to `max` bytes as space-separated lowercase hex pairs.
///
/// When `octets` is longer than `max`, the rendering ends with a
/// `"... (N more)"` suffix.
///
/// # Example
///
/// ```
/// use cbor_tagmap_buffers::print_octets;
///
/// assert_eq!(print_octets(&[0xd9, 0x01, 0x17], 16), "d9 01 17");
/// assert_eq!(print_octets(&[0xd9, 0x01, 0x17], 2), "d9 01... (1 more)");
/// assert_eq!(print_octets(&[], 16), "");
/// ```
pub fn print_octets(octets: &[u8], max: usize) -> String {
    let mut out = String::with_capacity(octets.len().min(max) * 3);
    for (i, byte) in octets.iter().take(max).enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&format!("{byte:02x}"));
    }
    if octets.len() > max {
        out.push_str(&format!("... ({} more)", octets.len() - max));
    }
    out
}

/// [`print_octets`] capped at 16 bytes.
pub fn print_octets_default(octets: &[u8]) -> String {
    print_octets(octets, 16)
}
