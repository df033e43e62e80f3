//! Float32 precision check used to pick the shortest float encoding.

/// Whether `n` survives a round trip through `f32` unchanged.
///
/// NaN never compares equal to itself, so it reports `false` and is written
/// as a double by callers.
///
/// # Example
///
/// ```
/// use cbor_tagmap_buffers::is_float32;
///
/// assert!(is_float32(1.5));
/// assert!(!is_float32(0.1));
/// ```
pub fn is_float32(n: f64) -> bool {
    f64::from(n as f32) == n
}
