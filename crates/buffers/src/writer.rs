//! Auto-growing binary buffer writer.

/// Default allocation size for a fresh [`Writer`].
const DEFAULT_ALLOC_SIZE: usize = 64 * 1024;

/// A binary buffer writer with cursor tracking.
///
/// The writer owns a growable byte buffer. Values are written at cursor `x`;
/// [`Writer::flush`] returns everything written since the last flush (from
/// `x0` to `x`) and moves `x0` forward.
///
/// All multi-byte integers and floats are written big-endian.
///
/// # Example
///
/// ```
/// use cbor_tagmap_buffers::Writer;
///
/// let mut writer = Writer::new();
/// writer.u8(0xd9);
/// writer.u16(0x0117);
/// assert_eq!(writer.flush(), vec![0xd9, 0x01, 0x17]);
/// ```
#[derive(Debug, Clone)]
pub struct Writer {
    /// The underlying buffer. Only `uint8[..x]` holds written data.
    pub uint8: Vec<u8>,
    /// Start of the not-yet-flushed region.
    pub x0: usize,
    /// Current cursor position.
    pub x: usize,
    alloc_size: usize,
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer {
    /// Creates a writer with the default allocation size.
    pub fn new() -> Self {
        Self::with_alloc_size(DEFAULT_ALLOC_SIZE)
    }

    /// Creates a writer that grows in steps of at least `alloc_size` bytes.
    pub fn with_alloc_size(alloc_size: usize) -> Self {
        let alloc_size = alloc_size.max(16);
        Self {
            uint8: vec![0; alloc_size],
            x0: 0,
            x: 0,
            alloc_size,
        }
    }

    /// Discards unflushed data and rewinds the cursor to the flush point.
    pub fn reset(&mut self) {
        self.x = self.x0;
    }

    /// Makes sure at least `capacity` more bytes fit after the cursor.
    pub fn ensure_capacity(&mut self, capacity: usize) {
        let required = self.x + capacity;
        if required <= self.uint8.len() {
            return;
        }
        // Compact flushed bytes away before growing.
        if self.x0 > 0 {
            self.uint8.copy_within(self.x0..self.x, 0);
            self.x -= self.x0;
            self.x0 = 0;
        }
        let required = self.x + capacity;
        if required > self.uint8.len() {
            let grow = (required - self.uint8.len()).max(self.alloc_size);
            self.uint8.resize(self.uint8.len() + grow, 0);
        }
    }

    /// Number of bytes written since the last flush.
    pub fn len(&self) -> usize {
        self.x - self.x0
    }

    /// Whether nothing was written since the last flush.
    pub fn is_empty(&self) -> bool {
        self.x == self.x0
    }

    /// Returns the bytes written since the last flush and advances the flush point.
    pub fn flush(&mut self) -> Vec<u8> {
        let out = self.uint8[self.x0..self.x].to_vec();
        self.x0 = self.x;
        out
    }

    #[inline]
    pub fn u8(&mut self, val: u8) {
        self.ensure_capacity(1);
        self.uint8[self.x] = val;
        self.x += 1;
    }

    #[inline]
    pub fn u16(&mut self, val: u16) {
        self.put(&val.to_be_bytes());
    }

    #[inline]
    pub fn u32(&mut self, val: u32) {
        self.put(&val.to_be_bytes());
    }

    #[inline]
    pub fn u64(&mut self, val: u64) {
        self.put(&val.to_be_bytes());
    }

    /// Writes a one-byte head followed by a big-endian `u16`.
    pub fn u8u16(&mut self, head: u8, val: u16) {
        self.ensure_capacity(3);
        self.uint8[self.x] = head;
        self.x += 1;
        self.put(&val.to_be_bytes());
    }

    /// Writes a one-byte head followed by a big-endian `u32`.
    pub fn u8u32(&mut self, head: u8, val: u32) {
        self.ensure_capacity(5);
        self.uint8[self.x] = head;
        self.x += 1;
        self.put(&val.to_be_bytes());
    }

    /// Writes a one-byte head followed by a big-endian `u64`.
    pub fn u8u64(&mut self, head: u8, val: u64) {
        self.ensure_capacity(9);
        self.uint8[self.x] = head;
        self.x += 1;
        self.put(&val.to_be_bytes());
    }

    /// Writes a one-byte head followed by a big-endian `f32`.
    pub fn u8f32(&mut self, head: u8, val: f32) {
        self.ensure_capacity(5);
        self.uint8[self.x] = head;
        self.x += 1;
        self.put(&val.to_be_bytes());
    }

    /// Writes a one-byte head followed by a big-endian `f64`.
    pub fn u8f64(&mut self, head: u8, val: f64) {
        self.ensure_capacity(9);
        self.uint8[self.x] = head;
        self.x += 1;
        self.put(&val.to_be_bytes());
    }

    /// Copies raw bytes into the buffer.
    pub fn buf(&mut self, data: &[u8]) {
        self.put(data);
    }

    /// Writes the UTF-8 bytes of `s` and returns the number of bytes written.
    pub fn utf8(&mut self, s: &str) -> usize {
        self.put(s.as_bytes());
        s.len()
    }

    fn put(&mut self, data: &[u8]) {
        let len = data.len();
        self.ensure_capacity(len);
        self.uint8[self.x..self.x + len].copy_from_slice(data);
        self.x += len;
    }
}
