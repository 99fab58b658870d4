//! RAW image data types

/// Represents the unpacked single-channel mosaic image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawImageData {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// Raw pixel data, row-major (single channel Bayer pattern)
    pub data: Vec<u16>,
    /// Bits per sample (e.g., 10, 12 or 16), or 8 once normalized
    pub bits_per_sample: u32,
}

impl RawImageData {
    #[inline]
    pub fn sample(&self, x: usize, y: usize) -> u16 {
        self.data[y * self.width + x]
    }

    pub fn max_value(&self) -> u32 {
        (1u32 << self.bits_per_sample) - 1
    }
}
