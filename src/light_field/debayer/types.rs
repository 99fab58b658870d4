//! Types for debayering operations

use crate::light_field::common::error::Result;
use crate::light_field::debayer::pattern::MosaicPattern;
use crate::light_field::raw::RawImageData;

/// RGB image data after debayering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbImageData {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// RGB pixel data interleaved [R, G, B, R, G, B, ...], row-major
    pub data: Vec<u8>,
}

impl RgbImageData {
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let i = (y * self.width + x) * 3;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }
}

/// Reconstructs colour from a single-channel mosaic whose samples are
/// already in 0..=255.
pub trait Debayer {
    fn process(&self, mosaic: &RawImageData, pattern: &MosaicPattern) -> Result<RgbImageData>;
}
