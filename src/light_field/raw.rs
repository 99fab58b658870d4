//! RAW mosaic reading module
//!
//! This module unpacks the sensor payload into a single-channel image.

mod assembler;
mod scaling;
pub mod types;
mod unpack;

pub use assembler::assemble_mosaic;
pub use scaling::{normalize, SampleNormalization};
pub use types::RawImageData;
pub use unpack::PixelUnpacker;
