use thiserror::Error;

use crate::light_field::metadata::Endianness;

#[derive(Error, Debug)]
pub enum LightFieldError {
    #[error("Truncated block at offset {offset}: needed {needed} bytes, {available} remaining")]
    TruncatedBlock {
        offset: u64,
        needed: u64,
        available: u64,
    },

    #[error("Block name at offset {offset} is not valid UTF-8")]
    InvalidBlockName { offset: u64 },

    #[error("No main metadata block found in file")]
    MissingMainMetadata,

    #[error("Missing reference: metadata has no entry for role '{role}'")]
    MissingReference { role: String },

    #[error("Missing block: role '{role}' refers to '{name}', which no data block carries")]
    MissingBlock { role: String, name: String },

    #[error("Unsupported pixel packing: {bits_per_pixel} bits per pixel, {endianness:?} endian")]
    UnsupportedPacking {
        bits_per_pixel: u32,
        endianness: Endianness,
    },

    #[error("Image data size mismatch: expected {expected} bytes, got {actual}")]
    SizeMismatch { expected: u64, actual: u64 },

    #[error("Unpacked sample count mismatch: expected {expected}, got {actual}")]
    SampleCountMismatch { expected: usize, actual: usize },

    #[error("Invalid mosaic: {0}")]
    InvalidMosaic(String),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("No in-bounds neighbours at x={x}, y={y}")]
    NoNeighbours { x: usize, y: usize },

    #[error("Light field file has already been closed")]
    FileClosed,

    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to decode metadata: {0}")]
    Metadata(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LightFieldError>;
