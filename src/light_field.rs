//! Light field decoding module
//!
//! This module reads light field container files: the block container,
//! the JSON metadata that references blocks by role, the packed raw mosaic
//! and its demosaic to RGB.

pub mod common;
pub mod config;
pub mod container;
pub mod conversions;
pub mod debayer;
pub mod file;
pub mod metadata;
pub mod raw;
pub mod reference;

pub use common::{
    LightFieldError,
    Result,
};

pub use config::{
    DecodeConfig,
    DecodeConfigBuilder,
};

pub use container::{
    Block,
    DataBlock,
    RandomAccess,
};

pub use file::LightFieldFile;

pub use raw::{
    RawImageData,
    SampleNormalization,
};

pub use debayer::{
    CpuDebayer,
    Debayer,
    RgbImageData,
};

pub use reference::FrameReferenceNames;

pub use conversions::{
    DecodedImage,
    LightFieldPipeline,
};
