//! Pipeline conversions module
//!
//! This module contains the orchestration from a light field file to an RGB image.

mod lfp_to_rgb;


pub use lfp_to_rgb::{DecodedImage, LightFieldPipeline};
