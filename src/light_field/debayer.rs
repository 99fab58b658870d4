//! Debayering module for converting the mosaic image to RGB

mod cpu_debayer;
mod pattern;
pub mod types;

pub use cpu_debayer::CpuDebayer;
pub use pattern::{MosaicInfo, MosaicPattern};
pub use types::{Debayer, RgbImageData};
