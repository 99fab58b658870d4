//! Decoded JSON metadata
//!
//! Only the subset of the metadata schema needed to locate and decode the
//! raw image is modelled.

mod cell;
mod image_metadata;
mod main_metadata;
mod private_metadata;
mod reconstruction_filter_metadata;

pub use cell::{CellMapping, MosaicCell};
pub use image_metadata::{Camera, Color, Endianness, Image, Metadata, Mosaic, PixelFormat, PixelPacking};
pub use main_metadata::{Frame, MainMetadata, Thumbnail};
pub use private_metadata::{PrivateCamera, PrivateDevices, PrivateMetadata, PrivateSensor};
pub use reconstruction_filter_metadata::ReconstructionFilterMetadata;
