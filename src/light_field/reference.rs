//! Reference resolution
//!
//! Metadata names the blocks it depends on indirectly: a role such as
//! `imageRef` maps to a block name, which in turn names a data block.
//!
//! Aberration correction metadata has no fixed schema; read it with
//! `LightFieldFile::read_json` into `serde_json::Value`.

use std::collections::HashMap;

use tracing::debug;

use crate::light_field::common::error::{LightFieldError, Result};
use crate::light_field::container::{Block, DataBlock};

/// Known role names found in a frame's references.
pub struct FrameReferenceNames;

impl FrameReferenceNames {
    pub const IMAGE_REF: &'static str = "imageRef";
    pub const METADATA_REF: &'static str = "metadataRef";
    pub const PRIVATE_METADATA_REF: &'static str = "privateMetadataRef";
    pub const ABERRATION_CORRECTION_REF: &'static str = "aberrationCorrectionRef";
    pub const ABERRATION_CORRECTION_METADATA_REF: &'static str = "aberrationCorrectionMetadataRef";
    pub const HOT_PIXEL_REF: &'static str = "hotPixelRef";
    pub const EXPOSURE_HISTOGRAM_REF: &'static str = "exposureHistogramRef";
    pub const GEOMETRY_CORRECTION_REF: &'static str = "geometryCorrectionRef";
    pub const RECONSTRUCTION_FILTER_REF: &'static str = "reconstructionFilterRef";
    pub const RECONSTRUCTION_FILTER_METADATA_REF: &'static str = "reconstructionFilterMetadataRef";
}

/// Resolves `role` to the first data block whose name matches the block
/// name `references` gives for it.
pub fn resolve<'a>(
    references: &HashMap<String, String>,
    blocks: &'a [Block],
    role: &str,
) -> Result<&'a DataBlock> {
    let name = references
        .get(role)
        .ok_or_else(|| LightFieldError::MissingReference { role: role.to_string() })?;

    let block = blocks
        .iter()
        .filter_map(Block::as_data)
        .find(|block| block.name == *name)
        .ok_or_else(|| LightFieldError::MissingBlock {
            role: role.to_string(),
            name: name.clone(),
        })?;

    debug!(role, name = %name, offset = block.data_offset, "Resolved reference");
    Ok(block)
}
