//! Top-level metadata, stored in the block whose magic is [`Magic::METADATA`].
//!
//! [`Magic::METADATA`]: crate::light_field::container::Magic::METADATA

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::light_field::common::error::{LightFieldError, Result};
use crate::light_field::container::{Block, BlockKind, DataBlock};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MainMetadata {
    #[serde(default)]
    pub derivations: Vec<String>,
    #[serde(default)]
    pub views: Vec<String>,
    #[serde(default)]
    pub schema: String,
    #[serde(default)]
    pub annotations: Vec<String>,
    #[serde(default)]
    pub thumbnails: Vec<Thumbnail>,
    #[serde(default)]
    pub frames: Vec<Frame>,
    #[serde(default)]
    pub generators: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thumbnail {
    pub width: u32,
    pub height: u32,
    pub image_ref: String,
    #[serde(default)]
    pub color_space: String,
    #[serde(default)]
    pub representation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    #[serde(default)]
    pub assigned_properties: HashMap<String, String>,
    #[serde(default)]
    pub accelerations: Vec<String>,
    /// Role name to block name.
    #[serde(default)]
    pub frame: HashMap<String, String>,
}

impl MainMetadata {
    /// The first data block carrying the metadata magic.
    pub fn find_block(blocks: &[Block]) -> Result<&DataBlock> {
        blocks
            .iter()
            .filter_map(Block::as_data)
            .find(|block| block.header.kind() == BlockKind::Metadata)
            .ok_or(LightFieldError::MissingMainMetadata)
    }

    pub fn from_json(json: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(json)?)
    }

    /// Role to block name references of the first frame, if there is one.
    pub fn references(&self) -> Option<&HashMap<String, String>> {
        self.frames.first().map(|frame| &frame.frame)
    }
}
