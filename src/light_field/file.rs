//! A single light field file.
//!
//! The block list and the main metadata are each computed by an explicit
//! call and cached in the file afterwards. Once [`LightFieldFile::close`]
//! has been called every read fails with [`LightFieldError::FileClosed`],
//! cached or not.

use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::light_field::common::error::{LightFieldError, Result};
use crate::light_field::container::{read_blocks, Block, DataBlock, RandomAccess};
use crate::light_field::metadata::{MainMetadata, Metadata, PrivateMetadata, ReconstructionFilterMetadata};
use crate::light_field::reference::{resolve, FrameReferenceNames};

pub struct LightFieldFile<S: RandomAccess = File> {
    source: Option<S>,
    blocks: Option<Vec<Block>>,
    main_metadata: Option<MainMetadata>,
}

impl LightFieldFile<File> {
    /// Opens the file at `path` read-only.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| LightFieldError::InputReadError(format!("{}: {}", path.display(), e)))?;
        info!(path = %path.display(), "Opened light field file");
        Ok(Self::from_source(file))
    }
}

impl<S: RandomAccess> LightFieldFile<S> {
    pub fn from_source(source: S) -> Self {
        Self {
            source: Some(source),
            blocks: None,
            main_metadata: None,
        }
    }

    fn source(&self) -> Result<&S> {
        self.source.as_ref().ok_or(LightFieldError::FileClosed)
    }

    /// Scans the file into its block list on first call.
    pub fn read_blocks(&mut self) -> Result<&[Block]> {
        let source = self.source()?;
        if self.blocks.is_none() {
            let blocks = read_blocks(source)?;
            self.blocks = Some(blocks);
        }
        Ok(self.blocks.as_deref().unwrap_or_default())
    }

    /// Decodes the main metadata block on first call.
    pub fn read_main_metadata(&mut self) -> Result<&MainMetadata> {
        if self.main_metadata.is_none() {
            self.read_blocks()?;
            let blocks = self.blocks.as_deref().unwrap_or_default();
            let block = MainMetadata::find_block(blocks)?;
            let json = read_block_data(self.source()?, block)?;
            let main_metadata = MainMetadata::from_json(&json)?;
            debug!(
                frames = main_metadata.frames.len(),
                schema = %main_metadata.schema,
                "Decoded main metadata"
            );
            self.main_metadata = Some(main_metadata);
        }
        self.source()?;
        self.main_metadata.as_ref().ok_or(LightFieldError::MissingMainMetadata)
    }

    /// Finds the data block the first frame's references give for `role`.
    /// See [`FrameReferenceNames`] for known roles.
    pub fn find_data_block(&mut self, role: &str) -> Result<DataBlock> {
        self.read_main_metadata()?;
        let empty = HashMap::new();
        let references = self
            .main_metadata
            .as_ref()
            .and_then(MainMetadata::references)
            .unwrap_or(&empty);
        let blocks = self.blocks.as_deref().unwrap_or_default();
        resolve(references, blocks, role).cloned()
    }

    /// Reads the payload of `block`.
    pub fn read_data(&self, block: &DataBlock) -> Result<Vec<u8>> {
        read_block_data(self.source()?, block)
    }

    /// Decodes the block referenced by `role` as JSON.
    pub fn read_json<T: DeserializeOwned>(&mut self, role: &str) -> Result<T> {
        let block = self.find_data_block(role)?;
        let json = self.read_data(&block)?;
        Ok(serde_json::from_slice(&json)?)
    }

    pub fn read_metadata(&mut self) -> Result<Metadata> {
        self.read_json(FrameReferenceNames::METADATA_REF)
    }

    pub fn read_private_metadata(&mut self) -> Result<PrivateMetadata> {
        self.read_json(FrameReferenceNames::PRIVATE_METADATA_REF)
    }

    pub fn read_reconstruction_filter_metadata(&mut self) -> Result<ReconstructionFilterMetadata> {
        self.read_json(FrameReferenceNames::RECONSTRUCTION_FILTER_METADATA_REF)
    }

    pub fn is_closed(&self) -> bool {
        self.source.is_none()
    }

    /// Releases the source. Closing twice is a no-op.
    pub fn close(&mut self) {
        if self.source.take().is_some() {
            debug!("Closed light field file");
        }
    }
}

fn read_block_data<S: RandomAccess + ?Sized>(source: &S, block: &DataBlock) -> Result<Vec<u8>> {
    let mut data = vec![0u8; block.header.data_length as usize];
    source.read_exact_at(&mut data, block.data_offset)?;
    Ok(data)
}
