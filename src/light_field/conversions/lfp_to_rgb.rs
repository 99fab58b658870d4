use std::path::Path;

use tracing::{info, instrument, warn};

use crate::light_field::{
    common::error::{LightFieldError, Result},
    config::DecodeConfig,
    container::RandomAccess,
    debayer::{CpuDebayer, Debayer, MosaicPattern, RgbImageData},
    file::LightFieldFile,
    metadata::Metadata,
    raw::{assemble_mosaic, normalize, RawImageData},
    reference::FrameReferenceNames,
};

/// Everything decoded from one light field file.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub metadata: Metadata,
    pub pattern: MosaicPattern,
    /// Samples as stored, at the sensor's bit depth
    pub raw: RawImageData,
    /// Samples mapped into 0..=255
    pub normalized: RawImageData,
    /// Present when debayering is enabled
    pub rgb: Option<RgbImageData>,
}

pub struct LightFieldPipeline<D: Debayer = CpuDebayer> {
    debayer: D,
    config: DecodeConfig,
}

impl LightFieldPipeline<CpuDebayer> {
    pub fn new(config: DecodeConfig) -> Self {
        Self {
            debayer: CpuDebayer::new(),
            config,
        }
    }
}

impl<D: Debayer> LightFieldPipeline<D> {
    pub fn with_custom(debayer: D, config: DecodeConfig) -> Self {
        Self { debayer, config }
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(LightFieldError::InvalidDimensions(width, height));
        }

        if let Some(max) = self.config.max_dimension {
            if width > max || height > max {
                warn!("Image dimensions {}x{} exceed maximum {}", width, height, max);
                return Err(LightFieldError::InvalidDimensions(width, height));
            }
        }

        Ok(())
    }

    /// Decodes the image referenced by the first frame of `file`.
    ///
    /// The file stays open; its cached block list and main metadata are
    /// reused by later calls.
    #[instrument(skip(self, file))]
    pub fn decode<S: RandomAccess>(&self, file: &mut LightFieldFile<S>) -> Result<DecodedImage> {
        info!("Starting light field decode");

        {
            let _span = tracing::info_span!("scan_blocks").entered();
            file.read_blocks()?;
        }

        let metadata = {
            let _span = tracing::info_span!("read_metadata").entered();
            file.read_metadata()?
        };
        let image = &metadata.image;

        {
            let _span = tracing::info_span!("validate_dimensions",
                width = image.width,
                height = image.height
            ).entered();
            self.validate_dimensions(image.width, image.height)?;
        }

        let pattern = MosaicPattern::from_metadata(image)?;

        let payload = {
            let _span = tracing::info_span!("read_image_block").entered();
            let block = file.find_data_block(FrameReferenceNames::IMAGE_REF)?;
            file.read_data(&block)?
        };

        let raw = {
            let _span = tracing::info_span!("unpack",
                bits_per_pixel = image.pixel_packing.bits_per_pixel
            ).entered();
            assemble_mosaic(&payload, image.width, image.height, image.pixel_packing)?
        };

        let normalized = {
            let _span = tracing::info_span!("normalize").entered();
            normalize(&raw, &pattern, self.config.normalization)
        };

        let rgb = if self.config.debayer {
            let _span = tracing::info_span!("debayer").entered();
            Some(self.debayer.process(&normalized, &pattern)?)
        } else {
            None
        };

        info!(
            width = raw.width,
            height = raw.height,
            debayered = rgb.is_some(),
            "Decode complete"
        );
        Ok(DecodedImage {
            metadata,
            pattern,
            raw,
            normalized,
            rgb,
        })
    }

    /// Opens `path`, decodes it and closes it again, whether or not the
    /// decode succeeded.
    #[instrument(skip(self, path))]
    pub fn decode_file<P: AsRef<Path>>(&self, path: P) -> Result<DecodedImage> {
        let path = path.as_ref();
        info!(input = %path.display(), "Decoding file");

        let mut file = {
            let _span = tracing::info_span!("open_input_file").entered();
            LightFieldFile::open(path)?
        };

        let result = self.decode(&mut file);
        file.close();
        result
    }

    pub fn config(&self) -> &DecodeConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: DecodeConfig) {
        self.config = config;
    }
}
