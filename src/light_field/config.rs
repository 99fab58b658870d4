//! Decode configuration types

use crate::light_field::raw::SampleNormalization;

/// Configuration for decoding a light field file to RGB
#[derive(Debug, Clone)]
pub struct DecodeConfig {
    /// Whether to validate image dimensions before unpacking
    pub validate_dimensions: bool,
    /// Largest accepted width or height, when validating
    pub max_dimension: Option<usize>,
    /// How raw samples are mapped into 0..=255 before debayering
    pub normalization: SampleNormalization,
    /// Whether to debayer the image to RGB (true) or stop at the normalized mosaic (false)
    pub debayer: bool,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            validate_dimensions: true,
            max_dimension: Some(50000),
            normalization: SampleNormalization::BitShift,
            debayer: true,
        }
    }
}

impl DecodeConfig {
    pub fn builder() -> DecodeConfigBuilder {
        DecodeConfigBuilder::default()
    }
}

/// Builder for DecodeConfig
#[derive(Default)]
pub struct DecodeConfigBuilder {
    validate_dimensions: Option<bool>,
    max_dimension: Option<Option<usize>>,
    normalization: Option<SampleNormalization>,
    debayer: Option<bool>,
}

impl DecodeConfigBuilder {
    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max: Option<usize>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn normalization(mut self, normalization: SampleNormalization) -> Self {
        self.normalization = Some(normalization);
        self
    }

    pub fn debayer(mut self, enable: bool) -> Self {
        self.debayer = Some(enable);
        self
    }

    pub fn build(self) -> DecodeConfig {
        let default = DecodeConfig::default();
        DecodeConfig {
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
            normalization: self.normalization.unwrap_or(default.normalization),
            debayer: self.debayer.unwrap_or(default.debayer),
        }
    }
}
