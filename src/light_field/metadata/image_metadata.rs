//! Image metadata, resolved through the `metadataRef` role.
//!
//! Only the fields needed to decode the raw image are required. The rest
//! of the schema is either optional here or ignored.

use serde::{Deserialize, Serialize};

use crate::light_field::common::error::{LightFieldError, Result};
use crate::light_field::metadata::cell::{CellMapping, MosaicCell};

/// Byte order used when packing pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endianness {
    Big,
    Little,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(default)]
    pub schema: String,
    #[serde(default)]
    pub generator: String,
    #[serde(default)]
    pub camera: Option<Camera>,
    pub image: Image,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Camera {
    pub make: String,
    pub model: String,
    #[serde(default)]
    pub firmware: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub width: usize,
    pub height: usize,
    /// EXIF-style orientation, 1-8.
    #[serde(default)]
    pub orientation: Option<u8>,
    #[serde(default)]
    pub iso: Option<u32>,
    pub mosaic: Mosaic,
    pub pixel_packing: PixelPacking,
    pub pixel_format: PixelFormat,
    #[serde(default)]
    pub color: Option<Color>,
}

/// How pixel samples are packed into bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PixelPacking {
    pub endianness: Endianness,
    pub bits_per_pixel: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PixelFormat {
    #[serde(default)]
    pub right_shift: u32,
    pub black: CellMapping<u32>,
    pub white: CellMapping<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Color {
    pub white_balance_gain: CellMapping<f64>,
    #[serde(default)]
    pub ccm: Vec<f64>,
}

/// Mosaic descriptor: the tile text plus the cell found at the image's
/// upper-left pixel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mosaic {
    /// Rows separated by `:`, cells within a row by `,`.
    pub tile: String,
    pub upper_left_pixel: MosaicCell,
}

impl Mosaic {
    /// Splits `tile` into rows of cells, top to bottom, left to right, flipped
    /// so that the first cell of the first row is `upper_left_pixel`.
    pub fn as_cells(&self) -> Result<Vec<Vec<MosaicCell>>> {
        let mut cells = self
            .tile
            .split(':')
            .map(|row| row.split(',').map(str::parse).collect::<Result<Vec<MosaicCell>>>())
            .collect::<Result<Vec<_>>>()?;

        let width = cells[0].len();
        if cells.iter().any(|row| row.len() != width) {
            return Err(LightFieldError::InvalidMosaic(format!(
                "tile '{}' has rows of differing length",
                self.tile
            )));
        }

        if !cells[0].contains(&self.upper_left_pixel) {
            cells.reverse();
        }
        if cells[0][0] != self.upper_left_pixel {
            cells.iter_mut().for_each(|row| row.reverse());
        }
        if cells[0][0] != self.upper_left_pixel {
            return Err(LightFieldError::InvalidMosaic(format!(
                "upper-left pixel '{}' cannot be placed at the corner of tile '{}'",
                self.upper_left_pixel, self.tile
            )));
        }

        Ok(cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use MosaicCell::*;

    fn mosaic(tile: &str, upper_left_pixel: MosaicCell) -> Mosaic {
        Mosaic {
            tile: tile.to_string(),
            upper_left_pixel,
        }
    }

    #[test]
    fn test_tile_already_oriented() {
        let cells = mosaic("r,gr:gb,b", R).as_cells().unwrap();
        assert_eq!(cells, vec![vec![R, Gr], vec![Gb, B]]);
    }

    #[test]
    fn test_tile_flipped_top_to_bottom() {
        let cells = mosaic("b,gb:gr,r", Gr).as_cells().unwrap();
        assert_eq!(cells[0][0], Gr);
        assert_eq!(cells, vec![vec![Gr, R], vec![B, Gb]]);
    }

    #[test]
    fn test_tile_flipped_left_to_right() {
        let cells = mosaic("gr,r:b,gb", R).as_cells().unwrap();
        assert_eq!(cells, vec![vec![R, Gr], vec![Gb, B]]);
    }

    #[test]
    fn test_tile_flipped_both_ways() {
        let cells = mosaic("b,gb:gr,r", R).as_cells().unwrap();
        assert_eq!(cells, vec![vec![R, Gr], vec![Gb, B]]);
    }

    #[test]
    fn test_monochrome_tile_is_rejected() {
        let err = mosaic("monochrome", Gr).as_cells().unwrap_err();
        assert!(matches!(err, LightFieldError::InvalidMosaic(_)));
    }

    #[test]
    fn test_missing_upper_left_cell_is_rejected() {
        assert!(mosaic("gr,gb:gb,gr", R).as_cells().is_err());
    }

    #[test]
    fn test_decode_image_metadata() {
        let json = r#"{
            "schema": "http://schema.example/picture.json",
            "generator": "lightning",
            "camera": {"make": "Maker", "model": "F01", "firmware": "1.0"},
            "picture": {"totalFrames": 1},
            "image": {
                "width": 4,
                "height": 2,
                "orientation": 1,
                "iso": 100,
                "originOnSensor": {"x": 0, "y": 0},
                "mosaic": {"tile": "r,gr:gb,b", "upperLeftPixel": "b"},
                "pixelPacking": {"endianness": "little", "bitsPerPixel": 10},
                "pixelFormat": {
                    "rightShift": 0,
                    "black": {"r": 64, "gr": 64, "gb": 65, "b": 64},
                    "white": {"r": 1023, "gr": 1023, "gb": 1000, "b": 1023}
                },
                "color": {
                    "whiteBalanceGain": {"r": 1.5, "gr": 1.0, "gb": 1.0, "b": 1.25},
                    "ccm": [1, 0, 0, 0, 1, 0, 0, 0, 1]
                }
            }
        }"#;
        let metadata: Metadata = serde_json::from_str(json).unwrap();

        assert_eq!(metadata.image.width, 4);
        assert_eq!(metadata.image.pixel_packing.endianness, Endianness::Little);
        assert_eq!(metadata.image.pixel_packing.bits_per_pixel, 10);
        assert_eq!(metadata.image.pixel_format.black[Gb], 65);
        assert_eq!(metadata.image.pixel_format.white[Gb], 1000);
        assert_eq!(metadata.image.mosaic.upper_left_pixel, B);
        assert_eq!(metadata.camera.unwrap().model, "F01");
        assert_eq!(metadata.image.color.unwrap().white_balance_gain[B], 1.25);
    }
}
