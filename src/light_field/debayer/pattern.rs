//! Mosaic pattern lookup
//!
//! The oriented tile is flattened once; per-pixel lookups are a modulo and
//! an index.

use crate::light_field::common::error::{LightFieldError, Result};
use crate::light_field::metadata::{Image, MosaicCell};

/// One cell of the mosaic tile with its calibration levels.
///
/// The levels are carried for callers normalizing raw samples; the
/// demosaic itself only uses `cell`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MosaicInfo {
    pub cell: MosaicCell,
    pub x_offset: usize,
    pub y_offset: usize,
    pub black: u32,
    pub white: u32,
}

/// The repeating colour filter tile, oriented so that (0, 0) is the image's
/// upper-left pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MosaicPattern {
    infos: Vec<MosaicInfo>,
    width: usize,
    height: usize,
}

impl MosaicPattern {
    /// Builds the pattern from image metadata: the mosaic tile plus the
    /// per-cell black and white levels of the pixel format.
    pub fn from_metadata(image: &Image) -> Result<Self> {
        let cells = image.mosaic.as_cells()?;
        let black = &image.pixel_format.black;
        let white = &image.pixel_format.white;

        let infos = cells
            .iter()
            .enumerate()
            .flat_map(|(y_offset, row)| {
                row.iter().enumerate().map(move |(x_offset, &cell)| MosaicInfo {
                    cell,
                    x_offset,
                    y_offset,
                    black: black[cell],
                    white: white[cell],
                })
            })
            .collect();

        Self::from_infos(infos)
    }

    /// Builds the pattern from explicit cells, in any order. The offsets
    /// must cover a full rectangle exactly once.
    pub fn from_infos(mut infos: Vec<MosaicInfo>) -> Result<Self> {
        let width = infos.iter().map(|info| info.x_offset + 1).max().unwrap_or(0);
        let height = infos.iter().map(|info| info.y_offset + 1).max().unwrap_or(0);
        if width == 0 || infos.len() != width * height {
            return Err(LightFieldError::InvalidMosaic(format!(
                "{} cells do not fill a {}x{} tile",
                infos.len(),
                width,
                height
            )));
        }

        infos.sort_by_key(|info| (info.y_offset, info.x_offset));
        let complete = infos
            .iter()
            .enumerate()
            .all(|(i, info)| info.x_offset == i % width && info.y_offset == i / width);
        if !complete {
            return Err(LightFieldError::InvalidMosaic("duplicate tile offsets".to_string()));
        }

        Ok(Self { infos, width, height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn info_at(&self, x: usize, y: usize) -> &MosaicInfo {
        &self.infos[(y % self.height) * self.width + x % self.width]
    }

    #[inline]
    pub fn cell_at(&self, x: usize, y: usize) -> MosaicCell {
        self.info_at(x, y).cell
    }

    pub fn infos(&self) -> &[MosaicInfo] {
        &self.infos
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::light_field::metadata::{CellMapping, Endianness, Mosaic, PixelFormat, PixelPacking};
    use MosaicCell::*;

    fn info(cell: MosaicCell, x_offset: usize, y_offset: usize) -> MosaicInfo {
        MosaicInfo {
            cell,
            x_offset,
            y_offset,
            black: 64,
            white: 4096,
        }
    }

    #[test]
    fn test_cells_repeat_over_image() {
        let pattern = MosaicPattern::from_infos(vec![
            info(B, 0, 0),
            info(Gb, 1, 0),
            info(Gr, 0, 1),
            info(R, 1, 1),
        ])
        .unwrap();

        assert_eq!(pattern.cell_at(0, 0), B);
        assert_eq!(pattern.cell_at(3, 0), Gb);
        assert_eq!(pattern.cell_at(4, 5), Gr);
        assert_eq!(pattern.cell_at(7, 7), R);
    }

    #[test]
    fn test_infos_in_any_order() {
        let pattern = MosaicPattern::from_infos(vec![
            info(R, 1, 1),
            info(Gr, 0, 1),
            info(B, 0, 0),
            info(Gb, 1, 0),
        ])
        .unwrap();
        assert_eq!(pattern.cell_at(0, 0), B);
        assert_eq!(pattern.cell_at(1, 1), R);
    }

    #[test]
    fn test_incomplete_tile_rejected() {
        assert!(MosaicPattern::from_infos(vec![]).is_err());
        assert!(MosaicPattern::from_infos(vec![info(R, 0, 0), info(B, 1, 1)]).is_err());
        assert!(
            MosaicPattern::from_infos(vec![info(R, 0, 0), info(B, 0, 0), info(Gr, 1, 0)]).is_err()
        );
    }

    #[test]
    fn test_from_metadata_carries_levels() {
        let image = Image {
            width: 4,
            height: 4,
            orientation: None,
            iso: None,
            mosaic: Mosaic {
                tile: "b,gb:gr,r".to_string(),
                upper_left_pixel: Gr,
            },
            pixel_packing: PixelPacking {
                endianness: Endianness::Little,
                bits_per_pixel: 10,
            },
            pixel_format: PixelFormat {
                right_shift: 0,
                black: CellMapping::new(60, 61, 62, 63),
                white: CellMapping::new(1020, 1021, 1022, 1023),
            },
            color: None,
        };
        let pattern = MosaicPattern::from_metadata(&image).unwrap();

        assert_eq!(pattern.cell_at(0, 0), Gr);
        assert_eq!(pattern.cell_at(1, 0), R);
        assert_eq!(pattern.cell_at(0, 1), B);
        assert_eq!(pattern.cell_at(1, 1), Gb);
        assert_eq!(pattern.info_at(1, 1).black, 62);
        assert_eq!(pattern.info_at(1, 1).white, 1022);
        assert_eq!(pattern.info_at(2, 0).black, 61);
    }
}
