use rayon::prelude::*;
use tracing::info;

use crate::light_field::common::error::{LightFieldError, Result};
use crate::light_field::debayer::pattern::MosaicPattern;
use crate::light_field::debayer::types::{Debayer, RgbImageData};
use crate::light_field::metadata::MosaicCell;
use crate::light_field::raw::RawImageData;

const HORIZONTAL: &[(isize, isize)] = &[(-1, 0), (1, 0)];
const VERTICAL: &[(isize, isize)] = &[(0, -1), (0, 1)];
const ORTHOGONAL: &[(isize, isize)] = &[(-1, 0), (1, 0), (0, -1), (0, 1)];
const DIAGONAL: &[(isize, isize)] = &[(-1, -1), (1, -1), (-1, 1), (1, 1)];

/// Bilinear demosaic by neighbour averaging.
///
/// Each pixel keeps its own sample for its filter colour and takes the other
/// two from the mean of the neighbours that carry them:
///
/// | cell | R          | G          | B          |
/// |------|------------|------------|------------|
/// | R    | own        | orthogonal | diagonal   |
/// | GR   | horizontal | own        | vertical   |
/// | GB   | vertical   | own        | horizontal |
/// | B    | diagonal   | orthogonal | own        |
///
/// Neighbours outside the image are skipped, so edges average fewer samples.
/// Means are rounded half up.
pub struct CpuDebayer;

impl CpuDebayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CpuDebayer {
    fn default() -> Self {
        Self::new()
    }
}

struct Neighbourhood<'a> {
    mosaic: &'a RawImageData,
    x: usize,
    y: usize,
}

impl Neighbourhood<'_> {
    fn own(&self) -> u32 {
        u32::from(self.mosaic.sample(self.x, self.y))
    }

    fn average(&self, offsets: &[(isize, isize)]) -> Result<u32> {
        let (sum, count) = offsets
            .iter()
            .filter_map(|&(dx, dy)| {
                let nx = self.x.checked_add_signed(dx).filter(|&nx| nx < self.mosaic.width)?;
                let ny = self.y.checked_add_signed(dy).filter(|&ny| ny < self.mosaic.height)?;
                Some(u32::from(self.mosaic.sample(nx, ny)))
            })
            .fold((0u32, 0u32), |(sum, count), v| (sum + v, count + 1));

        if count == 0 {
            return Err(LightFieldError::NoNeighbours { x: self.x, y: self.y });
        }
        Ok((sum * 2 + count) / (count * 2))
    }
}

fn clamp_to_u8(value: u32) -> u8 {
    value.min(u32::from(u8::MAX)) as u8
}

impl Debayer for CpuDebayer {
    fn process(&self, mosaic: &RawImageData, pattern: &MosaicPattern) -> Result<RgbImageData> {
        let width = mosaic.width;
        let height = mosaic.height;
        let invalid = || LightFieldError::InvalidDimensions(width, height);
        if width < 2 || height < 2 {
            return Err(invalid());
        }
        let pixel_count = width.checked_mul(height).ok_or_else(invalid)?;
        if mosaic.data.len() != pixel_count {
            return Err(invalid());
        }
        let row_len = width.checked_mul(3).ok_or_else(invalid)?;
        let data_len = pixel_count.checked_mul(3).ok_or_else(invalid)?;
        info!("Starting CPU debayering for image {}x{}", width, height);

        let mut data = vec![0u8; data_len];
        data.par_chunks_mut(row_len)
            .enumerate()
            .try_for_each(|(y, row)| -> Result<()> {
                for (x, pixel) in row.chunks_exact_mut(3).enumerate() {
                    let n = Neighbourhood { mosaic, x, y };
                    let (r, g, b) = match pattern.cell_at(x, y) {
                        MosaicCell::R => (n.own(), n.average(ORTHOGONAL)?, n.average(DIAGONAL)?),
                        MosaicCell::Gr => (n.average(HORIZONTAL)?, n.own(), n.average(VERTICAL)?),
                        MosaicCell::Gb => (n.average(VERTICAL)?, n.own(), n.average(HORIZONTAL)?),
                        MosaicCell::B => (n.average(DIAGONAL)?, n.average(ORTHOGONAL)?, n.own()),
                    };
                    pixel.copy_from_slice(&[clamp_to_u8(r), clamp_to_u8(g), clamp_to_u8(b)]);
                }
                Ok(())
            })?;

        Ok(RgbImageData { width, height, data })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::light_field::debayer::pattern::MosaicInfo;
    use MosaicCell::*;

    fn pattern(cells: [[MosaicCell; 2]; 2]) -> MosaicPattern {
        let infos = (0..2)
            .flat_map(|y| (0..2).map(move |x| (x, y)))
            .map(|(x, y)| MosaicInfo {
                cell: cells[y][x],
                x_offset: x,
                y_offset: y,
                black: 0,
                white: 255,
            })
            .collect();
        MosaicPattern::from_infos(infos).unwrap()
    }

    fn mosaic(width: usize, height: usize, data: Vec<u16>) -> RawImageData {
        RawImageData {
            width,
            height,
            data,
            bits_per_sample: 8,
        }
    }

    #[test]
    fn test_two_by_two_corners() {
        let rggb = pattern([[R, Gr], [Gb, B]]);
        let image = mosaic(2, 2, vec![10, 20, 30, 40]);
        let rgb = CpuDebayer.process(&image, &rggb).unwrap();

        assert_eq!(rgb.pixel(0, 0), [10, 25, 40]);
        // GR: R from left, B from below.
        assert_eq!(rgb.pixel(1, 0), [10, 20, 40]);
        // GB: R from above, B from right.
        assert_eq!(rgb.pixel(0, 1), [10, 30, 40]);
        assert_eq!(rgb.pixel(1, 1), [10, 25, 40]);
    }

    #[test]
    fn test_interior_pixel_uses_all_neighbours() {
        let rggb = pattern([[R, Gr], [Gb, B]]);
        #[rustfmt::skip]
        let image = mosaic(3, 3, vec![
            1, 2, 3,
            4, 5, 6,
            7, 8, 10,
        ]);
        let rgb = CpuDebayer.process(&image, &rggb).unwrap();

        // (1, 1) is B: diagonals 1, 3, 7, 10 -> 5.25; orthogonals 2, 4, 6, 8 -> 5.
        assert_eq!(rgb.pixel(1, 1), [5, 5, 5]);
        // (2, 2) is R: orthogonals 6, 8 -> 7; diagonal 5.
        assert_eq!(rgb.pixel(2, 2), [10, 7, 5]);
    }

    #[test]
    fn test_mean_rounds_half_up() {
        let rggb = pattern([[R, Gr], [Gb, B]]);
        let image = mosaic(2, 2, vec![0, 1, 2, 0]);
        let rgb = CpuDebayer.process(&image, &rggb).unwrap();
        // G at (0, 0) is mean(1, 2) = 1.5.
        assert_eq!(rgb.pixel(0, 0)[1], 2);
    }

    #[test]
    fn test_uniform_channels_are_preserved() {
        let bggr = pattern([[B, Gb], [Gr, R]]);
        let (w, h) = (6, 4);
        let data = (0..h)
            .flat_map(|y| (0..w).map(move |x| (x, y)))
            .map(|(x, y)| match bggr.cell_at(x, y) {
                R => 200,
                Gr | Gb => 100,
                B => 50,
            })
            .collect();
        let rgb = CpuDebayer.process(&mosaic(w, h, data), &bggr).unwrap();

        for y in 0..h {
            for x in 0..w {
                assert_eq!(rgb.pixel(x, y), [200, 100, 50], "at ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_out_of_range_values_clamp() {
        let rggb = pattern([[R, Gr], [Gb, B]]);
        let rgb = CpuDebayer.process(&mosaic(2, 2, vec![300, 255, 255, 1000]), &rggb).unwrap();
        assert_eq!(rgb.pixel(0, 0), [255, 255, 255]);
    }

    #[test]
    fn test_single_row_is_rejected() {
        let rggb = pattern([[R, Gr], [Gb, B]]);
        let err = CpuDebayer.process(&mosaic(4, 1, vec![0; 4]), &rggb).unwrap_err();
        assert!(matches!(err, LightFieldError::InvalidDimensions(4, 1)));
    }

    #[test]
    fn test_overflowing_dimensions_are_rejected() {
        let rggb = pattern([[R, Gr], [Gb, B]]);
        let image = RawImageData {
            width: usize::MAX / 2,
            height: 4,
            data: vec![0; 4],
            bits_per_sample: 8,
        };
        let err = CpuDebayer.process(&image, &rggb).unwrap_err();
        assert!(matches!(err, LightFieldError::InvalidDimensions(_, 4)));
    }

    #[test]
    fn test_lone_pixel_has_no_neighbours() {
        let image = mosaic(1, 1, vec![7]);
        let n = Neighbourhood { mosaic: &image, x: 0, y: 0 };
        assert_eq!(n.own(), 7);
        assert!(matches!(
            n.average(DIAGONAL),
            Err(LightFieldError::NoNeighbours { x: 0, y: 0 })
        ));
    }
}
