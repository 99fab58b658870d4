//! Mapping of raw samples into the 8-bit range expected by the demosaic.

use rayon::prelude::*;

use crate::light_field::debayer::MosaicPattern;
use crate::light_field::raw::types::RawImageData;

const OUTPUT_MAX: u64 = 255;

/// How raw samples are brought into 0..=255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SampleNormalization {
    /// Keep the top 8 bits of each sample.
    #[default]
    BitShift,
    /// Map each sample linearly from its cell's black level to its cell's
    /// white level, clamping outside that range.
    Levels,
}

/// Returns an 8-bit copy of `raw`.
pub fn normalize(raw: &RawImageData, pattern: &MosaicPattern, mode: SampleNormalization) -> RawImageData {
    let mut data = vec![0u16; raw.data.len()];

    if raw.width > 0 {
        data.par_chunks_mut(raw.width)
            .zip(raw.data.par_chunks(raw.width))
            .enumerate()
            .for_each(|(y, (out, row))| {
                for (x, (out, &sample)) in out.iter_mut().zip(row).enumerate() {
                    *out = match mode {
                        SampleNormalization::BitShift => shift_to_8_bits(sample, raw.bits_per_sample),
                        SampleNormalization::Levels => {
                            let info = pattern.info_at(x, y);
                            scale_between_levels(sample, info.black, info.white)
                        }
                    };
                }
            });
    }

    RawImageData {
        width: raw.width,
        height: raw.height,
        data,
        bits_per_sample: 8,
    }
}

fn shift_to_8_bits(sample: u16, bits_per_sample: u32) -> u16 {
    if bits_per_sample > 8 {
        sample >> (bits_per_sample - 8)
    } else {
        sample << (8 - bits_per_sample)
    }
}

/// Rounds half up.
fn scale_between_levels(sample: u16, black: u32, white: u32) -> u16 {
    let range = u64::from(white.saturating_sub(black).max(1));
    let above_black = u64::from(u32::from(sample).saturating_sub(black));
    let scaled = (above_black * OUTPUT_MAX * 2 + range) / (range * 2);
    scaled.min(OUTPUT_MAX) as u16
}
