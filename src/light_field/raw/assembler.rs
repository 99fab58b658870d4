//! Assembly of the mosaic image from a packed payload.

use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::light_field::common::error::{LightFieldError, Result};
use crate::light_field::metadata::PixelPacking;
use crate::light_field::raw::types::RawImageData;
use crate::light_field::raw::unpack::PixelUnpacker;

/// Unpacks `payload` into a `width` x `height` row-major grid of samples.
///
/// The payload must be exactly `width * height * bits_per_pixel / 8` bytes
/// and must split into whole packed groups that produce exactly
/// `width * height` samples. Samples are returned unscaled.
#[instrument(skip(payload), fields(payload_len = payload.len()))]
pub fn assemble_mosaic(
    payload: &[u8],
    width: usize,
    height: usize,
    packing: PixelPacking,
) -> Result<RawImageData> {
    let unpacker = PixelUnpacker::select(packing.bits_per_pixel, packing.endianness)?;

    let sample_count = width
        .checked_mul(height)
        .ok_or(LightFieldError::InvalidDimensions(width, height))?;
    let expected_bytes = (sample_count as u64)
        .checked_mul(u64::from(packing.bits_per_pixel))
        .ok_or(LightFieldError::InvalidDimensions(width, height))?
        / 8;
    if payload.len() as u64 != expected_bytes {
        return Err(LightFieldError::SizeMismatch {
            expected: expected_bytes,
            actual: payload.len() as u64,
        });
    }

    let packed_size = unpacker.packed_group_size();
    let unpacked_size = unpacker.unpacked_group_size();
    let produced = payload.len() / packed_size * unpacked_size;
    if payload.len() % packed_size != 0 || produced != sample_count {
        return Err(LightFieldError::SampleCountMismatch {
            expected: sample_count,
            actual: produced,
        });
    }

    debug!(?unpacker, sample_count, "Unpacking mosaic");

    let mut data = vec![0u16; sample_count];
    data.par_chunks_exact_mut(unpacked_size)
        .zip(payload.par_chunks_exact(packed_size))
        .for_each(|(unpacked, packed)| unpacker.unpack(packed, unpacked));

    Ok(RawImageData {
        width,
        height,
        data,
        bits_per_sample: packing.bits_per_pixel,
    })
}
