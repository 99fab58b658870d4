//! Bit unpacking of packed pixel data.
//!
//! Each packing converts a fixed-size group of bytes into a fixed number of
//! samples. Groups are independent of each other.

use crate::light_field::common::error::{LightFieldError, Result};
use crate::light_field::metadata::Endianness;

/// Supported (bits per pixel, endianness) combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelUnpacker {
    Packed8,
    Packed10Little,
    Packed12Big,
    Packed16Big,
    Packed16Little,
}

impl PixelUnpacker {
    /// Selects the unpacker for the given packing, failing for combinations
    /// that have no defined layout.
    pub fn select(bits_per_pixel: u32, endianness: Endianness) -> Result<Self> {
        match (bits_per_pixel, endianness) {
            (8, _) => Ok(Self::Packed8),
            (10, Endianness::Little) => Ok(Self::Packed10Little),
            (12, Endianness::Big) => Ok(Self::Packed12Big),
            (16, Endianness::Big) => Ok(Self::Packed16Big),
            (16, Endianness::Little) => Ok(Self::Packed16Little),
            _ => Err(LightFieldError::UnsupportedPacking {
                bits_per_pixel,
                endianness,
            }),
        }
    }

    pub const fn bits_per_pixel(self) -> u32 {
        match self {
            Self::Packed8 => 8,
            Self::Packed10Little => 10,
            Self::Packed12Big => 12,
            Self::Packed16Big | Self::Packed16Little => 16,
        }
    }

    /// Bytes consumed per group.
    pub const fn packed_group_size(self) -> usize {
        match self {
            Self::Packed8 => 1,
            Self::Packed10Little => 5,
            Self::Packed12Big => 3,
            Self::Packed16Big | Self::Packed16Little => 2,
        }
    }

    /// Samples produced per group.
    pub const fn unpacked_group_size(self) -> usize {
        match self {
            Self::Packed8 => 1,
            Self::Packed10Little => 4,
            Self::Packed12Big => 2,
            Self::Packed16Big | Self::Packed16Little => 1,
        }
    }

    /// Unpacks one group.
    ///
    /// `packed` must be exactly [`packed_group_size`](Self::packed_group_size)
    /// bytes and `unpacked` exactly [`unpacked_group_size`](Self::unpacked_group_size)
    /// samples long.
    #[inline]
    pub fn unpack(self, packed: &[u8], unpacked: &mut [u16]) {
        debug_assert_eq!(packed.len(), self.packed_group_size());
        debug_assert_eq!(unpacked.len(), self.unpacked_group_size());

        match self {
            Self::Packed8 => {
                unpacked[0] = u16::from(packed[0]);
            }
            Self::Packed10Little => {
                //   +----------+----------+----------+----------+----------+
                //   | 00000000 | 11111111 | 22222222 | 33333333 | 33221100 |
                //   +----------+----------+----------+----------+----------+
                let low = u16::from(packed[4]);
                for (i, sample) in unpacked.iter_mut().enumerate() {
                    *sample = (u16::from(packed[i]) << 2) | ((low >> (2 * i)) & 0b11);
                }
            }
            Self::Packed12Big => {
                let (p0, p1, p2) = (u16::from(packed[0]), u16::from(packed[1]), u16::from(packed[2]));
                unpacked[0] = (p0 << 4) | ((p1 >> 4) & 0xF);
                unpacked[1] = ((p1 & 0xF) << 8) | p2;
            }
            Self::Packed16Big => {
                unpacked[0] = u16::from_be_bytes([packed[0], packed[1]]);
            }
            Self::Packed16Little => {
                unpacked[0] = u16::from_le_bytes([packed[0], packed[1]]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Inverse of `unpack`, for checking the layouts.
    fn pack(unpacker: PixelUnpacker, samples: &[u16], packed: &mut [u8]) {
        match unpacker {
            PixelUnpacker::Packed8 => packed[0] = samples[0] as u8,
            PixelUnpacker::Packed10Little => {
                packed[4] = 0;
                for (i, &s) in samples.iter().enumerate() {
                    packed[i] = (s >> 2) as u8;
                    packed[4] |= ((s & 0b11) as u8) << (2 * i);
                }
            }
            PixelUnpacker::Packed12Big => {
                packed[0] = (samples[0] >> 4) as u8;
                packed[1] = ((samples[0] & 0xF) << 4 | samples[1] >> 8) as u8;
                packed[2] = samples[1] as u8;
            }
            PixelUnpacker::Packed16Big => packed.copy_from_slice(&samples[0].to_be_bytes()),
            PixelUnpacker::Packed16Little => packed.copy_from_slice(&samples[0].to_le_bytes()),
        }
    }

    #[test]
    fn test_select_supported() {
        assert_eq!(PixelUnpacker::select(8, Endianness::Big).unwrap(), PixelUnpacker::Packed8);
        assert_eq!(PixelUnpacker::select(8, Endianness::Little).unwrap(), PixelUnpacker::Packed8);
        assert_eq!(
            PixelUnpacker::select(10, Endianness::Little).unwrap(),
            PixelUnpacker::Packed10Little
        );
        assert_eq!(PixelUnpacker::select(12, Endianness::Big).unwrap(), PixelUnpacker::Packed12Big);
        assert_eq!(PixelUnpacker::select(16, Endianness::Big).unwrap(), PixelUnpacker::Packed16Big);
        assert_eq!(
            PixelUnpacker::select(16, Endianness::Little).unwrap(),
            PixelUnpacker::Packed16Little
        );
    }

    #[test]
    fn test_select_unsupported() {
        for (bits, endianness) in [
            (10, Endianness::Big),
            (12, Endianness::Little),
            (14, Endianness::Little),
            (0, Endianness::Big),
            (32, Endianness::Big),
        ] {
            let err = PixelUnpacker::select(bits, endianness).unwrap_err();
            assert!(matches!(
                err,
                LightFieldError::UnsupportedPacking { bits_per_pixel, endianness: e }
                    if bits_per_pixel == bits && e == endianness
            ));
        }
    }

    #[test]
    fn test_unpack_10_little() {
        let packed = [0b0000_0001, 0b0000_0010, 0b0000_0011, 0b0000_0100, 0b1110_0100];
        let mut unpacked = [0u16; 4];
        PixelUnpacker::Packed10Little.unpack(&packed, &mut unpacked);
        assert_eq!(unpacked, [4, 9, 14, 19]);
    }

    #[test]
    fn test_unpack_12_big() {
        let mut unpacked = [0u16; 2];
        PixelUnpacker::Packed12Big.unpack(&[0x12, 0x34, 0x56], &mut unpacked);
        assert_eq!(unpacked, [0x123, 0x456]);
    }

    #[test]
    fn test_unpack_16_byte_orders() {
        let mut unpacked = [0u16; 1];
        PixelUnpacker::Packed16Big.unpack(&[0xAB, 0xCD], &mut unpacked);
        assert_eq!(unpacked[0], 0xABCD);
        PixelUnpacker::Packed16Little.unpack(&[0xAB, 0xCD], &mut unpacked);
        assert_eq!(unpacked[0], 0xCDAB);
    }

    #[test]
    fn test_full_range_survives_packing() {
        for unpacker in [
            PixelUnpacker::Packed8,
            PixelUnpacker::Packed10Little,
            PixelUnpacker::Packed12Big,
            PixelUnpacker::Packed16Big,
            PixelUnpacker::Packed16Little,
        ] {
            let max = (1u32 << unpacker.bits_per_pixel()) - 1;
            let group = unpacker.unpacked_group_size();
            let mut packed = vec![0u8; unpacker.packed_group_size()];
            let mut unpacked = vec![0u16; group];
            let mut samples = vec![0u16; group];

            for start in (0..=max).step_by(group) {
                for (i, sample) in samples.iter_mut().enumerate() {
                    // The last group may run past the maximum; fold it back into range.
                    let value = start + i as u32;
                    *sample = if value > max { max - i as u32 } else { value } as u16;
                }
                pack(unpacker, &samples, &mut packed);
                unpacker.unpack(&packed, &mut unpacked);
                assert_eq!(unpacked, samples, "{unpacker:?} at {start}");
            }
        }
    }
}
