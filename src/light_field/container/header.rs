//! Block header types

use std::io::Read;

use byteorder::{BigEndian, ReadBytesExt};

/// Size in bytes of the fixed header found on every block.
pub const HEADER_SIZE: u64 = 16;

/// Known magic numbers seen on blocks.
pub struct Magic;

impl Magic {
    /// 0x89 'LFP' 0xD 0xA 0x1A 0xA. Occurs once, at the start of the file.
    pub const PACKAGE: u64 = 0x894C_4650_0D0A_1A0A;
    /// 0x89 'LFM' 0xD 0xA 0x1A 0xA. The top-level metadata block.
    pub const METADATA: u64 = 0x894C_464D_0D0A_1A0A;
    /// 0x89 'LFC' 0xD 0xA 0x1A 0xA. Generic component block.
    pub const COMPONENT: u64 = 0x894C_4643_0D0A_1A0A;
}

/// Classification of a block by its magic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Package,
    Metadata,
    /// Anything else, including the observed component magic.
    Component,
}

/// The header found on all blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockHeader {
    pub magic: u64,
    pub version: u32,
    /// Length of the block payload, excluding alignment padding.
    pub data_length: u32,
}

impl BlockHeader {
    /// Reads a big-endian header from exactly [`HEADER_SIZE`] bytes.
    pub fn read<R: Read>(mut reader: R) -> std::io::Result<Self> {
        Ok(Self {
            magic: reader.read_u64::<BigEndian>()?,
            version: reader.read_u32::<BigEndian>()?,
            data_length: reader.read_u32::<BigEndian>()?,
        })
    }

    pub fn kind(&self) -> BlockKind {
        match self.magic {
            Magic::PACKAGE => BlockKind::Package,
            Magic::METADATA => BlockKind::Metadata,
            _ => BlockKind::Component,
        }
    }
}
