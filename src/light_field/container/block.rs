use crate::light_field::container::header::{BlockHeader, BlockKind, HEADER_SIZE};
use crate::light_field::container::reader::{round_up_to_multiple_of, BLOCK_ALIGNMENT, NAME_SIZE};

/// A block which carries a name and a payload.
///
/// The payload itself is not held in memory; `data_offset` is the absolute
/// position of its first byte in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataBlock {
    pub header: BlockHeader,
    pub name: String,
    pub data_offset: u64,
}

impl DataBlock {
    pub fn data_len(&self) -> u64 {
        u64::from(self.header.data_length)
    }

    /// Offset at which the next block's header is expected.
    pub fn next_offset(&self) -> u64 {
        self.data_offset + round_up_to_multiple_of(self.data_len(), BLOCK_ALIGNMENT)
    }

    /// Offset of this block's header.
    pub fn header_offset(&self) -> u64 {
        self.data_offset - NAME_SIZE - HEADER_SIZE
    }
}

/// Blocks inside a light field file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    WithData(DataBlock),
    /// Package block: no name, no payload.
    HeaderOnly(BlockHeader),
}

impl Block {
    pub fn header(&self) -> &BlockHeader {
        match self {
            Block::WithData(block) => &block.header,
            Block::HeaderOnly(header) => header,
        }
    }

    pub fn kind(&self) -> BlockKind {
        self.header().kind()
    }

    pub fn as_data(&self) -> Option<&DataBlock> {
        match self {
            Block::WithData(block) => Some(block),
            Block::HeaderOnly(_) => None,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.as_data().map(|block| block.name.as_str())
    }
}
