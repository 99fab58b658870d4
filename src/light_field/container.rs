//! Block container reading
//!
//! This module scans the binary block structure of a light field file
//! without loading payloads.

mod block;
mod header;
mod reader;
mod source;
#[cfg(test)]
pub(crate) mod testing;

pub use block::{Block, DataBlock};
pub use header::{BlockHeader, BlockKind, Magic, HEADER_SIZE};
pub use reader::{read_blocks, read_null_terminated_utf8, round_up_to_multiple_of, BLOCK_ALIGNMENT, NAME_SIZE};
pub use source::RandomAccess;
