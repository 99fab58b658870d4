//! Block list scanning.
//!
//! A container is a flat sequence of blocks. Each starts with a 16 byte
//! header; every block except the package block follows it with an 80 byte
//! null-terminated name and a payload padded to a multiple of 16 bytes.

use tracing::{debug, trace, warn};

use crate::light_field::common::error::{LightFieldError, Result};
use crate::light_field::container::block::{Block, DataBlock};
use crate::light_field::container::header::{BlockHeader, BlockKind, HEADER_SIZE};
use crate::light_field::container::source::RandomAccess;

/// Size in bytes of the name field on data-bearing blocks.
pub const NAME_SIZE: u64 = 80;

/// Payloads are padded up to a multiple of this.
pub const BLOCK_ALIGNMENT: u64 = 16;

/// Rounds `n` up to the next multiple of `m`.
pub fn round_up_to_multiple_of(n: u64, m: u64) -> u64 {
    n.div_ceil(m) * m
}

/// Decodes a fixed-size name field up to its first null byte, or the whole
/// field when there is none.
pub fn read_null_terminated_utf8(field: &[u8]) -> Option<&str> {
    let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    std::str::from_utf8(&field[..end]).ok()
}

fn truncated(offset: u64, needed: u64, length: u64) -> LightFieldError {
    LightFieldError::TruncatedBlock {
        offset,
        needed,
        available: length - offset,
    }
}

/// Scans `source` from the start into its ordered list of blocks.
///
/// Payloads are skipped, not read. A header, name or payload cut short by
/// the end of the source fails the whole scan. Padding after the final
/// payload may be absent.
pub fn read_blocks<S: RandomAccess + ?Sized>(source: &S) -> Result<Vec<Block>> {
    let length = source.len()?;
    let mut position = 0u64;
    let mut blocks = Vec::new();

    let mut header_bytes = [0u8; HEADER_SIZE as usize];
    let mut name_bytes = [0u8; NAME_SIZE as usize];

    while position < length {
        if length - position < HEADER_SIZE {
            return Err(truncated(position, HEADER_SIZE, length));
        }
        source.read_exact_at(&mut header_bytes, position)?;
        let header = BlockHeader::read(&header_bytes[..])?;
        let header_offset = position;
        position += HEADER_SIZE;

        if header.kind() == BlockKind::Package {
            if !blocks.is_empty() {
                warn!(offset = header_offset, "Package block found after the start of the file");
            }
            trace!(offset = header_offset, "Package block");
            blocks.push(Block::HeaderOnly(header));
            continue;
        }

        if length - position < NAME_SIZE {
            return Err(truncated(position, NAME_SIZE, length));
        }
        source.read_exact_at(&mut name_bytes, position)?;
        let name = read_null_terminated_utf8(&name_bytes)
            .ok_or(LightFieldError::InvalidBlockName { offset: position })?
            .to_owned();
        position += NAME_SIZE;

        let data_offset = position;
        let data_length = u64::from(header.data_length);
        if length - position < data_length {
            return Err(truncated(position, data_length, length));
        }
        position = (position + round_up_to_multiple_of(data_length, BLOCK_ALIGNMENT)).min(length);

        trace!(
            offset = header_offset,
            kind = ?header.kind(),
            name = %name,
            data_length,
            "Data block"
        );
        blocks.push(Block::WithData(DataBlock {
            header,
            name,
            data_offset,
        }));
    }

    debug!("Scanned {} blocks ({} bytes)", blocks.len(), length);
    Ok(blocks)
}
