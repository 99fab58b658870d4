//! Container encoding for tests.

use crate::light_field::container::header::Magic;
use crate::light_field::container::reader::{round_up_to_multiple_of, BLOCK_ALIGNMENT, NAME_SIZE};

/// Appends a block to `out`. Package blocks get no name and no payload.
pub(crate) fn push_block(out: &mut Vec<u8>, magic: u64, name: &str, payload: &[u8]) {
    out.extend_from_slice(&magic.to_be_bytes());
    out.extend_from_slice(&1u32.to_be_bytes());
    out.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    if magic == Magic::PACKAGE {
        return;
    }

    let mut field = [0u8; NAME_SIZE as usize];
    field[..name.len()].copy_from_slice(name.as_bytes());
    out.extend_from_slice(&field);
    out.extend_from_slice(payload);

    let padded = round_up_to_multiple_of(payload.len() as u64, BLOCK_ALIGNMENT) as usize;
    out.resize(out.len() + padded - payload.len(), 0xAA);
}
