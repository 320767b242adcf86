//! Snapshot Reader

use std::fs;
use std::path::Path;

use bincode::Options;
use bytes::Buf;

use crate::cell::{CharCell, CharSet};
use crate::config::Config;
use crate::error::{CellError, Result};

use super::{SnapshotBody, FOOTER_SIZE, HEADER_SIZE, MAGIC, VERSION};

/// Decode snapshot bytes into a validated set, with default limits
pub fn decode(data: &[u8]) -> Result<CharSet> {
    decode_with(data, &Config::default())
}

/// Decode snapshot bytes into a validated set
///
/// The header stride must lie in `1..=config.max_stride`; the cell is
/// allocated at `stride * count` bytes, so the header alone must not be able
/// to dictate an arbitrary allocation.
pub fn decode_with(data: &[u8], config: &Config) -> Result<CharSet> {
    if data.len() < HEADER_SIZE + FOOTER_SIZE {
        return Err(CellError::Snapshot(format!(
            "snapshot truncated: {} bytes",
            data.len()
        )));
    }

    let mut header = &data[..HEADER_SIZE];
    if &header[0..4] != MAGIC {
        return Err(CellError::Snapshot(format!(
            "Invalid snapshot magic: expected CSET, got {:?}",
            &header[0..4]
        )));
    }
    header.advance(4);

    let version = header.get_u16_le();
    if version != VERSION {
        return Err(CellError::Snapshot(format!(
            "Unsupported snapshot version: {}",
            version
        )));
    }
    let stride = header.get_u32_le() as usize;
    if stride == 0 || stride > config.max_stride {
        return Err(CellError::Snapshot(format!(
            "snapshot stride {} outside 1..={}",
            stride, config.max_stride
        )));
    }
    let count = header.get_u64_le();

    let body = &data[HEADER_SIZE..data.len() - FOOTER_SIZE];
    let mut footer = &data[data.len() - FOOTER_SIZE..];
    let expected_crc = footer.get_u32_le();
    let actual_crc = crc32fast::hash(body);
    if expected_crc != actual_crc {
        return Err(CellError::Corruption(format!(
            "body CRC mismatch: expected {:08x}, got {:08x}",
            expected_crc, actual_crc
        )));
    }

    // Same encoding as `bincode::serialize`, but lengths may not exceed the body
    let body: SnapshotBody = bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .allow_trailing_bytes()
        .with_limit(body.len() as u64)
        .deserialize(body)?;
    if body.elements.len() as u64 != count {
        return Err(CellError::Corruption(format!(
            "header count {} does not match {} stored elements",
            count,
            body.elements.len()
        )));
    }

    let cell = CharCell::from_items(stride, &body.elements)?;
    CharSet::from_sorted(cell)
}

/// Read and decode a snapshot file, with default limits
pub fn read(path: &Path) -> Result<CharSet> {
    read_with(path, &Config::default())
}

/// Read and decode a snapshot file
pub fn read_with(path: &Path, config: &Config) -> Result<CharSet> {
    let data = fs::read(path)?;
    let set = decode_with(&data, config)?;
    tracing::debug!(path = %path.display(), card = set.card(), "loaded snapshot");
    Ok(set)
}
