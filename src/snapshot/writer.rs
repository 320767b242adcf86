//! Snapshot Writer

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

use bytes::{BufMut, Bytes, BytesMut};

use crate::cell::CharSet;
use crate::error::{CellError, Result};

use super::{SnapshotBody, FOOTER_SIZE, HEADER_SIZE, MAGIC, VERSION};

/// Encode a set into snapshot bytes
pub fn encode(set: &CharSet) -> Result<Bytes> {
    let stride = u32::try_from(set.stride()).map_err(|_| {
        CellError::Snapshot(format!("stride {} does not fit the header", set.stride()))
    })?;

    let body = SnapshotBody {
        elements: set.iter().map(<[u8]>::to_vec).collect(),
    };
    let body = bincode::serialize(&body)?;

    let mut buf = BytesMut::with_capacity(HEADER_SIZE + body.len() + FOOTER_SIZE);
    buf.put_slice(MAGIC);
    buf.put_u16_le(VERSION);
    buf.put_u32_le(stride);
    buf.put_u64_le(set.card() as u64);
    buf.put_slice(&body);
    buf.put_u32_le(crc32fast::hash(&body));

    Ok(buf.freeze())
}

/// Write a snapshot file, replacing any existing file at `path`
pub fn write(path: &Path, set: &CharSet) -> Result<()> {
    let bytes = encode(set)?;

    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(&bytes)?;
    writer.flush()?;

    let file = writer
        .into_inner()
        .map_err(|e| CellError::Snapshot(format!("Failed to flush snapshot: {}", e)))?;
    file.sync_all()?;

    tracing::debug!(
        path = %path.display(),
        card = set.card(),
        bytes = bytes.len(),
        "wrote snapshot"
    );
    Ok(())
}
