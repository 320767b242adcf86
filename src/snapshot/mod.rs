//! Snapshot Module
//!
//! Persisted form of a validated character set, plus the plain-text source
//! format the CLI builds sets from.
//!
//! ## File Format
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │ Header (18 bytes)                                                    │
//! │   Magic: "CSET" (4) | Version: u16 (2) | Stride: u32 (4) | Count: u64 (8) │
//! ├──────────────────────────────────────────────────────────────────────┤
//! │ Body (variable)                                                      │
//! │   bincode-encoded elements, trailing blanks removed                  │
//! ├──────────────────────────────────────────────────────────────────────┤
//! │ Footer (4 bytes)                                                     │
//! │   BodyCRC: u32 (4)                                                   │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//! All integers are little-endian. Decoding re-checks set order, so a
//! snapshot can never produce an unsorted [`CharSet`](crate::cell::CharSet),
//! and rejects a header stride above `Config::max_stride`.

mod reader;
mod text;
mod writer;

use serde::{Deserialize, Serialize};

pub use reader::{decode, decode_with, read, read_with};
pub use text::{load_text, read_items};
pub use writer::{encode, write};

// =============================================================================
// Shared Constants (used by reader and writer)
// =============================================================================

/// Magic bytes identifying a cellset snapshot
pub(crate) const MAGIC: &[u8; 4] = b"CSET";

/// Current snapshot format version
pub(crate) const VERSION: u16 = 1;

/// Header size: Magic (4) + Version (2) + Stride (4) + Count (8) = 18 bytes
pub(crate) const HEADER_SIZE: usize = 18;

/// Footer size: BodyCRC (4)
pub(crate) const FOOTER_SIZE: usize = 4;

/// Snapshot body
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct SnapshotBody {
    pub elements: Vec<Vec<u8>>,
}
