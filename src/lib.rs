//! # cellset
//!
//! Fixed-stride character sets with Fortran-style membership queries:
//! - Blank-padded, fixed-width element storage
//! - Trailing-blank-insensitive, case-sensitive ordering
//! - O(log n) binary search over validated (sorted, duplicate-free) sets
//! - Guarded "element of" routines for character, integer and double cells
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │            membership (elemc / elemi / elemd)               │
//! │      null item → type tag → "is a set" flag checks          │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │    cell     │          │   search    │
//!   │ (CharCell,  │─────────►│ (bisection) │
//!   │  CharSet)   │          └──────┬──────┘
//!   └─────────────┘                 │
//!          ▲                        ▼
//!          │                 ┌─────────────┐
//!   shared / batch /         │   compare   │
//!   snapshot                 │(blank-trim) │
//!                            └─────────────┘
//! ```
//!
//! ## Example
//! ```
//! use cellset::{CharSet, Lookup};
//!
//! let planets = CharSet::from_items(8, ["Venus", "Earth", "Pluto", "Mars"]).unwrap();
//! assert_eq!(planets.locate(b"Mars"), Lookup::Found(1));
//! assert!(planets.contains(b"Earth   "));
//! assert!(!planets.contains(b"earth"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod compare;
pub mod search;
pub mod cell;
pub mod membership;
pub mod shared;
pub mod batch;
pub mod snapshot;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{CellError, Result};
pub use config::Config;
pub use cell::{Cell, CellType, CharCell, CharSet};
pub use membership::{elemc, elemd, elemi};
pub use search::Lookup;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of cellset
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
