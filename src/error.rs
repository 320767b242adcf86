//! Error types for cellset
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

use crate::cell::CellType;

/// Result type alias using CellError
pub type Result<T> = std::result::Result<T, CellError>;

/// Unified error type for cellset operations
#[derive(Debug, Error)]
pub enum CellError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Argument Errors (raised by the guarded entry points)
    // -------------------------------------------------------------------------
    #[error("Null pointer: {0}")]
    NullPointer(&'static str),

    #[error("Type mismatch: expected {expected} cell, found {found} cell")]
    TypeMismatch { expected: CellType, found: CellType },

    #[error("Cell is not a set: {0}")]
    NotASet(String),

    #[error("Invalid element at index {index}: {reason}")]
    InvalidElement { index: usize, reason: String },

    // -------------------------------------------------------------------------
    // Storage Errors
    // -------------------------------------------------------------------------
    #[error("Element of length {len} exceeds cell stride {stride}")]
    ElementTooLong { len: usize, stride: usize },

    #[error("Cell capacity {capacity} exceeded")]
    CapacityExceeded { capacity: usize },

    // -------------------------------------------------------------------------
    // Snapshot Errors
    // -------------------------------------------------------------------------
    #[error("Snapshot error: {0}")]
    Snapshot(String),

    #[error("Snapshot corruption detected: {0}")]
    Corruption(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // -------------------------------------------------------------------------
    // Concurrency Errors
    // -------------------------------------------------------------------------
    #[error("Batch worker panicked: {0}")]
    Worker(String),
}

impl From<bincode::Error> for CellError {
    fn from(err: bincode::Error) -> Self {
        CellError::Serialization(err.to_string())
    }
}
