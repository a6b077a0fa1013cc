//! Error types for slotdb
//!
//! Provides a unified error type for all operations. I/O failures keep the
//! underlying `std::io::Error` as a source so the cause (missing path,
//! permission denied, ...) stays visible. Domain errors are expected,
//! recoverable outcomes of normal operation.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using StoreError
pub type Result<T> = std::result::Result<T, StoreError>;

/// Unified error type for slotdb operations
#[derive(Debug, Error)]
pub enum StoreError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("cannot open store at {path}: {source}")]
    StorageUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("corrupt image: expected {expected} bytes, got {actual}")]
    CorruptImage { expected: usize, actual: usize },

    #[error("failed to write {expected}-byte image: {source}")]
    StorageWriteFailed {
        expected: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to flush image to disk: {source}")]
    FlushFailed {
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Contract Errors
    // -------------------------------------------------------------------------
    #[error("slot id {id} out of range (capacity {capacity})")]
    IndexOutOfRange { id: i64, capacity: usize },

    // -------------------------------------------------------------------------
    // Domain Errors
    // -------------------------------------------------------------------------
    #[error("slot {id} is already set, delete it first")]
    SlotAlreadySet { id: usize },

    #[error("slot {id} is not set")]
    SlotNotSet { id: usize },

    #[error("no record with name {name:?}")]
    NotFound { name: String },
}
