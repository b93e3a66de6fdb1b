//! Dataset store error types
//!
//! Defines all errors that can occur while building or loading the dataset.

use std::path::PathBuf;
use thiserror::Error;

use crate::storage::types::Month;

/// Errors that can occur in the storage layer
#[derive(Error, Debug)]
pub enum StorageError {
    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Dataset file could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),

    /// CSV row could not be decoded
    #[error("CSV error at row {row}: {message}")]
    Csv { row: usize, message: String },

    /// The same year appears twice
    #[error("Duplicate year: {0}")]
    DuplicateYear(i32),

    /// Months are missing, repeated or out of calendar order
    #[error("Year {year}: expected {expected} at position {position}, found {found}")]
    MonthOrder {
        year: i32,
        position: usize,
        expected: Month,
        found: String,
    },

    /// Stored totals disagree with the monthly data
    #[error("Year {year}: stored {field} {stored} does not match computed {computed}")]
    TotalsMismatch {
        year: i32,
        field: &'static str,
        stored: u64,
        computed: u64,
    },

    /// A yearly sum does not fit in 64 bits
    #[error("Year {year}: {field} overflows")]
    Overflow { year: i32, field: &'static str },

    /// Dataset file has an extension we cannot read
    #[error("Unsupported dataset format: {0:?}")]
    UnsupportedFormat(PathBuf),
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Parse(err.to_string())
    }
}

/// Result type alias for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
