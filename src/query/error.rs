//! Query error types
//!
//! Defines the error conditions the query layer can report.

use thiserror::Error;

/// Errors that can occur during query operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// Requested year is not in the dataset
    #[error("No data for year {0}")]
    YearNotFound(i32),

    /// Chart type is not one of bar, line or pie
    #[error("Invalid chart type: {0}. Use bar, line, or pie")]
    InvalidChartType(String),
}

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;
