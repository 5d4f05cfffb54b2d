//! Error types for `LsdKit`

use thiserror::Error;

/// The error type for `LsdKit` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== Binary Format Errors ====================
    /// The buffer is shorter than its declared record count implies.
    #[error("truncated LSD data: expected at least {expected} bytes, found {actual}")]
    TruncatedInput {
        /// Number of bytes required by the record count.
        expected: usize,
        /// Number of bytes actually available.
        actual: usize,
    },

    /// The table holds more records than the 16-bit count field can express.
    #[error("LSD table too large: {count} records (maximum 65535)")]
    TableTooLarge {
        /// The number of records in the table.
        count: usize,
    },

    /// A record field does not fit in an unsigned 16-bit integer.
    #[error("{field} out of range: {value} (expected 0-65535)")]
    FieldOutOfRange {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: i64,
    },

    // ==================== Table Editing Errors ====================
    /// A row index does not address a record in the table.
    #[error("row index {index} out of range (table has {len} records)")]
    IndexOutOfRange {
        /// The requested row index.
        index: usize,
        /// The table length at the time of the request.
        len: usize,
    },

    // ==================== JSON Errors ====================
    /// The JSON document does not have the expected shape.
    #[error("invalid LSD JSON: {0}")]
    Schema(String),

    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// UTF-8 conversion error.
    #[error("UTF-8 conversion error: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),
}

/// A specialized Result type for `LsdKit` operations.
pub type Result<T> = std::result::Result<T, Error>;
