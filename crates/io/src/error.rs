//! Error types for xwt-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the xwt-io crate.
///
/// Covers missing files, Parquet and JSON failures, and input that does not
/// look like a usable trace pair.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an error originating from the Parquet or Arrow libraries.
    #[error("parquet error: {reason}")]
    Parquet {
        /// Description of the underlying Parquet failure.
        reason: String,
    },

    /// Wraps an error raised while serialising the JSON summary.
    #[error("json error: {reason}")]
    Json {
        /// Description of the underlying serialisation failure.
        reason: String,
    },

    /// Returned when one or more validation checks fail.
    #[error("{count} validation error(s): {details}")]
    Validation {
        /// Number of accumulated validation failures.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },

    /// Returned when a required column is not present in a file.
    #[error("column '{name}' not found in {}", path.display())]
    MissingColumn {
        /// Name of the missing column.
        name: String,
        /// Path to the file that was inspected.
        path: PathBuf,
    },

    /// Returned when a column holds values that cannot be read as `f64`.
    #[error("column '{name}' has unsupported type {data_type}")]
    ColumnType {
        /// Name of the offending column.
        name: String,
        /// Arrow data type found in the file.
        data_type: String,
    },

    /// Returned when a trace column contains nulls.
    #[error("column '{name}' contains {count} null value(s)")]
    NullValues {
        /// Name of the offending column.
        name: String,
        /// Number of nulls found.
        count: usize,
    },
}

impl From<parquet::errors::ParquetError> for IoError {
    fn from(e: parquet::errors::ParquetError) -> Self {
        IoError::Parquet {
            reason: e.to_string(),
        }
    }
}

impl From<arrow::error::ArrowError> for IoError {
    fn from(e: arrow::error::ArrowError) -> Self {
        IoError::Parquet {
            reason: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for IoError {
    fn from(e: serde_json::Error) -> Self {
        IoError::Json {
            reason: e.to_string(),
        }
    }
}
