//! High-level trace reader configuration and orchestration.

use std::path::Path;

use tracing::{debug, info};

use crate::error::IoError;
use crate::parquet_read;
use crate::traces::TracePair;

/// Configuration for reading a trace pair from a Parquet file.
///
/// The [`Default`] implementation expects columns named `reference` and
/// `current`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Column holding the reference trace.
    reference_column: String,
    /// Column holding the current trace.
    current_column: String,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            reference_column: "reference".into(),
            current_column: "current".into(),
        }
    }
}

impl ReaderConfig {
    /// Set the reference column name.
    pub fn with_reference_column(mut self, name: impl Into<String>) -> Self {
        self.reference_column = name.into();
        self
    }

    /// Set the current column name.
    pub fn with_current_column(mut self, name: impl Into<String>) -> Self {
        self.current_column = name.into();
        self
    }

    /// Returns the reference column name.
    pub fn reference_column(&self) -> &str {
        &self.reference_column
    }

    /// Returns the current column name.
    pub fn current_column(&self) -> &str {
        &self.current_column
    }

    /// Validate that the configuration is internally consistent.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] if a column name is empty or both
    /// names are the same.
    pub fn validate(&self) -> Result<(), IoError> {
        let mut problems = Vec::new();
        if self.reference_column.is_empty() {
            problems.push("reference_column must not be empty".to_string());
        }
        if self.current_column.is_empty() {
            problems.push("current_column must not be empty".to_string());
        }
        if self.reference_column == self.current_column {
            problems.push(format!(
                "reference_column and current_column are both '{}'",
                self.reference_column
            ));
        }
        if problems.is_empty() {
            Ok(())
        } else {
            Err(IoError::Validation {
                count: problems.len(),
                details: problems.join("; "),
            })
        }
    }
}

/// Read a reference/current trace pair from a Parquet file.
///
/// Both columns must be numeric and free of nulls; other columns are
/// ignored. Samples are returned in file order.
///
/// # Errors
///
/// Returns [`IoError`] if the file is missing or unreadable, a column is
/// missing, non-numeric or has nulls, or the traces fail [`TracePair`]
/// validation.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn read_traces(path: &Path, config: &ReaderConfig) -> Result<TracePair, IoError> {
    config.validate()?;

    let (schema, batches) = parquet_read::read_batches(path)?;
    debug!(batches = batches.len(), columns = schema.fields().len(), "read parquet");

    let reference = parquet_read::column_values(&schema, &batches, &config.reference_column, path)?;
    let current = parquet_read::column_values(&schema, &batches, &config.current_column, path)?;

    let pair = TracePair::new(reference, current)?;
    info!(samples = pair.len(), "loaded trace pair");
    Ok(pair)
}
