//! High-level Parquet writer configuration and orchestration.

use std::path::Path;
use std::sync::Arc;

use parquet::file::properties::WriterProperties;
use tracing::info;
use xwt_xspec::CrossSpectrum;

use crate::error::IoError;
use crate::parquet_write;

/// Compression algorithm for Parquet output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Compression {
    /// No compression.
    None,
    /// Snappy compression (fast, moderate ratio).
    #[default]
    Snappy,
    /// Zstd compression (slower, better ratio).
    Zstd,
}

impl Compression {
    /// Converts to the corresponding `parquet::basic::Compression` variant.
    fn to_parquet(self) -> Result<parquet::basic::Compression, IoError> {
        Ok(match self {
            Self::None => parquet::basic::Compression::UNCOMPRESSED,
            Self::Snappy => parquet::basic::Compression::SNAPPY,
            Self::Zstd => {
                let level = parquet::basic::ZstdLevel::try_new(3)?;
                parquet::basic::Compression::ZSTD(level)
            }
        })
    }
}

/// Configuration for writing cross-spectrum results to Parquet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriterConfig {
    /// Compression algorithm to use.
    compression: Compression,
    /// Maximum number of rows per row group.
    row_group_size: usize,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            compression: Compression::default(),
            row_group_size: 1_000_000,
        }
    }
}

impl WriterConfig {
    /// Sets the compression algorithm.
    pub fn with_compression(mut self, comp: Compression) -> Self {
        self.compression = comp;
        self
    }

    /// Sets the maximum number of rows per row group.
    pub fn with_row_group_size(mut self, size: usize) -> Self {
        self.row_group_size = size;
        self
    }

    /// Returns the compression algorithm.
    pub fn compression(&self) -> Compression {
        self.compression
    }

    /// Returns the maximum number of rows per row group.
    pub fn row_group_size(&self) -> usize {
        self.row_group_size
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] if `row_group_size` is zero.
    fn validate(&self) -> Result<(), IoError> {
        if self.row_group_size == 0 {
            return Err(IoError::Validation {
                count: 1,
                details: "row_group_size must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}

/// Write a cross-spectrum result to a Parquet file in long format.
///
/// One row per `(frequency, time)` cell, frequency-major with the highest
/// frequency first. Each frequency row of the result is converted to its own
/// record batch; the writer packs batches into row groups of at most
/// `row_group_size` rows.
///
/// # Errors
///
/// Returns [`IoError::Validation`] if the configuration is invalid, or
/// [`IoError::Parquet`] if schema construction, batch conversion, or file I/O
/// fails.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn write_parquet(
    path: &Path,
    result: &CrossSpectrum,
    config: &WriterConfig,
) -> Result<(), IoError> {
    config.validate()?;

    let schema = Arc::new(parquet_write::build_schema());

    let compression = config.compression.to_parquet()?;
    let props = WriterProperties::builder()
        .set_compression(compression)
        .set_max_row_group_size(config.row_group_size)
        .build();

    let mask = result.coi_mask();
    let batches = mask
        .rows()
        .into_iter()
        .enumerate()
        .map(|(k, reliable)| {
            parquet_write::frequency_row_to_record_batch(result, k, reliable, &schema)
        });

    parquet_write::write_batches(path, batches, &schema, props)?;

    info!(
        rows = result.n_freqs() * result.n_times(),
        compression = ?config.compression,
        "wrote cross-spectrum"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = WriterConfig::default();
        assert_eq!(config.compression(), Compression::Snappy);
        assert_eq!(config.row_group_size(), 1_000_000);
    }

    #[test]
    fn builder_methods() {
        let config = WriterConfig::default()
            .with_compression(Compression::Zstd)
            .with_row_group_size(500);
        assert_eq!(config.compression(), Compression::Zstd);
        assert_eq!(config.row_group_size(), 500);
    }

    #[test]
    fn validate_zero_row_group_size() {
        let config = WriterConfig::default().with_row_group_size(0);
        match config.validate().unwrap_err() {
            IoError::Validation { count, details } => {
                assert_eq!(count, 1);
                assert!(details.contains("row_group_size"));
            }
            _ => panic!("expected Validation error"),
        }
    }

    #[test]
    fn every_compression_maps_to_parquet() {
        for comp in [Compression::None, Compression::Snappy, Compression::Zstd] {
            assert!(comp.to_parquet().is_ok(), "{comp:?}");
        }
    }
}
