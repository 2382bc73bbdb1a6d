//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Result, bail};

use xwt_io::{Compression, ReaderConfig, WriterConfig};
use xwt_xspec::XspecConfig;

use crate::config::{AnalysisToml, IoConfig};

/// Parses a compression algorithm name string into the corresponding enum variant.
pub fn parse_compression(s: &str) -> Result<Compression> {
    match s.to_lowercase().as_str() {
        "none" => Ok(Compression::None),
        "snappy" => Ok(Compression::Snappy),
        "zstd" => Ok(Compression::Zstd),
        other => bail!("unknown compression: {other:?}"),
    }
}

/// Builds an [`XspecConfig`] from the TOML analysis configuration.
///
/// `fs_override` takes precedence over `[analysis].fs`; one of the two must
/// be present. Parameter ranges are checked by the estimator itself.
pub fn build_xspec_config(analysis: &AnalysisToml, fs_override: Option<f64>) -> Result<XspecConfig> {
    let Some(fs) = fs_override.or(analysis.fs) else {
        bail!("no sampling frequency: set [analysis].fs in config or use --fs");
    };
    Ok(XspecConfig::new(fs, analysis.freqmin, analysis.freqmax)
        .with_ns(analysis.ns)
        .with_nt(analysis.nt)
        .with_vpo(analysis.vpo)
        .with_nptsfreq(analysis.nptsfreq))
}

/// Builds a [`ReaderConfig`] from the TOML I/O configuration.
pub fn build_reader_config(io: &IoConfig) -> ReaderConfig {
    ReaderConfig::default()
        .with_reference_column(io.reference_column.as_str())
        .with_current_column(io.current_column.as_str())
}

/// Builds a [`WriterConfig`] from the TOML I/O configuration.
pub fn build_writer_config(io: &IoConfig) -> Result<WriterConfig> {
    let compression = parse_compression(&io.compression)?;
    Ok(WriterConfig::default()
        .with_compression(compression)
        .with_row_group_size(io.row_group_size))
}
