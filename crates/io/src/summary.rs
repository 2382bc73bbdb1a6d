//! JSON summary written next to the Parquet output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;
use xwt_xspec::{CrossSpectrum, XspecConfig};

use crate::error::IoError;

/// Analysis parameters and axes of a cross-spectrum result.
///
/// Non-finite values serialise as JSON `null`.
#[derive(Debug, Serialize)]
pub struct Summary<'a> {
    /// Parameters the analysis ran with.
    pub analysis: &'a XspecConfig,
    /// Number of frequency rows.
    pub n_freqs: usize,
    /// Number of time columns.
    pub n_times: usize,
    /// Sampling interval in seconds.
    pub dt: f64,
    /// Analysis frequencies in Hz, descending.
    pub freqs: &'a [f64],
    /// Wavelet scales, one per frequency.
    pub scales: &'a [f64],
    /// Cone of influence remapped onto the frequency axis.
    pub coi: &'a [f64],
    /// Cone of influence as e-folding periods in seconds.
    pub coi_periods: &'a [f64],
}

impl<'a> Summary<'a> {
    /// Collects the summary of `result` computed with `config`.
    pub fn new(config: &'a XspecConfig, result: &'a CrossSpectrum) -> Self {
        Self {
            analysis: config,
            n_freqs: result.n_freqs(),
            n_times: result.n_times(),
            dt: result.dt(),
            freqs: result.freqs(),
            scales: result.scales(),
            coi: result.coi(),
            coi_periods: result.coi_periods(),
        }
    }
}

/// Path of the summary belonging to `output`: `<stem>.summary.json` in the
/// same directory.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use xwt_io::summary_path;
///
/// let p = summary_path(Path::new("/data/run1.parquet"));
/// assert_eq!(p, Path::new("/data/run1.summary.json"));
/// ```
pub fn summary_path(output: &Path) -> PathBuf {
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "xwt".to_string());
    output.with_file_name(format!("{stem}.summary.json"))
}

/// Writes the pretty-printed JSON summary of `result` to `path`.
///
/// # Errors
///
/// Returns [`IoError::Json`] if the file cannot be created or written.
pub fn write_summary(
    path: &Path,
    config: &XspecConfig,
    result: &CrossSpectrum,
) -> Result<(), IoError> {
    let file = File::create(path).map_err(|e| IoError::Json {
        reason: format!("{}: {e}", path.display()),
    })?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &Summary::new(config, result))?;
    writer.flush().map_err(|e| IoError::Json {
        reason: format!("{}: {e}", path.display()),
    })?;
    debug!(path = %path.display(), "wrote summary");
    Ok(())
}
