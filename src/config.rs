use std::path::PathBuf;

use serde::Deserialize;

/// Top-level xwt configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct XwtConfig {
    /// Analysis parameters.
    pub analysis: AnalysisToml,

    /// I/O settings.
    #[serde(default)]
    pub io: IoConfig,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisToml {
    /// Sampling frequency in Hz; may be supplied with `--fs` instead.
    #[serde(default)]
    pub fs: Option<f64>,
    pub freqmin: f64,
    pub freqmax: f64,
    #[serde(default = "default_ns")]
    pub ns: usize,
    #[serde(default = "default_nt")]
    pub nt: f64,
    #[serde(default = "default_vpo")]
    pub vpo: u32,
    #[serde(default = "default_nptsfreq")]
    pub nptsfreq: usize,
}

fn default_ns() -> usize {
    3
}
fn default_nt() -> f64 {
    0.25
}
fn default_vpo() -> u32 {
    12
}
fn default_nptsfreq() -> usize {
    100
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoConfig {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    #[serde(default = "default_reference_column")]
    pub reference_column: String,
    #[serde(default = "default_current_column")]
    pub current_column: String,
    #[serde(default = "default_compression")]
    pub compression: String,
    #[serde(default = "default_row_group_size")]
    pub row_group_size: usize,
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            input: None,
            output: None,
            reference_column: default_reference_column(),
            current_column: default_current_column(),
            compression: default_compression(),
            row_group_size: default_row_group_size(),
        }
    }
}

fn default_reference_column() -> String {
    "reference".to_string()
}
fn default_current_column() -> String {
    "current".to_string()
}
fn default_compression() -> String {
    "snappy".to_string()
}
fn default_row_group_size() -> usize {
    1_000_000
}
