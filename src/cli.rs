use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Wavelet cross-spectrum analysis of two time series.
#[derive(Parser)]
#[command(
    name = "xwt",
    version,
    about = "Wavelet cross-spectrum, coherence and travel-time changes between two traces"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Estimate the cross-spectrum of a reference/current trace pair.
    Analyze(AnalyzeArgs),
}

/// Arguments for the `analyze` subcommand.
#[derive(clap::Args)]
pub struct AnalyzeArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "xwt.toml")]
    pub config: PathBuf,

    /// Override input Parquet path from config.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Override output Parquet path from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override the sampling frequency (Hz) from config.
    #[arg(long)]
    pub fs: Option<f64>,
}
