//! Analyze command: cross-spectrum of a reference/current trace pair.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use xwt_io::{read_traces, summary_path, write_parquet, write_summary};
use xwt_xspec::cross_spectrum;

use crate::cli::AnalyzeArgs;
use crate::config::XwtConfig;
use crate::convert;

/// Loads and parses the TOML configuration at `path`.
fn load_config(path: &Path) -> Result<XwtConfig> {
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}

/// Run the analysis pipeline.
pub fn run(args: AnalyzeArgs) -> Result<()> {
    let _cmd = info_span!("analyze").entered();

    // 1. Load project TOML and apply CLI overrides
    let mut config = load_config(&args.config)?;
    if let Some(input) = args.input {
        config.io.input = Some(input);
    }
    if let Some(output) = args.output {
        config.io.output = Some(output);
    }

    let input = config.io.input.as_ref().ok_or_else(|| {
        anyhow::anyhow!("no input path: set [io].input in config or use --input")
    })?;
    let output = config.io.output.as_ref().ok_or_else(|| {
        anyhow::anyhow!("no output path: set [io].output in config or use --output")
    })?;

    // 2. Build library configs
    let xspec_cfg = convert::build_xspec_config(&config.analysis, args.fs)?;
    let reader_cfg = convert::build_reader_config(&config.io);
    let writer_cfg = convert::build_writer_config(&config.io)?;

    // 3. Read traces
    info!(path = %input.display(), "reading traces");
    let pair = read_traces(input, &reader_cfg)
        .with_context(|| format!("failed to read Parquet: {}", input.display()))?;

    // 4. Estimate
    info!(
        samples = pair.len(),
        fs = xspec_cfg.fs(),
        freqmin = xspec_cfg.freqmin(),
        freqmax = xspec_cfg.freqmax(),
        nptsfreq = xspec_cfg.nptsfreq(),
        "estimating cross-spectrum"
    );
    let result = cross_spectrum(pair.reference(), pair.current(), &xspec_cfg)
        .context("cross-spectrum estimation failed")?;

    let reliable = result.coi_mask().iter().filter(|&&r| r).count();
    if reliable == 0 {
        warn!("every cell lies inside the cone of influence; consider a higher freqmin");
    }

    // 5. Write outputs
    if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory: {}", parent.display()))?;
    }
    write_parquet(output, &result, &writer_cfg)
        .with_context(|| format!("failed to write Parquet: {}", output.display()))?;

    let summary = summary_path(output);
    write_summary(&summary, &xspec_cfg, &result)
        .with_context(|| format!("failed to write summary: {}", summary.display()))?;

    info!(
        output = %output.display(),
        summary = %summary.display(),
        n_freqs = result.n_freqs(),
        n_times = result.n_times(),
        reliable,
        "analysis complete"
    );
    Ok(())
}
