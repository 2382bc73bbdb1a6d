//! Analysis parameters for the cross-spectrum estimator.

use serde::Serialize;

use crate::error::XspecError;

/// Central (non-dimensional) frequency of the Morlet wavelet used for the analysis.
pub const MORLET_OMEGA0: f64 = 6.0;

/// Smallest and largest accepted voices per octave.
const VPO_RANGE: (u32, u32) = (4, 48);

/// Parameters of a cross-spectrum analysis.
///
/// # Example
///
/// ```
/// use xwt_xspec::XspecConfig;
///
/// let config = XspecConfig::new(100.0, 1.0, 10.0).with_nptsfreq(50);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.frequency_grid().len(), 50);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct XspecConfig {
    /// Sampling frequency in Hz.
    fs: f64,
    /// Boxcar length across scales.
    ns: usize,
    /// Gaussian width factor along time.
    nt: f64,
    /// Voices per octave.
    vpo: u32,
    /// Lowest frequency of the grid (Hz).
    freqmin: f64,
    /// Highest frequency of the grid (Hz).
    freqmax: f64,
    /// Number of grid frequencies.
    nptsfreq: usize,
}

impl XspecConfig {
    /// Creates a configuration for sampling rate `fs` and band `[freqmin, freqmax]`.
    ///
    /// Defaults: `ns = 3`, `nt = 0.25`, `vpo = 12`, `nptsfreq = 100`.
    pub fn new(fs: f64, freqmin: f64, freqmax: f64) -> Self {
        Self {
            fs,
            ns: 3,
            nt: 0.25,
            vpo: 12,
            freqmin,
            freqmax,
            nptsfreq: 100,
        }
    }

    /// Sets the sampling frequency.
    pub fn with_fs(mut self, fs: f64) -> Self {
        self.fs = fs;
        self
    }

    /// Sets the boxcar length across scales.
    pub fn with_ns(mut self, ns: usize) -> Self {
        self.ns = ns;
        self
    }

    /// Sets the Gaussian width along time.
    pub fn with_nt(mut self, nt: f64) -> Self {
        self.nt = nt;
        self
    }

    /// Sets the voices per octave.
    pub fn with_vpo(mut self, vpo: u32) -> Self {
        self.vpo = vpo;
        self
    }

    /// Sets the frequency band.
    pub fn with_band(mut self, freqmin: f64, freqmax: f64) -> Self {
        self.freqmin = freqmin;
        self.freqmax = freqmax;
        self
    }

    /// Sets the number of grid frequencies.
    pub fn with_nptsfreq(mut self, nptsfreq: usize) -> Self {
        self.nptsfreq = nptsfreq;
        self
    }

    /// Returns the sampling frequency.
    pub fn fs(&self) -> f64 {
        self.fs
    }

    /// Returns the sampling interval `1 / fs`.
    pub fn dt(&self) -> f64 {
        1.0 / self.fs
    }

    /// Returns the boxcar length.
    pub fn ns(&self) -> usize {
        self.ns
    }

    /// Returns the Gaussian width.
    pub fn nt(&self) -> f64 {
        self.nt
    }

    /// Returns the voices per octave.
    pub fn vpo(&self) -> u32 {
        self.vpo
    }

    /// Returns the scale spacing `1 / vpo` in octaves.
    pub fn dj(&self) -> f64 {
        1.0 / f64::from(self.vpo)
    }

    /// Returns the lowest grid frequency.
    pub fn freqmin(&self) -> f64 {
        self.freqmin
    }

    /// Returns the highest grid frequency.
    pub fn freqmax(&self) -> f64 {
        self.freqmax
    }

    /// Returns the number of grid frequencies.
    pub fn nptsfreq(&self) -> usize {
        self.nptsfreq
    }

    /// Returns the target frequency grid, highest frequency first.
    pub fn frequency_grid(&self) -> Vec<f64> {
        frequency_grid(self.freqmax, self.freqmin, self.nptsfreq)
    }

    /// Validates every parameter.
    ///
    /// # Errors
    ///
    /// Returns [`XspecError::InvalidParameter`] naming the first offending
    /// parameter.
    pub fn validate(&self) -> Result<(), XspecError> {
        if !self.fs.is_finite() || self.fs <= 0.0 {
            return Err(invalid("fs", format!("must be finite and > 0, got {}", self.fs)));
        }
        if self.ns == 0 {
            return Err(invalid("ns", "must be at least 1".to_string()));
        }
        if !self.nt.is_finite() || self.nt < 0.0 {
            return Err(invalid("nt", format!("must be finite and >= 0, got {}", self.nt)));
        }
        let (lo, hi) = VPO_RANGE;
        if self.vpo % 2 != 0 || !(lo..=hi).contains(&self.vpo) {
            return Err(invalid(
                "vpo",
                format!("must be an even integer in [{lo}, {hi}], got {}", self.vpo),
            ));
        }
        if self.nptsfreq == 0 {
            return Err(invalid("nptsfreq", "must be at least 1".to_string()));
        }
        if !self.freqmin.is_finite() || self.freqmin <= 0.0 {
            return Err(invalid(
                "freqmin",
                format!("must be finite and > 0, got {}", self.freqmin),
            ));
        }
        if !self.freqmax.is_finite() || self.freqmax <= self.freqmin {
            return Err(invalid(
                "freqmax",
                format!(
                    "must be finite and greater than freqmin ({}), got {}",
                    self.freqmin, self.freqmax
                ),
            ));
        }
        Ok(())
    }
}

fn invalid(name: &'static str, reason: String) -> XspecError {
    XspecError::InvalidParameter { name, reason }
}

/// `n` frequencies evenly spaced from `start` to `stop`, both included.
///
/// With `start > stop` the grid descends. A single point returns `[start]`.
pub fn frequency_grid(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { stop } else { start + step * i as f64 })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn base() -> XspecConfig {
        XspecConfig::new(100.0, 1.0, 10.0)
    }

    fn invalid_name(config: &XspecConfig) -> &'static str {
        match config.validate() {
            Err(XspecError::InvalidParameter { name, .. }) => name,
            other => panic!("expected InvalidParameter, got {other:?}"),
        }
    }

    #[test]
    fn defaults() {
        let config = base();
        assert_eq!(config.ns(), 3);
        assert_relative_eq!(config.nt(), 0.25);
        assert_eq!(config.vpo(), 12);
        assert_eq!(config.nptsfreq(), 100);
        assert_relative_eq!(config.dt(), 0.01);
        assert_relative_eq!(config.dj(), 1.0 / 12.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_chaining() {
        let config = base()
            .with_fs(50.0)
            .with_ns(5)
            .with_nt(1.0)
            .with_vpo(20)
            .with_band(0.5, 7.0)
            .with_nptsfreq(10);
        assert_relative_eq!(config.fs(), 50.0);
        assert_eq!(config.ns(), 5);
        assert_relative_eq!(config.nt(), 1.0);
        assert_eq!(config.vpo(), 20);
        assert_relative_eq!(config.freqmin(), 0.5);
        assert_relative_eq!(config.freqmax(), 7.0);
        assert_eq!(config.nptsfreq(), 10);
    }

    #[test]
    fn rejects_bad_sampling_rate() {
        assert_eq!(invalid_name(&base().with_fs(0.0)), "fs");
        assert_eq!(invalid_name(&base().with_fs(f64::NAN)), "fs");
    }

    #[test]
    fn rejects_zero_boxcar() {
        assert_eq!(invalid_name(&base().with_ns(0)), "ns");
    }

    #[test]
    fn rejects_negative_width() {
        assert_eq!(invalid_name(&base().with_nt(-1.0)), "nt");
    }

    #[test]
    fn zero_width_is_allowed() {
        assert!(base().with_nt(0.0).validate().is_ok());
    }

    #[test]
    fn vpo_must_be_even_and_in_range() {
        for vpo in [0, 2, 11, 50] {
            assert_eq!(invalid_name(&base().with_vpo(vpo)), "vpo", "vpo = {vpo}");
        }
        for vpo in [4, 10, 48] {
            assert!(base().with_vpo(vpo).validate().is_ok(), "vpo = {vpo}");
        }
    }

    #[test]
    fn rejects_empty_grid() {
        assert_eq!(invalid_name(&base().with_nptsfreq(0)), "nptsfreq");
    }

    #[test]
    fn rejects_bad_band() {
        assert_eq!(invalid_name(&base().with_band(0.0, 10.0)), "freqmin");
        assert_eq!(invalid_name(&base().with_band(5.0, 5.0)), "freqmax");
        assert_eq!(invalid_name(&base().with_band(6.0, 2.0)), "freqmax");
    }

    #[test]
    fn grid_descends_and_hits_both_ends() {
        let grid = base().with_nptsfreq(50).frequency_grid();
        assert_eq!(grid.len(), 50);
        assert_eq!(grid[0], 10.0);
        assert_eq!(grid[49], 1.0);
        for pair in grid.windows(2) {
            assert_relative_eq!(pair[0] - pair[1], 9.0 / 49.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn single_point_grid() {
        assert_eq!(frequency_grid(7.0, 0.5, 1), vec![7.0]);
        assert!(frequency_grid(7.0, 0.5, 0).is_empty());
    }

    #[test]
    fn config_serializes() {
        let json = serde_json::to_value(base()).unwrap();
        assert_eq!(json["vpo"], 12);
        assert_eq!(json["nptsfreq"], 100);
    }
}
