//! Result bundle of a cross-spectrum analysis.

use ndarray::Array2;
use num_complex::Complex64;

use crate::coi::coi_mask;

/// Co-indexed fields of a cross-spectrum analysis.
///
/// Every 2-D field has shape `(n_freqs, n_times)`; row `k` belongs to
/// `freqs()[k]` (highest frequency first) and column `t` to time `t * dt`.
#[derive(Clone, Debug)]
pub struct CrossSpectrum {
    pub(crate) amplitude: Array2<f64>,
    pub(crate) spectrum: Array2<Complex64>,
    pub(crate) phase: Array2<f64>,
    pub(crate) coherence: Array2<f64>,
    pub(crate) time_shift: Array2<f64>,
    pub(crate) freqs: Vec<f64>,
    pub(crate) coi: Vec<f64>,
    pub(crate) coi_periods: Vec<f64>,
    pub(crate) scales: Vec<f64>,
    pub(crate) dt: f64,
}

impl CrossSpectrum {
    /// Unsmoothed cross-wavelet amplitude `|W_ref * conj(W_cur)|`.
    pub fn amplitude(&self) -> &Array2<f64> {
        &self.amplitude
    }

    /// Smoothed cross-spectrum normalised by the smoothed powers.
    pub fn spectrum(&self) -> &Array2<Complex64> {
        &self.spectrum
    }

    /// Wrapped phase of [`CrossSpectrum::spectrum`], in `(-pi, pi]` radians.
    pub fn phase(&self) -> &Array2<f64> {
        &self.phase
    }

    /// Wavelet coherence. Not clipped, so smoothing bias can push it
    /// marginally outside `[0, 1]`.
    pub fn coherence(&self) -> &Array2<f64> {
        &self.coherence
    }

    /// Time shift `phase / (2 pi f)` in seconds.
    ///
    /// Wraps at `+-1/(2f)`; a positive value means the current trace lags
    /// the reference.
    pub fn time_shift(&self) -> &Array2<f64> {
        &self.time_shift
    }

    /// Analysis frequencies in Hz, descending.
    pub fn freqs(&self) -> &[f64] {
        &self.freqs
    }

    /// Cone of influence remapped onto the frequency axis (see
    /// [`remap_coi`](crate::remap_coi)).
    pub fn coi(&self) -> &[f64] {
        &self.coi
    }

    /// Cone of influence as e-folding periods in seconds, one per time sample.
    pub fn coi_periods(&self) -> &[f64] {
        &self.coi_periods
    }

    /// Wavelet scales, one per frequency.
    pub fn scales(&self) -> &[f64] {
        &self.scales
    }

    /// Sampling interval in seconds.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Number of frequencies (rows).
    pub fn n_freqs(&self) -> usize {
        self.freqs.len()
    }

    /// Number of time samples (columns).
    pub fn n_times(&self) -> usize {
        self.coi.len()
    }

    /// Lapse time of every column, starting at zero.
    pub fn times(&self) -> Vec<f64> {
        (0..self.n_times()).map(|t| t as f64 * self.dt).collect()
    }

    /// `true` where the estimate is free of edge effects (see
    /// [`coi_mask`](crate::coi_mask)).
    pub fn coi_mask(&self) -> Array2<bool> {
        coi_mask(&self.coi_periods, &self.freqs)
    }
}
