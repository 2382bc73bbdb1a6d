//! Continuous Wavelet Transform (CWT) with the Morlet wavelet.
//!
//! Computes the complex time–scale field via FFT-based convolution,
//! following Torrence & Compo (1998). Scales come either from the geometric
//! ladder `s0 * 2^(j * dj)` or from an explicit frequency grid.

use std::f64::consts::PI;

use ndarray::Array2;
use num_complex::Complex64;
use rustfft::FftPlanner;
use tracing::debug;

use crate::error::WaveletError;
use crate::series::TimeSeries;

/// Minimum number of samples the transform accepts.
const MIN_LEN: usize = 4;

/// Seam between the cross-spectrum estimator and a wavelet transform provider.
///
/// Implementations must be deterministic: the same series and configuration
/// always produce the same [`CwtResult`].
pub trait WaveletTransform {
    /// Transforms `series` according to `config`.
    fn transform(&self, series: &TimeSeries, config: &CwtConfig) -> Result<CwtResult, WaveletError>;
}

/// Configuration for the Continuous Wavelet Transform.
///
/// Use the builder methods to customize the analysis parameters.
///
/// # Example
///
/// ```
/// use xwt_wavelet::CwtConfig;
///
/// let config = CwtConfig::new()
///     .with_dt(0.01)
///     .with_dj(1.0 / 12.0)
///     .with_freqs(vec![10.0, 5.0, 1.0]);
/// assert_eq!(config.freqs().map(<[f64]>::len), Some(3));
/// ```
#[derive(Clone, Debug)]
pub struct CwtConfig {
    /// Morlet non-dimensional frequency.
    omega0: f64,
    /// Time step between observations.
    dt: f64,
    /// Fractional octave spacing.
    dj: f64,
    /// Smallest scale (None = auto = 2*dt).
    s0: Option<f64>,
    /// Number of scales less one (None = auto-computed).
    j_max: Option<usize>,
    /// Explicit evaluation frequencies in Hz; overrides the scale ladder.
    freqs: Option<Vec<f64>>,
}

impl CwtConfig {
    /// Creates a new `CwtConfig` with default parameters.
    ///
    /// Defaults: `omega0 = 6.0`, `dt = 1.0`, `dj = 1/12`,
    /// `s0 = None` (auto), `j_max = None` (auto), no frequency grid.
    pub fn new() -> Self {
        Self {
            omega0: 6.0,
            dt: 1.0,
            dj: 1.0 / 12.0,
            s0: None,
            j_max: None,
            freqs: None,
        }
    }

    /// Sets the Morlet non-dimensional frequency.
    pub fn with_omega0(mut self, omega0: f64) -> Self {
        self.omega0 = omega0;
        self
    }

    /// Sets the time step between observations.
    pub fn with_dt(mut self, dt: f64) -> Self {
        self.dt = dt;
        self
    }

    /// Sets the fractional octave spacing.
    pub fn with_dj(mut self, dj: f64) -> Self {
        self.dj = dj;
        self
    }

    /// Sets the smallest scale.
    pub fn with_s0(mut self, s0: f64) -> Self {
        self.s0 = Some(s0);
        self
    }

    /// Sets the number of scales less one.
    pub fn with_j_max(mut self, j_max: usize) -> Self {
        self.j_max = Some(j_max);
        self
    }

    /// Evaluates the transform exactly at these frequencies (Hz).
    pub fn with_freqs(mut self, freqs: Vec<f64>) -> Self {
        self.freqs = Some(freqs);
        self
    }

    /// Returns the Morlet non-dimensional frequency.
    pub fn omega0(&self) -> f64 {
        self.omega0
    }

    /// Returns the time step.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Returns the fractional octave spacing.
    pub fn dj(&self) -> f64 {
        self.dj
    }

    /// Returns the smallest scale, if explicitly set.
    pub fn s0(&self) -> Option<f64> {
        self.s0
    }

    /// Returns the number of scales less one, if explicitly set.
    pub fn j_max(&self) -> Option<usize> {
        self.j_max
    }

    /// Returns the explicit frequency grid, if set.
    pub fn freqs(&self) -> Option<&[f64]> {
        self.freqs.as_deref()
    }

    fn validate(&self) -> Result<(), WaveletError> {
        if !self.omega0.is_finite() || self.omega0 < 5.0 {
            return Err(WaveletError::InvalidConfig(
                "omega0 must be >= 5.0".to_string(),
            ));
        }
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(WaveletError::InvalidConfig("dt must be > 0".to_string()));
        }
        if !self.dj.is_finite() || self.dj <= 0.0 {
            return Err(WaveletError::InvalidConfig("dj must be > 0".to_string()));
        }
        if let Some(s0) = self.s0
            && (!s0.is_finite() || s0 <= 0.0)
        {
            return Err(WaveletError::InvalidConfig("s0 must be > 0".to_string()));
        }
        if let Some(freqs) = &self.freqs {
            if freqs.is_empty() {
                return Err(WaveletError::InvalidConfig(
                    "frequency grid must not be empty".to_string(),
                ));
            }
            if let Some((index, &value)) = freqs
                .iter()
                .enumerate()
                .find(|&(_, &f)| !f.is_finite() || f <= 0.0)
            {
                return Err(WaveletError::InvalidFrequency { index, value });
            }
        }
        Ok(())
    }
}

impl Default for CwtConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of a Continuous Wavelet Transform.
///
/// Rows of every per-scale quantity follow the order of [`CwtResult::scales`].
#[derive(Clone, Debug)]
pub struct CwtResult {
    /// Complex wavelet coefficients, shape `(n_scales, n_times)`.
    coefficients: Array2<Complex64>,
    /// Scale values.
    scales: Vec<f64>,
    /// Fourier frequencies realised by each scale (Hz).
    freqs: Vec<f64>,
    /// Cone of influence per time sample (e-folding period, seconds).
    coi: Vec<f64>,
    /// Normalised FFT of the input, positive frequencies only.
    spectrum: Vec<Complex64>,
    /// Frequencies of `spectrum` (Hz).
    spectrum_freqs: Vec<f64>,
    /// Time step used.
    dt: f64,
}

impl CwtResult {
    /// Assembles a result from already computed parts.
    ///
    /// Intended for alternative [`WaveletTransform`] implementations.
    ///
    /// # Errors
    ///
    /// Returns [`WaveletError::InvalidConfig`] when the coefficient shape does
    /// not match `scales`, `freqs` and `coi`.
    pub fn from_parts(
        coefficients: Array2<Complex64>,
        scales: Vec<f64>,
        freqs: Vec<f64>,
        coi: Vec<f64>,
        dt: f64,
    ) -> Result<Self, WaveletError> {
        let (rows, cols) = coefficients.dim();
        if rows != scales.len() || rows != freqs.len() || cols != coi.len() {
            return Err(WaveletError::InvalidConfig(format!(
                "coefficients are {rows}x{cols} but got {} scales, {} freqs, {} coi samples",
                scales.len(),
                freqs.len(),
                coi.len()
            )));
        }
        Ok(Self {
            coefficients,
            scales,
            freqs,
            coi,
            spectrum: Vec::new(),
            spectrum_freqs: Vec::new(),
            dt,
        })
    }

    /// Returns the complex wavelet coefficients `(n_scales, n_times)`.
    pub fn coefficients(&self) -> &Array2<Complex64> {
        &self.coefficients
    }

    /// Consumes the result and returns the coefficient field.
    pub fn into_coefficients(self) -> Array2<Complex64> {
        self.coefficients
    }

    /// Returns the scale values.
    pub fn scales(&self) -> &[f64] {
        &self.scales
    }

    /// Returns the Fourier frequency of each scale in Hz.
    pub fn freqs(&self) -> &[f64] {
        &self.freqs
    }

    /// Returns the Fourier-equivalent period of each scale in seconds.
    pub fn periods(&self) -> Vec<f64> {
        self.freqs.iter().map(|&f| 1.0 / f).collect()
    }

    /// Returns the cone of influence per time sample (seconds).
    pub fn coi(&self) -> &[f64] {
        &self.coi
    }

    /// Returns the normalised positive-frequency FFT of the input.
    pub fn spectrum(&self) -> &[Complex64] {
        &self.spectrum
    }

    /// Returns the frequencies (Hz) of [`CwtResult::spectrum`].
    pub fn spectrum_freqs(&self) -> &[f64] {
        &self.spectrum_freqs
    }

    /// Returns the time step used.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Returns the number of scales.
    pub fn n_scales(&self) -> usize {
        self.scales.len()
    }

    /// Returns the number of time samples.
    pub fn n_times(&self) -> usize {
        self.coi.len()
    }

    /// Computes the wavelet power `|W(s,t)|^2`.
    pub fn power(&self) -> Array2<f64> {
        self.coefficients.mapv(|c| c.norm_sqr())
    }
}

/// Morlet wavelet transform provider.
#[derive(Clone, Copy, Debug, Default)]
pub struct MorletCwt;

impl WaveletTransform for MorletCwt {
    /// Computes the Continuous Wavelet Transform using the Morlet wavelet.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`WaveletError::InvalidConfig`] | invalid configuration parameters |
    /// | [`WaveletError::InvalidFrequency`] | non-positive entry in the frequency grid |
    /// | [`WaveletError::SeriesTooShort`] | series has fewer than 4 observations |
    #[tracing::instrument(skip_all, fields(n = series.len()))]
    fn transform(&self, series: &TimeSeries, config: &CwtConfig) -> Result<CwtResult, WaveletError> {
        config.validate()?;

        let data = series.as_slice();
        let n = data.len();
        if n < MIN_LEN {
            return Err(WaveletError::SeriesTooShort {
                len: n,
                min: MIN_LEN,
            });
        }

        let npad = n.next_power_of_two();
        let mut signal_fft: Vec<Complex64> = data
            .iter()
            .map(|&x| Complex64::new(x, 0.0))
            .chain(std::iter::repeat_n(Complex64::new(0.0, 0.0), npad - n))
            .collect();

        let mut planner = FftPlanner::new();
        let fft_forward = planner.plan_fft_forward(npad);
        let fft_inverse = planner.plan_fft_inverse(npad);
        fft_forward.process(&mut signal_fft);

        let dt = config.dt;
        let omega0 = config.omega0;
        let lambda = fourier_factor(omega0);

        let scales = match &config.freqs {
            Some(freqs) => freqs.iter().map(|&f| 1.0 / (lambda * f)).collect(),
            None => {
                let s0 = config.s0.unwrap_or(2.0 * dt);
                build_scales(n, dt, s0, config.dj, config.j_max)
            }
        };
        debug!(n_scales = scales.len(), npad, "transforming");

        let k = build_wavenumbers(npad, dt);
        let norm = 1.0 / npad as f64;
        let mut coefficients = Array2::<Complex64>::zeros((scales.len(), n));
        let mut product = vec![Complex64::new(0.0, 0.0); npad];

        for (mut row, &scale) in coefficients.rows_mut().into_iter().zip(&scales) {
            let daughter = morlet_daughter(&k, scale, omega0, dt);
            for ((p, &s), &d) in product.iter_mut().zip(&signal_fft).zip(&daughter) {
                *p = s * d;
            }
            fft_inverse.process(&mut product);
            for (w, &c) in row.iter_mut().zip(&product[..n]) {
                *w = c * norm;
            }
        }

        let freqs: Vec<f64> = scales.iter().map(|&s| 1.0 / (lambda * s)).collect();
        let coi = compute_coi(n, dt, omega0);

        let half = npad / 2;
        let spectrum_norm = 1.0 / (npad as f64).sqrt();
        let spectrum: Vec<Complex64> = signal_fft
            .get(1..half)
            .unwrap_or_default()
            .iter()
            .map(|&c| c * spectrum_norm)
            .collect();
        let spectrum_freqs: Vec<f64> = (1..half)
            .map(|i| i as f64 / (npad as f64 * dt))
            .collect();

        Ok(CwtResult {
            coefficients,
            scales,
            freqs,
            coi,
            spectrum,
            spectrum_freqs,
            dt,
        })
    }
}

/// Morlet Fourier factor: ratio of Fourier period to wavelet scale.
pub fn fourier_factor(omega0: f64) -> f64 {
    4.0 * PI / (omega0 + (2.0 + omega0 * omega0).sqrt())
}

/// Builds the geometric scale array `s0 * 2^(j * dj)` for `j = 0..=J`.
fn build_scales(n: usize, dt: f64, s0: f64, dj: f64, j_max: Option<usize>) -> Vec<f64> {
    let j_count = match j_max {
        Some(j) => j,
        None => {
            let val = ((n as f64) * dt / s0).log2() / dj;
            val.max(0.0).floor() as usize
        }
    };
    (0..=j_count)
        .map(|j| s0 * 2.0_f64.powf(j as f64 * dj))
        .collect()
}

/// Builds the angular wavenumber array for the FFT grid.
///
/// Positive frequencies for `i = 0..=npad/2`, negative for `i = npad/2+1..npad`.
fn build_wavenumbers(npad: usize, dt: f64) -> Vec<f64> {
    let df = 2.0 * PI / (npad as f64 * dt);
    (0..npad)
        .map(|i| {
            if i <= npad / 2 {
                i as f64 * df
            } else {
                -((npad - i) as f64) * df
            }
        })
        .collect()
}

/// Builds the Morlet daughter in the frequency domain.
///
/// Zero for non-positive wavenumbers.
fn morlet_daughter(k: &[f64], scale: f64, omega0: f64, dt: f64) -> Vec<Complex64> {
    let norm = (2.0 * PI * scale / dt).sqrt() * PI.powf(-0.25);
    k.iter()
        .map(|&ki| {
            if ki > 0.0 {
                let exponent = -0.5 * (scale * ki - omega0).powi(2);
                Complex64::new(norm * exponent.exp(), 0.0)
            } else {
                Complex64::new(0.0, 0.0)
            }
        })
        .collect()
}

/// Cone of influence (e-folding period in seconds) for each time sample.
///
/// Distance to the nearer edge is measured from the record midpoint, so the
/// first and last samples sit half a sample inside the edge.
fn compute_coi(n: usize, dt: f64, omega0: f64) -> Vec<f64> {
    let coi_factor = fourier_factor(omega0) / 2.0_f64.sqrt();
    let half = n as f64 / 2.0;
    let mid = (n as f64 - 1.0) / 2.0;
    (0..n)
        .map(|t| coi_factor * dt * (half - (t as f64 - mid).abs()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn sine(freq: f64, dt: f64, n: usize) -> TimeSeries {
        let data = (0..n)
            .map(|i| (2.0 * PI * freq * i as f64 * dt).sin())
            .collect();
        TimeSeries::new(data).unwrap()
    }

    fn linspace_desc(hi: f64, lo: f64, n: usize) -> Vec<f64> {
        let step = (hi - lo) / (n - 1) as f64;
        (0..n).map(|i| hi - step * i as f64).collect()
    }

    #[test]
    fn config_defaults() {
        let config = CwtConfig::new();
        assert_abs_diff_eq!(config.omega0(), 6.0);
        assert_abs_diff_eq!(config.dt(), 1.0);
        assert_abs_diff_eq!(config.dj(), 1.0 / 12.0);
        assert!(config.s0().is_none());
        assert!(config.j_max().is_none());
        assert!(config.freqs().is_none());
    }

    #[test]
    fn config_builder() {
        let config = CwtConfig::new()
            .with_omega0(8.0)
            .with_dt(0.5)
            .with_dj(0.125)
            .with_s0(1.0)
            .with_j_max(10)
            .with_freqs(vec![2.0, 1.0]);

        assert_abs_diff_eq!(config.omega0(), 8.0);
        assert_abs_diff_eq!(config.dt(), 0.5);
        assert_abs_diff_eq!(config.dj(), 0.125);
        assert_eq!(config.s0(), Some(1.0));
        assert_eq!(config.j_max(), Some(10));
        assert_eq!(config.freqs(), Some(&[2.0, 1.0][..]));
    }

    #[test]
    fn invalid_parameters_rejected() {
        let ts = sine(1.0, 0.1, 64);
        let bad = [
            CwtConfig::new().with_omega0(4.0),
            CwtConfig::new().with_dt(0.0),
            CwtConfig::new().with_dj(-0.1),
            CwtConfig::new().with_s0(0.0),
            CwtConfig::new().with_freqs(Vec::new()),
        ];
        for config in &bad {
            let err = MorletCwt.transform(&ts, config).unwrap_err();
            assert!(matches!(err, WaveletError::InvalidConfig(_)), "{config:?}");
        }
    }

    #[test]
    fn invalid_frequency_reported_with_index() {
        let ts = sine(1.0, 0.1, 64);
        let config = CwtConfig::new().with_freqs(vec![3.0, 2.0, 0.0]);
        let err = MorletCwt.transform(&ts, &config).unwrap_err();
        assert!(matches!(
            err,
            WaveletError::InvalidFrequency { index: 2, .. }
        ));
    }

    #[test]
    fn series_too_short() {
        let ts = TimeSeries::new(vec![1.0, 2.0, 3.0]).unwrap();
        let err = MorletCwt.transform(&ts, &CwtConfig::new()).unwrap_err();
        assert!(matches!(
            err,
            WaveletError::SeriesTooShort { len: 3, min: 4 }
        ));
    }

    #[test]
    fn build_scales_geometric() {
        let scales = build_scales(128, 1.0, 2.0, 0.25, Some(8));
        assert_eq!(scales.len(), 9);
        for (j, &scale) in scales.iter().enumerate() {
            assert_relative_eq!(scale, 2.0 * 2.0_f64.powf(j as f64 * 0.25), epsilon = 1e-12);
        }
    }

    #[test]
    fn build_scales_auto_count() {
        // log2(128 / 2) / 0.5 = 12 -> 13 scales
        let scales = build_scales(128, 1.0, 2.0, 0.5, None);
        assert_eq!(scales.len(), 13);
    }

    #[test]
    fn wavenumbers_ordering() {
        let npad = 16;
        let k = build_wavenumbers(npad, 1.0);
        assert_eq!(k.len(), npad);
        assert_abs_diff_eq!(k[0], 0.0);
        assert_relative_eq!(k[npad / 2], PI, epsilon = 1e-12);
        for &ki in &k[1..=npad / 2] {
            assert!(ki > 0.0);
        }
        for &ki in &k[npad / 2 + 1..] {
            assert!(ki < 0.0);
        }
        assert_relative_eq!(k[npad - 1], -2.0 * PI / npad as f64, epsilon = 1e-12);
    }

    #[test]
    fn morlet_daughter_vanishes_off_positive_axis() {
        let k = build_wavenumbers(16, 1.0);
        let daughter = morlet_daughter(&k, 4.0, 6.0, 1.0);
        assert!(daughter[0].norm() < f64::EPSILON);
        for d in &daughter[16 / 2 + 1..] {
            assert!(d.norm() < f64::EPSILON);
        }
    }

    #[test]
    fn coi_symmetric_and_half_sample_at_edges() {
        let n = 64;
        let coi = compute_coi(n, 0.5, 6.0);
        assert_eq!(coi.len(), n);
        for t in 0..n {
            assert_relative_eq!(coi[t], coi[n - 1 - t], epsilon = 1e-12);
        }
        let factor = fourier_factor(6.0) / 2.0_f64.sqrt();
        assert_relative_eq!(coi[0], factor * 0.5 * 0.5, epsilon = 1e-12);
        assert!(coi[n / 2] > coi[1]);
    }

    #[test]
    fn fourier_factor_morlet6() {
        assert_relative_eq!(fourier_factor(6.0), 1.0330, epsilon = 1e-4);
    }

    #[test]
    fn output_dimensions_on_ladder() {
        let n = 128;
        let ts = sine(0.1, 1.0, n);
        let result = MorletCwt.transform(&ts, &CwtConfig::new()).unwrap();

        assert_eq!(result.n_times(), n);
        assert_eq!(result.coefficients().dim(), (result.n_scales(), n));
        assert_eq!(result.freqs().len(), result.n_scales());
        // Ladder scales increase, so frequencies decrease.
        for pair in result.freqs().windows(2) {
            assert!(pair[1] < pair[0]);
        }
    }

    #[test]
    fn explicit_grid_is_realised_exactly() {
        let dt = 0.01;
        let grid = linspace_desc(10.0, 1.0, 19);
        let ts = sine(5.0, dt, 256);
        let config = CwtConfig::new().with_dt(dt).with_freqs(grid.clone());
        let result = MorletCwt.transform(&ts, &config).unwrap();

        assert_eq!(result.n_scales(), grid.len());
        for (&got, &want) in result.freqs().iter().zip(&grid) {
            assert_relative_eq!(got, want, max_relative = 1e-12);
        }
        for (&s, &f) in result.scales().iter().zip(&grid) {
            assert_relative_eq!(s, 1.0 / (fourier_factor(6.0) * f), max_relative = 1e-12);
        }
    }

    #[test]
    fn scale_normalised_power_peaks_at_signal_frequency() {
        let dt = 0.01;
        let grid = linspace_desc(10.0, 1.0, 19);
        let ts = sine(5.0, dt, 512);
        let config = CwtConfig::new().with_dt(dt).with_freqs(grid.clone());
        let result = MorletCwt.transform(&ts, &config).unwrap();

        let power = result.power();
        let (peak_idx, _) = power
            .rows()
            .into_iter()
            .zip(result.scales())
            .map(|(row, &s)| row.mean().unwrap_or(0.0) / s)
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .unwrap();
        assert!(
            (grid[peak_idx] - 5.0).abs() <= 0.5,
            "peak at {} Hz",
            grid[peak_idx]
        );
    }

    #[test]
    fn spectrum_covers_positive_frequencies() {
        let dt = 0.01;
        let ts = sine(5.0, dt, 100);
        let result = MorletCwt.transform(&ts, &CwtConfig::new().with_dt(dt)).unwrap();
        // npad = 128 -> bins 1..64
        assert_eq!(result.spectrum().len(), 63);
        assert_eq!(result.spectrum_freqs().len(), 63);
        assert_relative_eq!(result.spectrum_freqs()[0], 1.0 / 1.28, epsilon = 1e-12);
    }

    #[test]
    fn from_parts_checks_shape() {
        let coefficients = Array2::<Complex64>::zeros((2, 3));
        let ok = CwtResult::from_parts(
            coefficients.clone(),
            vec![1.0, 2.0],
            vec![1.0, 0.5],
            vec![0.0; 3],
            1.0,
        );
        assert!(ok.is_ok());
        let err = CwtResult::from_parts(coefficients, vec![1.0], vec![1.0], vec![0.0; 3], 1.0);
        assert!(matches!(err, Err(WaveletError::InvalidConfig(_))));
    }

    #[test]
    fn transform_is_deterministic() {
        let ts = sine(3.0, 0.02, 200);
        let config = CwtConfig::new().with_dt(0.02).with_freqs(vec![6.0, 3.0, 1.5]);
        let a = MorletCwt.transform(&ts, &config).unwrap();
        let b = MorletCwt.transform(&ts, &config).unwrap();
        assert_eq!(a.coefficients(), b.coefficients());
    }

    #[test]
    fn result_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CwtResult>();
        assert_impl::<CwtConfig>();
    }
}
