//! Cross-spectrum estimation between a reference and a current trace.

use std::f64::consts::PI;

use ndarray::{Array2, Zip};
use num_complex::Complex64;
use tracing::{debug, warn};
use xwt_smooth::{SmoothConfig, smooth_field};
use xwt_wavelet::{CwtConfig, MorletCwt, TimeSeries, WaveletTransform};

use crate::coi::remap_coi;
use crate::config::{MORLET_OMEGA0, XspecConfig};
use crate::error::XspecError;
use crate::result::CrossSpectrum;

/// Computes the wavelet cross-spectrum of two traces with the Morlet CWT.
///
/// See [`cross_spectrum_with`] for the algorithm and error conditions.
pub fn cross_spectrum(
    reference: &[f64],
    current: &[f64],
    config: &XspecConfig,
) -> Result<CrossSpectrum, XspecError> {
    cross_spectrum_with(&MorletCwt, reference, current, config)
}

/// Computes the wavelet cross-spectrum using a caller-supplied transform.
///
/// Both traces are transformed on the descending frequency grid of
/// `config`. The scale-normalised powers and cross-spectrum are smoothed
/// independently, then combined into spectrum, phase, coherence and time
/// shift. The amplitude field is taken from the unsmoothed cross-spectrum.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`XspecError::InvalidParameter`] | any parameter of `config` out of range |
/// | [`XspecError::LengthMismatch`] | `reference.len() != current.len()` |
/// | [`XspecError::Wavelet`] | trace too short, non-finite samples, transform failure |
/// | [`XspecError::TransformShape`] | transform output does not match the grid |
/// | [`XspecError::Smooth`] | smoother rejected the transform output |
#[tracing::instrument(skip_all, fields(n = reference.len(), nptsfreq = config.nptsfreq()))]
pub fn cross_spectrum_with<W: WaveletTransform>(
    transform: &W,
    reference: &[f64],
    current: &[f64],
    config: &XspecConfig,
) -> Result<CrossSpectrum, XspecError> {
    config.validate()?;
    if reference.len() != current.len() {
        return Err(XspecError::LengthMismatch {
            reference: reference.len(),
            current: current.len(),
        });
    }
    let reference = TimeSeries::from_slice(reference)?;
    let current = TimeSeries::from_slice(current)?;

    let dt = config.dt();
    let cwt_config = CwtConfig::new()
        .with_omega0(MORLET_OMEGA0)
        .with_dt(dt)
        .with_dj(config.dj())
        .with_s0(2.0 * dt)
        .with_freqs(config.frequency_grid());

    let cwt_ref = transform.transform(&reference, &cwt_config)?;
    let cwt_cur = transform.transform(&current, &cwt_config)?;

    let expected = (config.nptsfreq(), reference.len());
    for got in [cwt_ref.coefficients().dim(), cwt_cur.coefficients().dim()] {
        if got != expected {
            return Err(XspecError::TransformShape { expected, got });
        }
    }
    let scales = cwt_ref.scales().to_vec();
    let freqs = cwt_ref.freqs().to_vec();
    let coi_periods = cwt_ref.coi().to_vec();
    let inv_scales: Vec<f64> = scales.iter().map(|&s| 1.0 / s).collect();

    let power_ref = weight_rows(cwt_ref.power(), &inv_scales);
    let power_cur = weight_rows(cwt_cur.power(), &inv_scales);

    let w_ref = cwt_ref.into_coefficients();
    let w_cur = cwt_cur.into_coefficients();
    let mut cross = Array2::<Complex64>::zeros(w_ref.raw_dim());
    Zip::from(&mut cross)
        .and(&w_ref)
        .and(&w_cur)
        .for_each(|x, &a, &b| *x = a * b.conj());
    let amplitude = cross.mapv(|c| c.norm());
    let cross = weight_rows(cross, &inv_scales);

    let smooth_config = SmoothConfig::new(config.ns(), config.nt());
    let ((cfs1, cfs2), smoothed) = rayon::join(
        || {
            rayon::join(
                || smooth_field(power_ref, &scales, dt, &smooth_config),
                || smooth_field(power_cur, &scales, dt, &smooth_config),
            )
        },
        || smooth_field(cross, &scales, dt, &smooth_config),
    );
    let (cfs1, cfs2, smoothed) = (cfs1?, cfs2?, smoothed?);

    let spectrum = Zip::from(&smoothed)
        .and(&cfs1)
        .and(&cfs2)
        .map_collect(|&s, &p1, &p2| s / (p1.sqrt() * p2.sqrt()));
    let phase = spectrum.mapv(wrapped_phase);
    let coherence = Zip::from(&smoothed)
        .and(&cfs1)
        .and(&cfs2)
        .map_collect(|s, &p1, &p2| s.norm_sqr() / (p1 * p2));

    let mut time_shift = phase.clone();
    for (mut row, &f) in time_shift.rows_mut().into_iter().zip(&freqs) {
        let omega = 2.0 * PI * f;
        row.mapv_inplace(|a| a / omega);
    }

    let non_finite = coherence.iter().filter(|v| !v.is_finite()).count();
    if non_finite > 0 {
        warn!(
            non_finite,
            total = coherence.len(),
            "coherence has non-finite entries where smoothed power vanishes"
        );
    }

    let coi = remap_coi(&coi_periods, freqs[0]);
    debug!(
        n_freqs = freqs.len(),
        n_times = coi.len(),
        "cross-spectrum complete"
    );

    Ok(CrossSpectrum {
        amplitude,
        spectrum,
        phase,
        coherence,
        time_shift,
        freqs,
        coi,
        coi_periods,
        scales,
        dt,
    })
}

/// Multiplies every row of `field` by its weight.
fn weight_rows<T>(mut field: Array2<T>, weights: &[f64]) -> Array2<T>
where
    T: Copy + std::ops::Mul<f64, Output = T>,
{
    for (mut row, &w) in field.rows_mut().into_iter().zip(weights) {
        row.mapv_inplace(|v| v * w);
    }
    field
}

/// Argument of `z` folded into `(-pi, pi]`.
fn wrapped_phase(z: Complex64) -> f64 {
    let a = z.arg();
    if a <= -PI { a + 2.0 * PI } else { a }
}
