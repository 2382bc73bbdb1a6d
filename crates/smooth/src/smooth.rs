//! Public smoothing entry point.

use ndarray::Array2;
use tracing::debug;

use crate::config::SmoothConfig;
use crate::error::SmoothError;
use crate::scale::boxcar_scales;
use crate::time::smooth_time;
use crate::value::Smoothable;

/// Smooths a `(n_scales, n_times)` field in time, then across scales.
///
/// `scales` holds one wavelet scale per row, in seconds, and `dt` is the
/// sampling interval. The field is consumed and used as the working buffer.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`SmoothError::ScaleCountMismatch`] | `scales.len() != field.nrows()` |
/// | [`SmoothError::InvalidWindow`] | `config.ns() == 0` |
/// | [`SmoothError::InvalidWidth`] | `config.nt()` negative or not finite |
/// | [`SmoothError::InvalidDt`] | `dt` not a positive finite number |
#[tracing::instrument(skip_all, fields(rows = field.nrows(), cols = field.ncols()))]
pub fn smooth_field<T: Smoothable>(
    mut field: Array2<T>,
    scales: &[f64],
    dt: f64,
    config: &SmoothConfig,
) -> Result<Array2<T>, SmoothError> {
    config.validate()?;
    if !dt.is_finite() || dt <= 0.0 {
        return Err(SmoothError::InvalidDt { dt });
    }
    if scales.len() != field.nrows() {
        return Err(SmoothError::ScaleCountMismatch {
            rows: field.nrows(),
            scales: scales.len(),
        });
    }

    smooth_time(&mut field, scales, dt, config.nt());
    let smoothed = boxcar_scales(&field, config.ns());
    debug!(ns = config.ns(), nt = config.nt(), "field smoothed");
    Ok(smoothed)
}
