//! Angular-frequency axis and Gaussian filter for Fourier-domain smoothing.

use std::f64::consts::PI;

/// Angular frequencies (radians per sample) of an `npad`-point FFT, in bin order.
///
/// Bin `i` holds `2*pi*i/npad` for `i <= npad/2` (DC, positive frequencies,
/// Nyquist) and `-2*pi*(npad-i)/npad` above that, so the axis runs from the
/// most negative frequency back up to the bin next to DC. This is the layout
/// `rustfft` produces; filters built on any other ordering land on the wrong
/// bins.
///
/// # Example
///
/// ```
/// use std::f64::consts::PI;
/// use xwt_smooth::angular_frequencies;
///
/// let omega = angular_frequencies(8);
/// let step = 2.0 * PI / 8.0;
/// let bins: Vec<f64> = omega.iter().map(|w| (w / step).round()).collect();
/// assert_eq!(bins, [0.0, 1.0, 2.0, 3.0, 4.0, -3.0, -2.0, -1.0]);
/// ```
pub fn angular_frequencies(npad: usize) -> Vec<f64> {
    let step = 2.0 * PI / npad as f64;
    (0..npad)
        .map(|i| {
            if i <= npad / 2 {
                i as f64 * step
            } else {
                -((npad - i) as f64) * step
            }
        })
        .collect()
}

/// Gaussian low-pass `exp(-nt * norm_scale^2 * omega^2)` evaluated on `omega`.
///
/// `norm_scale` is the wavelet scale divided by the sampling interval, since
/// `omega` is expressed per sample. `nt = 0` yields an all-pass filter.
pub fn gaussian_filter(omega: &[f64], norm_scale: f64, nt: f64) -> Vec<f64> {
    let k = nt * norm_scale * norm_scale;
    omega.iter().map(|&w| (-k * w * w).exp()).collect()
}
