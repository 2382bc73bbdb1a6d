//! Gaussian smoothing along the time axis, one FFT per scale row.

use ndarray::{Array2, ArrayView1, Zip};
use num_complex::Complex64;
use rustfft::FftPlanner;
use tracing::trace;

use crate::frequency::{angular_frequencies, gaussian_filter};
use crate::value::Smoothable;

/// Smooths every row of `field` in place with a scale-dependent Gaussian.
///
/// Rows are zero-padded to the next power of two before the forward FFT so
/// the circular convolution does not wrap the end of the record onto its
/// start; the inverse result is truncated back to the original length.
///
/// `scales` must have one entry per row.
pub(crate) fn smooth_time<T: Smoothable>(field: &mut Array2<T>, scales: &[f64], dt: f64, nt: f64) {
    let n = field.ncols();
    if n == 0 || field.nrows() == 0 {
        return;
    }
    let npad = n.next_power_of_two();
    let omega = angular_frequencies(npad);

    let mut planner = FftPlanner::<f64>::new();
    let forward = planner.plan_fft_forward(npad);
    let inverse = planner.plan_fft_inverse(npad);
    let norm = 1.0 / npad as f64;
    trace!(n, npad, "time smoothing");

    Zip::from(field.rows_mut())
        .and(ArrayView1::from(scales))
        .par_for_each(|mut row, &scale| {
            let filter = gaussian_filter(&omega, scale / dt, nt);

            let mut buf: Vec<Complex64> = row
                .iter()
                .map(|v| v.to_complex())
                .chain(std::iter::repeat_n(Complex64::new(0.0, 0.0), npad - n))
                .collect();
            forward.process(&mut buf);
            for (b, &f) in buf.iter_mut().zip(&filter) {
                *b *= f;
            }
            inverse.process(&mut buf);

            for (v, &c) in row.iter_mut().zip(&buf[..n]) {
                *v = T::from_complex(c * norm);
            }
        });
}
