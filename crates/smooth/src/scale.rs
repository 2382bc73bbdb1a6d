//! Boxcar smoothing across scales.

use ndarray::{Array2, s};

use crate::value::Smoothable;

/// Moving average of `ns` rows down every column of `field`.
///
/// Output has the input shape and rows outside the field count as zero, the
/// same result as a "same"-size 2-D convolution with an `ns x 1` kernel of
/// weight `1/ns`. The window for output row `i` covers input rows
/// `i + ns/2 - (ns - 1) ..= i + ns/2`, which centres odd windows and leans
/// one row towards larger indices for even ones.
pub(crate) fn boxcar_scales<T: Smoothable>(field: &Array2<T>, ns: usize) -> Array2<T> {
    let (rows, cols) = field.dim();
    if ns <= 1 || rows == 0 {
        return field.clone();
    }
    let offset = ns / 2;
    let weight = 1.0 / ns as f64;

    Array2::from_shape_fn((rows, cols), |(i, t)| {
        let hi = (i + offset).min(rows - 1);
        let lo = (i + offset).saturating_sub(ns - 1);
        field
            .slice(s![lo..=hi, t])
            .iter()
            .fold(T::default(), |acc, &v| acc + v)
            * weight
    })
}
