//! Cone-of-influence remapping onto the analysis frequency grid.

use ndarray::Array2;

/// Value of a remapped COI sample whose cone lies entirely above the grid.
pub const COI_SENTINEL: f64 = -1.0;

/// Remaps COI periods into the plotting convention of a descending frequency axis.
///
/// For each time sample, a COI value below `top_freq` becomes
/// `top_freq - coi`; anything else becomes [`COI_SENTINEL`], which pushes the
/// curve off a chart whose frequency axis starts at `top_freq`.
///
/// # Example
///
/// ```
/// use xwt_xspec::{COI_SENTINEL, remap_coi};
///
/// let remapped = remap_coi(&[0.5, 3.0, 12.0], 10.0);
/// assert_eq!(remapped, vec![9.5, 7.0, COI_SENTINEL]);
/// ```
pub fn remap_coi(coi: &[f64], top_freq: f64) -> Vec<f64> {
    coi.iter()
        .map(|&c| if c < top_freq { top_freq - c } else { COI_SENTINEL })
        .collect()
}

/// Per-cell validity mask, shape `(freqs.len(), coi.len())`.
///
/// A cell is `true` when the Fourier period `1/f` fits inside the cone at
/// that time sample (`1/f <= coi[t]`), i.e. the estimate is free of edge
/// effects.
pub fn coi_mask(coi: &[f64], freqs: &[f64]) -> Array2<bool> {
    Array2::from_shape_fn((freqs.len(), coi.len()), |(k, t)| 1.0 / freqs[k] <= coi[t])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remap_below_and_above_top() {
        let out = remap_coi(&[0.0, 1.0, 4.0, 5.0, 6.0], 5.0);
        assert_eq!(out, vec![5.0, 4.0, 1.0, COI_SENTINEL, COI_SENTINEL]);
    }

    #[test]
    fn remap_preserves_length() {
        let coi = vec![0.25; 17];
        assert_eq!(remap_coi(&coi, 2.0).len(), 17);
    }

    #[test]
    fn mask_grows_towards_the_middle() {
        // Periods 0.1 s, 0.5 s, 1 s against a tent-shaped cone.
        let freqs = [10.0, 2.0, 1.0];
        let coi = [0.05, 0.2, 0.6, 1.2, 0.6, 0.2, 0.05];
        let mask = coi_mask(&coi, &freqs);
        assert_eq!(mask.dim(), (3, 7));

        let row = |k: usize| mask.row(k).to_vec();
        assert_eq!(row(0), [false, true, true, true, true, true, false]);
        assert_eq!(row(1), [false, false, true, true, true, false, false]);
        assert_eq!(row(2), [false, false, false, true, false, false, false]);
    }

    #[test]
    fn mask_boundary_is_inclusive() {
        let mask = coi_mask(&[0.5], &[2.0]);
        assert!(mask[(0, 0)]);
    }
}
