use std::f64::consts::PI;

use approx::assert_abs_diff_eq;
use ndarray::Array2;
use num_complex::Complex64;
use xwt_smooth::{SmoothConfig, angular_frequencies, gaussian_filter, smooth_field};

/// Deterministic pseudo-noise in [-1, 1] (simple LCG).
fn noise(len: usize, seed: u64) -> Vec<f64> {
    let mut lcg = seed;
    (0..len)
        .map(|_| {
            lcg = lcg.wrapping_mul(6364136223846793005).wrapping_add(1);
            ((lcg >> 33) as f64) / (u32::MAX as f64) * 2.0 - 1.0
        })
        .collect()
}

fn noisy_field(rows: usize, cols: usize, seed: u64) -> Array2<f64> {
    Array2::from_shape_vec((rows, cols), noise(rows * cols, seed)).unwrap()
}

#[test]
fn identity_config_returns_real_input() {
    let field = noisy_field(6, 100, 7);
    let scales = [0.02, 0.04, 0.08, 0.16, 0.32, 0.64];
    let out = smooth_field(field.clone(), &scales, 0.01, &SmoothConfig::identity()).unwrap();
    for (a, b) in out.iter().zip(field.iter()) {
        assert_abs_diff_eq!(*a, *b, epsilon = 1e-12);
    }
}

#[test]
fn identity_config_returns_complex_input() {
    let re = noise(4 * 50, 1);
    let im = noise(4 * 50, 2);
    let field = Array2::from_shape_fn((4, 50), |(i, t)| Complex64::new(re[i * 50 + t], im[i * 50 + t]));
    let out = smooth_field(field.clone(), &[1.0, 2.0, 3.0, 4.0], 0.5, &SmoothConfig::identity())
        .unwrap();
    for (a, b) in out.iter().zip(field.iter()) {
        assert_abs_diff_eq!((a - b).norm(), 0.0, epsilon = 1e-12);
    }
}

#[test]
fn negative_frequency_bin_gets_its_own_attenuation() {
    // A tone sitting exactly in the last FFT bin (the smallest negative
    // frequency) must be scaled by the filter value for that frequency.
    let n = 64;
    let omega = angular_frequencies(n);
    let w = omega[n - 1];
    let field = Array2::from_shape_fn((1, n), |(_, t)| Complex64::from_polar(1.0, w * t as f64));

    let (scale, dt, nt) = (0.04, 0.01, 0.25);
    let expected = gaussian_filter(&[w], scale / dt, nt)[0];
    assert!(expected > 0.9);

    let out = smooth_field(field, &[scale], dt, &SmoothConfig::new(1, nt)).unwrap();
    for v in out.row(0) {
        assert_abs_diff_eq!(v.norm(), expected, epsilon = 1e-9);
    }
}

#[test]
fn nyquist_tone_is_suppressed() {
    let n = 64;
    let field = Array2::from_shape_fn((1, n), |(_, t)| if t % 2 == 0 { 1.0 } else { -1.0 });
    let out = smooth_field(field, &[0.04], 0.01, &SmoothConfig::new(1, 0.25)).unwrap();
    // exp(-0.25 * 16 * pi^2) ~ 7e-18
    for &v in out.row(0) {
        assert_abs_diff_eq!(v, 0.0, epsilon = 1e-12);
    }
}

#[test]
fn smoothing_reduces_noise_variance() {
    let field = noisy_field(8, 256, 42);
    let scales: Vec<f64> = (0..8).map(|k| 0.05 * 2f64.powf(k as f64 / 4.0)).collect();
    let out = smooth_field(field.clone(), &scales, 0.01, &SmoothConfig::new(3, 0.25)).unwrap();

    let var = |a: &Array2<f64>| {
        let interior = a.slice(ndarray::s![2..6, 32..224]);
        let mean = interior.mean().unwrap();
        interior.mapv(|v| (v - mean).powi(2)).mean().unwrap()
    };
    assert!(var(&out) < 0.5 * var(&field));
}

#[test]
fn complex_smoothing_is_linear_in_real_and_imaginary_parts() {
    let re = noisy_field(5, 90, 3);
    let im = noisy_field(5, 90, 4);
    let scales = [0.03, 0.05, 0.08, 0.13, 0.21];
    let config = SmoothConfig::new(3, 0.5);
    let dt = 0.01;

    let complex = Array2::from_shape_fn((5, 90), |idx| Complex64::new(re[idx], im[idx]));
    let out = smooth_field(complex, &scales, dt, &config).unwrap();
    let out_re = smooth_field(re, &scales, dt, &config).unwrap();
    let out_im = smooth_field(im, &scales, dt, &config).unwrap();

    for ((c, &r), &i) in out.iter().zip(out_re.iter()).zip(out_im.iter()) {
        assert_abs_diff_eq!(c.re, r, epsilon = 1e-12);
        assert_abs_diff_eq!(c.im, i, epsilon = 1e-12);
    }
}

#[test]
fn smoothing_is_deterministic() {
    let field = noisy_field(4, 123, 9);
    let scales = [0.1, 0.2, 0.3, 0.4];
    let config = SmoothConfig::default();
    let a = smooth_field(field.clone(), &scales, 0.01, &config).unwrap();
    let b = smooth_field(field, &scales, 0.01, &config).unwrap();
    assert_eq!(a, b);
}

#[test]
fn slow_signal_survives_time_smoothing() {
    // A 1 Hz sine sampled at 100 Hz is far below the cutoff of a small scale.
    let n = 400;
    let dt = 0.01;
    let field = Array2::from_shape_fn((1, n), |(_, t)| (2.0 * PI * t as f64 * dt).sin());
    let out = smooth_field(field.clone(), &[0.02], dt, &SmoothConfig::new(1, 0.25)).unwrap();
    for t in 50..350 {
        assert_abs_diff_eq!(out[(0, t)], field[(0, t)], epsilon = 5e-3);
    }
}
