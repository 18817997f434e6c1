use std::f64::consts::FRAC_PI_4;

use frft_fft::Complex64;

/// Unit-modulus phase `exp(-i (1 - a) pi / 4)` for a reduced order `a`.
#[must_use]
pub fn global_phase(reduced_order: f64) -> Complex64 {
    Complex64::from_polar(1.0, -(1.0 - reduced_order) * FRAC_PI_4)
}

/// Apply the global phase and cut the kernel output back to `len` samples.
#[must_use]
pub fn normalize(mut samples: Vec<Complex64>, reduced_order: f64, len: usize) -> Vec<Complex64> {
    samples.truncate(len);
    debug_assert_eq!(samples.len(), len);
    let phase = global_phase(reduced_order);
    for value in &mut samples {
        *value *= phase;
    }
    samples
}
