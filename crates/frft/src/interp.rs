//! Band-limited 2x upsampling.

use std::f64::consts::PI;

use frft_fft::{Complex64, FftOptions, fftconvolve};

use crate::FrftError;

/// Normalized sinc, `sin(pi x) / (pi x)` with `sinc(0) = 1`.
#[must_use]
pub fn sinc(x: f64) -> f64 {
    if x == 0.0 {
        1.0
    } else {
        let arg = PI * x;
        arg.sin() / arg
    }
}

/// Upsample `x` (length N) to `2N - 1` samples.
///
/// Even output indices reproduce the input; odd indices are filled by
/// convolving the zero-stuffed signal with `sinc(k / 2)` over
/// `k in [-(2N-3), 2N-3]` and keeping the centered `2N - 1` window.
/// A single sample is returned unchanged.
pub fn sincinterp(x: &[Complex64], options: &FftOptions) -> Result<Vec<Complex64>, FrftError> {
    let n = x.len();
    if n == 0 {
        return Err(FrftError::EmptySignal);
    }
    if n == 1 {
        return Ok(x.to_vec());
    }

    let mut stuffed = vec![Complex64::new(0.0, 0.0); 2 * n - 1];
    for (slot, &value) in stuffed.iter_mut().step_by(2).zip(x) {
        *slot = value;
    }

    let reach = (2 * n - 3) as isize;
    let kernel: Vec<Complex64> = (-reach..=reach)
        .map(|k| Complex64::new(sinc(k as f64 / 2.0), 0.0))
        .collect();

    let full = fftconvolve(&stuffed, &kernel, options)?;
    Ok(full[2 * n - 3..4 * n - 4].to_vec())
}
