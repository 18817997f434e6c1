//! Three-chirp evaluation of the fractional kernel.
//!
//! For `a` in `[0.5, 1.5]` the continuous kernel factors into a chirp
//! multiplication, a chirp convolution and a second chirp multiplication.
//! Sampling at twice the Nyquist rate (after sinc interpolation) keeps the
//! chirps unaliased, and the final decimation returns to N samples.

use std::f64::consts::{FRAC_PI_2, PI};

use frft_fft::{Complex64, FftOptions, fftconvolve};

use crate::FrftError;
use crate::interp::sincinterp;

/// Orders with `|sin(alpha)|` below this are rejected rather than divided by.
pub const DEGENERATE_SIN_THRESHOLD: f64 = 1e-10;

/// `exp(i * coefficient * k^2)` for `k in [-reach, reach]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chirp {
    pub coefficient: f64,
    pub reach: usize,
}

impl Chirp {
    #[must_use]
    pub const fn new(coefficient: f64, reach: usize) -> Self {
        Self { coefficient, reach }
    }

    #[must_use]
    pub fn samples(&self) -> Vec<Complex64> {
        let reach = self.reach as isize;
        (-reach..=reach)
            .map(|k| {
                let k = k as f64;
                Complex64::from_polar(1.0, self.coefficient * k * k)
            })
            .collect()
    }
}

/// Kernel output for `order` before the global phase.
///
/// Lengths below two have no kernel to evaluate and are returned unchanged.
pub fn chirp_convolve(
    signal: &[Complex64],
    order: f64,
    options: &FftOptions,
) -> Result<Vec<Complex64>, FrftError> {
    let n = signal.len();
    if n == 0 {
        return Err(FrftError::EmptySignal);
    }
    if n == 1 {
        return Ok(signal.to_vec());
    }

    let alpha = order * FRAC_PI_2;
    let sin_alpha = alpha.sin();
    // Negated so NaN orders are caught too.
    if !(sin_alpha.abs() >= DEGENERATE_SIN_THRESHOLD) {
        return Err(FrftError::DegenerateOrder { order, sin_alpha });
    }
    let tan_half = (alpha / 2.0).tan();
    let nf = n as f64;

    let interpolated = sincinterp(signal, options)?;
    let zero = Complex64::new(0.0, 0.0);
    let mut buffer = Vec::with_capacity(4 * n - 3);
    buffer.extend(std::iter::repeat_n(zero, n - 1));
    buffer.extend_from_slice(&interpolated);
    buffer.extend(std::iter::repeat_n(zero, n - 1));

    let premultiply = Chirp::new(-PI / nf * tan_half / 4.0, 2 * n - 2).samples();
    debug_assert_eq!(premultiply.len(), buffer.len());
    for (value, chirp) in buffer.iter_mut().zip(&premultiply) {
        *value *= chirp;
    }

    let c = PI / nf / sin_alpha / 4.0;
    let convolver = Chirp::new(c, 4 * n - 4).samples();
    let convolved = fftconvolve(&convolver, &buffer, options)?;

    let scale = (c / PI).sqrt();
    let window = &convolved[4 * n - 4..8 * n - 7];
    let postmultiplied: Vec<Complex64> = window
        .iter()
        .zip(&premultiply)
        .map(|(value, chirp)| value * scale * chirp)
        .collect();

    Ok(postmultiplied
        .into_iter()
        .skip(n - 1)
        .step_by(2)
        .take(n)
        .collect())
}
