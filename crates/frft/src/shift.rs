//! Centering permutation and the unitary DFT steps built on it.
//!
//! The discrete transform of a centered signal needs the sample at index
//! `floor(N/2)` treated as the origin. Gathering through
//! `shift[i] = (i + floor(N/2)) mod N` is exactly `fftshift`, and scattering
//! back is `ifftshift`, so every integer-order step is
//! `ifftshift(dft_ortho(fftshift(f)))`.

use frft_fft::{
    BackendKind, Complex64, FftOptions, Normalization, fft, fftshift_1d, ifft, ifftshift_1d,
};

use crate::FrftError;

/// The centering index map for a signal of length `len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CenteringShift {
    len: usize,
}

impl CenteringShift {
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self { len }
    }

    /// Source index read into position `i` when gathering.
    #[cfg(test)]
    const fn index(self, i: usize) -> usize {
        (i + self.len / 2) % self.len
    }

    /// `out[i] = signal[shift[i]]`
    #[must_use]
    pub fn gather(self, signal: &[Complex64]) -> Vec<Complex64> {
        debug_assert_eq!(signal.len(), self.len);
        fftshift_1d(signal)
    }

    /// `out[shift[i]] = signal[i]`; inverse of [`CenteringShift::gather`].
    #[must_use]
    pub fn scatter(self, signal: &[Complex64]) -> Vec<Complex64> {
        debug_assert_eq!(signal.len(), self.len);
        ifftshift_1d(signal)
    }
}

/// Direction of one integer-order step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DftStep {
    /// Order +1.
    Forward,
    /// Order -1 (equivalently +3).
    Inverse,
}

/// Centered unitary DFT step: gather, orthonormal transform, scatter.
pub fn centered_dft(
    signal: &[Complex64],
    step: DftStep,
    backend: BackendKind,
) -> Result<Vec<Complex64>, FrftError> {
    let shift = CenteringShift::new(signal.len());
    let options = FftOptions::default()
        .with_normalization(Normalization::Ortho)
        .with_backend(backend);
    let gathered = shift.gather(signal);
    let transformed = match step {
        DftStep::Forward => fft(&gathered, &options)?,
        DftStep::Inverse => ifft(&gathered, &options)?,
    };
    Ok(shift.scatter(&transformed))
}

#[cfg(test)]
mod tests {
    use super::{CenteringShift, DftStep, centered_dft};
    use frft_fft::{BackendKind, Complex64};

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    fn ramp(n: usize) -> Vec<Complex64> {
        (0..n).map(|i| c(i as f64, -(i as f64) * 0.5)).collect()
    }

    #[test]
    fn gather_matches_index_map() {
        for n in [1_usize, 2, 5, 8, 9] {
            let shift = CenteringShift::new(n);
            let signal = ramp(n);
            let gathered = shift.gather(&signal);
            for (i, value) in gathered.iter().enumerate() {
                assert_eq!(*value, signal[shift.index(i)], "n={n} i={i}");
            }
        }
    }

    #[test]
    fn scatter_inverts_gather() {
        for n in [1_usize, 4, 7, 10] {
            let shift = CenteringShift::new(n);
            let signal = ramp(n);
            assert_eq!(shift.scatter(&shift.gather(&signal)), signal);
        }
    }

    #[test]
    fn centered_impulse_maps_to_flat_spectrum() {
        let n = 9;
        let mut signal = vec![c(0.0, 0.0); n];
        signal[n / 2] = c(1.0, 0.0);
        let out = centered_dft(&signal, DftStep::Forward, BackendKind::RustFft).expect("dft");
        let expected = 1.0 / (n as f64).sqrt();
        for value in &out {
            assert!((value.re - expected).abs() < 1e-12);
            assert!(value.im.abs() < 1e-12);
        }
    }

    #[test]
    fn forward_then_inverse_restores_signal() {
        let signal = ramp(12);
        let forward = centered_dft(&signal, DftStep::Forward, BackendKind::RustFft).expect("fwd");
        let back = centered_dft(&forward, DftStep::Inverse, BackendKind::RustFft).expect("inv");
        for (lhs, rhs) in back.iter().zip(&signal) {
            assert!((lhs - rhs).norm() < 1e-12);
        }
    }

    #[test]
    fn step_is_unitary() {
        let signal = ramp(15);
        let out = centered_dft(&signal, DftStep::Inverse, BackendKind::RustFft).expect("inv");
        let before: f64 = signal.iter().map(Complex64::norm_sqr).sum();
        let after: f64 = out.iter().map(Complex64::norm_sqr).sum();
        assert!((before - after).abs() < 1e-9 * before);
    }

    #[test]
    fn backends_agree() {
        let signal = ramp(11);
        let fast = centered_dft(&signal, DftStep::Forward, BackendKind::RustFft).expect("fast");
        let slow = centered_dft(&signal, DftStep::Forward, BackendKind::NaiveDft).expect("slow");
        for (lhs, rhs) in fast.iter().zip(&slow) {
            assert!((lhs - rhs).norm() < 1e-10);
        }
    }
}
