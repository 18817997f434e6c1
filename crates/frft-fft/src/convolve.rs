use crate::TransformKind;
use crate::transforms::{
    Complex64, FftBackend, FftError, FftOptions, resolve_backend, validate_finite_complex,
};

/// Full linear convolution of `lhs` and `rhs` via zero-padded FFT multiplication.
///
/// The output has `lhs.len() + rhs.len() - 1` samples, matching
/// `scipy.signal.fftconvolve(lhs, rhs, mode="full")`. Both operands are padded
/// to the next power of two at or above the output length, so the circular
/// product never wraps. `options.normalization` is ignored; the inverse step
/// is always scaled by the padded length.
pub fn fftconvolve(
    lhs: &[Complex64],
    rhs: &[Complex64],
    options: &FftOptions,
) -> Result<Vec<Complex64>, FftError> {
    ensure_operands(lhs, rhs)?;
    validate_finite_complex(lhs, options)?;
    validate_finite_complex(rhs, options)?;

    let out_len = lhs.len() + rhs.len() - 1;
    let padded_len = out_len.next_power_of_two();
    let backend = resolve_backend(options.backend);

    let mut lhs_spectrum = zero_padded(lhs, padded_len);
    let mut rhs_spectrum = zero_padded(rhs, padded_len);
    backend.process(&mut lhs_spectrum, TransformKind::Fft);
    backend.process(&mut rhs_spectrum, TransformKind::Fft);

    for (acc, &value) in lhs_spectrum.iter_mut().zip(&rhs_spectrum) {
        *acc *= value;
    }
    backend.process(&mut lhs_spectrum, TransformKind::Ifft);

    let scale = 1.0 / padded_len as f64;
    lhs_spectrum.truncate(out_len);
    for value in &mut lhs_spectrum {
        *value *= scale;
    }
    Ok(lhs_spectrum)
}

/// Direct O(p*q) linear convolution; the reference for [`fftconvolve`].
pub fn convolve_direct(lhs: &[Complex64], rhs: &[Complex64]) -> Result<Vec<Complex64>, FftError> {
    ensure_operands(lhs, rhs)?;
    let mut out = vec![Complex64::new(0.0, 0.0); lhs.len() + rhs.len() - 1];
    for (i, &a) in lhs.iter().enumerate() {
        for (j, &b) in rhs.iter().enumerate() {
            out[i + j] += a * b;
        }
    }
    Ok(out)
}

fn ensure_operands(lhs: &[Complex64], rhs: &[Complex64]) -> Result<(), FftError> {
    if lhs.is_empty() || rhs.is_empty() {
        return Err(FftError::InvalidShape {
            detail: "convolution operands must be non-empty",
        });
    }
    Ok(())
}

fn zero_padded(input: &[Complex64], len: usize) -> Vec<Complex64> {
    let mut buffer = Vec::with_capacity(len);
    buffer.extend_from_slice(input);
    buffer.resize(len, Complex64::new(0.0, 0.0));
    buffer
}
