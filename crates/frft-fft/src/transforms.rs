use std::f64::consts::PI;
use std::fmt::{Display, Formatter};

use frft_runtime::RuntimeMode;

use crate::plan::{PlanKey, plan_fft};
use crate::{Normalization, TransformKind};

pub use num_complex::Complex64;

/// Backends that can serve FFT requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BackendKind {
    /// Mixed-radix planned FFT from `rustfft`.
    #[default]
    RustFft,
    /// Direct O(n^2) evaluation of the DFT sum; reference only.
    NaiveDft,
}

/// A one-dimensional complex transform engine. Output is never scaled.
pub trait FftBackend: Sync {
    fn kind(&self) -> BackendKind;

    fn process(&self, buffer: &mut [Complex64], direction: TransformKind);

    fn transform(&self, input: &[Complex64], direction: TransformKind) -> Vec<Complex64> {
        let mut output = input.to_vec();
        self.process(&mut output, direction);
        output
    }
}

#[derive(Debug, Default)]
pub struct RustFftBackend;

impl FftBackend for RustFftBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::RustFft
    }

    fn process(&self, buffer: &mut [Complex64], direction: TransformKind) {
        if buffer.is_empty() {
            return;
        }
        let (plan, _) = plan_fft(PlanKey::new(direction, buffer.len()));
        plan.process(buffer);
    }
}

#[derive(Debug, Default)]
pub struct NaiveDftBackend;

impl FftBackend for NaiveDftBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::NaiveDft
    }

    fn process(&self, buffer: &mut [Complex64], direction: TransformKind) {
        let n = buffer.len();
        if n == 0 {
            return;
        }
        let sign = if direction.is_inverse() { 1.0 } else { -1.0 };
        let step = sign * 2.0 * PI / n as f64;
        let output: Vec<Complex64> = (0..n)
            .map(|k| {
                buffer
                    .iter()
                    .enumerate()
                    .map(|(t, &value)| {
                        // Reduce k*t mod n first so the angle stays small for large n.
                        let phase = ((k * t) % n) as f64;
                        value * Complex64::from_polar(1.0, step * phase)
                    })
                    .sum()
            })
            .collect();
        buffer.copy_from_slice(&output);
    }
}

static RUSTFFT_BACKEND: RustFftBackend = RustFftBackend;
static NAIVE_BACKEND: NaiveDftBackend = NaiveDftBackend;

#[must_use]
pub fn resolve_backend(kind: BackendKind) -> &'static dyn FftBackend {
    match kind {
        BackendKind::RustFft => &RUSTFFT_BACKEND,
        BackendKind::NaiveDft => &NAIVE_BACKEND,
    }
}

#[must_use]
pub fn backend_kind_name(kind: BackendKind) -> &'static str {
    match kind {
        BackendKind::RustFft => "rustfft",
        BackendKind::NaiveDft => "naive_dft",
    }
}

/// Common options shared by FFT transform entrypoints.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FftOptions {
    pub mode: RuntimeMode,
    pub normalization: Normalization,
    pub backend: BackendKind,
    pub check_finite: bool,
}

impl FftOptions {
    #[must_use]
    pub fn with_mode(mut self, mode: RuntimeMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }

    #[must_use]
    pub fn with_backend(mut self, backend: BackendKind) -> Self {
        self.backend = backend;
        self
    }

    #[must_use]
    pub fn with_check_finite(mut self, check_finite: bool) -> Self {
        self.check_finite = check_finite;
        self
    }

    fn should_check_finite(&self) -> bool {
        self.check_finite || self.mode.forces_finite_check()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FftError {
    InvalidShape { detail: &'static str },
    NonFiniteInput,
}

impl Display for FftError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidShape { detail } => write!(f, "invalid shape: {detail}"),
            Self::NonFiniteInput => write!(f, "non-finite input rejected by policy"),
        }
    }
}

impl std::error::Error for FftError {}

/// 1D forward complex FFT.
pub fn fft(input: &[Complex64], options: &FftOptions) -> Result<Vec<Complex64>, FftError> {
    run_complex_1d(input, options, TransformKind::Fft)
}

/// 1D inverse complex FFT.
pub fn ifft(input: &[Complex64], options: &FftOptions) -> Result<Vec<Complex64>, FftError> {
    run_complex_1d(input, options, TransformKind::Ifft)
}

fn run_complex_1d(
    input: &[Complex64],
    options: &FftOptions,
    direction: TransformKind,
) -> Result<Vec<Complex64>, FftError> {
    if input.is_empty() {
        return Err(FftError::InvalidShape {
            detail: "input length must be greater than zero",
        });
    }
    validate_finite_complex(input, options)?;

    let mut output = resolve_backend(options.backend).transform(input, direction);
    let scale = options.normalization.scale(input.len(), direction);
    if scale != 1.0 {
        output.iter_mut().for_each(|value| *value *= scale);
    }
    Ok(output)
}

pub(crate) fn validate_finite_complex(
    input: &[Complex64],
    options: &FftOptions,
) -> Result<(), FftError> {
    if options.should_check_finite() && input.iter().any(|value| !value.is_finite()) {
        return Err(FftError::NonFiniteInput);
    }
    Ok(())
}
