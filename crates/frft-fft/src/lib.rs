#![forbid(unsafe_code)]

//! FFT collaborator surface for the fractional transform pipeline.
//!
//! - `transforms`: forward/inverse complex FFT with selectable backend and normalization
//! - `convolve`: full linear convolution via zero-padded FFT multiplication
//! - `plan`: process-wide cache of rustfft plans
//! - `helpers`: centering rotations (`fftshift` / `ifftshift`)

pub mod convolve;
pub mod helpers;
pub mod plan;
pub mod transforms;

pub use convolve::{convolve_direct, fftconvolve};
pub use helpers::{fftshift_1d, ifftshift_1d};
pub use plan::{PLAN_CACHE_CAPACITY, PlanCacheConfig, PlanKey, plan_fft, shared_plan_cache_len};
pub use transforms::{
    BackendKind, Complex64, FftBackend, FftError, FftOptions, NaiveDftBackend, RustFftBackend,
    backend_kind_name, fft, ifft, resolve_backend,
};

/// FFT normalization modes matching SciPy/PocketFFT conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Normalization {
    Forward,
    #[default]
    Backward,
    /// Both directions scaled by `1/sqrt(n)`; the transform is unitary.
    Ortho,
}

impl Normalization {
    /// Factor applied to an unscaled transform of length `n`.
    #[must_use]
    pub fn scale(self, n: usize, kind: TransformKind) -> f64 {
        let n = n.max(1) as f64;
        match (self, kind.is_inverse()) {
            (Self::Ortho, _) => n.sqrt().recip(),
            (Self::Backward, true) | (Self::Forward, false) => n.recip(),
            (Self::Backward, false) | (Self::Forward, true) => 1.0,
        }
    }
}

/// Transform directions that own a cached plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TransformKind {
    Fft,
    Ifft,
}

impl TransformKind {
    #[must_use]
    pub const fn is_inverse(self) -> bool {
        matches!(self, Self::Ifft)
    }
}
