//! Closeness checks over complex sample sequences.
//!
//! A sample passes when `|actual - expected| <= atol + rtol * |expected|`,
//! the `numpy.testing.assert_allclose` rule applied to the complex modulus.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tolerance {
    pub atol: f64,
    pub rtol: f64,
}

impl Tolerance {
    #[must_use]
    pub const fn new(atol: f64, rtol: f64) -> Self {
        Self { atol, rtol }
    }

    #[must_use]
    pub fn accepts(&self, actual: Complex64, expected: Complex64) -> bool {
        (actual - expected).norm() <= self.atol + self.rtol * expected.norm()
    }

    /// Lengths must match and every sample must pass.
    #[must_use]
    pub fn allclose(&self, actual: &[Complex64], expected: &[Complex64]) -> bool {
        actual.len() == expected.len()
            && actual
                .iter()
                .zip(expected)
                .all(|(a, e)| self.accepts(*a, *e))
    }
}

/// Largest sample-wise modulus of the difference; `0.0` for empty input.
#[must_use]
pub fn max_abs_diff(actual: &[Complex64], expected: &[Complex64]) -> f64 {
    actual
        .iter()
        .zip(expected)
        .map(|(a, e)| (a - e).norm())
        .fold(0.0, f64::max)
}

/// Panics at the first sample outside `tolerance`, naming its index.
pub fn assert_allclose(actual: &[Complex64], expected: &[Complex64], tolerance: Tolerance) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "assert_allclose: length mismatch: actual={} expected={}",
        actual.len(),
        expected.len()
    );
    for (idx, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            tolerance.accepts(*a, *e),
            "assert_allclose[{idx}]: actual={a} expected={e} diff={} ({tolerance:?})",
            (a - e).norm()
        );
    }
}
