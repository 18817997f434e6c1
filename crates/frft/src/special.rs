use frft_fft::{BackendKind, Complex64};

use crate::FrftError;
use crate::order::OrderClass;
use crate::shift::{DftStep, centered_dft};

/// Closed-form result for integer orders, `None` for fractional ones.
///
/// The input is never mutated; every special result is a fresh buffer.
pub fn evaluate_special(
    signal: &[Complex64],
    class: OrderClass,
    backend: BackendKind,
) -> Result<Option<Vec<Complex64>>, FrftError> {
    let output = match class {
        OrderClass::Identity => signal.to_vec(),
        OrderClass::Parity => signal.iter().rev().copied().collect(),
        OrderClass::Forward => centered_dft(signal, DftStep::Forward, backend)?,
        OrderClass::Inverse => centered_dft(signal, DftStep::Inverse, backend)?,
        OrderClass::Fractional => return Ok(None),
    };
    Ok(Some(output))
}
