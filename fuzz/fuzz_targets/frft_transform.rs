#![no_main]

use arbitrary::Arbitrary;
use frft::{Complex64, FrftError, FrftOptions, RuntimeMode, frft, frft_with_options, ifrft};
use libfuzzer_sys::fuzz_target;

const MAX_LEN: usize = 96;

#[derive(Debug, Arbitrary)]
struct TransformInput {
    samples: Vec<(f64, f64)>,
    order: f64,
    hardened: bool,
}

fuzz_target!(|input: TransformInput| {
    let signal: Vec<Complex64> = input
        .samples
        .iter()
        .take(MAX_LEN)
        .map(|&(re, im)| Complex64::new(re, im))
        .collect();
    let mode = if input.hardened {
        RuntimeMode::Hardened
    } else {
        RuntimeMode::Strict
    };
    let options = FrftOptions::default().with_mode(mode);

    match frft_with_options(&signal, input.order, &options) {
        Ok(output) => {
            assert_eq!(output.len(), signal.len());
            if input.hardened {
                assert!(signal.iter().all(|value| value.is_finite()));
            }
        }
        Err(FrftError::EmptySignal) => assert!(signal.is_empty()),
        Err(FrftError::NonFiniteInput) => assert!(input.hardened),
        Err(FrftError::DegenerateOrder { .. }) => assert!(!input.order.is_finite()),
        Err(FrftError::Fft(err)) => panic!("collaborator failure on valid length: {err}"),
    }

    if signal.is_empty() {
        return;
    }
    // Closed-form orders are exact on any input, finite or not.
    if let Ok(reversed) = frft(&signal, 2.0) {
        let expected: Vec<Complex64> = signal.iter().rev().copied().collect();
        assert!(
            reversed
                .iter()
                .zip(&expected)
                .all(|(lhs, rhs)| lhs == rhs || (lhs.is_nan() && rhs.is_nan()))
        );
    }
    if input.order.is_finite() {
        let _ = ifrft(&signal, input.order);
    }
});
