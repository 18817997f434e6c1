#![no_main]

use arbitrary::Arbitrary;
use frft_fft::{Complex64, FftOptions, convolve_direct, fftconvolve};
use libfuzzer_sys::fuzz_target;

const MAX_LEN: usize = 48;

#[derive(Debug, Arbitrary)]
struct ConvolveInput {
    lhs: Vec<(i16, i16)>,
    rhs: Vec<(i16, i16)>,
}

fn widen(values: &[(i16, i16)]) -> Vec<Complex64> {
    values
        .iter()
        .take(MAX_LEN)
        .map(|&(re, im)| Complex64::new(f64::from(re) / 256.0, f64::from(im) / 256.0))
        .collect()
}

fuzz_target!(|input: ConvolveInput| {
    let lhs = widen(&input.lhs);
    let rhs = widen(&input.rhs);

    let Ok(fast) = fftconvolve(&lhs, &rhs, &FftOptions::default()) else {
        assert!(lhs.is_empty() || rhs.is_empty());
        return;
    };
    let direct = convolve_direct(&lhs, &rhs).expect("operands already validated");
    assert_eq!(fast.len(), lhs.len() + rhs.len() - 1);
    assert_eq!(fast.len(), direct.len());

    let scale = lhs.iter().map(|v| v.norm()).sum::<f64>() * rhs.iter().map(|v| v.norm()).sum::<f64>();
    for (a, b) in fast.iter().zip(&direct) {
        assert!((a - b).norm() <= 1e-9 * (1.0 + scale));
    }
});
