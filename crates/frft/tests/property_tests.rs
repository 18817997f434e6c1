//! Property tests for the fractional Fourier transform.
//!
//! Convention: test_{module}_{function}_{scenario}
//!
//! The approximate identities (round-trip, additivity, energy) are exercised on
//! odd-length, modulated Gaussians sampled around `floor(N/2)`. That class is
//! band-limited well inside the kernel's sampling grid, so the identities hold
//! to near machine precision.
//!
//! Seed replay: `PROPTEST_CASES=1000 cargo test -p frft --test property_tests`
//! Reproduce: `PROPTEST_SEED=<seed> cargo test -p frft --test property_tests`

use frft::{Complex64, FractionalOrder, RuntimeMode, frft, ifrft};
use frft_runtime::{TestLogEntry, TestResult, max_abs_diff};
use proptest::prelude::*;

const TOL: f64 = 1e-8;

fn modulated_gaussian(n: usize, width: f64, modulation: f64) -> Vec<Complex64> {
    let center = (n / 2) as f64;
    let scale = width * (n as f64).sqrt();
    (0..n)
        .map(|i| {
            let t = i as f64 - center;
            let envelope = (-std::f64::consts::PI * (t / scale).powi(2)).exp();
            Complex64::from_polar(envelope, modulation * t)
        })
        .collect()
}

fn signal_strategy() -> impl Strategy<Value = Vec<Complex64>> {
    (20usize..=64, 0.9f64..1.1, -0.25f64..0.25)
        .prop_map(|(half, width, modulation)| modulated_gaussian(2 * half + 1, width, modulation))
}

fn energy(signal: &[Complex64]) -> f64 {
    signal.iter().map(Complex64::norm_sqr).sum()
}

// ═══════════════════════════════════════════════════════════════
// Property 1: order normalization lands in [0, 4) and is 4-periodic
// ═══════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn test_order_normalize_half_open_interval(order in -1.0e6f64..1.0e6) {
        let value = FractionalOrder::new(order).value();
        prop_assert!((0.0..4.0).contains(&value), "order {order} normalized to {value}");
    }

    #[test]
    fn test_order_normalize_period_four(order in -100.0f64..100.0, turns in -5i32..5) {
        let base = FractionalOrder::new(order).value();
        let shifted = FractionalOrder::new(order + 4.0 * f64::from(turns)).value();
        let gap = (base - shifted).abs();
        prop_assert!(gap < 1e-9 || (4.0 - gap) < 1e-9, "base={base} shifted={shifted}");
    }
}

// ═══════════════════════════════════════════════════════════════
// Property 2: ifrft(frft(f, a), a) recovers f
// ═══════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn test_transform_frft_roundtrip(signal in signal_strategy(), order in -8.0f64..8.0) {
        let there = frft(&signal, order).expect("frft");
        let back = ifrft(&there, order).expect("ifrft");
        prop_assert_eq!(back.len(), signal.len());
        let diff = max_abs_diff(&back, &signal);
        prop_assert!(diff < TOL, "order={order} n={} diff={diff:e}", signal.len());
    }
}

// ═══════════════════════════════════════════════════════════════
// Property 3: frft(frft(f, a1), a2) == frft(f, a1 + a2)
// ═══════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn test_transform_frft_additivity(
        signal in signal_strategy(),
        first in -4.0f64..4.0,
        second in -4.0f64..4.0,
    ) {
        let composed = frft(&frft(&signal, first).expect("first"), second).expect("second");
        let direct = frft(&signal, first + second).expect("direct");
        let diff = max_abs_diff(&composed, &direct);
        prop_assert!(diff < TOL, "a1={first} a2={second} diff={diff:e}");
    }
}

// ═══════════════════════════════════════════════════════════════
// Property 4: energy preservation
// ═══════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn test_transform_frft_preserves_energy(signal in signal_strategy(), order in -4.0f64..4.0) {
        let before = energy(&signal);
        let after = energy(&frft(&signal, order).expect("frft"));
        prop_assert!((before - after).abs() <= TOL * before, "order={order} {before} vs {after}");
    }
}

// ═══════════════════════════════════════════════════════════════
// Property 5: exact special orders on arbitrary data
// ═══════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn test_special_identity_and_parity_exact(
        values in prop::collection::vec((-1.0e3f64..1.0e3, -1.0e3f64..1.0e3), 1..64),
        turns in -3i32..3,
    ) {
        let signal: Vec<Complex64> = values.iter().map(|&(re, im)| Complex64::new(re, im)).collect();
        let period = 4.0 * f64::from(turns);
        prop_assert_eq!(frft(&signal, period).expect("identity"), signal.clone());
        let reversed: Vec<Complex64> = signal.iter().rev().copied().collect();
        prop_assert_eq!(frft(&signal, period + 2.0).expect("parity"), reversed);
    }

    #[test]
    fn test_special_integer_steps_compose(
        values in prop::collection::vec((-10.0f64..10.0, -10.0f64..10.0), 2..48),
    ) {
        let signal: Vec<Complex64> = values.iter().map(|&(re, im)| Complex64::new(re, im)).collect();
        let once = frft(&signal, 1.0).expect("forward");
        let twice = frft(&once, 1.0).expect("forward again");
        let reversed: Vec<Complex64> = signal.iter().rev().copied().collect();
        // Two centered DFT steps equal parity only for odd lengths.
        if signal.len() % 2 == 1 {
            prop_assert!(max_abs_diff(&twice, &reversed) < 1e-9);
        }
        let back = frft(&once, 3.0).expect("inverse");
        prop_assert!(max_abs_diff(&back, &signal) < 1e-9);
    }
}

// ═══════════════════════════════════════════════════════════════
// Structured logging convention test
// ═══════════════════════════════════════════════════════════════

#[test]
fn test_frft_structured_log_convention() {
    let entry = TestLogEntry::new(
        "test_transform_frft_roundtrip",
        "frft::transform",
        "property test: round-trip verified on modulated gaussians",
    )
    .with_result(TestResult::Pass)
    .with_mode(RuntimeMode::Strict)
    .with_order(0.5)
    .with_signal_len(65);

    let json = entry.to_json_line();
    let parsed: serde_json::Value =
        serde_json::from_str(&json).expect("structured log must be valid JSON");
    assert!(parsed["test_id"].is_string());
    assert!(parsed["timestamp_ms"].is_number());
    assert_eq!(parsed["level"], "info");
    assert_eq!(parsed["module"], "frft::transform");
    assert_eq!(parsed["order"], 0.5);
    assert_eq!(parsed["signal_len"], 65);
}
