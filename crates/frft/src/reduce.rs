use frft_fft::{BackendKind, Complex64};
use serde::Serialize;

use crate::FrftError;
use crate::shift::{DftStep, centered_dft};

/// Which identities the reducer applied, in application order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReductionSteps {
    pub parity: bool,
    pub forward_dft: bool,
    pub inverse_dft: bool,
}

/// Fold a non-special order in `[0, 4)` into `[0.5, 1.5]`, rewriting `signal`
/// so that the kernel at the returned order yields the same transform.
pub fn reduce_range(
    signal: &mut Vec<Complex64>,
    order: f64,
    backend: BackendKind,
) -> Result<(f64, ReductionSteps), FrftError> {
    let mut order = order;
    let mut steps = ReductionSteps::default();

    if order > 2.0 {
        order -= 2.0;
        signal.reverse();
        steps.parity = true;
    }
    if order > 1.5 {
        order -= 1.0;
        *signal = centered_dft(signal, DftStep::Forward, backend)?;
        steps.forward_dft = true;
    }
    if order < 0.5 {
        order += 1.0;
        *signal = centered_dft(signal, DftStep::Inverse, backend)?;
        steps.inverse_dft = true;
    }

    Ok((order, steps))
}

#[cfg(test)]
mod tests {
    use super::{ReductionSteps, reduce_range};
    use frft_fft::{BackendKind, Complex64};

    fn signal() -> Vec<Complex64> {
        (0..7).map(|i| Complex64::new(i as f64, 1.0)).collect()
    }

    fn reduce(order: f64) -> (f64, ReductionSteps, Vec<Complex64>) {
        let mut work = signal();
        let (reduced, steps) = reduce_range(&mut work, order, BackendKind::RustFft).expect("reduce");
        (reduced, steps, work)
    }

    #[test]
    fn central_band_is_untouched() {
        for order in [0.5, 0.9, 1.3, 1.5] {
            let (reduced, steps, work) = reduce(order);
            assert_eq!(reduced, order);
            assert_eq!(steps, ReductionSteps::default());
            assert_eq!(work, signal());
        }
    }

    #[test]
    fn low_orders_take_inverse_step() {
        let (reduced, steps, _) = reduce(0.25);
        assert!((reduced - 1.25).abs() < 1e-15);
        assert!(steps.inverse_dft && !steps.forward_dft && !steps.parity);
    }

    #[test]
    fn upper_band_takes_forward_step() {
        let (reduced, steps, _) = reduce(1.75);
        assert!((reduced - 0.75).abs() < 1e-15);
        assert!(steps.forward_dft && !steps.inverse_dft && !steps.parity);
    }

    #[test]
    fn orders_above_two_flip_first() {
        let (reduced, steps, work) = reduce(2.6);
        assert!((reduced - 0.6).abs() < 1e-15);
        assert!(steps.parity && !steps.forward_dft && !steps.inverse_dft);
        let mut reversed = signal();
        reversed.reverse();
        assert_eq!(work, reversed);

        let (reduced, steps, _) = reduce(3.9);
        assert!((reduced - 0.9).abs() < 1e-12);
        assert!(steps.parity && steps.forward_dft && !steps.inverse_dft);

        let (reduced, steps, _) = reduce(2.1);
        assert!((reduced - 1.1).abs() < 1e-12);
        assert!(steps.parity && steps.inverse_dft);
    }

    #[test]
    fn postcondition_holds_across_sweep() {
        for step in 1..400 {
            let order = f64::from(step) * 0.01;
            if order.fract() == 0.0 {
                continue;
            }
            let (reduced, _, work) = reduce(order);
            assert!((0.5..=1.5).contains(&reduced), "order={order} reduced={reduced}");
            assert_eq!(work.len(), 7);
        }
    }
}
