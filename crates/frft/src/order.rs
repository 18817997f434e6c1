//! Fractional order normalization and classification.
//!
//! An order `a` is an angle `alpha = a * pi / 2` in the time-frequency plane.
//! The transform is periodic in `a` with period 4, so every order is first
//! folded into `[0, 4)` with a floor-mod. A truncating `%` would leave
//! negative orders negative and send `ifrft` down the wrong branch.

use std::f64::consts::FRAC_PI_2;

use serde::Serialize;

/// Period of the transform in the order parameter.
pub const ORDER_PERIOD: f64 = 4.0;

/// A fractional order already folded into `[0, 4)`.
///
/// Non-finite orders fold to NaN, classify as [`OrderClass::Fractional`] and
/// are rejected by the chirp kernel as degenerate.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct FractionalOrder(f64);

/// Which evaluation path an order takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderClass {
    /// `a == 0`
    Identity,
    /// `a == 1`, the centered unitary DFT.
    Forward,
    /// `a == 2`, time reversal.
    Parity,
    /// `a == 3`, the centered unitary inverse DFT.
    Inverse,
    /// Anything else; handled by range reduction plus the chirp kernel.
    Fractional,
}

impl FractionalOrder {
    /// Fold `order` into `[0, 4)` with floor-mod semantics.
    #[must_use]
    pub fn new(order: f64) -> Self {
        let folded = order.rem_euclid(ORDER_PERIOD);
        // rem_euclid of a tiny negative value rounds up to exactly the period.
        if folded >= ORDER_PERIOD {
            Self(0.0)
        } else {
            Self(folded)
        }
    }

    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Rotation angle in radians.
    #[must_use]
    pub fn alpha(self) -> f64 {
        self.0 * FRAC_PI_2
    }

    #[must_use]
    pub fn class(self) -> OrderClass {
        if self.0 == 0.0 {
            OrderClass::Identity
        } else if self.0 == 1.0 {
            OrderClass::Forward
        } else if self.0 == 2.0 {
            OrderClass::Parity
        } else if self.0 == 3.0 {
            OrderClass::Inverse
        } else {
            OrderClass::Fractional
        }
    }
}

impl From<f64> for FractionalOrder {
    fn from(order: f64) -> Self {
        Self::new(order)
    }
}

#[cfg(test)]
mod tests {
    use super::{FractionalOrder, OrderClass};

    #[test]
    fn negative_orders_use_floor_mod() {
        assert_eq!(FractionalOrder::new(-1.0).value(), 3.0);
        assert_eq!(FractionalOrder::new(-0.5).value(), 3.5);
        assert_eq!(FractionalOrder::new(-4.0).value(), 0.0);
        assert_eq!(FractionalOrder::new(-7.0).value(), 1.0);
    }

    #[test]
    fn large_orders_wrap_into_one_period() {
        assert_eq!(FractionalOrder::new(4.0).value(), 0.0);
        assert_eq!(FractionalOrder::new(6.0).value(), 2.0);
        assert_eq!(FractionalOrder::new(9.5).value(), 1.5);
    }

    #[test]
    fn tiny_negative_order_stays_half_open() {
        let order = FractionalOrder::new(-1e-17);
        assert!(order.value() >= 0.0 && order.value() < 4.0);
        assert_eq!(order.class(), OrderClass::Identity);
    }

    #[test]
    fn integer_orders_classify_as_special() {
        assert_eq!(FractionalOrder::new(0.0).class(), OrderClass::Identity);
        assert_eq!(FractionalOrder::new(1.0).class(), OrderClass::Forward);
        assert_eq!(FractionalOrder::new(-2.0).class(), OrderClass::Parity);
        assert_eq!(FractionalOrder::new(-1.0).class(), OrderClass::Inverse);
        assert_eq!(FractionalOrder::new(0.5).class(), OrderClass::Fractional);
        assert_eq!(FractionalOrder::new(2.999).class(), OrderClass::Fractional);
    }

    #[test]
    fn non_finite_orders_are_fractional_nan() {
        for order in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let folded = FractionalOrder::new(order);
            assert!(folded.value().is_nan());
            assert_eq!(folded.class(), OrderClass::Fractional);
        }
    }

    #[test]
    fn alpha_is_quarter_turn_per_unit_order() {
        let order = FractionalOrder::new(1.0);
        assert!((order.alpha() - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
    }
}
