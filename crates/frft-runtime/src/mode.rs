#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

/// How strictly transform entry points police their input.
///
/// - **Strict**: non-finite samples propagate through the arithmetic like any
///   other IEEE value.
/// - **Hardened**: non-finite input is rejected before any transform work.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuntimeMode {
    #[default]
    Strict,
    Hardened,
}

impl RuntimeMode {
    /// Whether this mode forces a finite-input check regardless of caller options.
    #[must_use]
    pub const fn forces_finite_check(self) -> bool {
        matches!(self, Self::Hardened)
    }
}
