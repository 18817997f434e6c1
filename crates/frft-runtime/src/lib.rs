#![forbid(unsafe_code)]

//! Shared runtime pieces for the frft workspace.
//!
//! | Module      | Contents                                          |
//! |-------------|---------------------------------------------------|
//! | `mode`      | [`RuntimeMode`] (Strict / Hardened)               |
//! | `log`       | [`TestLogEntry`] JSON lines emitted by test suites |
//! | `tolerance` | [`Tolerance`] comparisons over complex samples    |

pub mod log;
pub mod mode;
pub mod tolerance;

pub use log::{TestLogEntry, TestLogLevel, TestResult};
pub use mode::RuntimeMode;
pub use tolerance::{Tolerance, assert_allclose, max_abs_diff};

use std::time::{SystemTime, UNIX_EPOCH};

/// Milliseconds since the Unix epoch, `0` if the clock is before it.
#[must_use]
pub fn now_unix_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis() as u64)
}
