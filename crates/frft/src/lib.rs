#![forbid(unsafe_code)]

//! Fast discrete fractional Fourier transform.
//!
//! `frft(f, a)` rotates a sampled signal by the angle `a * pi / 2` in the
//! time-frequency plane. Integer orders are served in closed form; every
//! other order is folded into `[0.5, 1.5]` with parity and centered DFT
//! steps and then evaluated by the three-chirp kernel in O(N log N).
//!
//! - `order`: floor-mod normalization and classification of the order
//! - `shift`: centering permutation and unitary DFT steps
//! - `special`: closed forms for orders 0, 1, 2, 3
//! - `reduce`: range reduction into the kernel's stable band
//! - `interp`: sinc upsampling
//! - `chirp`: multiply, convolve, multiply
//! - `normalize`: global phase and length
//! - `transform`: public entry points and options
//! - `trace`: per-call evaluation records

mod error;

pub mod chirp;
pub mod interp;
pub mod normalize;
pub mod order;
pub mod reduce;
pub mod shift;
pub mod special;
pub mod trace;
pub mod transform;

pub use error::FrftError;
pub use frft_fft::{BackendKind, Complex64};
pub use frft_runtime::RuntimeMode;
pub use order::{FractionalOrder, ORDER_PERIOD, OrderClass};
pub use reduce::ReductionSteps;
pub use trace::{FrftPath, FrftTrace, TRACE_LOG_CAPACITY, take_frft_traces};
pub use transform::{FrftOptions, frft, frft_real, frft_with_options, ifrft, ifrft_with_options};
