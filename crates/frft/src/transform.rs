use std::time::Instant;

use frft_fft::{BackendKind, Complex64, FftOptions, backend_kind_name};
use frft_runtime::RuntimeMode;

use crate::FrftError;
use crate::chirp::chirp_convolve;
use crate::normalize::normalize;
use crate::order::{FractionalOrder, OrderClass};
use crate::reduce::{ReductionSteps, reduce_range};
use crate::special::evaluate_special;
use crate::trace::{FrftPath, FrftTrace, next_operation_id, record_trace};

/// Options shared by the transform entry points.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrftOptions {
    pub mode: RuntimeMode,
    pub backend: BackendKind,
    pub check_finite: bool,
    /// Record an [`FrftTrace`] for each call into the shared trace log.
    pub trace: bool,
}

impl FrftOptions {
    #[must_use]
    pub fn with_mode(mut self, mode: RuntimeMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_backend(mut self, backend: BackendKind) -> Self {
        self.backend = backend;
        self
    }

    #[must_use]
    pub fn with_check_finite(mut self, check_finite: bool) -> Self {
        self.check_finite = check_finite;
        self
    }

    #[must_use]
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    fn should_check_finite(&self) -> bool {
        self.check_finite || self.mode.forces_finite_check()
    }

    /// Input is validated once at entry; collaborator calls run unchecked.
    fn collaborator_options(&self) -> FftOptions {
        FftOptions::default().with_backend(self.backend)
    }
}

/// Fractional Fourier transform of `signal` at `order` with default options.
pub fn frft(signal: &[Complex64], order: f64) -> Result<Vec<Complex64>, FrftError> {
    frft_with_options(signal, order, &FrftOptions::default())
}

/// Inverse transform; identical to `frft(signal, -order)`.
pub fn ifrft(signal: &[Complex64], order: f64) -> Result<Vec<Complex64>, FrftError> {
    ifrft_with_options(signal, order, &FrftOptions::default())
}

pub fn frft_with_options(
    signal: &[Complex64],
    order: f64,
    options: &FrftOptions,
) -> Result<Vec<Complex64>, FrftError> {
    run_frft(signal, order, options, "forward")
}

pub fn ifrft_with_options(
    signal: &[Complex64],
    order: f64,
    options: &FrftOptions,
) -> Result<Vec<Complex64>, FrftError> {
    run_frft(signal, -order, options, "inverse")
}

/// Transform of a real signal, promoted to complex samples.
pub fn frft_real(signal: &[f64], order: f64) -> Result<Vec<Complex64>, FrftError> {
    let promoted: Vec<Complex64> = signal.iter().map(|&v| Complex64::new(v, 0.0)).collect();
    frft(&promoted, order)
}

struct Evaluation {
    output: Vec<Complex64>,
    path: FrftPath,
    reduced_order: f64,
    reduction: ReductionSteps,
}

fn run_frft(
    signal: &[Complex64],
    requested_order: f64,
    options: &FrftOptions,
    direction: &'static str,
) -> Result<Vec<Complex64>, FrftError> {
    if signal.is_empty() {
        return Err(FrftError::EmptySignal);
    }
    if options.should_check_finite() && signal.iter().any(|value| !value.is_finite()) {
        return Err(FrftError::NonFiniteInput);
    }

    let started = Instant::now();
    let order = FractionalOrder::new(requested_order);
    let evaluation = evaluate(signal, order, options)?;

    if options.trace {
        record_trace(FrftTrace {
            operation_id: next_operation_id(),
            direction,
            n: signal.len(),
            requested_order,
            reduced_order: evaluation.reduced_order,
            path: evaluation.path,
            reduction: evaluation.reduction,
            backend: backend_kind_name(options.backend),
            mode: options.mode,
            timing_ns: started.elapsed().as_nanos(),
        });
    }
    Ok(evaluation.output)
}

fn evaluate(
    signal: &[Complex64],
    order: FractionalOrder,
    options: &FrftOptions,
) -> Result<Evaluation, FrftError> {
    let n = signal.len();
    if n <= 1 {
        return Ok(Evaluation {
            output: signal.to_vec(),
            path: FrftPath::DegenerateLength,
            reduced_order: order.value(),
            reduction: ReductionSteps::default(),
        });
    }

    let class = order.class();
    if let Some(output) = evaluate_special(signal, class, options.backend)? {
        return Ok(Evaluation {
            output,
            path: special_path(class),
            reduced_order: order.value(),
            reduction: ReductionSteps::default(),
        });
    }

    let mut work = signal.to_vec();
    let (reduced_order, reduction) = reduce_range(&mut work, order.value(), options.backend)?;
    let kernel = chirp_convolve(&work, reduced_order, &options.collaborator_options())?;
    Ok(Evaluation {
        output: normalize(kernel, reduced_order, n),
        path: FrftPath::ChirpKernel,
        reduced_order,
        reduction,
    })
}

fn special_path(class: OrderClass) -> FrftPath {
    match class {
        OrderClass::Identity => FrftPath::Identity,
        OrderClass::Parity => FrftPath::Parity,
        OrderClass::Forward => FrftPath::ForwardDft,
        OrderClass::Inverse => FrftPath::InverseDft,
        OrderClass::Fractional => FrftPath::ChirpKernel,
    }
}
