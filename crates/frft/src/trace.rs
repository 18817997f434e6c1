//! Opt-in per-call traces.
//!
//! Calls made with `FrftOptions::with_trace(true)` push one [`FrftTrace`] into a
//! bounded process-wide log. Recording takes a single shared `Mutex`, so traced
//! calls from many threads contend on it; untraced calls never touch it.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, OnceLock};

use frft_runtime::RuntimeMode;
use serde::Serialize;

use crate::reduce::ReductionSteps;

/// Oldest traces are dropped once the log holds this many entries.
pub const TRACE_LOG_CAPACITY: usize = 4096;

/// Evaluation path taken by one transform call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FrftPath {
    /// N <= 1; input returned unchanged.
    DegenerateLength,
    Identity,
    Parity,
    ForwardDft,
    InverseDft,
    ChirpKernel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrftTrace {
    pub operation_id: String,
    pub direction: &'static str,
    pub n: usize,
    pub requested_order: f64,
    pub reduced_order: f64,
    pub path: FrftPath,
    pub reduction: ReductionSteps,
    pub backend: &'static str,
    pub mode: RuntimeMode,
    pub timing_ns: u128,
}

impl FrftTrace {
    #[must_use]
    pub fn to_json_line(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

static TRACE_LOG: OnceLock<Mutex<Vec<FrftTrace>>> = OnceLock::new();
static OPERATION_COUNTER: AtomicU64 = AtomicU64::new(1);

fn trace_log() -> &'static Mutex<Vec<FrftTrace>> {
    TRACE_LOG.get_or_init(|| Mutex::new(Vec::new()))
}

pub(crate) fn next_operation_id() -> String {
    let next = OPERATION_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("frft-op-{next:016x}")
}

pub(crate) fn record_trace(trace: FrftTrace) {
    if let Ok(mut log) = trace_log().lock() {
        if log.len() >= TRACE_LOG_CAPACITY {
            let overflow = log.len() + 1 - TRACE_LOG_CAPACITY;
            log.drain(..overflow);
        }
        log.push(trace);
    }
}

/// Drain every trace recorded so far.
#[must_use]
pub fn take_frft_traces() -> Vec<FrftTrace> {
    if let Ok(mut log) = trace_log().lock() {
        return std::mem::take(&mut *log);
    }
    Vec::new()
}
