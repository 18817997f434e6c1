use frft_fft::FftError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FrftError {
    #[error("signal must contain at least one sample")]
    EmptySignal,
    #[error("order {order} is degenerate for the chirp kernel (sin(alpha) = {sin_alpha:e})")]
    DegenerateOrder { order: f64, sin_alpha: f64 },
    #[error("non-finite input rejected by policy")]
    NonFiniteInput,
    #[error("fft collaborator failed: {0}")]
    Fft(#[from] FftError),
}
