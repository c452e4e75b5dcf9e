//! Error types for noise synthesis and export

use thiserror::Error;

/// Errors that can stop a render.
///
/// None of these are retried: every stage is a deterministic computation over
/// an in-memory buffer, so an error always means bad input or a broken sink.
#[derive(Debug, Error)]
pub enum NoiseError {
    /// A frequency, rate, duration or order outside its valid range
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Normalization was asked to scale a buffer whose peak is zero
    #[error("degenerate signal: cannot normalize a buffer with zero peak amplitude")]
    DegenerateSignal,

    /// The sample buffer could not be reserved
    #[error("failed to allocate a buffer of {samples} samples")]
    AllocationFailure { samples: usize },

    #[error("wav encoding failed: {0}")]
    Encode(#[from] hound::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("failed to start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl NoiseError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        NoiseError::InvalidParameter(msg.into())
    }
}
