//! Error types for pixelab-frequency

use thiserror::Error;

/// Errors that can occur during frequency-domain operations
#[derive(Debug, Error)]
pub enum FrequencyError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pixelab_core::Error),

    /// Cutoff outside the normalized range
    #[error("cutoff must be in 0..=1, got {0}")]
    InvalidCutoff(f64),
}

/// Result type for frequency-domain operations
pub type FrequencyResult<T> = Result<T, FrequencyError>;
