//! Error types for pixelab-filter

use thiserror::Error;

/// Errors that can occur during filtering operations
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pixelab_core::Error),

    /// Morphology error (max/min filters delegate to morphology)
    #[error("morphology error: {0}")]
    Morph(#[from] pixelab_morph::MorphError),

    /// Invalid kernel shape or contents
    #[error("invalid kernel: {0}")]
    InvalidKernel(String),

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for filtering operations
pub type FilterResult<T> = Result<T, FilterError>;
