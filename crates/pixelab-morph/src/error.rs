//! Error types for pixelab-morph

use thiserror::Error;

/// Errors that can occur during morphological operations
#[derive(Debug, Error)]
pub enum MorphError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pixelab_core::Error),

    /// Structuring element with a zero dimension
    #[error("invalid structuring element size: {width}x{height}")]
    InvalidElement { width: u32, height: u32 },
}

/// Result type for morphological operations
pub type MorphResult<T> = Result<T, MorphError>;
