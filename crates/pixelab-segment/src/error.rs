//! Error types for pixelab-segment

use thiserror::Error;

/// Errors that can occur during segmentation and histogram transfer
#[derive(Debug, Error)]
pub enum SegmentError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pixelab_core::Error),

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for segmentation operations
pub type SegmentResult<T> = Result<T, SegmentError>;
