//! Error types for pixelab-color

use thiserror::Error;

/// Errors that can occur during color processing operations
#[derive(Debug, Error)]
pub enum ColorError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pixelab_core::Error),

    /// A user colormap was requested before all control points were set
    #[error("incomplete colormap: control point {missing} is not set")]
    IncompleteColormap { missing: usize },

    /// Control point index outside the 3-point gradient
    #[error("control point index out of range: {0} (expected 0..3)")]
    ControlPointOutOfRange(usize),
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;
