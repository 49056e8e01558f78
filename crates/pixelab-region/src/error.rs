//! Error types for pixelab-region

use thiserror::Error;

/// Errors that can occur during region analysis
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pixelab_core::Error),

    /// Label index out of range
    #[error("label {label} out of range (component count is {count})")]
    LabelOutOfRange { label: u32, count: u32 },
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
