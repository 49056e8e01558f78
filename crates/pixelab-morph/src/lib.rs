//! Pixelab Morph - structuring-element morphology
//!
//! Erosion, dilation, opening, closing, and the morphological gradient
//! over flat rectangular structuring elements, for both grayscale and
//! color rasters.

pub mod error;
pub mod ops;
pub mod sel;

pub use error::{MorphError, MorphResult};
pub use ops::{
    close, close_with, dilate, dilate_with, erode, erode_with, gradient, gradient_with, open,
    open_with,
};
pub use sel::StructElement;
