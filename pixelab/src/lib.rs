//! Pixelab - educational image processing transforms
//!
//! A library of pure, stateless transforms over 8-bit rasters: tonal
//! and color operations, spatial filtering, segmentation, morphology,
//! region analysis, and frequency-domain filtering. Every operation
//! takes a [`Raster`] and produces a new one; there is no I/O and no
//! shared state.
//!
//! # Overview
//!
//! - Grayscale conversion, binarization, channel decomposition, and
//!   colormaps
//! - Arithmetic, logic, and histogram transfer functions
//! - Linear, rank-order, and edge-detection filters
//! - Threshold selection (Otsu, Kapur, isodata) and multi-level masks
//! - Structuring-element morphology
//! - Connected components and contour extraction
//! - 2-D DFT spectra and ideal/Gaussian/Butterworth mask filtering
//!
//! # Example
//!
//! ```
//! use pixelab::{GrayRaster, Raster};
//!
//! let ramp = GrayRaster::from_fn(64, 64, |x, _| (x * 4) as u8).unwrap();
//! let edges = pixelab::filter::sobel(&Raster::Gray(ramp));
//! assert_eq!(edges.width(), 64);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use pixelab_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use pixelab_color as color;
pub use pixelab_filter as filter;
pub use pixelab_frequency as frequency;
pub use pixelab_morph as morph;
pub use pixelab_region as region;
pub use pixelab_segment as segment;
