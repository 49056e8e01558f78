//! Pixelab Segment - thresholding and histogram transfer
//!
//! Global threshold selection (Otsu, mean, Kapur entropy, isodata,
//! banded and three-level variants) and LUT-based tonal transfer
//! functions applied on luminance or the HSV value channel.

pub mod error;
pub mod threshold;
pub mod transfer;

pub use error::{SegmentError, SegmentResult};
pub use threshold::{
    band_threshold, isodata, kapur, mean_threshold, multilevel, otsu, otsu_level,
};
pub use transfer::{
    apply_lut, compress_histogram, equalize, equalize_lut, exponential, gamma_correct,
    hypercubic, log_transform, power_law, rayleigh, shift_histogram, stretch_histogram,
};
