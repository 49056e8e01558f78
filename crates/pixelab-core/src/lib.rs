//! Pixelab Core - Basic data structures for image processing
//!
//! This crate provides the fundamental types used throughout the pixelab
//! transform library:
//!
//! - [`Raster`] / [`GrayRaster`] / [`RgbRaster`] - the image containers
//! - [`Lut`] / [`ColorLut`] - 256-entry lookup tables
//! - Histogram bin-count vectors
//! - Scalar and dual-image arithmetic and logic
//! - Bilinear / nearest resampling
//!
//! Every transform in the workspace is a pure function: it borrows its
//! input raster(s), allocates a new output, and holds no state between
//! invocations. Concurrent calls on independent rasters are safe by
//! construction; callers serialize access to any raster they mutate.

pub mod arith;
pub mod error;
pub mod histogram;
pub mod logic;
pub mod lut;
pub mod raster;
pub mod resize;

pub use arith::{add_images, add_scalar, mul_images, mul_scalar, sub_images, sub_scalar};
pub use error::{Error, Result};
pub use histogram::{ChannelHistograms, color_histograms, gray_histogram, histogram};
pub use logic::{and_images, not_image, or_images, xor_images};
pub use lut::{ColorLut, Lut};
pub use raster::{GrayRaster, Raster, RgbRaster, luma};
pub use resize::{resize_bilinear, resize_bilinear_gray, resize_bilinear_rgb, resize_nearest};
