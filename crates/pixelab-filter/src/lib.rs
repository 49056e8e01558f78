//! Pixelab Filter - spatial filtering
//!
//! Kernel correlation, smoothing and rank-order filters, synthetic
//! noise, and edge detection from simple gradient masks up to the
//! Canny pipeline.

pub mod convolve;
pub mod edge;
pub mod error;
pub mod kernel;
pub mod noise;
pub mod rank;
pub mod smooth;

pub use convolve::{convolve, convolve_gray, convolve_rgb, correlate_raw};
pub use edge::{canny, kirsch, laplacian, prewitt, roberts, sobel};
pub use error::{FilterError, FilterResult};
pub use kernel::Kernel;
pub use noise::{gaussian_noise, salt_pepper_noise};
pub use rank::{max_filter, median_filter, min_filter, mode_filter};
pub use smooth::{bilateral, box_filter, gaussian_blur, weighted_average};
