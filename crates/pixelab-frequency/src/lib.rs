//! Pixelab Frequency - frequency-domain analysis
//!
//! 2-D DFT with quadrant shifts, magnitude and phase spectrum views,
//! and ideal/Gaussian/Butterworth mask filtering.

pub mod error;
pub mod fft;
pub mod filter;
pub mod mask;
pub mod spectrum;

pub use error::{FrequencyError, FrequencyResult};
pub use fft::{fft2d, fftshift, ifft2d, ifftshift};
pub use filter::frequency_filter;
pub use mask::{MaskFamily, PassMode, build_mask};
pub use spectrum::{magnitude_spectrum, phase_spectrum};
