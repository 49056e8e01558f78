//! Pixelab Color - color model transforms and pseudo-color mapping
//!
//! This crate covers the color-facing half of the transform catalog:
//!
//! - Grayscale conversion lives on the core raster types; this crate
//!   adds manual and adaptive binarization on top of it.
//! - Channel decomposition for the RGB, HSV, and CMY color models,
//!   rendered as ready-to-display tinted images.
//! - The colormap engine: named palettes, analytic standard maps, and
//!   user-defined 3-point gradients.

pub mod binarize;
pub mod channels;
pub mod colormap;
pub mod colorspace;
pub mod error;

pub use binarize::{binarize_adaptive, binarize_manual};
pub use channels::{
    CmyChannels, HsvChannels, RgbChannels, cmy_channels_visual, hsv_channels_visual,
    hue_histogram, rgb_channels_visual,
};
pub use colormap::{
    Palette, PaletteBuilder, StandardMap, apply_palette, apply_standard_map, gradient_lut,
    user_colormap,
};
pub use colorspace::{Hsv, hsv_to_rgb, rgb_to_hsv};
pub use error::{ColorError, ColorResult};
