//! Channel decomposition for visualization
//!
//! Splits a raster into per-channel images for the RGB, HSV, and CMY
//! color models. Each decomposition returns exactly 3 single-concept
//! images at the input's pixel dimensions:
//!
//! - RGB channels are tinted into their natural hue (the red channel is
//!   shown as a red image, not grayscale).
//! - The HSV hue channel is rendered as a full-saturation, full-value
//!   hue wheel; saturation and value are raw intensities.
//! - CMY channels come from direct inversion (`255 - R/G/B`) and are
//!   tinted cyan, magenta, and yellow.
//!
//! Grayscale inputs are tolerated everywhere by promoting to RGB first.

use crate::colorspace::{Hsv, hsv_to_rgb, rgb_to_hsv};
use pixelab_core::{GrayRaster, Raster, RgbRaster};

/// RGB decomposition, each channel tinted into its own hue.
#[derive(Debug, Clone)]
pub struct RgbChannels {
    pub red: RgbRaster,
    pub green: RgbRaster,
    pub blue: RgbRaster,
}

/// HSV decomposition: hue as a hue-wheel rendering, saturation and
/// value as raw intensity rasters.
#[derive(Debug, Clone)]
pub struct HsvChannels {
    pub hue: RgbRaster,
    pub saturation: GrayRaster,
    pub value: GrayRaster,
}

/// CMY decomposition, each channel tinted into its subtractive color.
#[derive(Debug, Clone)]
pub struct CmyChannels {
    pub cyan: RgbRaster,
    pub magenta: RgbRaster,
    pub yellow: RgbRaster,
}

/// Split into tinted R, G, B visualizations.
pub fn rgb_channels_visual(src: &Raster) -> RgbChannels {
    let rgb = src.to_rgb();
    RgbChannels {
        red: rgb.map_pixels(|[r, _, _]| [r, 0, 0]),
        green: rgb.map_pixels(|[_, g, _]| [0, g, 0]),
        blue: rgb.map_pixels(|[_, _, b]| [0, 0, b]),
    }
}

/// Split into the HSV visualizations.
///
/// The hue image re-renders every pixel's hue at full saturation and
/// value, which makes the channel readable as color instead of as a
/// meaningless intensity ramp.
pub fn hsv_channels_visual(src: &Raster) -> HsvChannels {
    let rgb = src.to_rgb();
    let w = rgb.width();
    let h = rgb.height();

    let mut hue_data = Vec::with_capacity(rgb.data().len());
    let mut sat_data = Vec::with_capacity(rgb.data().len() / 3);
    let mut val_data = Vec::with_capacity(rgb.data().len() / 3);

    for p in rgb.data().chunks_exact(3) {
        let hsv = rgb_to_hsv(p[0], p[1], p[2]);
        let (r, g, b) = hsv_to_rgb(Hsv {
            h: hsv.h,
            s: 255,
            v: 255,
        });
        hue_data.extend_from_slice(&[r, g, b]);
        sat_data.push(hsv.s);
        val_data.push(hsv.v);
    }

    HsvChannels {
        hue: RgbRaster::from_vec(w, h, hue_data)
            .unwrap_or_else(|_| unreachable!("decomposition preserves shape")),
        saturation: GrayRaster::from_vec(w, h, sat_data)
            .unwrap_or_else(|_| unreachable!("decomposition preserves shape")),
        value: GrayRaster::from_vec(w, h, val_data)
            .unwrap_or_else(|_| unreachable!("decomposition preserves shape")),
    }
}

/// Split into tinted C, M, Y visualizations via direct channel inversion.
pub fn cmy_channels_visual(src: &Raster) -> CmyChannels {
    let rgb = src.to_rgb();
    CmyChannels {
        cyan: rgb.map_pixels(|[r, _, _]| {
            let c = 255 - r;
            [0, c, c]
        }),
        magenta: rgb.map_pixels(|[_, g, _]| {
            let m = 255 - g;
            [m, 0, m]
        }),
        yellow: rgb.map_pixels(|[_, _, b]| {
            let y = 255 - b;
            [y, y, 0]
        }),
    }
}

/// 180-bin hue histogram of a raster, matching the half-degree hue
/// encoding. Used by the histogram panel for the hue channel.
pub fn hue_histogram(src: &Raster) -> [u32; 180] {
    let rgb = src.to_rgb();
    let mut bins = [0u32; 180];
    for p in rgb.data().chunks_exact(3) {
        let hsv = rgb_to_hsv(p[0], p[1], p[2]);
        bins[hsv.h as usize % 180] += 1;
    }
    bins
}
