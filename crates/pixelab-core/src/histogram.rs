//! Histogram generation
//!
//! Bin-count vectors consumed by the plotting collaborator and by the
//! threshold-selection algorithms. Counting is all this module does;
//! rendering is out of scope.

use crate::raster::{GrayRaster, Raster, RgbRaster};

/// Per-channel histograms of an RGB raster.
///
/// Contains separate 256-bin histograms for the red, green, and blue
/// channels.
#[derive(Debug, Clone)]
pub struct ChannelHistograms {
    pub red: [u32; 256],
    pub green: [u32; 256],
    pub blue: [u32; 256],
}

/// 256-bin intensity histogram of a grayscale raster.
pub fn gray_histogram(src: &GrayRaster) -> [u32; 256] {
    let mut bins = [0u32; 256];
    for &v in src.data() {
        bins[v as usize] += 1;
    }
    bins
}

/// Per-channel 256-bin histograms of an RGB raster.
pub fn color_histograms(src: &RgbRaster) -> ChannelHistograms {
    let mut red = [0u32; 256];
    let mut green = [0u32; 256];
    let mut blue = [0u32; 256];
    for p in src.data().chunks_exact(3) {
        red[p[0] as usize] += 1;
        green[p[1] as usize] += 1;
        blue[p[2] as usize] += 1;
    }
    ChannelHistograms { red, green, blue }
}

/// Histogram of either raster variant: a color raster is reduced to
/// grayscale first.
pub fn histogram(src: &Raster) -> [u32; 256] {
    match src {
        Raster::Gray(g) => gray_histogram(g),
        Raster::Rgb(c) => gray_histogram(&c.to_gray()),
    }
}
