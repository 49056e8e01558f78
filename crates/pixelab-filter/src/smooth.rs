//! Smoothing filters
//!
//! Linear blurs built on [`convolve`](crate::convolve) plus the
//! edge-preserving bilateral filter.

use crate::convolve::convolve;
use crate::error::{FilterError, FilterResult};
use crate::kernel::Kernel;
use pixelab_core::{GrayRaster, Raster, RgbRaster};

/// Neighborhood diameter for [`bilateral`].
const BILATERAL_DIAMETER: u32 = 9;
/// Spread for both the spatial and the range weight of [`bilateral`].
const BILATERAL_SIGMA: f64 = 75.0;

/// Average over a flat `size x size` window.
pub fn box_filter(src: &Raster, size: u32) -> FilterResult<Raster> {
    Ok(convolve(src, &Kernel::box_kernel(size)?))
}

/// Weighted average: the 1-2-1 kernel for every size except 5, which
/// selects a flat 5x5 window instead.
pub fn weighted_average(src: &Raster, size: u32) -> FilterResult<Raster> {
    let kernel = if size == 5 {
        Kernel::box_kernel(5)?
    } else {
        Kernel::weighted_3x3()
    };
    Ok(convolve(src, &kernel))
}

/// Gaussian blur with the spread derived from the window size.
///
/// # Errors
///
/// Returns [`FilterError::InvalidKernel`] unless `size` is odd and
/// nonzero.
pub fn gaussian_blur(src: &Raster, size: u32) -> FilterResult<Raster> {
    Ok(convolve(src, &Kernel::gaussian(size)?))
}

/// Edge-preserving bilateral filter over a fixed 9-pixel diameter.
///
/// Each neighbor is weighted by both its spatial distance and its
/// tonal distance (L1 over channels), so smoothing stops at strong
/// edges instead of blurring across them.
pub fn bilateral(src: &Raster) -> Raster {
    match src {
        Raster::Gray(g) => Raster::Gray(bilateral_gray(g)),
        Raster::Rgb(c) => Raster::Rgb(bilateral_rgb(c)),
    }
}

fn bilateral_gray(src: &GrayRaster) -> GrayRaster {
    let radius = (BILATERAL_DIAMETER / 2) as i64;
    let space = space_weights(radius);
    let range = range_weights();
    let mut out = src.clone();
    for y in 0..src.height() {
        for x in 0..src.width() {
            let center = src.get_clamped(x as i64, y as i64);
            let mut acc = 0.0f64;
            let mut norm = 0.0f64;
            for dy in -radius..=radius {
                for dx in -radius..=radius {
                    let v = src.get_clamped(x as i64 + dx, y as i64 + dy);
                    let sw = space[((dy + radius) * (2 * radius + 1) + dx + radius) as usize];
                    let rw = range[center.abs_diff(v) as usize];
                    let w = sw * rw;
                    acc += w * v as f64;
                    norm += w;
                }
            }
            out.set(x, y, (acc / norm).round().clamp(0.0, 255.0) as u8);
        }
    }
    out
}

fn bilateral_rgb(src: &RgbRaster) -> RgbRaster {
    let radius = (BILATERAL_DIAMETER / 2) as i64;
    let space = space_weights(radius);
    let range = range_weights();
    let mut out = src.clone();
    for y in 0..src.height() {
        for x in 0..src.width() {
            let center = src.get_clamped(x as i64, y as i64);
            let mut acc = [0.0f64; 3];
            let mut norm = 0.0f64;
            for dy in -radius..=radius {
                for dx in -radius..=radius {
                    let p = src.get_clamped(x as i64 + dx, y as i64 + dy);
                    let sw = space[((dy + radius) * (2 * radius + 1) + dx + radius) as usize];
                    let dist = center
                        .iter()
                        .zip(&p)
                        .map(|(&a, &b)| a.abs_diff(b) as usize)
                        .sum::<usize>();
                    let w = sw * range[dist];
                    for ch in 0..3 {
                        acc[ch] += w * p[ch] as f64;
                    }
                    norm += w;
                }
            }
            out.set(
                x,
                y,
                acc.map(|v| (v / norm).round().clamp(0.0, 255.0) as u8),
            );
        }
    }
    out
}

fn space_weights(radius: i64) -> Vec<f64> {
    let coeff = -0.5 / (BILATERAL_SIGMA * BILATERAL_SIGMA);
    let side = 2 * radius + 1;
    let mut weights = Vec::with_capacity((side * side) as usize);
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            weights.push(((dx * dx + dy * dy) as f64 * coeff).exp());
        }
    }
    weights
}

// Range weights indexed by L1 tonal distance; 3 channels reach 765.
fn range_weights() -> Vec<f64> {
    let coeff = -0.5 / (BILATERAL_SIGMA * BILATERAL_SIGMA);
    (0..=765).map(|d| ((d * d) as f64 * coeff).exp()).collect()
}
