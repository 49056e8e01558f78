//! Histogram transfer functions
//!
//! Tonal adjustments expressed as 256-entry lookup tables. Grayscale
//! rasters take the table directly; color rasters convert to HSV,
//! remap the value channel, and convert back, so hue and saturation
//! survive the adjustment.

use crate::error::{SegmentError, SegmentResult};
use pixelab_color::{hsv_to_rgb, rgb_to_hsv};
use pixelab_core::{GrayRaster, Lut, Raster, gray_histogram};

/// Fixed rate of the [`exponential`] transfer.
const EXPONENTIAL_ALPHA: f64 = 0.05;
/// Fixed spread of the [`rayleigh`] transfer.
const RAYLEIGH_ALPHA: f64 = 0.4;

/// Apply a lookup table: directly on grayscale, on the HSV value
/// channel for color.
pub fn apply_lut(src: &Raster, lut: &Lut) -> Raster {
    match src {
        Raster::Gray(g) => Raster::Gray(lut.apply_gray(g)),
        Raster::Rgb(c) => Raster::Rgb(c.map_pixels(|[r, g, b]| {
            let mut hsv = rgb_to_hsv(r, g, b);
            hsv.v = lut.get(hsv.v);
            let (r, g, b) = hsv_to_rgb(hsv);
            [r, g, b]
        })),
    }
}

/// Uniform histogram equalization.
///
/// The table comes from the cumulative histogram of the channel being
/// remapped (luminance for gray, HSV value for color), so flat regions
/// spread out to use the full tonal range.
pub fn equalize(src: &Raster) -> Raster {
    let hist = match src {
        Raster::Gray(g) => gray_histogram(g),
        Raster::Rgb(c) => {
            let mut hist = [0u32; 256];
            for p in c.data().chunks_exact(3) {
                let v = p[0].max(p[1]).max(p[2]);
                hist[v as usize] += 1;
            }
            hist
        }
    };
    apply_lut(src, &equalize_lut(&hist))
}

/// Build the equalization table from a histogram.
///
/// Matches the usual definition: the cumulative count is shifted by
/// the first nonzero bin so the darkest occupied level maps to 0.
pub fn equalize_lut(hist: &[u32; 256]) -> Lut {
    let total: u64 = hist.iter().map(|&c| c as u64).sum();
    let cdf_min = hist
        .iter()
        .scan(0u64, |acc, &c| {
            *acc += c as u64;
            Some(*acc)
        })
        .find(|&c| c > 0)
        .unwrap_or(0);
    if total == 0 || total == cdf_min {
        return Lut::identity();
    }
    let mut cdf = 0u64;
    let mut table = [0u8; 256];
    for (i, &count) in hist.iter().enumerate() {
        cdf += count as u64;
        let num = cdf.saturating_sub(cdf_min) as f64;
        table[i] = (num / (total - cdf_min) as f64 * 255.0).round() as u8;
    }
    Lut::from_fn(|i| table[i])
}

/// Gamma correction: `i -> (i/255)^(1/gamma) * 255`.
///
/// # Errors
///
/// Returns [`SegmentError::InvalidParameter`] unless `gamma` is a
/// positive finite value.
pub fn gamma_correct(src: &Raster, gamma: f64) -> SegmentResult<Raster> {
    if !gamma.is_finite() || gamma <= 0.0 {
        return Err(SegmentError::InvalidParameter(format!(
            "gamma must be positive, got {gamma}"
        )));
    }
    let inv = 1.0 / gamma;
    let lut = Lut::from_fn(|i| clip(((i as f64 / 255.0).powf(inv)) * 255.0));
    Ok(apply_lut(src, &lut))
}

/// Power-law transfer: `i -> (i/255)^p * 255`.
///
/// # Errors
///
/// Returns [`SegmentError::InvalidParameter`] unless `power` is a
/// positive finite value.
pub fn power_law(src: &Raster, power: f64) -> SegmentResult<Raster> {
    if !power.is_finite() || power <= 0.0 {
        return Err(SegmentError::InvalidParameter(format!(
            "power must be positive, got {power}"
        )));
    }
    let lut = Lut::from_fn(|i| clip(((i as f64 / 255.0).powf(power)) * 255.0));
    Ok(apply_lut(src, &lut))
}

/// Logarithmic transfer: `i -> c * ln(1 + i)` with c scaled so 255
/// maps to 255.
pub fn log_transform(src: &Raster) -> Raster {
    let c = 255.0 / 256f64.ln();
    let lut = Lut::from_fn(|i| clip(c * (1.0 + i as f64).ln()));
    apply_lut(src, &lut)
}

/// Exponential transfer: `i -> 255 * (1 - e^(-alpha * i))`, expanding
/// the dark end.
pub fn exponential(src: &Raster) -> Raster {
    let lut = Lut::from_fn(|i| clip(255.0 * (1.0 - (-EXPONENTIAL_ALPHA * i as f64).exp())));
    apply_lut(src, &lut)
}

/// Rayleigh-shaped transfer, mapping a uniform input CDF onto a
/// Rayleigh distribution and rescaling by the value at r = 0.999.
pub fn rayleigh(src: &Raster) -> Raster {
    let two_a2 = 2.0 * RAYLEIGH_ALPHA * RAYLEIGH_ALPHA;
    let g_max = (two_a2 * (1.0f64 / (1.0 - 0.999)).ln()).sqrt();
    let lut = Lut::from_fn(|i| {
        let r = (i as f64 / 255.0).min(0.999);
        let g = (two_a2 * (1.0 / (1.0 - r)).ln()).sqrt();
        clip(g / g_max * 255.0)
    });
    apply_lut(src, &lut)
}

/// Hypercubic transfer: cube root of the normalized value, brightening
/// midtones.
pub fn hypercubic(src: &Raster) -> Raster {
    let lut = Lut::from_fn(|i| clip((i as f64 / 255.0).powf(1.0 / 3.0) * 255.0));
    apply_lut(src, &lut)
}

/// Shift every level by a signed offset, clipping at the ends.
pub fn shift_histogram(src: &Raster, offset: i32) -> Raster {
    let lut = Lut::from_fn(|i| (i as i32 + offset).clamp(0, 255) as u8);
    apply_lut(src, &lut)
}

/// Stretch the occupied range of the luminance reduction to the full
/// `0..=255`. A constant image comes back unchanged.
pub fn stretch_histogram(src: &Raster) -> Raster {
    let gray = src.to_gray();
    let min = gray.data().iter().copied().min().unwrap_or(0);
    let max = gray.data().iter().copied().max().unwrap_or(0);
    if min == max {
        return src.clone();
    }
    let span = (max - min) as f64;
    let lut = Lut::from_fn(|i| clip((i as f64 - min as f64) * 255.0 / span));
    apply_lut(src, &lut)
}

/// Compress the full range linearly into `min_out..=max_out`.
pub fn compress_histogram(src: &Raster, min_out: u8, max_out: u8) -> Raster {
    let slope = (max_out as f64 - min_out as f64) / 255.0;
    let lut = Lut::from_fn(|i| clip(min_out as f64 + slope * i as f64));
    apply_lut(src, &lut)
}

#[inline]
fn clip(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}
