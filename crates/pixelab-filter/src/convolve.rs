//! Kernel correlation
//!
//! Applies a [`Kernel`] to a raster by correlation: each output sample
//! is the weighted sum of the neighborhood anchored at the kernel
//! center. Border samples are replicated, and integer outputs round
//! then saturate into `0..=255`.

use crate::kernel::Kernel;
use pixelab_core::{GrayRaster, Raster, RgbRaster};

/// Correlate a grayscale raster with a kernel.
pub fn convolve_gray(src: &GrayRaster, kernel: &Kernel) -> GrayRaster {
    let mut out = src.clone();
    for y in 0..src.height() {
        for x in 0..src.width() {
            let acc = accumulate_gray(src, kernel, x, y);
            out.set(x, y, clamp_round(acc));
        }
    }
    out
}

/// Correlate a color raster with a kernel, channelwise.
pub fn convolve_rgb(src: &RgbRaster, kernel: &Kernel) -> RgbRaster {
    let mut out = src.clone();
    for y in 0..src.height() {
        for x in 0..src.width() {
            let mut acc = [0.0f32; 3];
            for ky in 0..kernel.height() {
                for kx in 0..kernel.width() {
                    let weight = kernel
                        .get(kx, ky)
                        .unwrap_or_else(|| unreachable!("loop bounded by kernel shape"));
                    let sx = x as i64 + kx as i64 - kernel.center_x() as i64;
                    let sy = y as i64 + ky as i64 - kernel.center_y() as i64;
                    let p = src.get_clamped(sx, sy);
                    for ch in 0..3 {
                        acc[ch] += weight * p[ch] as f32;
                    }
                }
            }
            out.set(x, y, acc.map(clamp_round));
        }
    }
    out
}

/// Correlate a raster with a kernel, dispatching on the variant.
pub fn convolve(src: &Raster, kernel: &Kernel) -> Raster {
    match src {
        Raster::Gray(g) => Raster::Gray(convolve_gray(g, kernel)),
        Raster::Rgb(c) => Raster::Rgb(convolve_rgb(c, kernel)),
    }
}

/// Correlate a grayscale raster, keeping the raw signed response.
///
/// Gradient magnitude paths need the unsaturated values, so this
/// returns one `f32` per pixel in row-major order.
pub fn correlate_raw(src: &GrayRaster, kernel: &Kernel) -> Vec<f32> {
    let mut out = Vec::with_capacity((src.width() * src.height()) as usize);
    for y in 0..src.height() {
        for x in 0..src.width() {
            out.push(accumulate_gray(src, kernel, x, y));
        }
    }
    out
}

fn accumulate_gray(src: &GrayRaster, kernel: &Kernel, x: u32, y: u32) -> f32 {
    let mut acc = 0.0f32;
    for ky in 0..kernel.height() {
        for kx in 0..kernel.width() {
            let weight = kernel
                .get(kx, ky)
                .unwrap_or_else(|| unreachable!("loop bounded by kernel shape"));
            let sx = x as i64 + kx as i64 - kernel.center_x() as i64;
            let sy = y as i64 + ky as i64 - kernel.center_y() as i64;
            acc += weight * src.get_clamped(sx, sy) as f32;
        }
    }
    acc
}

#[inline]
fn clamp_round(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_kernel_is_noop() {
        let src = GrayRaster::from_fn(5, 5, |x, y| (x * 50 + y * 7) as u8).unwrap();
        let k = Kernel::from_slice(3, 3, &[0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0]).unwrap();
        assert_eq!(convolve_gray(&src, &k), src);
    }

    #[test]
    fn test_box_kernel_flattens_constant_image() {
        let src = GrayRaster::filled(6, 6, 90).unwrap();
        let out = convolve_gray(&src, &Kernel::box_kernel(3).unwrap());
        assert!(out.data().iter().all(|&v| v == 90));
    }

    #[test]
    fn test_border_replication() {
        // A step edge with a box kernel: the outermost columns average
        // with replicated copies of themselves, not with zeros.
        let src = GrayRaster::from_fn(4, 3, |x, _| if x < 2 { 0 } else { 240 }).unwrap();
        let out = convolve_gray(&src, &Kernel::box_kernel(3).unwrap());
        assert_eq!(out.get(0, 1), Some(0));
        assert_eq!(out.get(3, 1), Some(240));
        // Middle columns mix the two sides.
        assert_eq!(out.get(1, 1), Some(80));
        assert_eq!(out.get(2, 1), Some(160));
    }

    #[test]
    fn test_output_saturates() {
        let src = GrayRaster::filled(3, 3, 200).unwrap();
        let k = Kernel::from_slice(1, 1, &[2.0]).unwrap();
        let out = convolve_gray(&src, &k);
        assert!(out.data().iter().all(|&v| v == 255));
        let neg = Kernel::from_slice(1, 1, &[-1.0]).unwrap();
        assert!(convolve_gray(&src, &neg).data().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_raw_response_keeps_sign() {
        let src = GrayRaster::from_fn(4, 4, |x, _| if x < 2 { 0 } else { 100 }).unwrap();
        let raw = correlate_raw(&src, &Kernel::sobel_x());
        assert!(raw.iter().any(|&v| v > 0.0));
        // Flip the image and the response flips too.
        let flipped = GrayRaster::from_fn(4, 4, |x, _| if x < 2 { 100 } else { 0 }).unwrap();
        let raw_flipped = correlate_raw(&flipped, &Kernel::sobel_x());
        assert!(raw_flipped.iter().any(|&v| v < 0.0));
    }

    #[test]
    fn test_rgb_channels_independent() {
        let src = RgbRaster::from_fn(4, 4, |_, _| [10, 100, 250]).unwrap();
        let out = convolve_rgb(&src, &Kernel::box_kernel(3).unwrap());
        assert_eq!(out.get(2, 2), Some([10, 100, 250]));
    }
}
