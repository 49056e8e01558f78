//! Binary thresholding
//!
//! Fixed-threshold and local-mean adaptive binarization. Both accept
//! either raster variant and reduce color inputs to grayscale first.
//! Automatic global threshold selection (Otsu, Kapur, Isodata) lives in
//! the segmentation crate.

use pixelab_core::{GrayRaster, Raster};

/// Block size of the adaptive threshold neighborhood.
const ADAPTIVE_BLOCK: i64 = 11;
/// Constant subtracted from the local mean.
const ADAPTIVE_C: f64 = 2.0;

/// Fixed-threshold binarization: gray values strictly above `threshold`
/// become 255, the rest 0.
pub fn binarize_manual(src: &Raster, threshold: u8) -> GrayRaster {
    src.to_gray()
        .map(|v| if v > threshold { 255 } else { 0 })
}

/// Local-mean adaptive binarization.
///
/// Each pixel is compared against the mean of its 11x11 neighborhood
/// minus a constant offset of 2, with replicated borders. Pixels above
/// the local threshold become 255.
pub fn binarize_adaptive(src: &Raster) -> GrayRaster {
    let gray = src.to_gray();
    let w = gray.width();
    let h = gray.height();
    let half = ADAPTIVE_BLOCK / 2;
    let window = (ADAPTIVE_BLOCK * ADAPTIVE_BLOCK) as f64;

    let mut out = gray.clone();
    for y in 0..h {
        for x in 0..w {
            let mut sum = 0u32;
            for dy in -half..=half {
                for dx in -half..=half {
                    sum += gray.get_clamped(x as i64 + dx, y as i64 + dy) as u32;
                }
            }
            let local = sum as f64 / window - ADAPTIVE_C;
            let v = gray.get_clamped(x as i64, y as i64) as f64;
            out.set(x, y, if v > local { 255 } else { 0 });
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixelab_core::GrayRaster;

    #[test]
    fn test_manual_threshold_is_strict() {
        let g: Raster = GrayRaster::from_vec(3, 1, vec![99, 100, 101]).unwrap().into();
        let out = binarize_manual(&g, 100);
        assert_eq!(out.data(), &[0, 0, 255]);
    }

    #[test]
    fn test_manual_threshold_monotonic_in_white_count() {
        let g: Raster = GrayRaster::from_fn(16, 16, |x, y| (x * 16 + y) as u8)
            .unwrap()
            .into();
        let mut last = usize::MAX;
        for t in [0u8, 32, 64, 128, 200, 254] {
            let whites = binarize_manual(&g, t)
                .data()
                .iter()
                .filter(|&&v| v == 255)
                .count();
            assert!(whites <= last, "white count increased at t={t}");
            last = whites;
        }
    }

    #[test]
    fn test_adaptive_on_constant_image() {
        // Constant image: every pixel sits above (mean - 2), so all white.
        let g: Raster = GrayRaster::filled(20, 20, 100).unwrap().into();
        let out = binarize_adaptive(&g);
        assert!(out.data().iter().all(|&v| v == 255));
    }

    #[test]
    fn test_adaptive_separates_step_edge() {
        let g: Raster = GrayRaster::from_fn(24, 8, |x, _| if x < 12 { 20 } else { 220 })
            .unwrap()
            .into();
        let out = binarize_adaptive(&g);
        // Pixels far from the edge fall on opposite sides of the local mean.
        assert_eq!(out.get(1, 4), Some(255));
        assert_eq!(out.get(22, 4), Some(255));
        // Just left of the edge the local mean is pulled up by the bright side.
        assert_eq!(out.get(11, 4), Some(0));
    }
}
