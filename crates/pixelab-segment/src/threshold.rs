//! Global thresholding
//!
//! Histogram-driven threshold selection (Otsu, mean, Kapur entropy,
//! isodata) and the masks built from the selected level. Every
//! operation reduces color input to luminance and produces a
//! grayscale raster whose samples are 0 or 255 (or the three levels
//! of [`multilevel`]).

use pixelab_core::{GrayRaster, Raster, gray_histogram};

/// Pick the threshold maximizing between-class variance.
pub fn otsu_level(hist: &[u32; 256]) -> u8 {
    let total: u64 = hist.iter().map(|&c| c as u64).sum();
    if total == 0 {
        return 0;
    }
    let weighted_total: f64 = hist
        .iter()
        .enumerate()
        .map(|(v, &c)| (v as f64) * (c as f64))
        .sum();

    let mut best = 0u8;
    let mut best_variance = -1.0f64;
    let mut w0 = 0.0f64;
    let mut sum0 = 0.0f64;
    for t in 0..256usize {
        w0 += hist[t] as f64;
        if w0 == 0.0 {
            continue;
        }
        let w1 = total as f64 - w0;
        if w1 == 0.0 {
            break;
        }
        sum0 += (t as f64) * (hist[t] as f64);
        let m0 = sum0 / w0;
        let m1 = (weighted_total - sum0) / w1;
        let variance = w0 * w1 * (m0 - m1) * (m0 - m1);
        if variance > best_variance {
            best_variance = variance;
            best = t as u8;
        }
    }
    best
}

/// Binarize at the Otsu level: values strictly above go white.
pub fn otsu(src: &Raster) -> Raster {
    let gray = src.to_gray();
    let level = otsu_level(&gray_histogram(&gray));
    binarize_at(&gray, level as f64)
}

/// Binarize at the mean intensity.
pub fn mean_threshold(src: &Raster) -> Raster {
    let gray = src.to_gray();
    let mean = gray.data().iter().map(|&v| v as f64).sum::<f64>() / gray.data().len() as f64;
    binarize_at(&gray, mean)
}

/// Binarize at the Kapur maximum-entropy split.
///
/// The threshold maximizes the sum of the two class entropies over
/// the normalized histogram. Falls back to 128 when no split leaves
/// both classes populated.
pub fn kapur(src: &Raster) -> Raster {
    const EPS: f64 = 1e-10;
    let gray = src.to_gray();
    let hist = gray_histogram(&gray);
    let total = gray.data().len() as f64;

    // Cumulative probability and entropy tables.
    let mut p_cum = [0.0f64; 256];
    let mut h_cum = [0.0f64; 256];
    let mut p_acc = 0.0;
    let mut h_acc = 0.0;
    for i in 0..256 {
        let p = hist[i] as f64 / total;
        p_acc += p;
        h_acc += -p * (p + EPS).ln();
        p_cum[i] = p_acc;
        h_cum[i] = h_acc;
    }

    let mut best = 128u8;
    let mut best_entropy = f64::NEG_INFINITY;
    for t in 1..255usize {
        let w0 = p_cum[t];
        let w1 = 1.0 - w0;
        if w0 == 0.0 || w1 == 0.0 {
            continue;
        }
        let h0 = h_cum[t] / w0 + (w0 + EPS).ln();
        let h1 = (h_cum[255] - h_cum[t]) / w1 + (w1 + EPS).ln();
        if h0 + h1 > best_entropy {
            best_entropy = h0 + h1;
            best = t as u8;
        }
    }
    binarize_at(&gray, best as f64)
}

/// Binarize by iterated class means, starting from 128.
///
/// Each round splits at the current threshold, averages the two class
/// means, and stops when the threshold stabilizes or one side empties.
pub fn isodata(src: &Raster) -> Raster {
    let gray = src.to_gray();
    let mut t = 128u8;
    loop {
        let mut low_sum = 0u64;
        let mut low_count = 0u64;
        let mut high_sum = 0u64;
        let mut high_count = 0u64;
        for &v in gray.data() {
            if v <= t {
                low_sum += v as u64;
                low_count += 1;
            } else {
                high_sum += v as u64;
                high_count += 1;
            }
        }
        if low_count == 0 || high_count == 0 {
            break;
        }
        let m1 = low_sum as f64 / low_count as f64;
        let m2 = high_sum as f64 / high_count as f64;
        let new_t = ((m1 + m2) / 2.0) as u8;
        if new_t == t {
            break;
        }
        t = new_t;
    }
    binarize_at(&gray, t as f64)
}

/// Mask of the values in `lo..=hi` (inclusive band).
pub fn band_threshold(src: &Raster, lo: u8, hi: u8) -> Raster {
    let gray = src.to_gray();
    Raster::Gray(gray.map(|v| if v >= lo && v <= hi { 255 } else { 0 }))
}

/// Three-level segmentation: 0 below the Otsu split, 127 up to the
/// mean of the upper region, 255 above it.
pub fn multilevel(src: &Raster) -> Raster {
    let gray = src.to_gray();
    let t1 = otsu_level(&gray_histogram(&gray));

    let mut upper_sum = 0u64;
    let mut upper_count = 0u64;
    for &v in gray.data() {
        if v > t1 {
            upper_sum += v as u64;
            upper_count += 1;
        }
    }
    let out = if upper_count == 0 {
        gray.map(|_| 0)
    } else {
        let t2 = (upper_sum as f64 / upper_count as f64) as u8;
        gray.map(|v| {
            if v > t2 {
                255
            } else if v > t1 {
                127
            } else {
                0
            }
        })
    };
    Raster::Gray(out)
}

fn binarize_at(gray: &GrayRaster, threshold: f64) -> Raster {
    Raster::Gray(gray.map(|v| if v as f64 > threshold { 255 } else { 0 }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bimodal() -> Raster {
        // Half at 40, half at 200.
        Raster::Gray(
            GrayRaster::from_fn(16, 16, |x, _| if x < 8 { 40 } else { 200 }).unwrap(),
        )
    }

    #[test]
    fn test_otsu_level_splits_bimodal_histogram() {
        let mut hist = [0u32; 256];
        hist[40] = 100;
        hist[200] = 100;
        let level = otsu_level(&hist);
        assert!((40..200).contains(&level));
    }

    #[test]
    fn test_otsu_separates_modes() {
        let out = otsu(&bimodal()).to_gray();
        assert_eq!(out.get(0, 0), Some(0));
        assert_eq!(out.get(15, 0), Some(255));
    }

    #[test]
    fn test_otsu_constant_image_does_not_panic() {
        let flat: Raster = GrayRaster::filled(4, 4, 90).unwrap().into();
        let out = otsu(&flat).to_gray();
        // All samples land on the same side.
        let first = out.get(0, 0).unwrap();
        assert!(out.data().iter().all(|&v| v == first));
    }

    #[test]
    fn test_mean_threshold_splits_at_average() {
        let out = mean_threshold(&bimodal()).to_gray();
        // Mean is 120: 40 goes black, 200 goes white.
        assert_eq!(out.get(0, 0), Some(0));
        assert_eq!(out.get(15, 0), Some(255));
    }

    #[test]
    fn test_kapur_separates_modes() {
        let out = kapur(&bimodal()).to_gray();
        assert_eq!(out.get(0, 0), Some(0));
        assert_eq!(out.get(15, 0), Some(255));
    }

    #[test]
    fn test_isodata_converges_on_bimodal() {
        // Class means are 40 and 200, so the threshold settles at 120.
        let out = isodata(&bimodal()).to_gray();
        assert_eq!(out.get(7, 0), Some(0));
        assert_eq!(out.get(8, 0), Some(255));
    }

    #[test]
    fn test_isodata_constant_image_terminates() {
        let flat: Raster = GrayRaster::filled(4, 4, 10).unwrap().into();
        let out = isodata(&flat).to_gray();
        assert!(out.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_band_threshold_is_inclusive() {
        let g = GrayRaster::from_fn(4, 1, |x, _| (x * 50) as u8).unwrap();
        let out = band_threshold(&Raster::Gray(g), 50, 100).to_gray();
        assert_eq!(out.get(0, 0), Some(0)); // 0
        assert_eq!(out.get(1, 0), Some(255)); // 50, lower bound
        assert_eq!(out.get(2, 0), Some(255)); // 100, upper bound
        assert_eq!(out.get(3, 0), Some(0)); // 150
    }

    #[test]
    fn test_multilevel_produces_three_levels() {
        let g = GrayRaster::from_fn(12, 1, |x, _| {
            if x < 4 {
                20
            } else if x < 8 {
                140
            } else {
                250
            }
        })
        .unwrap();
        let out = multilevel(&Raster::Gray(g)).to_gray();
        assert_eq!(out.get(0, 0), Some(0));
        assert_eq!(out.get(5, 0), Some(127));
        assert_eq!(out.get(10, 0), Some(255));
    }
}
