//! Rank-order filters
//!
//! Median, mode, maximum, and minimum over a square window. Maximum
//! and minimum are the morphological dilation and erosion, so they
//! delegate to the morphology crate.

use crate::error::FilterResult;
use pixelab_core::{GrayRaster, Raster, RgbRaster};
use pixelab_morph::{dilate, erode};

/// Median over a square window, channelwise for color rasters.
///
/// An even `size` is bumped to the next odd value so the window always
/// has a true middle element.
pub fn median_filter(src: &Raster, size: u32) -> FilterResult<Raster> {
    let size = force_odd(size);
    Ok(match src {
        Raster::Gray(g) => Raster::Gray(median_gray(g, size)),
        Raster::Rgb(c) => Raster::Rgb(median_rgb(c, size)),
    })
}

/// Mode (most frequent value) over a square window.
///
/// The statistic is only well defined on a single channel, so color
/// input is first reduced to luminance; the result is replicated back
/// to three channels. Ties go to the smallest value.
pub fn mode_filter(src: &Raster, size: u32) -> FilterResult<Raster> {
    let size = force_odd(size);
    let gray = src.to_gray();
    let radius = (size / 2) as i64;
    let mut out = gray.clone();
    for y in 0..gray.height() {
        for x in 0..gray.width() {
            let mut counts = [0u32; 256];
            for dy in -radius..=radius {
                for dx in -radius..=radius {
                    counts[gray.get_clamped(x as i64 + dx, y as i64 + dy) as usize] += 1;
                }
            }
            let mut best = 0usize;
            for (v, &count) in counts.iter().enumerate() {
                if count > counts[best] {
                    best = v;
                }
            }
            out.set(x, y, best as u8);
        }
    }
    Ok(Raster::Rgb(out.to_rgb()))
}

/// Maximum over a square window (grayscale dilation).
pub fn max_filter(src: &Raster, size: u32) -> FilterResult<Raster> {
    Ok(dilate(src, force_odd(size))?)
}

/// Minimum over a square window (grayscale erosion).
pub fn min_filter(src: &Raster, size: u32) -> FilterResult<Raster> {
    Ok(erode(src, force_odd(size))?)
}

fn force_odd(size: u32) -> u32 {
    if size == 0 {
        1
    } else if size.is_multiple_of(2) {
        size + 1
    } else {
        size
    }
}

fn median_gray(src: &GrayRaster, size: u32) -> GrayRaster {
    let radius = (size / 2) as i64;
    let mut out = src.clone();
    let mut window = Vec::with_capacity((size * size) as usize);
    for y in 0..src.height() {
        for x in 0..src.width() {
            window.clear();
            for dy in -radius..=radius {
                for dx in -radius..=radius {
                    window.push(src.get_clamped(x as i64 + dx, y as i64 + dy));
                }
            }
            window.sort_unstable();
            out.set(x, y, window[window.len() / 2]);
        }
    }
    out
}

fn median_rgb(src: &RgbRaster, size: u32) -> RgbRaster {
    let radius = (size / 2) as i64;
    let mut out = src.clone();
    let mut windows: [Vec<u8>; 3] = Default::default();
    for y in 0..src.height() {
        for x in 0..src.width() {
            for w in &mut windows {
                w.clear();
            }
            for dy in -radius..=radius {
                for dx in -radius..=radius {
                    let p = src.get_clamped(x as i64 + dx, y as i64 + dy);
                    for ch in 0..3 {
                        windows[ch].push(p[ch]);
                    }
                }
            }
            let mut pixel = [0u8; 3];
            for ch in 0..3 {
                windows[ch].sort_unstable();
                pixel[ch] = windows[ch][windows[ch].len() / 2];
            }
            out.set(x, y, pixel);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn speckled() -> Raster {
        let mut g = GrayRaster::filled(9, 9, 100).unwrap();
        g.set(4, 4, 255);
        g.set(2, 7, 0);
        Raster::Gray(g)
    }

    #[test]
    fn test_median_removes_impulses() {
        let out = median_filter(&speckled(), 3).unwrap();
        assert!(out.to_gray().data().iter().all(|&v| v == 100));
    }

    #[test]
    fn test_median_even_size_bumped_to_odd() {
        // Size 2 behaves as size 3, keeping a well-defined middle.
        let a = median_filter(&speckled(), 2).unwrap();
        let b = median_filter(&speckled(), 3).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_mode_returns_color_replica() {
        let out = mode_filter(&speckled(), 3).unwrap();
        match &out {
            Raster::Rgb(c) => {
                let p = c.get(4, 4).unwrap();
                assert_eq!(p, [100, 100, 100]);
            }
            Raster::Gray(_) => panic!("mode output should be three-channel"),
        }
    }

    #[test]
    fn test_mode_tie_breaks_toward_smaller_value() {
        // At the middle pixel the replicated rows give each of the
        // three values exactly three hits, so the smallest one wins.
        let mut g = GrayRaster::new(3, 1).unwrap();
        g.set(0, 0, 30);
        g.set(1, 0, 10);
        g.set(2, 0, 20);
        let out = mode_filter(&Raster::Gray(g), 3).unwrap();
        match out {
            Raster::Rgb(c) => {
                assert_eq!(c.get(1, 0), Some([10, 10, 10]));
            }
            Raster::Gray(_) => panic!("mode output should be three-channel"),
        }
    }

    #[test]
    fn test_max_and_min_bracket_original() {
        let src = speckled();
        let hi = max_filter(&src, 3).unwrap();
        let lo = min_filter(&src, 3).unwrap();
        assert_eq!(hi.to_gray().get(3, 3), Some(255));
        assert_eq!(lo.to_gray().get(3, 3), Some(100));
        assert_eq!(lo.to_gray().get(2, 6), Some(0));
    }
}
