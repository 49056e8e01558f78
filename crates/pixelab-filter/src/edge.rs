//! Edge detectors
//!
//! Gradient-based detectors built on the kernel bank, plus the Canny
//! pipeline with non-maximum suppression and hysteresis tracking. All
//! detectors reduce color input to luminance first.

use crate::convolve::{convolve_gray, correlate_raw};
use crate::kernel::Kernel;
use pixelab_core::{GrayRaster, Raster};

/// Hysteresis thresholds for [`canny`].
const CANNY_LOW: f32 = 100.0;
const CANNY_HIGH: f32 = 200.0;

/// Sobel edge magnitude, stretched so the strongest response maps to
/// 255.
pub fn sobel(src: &Raster) -> Raster {
    let gray = src.to_gray();
    let gx = correlate_raw(&gray, &Kernel::sobel_x());
    let gy = correlate_raw(&gray, &Kernel::sobel_y());
    let magnitude: Vec<f32> = gx
        .iter()
        .zip(&gy)
        .map(|(&a, &b)| (a * a + b * b).sqrt())
        .collect();
    Raster::Gray(normalize_to_gray(&magnitude, gray.width(), gray.height()))
}

/// Prewitt detector: the horizontal and vertical responses saturate
/// independently and are then blended half and half.
pub fn prewitt(src: &Raster) -> Raster {
    blend_pair(src, &Kernel::prewitt_x(), &Kernel::prewitt_y())
}

/// Roberts cross detector, blended like [`prewitt`].
pub fn roberts(src: &Raster) -> Raster {
    blend_pair(src, &Kernel::roberts_v(), &Kernel::roberts_h())
}

/// Absolute Laplacian response, stretched to the full tonal range.
pub fn laplacian(src: &Raster) -> Raster {
    let gray = src.to_gray();
    let response: Vec<f32> = correlate_raw(&gray, &Kernel::laplacian())
        .iter()
        .map(|v| v.abs())
        .collect();
    Raster::Gray(normalize_to_gray(&response, gray.width(), gray.height()))
}

/// Kirsch compass detector: the strongest of the eight directional
/// responses at each pixel.
pub fn kirsch(src: &Raster) -> Raster {
    let gray = src.to_gray();
    let mut best = gray.map(|_| 0);
    for kernel in Kernel::kirsch_compass() {
        let response = convolve_gray(&gray, &kernel);
        for (dst, &v) in best.data_mut().iter_mut().zip(response.data()) {
            *dst = (*dst).max(v);
        }
    }
    Raster::Gray(best)
}

/// Canny detector: Sobel gradients, L1 magnitude, non-maximum
/// suppression along the gradient direction, then hysteresis keeping
/// weak edges only where they connect to a strong one.
pub fn canny(src: &Raster) -> Raster {
    let gray = src.to_gray();
    let w = gray.width() as usize;
    let h = gray.height() as usize;
    let gx = correlate_raw(&gray, &Kernel::sobel_x());
    let gy = correlate_raw(&gray, &Kernel::sobel_y());
    let magnitude: Vec<f32> = gx.iter().zip(&gy).map(|(&a, &b)| a.abs() + b.abs()).collect();

    // Non-maximum suppression: keep a pixel only if it is at least as
    // strong as both neighbors along its gradient direction.
    let mut thin = vec![0.0f32; w * h];
    for y in 0..h {
        for x in 0..w {
            let i = y * w + x;
            let (dx, dy) = direction(gx[i], gy[i]);
            let ahead = neighbor(&magnitude, w, h, x, y, dx, dy);
            let behind = neighbor(&magnitude, w, h, x, y, -dx, -dy);
            if magnitude[i] >= ahead && magnitude[i] >= behind {
                thin[i] = magnitude[i];
            }
        }
    }

    // Hysteresis: flood from strong pixels through weak ones.
    let mut out = vec![0u8; w * h];
    let mut stack = Vec::new();
    for (i, &m) in thin.iter().enumerate() {
        if m > CANNY_HIGH {
            out[i] = 255;
            stack.push(i);
        }
    }
    while let Some(i) = stack.pop() {
        let x = (i % w) as i64;
        let y = (i / w) as i64;
        for dy in -1..=1i64 {
            for dx in -1..=1i64 {
                let nx = x + dx;
                let ny = y + dy;
                if nx < 0 || ny < 0 || nx >= w as i64 || ny >= h as i64 {
                    continue;
                }
                let j = (ny as usize) * w + nx as usize;
                if out[j] == 0 && thin[j] > CANNY_LOW {
                    out[j] = 255;
                    stack.push(j);
                }
            }
        }
    }
    let edges = GrayRaster::from_vec(gray.width(), gray.height(), out)
        .unwrap_or_else(|_| unreachable!("buffer sized from the raster"));
    Raster::Gray(edges)
}

/// Quantize a gradient vector to one of the four axis directions.
fn direction(gx: f32, gy: f32) -> (i64, i64) {
    let angle = gy.atan2(gx).to_degrees();
    let angle = if angle < 0.0 { angle + 180.0 } else { angle };
    if !(22.5..157.5).contains(&angle) {
        (1, 0)
    } else if angle < 67.5 {
        (1, 1)
    } else if angle < 112.5 {
        (0, 1)
    } else {
        (1, -1)
    }
}

fn neighbor(buf: &[f32], w: usize, h: usize, x: usize, y: usize, dx: i64, dy: i64) -> f32 {
    let nx = x as i64 + dx;
    let ny = y as i64 + dy;
    if nx < 0 || ny < 0 || nx >= w as i64 || ny >= h as i64 {
        0.0
    } else {
        buf[(ny as usize) * w + nx as usize]
    }
}

fn blend_pair(src: &Raster, a: &Kernel, b: &Kernel) -> Raster {
    let gray = src.to_gray();
    let ra = convolve_gray(&gray, a);
    let rb = convolve_gray(&gray, b);
    let mut out = ra;
    for (dst, &v) in out.data_mut().iter_mut().zip(rb.data()) {
        let blended = 0.5 * (*dst as f32) + 0.5 * (v as f32);
        *dst = blended.round().clamp(0.0, 255.0) as u8;
    }
    Raster::Gray(out)
}

fn normalize_to_gray(values: &[f32], width: u32, height: u32) -> GrayRaster {
    let max = values.iter().cloned().fold(0.0f32, f32::max);
    let min = values.iter().cloned().fold(f32::INFINITY, f32::min);
    let span = max - min;
    let data: Vec<u8> = if span <= 0.0 {
        vec![0; values.len()]
    } else {
        values
            .iter()
            .map(|&v| ((v - min) / span * 255.0).round() as u8)
            .collect()
    };
    GrayRaster::from_vec(width, height, data)
        .unwrap_or_else(|_| unreachable!("buffer sized from the raster"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertical_step() -> Raster {
        Raster::Gray(
            GrayRaster::from_fn(12, 12, |x, _| if x < 6 { 0 } else { 255 }).unwrap(),
        )
    }

    #[test]
    fn test_sobel_peaks_at_step() {
        let out = sobel(&vertical_step());
        let out = out.to_gray();
        assert_eq!(out.get(5, 6), Some(255));
        assert_eq!(out.get(6, 6), Some(255));
        assert_eq!(out.get(0, 6), Some(0));
        assert_eq!(out.get(11, 6), Some(0));
    }

    #[test]
    fn test_sobel_flat_image_is_black() {
        let flat: Raster = GrayRaster::filled(8, 8, 77).unwrap().into();
        assert!(sobel(&flat).to_gray().data().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_prewitt_blend_halves_single_direction() {
        // A vertical step only excites one of the pair, so the blend
        // reports half of the saturated response.
        let out = prewitt(&vertical_step());
        let out = out.to_gray();
        assert_eq!(out.get(5, 6), Some(128));
        assert_eq!(out.get(0, 6), Some(0));
    }

    #[test]
    fn test_roberts_marks_diagonal() {
        let g = GrayRaster::from_fn(10, 10, |x, y| if x > y { 255 } else { 0 }).unwrap();
        let out = roberts(&Raster::Gray(g));
        let out = out.to_gray();
        assert!(out.get(5, 4).unwrap() > 0);
        assert_eq!(out.get(1, 8), Some(0));
    }

    #[test]
    fn test_laplacian_zero_on_ramp() {
        // A linear ramp has zero second derivative away from borders.
        let g = GrayRaster::from_fn(10, 10, |x, _| (x * 20) as u8).unwrap();
        let out = laplacian(&Raster::Gray(g));
        let out = out.to_gray();
        assert_eq!(out.get(5, 5), Some(0));
    }

    #[test]
    fn test_kirsch_responds_in_all_orientations() {
        for image in [
            GrayRaster::from_fn(10, 10, |x, _| if x < 5 { 0 } else { 255 }).unwrap(),
            GrayRaster::from_fn(10, 10, |_, y| if y < 5 { 0 } else { 255 }).unwrap(),
        ] {
            let out = kirsch(&Raster::Gray(image));
            let out = out.to_gray();
            assert!(out.data().iter().any(|&v| v == 255));
        }
    }

    #[test]
    fn test_canny_thin_edge_on_strong_step() {
        let out = canny(&vertical_step());
        let out = out.to_gray();
        // A narrow band at the step, nothing in the flat regions.
        for y in 1..11 {
            assert_eq!(out.get(0, y), Some(0));
            assert_eq!(out.get(11, y), Some(0));
            assert!((4..=7).any(|x| out.get(x, y) == Some(255)));
        }
    }

    #[test]
    fn test_canny_ignores_weak_gradient() {
        // A shallow ramp never crosses the high threshold.
        let g = GrayRaster::from_fn(12, 12, |x, _| (x * 2) as u8).unwrap();
        let out = canny(&Raster::Gray(g));
        assert!(out.to_gray().data().iter().all(|&v| v == 0));
    }
}
