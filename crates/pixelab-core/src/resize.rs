//! Raster resampling
//!
//! Bilinear and nearest-neighbor resizing. The dual-image operations use
//! bilinear resampling to bring the secondary operand to the primary
//! operand's dimensions before any elementwise combination.

use crate::error::{Error, Result};
use crate::raster::{GrayRaster, Raster, RgbRaster};

/// Resample a raster to the target dimensions with bilinear interpolation.
///
/// Uses the half-pixel center convention: source coordinates are
/// `(dst + 0.5) * scale - 0.5`, clamped to the source extent.
///
/// # Errors
///
/// Returns [`Error::InvalidDimension`] if the target shape is zero-sized.
pub fn resize_bilinear(src: &Raster, width: u32, height: u32) -> Result<Raster> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimension { width, height });
    }
    if width == src.width() && height == src.height() {
        return Ok(src.clone());
    }
    Ok(match src {
        Raster::Gray(g) => Raster::Gray(resize_bilinear_gray(g, width, height)?),
        Raster::Rgb(c) => Raster::Rgb(resize_bilinear_rgb(c, width, height)?),
    })
}

/// Bilinear resample of a grayscale raster.
pub fn resize_bilinear_gray(src: &GrayRaster, width: u32, height: u32) -> Result<GrayRaster> {
    let mut out = GrayRaster::new(width, height)?;
    let sx = src.width() as f64 / width as f64;
    let sy = src.height() as f64 / height as f64;
    for y in 0..height {
        for x in 0..width {
            let (x0, y0, x1, y1, fx, fy) = sample_coords(x, y, sx, sy, src.width(), src.height());
            let top = lerp(
                src.get_clamped(x0, y0) as f64,
                src.get_clamped(x1, y0) as f64,
                fx,
            );
            let bottom = lerp(
                src.get_clamped(x0, y1) as f64,
                src.get_clamped(x1, y1) as f64,
                fx,
            );
            out.set(x, y, lerp(top, bottom, fy).round().clamp(0.0, 255.0) as u8);
        }
    }
    Ok(out)
}

/// Bilinear resample of an RGB raster.
pub fn resize_bilinear_rgb(src: &RgbRaster, width: u32, height: u32) -> Result<RgbRaster> {
    let mut out = RgbRaster::new(width, height)?;
    let sx = src.width() as f64 / width as f64;
    let sy = src.height() as f64 / height as f64;
    for y in 0..height {
        for x in 0..width {
            let (x0, y0, x1, y1, fx, fy) = sample_coords(x, y, sx, sy, src.width(), src.height());
            let p00 = src.get_clamped(x0, y0);
            let p10 = src.get_clamped(x1, y0);
            let p01 = src.get_clamped(x0, y1);
            let p11 = src.get_clamped(x1, y1);
            let mut pixel = [0u8; 3];
            for ch in 0..3 {
                let top = lerp(p00[ch] as f64, p10[ch] as f64, fx);
                let bottom = lerp(p01[ch] as f64, p11[ch] as f64, fx);
                pixel[ch] = lerp(top, bottom, fy).round().clamp(0.0, 255.0) as u8;
            }
            out.set(x, y, pixel);
        }
    }
    Ok(out)
}

/// Resample a raster to the target dimensions by nearest-neighbor sampling.
pub fn resize_nearest(src: &Raster, width: u32, height: u32) -> Result<Raster> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimension { width, height });
    }
    let sx = src.width() as f64 / width as f64;
    let sy = src.height() as f64 / height as f64;
    let pick = |x: u32, y: u32| {
        let src_x = ((x as f64 + 0.5) * sx) as i64;
        let src_y = ((y as f64 + 0.5) * sy) as i64;
        (src_x, src_y)
    };
    Ok(match src {
        Raster::Gray(g) => {
            let mut out = GrayRaster::new(width, height)?;
            for y in 0..height {
                for x in 0..width {
                    let (sx, sy) = pick(x, y);
                    out.set(x, y, g.get_clamped(sx, sy));
                }
            }
            Raster::Gray(out)
        }
        Raster::Rgb(c) => {
            let mut out = RgbRaster::new(width, height)?;
            for y in 0..height {
                for x in 0..width {
                    let (sx, sy) = pick(x, y);
                    out.set(x, y, c.get_clamped(sx, sy));
                }
            }
            Raster::Rgb(out)
        }
    })
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[inline]
fn sample_coords(
    x: u32,
    y: u32,
    sx: f64,
    sy: f64,
    src_w: u32,
    src_h: u32,
) -> (i64, i64, i64, i64, f64, f64) {
    let fx = ((x as f64 + 0.5) * sx - 0.5).clamp(0.0, src_w as f64 - 1.0);
    let fy = ((y as f64 + 0.5) * sy - 0.5).clamp(0.0, src_h as f64 - 1.0);
    let x0 = fx.floor() as i64;
    let y0 = fy.floor() as i64;
    (x0, y0, x0 + 1, y0 + 1, fx - x0 as f64, fy - y0 as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_same_size_is_clone() {
        let g: Raster = GrayRaster::from_fn(4, 4, |x, y| (x + y) as u8).unwrap().into();
        let r = resize_bilinear(&g, 4, 4).unwrap();
        assert_eq!(r, g);
    }

    #[test]
    fn test_resize_constant_stays_constant() {
        let g: Raster = GrayRaster::filled(5, 7, 42).unwrap().into();
        let r = resize_bilinear(&g, 13, 3).unwrap();
        match r {
            Raster::Gray(out) => assert!(out.data().iter().all(|&v| v == 42)),
            Raster::Rgb(_) => panic!("variant changed"),
        }
    }

    #[test]
    fn test_resize_zero_target_fails() {
        let g: Raster = GrayRaster::filled(5, 5, 0).unwrap().into();
        assert!(resize_bilinear(&g, 0, 5).is_err());
        assert!(resize_nearest(&g, 5, 0).is_err());
    }

    #[test]
    fn test_upscale_dimensions() {
        let c: Raster = RgbRaster::filled(2, 2, [1, 2, 3]).unwrap().into();
        let r = resize_bilinear(&c, 8, 6).unwrap();
        assert_eq!(r.width(), 8);
        assert_eq!(r.height(), 6);
    }
}
