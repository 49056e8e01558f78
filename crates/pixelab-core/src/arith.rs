//! Raster arithmetic
//!
//! Scalar and dual-image arithmetic with the numeric semantics the rest
//! of the library relies on:
//!
//! - Addition and subtraction saturate at the 8-bit range bounds; values
//!   never wrap around.
//! - Multiplication is computed in floating point, clipped to [0, 255]
//!   and rounded back to 8 bits.
//! - Dual-image operations first resample the secondary operand to the
//!   primary operand's dimensions; mixed gray/color operands are promoted
//!   to color.

use crate::error::{Error, Result};
use crate::raster::Raster;
use crate::resize::resize_bilinear;

/// Add a constant to every sample, saturating at 255.
pub fn add_scalar(src: &Raster, value: u8) -> Raster {
    src.map_samples(|v| v.saturating_add(value))
}

/// Subtract a constant from every sample, saturating at 0.
pub fn sub_scalar(src: &Raster, value: u8) -> Raster {
    src.map_samples(|v| v.saturating_sub(value))
}

/// Multiply every sample by a factor in floating point, then clip to
/// [0, 255] and round.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if `factor` is negative or not
/// finite.
pub fn mul_scalar(src: &Raster, factor: f32) -> Result<Raster> {
    if !factor.is_finite() || factor < 0.0 {
        return Err(Error::InvalidParameter(format!(
            "scalar factor must be finite and >= 0, got {factor}"
        )));
    }
    Ok(src.map_samples(|v| (v as f32 * factor).clamp(0.0, 255.0).round() as u8))
}

/// Elementwise saturating sum of two rasters.
///
/// The secondary raster is bilinear-resized to the primary raster's
/// dimensions before combining.
pub fn add_images(a: &Raster, b: &Raster) -> Result<Raster> {
    combine(a, b, |x, y| x.saturating_add(y))
}

/// Elementwise saturating difference `a - b`.
pub fn sub_images(a: &Raster, b: &Raster) -> Result<Raster> {
    combine(a, b, |x, y| x.saturating_sub(y))
}

/// Elementwise product scaled back into the visible range:
/// `clip(a * b / 255)`.
///
/// Dividing by 255 keeps the typical case visible instead of saturating
/// to white.
pub fn mul_images(a: &Raster, b: &Raster) -> Result<Raster> {
    combine(a, b, |x, y| {
        (x as f32 * y as f32 / 255.0).clamp(0.0, 255.0).round() as u8
    })
}

/// Resize `b` to `a`'s dimensions and combine the two samplewise.
///
/// If either operand is color, both are promoted to RGB; two gray
/// operands stay gray.
pub(crate) fn combine(a: &Raster, b: &Raster, f: impl Fn(u8, u8) -> u8) -> Result<Raster> {
    let b = resize_bilinear(b, a.width(), a.height())?;
    match (a, &b) {
        (Raster::Gray(ga), Raster::Gray(gb)) => {
            let mut out = ga.clone();
            for (dst, &src) in out.data_mut().iter_mut().zip(gb.data()) {
                *dst = f(*dst, src);
            }
            Ok(Raster::Gray(out))
        }
        _ => {
            let mut out = a.to_rgb();
            let cb = b.to_rgb();
            for (dst, &src) in out.data_mut().iter_mut().zip(cb.data()) {
                *dst = f(*dst, src);
            }
            Ok(Raster::Rgb(out))
        }
    }
}
