//! Bitwise logic between rasters
//!
//! AND, OR and XOR combine two rasters samplewise after the secondary
//! operand has been resized to match the primary; NOT is the unary
//! complement. The combination rules (resize, gray/color promotion)
//! are shared with the arithmetic module.

use crate::arith::combine;
use crate::error::Result;
use crate::raster::Raster;

/// Elementwise bitwise AND.
pub fn and_images(a: &Raster, b: &Raster) -> Result<Raster> {
    combine(a, b, |x, y| x & y)
}

/// Elementwise bitwise OR.
pub fn or_images(a: &Raster, b: &Raster) -> Result<Raster> {
    combine(a, b, |x, y| x | y)
}

/// Elementwise bitwise XOR.
pub fn xor_images(a: &Raster, b: &Raster) -> Result<Raster> {
    combine(a, b, |x, y| x ^ y)
}

/// Complement every sample: `255 - x`.
///
/// Applying the operation twice returns the original raster exactly.
pub fn not_image(src: &Raster) -> Raster {
    src.map_samples(|v| !v)
}
