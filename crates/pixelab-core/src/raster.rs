//! Raster - the canonical in-memory image representation
//!
//! Every transform in the library operates on one of two raster shapes:
//!
//! - [`GrayRaster`] - H x W single-channel, 8-bit samples
//! - [`RgbRaster`] - H x W x 3 interleaved, channel order R, G, B
//!
//! [`Raster`] is the tagged union over the two. Transforms declare which
//! variant they accept and return through their signatures; there is no
//! implicit rank branching anywhere.
//!
//! # Ownership model
//!
//! Rasters own their sample buffer. Transforms never mutate an input in
//! place; they allocate a fresh output so the caller can keep the pristine
//! input (e.g. for an undo history it owns).

use crate::error::{Error, Result};

/// Standard luma weights for RGB -> gray conversion.
const LUMA_R: f32 = 0.299;
const LUMA_G: f32 = 0.587;
const LUMA_B: f32 = 0.114;

/// Single-channel 8-bit raster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayRaster {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl GrayRaster {
    /// Create a zero-filled grayscale raster.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `width` or `height` is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            data: vec![0; width as usize * height as usize],
        })
    }

    /// Create a raster from an existing row-major sample buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for a zero-sized shape and
    /// [`Error::LengthMismatch`] if `data.len() != width * height`.
    pub fn from_vec(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(Error::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create a raster by evaluating `f(x, y)` at every pixel.
    pub fn from_fn(width: u32, height: u32, f: impl Fn(u32, u32) -> u8) -> Result<Self> {
        let mut out = Self::new(width, height)?;
        for y in 0..height {
            for x in 0..width {
                out.set(x, y, f(x, y));
            }
        }
        Ok(out)
    }

    /// Create a raster filled with a constant value.
    pub fn filled(width: u32, height: u32, value: u8) -> Result<Self> {
        let mut out = Self::new(width, height)?;
        out.data.fill(value);
        Ok(out)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major sample buffer.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Get a pixel value, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x < self.width && y < self.height {
            Some(self.data[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    /// Get a pixel value with replicate (clamp-to-edge) border handling.
    #[inline]
    pub fn get_clamped(&self, x: i64, y: i64) -> u8 {
        let x = x.clamp(0, self.width as i64 - 1) as u32;
        let y = y.clamp(0, self.height as i64 - 1) as u32;
        self.data[(y * self.width + x) as usize]
    }

    /// Set a pixel value. Out-of-bounds writes are ignored.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: u8) {
        if x < self.width && y < self.height {
            self.data[(y * self.width + x) as usize] = value;
        }
    }

    /// Apply a per-sample function, producing a new raster.
    pub fn map(&self, f: impl Fn(u8) -> u8) -> GrayRaster {
        GrayRaster {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }

    /// Replicate the single channel into a 3-channel RGB raster.
    pub fn to_rgb(&self) -> RgbRaster {
        let mut data = Vec::with_capacity(self.data.len() * 3);
        for &v in &self.data {
            data.extend_from_slice(&[v, v, v]);
        }
        RgbRaster {
            width: self.width,
            height: self.height,
            data,
        }
    }
}

/// Three-channel 8-bit raster, interleaved R, G, B.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbRaster {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RgbRaster {
    /// Create a zero-filled (black) RGB raster.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `width` or `height` is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 3],
        })
    }

    /// Create a raster from an interleaved R,G,B sample buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for a zero-sized shape and
    /// [`Error::LengthMismatch`] if `data.len() != width * height * 3`.
    pub fn from_vec(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = width as usize * height as usize * 3;
        if data.len() != expected {
            return Err(Error::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create a raster by evaluating `f(x, y)` at every pixel.
    pub fn from_fn(width: u32, height: u32, f: impl Fn(u32, u32) -> [u8; 3]) -> Result<Self> {
        let mut out = Self::new(width, height)?;
        for y in 0..height {
            for x in 0..width {
                out.set(x, y, f(x, y));
            }
        }
        Ok(out)
    }

    /// Create a raster filled with a constant color.
    pub fn filled(width: u32, height: u32, color: [u8; 3]) -> Result<Self> {
        Self::from_fn(width, height, |_, _| color)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Interleaved R,G,B sample buffer.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Get a pixel, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x < self.width && y < self.height {
            let i = (y * self.width + x) as usize * 3;
            Some([self.data[i], self.data[i + 1], self.data[i + 2]])
        } else {
            None
        }
    }

    /// Get a pixel with replicate (clamp-to-edge) border handling.
    #[inline]
    pub fn get_clamped(&self, x: i64, y: i64) -> [u8; 3] {
        let x = x.clamp(0, self.width as i64 - 1) as u32;
        let y = y.clamp(0, self.height as i64 - 1) as u32;
        let i = (y * self.width + x) as usize * 3;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// Set a pixel. Out-of-bounds writes are ignored.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, pixel: [u8; 3]) {
        if x < self.width && y < self.height {
            let i = (y * self.width + x) as usize * 3;
            self.data[i..i + 3].copy_from_slice(&pixel);
        }
    }

    /// Apply a per-sample function across all channels, producing a new raster.
    pub fn map(&self, f: impl Fn(u8) -> u8) -> RgbRaster {
        RgbRaster {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }

    /// Apply a per-pixel function, producing a new raster.
    pub fn map_pixels(&self, f: impl Fn([u8; 3]) -> [u8; 3]) -> RgbRaster {
        let mut data = Vec::with_capacity(self.data.len());
        for p in self.data.chunks_exact(3) {
            let [r, g, b] = f([p[0], p[1], p[2]]);
            data.extend_from_slice(&[r, g, b]);
        }
        RgbRaster {
            width: self.width,
            height: self.height,
            data,
        }
    }

    /// Convert to grayscale with the standard luma weights.
    pub fn to_gray(&self) -> GrayRaster {
        let data = self
            .data
            .chunks_exact(3)
            .map(|p| luma(p[0], p[1], p[2]))
            .collect();
        GrayRaster {
            width: self.width,
            height: self.height,
            data,
        }
    }
}

/// Luma-weighted gray value of an RGB triple.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    (LUMA_R * r as f32 + LUMA_G * g as f32 + LUMA_B * b as f32).round() as u8
}

/// Tagged union over the two raster shapes.
///
/// Transforms that accept either shape take `&Raster` and match on the
/// variant; transforms restricted to one shape take the concrete type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Raster {
    Gray(GrayRaster),
    Rgb(RgbRaster),
}

impl Raster {
    #[inline]
    pub fn width(&self) -> u32 {
        match self {
            Raster::Gray(g) => g.width(),
            Raster::Rgb(c) => c.width(),
        }
    }

    #[inline]
    pub fn height(&self) -> u32 {
        match self {
            Raster::Gray(g) => g.height(),
            Raster::Rgb(c) => c.height(),
        }
    }

    /// Number of 8-bit samples (1 per pixel for gray, 3 for RGB).
    #[inline]
    pub fn sample_count(&self) -> usize {
        match self {
            Raster::Gray(g) => g.data().len(),
            Raster::Rgb(c) => c.data().len(),
        }
    }

    /// Reduce to grayscale. A gray raster is returned as a cheap clone;
    /// a color raster goes through the luma conversion.
    pub fn to_gray(&self) -> GrayRaster {
        match self {
            Raster::Gray(g) => g.clone(),
            Raster::Rgb(c) => c.to_gray(),
        }
    }

    /// Promote to RGB. A gray raster is replicated across the channels.
    pub fn to_rgb(&self) -> RgbRaster {
        match self {
            Raster::Gray(g) => g.to_rgb(),
            Raster::Rgb(c) => c.clone(),
        }
    }

    /// Apply a per-sample function, preserving the variant.
    pub fn map_samples(&self, f: impl Fn(u8) -> u8) -> Raster {
        match self {
            Raster::Gray(g) => Raster::Gray(g.map(f)),
            Raster::Rgb(c) => Raster::Rgb(c.map(f)),
        }
    }

    /// True if both rasters have the same variant and dimensions.
    pub fn same_shape(&self, other: &Raster) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
            && self.width() == other.width()
            && self.height() == other.height()
    }
}

impl From<GrayRaster> for Raster {
    fn from(g: GrayRaster) -> Self {
        Raster::Gray(g)
    }
}

impl From<RgbRaster> for Raster {
    fn from(c: RgbRaster) -> Self {
        Raster::Rgb(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_dimension_rejected() {
        assert!(GrayRaster::new(0, 10).is_err());
        assert!(GrayRaster::new(10, 0).is_err());
        assert!(RgbRaster::new(0, 0).is_err());
    }

    #[test]
    fn test_from_vec_length_check() {
        assert!(GrayRaster::from_vec(2, 2, vec![0; 3]).is_err());
        assert!(GrayRaster::from_vec(2, 2, vec![0; 4]).is_ok());
        assert!(RgbRaster::from_vec(2, 2, vec![0; 12]).is_ok());
        assert!(RgbRaster::from_vec(2, 2, vec![0; 4]).is_err());
    }

    #[test]
    fn test_luma_conversion() {
        let rgb = RgbRaster::filled(3, 3, [255, 0, 0]).unwrap();
        let gray = rgb.to_gray();
        // 0.299 * 255 = 76.245 -> 76
        assert_eq!(gray.get(1, 1), Some(76));
    }

    #[test]
    fn test_gray_to_gray_is_identity() {
        let g = GrayRaster::from_fn(4, 3, |x, y| (x * 10 + y) as u8).unwrap();
        let r = Raster::Gray(g.clone());
        assert_eq!(r.to_gray(), g);
    }

    #[test]
    fn test_rgb_replication() {
        let g = GrayRaster::filled(2, 2, 99).unwrap();
        let rgb = g.to_rgb();
        assert_eq!(rgb.get(0, 0), Some([99, 99, 99]));
        assert_eq!(rgb.to_gray().get(0, 0), Some(99));
    }

    #[test]
    fn test_get_clamped_borders() {
        let g = GrayRaster::from_fn(3, 3, |x, y| (y * 3 + x) as u8).unwrap();
        assert_eq!(g.get_clamped(-5, -5), 0);
        assert_eq!(g.get_clamped(10, 10), 8);
        assert_eq!(g.get_clamped(1, 1), 4);
    }

    #[test]
    fn test_map_samples_preserves_variant() {
        let g: Raster = GrayRaster::filled(2, 2, 10).unwrap().into();
        match g.map_samples(|v| v + 1) {
            Raster::Gray(out) => assert_eq!(out.get(0, 0), Some(11)),
            Raster::Rgb(_) => panic!("variant changed"),
        }
    }
}
