//! Lookup tables
//!
//! All histogram-shaping and colormap operations are expressed as a
//! 256-entry table indexed by input intensity. [`Lut`] maps intensity to
//! intensity; [`ColorLut`] maps intensity to an RGB triple.
//!
//! The fixed array length enforces the shape invariant by type: a LUT
//! always has exactly 256 entries and every entry is already a valid
//! 8-bit sample.

use crate::raster::{GrayRaster, RgbRaster};

/// Intensity-to-intensity lookup table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lut([u8; 256]);

impl Lut {
    /// Build a LUT by evaluating `f` at every intensity level.
    pub fn from_fn(f: impl Fn(usize) -> u8) -> Self {
        let mut table = [0u8; 256];
        for (i, entry) in table.iter_mut().enumerate() {
            *entry = f(i);
        }
        Lut(table)
    }

    /// The identity mapping.
    pub fn identity() -> Self {
        Self::from_fn(|i| i as u8)
    }

    #[inline]
    pub fn get(&self, intensity: u8) -> u8 {
        self.0[intensity as usize]
    }

    pub fn as_array(&self) -> &[u8; 256] {
        &self.0
    }

    /// Map every sample of a grayscale raster through the table.
    pub fn apply_gray(&self, src: &GrayRaster) -> GrayRaster {
        src.map(|v| self.get(v))
    }
}

impl From<[u8; 256]> for Lut {
    fn from(table: [u8; 256]) -> Self {
        Lut(table)
    }
}

/// Intensity-to-RGB lookup table, used by the colormap engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorLut([[u8; 3]; 256]);

impl ColorLut {
    /// Build a color LUT by evaluating `f` at every intensity level.
    pub fn from_fn(f: impl Fn(usize) -> [u8; 3]) -> Self {
        let mut table = [[0u8; 3]; 256];
        for (i, entry) in table.iter_mut().enumerate() {
            *entry = f(i);
        }
        ColorLut(table)
    }

    #[inline]
    pub fn get(&self, intensity: u8) -> [u8; 3] {
        self.0[intensity as usize]
    }

    pub fn as_array(&self) -> &[[u8; 3]; 256] {
        &self.0
    }

    /// Map a grayscale raster through the table, producing an RGB raster.
    pub fn apply(&self, src: &GrayRaster) -> RgbRaster {
        let mut data = Vec::with_capacity(src.data().len() * 3);
        for &v in src.data() {
            data.extend_from_slice(&self.get(v));
        }
        // Shape is preserved, so the constructor cannot fail.
        RgbRaster::from_vec(src.width(), src.height(), data)
            .unwrap_or_else(|_| unreachable!("LUT application preserves shape"))
    }
}
