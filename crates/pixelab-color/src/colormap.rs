//! Colormap engine
//!
//! Pseudo-color mapping of a grayscale base through a 256-entry RGB
//! lookup table. Three LUT sources:
//!
//! - [`Palette`] - the fixed catalog of named palettes, each a short
//!   ordered anchor list interpolated to a full 256-step gradient.
//! - [`StandardMap`] - the analytic Jet / Hot / Ocean colormaps.
//! - [`PaletteBuilder`] / [`user_colormap`] - a user-defined 3-point
//!   gradient. The builder refuses to produce a LUT until all three
//!   control points are set.
//!
//! Color inputs are reduced to grayscale before mapping; the result is
//! always RGB.

use crate::error::{ColorError, ColorResult};
use pixelab_core::{ColorLut, Raster, RgbRaster};

/// Named palette catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    Pastel,
    Tron,
    TronAres,
    Divisions,
    Rainbow,
    Popsicle,
}

impl Palette {
    /// Ordered RGB anchor points, spread evenly across the 0-255 domain.
    pub fn anchors(self) -> &'static [[u8; 3]] {
        match self {
            Palette::Pastel => &[
                [255, 204, 230],
                [204, 255, 204],
                [204, 230, 255],
                [255, 255, 204],
                [230, 204, 255],
            ],
            Palette::Tron => &[[0, 14, 82], [0, 27, 145], [122, 147, 255]],
            Palette::TronAres => &[[64, 0, 32], [130, 0, 7], [255, 207, 208]],
            Palette::Divisions => &[[176, 0, 167], [0, 176, 47], [176, 91, 0]],
            Palette::Rainbow => &[
                [148, 0, 211],
                [75, 0, 130],
                [0, 0, 255],
                [0, 130, 20],
                [240, 240, 0],
                [240, 120, 0],
                [255, 0, 0],
            ],
            Palette::Popsicle => &[[255, 0, 0], [255, 255, 255], [0, 0, 255]],
        }
    }

    /// The palette's full 256-step gradient LUT.
    pub fn lut(self) -> ColorLut {
        gradient_lut(self.anchors())
    }
}

/// Library-standard analytic colormaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StandardMap {
    Jet,
    Hot,
    Ocean,
}

impl StandardMap {
    /// The analytic 256-entry LUT for this map.
    pub fn lut(self) -> ColorLut {
        match self {
            StandardMap::Jet => ColorLut::from_fn(|i| {
                let v = i as f64 / 255.0;
                [
                    ramp(1.5 - (4.0 * v - 3.0).abs()),
                    ramp(1.5 - (4.0 * v - 2.0).abs()),
                    ramp(1.5 - (4.0 * v - 1.0).abs()),
                ]
            }),
            StandardMap::Hot => ColorLut::from_fn(|i| {
                let v = i as f64 / 255.0;
                [ramp(3.0 * v), ramp(3.0 * v - 1.0), ramp(3.0 * v - 2.0)]
            }),
            StandardMap::Ocean => ColorLut::from_fn(|i| {
                let v = i as f64 / 255.0;
                [ramp(3.0 * v - 2.0), ramp((3.0 * v - 1.0) / 2.0), ramp(v)]
            }),
        }
    }
}

/// Clamp a unit-range channel value and scale to 8 bits.
#[inline]
fn ramp(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Build a 256-entry gradient LUT by linear interpolation between
/// evenly spaced anchor points.
///
/// With a single anchor the LUT is constant; the anchor list is never
/// empty for any palette in the catalog.
pub fn gradient_lut(anchors: &[[u8; 3]]) -> ColorLut {
    debug_assert!(!anchors.is_empty());
    if anchors.len() == 1 {
        let only = anchors[0];
        return ColorLut::from_fn(|_| only);
    }
    let spans = (anchors.len() - 1) as f64;
    ColorLut::from_fn(|i| {
        let pos = i as f64 / 255.0 * spans;
        let idx = (pos.floor() as usize).min(anchors.len() - 2);
        let t = pos - idx as f64;
        let a = anchors[idx];
        let b = anchors[idx + 1];
        [
            lerp8(a[0], b[0], t),
            lerp8(a[1], b[1], t),
            lerp8(a[2], b[2], t),
        ]
    })
}

#[inline]
fn lerp8(a: u8, b: u8, t: f64) -> u8 {
    (a as f64 + (b as f64 - a as f64) * t).round() as u8
}

/// Apply a named palette to a raster (grayscale-reduced first).
pub fn apply_palette(src: &Raster, palette: Palette) -> RgbRaster {
    palette.lut().apply(&src.to_gray())
}

/// Apply a standard analytic colormap to a raster.
pub fn apply_standard_map(src: &Raster, map: StandardMap) -> RgbRaster {
    map.lut().apply(&src.to_gray())
}

/// Apply a user-defined 3-point gradient colormap.
pub fn user_colormap(src: &Raster, c1: [u8; 3], c2: [u8; 3], c3: [u8; 3]) -> RgbRaster {
    gradient_lut(&[c1, c2, c3]).apply(&src.to_gray())
}

/// Incrementally assembled 3-point user colormap.
///
/// Mirrors the color-pick workflow: points are set one at a time and
/// the gradient only becomes buildable once all three exist.
#[derive(Debug, Clone, Default)]
pub struct PaletteBuilder {
    points: [Option<[u8; 3]>; 3],
}

impl PaletteBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set control point `index` (0, 1, or 2).
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::ControlPointOutOfRange`] for `index >= 3`.
    pub fn set_point(&mut self, index: usize, color: [u8; 3]) -> ColorResult<()> {
        let slot = self
            .points
            .get_mut(index)
            .ok_or(ColorError::ControlPointOutOfRange(index))?;
        *slot = Some(color);
        Ok(())
    }

    /// True once all three control points are set.
    pub fn is_complete(&self) -> bool {
        self.points.iter().all(Option::is_some)
    }

    /// Build the gradient LUT.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::IncompleteColormap`] naming the first
    /// missing control point.
    pub fn build(&self) -> ColorResult<ColorLut> {
        let mut anchors = [[0u8; 3]; 3];
        for (i, point) in self.points.iter().enumerate() {
            anchors[i] = point.ok_or(ColorError::IncompleteColormap { missing: i })?;
        }
        Ok(gradient_lut(&anchors))
    }
}
