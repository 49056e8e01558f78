//! Structuring-element morphology
//!
//! Erosion, dilation, opening, closing, and the morphological gradient
//! over a flat rectangular structuring element:
//!
//! - **Dilation** takes the neighborhood maximum, expanding bright
//!   regions.
//! - **Erosion** takes the neighborhood minimum, shrinking bright
//!   regions.
//! - **Opening** (erode then dilate) removes small bright noise.
//! - **Closing** (dilate then erode) fills small dark gaps.
//! - **Gradient** (dilation minus erosion) highlights boundaries.
//!
//! Color rasters are processed channelwise. Neighborhood cells that
//! fall outside the image are ignored, so borders never bias toward an
//! artificial extreme.

use crate::error::MorphResult;
use crate::sel::StructElement;
use pixelab_core::{GrayRaster, Raster, RgbRaster};

/// Dilate with the given structuring element.
pub fn dilate_with(src: &Raster, sel: &StructElement) -> Raster {
    extremum(src, sel, true)
}

/// Erode with the given structuring element.
pub fn erode_with(src: &Raster, sel: &StructElement) -> Raster {
    extremum(src, sel, false)
}

/// Open: erosion followed by dilation.
pub fn open_with(src: &Raster, sel: &StructElement) -> Raster {
    dilate_with(&erode_with(src, sel), sel)
}

/// Close: dilation followed by erosion.
pub fn close_with(src: &Raster, sel: &StructElement) -> Raster {
    erode_with(&dilate_with(src, sel), sel)
}

/// Morphological gradient: dilation minus erosion, saturating.
pub fn gradient_with(src: &Raster, sel: &StructElement) -> Raster {
    let dilated = dilate_with(src, sel);
    let eroded = erode_with(src, sel);
    match (dilated, eroded) {
        (Raster::Gray(d), Raster::Gray(e)) => {
            let mut out = d;
            for (dst, &sub) in out.data_mut().iter_mut().zip(e.data()) {
                *dst = dst.saturating_sub(sub);
            }
            Raster::Gray(out)
        }
        (Raster::Rgb(d), Raster::Rgb(e)) => {
            let mut out = d;
            for (dst, &sub) in out.data_mut().iter_mut().zip(e.data()) {
                *dst = dst.saturating_sub(sub);
            }
            Raster::Rgb(out)
        }
        // dilate/erode preserve the variant
        _ => unreachable!("dilation and erosion preserve the raster variant"),
    }
}

/// Dilate with a square element of the caller's size.
pub fn dilate(src: &Raster, size: u32) -> MorphResult<Raster> {
    Ok(dilate_with(src, &StructElement::square(size)?))
}

/// Erode with a square element of the caller's size.
pub fn erode(src: &Raster, size: u32) -> MorphResult<Raster> {
    Ok(erode_with(src, &StructElement::square(size)?))
}

/// Open with a square element of the caller's size.
pub fn open(src: &Raster, size: u32) -> MorphResult<Raster> {
    Ok(open_with(src, &StructElement::square(size)?))
}

/// Close with a square element of the caller's size.
pub fn close(src: &Raster, size: u32) -> MorphResult<Raster> {
    Ok(close_with(src, &StructElement::square(size)?))
}

/// Morphological gradient with a square element of the caller's size.
pub fn gradient(src: &Raster, size: u32) -> MorphResult<Raster> {
    Ok(gradient_with(src, &StructElement::square(size)?))
}

fn extremum(src: &Raster, sel: &StructElement, take_max: bool) -> Raster {
    match src {
        Raster::Gray(g) => Raster::Gray(extremum_gray(g, sel, take_max)),
        Raster::Rgb(c) => Raster::Rgb(extremum_rgb(c, sel, take_max)),
    }
}

fn extremum_gray(src: &GrayRaster, sel: &StructElement, take_max: bool) -> GrayRaster {
    let mut out = src.clone();
    let w = src.width() as i64;
    let h = src.height() as i64;
    for y in 0..src.height() {
        for x in 0..src.width() {
            let mut best = if take_max { 0u8 } else { 255u8 };
            for (dx, dy) in sel.offsets() {
                let sx = x as i64 + dx;
                let sy = y as i64 + dy;
                if sx < 0 || sy < 0 || sx >= w || sy >= h {
                    continue;
                }
                let v = src.get_clamped(sx, sy);
                best = if take_max { best.max(v) } else { best.min(v) };
            }
            out.set(x, y, best);
        }
    }
    out
}

fn extremum_rgb(src: &RgbRaster, sel: &StructElement, take_max: bool) -> RgbRaster {
    let mut out = src.clone();
    let w = src.width() as i64;
    let h = src.height() as i64;
    for y in 0..src.height() {
        for x in 0..src.width() {
            let mut best = if take_max { [0u8; 3] } else { [255u8; 3] };
            for (dx, dy) in sel.offsets() {
                let sx = x as i64 + dx;
                let sy = y as i64 + dy;
                if sx < 0 || sy < 0 || sx >= w || sy >= h {
                    continue;
                }
                let p = src.get_clamped(sx, sy);
                for ch in 0..3 {
                    best[ch] = if take_max {
                        best[ch].max(p[ch])
                    } else {
                        best[ch].min(p[ch])
                    };
                }
            }
            out.set(x, y, best);
        }
    }
    out
}
