//! Contour extraction
//!
//! Finds the external boundaries of the Otsu foreground and strokes
//! them in bright green on a color copy of the original raster.
//! External means reachable from the raster border through background:
//! boundaries around interior holes are not drawn.

use crate::conncomp::{Connectivity, LabelMap, label_components};
use pixelab_core::{GrayRaster, Raster, RgbRaster};
use pixelab_segment::otsu;

const STROKE: [u8; 3] = [0, 255, 0];

/// Stroke the external contours of the Otsu foreground onto an RGB
/// copy of `src`, 2 pixels wide.
pub fn draw_contours(src: &Raster) -> Raster {
    let binary = otsu(src).to_gray();
    let w = binary.width();
    let h = binary.height();

    // Background components (4-connected) that touch the raster border
    // are outside every object.
    let background = binary.map(|v| if v == 0 { 255 } else { 0 });
    let bg_map = label_components(&background, Connectivity::Four);
    let mut external = vec![false; (bg_map.count() + 1) as usize];
    for x in 0..w {
        for &y in &[0, h - 1] {
            if let Some(l) = bg_map.get(x, y)
                && l > 0
            {
                external[l as usize] = true;
            }
        }
    }
    for y in 0..h {
        for &x in &[0, w - 1] {
            if let Some(l) = bg_map.get(x, y)
                && l > 0
            {
                external[l as usize] = true;
            }
        }
    }

    // A foreground pixel on the external contour sits at the raster
    // edge or 8-adjacent to outside background.
    let mut out = src.to_rgb();
    for y in 0..h {
        for x in 0..w {
            if binary.get(x, y) != Some(255) {
                continue;
            }
            if on_external_boundary(&binary, &bg_map, &external, x, y) {
                stroke(&mut out, x, y);
            }
        }
    }
    Raster::Rgb(out)
}

fn on_external_boundary(
    binary: &GrayRaster,
    bg_map: &LabelMap,
    external: &[bool],
    x: u32,
    y: u32,
) -> bool {
    let w = binary.width() as i64;
    let h = binary.height() as i64;
    for dy in -1..=1i64 {
        for dx in -1..=1i64 {
            if dx == 0 && dy == 0 {
                continue;
            }
            let nx = x as i64 + dx;
            let ny = y as i64 + dy;
            if nx < 0 || ny < 0 || nx >= w || ny >= h {
                return true;
            }
            if let Some(l) = bg_map.get(nx as u32, ny as u32)
                && l > 0
                && external[l as usize]
            {
                return true;
            }
        }
    }
    false
}

// 2x2 block anchored at the boundary pixel, clipped at the far edges.
fn stroke(out: &mut RgbRaster, x: u32, y: u32) {
    for dy in 0..2 {
        for dx in 0..2 {
            let px = (x + dx).min(out.width() - 1);
            let py = (y + dy).min(out.height() - 1);
            out.set(px, py, STROKE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_blob() -> Raster {
        let mut g = GrayRaster::new(12, 12).unwrap();
        for y in 3..9 {
            for x in 3..9 {
                g.set(x, y, 255);
            }
        }
        Raster::Gray(g)
    }

    #[test]
    fn test_contour_strokes_blob_edge_in_green() {
        let out = draw_contours(&square_blob());
        let rgb = match out {
            Raster::Rgb(c) => c,
            Raster::Gray(_) => panic!("contour view should be color"),
        };
        // Edge of the square is stroked.
        assert_eq!(rgb.get(3, 3), Some(STROKE));
        assert_eq!(rgb.get(8, 5), Some(STROKE));
        // Far background keeps its original (black) value.
        assert_eq!(rgb.get(0, 0), Some([0, 0, 0]));
        // Deep interior keeps its original white value.
        assert_eq!(rgb.get(5, 5), Some([255, 255, 255]));
    }

    #[test]
    fn test_hole_boundary_is_not_external() {
        // A ring: only the outer boundary is stroked, the rim of the
        // hole stays white.
        let mut g = GrayRaster::new(16, 16).unwrap();
        for y in 2..14 {
            for x in 2..14 {
                g.set(x, y, 255);
            }
        }
        for y in 6..10 {
            for x in 6..10 {
                g.set(x, y, 0);
            }
        }
        let out = draw_contours(&Raster::Gray(g));
        let rgb = match out {
            Raster::Rgb(c) => c,
            Raster::Gray(_) => panic!("contour view should be color"),
        };
        assert_eq!(rgb.get(2, 8), Some(STROKE));
        // Pixel adjacent to the hole, away from the stroke width.
        assert_eq!(rgb.get(5, 8), Some([255, 255, 255]));
        // Hole interior stays black.
        assert_eq!(rgb.get(7, 8), Some([0, 0, 0]));
    }

    #[test]
    fn test_blank_raster_unchanged() {
        let blank = Raster::Gray(GrayRaster::new(8, 8).unwrap());
        let out = draw_contours(&blank);
        let rgb = match out {
            Raster::Rgb(c) => c,
            Raster::Gray(_) => panic!("contour view should be color"),
        };
        assert!(rgb.data().iter().all(|&v| v == 0));
    }
}
