//! pixelab-test - Regression test support for pixelab
//!
//! Provides the [`RegParams`] check runner used by the `tests/*_reg.rs`
//! suites, plus builders for the synthetic rasters those suites share.
//!
//! # Usage
//!
//! ```ignore
//! use pixelab_test::{RegParams, gradient_gray};
//!
//! let mut rp = RegParams::new("threshold");
//! rp.compare_values(128.0, level as f64, 1.0);
//! assert!(rp.cleanup());
//! ```

mod params;

pub use params::RegParams;

use pixelab_core::{GrayRaster, Raster, RgbRaster};

/// Horizontal grayscale ramp covering the full tonal range.
pub fn gradient_gray(width: u32, height: u32) -> Raster {
    let ramp = GrayRaster::from_fn(width, height, |x, _| {
        ((x as f64 / (width.max(2) - 1) as f64) * 255.0).round() as u8
    })
    .unwrap_or_else(|_| unreachable!("caller supplies nonzero dimensions"));
    Raster::Gray(ramp)
}

/// Color raster ramping red along x, green along y, with constant blue.
pub fn gradient_rgb(width: u32, height: u32) -> Raster {
    let ramp = RgbRaster::from_fn(width, height, |x, y| {
        let r = ((x as f64 / (width.max(2) - 1) as f64) * 255.0).round() as u8;
        let g = ((y as f64 / (height.max(2) - 1) as f64) * 255.0).round() as u8;
        [r, g, 64]
    })
    .unwrap_or_else(|_| unreachable!("caller supplies nonzero dimensions"));
    Raster::Rgb(ramp)
}

/// Black-and-white checkerboard with square cells.
pub fn checkerboard(width: u32, height: u32, cell: u32) -> Raster {
    let cell = cell.max(1);
    let board = GrayRaster::from_fn(width, height, |x, y| {
        if ((x / cell) + (y / cell)).is_multiple_of(2) {
            255
        } else {
            0
        }
    })
    .unwrap_or_else(|_| unreachable!("caller supplies nonzero dimensions"));
    Raster::Gray(board)
}
