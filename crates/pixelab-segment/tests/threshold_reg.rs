//! Threshold regression test
//!
//! Runs the threshold selectors over shared synthetic rasters and
//! checks the selected levels and resulting masks.

use pixelab_core::{Raster, gray_histogram};
use pixelab_segment::{band_threshold, isodata, kapur, mean_threshold, otsu, otsu_level};
use pixelab_test::{RegParams, checkerboard, gradient_gray};

#[test]
fn threshold_reg() {
    let mut rp = RegParams::new("threshold");

    // On a checkerboard every selector splits black from white.
    let board = checkerboard(16, 16, 2);
    for mask in [
        otsu(&board),
        mean_threshold(&board),
        kapur(&board),
        isodata(&board),
    ] {
        rp.compare_rasters(&mask, &board);
    }

    // The Otsu level of a full ramp sits near the middle.
    let ramp = gradient_gray(256, 4);
    let level = otsu_level(&gray_histogram(&ramp.to_gray()));
    rp.compare_values(127.0, level as f64, 8.0);

    // A band covering the whole range selects everything.
    let all = band_threshold(&ramp, 0, 255);
    let white: Raster = pixelab_core::GrayRaster::filled(256, 4, 255).unwrap().into();
    rp.compare_rasters(&all, &white);

    assert!(rp.cleanup());
}
