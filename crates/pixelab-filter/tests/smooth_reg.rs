//! Smoothing regression test
//!
//! Exercises the linear blurs and rank filters on synthetic rasters
//! with known outcomes.

use pixelab_core::{GrayRaster, Raster};
use pixelab_filter::{box_filter, gaussian_blur, median_filter, weighted_average};
use pixelab_test::{RegParams, checkerboard, gradient_gray};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn smooth_reg() {
    let mut rp = RegParams::new("smooth");

    // Any averaging filter leaves a constant raster untouched.
    let flat: Raster = GrayRaster::filled(16, 16, 200).unwrap().into();
    rp.compare_rasters(&box_filter(&flat, 3).unwrap(), &flat);
    rp.compare_rasters(&weighted_average(&flat, 3).unwrap(), &flat);
    rp.compare_rasters(&gaussian_blur(&flat, 5).unwrap(), &flat);

    // A horizontal ramp is (almost) invariant under symmetric blurs:
    // each row is linear, so left and right neighbors cancel.
    let ramp = gradient_gray(32, 8);
    let blurred = gaussian_blur(&ramp, 3).unwrap();
    rp.compare_rasters_within(&blurred, &ramp, 2);

    // Blurring a checkerboard pulls every cell toward mid-gray.
    let board = checkerboard(16, 16, 1);
    let smoothed = box_filter(&board, 3).unwrap();
    let mean: f64 = smoothed
        .to_gray()
        .data()
        .iter()
        .map(|&v| v as f64)
        .sum::<f64>()
        / 256.0;
    rp.compare_values(127.5, mean, 10.0);

    // Median recovers a flat raster from isolated impulses.
    let mut speckled = GrayRaster::filled(16, 16, 200).unwrap();
    speckled.set(3, 3, 255);
    speckled.set(9, 12, 0);
    speckled.set(14, 1, 255);
    rp.compare_rasters(&median_filter(&Raster::Gray(speckled), 3).unwrap(), &flat);

    // Impulse noise itself is deterministic under a fixed seed.
    let mut rng = StdRng::seed_from_u64(11);
    let noisy = pixelab_filter::salt_pepper_noise(&flat, 0.05, &mut rng).unwrap();
    let polluted = noisy
        .to_gray()
        .data()
        .iter()
        .filter(|&&v| v != 200)
        .count();
    rp.compare_values(1.0, (polluted > 0) as u8 as f64, 0.0);

    assert!(rp.cleanup());
}
