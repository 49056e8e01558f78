//! Spectrum views
//!
//! Renders the centered spectrum of the luminance reduction: log
//! magnitude through the jet colormap, and phase as a gray ramp over
//! the angle range.

use crate::fft::{fft2d, fftshift};
use pixelab_color::StandardMap;
use pixelab_core::{GrayRaster, Raster};
use rustfft::num_complex::Complex;
use std::f64::consts::PI;

/// Jet-colored `log(1 + |F|)` of the centered spectrum, min-max
/// rescaled to the full tonal range.
pub fn magnitude_spectrum(src: &Raster) -> Raster {
    let (spectrum, width, height) = centered_spectrum(src);
    let magnitude: Vec<f64> = spectrum.iter().map(|v| (1.0 + v.norm()).ln()).collect();

    let max = magnitude.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let min = magnitude.iter().cloned().fold(f64::INFINITY, f64::min);
    let span = max - min;
    let data: Vec<u8> = if span <= 0.0 {
        vec![0; magnitude.len()]
    } else {
        magnitude
            .iter()
            .map(|&v| ((v - min) / span * 255.0).round() as u8)
            .collect()
    };
    let gray = GrayRaster::from_vec(width as u32, height as u32, data)
        .unwrap_or_else(|_| unreachable!("buffer sized from the raster"));
    Raster::Rgb(StandardMap::Jet.lut().apply(&gray))
}

/// Phase of the centered spectrum mapped from `-PI..=PI` onto
/// `0..=255`, replicated to three channels.
pub fn phase_spectrum(src: &Raster) -> Raster {
    let (spectrum, width, height) = centered_spectrum(src);
    let data: Vec<u8> = spectrum
        .iter()
        .map(|v| ((v.arg() + PI) / (2.0 * PI) * 255.0).round().clamp(0.0, 255.0) as u8)
        .collect();
    let gray = GrayRaster::from_vec(width as u32, height as u32, data)
        .unwrap_or_else(|_| unreachable!("buffer sized from the raster"));
    Raster::Rgb(gray.to_rgb())
}

fn centered_spectrum(src: &Raster) -> (Vec<Complex<f64>>, usize, usize) {
    let gray = src.to_gray();
    let width = gray.width() as usize;
    let height = gray.height() as usize;
    let mut buf: Vec<Complex<f64>> = gray
        .data()
        .iter()
        .map(|&v| Complex::new(v as f64, 0.0))
        .collect();
    fft2d(&mut buf, width, height);
    (fftshift(&buf, width, height), width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_image_magnitude_peaks_at_center() {
        let flat: Raster = GrayRaster::filled(8, 8, 200).unwrap().into();
        let out = magnitude_spectrum(&flat);
        let rgb = match out {
            Raster::Rgb(c) => c,
            Raster::Gray(_) => panic!("spectrum view should be color"),
        };
        // DC sits at the center after the shift and dominates; it maps
        // to the top of the jet ramp, everything else to the bottom.
        assert_eq!(rgb.get(4, 4), Some(StandardMap::Jet.lut().get(255)));
        assert_eq!(rgb.get(0, 0), Some(StandardMap::Jet.lut().get(0)));
    }

    #[test]
    fn test_magnitude_spectrum_shape_matches_input() {
        let src: Raster = GrayRaster::filled(10, 6, 10).unwrap().into();
        let out = magnitude_spectrum(&src);
        assert_eq!(out.width(), 10);
        assert_eq!(out.height(), 6);
    }

    #[test]
    fn test_phase_spectrum_is_neutral_gray() {
        let flat: Raster = GrayRaster::filled(8, 8, 100).unwrap().into();
        let out = phase_spectrum(&flat);
        let rgb = match out {
            Raster::Rgb(c) => c,
            Raster::Gray(_) => panic!("spectrum view should be color"),
        };
        for p in rgb.data().chunks_exact(3) {
            assert!(p[0] == p[1] && p[1] == p[2]);
        }
        // DC of a positive signal has zero phase, mapping to mid-gray.
        assert_eq!(rgb.get(4, 4).map(|p| p[0]), Some(128));
    }
}
