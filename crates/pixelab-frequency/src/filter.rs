//! Frequency-domain filtering
//!
//! The full pipeline: normalize the luminance reduction, transform,
//! center, multiply by a transfer mask, undo the centering, invert,
//! and rescale the real magnitude back to a displayable raster.

use crate::error::FrequencyResult;
use crate::fft::{fft2d, fftshift, ifft2d, ifftshift};
use crate::mask::{MaskFamily, PassMode, build_mask};
use pixelab_core::{GrayRaster, Raster};
use rustfft::num_complex::Complex;

/// Filter a raster through a centered frequency mask.
///
/// # Errors
///
/// Returns [`FrequencyError::InvalidCutoff`](crate::FrequencyError::InvalidCutoff)
/// for a cutoff outside `0.0..=1.0`.
pub fn frequency_filter(
    src: &Raster,
    family: MaskFamily,
    pass: PassMode,
    cutoff: f64,
    order: u32,
) -> FrequencyResult<Raster> {
    let gray = src.to_gray();
    let width = gray.width() as usize;
    let height = gray.height() as usize;
    let mask = build_mask(height, width, family, pass, cutoff, order)?;

    let mut buf: Vec<Complex<f64>> = gray
        .data()
        .iter()
        .map(|&v| Complex::new(v as f64 / 255.0, 0.0))
        .collect();
    fft2d(&mut buf, width, height);
    let mut shifted = fftshift(&buf, width, height);
    for (v, &m) in shifted.iter_mut().zip(&mask) {
        *v *= m;
    }
    let mut buf = ifftshift(&shifted, width, height);
    ifft2d(&mut buf, width, height);

    let data: Vec<u8> = buf
        .iter()
        .map(|v| (v.norm().clamp(0.0, 1.0) * 255.0).round() as u8)
        .collect();
    let gray = GrayRaster::from_vec(width as u32, height as u32, data)
        .unwrap_or_else(|_| unreachable!("buffer sized from the raster"));
    Ok(Raster::Rgb(gray.to_rgb()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_open_low_pass_is_near_identity() {
        let src = GrayRaster::from_fn(8, 8, |x, y| ((x + y) * 15) as u8).unwrap();
        let out =
            frequency_filter(&Raster::Gray(src.clone()), MaskFamily::Ideal, PassMode::Low, 1.0, 1)
                .unwrap();
        let rgb = match out {
            Raster::Rgb(c) => c,
            Raster::Gray(_) => panic!("filter output should be color"),
        };
        // Cutoff 1.0 keeps the disk inscribed in the spectrum; on a
        // smooth ramp the content survives within a small tolerance.
        for y in 0..8 {
            for x in 0..8 {
                let expected = src.get(x, y).unwrap() as i32;
                let got = rgb.get(x, y).unwrap()[0] as i32;
                assert!((expected - got).abs() <= 16);
            }
        }
    }

    #[test]
    fn test_high_pass_flattens_constant_image() {
        let flat: Raster = GrayRaster::filled(8, 8, 180).unwrap().into();
        let out =
            frequency_filter(&flat, MaskFamily::Gaussian, PassMode::High, 0.3, 1).unwrap();
        let rgb = match out {
            Raster::Rgb(c) => c,
            Raster::Gray(_) => panic!("filter output should be color"),
        };
        // A constant image is pure DC; removing it leaves black.
        assert!(rgb.data().iter().all(|&v| v < 3));
    }

    #[test]
    fn test_low_pass_keeps_constant_image() {
        let flat: Raster = GrayRaster::filled(8, 8, 180).unwrap().into();
        let out =
            frequency_filter(&flat, MaskFamily::Butterworth, PassMode::Low, 0.5, 2).unwrap();
        let rgb = match out {
            Raster::Rgb(c) => c,
            Raster::Gray(_) => panic!("filter output should be color"),
        };
        for p in rgb.data().chunks_exact(3) {
            assert!((p[0] as i32 - 180).abs() <= 2);
        }
    }

    #[test]
    fn test_invalid_cutoff_is_rejected() {
        let flat: Raster = GrayRaster::filled(4, 4, 0).unwrap().into();
        assert!(
            frequency_filter(&flat, MaskFamily::Ideal, PassMode::Low, 1.2, 1).is_err()
        );
    }
}
