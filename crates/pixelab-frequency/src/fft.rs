//! 2-D discrete Fourier transform
//!
//! Row-column decomposition over rustfft, plus the quadrant shifts
//! that move the zero-frequency term to and from the raster center.
//! Buffers are row-major `Complex<f64>` with explicit dimensions.

use rustfft::FftPlanner;
use rustfft::num_complex::Complex;

/// Forward 2-D DFT, in place: every row, then every column.
pub fn fft2d(buf: &mut [Complex<f64>], width: usize, height: usize) {
    transform(buf, width, height, false);
}

/// Inverse 2-D DFT, in place, normalized by `1 / (width * height)`.
pub fn ifft2d(buf: &mut [Complex<f64>], width: usize, height: usize) {
    transform(buf, width, height, true);
    let norm = 1.0 / (width * height) as f64;
    for v in buf.iter_mut() {
        *v *= norm;
    }
}

fn transform(buf: &mut [Complex<f64>], width: usize, height: usize, inverse: bool) {
    debug_assert_eq!(buf.len(), width * height);
    let mut planner = FftPlanner::new();
    let row_fft = if inverse {
        planner.plan_fft_inverse(width)
    } else {
        planner.plan_fft_forward(width)
    };
    for row in buf.chunks_exact_mut(width) {
        row_fft.process(row);
    }

    let col_fft = if inverse {
        planner.plan_fft_inverse(height)
    } else {
        planner.plan_fft_forward(height)
    };
    let mut column = vec![Complex::default(); height];
    for x in 0..width {
        for y in 0..height {
            column[y] = buf[y * width + x];
        }
        col_fft.process(&mut column);
        for y in 0..height {
            buf[y * width + x] = column[y];
        }
    }
}

/// Move the zero-frequency term to the center: roll each axis forward
/// by half its length.
pub fn fftshift(buf: &[Complex<f64>], width: usize, height: usize) -> Vec<Complex<f64>> {
    roll2d(buf, width, height, width / 2, height / 2)
}

/// Undo [`fftshift`]: roll each axis forward by the remaining half, so
/// odd lengths land back exactly.
pub fn ifftshift(buf: &[Complex<f64>], width: usize, height: usize) -> Vec<Complex<f64>> {
    roll2d(buf, width, height, width - width / 2, height - height / 2)
}

fn roll2d(
    buf: &[Complex<f64>],
    width: usize,
    height: usize,
    shift_x: usize,
    shift_y: usize,
) -> Vec<Complex<f64>> {
    debug_assert_eq!(buf.len(), width * height);
    let mut out = vec![Complex::default(); buf.len()];
    for y in 0..height {
        let ny = (y + shift_y) % height;
        for x in 0..width {
            let nx = (x + shift_x) % width;
            out[ny * width + nx] = buf[y * width + x];
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn impulse(width: usize, height: usize) -> Vec<Complex<f64>> {
        let mut buf = vec![Complex::default(); width * height];
        buf[0] = Complex::new(1.0, 0.0);
        buf
    }

    #[test]
    fn test_impulse_transforms_to_flat_spectrum() {
        let mut buf = impulse(4, 4);
        fft2d(&mut buf, 4, 4);
        for v in &buf {
            assert!((v.re - 1.0).abs() < 1e-12);
            assert!(v.im.abs() < 1e-12);
        }
    }

    #[test]
    fn test_forward_inverse_round_trip() {
        let mut buf: Vec<Complex<f64>> = (0..24)
            .map(|i| Complex::new((i % 7) as f64, 0.0))
            .collect();
        let original = buf.clone();
        fft2d(&mut buf, 6, 4);
        ifft2d(&mut buf, 6, 4);
        for (a, b) in buf.iter().zip(&original) {
            assert!((a.re - b.re).abs() < 1e-9);
            assert!(a.im.abs() < 1e-9);
        }
    }

    #[test]
    fn test_constant_signal_concentrates_at_dc() {
        let mut buf = vec![Complex::new(1.0, 0.0); 16];
        fft2d(&mut buf, 4, 4);
        assert!((buf[0].re - 16.0).abs() < 1e-12);
        assert!(buf[1..].iter().all(|v| v.norm() < 1e-9));
    }

    #[test]
    fn test_fftshift_moves_dc_to_center() {
        let mut buf = vec![Complex::default(); 16];
        buf[0] = Complex::new(1.0, 0.0);
        let shifted = fftshift(&buf, 4, 4);
        assert!((shifted[2 * 4 + 2].re - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_shift_round_trip_odd_dims() {
        let buf: Vec<Complex<f64>> = (0..15).map(|i| Complex::new(i as f64, 0.0)).collect();
        let back = ifftshift(&fftshift(&buf, 5, 3), 5, 3);
        for (a, b) in back.iter().zip(&buf) {
            assert!((a.re - b.re).abs() < 1e-12);
        }
    }
}
