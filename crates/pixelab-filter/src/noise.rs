//! Synthetic noise injection
//!
//! Degrades a raster with impulse (salt-and-pepper) or additive
//! Gaussian noise. Both take the random generator from the caller so
//! tests can seed it.

use crate::error::{FilterError, FilterResult};
use pixelab_core::Raster;
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Standard deviation of [`gaussian_noise`] (variance 100).
const NOISE_SIGMA: f64 = 10.0;

/// Add impulse noise: roughly `amount * width * height` pixels are
/// forced to pure white or pure black, half each.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameter`] unless `amount` is a
/// finite value in `0.0..=1.0`.
pub fn salt_pepper_noise(src: &Raster, amount: f64, rng: &mut impl Rng) -> FilterResult<Raster> {
    if !amount.is_finite() || !(0.0..=1.0).contains(&amount) {
        return Err(FilterError::InvalidParameter(format!(
            "noise amount must be in 0..=1, got {amount}"
        )));
    }
    let mut out = src.clone();
    let w = out.width();
    let h = out.height();
    let per_polarity = (amount * (w as f64) * (h as f64) * 0.5).ceil() as u64;
    for &value in &[255u8, 0u8] {
        for _ in 0..per_polarity {
            let x = rng.random_range(0..w);
            let y = rng.random_range(0..h);
            match &mut out {
                Raster::Gray(g) => g.set(x, y, value),
                Raster::Rgb(c) => c.set(x, y, [value; 3]),
            }
        }
    }
    Ok(out)
}

/// Add zero-mean Gaussian noise with variance 100 to every sample,
/// saturating into `0..=255`.
pub fn gaussian_noise(src: &Raster, rng: &mut impl Rng) -> Raster {
    let normal = Normal::new(0.0f64, NOISE_SIGMA)
        .unwrap_or_else(|_| unreachable!("constant deviation is valid"));
    let mut out = src.clone();
    let samples = match &mut out {
        Raster::Gray(g) => g.data_mut(),
        Raster::Rgb(c) => c.data_mut(),
    };
    for v in samples {
        let noisy = *v as f64 + normal.sample(rng);
        *v = noisy.round().clamp(0.0, 255.0) as u8;
    }
    out
}
