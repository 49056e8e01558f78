//! Frequency masks
//!
//! Builds the centered transfer masks multiplied against a shifted
//! spectrum. The cutoff is normalized: 1.0 places the corner frequency
//! at half the shorter image side.

use crate::error::{FrequencyError, FrequencyResult};

/// Shape of the mask falloff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskFamily {
    /// Hard disk: 1 inside the cutoff radius, 0 outside
    Ideal,
    /// Gaussian falloff
    Gaussian,
    /// Butterworth falloff of the given order
    Butterworth,
}

/// Which side of the cutoff passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassMode {
    Low,
    High,
}

/// Build a `height * width` mask in row-major order, centered like a
/// shifted spectrum.
///
/// `order` only matters for [`MaskFamily::Butterworth`]. A zero cutoff
/// is nudged to a tiny radius so the expressions stay finite.
///
/// # Errors
///
/// Returns [`FrequencyError::InvalidCutoff`] unless `cutoff` is a
/// finite value in `0.0..=1.0`.
pub fn build_mask(
    height: usize,
    width: usize,
    family: MaskFamily,
    pass: PassMode,
    cutoff: f64,
    order: u32,
) -> FrequencyResult<Vec<f64>> {
    if !cutoff.is_finite() || !(0.0..=1.0).contains(&cutoff) {
        return Err(FrequencyError::InvalidCutoff(cutoff));
    }
    let mut d0 = cutoff * (height.min(width) as f64) / 2.0;
    if d0 == 0.0 {
        d0 = 1e-8;
    }
    let cy = (height / 2) as f64;
    let cx = (width / 2) as f64;

    let mut mask = Vec::with_capacity(height * width);
    for y in 0..height {
        for x in 0..width {
            let d = ((y as f64 - cy).powi(2) + (x as f64 - cx).powi(2)).sqrt();
            let low = match family {
                MaskFamily::Ideal => {
                    if d <= d0 {
                        1.0
                    } else {
                        0.0
                    }
                }
                MaskFamily::Gaussian => (-d * d / (2.0 * d0 * d0)).exp(),
                MaskFamily::Butterworth => 1.0 / (1.0 + (d / d0).powi(2 * order as i32)),
            };
            mask.push(match pass {
                PassMode::Low => low,
                PassMode::High => 1.0 - low,
            });
        }
    }
    Ok(mask)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cutoff_validation() {
        for bad in [-0.1, 1.5, f64::NAN, f64::INFINITY] {
            assert!(build_mask(8, 8, MaskFamily::Ideal, PassMode::Low, bad, 1).is_err());
        }
    }

    #[test]
    fn test_low_and_high_are_complementary() {
        for family in [MaskFamily::Ideal, MaskFamily::Gaussian, MaskFamily::Butterworth] {
            let low = build_mask(8, 10, family, PassMode::Low, 0.5, 2).unwrap();
            let high = build_mask(8, 10, family, PassMode::High, 0.5, 2).unwrap();
            for (l, h) in low.iter().zip(&high) {
                assert!((l + h - 1.0).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_low_pass_center_is_open() {
        for family in [MaskFamily::Ideal, MaskFamily::Gaussian, MaskFamily::Butterworth] {
            let mask = build_mask(9, 9, family, PassMode::Low, 0.5, 2).unwrap();
            assert!((mask[4 * 9 + 4] - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_ideal_mask_is_binary() {
        let mask = build_mask(16, 16, MaskFamily::Ideal, PassMode::Low, 0.25, 1).unwrap();
        assert!(mask.iter().all(|&v| v == 0.0 || v == 1.0));
        // Radius is 0.25 * 8 = 2 around the center (8,8).
        assert_eq!(mask[8 * 16 + 8], 1.0);
        assert_eq!(mask[8 * 16 + 10], 1.0);
        assert_eq!(mask[8 * 16 + 11], 0.0);
    }

    #[test]
    fn test_zero_cutoff_blocks_everything_but_stays_finite() {
        let mask = build_mask(8, 8, MaskFamily::Gaussian, PassMode::Low, 0.0, 1).unwrap();
        assert!(mask.iter().all(|v| v.is_finite()));
        // Only the exact center survives.
        assert_eq!(mask[4 * 8 + 4], 1.0);
        assert!(mask.iter().enumerate().all(|(i, &v)| i == 4 * 8 + 4 || v == 0.0));
    }

    #[test]
    fn test_butterworth_order_sharpens_falloff() {
        let soft = build_mask(16, 16, MaskFamily::Butterworth, PassMode::Low, 0.5, 1).unwrap();
        let sharp = build_mask(16, 16, MaskFamily::Butterworth, PassMode::Low, 0.5, 6).unwrap();
        // Just outside the cutoff the higher order drops faster.
        let i = 8 * 16 + 14;
        assert!(sharp[i] < soft[i]);
    }
}
