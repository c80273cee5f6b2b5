//! The rank-6/7 spectral average.
//!
//! The average interpolates between the two ζ-weights as the ratio r runs
//! over (0, ∞):
//!
//! ```text
//! avg(r) = (r·φ⁻⁶ + φ⁻⁷)/(r + 1)
//! ```
//!
//! avg(r) → φ⁻⁷ as r → 0 and → φ⁻⁶ as r → ∞, strictly increasing in
//! between. Dividing by 2π gives α, so inverting the formula recovers the
//! ratio any measured α implies.

use std::f64::consts::PI;

use collapse_constants::zeta_weight;
use tracing::debug;

use crate::{Result, SpectralError};

/// Electromagnetic coupling rank.
pub const OBSERVER_RANK: u32 = 6;

/// Observer channel rank.
pub const CHANNEL_RANK: u32 = 7;

/// Measured inverse fine-structure constant (CODATA 2018).
pub const INVERSE_ALPHA_CODATA: f64 = 137.035_999_084;

/// Measured fine-structure constant.
pub const ALPHA_CODATA: f64 = 1.0 / INVERSE_ALPHA_CODATA;

/// Weighted average of the rank-6 and rank-7 ζ-weights.
pub fn spectral_average(ratio: f64) -> Result<f64> {
    if !(ratio.is_finite() && ratio > 0.0) {
        return Err(SpectralError::InvalidRatio(ratio));
    }
    let w6 = zeta_weight(OBSERVER_RANK);
    let w7 = zeta_weight(CHANNEL_RANK);
    Ok((ratio * w6 + w7) / (ratio + 1.0))
}

/// Fine-structure constant for a given weight ratio: avg(r)/(2π).
pub fn fine_structure(ratio: f64) -> Result<f64> {
    Ok(spectral_average(ratio)? / (2.0 * PI))
}

/// Invert [`fine_structure`]: the ratio a measured α implies.
///
/// ```text
/// r = (2πα − φ⁻⁷)/(φ⁻⁶ − 2πα)
/// ```
///
/// Only α strictly inside (φ⁻⁷/2π, φ⁻⁶/2π) corresponds to a positive
/// ratio; anything else is out of band.
pub fn weight_ratio_for(alpha: f64) -> Result<f64> {
    if !alpha.is_finite() {
        return Err(SpectralError::AlphaOutOfBand(alpha));
    }
    let w6 = zeta_weight(OBSERVER_RANK);
    let w7 = zeta_weight(CHANNEL_RANK);
    let scaled = 2.0 * PI * alpha;
    if scaled <= w7 || scaled >= w6 {
        return Err(SpectralError::AlphaOutOfBand(alpha));
    }
    let ratio = (scaled - w7) / (w6 - scaled);
    debug!(alpha, ratio, "inverted spectral average");
    Ok(ratio)
}

/// Electromagnetic coupling strength g = √(4πα).
pub fn em_coupling(alpha: f64) -> Result<f64> {
    if !(alpha.is_finite() && alpha > 0.0) {
        return Err(SpectralError::InvalidCoupling(alpha));
    }
    Ok((4.0 * PI * alpha).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use collapse_constants::{approx_eq, rel_close};

    #[test]
    fn measured_alpha_implies_ratio() {
        let ratio = weight_ratio_for(ALPHA_CODATA).unwrap();
        assert!(
            approx_eq(ratio, 1.155_028_858_456, 1e-9),
            "ratio = {}",
            ratio
        );
    }

    #[test]
    fn ratio_roundtrips_to_alpha() {
        let ratio = weight_ratio_for(ALPHA_CODATA).unwrap();
        let alpha = fine_structure(ratio).unwrap();
        assert!(approx_eq(alpha, ALPHA_CODATA, 1e-15), "alpha = {}", alpha);
    }

    #[test]
    fn average_bounded_by_extreme_weights() {
        let w6 = zeta_weight(OBSERVER_RANK);
        let w7 = zeta_weight(CHANNEL_RANK);
        for ratio in [0.01, 0.5, 1.0, 1.155, 2.0, 100.0] {
            let avg = spectral_average(ratio).unwrap();
            assert!(avg > w7 && avg < w6, "avg({}) = {} escapes band", ratio, avg);
        }
    }

    #[test]
    fn balanced_ratio_gives_midpoint() {
        let w6 = zeta_weight(OBSERVER_RANK);
        let w7 = zeta_weight(CHANNEL_RANK);
        let avg = spectral_average(1.0).unwrap();
        assert!(approx_eq(avg, (w6 + w7) / 2.0, 1e-15));
    }

    #[test]
    fn coupling_squares_back() {
        let g = em_coupling(ALPHA_CODATA).unwrap();
        assert!(rel_close(g * g, 4.0 * PI * ALPHA_CODATA, 1e-14));
        // g ≈ 0.3028 for the measured α.
        assert!(approx_eq(g, 0.302_822, 1e-5), "g = {}", g);
    }

    #[test]
    fn out_of_band_alpha_rejected() {
        // The band is (φ⁻⁷/2π, φ⁻⁶/2π) ≈ (1/182.4, 1/112.7).
        assert!(weight_ratio_for(1.0 / 112.0).is_err());
        assert!(weight_ratio_for(1.0 / 200.0).is_err());
        assert!(weight_ratio_for(f64::NAN).is_err());
    }

    #[test]
    fn invalid_ratios_rejected() {
        assert!(spectral_average(0.0).is_err());
        assert!(spectral_average(-1.0).is_err());
        assert!(spectral_average(f64::INFINITY).is_err());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn average_stays_in_band(ratio in 1e-6_f64..1e6) {
                let w6 = zeta_weight(OBSERVER_RANK);
                let w7 = zeta_weight(CHANNEL_RANK);
                let avg = spectral_average(ratio).unwrap();
                prop_assert!(avg > w7);
                prop_assert!(avg < w6);
            }

            #[test]
            fn inversion_roundtrips(ratio in 1e-3_f64..1e3) {
                let alpha = fine_structure(ratio).unwrap();
                let back = weight_ratio_for(alpha).unwrap();
                prop_assert!(rel_close(back, ratio, 1e-9),
                    "ratio {} came back as {}", ratio, back);
            }
        }
    }
}
