//! The collapse → SI scale mapping.
//!
//! Three positive factors carry collapse values to SI:
//!
//! ```text
//! λ_ℓ = ℓ_P(SI)/ℓ_P*    λ_t = t_P(SI)/t_P*    λ_m = m_P(SI)/m_P*
//! ```
//!
//! Any quantity of dimension L^a T^b M^c scales by λ_ℓ^a·λ_t^b·λ_m^c.
//! Pinning the Planck scale on both sides over-determines the map, which
//! is the point: the three defining constants must come back out.
//!
//! ```text
//! c = c*·λ_ℓ/λ_t        ħ = ħ*·λ_m λ_ℓ²/λ_t     G = G*·λ_ℓ³/(λ_m λ_t²)
//! ```
//!
//! Agreement is limited by the precision of the published SI Planck
//! values (CODATA quotes them to seven digits), so the constraints hold
//! to ~1e-6 relative, not machine precision.

use thiserror::Error;
use tracing::debug;

use crate::dim::Dim;
use crate::system::{planck_length, planck_mass, planck_time};
use collapse_constants::log_phi;

/// SI speed of light, m/s (exact by definition).
pub const C_SI: f64 = 299_792_458.0;

/// SI reduced Planck constant, J·s (exact by definition since 2019).
pub const HBAR_SI: f64 = 1.054_571_817e-34;

/// SI gravitational constant, m³/(kg·s²) (CODATA 2018).
pub const G_SI: f64 = 6.674_30e-11;

/// SI Planck length, m (CODATA 2018).
pub const PLANCK_LENGTH_SI: f64 = 1.616_255e-35;

/// SI Planck time, s (CODATA 2018).
pub const PLANCK_TIME_SI: f64 = 5.391_247e-44;

/// SI Planck mass, kg (CODATA 2018).
pub const PLANCK_MASS_SI: f64 = 2.176_434e-8;

/// Planck-scale information rate, bits/s.
pub const PLANCK_BIT_RATE: f64 = 1e43;

/// Human-scale information rate, bits/s.
pub const HUMAN_BIT_RATE: f64 = 1e11;

/// Result type for unit-mapping operations.
pub type Result<T> = std::result::Result<T, UnitsError>;

/// Errors from scale-map construction and observer positioning.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum UnitsError {
    /// Scale factors must be positive and finite.
    #[error("scale factor {name} must be positive and finite, got {value}")]
    InvalidScale {
        /// Which factor was rejected
        name: &'static str,
        /// The offending value
        value: f64,
    },

    /// Information rates must be positive and finite.
    #[error("information rate must be positive and finite, got {0}")]
    InvalidRate(f64),
}

/// The (λ_ℓ, λ_t, λ_m) triple mapping collapse units to SI.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScaleMap {
    /// Length factor λ_ℓ
    pub lambda_length: f64,
    /// Time factor λ_t
    pub lambda_time: f64,
    /// Mass factor λ_m
    pub lambda_mass: f64,
}

impl ScaleMap {
    /// Build a map from explicit factors.
    pub fn new(lambda_length: f64, lambda_time: f64, lambda_mass: f64) -> Result<Self> {
        for (name, value) in [
            ("lambda_length", lambda_length),
            ("lambda_time", lambda_time),
            ("lambda_mass", lambda_mass),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(UnitsError::InvalidScale { name, value });
            }
        }
        Ok(Self {
            lambda_length,
            lambda_time,
            lambda_mass,
        })
    }

    /// Pin the map by the published SI Planck scale.
    pub fn from_planck_si() -> Self {
        let map = Self {
            lambda_length: PLANCK_LENGTH_SI / planck_length(),
            lambda_time: PLANCK_TIME_SI / planck_time(),
            lambda_mass: PLANCK_MASS_SI / planck_mass(),
        };
        debug!(
            lambda_length = map.lambda_length,
            lambda_time = map.lambda_time,
            lambda_mass = map.lambda_mass,
            "scale map pinned to SI Planck values"
        );
        map
    }

    /// Composite SI factor for a dimension: λ_ℓ^a · λ_t^b · λ_m^c.
    pub fn si_factor(&self, dim: Dim) -> f64 {
        self.lambda_length.powi(dim.length)
            * self.lambda_time.powi(dim.time)
            * self.lambda_mass.powi(dim.mass)
    }

    /// Carry a collapse-unit value of the given dimension into SI.
    pub fn to_si(&self, value: f64, dim: Dim) -> f64 {
        value * self.si_factor(dim)
    }
}

/// Observer depth below the Planck scale, in φ-levels.
///
/// log_φ of the rate ratio. Humans process ~1e11 bits/s against the
/// Planck rate ~1e43, which puts them roughly 152 levels down.
pub fn scale_levels(planck_rate: f64, observer_rate: f64) -> Result<f64> {
    for rate in [planck_rate, observer_rate] {
        if !(rate.is_finite() && rate > 0.0) {
            return Err(UnitsError::InvalidRate(rate));
        }
    }
    // Both operands validated, so the ratio is positive.
    Ok(log_phi(planck_rate / observer_rate).expect("positive ratio"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::{C_STAR, G_STAR, HBAR_STAR};
    use collapse_constants::rel_close;

    #[test]
    fn speed_constraint() {
        let map = ScaleMap::from_planck_si();
        let c = C_STAR * map.lambda_length / map.lambda_time;
        assert!(
            rel_close(c, C_SI, 1e-6),
            "c from scale map: {} vs {}",
            c,
            C_SI
        );
        // Same composition through the dimension vector.
        assert!(rel_close(map.to_si(C_STAR, Dim::SPEED), C_SI, 1e-6));
    }

    #[test]
    fn action_constraint() {
        let map = ScaleMap::from_planck_si();
        let hbar = map.to_si(HBAR_STAR, Dim::ACTION);
        assert!(
            rel_close(hbar, HBAR_SI, 1e-6),
            "hbar from scale map: {} vs {}",
            hbar,
            HBAR_SI
        );
    }

    #[test]
    fn gravitation_constraint() {
        let map = ScaleMap::from_planck_si();
        let g = map.to_si(G_STAR, Dim::GRAVITATION);
        assert!(
            rel_close(g, G_SI, 1e-5),
            "G from scale map: {} vs {}",
            g,
            G_SI
        );
    }

    #[test]
    fn dimensionless_values_pass_through() {
        let map = ScaleMap::from_planck_si();
        assert_eq!(map.si_factor(Dim::DIMENSIONLESS), 1.0);
        assert_eq!(map.to_si(42.0, Dim::DIMENSIONLESS), 42.0);
    }

    #[test]
    fn new_rejects_bad_factors() {
        assert!(matches!(
            ScaleMap::new(0.0, 1.0, 1.0),
            Err(UnitsError::InvalidScale {
                name: "lambda_length",
                ..
            })
        ));
        assert!(ScaleMap::new(1.0, -2.0, 1.0).is_err());
        assert!(ScaleMap::new(1.0, 1.0, f64::NAN).is_err());
    }

    #[test]
    fn observer_sits_deep_below_planck() {
        let levels = scale_levels(PLANCK_BIT_RATE, HUMAN_BIT_RATE).unwrap();
        assert!(levels > 50.0, "levels = {}", levels);
        assert!(levels < 200.0, "levels = {}", levels);
    }

    #[test]
    fn scale_levels_rejects_bad_rates() {
        assert!(scale_levels(0.0, 1.0).is_err());
        assert!(scale_levels(1e43, -1.0).is_err());
        assert!(scale_levels(f64::INFINITY, 1.0).is_err());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            // Exponents stay in ±1: the λ factors span ~1e-43..1e-8 and
            // higher combined powers leave f64 range.
            #[test]
            fn si_factor_is_multiplicative(
                a_len in -1i32..=1, a_time in -1i32..=1, a_mass in -1i32..=1,
                b_len in -1i32..=1, b_time in -1i32..=1, b_mass in -1i32..=1,
            ) {
                let map = ScaleMap::from_planck_si();
                let a = Dim::new(a_len, a_time, a_mass);
                let b = Dim::new(b_len, b_time, b_mass);
                let combined = map.si_factor(a * b);
                let separate = map.si_factor(a) * map.si_factor(b);
                prop_assert!(rel_close(combined, separate, 1e-9),
                    "factor({}) = {} vs {}", a * b, combined, separate);
            }
        }
    }
}
