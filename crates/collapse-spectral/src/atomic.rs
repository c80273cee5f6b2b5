//! Atomic constants downstream of α.
//!
//! Once α is fixed, the Rydberg constant and Bohr radius follow from
//! electron mass and the Planck constant alone:
//!
//! ```text
//! R∞ = m_e c α²/(2h)        a₀ = ħ/(m_e c α)
//! ```

use collapse_units::{C_SI, HBAR_SI};

use crate::{Result, SpectralError};

/// Electron mass, kg (CODATA 2018).
pub const ELECTRON_MASS_SI: f64 = 9.109_383_7015e-31;

/// Planck constant, J·s (exact by definition since 2019).
pub const PLANCK_H_SI: f64 = 6.626_070_15e-34;

/// Measured Rydberg constant, m⁻¹ (CODATA 2018).
pub const RYDBERG_CODATA: f64 = 10_973_731.568_160;

/// Measured Bohr radius, m (CODATA 2018).
pub const BOHR_RADIUS_CODATA: f64 = 5.291_772_109_03e-11;

/// R∞ = m_e c α²/(2h).
pub fn rydberg_constant(alpha: f64) -> Result<f64> {
    if !(alpha.is_finite() && alpha > 0.0) {
        return Err(SpectralError::InvalidCoupling(alpha));
    }
    Ok(ELECTRON_MASS_SI * C_SI * alpha * alpha / (2.0 * PLANCK_H_SI))
}

/// a₀ = ħ/(m_e c α).
pub fn bohr_radius(alpha: f64) -> Result<f64> {
    if !(alpha.is_finite() && alpha > 0.0) {
        return Err(SpectralError::InvalidCoupling(alpha));
    }
    Ok(HBAR_SI / (ELECTRON_MASS_SI * C_SI * alpha))
}
