//! Hubble conversions and the critical density.

use collapse_units::G_SI;

use crate::cascade::CosmologyError;

/// Observed Hubble constant, km/s/Mpc (Planck 2018 CMB fit).
pub const H0_OBSERVED_KM_S_MPC: f64 = 67.4;

/// Meters per megaparsec.
pub const METERS_PER_MPC: f64 = 3.0857e22;

/// Seconds per gigayear (Julian).
pub const GYR_SECONDS: f64 = 3.1557e16;

/// Result type for Hubble operations.
pub type Result<T> = std::result::Result<T, CosmologyError>;

/// Convert a km/s/Mpc Hubble rate to s⁻¹.
///
/// 67.4 km/s/Mpc → 2.1843e-18 s⁻¹.
pub fn hubble_si(h0_km_s_mpc: f64) -> Result<f64> {
    if !(h0_km_s_mpc.is_finite() && h0_km_s_mpc > 0.0) {
        return Err(CosmologyError::InvalidHubbleRate(h0_km_s_mpc));
    }
    Ok(h0_km_s_mpc * 1000.0 / METERS_PER_MPC)
}

/// Critical density ρ_c = 3H²/(8πG), kg/m³.
pub fn critical_density(h_si: f64) -> Result<f64> {
    if !(h_si.is_finite() && h_si > 0.0) {
        return Err(CosmologyError::InvalidHubbleRate(h_si));
    }
    Ok(3.0 * h_si * h_si / (8.0 * std::f64::consts::PI * G_SI))
}

/// Hubble time 1/H₀ in gigayears.
pub fn hubble_time_gyr(h_si: f64) -> Result<f64> {
    if !(h_si.is_finite() && h_si > 0.0) {
        return Err(CosmologyError::InvalidHubbleRate(h_si));
    }
    Ok(1.0 / h_si / GYR_SECONDS)
}

/// Hubble length c/H₀ in meters.
pub fn hubble_length(h_si: f64) -> Result<f64> {
    if !(h_si.is_finite() && h_si > 0.0) {
        return Err(CosmologyError::InvalidHubbleRate(h_si));
    }
    Ok(collapse_units::C_SI / h_si)
}
