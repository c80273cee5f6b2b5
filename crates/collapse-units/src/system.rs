//! The three structural constants and the collapse Planck scale.
//!
//! # Derivations
//!
//! - c* = 2: a collapse path advances at most two ranks per tick; the
//!   Fibonacci slope bound φ·(2/φ) closes to exactly 2.
//! - ħ* = φ²/(2π): minimal action of one closed rank loop.
//! - G* = φ⁻²: coupling of the rank-entropy gradient; algebraically 2 − φ.
//!
//! The Planck block then closes without new input: √(ħ*G*/c*³) collapses
//! to 1/(4√π) because ħ*G* = φ²/(2π)·φ⁻² = 1/(2π).

use collapse_constants::{PHI_INV_SQ, PHI_SQ};
use std::f64::consts::PI;

/// Collapse speed limit c* = 2.
pub const C_STAR: f64 = 2.0;

/// Collapse action quantum ħ* = φ²/(2π) ≈ 0.41667305.
pub const HBAR_STAR: f64 = PHI_SQ / (2.0 * PI);

/// Collapse gravitational coupling G* = φ⁻² = 2 − φ ≈ 0.38196601.
pub const G_STAR: f64 = PHI_INV_SQ;

/// Collapse Planck length ℓ_P* = 1/(4√π) ≈ 0.14104740.
pub fn planck_length() -> f64 {
    1.0 / (4.0 * PI.sqrt())
}

/// Collapse Planck time t_P* = ℓ_P*/c* = 1/(8√π).
pub fn planck_time() -> f64 {
    planck_length() / C_STAR
}

/// Collapse Planck mass m_P* = √(ħ*c*/G*) = φ²/√π ≈ 1.47706751.
pub fn planck_mass() -> f64 {
    PHI_SQ / PI.sqrt()
}

/// Collapse Planck energy E_P* = m_P*·c*² = 4φ²/√π.
pub fn planck_energy() -> f64 {
    planck_mass() * C_STAR * C_STAR
}

/// Maximum rank-transition frequency ω_max = E_P*/ħ* = 8√π ≈ 14.17963.
pub fn rank_frequency_max() -> f64 {
    planck_energy() / HBAR_STAR
}

#[cfg(test)]
mod tests {
    use super::*;
    use collapse_constants::PHI;

    #[test]
    fn action_quantum_value() {
        // ħ* = φ²/(2π), recomputed from scratch.
        let direct = PHI * PHI / (2.0 * PI);
        assert!((HBAR_STAR - direct).abs() < 1e-15);
        assert!((HBAR_STAR - 0.416673050492137).abs() < 1e-12);
    }

    #[test]
    fn gravitational_coupling_is_inverse_phi_squared() {
        assert!((G_STAR - 1.0 / (PHI * PHI)).abs() < 1e-15);
    }

    #[test]
    fn planck_length_closed_form() {
        // √(ħ*G*/c*³) = √(1/(2π·8)) = 1/(4√π)
        let derived = (HBAR_STAR * G_STAR / C_STAR.powi(3)).sqrt();
        assert!((derived - planck_length()).abs() < 1e-15);
        assert!((planck_length() - 0.141047395886939).abs() < 1e-12);
    }

    #[test]
    fn planck_time_is_length_over_speed() {
        assert!((planck_time() - 1.0 / (8.0 * PI.sqrt())).abs() < 1e-16);
    }

    #[test]
    fn planck_mass_closed_form() {
        let derived = (HBAR_STAR * C_STAR / G_STAR).sqrt();
        assert!((derived - planck_mass()).abs() < 1e-14);
        assert!((planck_mass() - 1.477067505826675).abs() < 1e-12);
    }

    #[test]
    fn planck_energy_consistency() {
        // E_P* = ħ*·ω_max by construction; also 4φ²/√π directly.
        assert!((planck_energy() - HBAR_STAR * rank_frequency_max()).abs() < 1e-12);
        let direct = 4.0 * PHI * PHI / PI.sqrt();
        assert!((planck_energy() - direct).abs() < 1e-12);
    }

    #[test]
    fn max_frequency_is_eight_root_pi() {
        // The φ² factors cancel: ω_max = (4φ²/√π)·(2π/φ²) = 8√π.
        assert!((rank_frequency_max() - 8.0 * PI.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn slope_bound_closes_to_speed_limit() {
        // Max Fibonacci slope φ times the discrete factor 2/φ.
        let max_slope = PHI * (2.0 / PHI);
        assert!((max_slope - C_STAR).abs() < 1e-15);
    }
}
