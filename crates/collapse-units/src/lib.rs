//! Collapse Unit System
//!
//! The dimensionless unit system in which the framework's derivations run.
//! Three structural constants replace the measured ones:
//!
//! ```text
//! c*  = 2            speed limit (rank transitions per tick)
//! ħ*  = φ²/(2π)      action quantum
//! G*  = φ⁻² = 2 − φ  gravitational coupling
//! ```
//!
//! From these the collapse Planck scale follows exactly:
//!
//! ```text
//! ℓ_P* = √(ħ*G*/c*³) = 1/(4√π)
//! t_P* = ℓ_P*/c*     = 1/(8√π)
//! m_P* = √(ħ*c*/G*)  = φ²/√π
//! ```
//!
//! A [`ScaleMap`] of three positive factors (λ_ℓ, λ_t, λ_m) carries any
//! collapse quantity to SI through its dimension vector; the map is pinned
//! by requiring the SI Planck scale on the other side.

mod dim;
mod scale;
mod system;

pub use dim::Dim;
pub use scale::{
    scale_levels, ScaleMap, UnitsError, C_SI, G_SI, HBAR_SI, HUMAN_BIT_RATE, PLANCK_BIT_RATE,
    PLANCK_LENGTH_SI, PLANCK_MASS_SI, PLANCK_TIME_SI,
};
pub use system::{
    planck_energy, planck_length, planck_mass, planck_time, rank_frequency_max, C_STAR, G_STAR,
    HBAR_STAR,
};

// Dimension bookkeeping is fixed at compile time.
const _: () = {
    let action = Dim::MASS.mul(Dim::LENGTH.pow(2)).div(Dim::TIME);
    assert!(action.eq(Dim::ACTION));
    let gravitation = Dim::LENGTH.pow(3).div(Dim::MASS.mul(Dim::TIME.pow(2)));
    assert!(gravitation.eq(Dim::GRAVITATION));
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planck_length_closes_the_triangle() {
        // ℓ_P* from the defining constants equals the closed form 1/(4√π).
        let from_constants = (HBAR_STAR * G_STAR / C_STAR.powi(3)).sqrt();
        assert!((from_constants - planck_length()).abs() < 1e-15);
    }

    #[test]
    fn planck_mass_closes_the_triangle() {
        let from_constants = (HBAR_STAR * C_STAR / G_STAR).sqrt();
        assert!((from_constants - planck_mass()).abs() < 1e-14);
    }
}
