//! The two-level dark-energy cascade.
//!
//! ```text
//! level 0:  1/2          observer/observable split
//! level 1:  1/(2φ²)      spatial averaging of the binary pattern
//! ```
//!
//! 1/(2φ²) = (2 − φ)/2 algebraically, so the whole cascade stays in ℤ[φ]:
//! Ω_Λ = 1/2 + (2 − φ)/2 = (3 − φ)/2.

use collapse_constants::PHI_INV_SQ;
use thiserror::Error;

/// Cascade level 0: the even split.
pub const CASCADE_LEVEL_0: f64 = 0.5;

/// Dark-energy fraction Ω_Λ = 1/2 + 1/(2φ²) ≈ 0.690983.
pub const OMEGA_LAMBDA: f64 = CASCADE_LEVEL_0 + PHI_INV_SQ / 2.0;

/// Matter fraction by budget closure: Ω_m = 1 − Ω_Λ ≈ 0.309017.
pub const OMEGA_MATTER: f64 = 1.0 - OMEGA_LAMBDA;

/// Observed dark-energy fraction (Planck 2018), for comparison only.
pub const OMEGA_LAMBDA_OBSERVED: f64 = 0.69;

/// Cascade level 1, computed rather than folded into the const chain.
pub fn cascade_level_1() -> f64 {
    PHI_INV_SQ / 2.0
}

/// Errors from cosmological conversions.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CosmologyError {
    /// Hubble rates must be positive and finite.
    #[error("Hubble rate must be positive and finite, got {0}")]
    InvalidHubbleRate(f64),
}
