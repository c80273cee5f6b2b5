//! Spectral Constants
//!
//! The fine-structure constant as a weighted average over the two observer
//! ranks. Rank 6 carries the electromagnetic coupling, rank 7 the observer
//! channel; their ζ-weights φ⁻⁶ and φ⁻⁷ mix with a ratio r:
//!
//! ```text
//! α = (1/2π) · (r·φ⁻⁶ + φ⁻⁷)/(r + 1)
//! ```
//!
//! For the measured α = 1/137.035999084 the ratio lands at r ≈ 1.15503.
//! The φ-trace rank log_φ(x) places constants on the rank ladder: the SI
//! speed of light sits at rank ≈ 40.56 (its leading Zeckendorf index is
//! 41), and 1/α at rank ≈ 10.22.

mod atomic;
mod average;
mod rank;

pub use atomic::{
    bohr_radius, rydberg_constant, BOHR_RADIUS_CODATA, ELECTRON_MASS_SI, PLANCK_H_SI,
    RYDBERG_CODATA,
};
pub use average::{
    em_coupling, fine_structure, spectral_average, weight_ratio_for, ALPHA_CODATA, CHANNEL_RANK,
    INVERSE_ALPHA_CODATA, OBSERVER_RANK,
};
pub use rank::{nearest_rank, phi_rank};

use thiserror::Error;

/// Result type for spectral operations.
pub type Result<T> = std::result::Result<T, SpectralError>;

/// Errors from spectral-average and rank computations.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SpectralError {
    /// The weight ratio must be positive and finite.
    #[error("weight ratio must be positive and finite, got {0}")]
    InvalidRatio(f64),

    /// A coupling strength must be positive and finite.
    #[error("coupling must be positive and finite, got {0}")]
    InvalidCoupling(f64),

    /// No positive ratio reproduces this α: it lies outside the open
    /// band (φ⁻⁷/2π, φ⁻⁶/2π).
    #[error("alpha {0} outside the rank-6/7 spectral band")]
    AlphaOutOfBand(f64),

    /// Rank computations require a positive, finite argument.
    #[error("rank undefined for {0}")]
    InvalidRankArgument(f64),
}
