//! φ-trace rank fitting.
//!
//! The rank of a constant is its base-φ logarithm. Constants whose rank
//! sits near an integer are near pure φ-powers; the residual says how
//! near.

use collapse_constants::log_phi;

use crate::{Result, SpectralError};

/// Rank of a positive constant: log_φ(x).
pub fn phi_rank(x: f64) -> Result<f64> {
    log_phi(x).map_err(|_| SpectralError::InvalidRankArgument(x))
}

/// Nearest integer rank and the signed residual rank − nearest.
pub fn nearest_rank(x: f64) -> Result<(i64, f64)> {
    let rank = phi_rank(x)?;
    let nearest = rank.round();
    Ok((nearest as i64, rank - nearest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::INVERSE_ALPHA_CODATA;
    use collapse_constants::{approx_eq, phi_power};
    use collapse_units::C_SI;

    #[test]
    fn speed_of_light_rank() {
        // log_φ(299 792 458) ≈ 40.56 — one below its leading Zeckendorf
        // index, as the greedy pick F₄₁ ≤ c < F₄₂ requires.
        let rank = phi_rank(C_SI).unwrap();
        assert!(approx_eq(rank, 40.561, 2e-3), "rank = {}", rank);

        let (nearest, residual) = nearest_rank(C_SI).unwrap();
        assert_eq!(nearest, 41);
        assert!(residual.abs() < 0.5);
    }

    #[test]
    fn inverse_alpha_rank() {
        // log_φ(137.036) ≈ 10.22, clustering at rank 10.
        let (nearest, residual) = nearest_rank(INVERSE_ALPHA_CODATA).unwrap();
        assert_eq!(nearest, 10);
        assert!(residual.abs() < 0.25, "residual = {}", residual);
    }

    #[test]
    fn pure_powers_have_zero_residual() {
        for n in [5u32, 10, 20, 40] {
            let (nearest, residual) = nearest_rank(phi_power(n)).unwrap();
            assert_eq!(nearest, n as i64);
            assert!(residual.abs() < 1e-10);
        }
    }

    #[test]
    fn rank_rejects_non_positive() {
        assert!(matches!(
            phi_rank(0.0),
            Err(SpectralError::InvalidRankArgument(_))
        ));
        assert!(phi_rank(-3.0).is_err());
    }
}
