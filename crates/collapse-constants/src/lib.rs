//! Collapse Framework Constants
//!
//! Golden-ratio constants shared by every crate in the workspace.
//!
//! # Mathematical Foundation
//!
//! The framework is built on the positive root of x² − x − 1 = 0:
//!
//! ```text
//! φ = (1 + √5)/2
//! ```
//!
//! Every other float in this crate is *derived* from φ through algebraic
//! identities (1/φ = φ − 1, φ² = φ + 1, √5 = 2φ − 1, ...) rather than typed
//! as a separate decimal. Powers of φ stay inside ℤ[φ]:
//!
//! ```text
//! φⁿ = F(n)·φ + F(n−1)
//! ```
//!
//! where F is the Fibonacci sequence. The weight system ζ(s) = φ⁻ˢ and the
//! rank logarithm log_φ complete the toolkit the derivation chapters build on.

mod phi;
mod tolerance;
mod weights;

pub use phi::{
    log_phi, phi_power, phi_power_coefficients, ConstantsError, PHI, PHI_INV, PHI_INV_SQ, PHI_SQ,
    SQRT5,
};
pub use tolerance::{approx_eq, rel_close, relative_error, Tolerance};
pub use weights::{zeta_weight, zeta_weight_partial_sum, ZETA_WEIGHT_SUM};

// Compile-time anchor for the Fibonacci coefficient recurrence:
// φ⁸ = 21φ + 13, the last power the derivations use directly.
const _: () = {
    let coeffs = phi_power_coefficients(8);
    assert!(coeffs.0 == 21 && coeffs.1 == 13);
};
