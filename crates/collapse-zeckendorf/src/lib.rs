//! Zeckendorf Representations
//!
//! Every positive integer has exactly one representation as a sum of
//! distinct, non-consecutive Fibonacci numbers (Zeckendorf's theorem).
//! This crate provides the sequence, the greedy encoder, and a validated
//! representation type that enforces the non-consecutivity invariant.
//!
//! # Index Convention
//!
//! The distinct-value convention is used throughout: F₁ = 1, F₂ = 2,
//! F₃ = 3, F₄ = 5, ... Each index names a *different* Fibonacci value,
//! which is what a sum of distinct terms requires. Under this convention
//!
//! ```text
//! 299 792 458 = F₄₁ + F₃₆ + F₃₃ + F₃₀ + F₂₈ + F₂₅ + F₂₂ + F₁₉ + F₁₁ + F₁
//! ```
//!
//! is the ten-term decomposition of the SI speed of light.
//!
//! # Invariant
//!
//! A [`Zeckendorf`] value never holds two consecutive indices: adjacent
//! chosen indices differ by at least 2. Constructors reject anything else,
//! so every value of the type is a genuine Zeckendorf representation.

mod codec;
mod fibonacci;

pub use codec::Zeckendorf;
pub use fibonacci::{fibonacci, fibonacci_table, MAX_INDEX};

use thiserror::Error;

/// Result type for Zeckendorf operations.
pub type Result<T> = std::result::Result<T, ZeckendorfError>;

/// Errors from Fibonacci lookups and representation construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ZeckendorfError {
    /// Index 0 or an index past the u64 range of the sequence.
    #[error("Fibonacci index {0} outside 1..={MAX_INDEX}")]
    IndexOutOfRange(u32),

    /// Two chosen indices are equal or adjacent.
    #[error("indices {0} and {1} violate non-consecutivity")]
    ConsecutiveIndices(u32, u32),

    /// Zero has the empty representation; encoding it is a caller bug.
    #[error("zero has no Zeckendorf terms")]
    Zero,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_of_light_anchor() {
        let c = 299_792_458_u64;
        let zeck = Zeckendorf::encode(c).unwrap();
        assert_eq!(zeck.value(), c);
        assert_eq!(zeck.indices(), &[41, 36, 33, 30, 28, 25, 22, 19, 11, 1]);
        assert_eq!(zeck.len(), 10);
    }
}
