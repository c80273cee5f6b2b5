//! Collapse Verification Chapters
//!
//! The verification corpus: each chapter re-derives one cluster of
//! collapse-framework claims and records the result as a list of named
//! checks. Four parts mirror the derivation's arc:
//!
//! 1. Structural collapse limits — c*, ħ*, G*, the collapse Planck scale.
//! 2. Collapse–SI equivalence — the λ scale map, observer depth, the
//!    Zeckendorf decomposition of the SI speed of light.
//! 3. Spectral constants — α from the rank-6/7 average, φ-trace ranks,
//!    atomic constants.
//! 4. Collapse cosmology — the dark-energy cascade and the Hubble scale.
//!
//! Chapters are pure: no I/O, no state, deterministic output. Failures are
//! carried in the report, not thrown.

mod check;
mod part1;
mod part2;
mod part3;
mod part4;
mod registry;
mod report;

pub use check::Check;
pub use registry::{find, in_part, registry, Chapter};
pub use report::{ChapterId, ChapterReport};

use thiserror::Error;

/// Result type for registry lookups.
pub type Result<T> = std::result::Result<T, ChapterError>;

/// Errors from chapter selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChapterError {
    /// No chapter has this id.
    #[error("unknown chapter {0}")]
    UnknownChapter(ChapterId),

    /// No chapters in this part.
    #[error("unknown part {0}, parts run 1-4")]
    UnknownPart(u8),

    /// An id string that is not "part.number".
    #[error("malformed chapter id {0:?}, expected \"part.number\"")]
    BadChapterId(String),
}
