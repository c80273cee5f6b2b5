//! Chapter identifiers and reports.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::check::Check;
use crate::ChapterError;

/// Part and chapter number, written "part.number".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ChapterId {
    /// Part of the book (1–4)
    pub part: u8,
    /// Chapter within the part, starting at 1
    pub number: u8,
}

impl ChapterId {
    /// Create an identifier.
    pub const fn new(part: u8, number: u8) -> Self {
        Self { part, number }
    }
}

impl fmt::Display for ChapterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.part, self.number)
    }
}

impl FromStr for ChapterId {
    type Err = ChapterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (part, number) = s
            .split_once('.')
            .ok_or_else(|| ChapterError::BadChapterId(s.to_owned()))?;
        let part = part
            .parse()
            .map_err(|_| ChapterError::BadChapterId(s.to_owned()))?;
        let number = number
            .parse()
            .map_err(|_| ChapterError::BadChapterId(s.to_owned()))?;
        Ok(Self { part, number })
    }
}

/// The outcome of running one chapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChapterReport {
    /// Which chapter ran
    pub id: ChapterId,
    /// Chapter title
    pub title: String,
    /// All checks, in derivation order
    pub checks: Vec<Check>,
}

impl ChapterReport {
    /// Assemble a report.
    pub fn new(id: ChapterId, title: &str, checks: Vec<Check>) -> Self {
        Self {
            id,
            title: title.to_owned(),
            checks,
        }
    }

    /// Every check landed inside its tolerance.
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(Check::passed)
    }

    /// Number of passing checks.
    pub fn passed_count(&self) -> usize {
        self.checks.iter().filter(|c| c.passed()).count()
    }

    /// The checks that missed their tolerance.
    pub fn failures(&self) -> impl Iterator<Item = &Check> {
        self.checks.iter().filter(|c| !c.passed())
    }

    /// Total number of checks.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// A chapter without checks verifies nothing.
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}
