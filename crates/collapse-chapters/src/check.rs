//! A single numeric check.
//!
//! A check records what was computed, what was expected, how close the two
//! must sit, and one line of interpretation. Failing a tolerance is not an
//! error — the report carries the verdict either way.

use collapse_constants::Tolerance;
use serde::{Deserialize, Serialize};

/// One named comparison inside a chapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Check {
    /// Short snake_case identifier, unique within its chapter.
    pub name: String,
    /// The value the derivation produced.
    pub computed: f64,
    /// The value the derivation claims.
    pub expected: f64,
    /// How close computed must sit to expected.
    pub tolerance: Tolerance,
    /// One line of physical interpretation.
    pub commentary: String,
}

impl Check {
    /// A comparison with an explicit tolerance.
    pub fn new(
        name: &str,
        computed: f64,
        expected: f64,
        tolerance: Tolerance,
        commentary: &str,
    ) -> Self {
        Self {
            name: name.to_owned(),
            computed,
            expected,
            tolerance,
            commentary: commentary.to_owned(),
        }
    }

    /// An exact comparison — integer-valued quantities, definitions.
    pub fn exact(name: &str, computed: f64, expected: f64, commentary: &str) -> Self {
        Self::new(name, computed, expected, Tolerance::Absolute(0.0), commentary)
    }

    /// A structural condition with no meaningful numeric distance.
    pub fn holds(name: &str, condition: bool, commentary: &str) -> Self {
        Self::exact(
            name,
            if condition { 1.0 } else { 0.0 },
            1.0,
            commentary,
        )
    }

    /// Did the computed value land inside the tolerance?
    pub fn passed(&self) -> bool {
        self.tolerance.admits(self.computed, self.expected)
    }

    /// |computed − expected|.
    pub fn deviation(&self) -> f64 {
        (self.computed - self.expected).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerance_verdicts() {
        let pass = Check::new("x", 1.0000001, 1.0, Tolerance::Absolute(1e-6), "");
        assert!(pass.passed());

        let fail = Check::new("x", 1.1, 1.0, Tolerance::Absolute(1e-6), "");
        assert!(!fail.passed());
    }

    #[test]
    fn exact_requires_bit_equality() {
        assert!(Check::exact("n", 10.0, 10.0, "").passed());
        assert!(!Check::exact("n", 10.0 + 1e-12, 10.0, "").passed());
    }

    #[test]
    fn holds_encodes_booleans() {
        assert!(Check::holds("ok", true, "").passed());
        assert!(!Check::holds("ok", false, "").passed());
    }

    #[test]
    fn serializes_with_tolerance_tag() {
        let check = Check::new("x", 2.0, 2.0, Tolerance::Relative(1e-3), "interpretation");
        let json = serde_json::to_string(&check).unwrap();
        let back: Check = serde_json::from_str(&json).unwrap();
        assert_eq!(check, back);
    }
}
