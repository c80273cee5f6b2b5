//! The Zeckendorf representation type and greedy encoder.
//!
//! Greedy selection of the largest Fibonacci number not exceeding the
//! remainder always produces non-consecutive indices: after taking F(i),
//! the remainder is below F(i−1), so F(i−1) can never be the next pick.

use std::fmt;

use crate::fibonacci::{fibonacci, fibonacci_table, MAX_INDEX};
use crate::{Result, ZeckendorfError};

/// A validated Zeckendorf representation.
///
/// Holds the chosen Fibonacci indices in descending order. Adjacent
/// indices always differ by at least 2; [`Zeckendorf::value`] reconstructs
/// the represented integer exactly in u64 arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<u32>", into = "Vec<u32>"))]
pub struct Zeckendorf {
    /// Chosen indices, strictly descending, gaps ≥ 2.
    indices: Vec<u32>,
}

impl Zeckendorf {
    /// Decompose a positive integer greedily.
    ///
    /// # Examples
    ///
    /// ```
    /// use collapse_zeckendorf::Zeckendorf;
    ///
    /// let zeck = Zeckendorf::encode(100).unwrap();
    /// assert_eq!(zeck.indices(), &[10, 5, 3]); // 89 + 8 + 3
    /// assert_eq!(zeck.value(), 100);
    /// ```
    pub fn encode(n: u64) -> Result<Self> {
        if n == 0 {
            return Err(ZeckendorfError::Zero);
        }

        // Ascending values up to the first Fibonacci number above n.
        let table = fibonacci_table(MAX_INDEX).expect("MAX_INDEX is in range");

        let mut indices = Vec::new();
        let mut remaining = n;
        let mut cursor = table.len();
        while remaining > 0 {
            // Largest F(i) ≤ remaining, scanning downward from the last pick.
            while table[cursor - 1] > remaining {
                cursor -= 1;
            }
            indices.push(cursor as u32);
            remaining -= table[cursor - 1];
        }

        debug_assert!(indices.windows(2).all(|w| w[0] >= w[1] + 2));
        Ok(Self { indices })
    }

    /// Build a representation from explicit indices, in any order.
    ///
    /// Rejects indices outside the sequence range, duplicates, and
    /// consecutive pairs.
    pub fn from_indices(mut indices: Vec<u32>) -> Result<Self> {
        if indices.is_empty() {
            return Err(ZeckendorfError::Zero);
        }
        for &i in &indices {
            if i == 0 || i > MAX_INDEX {
                return Err(ZeckendorfError::IndexOutOfRange(i));
            }
        }
        indices.sort_unstable_by(|a, b| b.cmp(a));
        for pair in indices.windows(2) {
            if pair[0] < pair[1] + 2 {
                return Err(ZeckendorfError::ConsecutiveIndices(pair[1], pair[0]));
            }
        }

        // Large sparse index sets can exceed u64; reject them up front so
        // value() is total.
        let mut sum: u64 = 0;
        for &i in &indices {
            let term = fibonacci(i).expect("index validated above");
            sum = sum
                .checked_add(term)
                .ok_or(ZeckendorfError::IndexOutOfRange(i))?;
        }

        Ok(Self { indices })
    }

    /// The represented integer.
    pub fn value(&self) -> u64 {
        self.indices
            .iter()
            .map(|&i| fibonacci(i).expect("indices validated at construction"))
            .sum()
    }

    /// Chosen indices, descending.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Fibonacci values of the chosen terms, descending.
    pub fn terms(&self) -> impl Iterator<Item = u64> + '_ {
        self.indices
            .iter()
            .map(|&i| fibonacci(i).expect("indices validated at construction"))
    }

    /// Number of terms.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// A representation is never empty; this exists for the usual pairing.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Largest chosen index — the leading order of magnitude in base φ.
    pub fn leading_index(&self) -> u32 {
        self.indices[0]
    }
}

impl fmt::Display for Zeckendorf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (pos, &i) in self.indices.iter().enumerate() {
            if pos > 0 {
                write!(f, " + ")?;
            }
            write!(f, "F{}", i)?;
        }
        Ok(())
    }
}

impl TryFrom<Vec<u32>> for Zeckendorf {
    type Error = ZeckendorfError;

    fn try_from(indices: Vec<u32>) -> Result<Self> {
        Self::from_indices(indices)
    }
}

impl From<Zeckendorf> for Vec<u32> {
    fn from(zeck: Zeckendorf) -> Self {
        zeck.indices
    }
}
