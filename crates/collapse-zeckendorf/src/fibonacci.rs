//! Fibonacci sequence in the distinct-value convention.
//!
//! F₁ = 1, F₂ = 2, and F(n) = F(n−1) + F(n−2). Index 92 is the last one
//! whose value fits in u64.

use crate::{Result, ZeckendorfError};

/// Largest index whose Fibonacci value fits in u64.
pub const MAX_INDEX: u32 = 92;

/// F(n) in the distinct convention, for 1 ≤ n ≤ [`MAX_INDEX`].
///
/// # Examples
///
/// ```
/// use collapse_zeckendorf::fibonacci;
///
/// assert_eq!(fibonacci(1).unwrap(), 1);
/// assert_eq!(fibonacci(2).unwrap(), 2);
/// assert_eq!(fibonacci(10).unwrap(), 89);
/// ```
pub fn fibonacci(n: u32) -> Result<u64> {
    if n == 0 || n > MAX_INDEX {
        return Err(ZeckendorfError::IndexOutOfRange(n));
    }
    let mut prev: u64 = 1; // F(1)
    let mut curr: u64 = 2; // F(2)
    match n {
        1 => return Ok(prev),
        2 => return Ok(curr),
        _ => {}
    }
    for _ in 3..=n {
        let next = prev + curr;
        prev = curr;
        curr = next;
    }
    Ok(curr)
}

/// The sequence F(1)..F(n) as a vector.
pub fn fibonacci_table(n: u32) -> Result<Vec<u64>> {
    if n == 0 || n > MAX_INDEX {
        return Err(ZeckendorfError::IndexOutOfRange(n));
    }
    let mut table = Vec::with_capacity(n as usize);
    let mut prev: u64 = 1;
    let mut curr: u64 = 2;
    table.push(prev);
    if n >= 2 {
        table.push(curr);
    }
    for _ in 3..=n {
        let next = prev + curr;
        prev = curr;
        curr = next;
        table.push(curr);
    }
    Ok(table)
}
