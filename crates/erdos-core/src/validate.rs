//! Exact validation of candidate solutions.
//!
//! Every check goes through [`BigRational`], so no precision is lost for large
//! `n` and integer-division shortcuts inside a search cannot leak false
//! positives.

use num_bigint::{BigInt, BigUint};
use num_rational::BigRational;
use num_traits::{One, Zero};

use crate::Solution;

/// Returns true if `solution` satisfies `4/n = 1/x + 1/y + 1/z` exactly.
///
/// Absent solutions, zero components and `n = 0` are all rejected.
///
/// # Example
///
/// ```
/// use erdos_core::{is_valid, Solution};
/// use num_bigint::BigUint;
///
/// let n = BigUint::from(10u32);
/// assert!(is_valid(&n, Some(&Solution::new(5u32, 10u32, 10u32))));
/// assert!(!is_valid(&n, Some(&Solution::new(5u32, 10u32, 11u32))));
/// assert!(!is_valid(&n, None));
/// ```
pub fn is_valid(n: &BigUint, solution: Option<&Solution>) -> bool {
    match solution {
        Some(s) => is_valid_triple(n, s.x(), s.y(), s.z()),
        None => false,
    }
}

/// Returns true if `(x, y, z)` satisfies `4/n = 1/x + 1/y + 1/z` exactly.
pub fn is_valid_triple(n: &BigUint, x: &BigUint, y: &BigUint, z: &BigUint) -> bool {
    if n.is_zero() || x.is_zero() || y.is_zero() || z.is_zero() {
        return false;
    }
    let lhs = unit_fraction(x) + unit_fraction(y) + unit_fraction(z);
    let rhs = BigRational::new(BigInt::from(4), BigInt::from(n.clone()));
    lhs == rhs
}

// 1/d as a reduced rational. Callers guarantee d > 0.
fn unit_fraction(d: &BigUint) -> BigRational {
    BigRational::new(BigInt::one(), BigInt::from(d.clone()))
}
