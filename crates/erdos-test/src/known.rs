//! Hand-checked decompositions.
//!
//! # Example
//!
//! ```
//! use erdos_core::is_valid;
//! use erdos_test::{big, known_solution};
//!
//! let solution = known_solution(7).unwrap();
//! assert!(is_valid(&big(7), Some(&solution)));
//! ```

use erdos_core::Solution;
use num_bigint::BigUint;

/// `(n, (x, y, z))` pairs with `4/n = 1/x + 1/y + 1/z`.
pub const KNOWN_DECOMPOSITIONS: &[(u64, (u64, u64, u64))] = &[
    (2, (1, 2, 2)),
    (3, (1, 4, 12)),
    (5, (2, 4, 20)),
    (7, (2, 15, 210)),
    (10, (4, 7, 140)),
    (13, (4, 18, 468)),
    (1001, (1001, 334, 334_334)),
];

/// Shorthand for `BigUint::from(n)`.
pub fn big(n: u64) -> BigUint {
    BigUint::from(n)
}

/// Returns the known decomposition for `n`, if listed.
pub fn known_solution(n: u64) -> Option<Solution> {
    KNOWN_DECOMPOSITIONS
        .iter()
        .find(|(m, _)| *m == n)
        .map(|&(_, (x, y, z))| Solution::new(x, y, z))
}

/// Odd `n` that no closed-form identity covers (`n ≡ 3 mod 4`, or
/// `n ≡ 1 mod 4` with `n ≢ 2 mod 3`).
pub const SCAN_ONLY_N: &[u64] = &[7, 11, 13, 19, 23, 31, 37, 43, 47, 49];

#[cfg(test)]
mod tests {
    use super::*;
    use erdos_core::is_valid;

    #[test]
    fn test_known_decompositions_validate() {
        for &(n, (x, y, z)) in KNOWN_DECOMPOSITIONS {
            assert!(
                is_valid(&big(n), Some(&Solution::new(x, y, z))),
                "n = {}",
                n
            );
        }
    }
}
