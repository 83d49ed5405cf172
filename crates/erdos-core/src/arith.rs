//! Integer helpers shared by the search strategies.
//!
//! All helpers work on [`BigUint`] and never allocate floats. Subtractions
//! compare first, so a would-be negative denominator is reported as `None`
//! instead of underflowing.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};

/// Ceiling of `a / b`.
///
/// `b` must be non-zero.
///
/// ```
/// use erdos_core::arith::ceil_div;
/// use num_bigint::BigUint;
///
/// assert_eq!(ceil_div(&BigUint::from(10u32), &BigUint::from(3u32)), BigUint::from(4u32));
/// assert_eq!(ceil_div(&BigUint::from(9u32), &BigUint::from(3u32)), BigUint::from(3u32));
/// ```
pub fn ceil_div(a: &BigUint, b: &BigUint) -> BigUint {
    debug_assert!(!b.is_zero(), "ceil_div by zero");
    let (q, r) = a.div_rem(b);
    if r.is_zero() {
        q
    } else {
        q + 1u32
    }
}

/// Smallest `x` with `1/x < 4/n`, i.e. `floor(n/4) + 1`.
///
/// Every solution has its smallest component at or above this value.
pub fn min_x(n: &BigUint) -> BigUint {
    (n >> 2u32) + 1u32
}

/// Solves `4/n = 1/x + 1/y + 1/z` for `z` given `x` and `y`.
///
/// With `denom = 4xy - n(x + y)`, returns `Some(nxy / denom)` when `denom > 0`
/// and the division is exact. Any other pair is rejected with `None`.
///
/// ```
/// use erdos_core::arith::solve_for_z;
/// use num_bigint::BigUint;
///
/// let n = BigUint::from(5u32);
/// let z = solve_for_z(&n, &BigUint::from(2u32), &BigUint::from(4u32));
/// assert_eq!(z, Some(BigUint::from(20u32)));
/// assert_eq!(solve_for_z(&n, &BigUint::from(2u32), &BigUint::from(3u32)), None);
/// ```
pub fn solve_for_z(n: &BigUint, x: &BigUint, y: &BigUint) -> Option<BigUint> {
    let xy = x * y;
    let four_xy = &xy << 2u32;
    let n_sum = n * (x + y);
    if four_xy <= n_sum {
        return None;
    }
    let denom = four_xy - n_sum;
    let (z, rem) = (n * xy).div_rem(&denom);
    if rem.is_zero() {
        Some(z)
    } else {
        None
    }
}

/// Distinct prime factors of `n` in ascending order, by trial division.
///
/// Returns an empty vector for `n <= 1`.
///
/// ```
/// use erdos_core::arith::distinct_prime_factors;
/// use num_bigint::BigUint;
///
/// let factors = distinct_prime_factors(&BigUint::from(360u32));
/// let expected: Vec<BigUint> = [2u32, 3, 5].into_iter().map(BigUint::from).collect();
/// assert_eq!(factors, expected);
/// ```
pub fn distinct_prime_factors(n: &BigUint) -> Vec<BigUint> {
    let mut factors = Vec::new();
    let mut rest = n.clone();
    if rest <= BigUint::one() {
        return factors;
    }

    let mut divisor = BigUint::from(2u32);
    while &divisor * &divisor <= rest {
        if rest.is_multiple_of(&divisor) {
            while rest.is_multiple_of(&divisor) {
                rest /= &divisor;
            }
            factors.push(divisor.clone());
        }
        // 2, 3, 5, 7, ... (only odd candidates after 2)
        if divisor == BigUint::from(2u32) {
            divisor += 1u32;
        } else {
            divisor += 2u32;
        }
    }
    if rest > BigUint::one() {
        factors.push(rest);
    }
    factors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn b(v: u64) -> BigUint {
        BigUint::from(v)
    }

    #[test]
    fn test_min_x() {
        assert_eq!(min_x(&b(5)), b(2));
        assert_eq!(min_x(&b(8)), b(3));
        assert_eq!(min_x(&b(1)), b(1));
    }

    #[test]
    fn test_solve_for_z_rejects_non_positive_denominator() {
        // 4*2*2 - 10*(2+2) < 0
        assert_eq!(solve_for_z(&b(10), &b(2), &b(2)), None);
        // 4*3*3 - 6*(3+3) == 0
        assert_eq!(solve_for_z(&b(6), &b(3), &b(3)), None);
    }

    #[test]
    fn test_solve_for_z_rejects_inexact_division() {
        // denom = 4*2*6 - 5*8 = 8, n*x*y = 60, 60 % 8 != 0
        assert_eq!(solve_for_z(&b(5), &b(2), &b(6)), None);
    }

    #[test]
    fn test_solve_for_z_matches_known() {
        assert_eq!(solve_for_z(&b(7), &b(2), &b(15)), Some(b(210)));
        assert_eq!(solve_for_z(&b(10), &b(4), &b(7)), Some(b(140)));
    }

    #[test]
    fn test_prime_factors() {
        assert!(distinct_prime_factors(&b(0)).is_empty());
        assert!(distinct_prime_factors(&b(1)).is_empty());
        assert_eq!(distinct_prime_factors(&b(13)), vec![b(13)]);
        assert_eq!(distinct_prime_factors(&b(1001)), vec![b(7), b(11), b(13)]);
        assert_eq!(distinct_prime_factors(&b(1 << 20)), vec![b(2)]);
        assert_eq!(distinct_prime_factors(&b(1_000_003 * 3)), vec![b(3), b(1_000_003)]);
    }

    #[test]
    fn test_ceil_div() {
        assert_eq!(ceil_div(&b(1), &b(1)), b(1));
        assert_eq!(ceil_div(&b(0), &b(7)), b(0));
        assert_eq!(ceil_div(&b(15), &b(4)), b(4));
    }
}
