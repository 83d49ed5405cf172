//! Prime-factor-guided search.

use erdos_core::arith::{distinct_prime_factors, solve_for_z};
use erdos_core::{SearchResult, Solution};
use num_bigint::BigUint;
use num_traits::ToPrimitive;
use tracing::{debug, trace};

use crate::strategy::{ensure_positive, Strategy};

/// Scans `x` over multiples of each prime factor of `n`.
///
/// Primes are taken in ascending order. For a prime `p`, `x` runs over
/// `p, 2p, ...` up to `max_range`, `y` over `[x, max_range]`, and `z` is solved
/// for as in [`BoundedPairSearch`](crate::BoundedPairSearch). Factors larger
/// than `max_range` contribute no candidates; `n = 1` has none at all.
///
/// # Example
///
/// ```
/// use erdos_core::Solution;
/// use erdos_solver::{PrimeFactorSearch, Strategy};
/// use num_bigint::BigUint;
///
/// let search = PrimeFactorSearch::new(200);
/// let found = search.search(&BigUint::from(10u32)).unwrap();
/// assert_eq!(found, Some(Solution::new(4u32, 7u32, 140u32)));
/// ```
#[derive(Debug, Clone)]
pub struct PrimeFactorSearch {
    max_range: u64,
}

impl PrimeFactorSearch {
    pub fn new(max_range: u64) -> Self {
        Self { max_range }
    }

    pub fn max_range(&self) -> u64 {
        self.max_range
    }

    fn scan_multiples(&self, n: &BigUint, p: u64) -> Option<Solution> {
        let mut x = p;
        while x <= self.max_range {
            let bx = BigUint::from(x);
            for y in x..=self.max_range {
                let by = BigUint::from(y);
                if let Some(z) = solve_for_z(n, &bx, &by) {
                    if z >= by {
                        return Some(Solution::new(bx, by, z));
                    }
                }
            }
            x = match x.checked_add(p) {
                Some(next) => next,
                None => break,
            };
        }
        None
    }
}

/// `max_range = 1000`, wider than the 50 used by
/// [`ExhaustiveSearch`](crate::ExhaustiveSearch).
///
/// `max_range` bounds both `x` and `y`. With `x` pinned to multiples of a
/// prime factor, `y` usually lands in the hundreds: at 50, even `n = 106`
/// finds nothing.
impl Default for PrimeFactorSearch {
    fn default() -> Self {
        Self::new(1000)
    }
}

impl Strategy for PrimeFactorSearch {
    fn name(&self) -> &str {
        "PrimeFactor"
    }

    fn search(&self, n: &BigUint) -> SearchResult {
        ensure_positive(n)?;

        let factors = distinct_prime_factors(n);
        trace!(strategy = "PrimeFactor", %n, factors = factors.len() as u64, "factored");

        for p in &factors {
            let Some(p) = p.to_u64().filter(|&p| p <= self.max_range) else {
                continue;
            };
            if let Some(solution) = self.scan_multiples(n, p) {
                debug!(strategy = "PrimeFactor", %n, p, %solution, "solution found");
                return Ok(Some(solution));
            }
        }

        debug!(strategy = "PrimeFactor", %n, max_range = self.max_range, "factors exhausted");
        Ok(None)
    }
}
