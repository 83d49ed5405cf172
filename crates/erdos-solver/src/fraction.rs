//! Fraction-decomposition search.

use erdos_core::arith::{ceil_div, min_x};
use erdos_core::{is_valid_triple, SearchResult, Solution};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;
use tracing::{debug, trace};

use crate::strategy::{ensure_positive, Strategy};

/// Reduces the three-unknown equation to two nested one-dimensional scans.
///
/// For each `x` in `[n/4 + 1, 2n)` the remainder `4/n - 1/x` is kept as
/// `rem_num / rem_den`. The smallest feasible `y` is `ceil(rem_den / rem_num)`;
/// a window of `max_yz` values starting at `max(x, y_min)` is scanned, and for
/// each `y` the last term `1/z = rem_num/rem_den - 1/y` must be a unit
/// fraction.
///
/// # Example
///
/// ```
/// use erdos_core::Solution;
/// use erdos_solver::{FractionDecompositionSearch, Strategy};
/// use num_bigint::BigUint;
///
/// let search = FractionDecompositionSearch::new(5000);
/// let found = search.search(&BigUint::from(5u32)).unwrap();
/// assert_eq!(found, Some(Solution::new(2u32, 4u32, 20u32)));
/// ```
#[derive(Debug, Clone)]
pub struct FractionDecompositionSearch {
    max_yz: u64,
}

impl FractionDecompositionSearch {
    pub fn new(max_yz: u64) -> Self {
        Self { max_yz }
    }

    pub fn max_yz(&self) -> u64 {
        self.max_yz
    }

    // Scans the y window for one x. `rem_num > 0` is guaranteed by the caller.
    fn scan_window(
        &self,
        n: &BigUint,
        x: &BigUint,
        rem_num: &BigUint,
        rem_den: &BigUint,
    ) -> Option<Solution> {
        let y_min = ceil_div(rem_den, rem_num);
        let y_start = if *x > y_min { x.clone() } else { y_min };
        let y_end = &y_start + self.max_yz;

        let mut y = y_start;
        while y < y_end {
            let scaled = rem_num * &y;
            if scaled > *rem_den {
                let sub_num = scaled - rem_den;
                let sub_den = rem_den * &y;
                let (z, rem) = sub_den.div_rem(&sub_num);
                if rem.is_zero() && z >= y && is_valid_triple(n, x, &y, &z) {
                    return Some(Solution::new(x.clone(), y, z));
                }
            }
            y += 1u32;
        }
        None
    }
}

impl Default for FractionDecompositionSearch {
    fn default() -> Self {
        Self::new(5000)
    }
}

impl Strategy for FractionDecompositionSearch {
    fn name(&self) -> &str {
        "Fraction"
    }

    fn search(&self, n: &BigUint) -> SearchResult {
        ensure_positive(n)?;

        let x_end = n << 1u32;
        let mut x = min_x(n);
        while x < x_end {
            let four_x = &x << 2u32;
            if four_x > *n {
                let rem_num = four_x - n;
                let rem_den = n * &x;
                if let Some(solution) = self.scan_window(n, &x, &rem_num, &rem_den) {
                    debug!(strategy = "Fraction", %n, %solution, "solution found");
                    return Ok(Some(solution));
                }
                trace!(strategy = "Fraction", %n, %x, "window exhausted");
            }
            x += 1u32;
        }

        debug!(strategy = "Fraction", %n, max_yz = self.max_yz, "x range exhausted");
        Ok(None)
    }
}
