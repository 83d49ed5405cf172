//! Parametrized search: closed-form identities first, bounded scan second.

use erdos_core::arith::{ceil_div, min_x, solve_for_z};
use erdos_core::{SearchResult, Solution};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};
use tracing::debug;

use crate::strategy::{ensure_positive, Strategy};

/// Applies known identities, falling back to a windowed scan.
///
/// - Even `n`: `4/n = 1/(n/2) + 1/n + 1/n`.
/// - `n ≡ 1 (mod 4)` with `3 | n - 2`: `(n, (n-2)/3 + 1, n·((n-2)/3 + 1))`.
/// - Otherwise `x` runs from `n/4 + 1` up to `n/2 + x_margin` (exclusive),
///   `y` scans `max_y` values from `ceil(nx / (4x - n))`, and `z` is solved
///   for directly.
///
/// An exhausted window is a soft failure (`Ok(None)`); a wider window may
/// still find a solution.
///
/// # Example
///
/// ```
/// use erdos_core::Solution;
/// use erdos_solver::{ParametrizedSearch, Strategy};
/// use num_bigint::BigUint;
///
/// let search = ParametrizedSearch::default();
/// let found = search.search(&BigUint::from(10u32)).unwrap();
/// assert_eq!(found, Some(Solution::new(5u32, 10u32, 10u32)));
/// ```
#[derive(Debug, Clone)]
pub struct ParametrizedSearch {
    max_y: u64,
    x_margin: u64,
}

impl ParametrizedSearch {
    pub fn new(max_y: u64) -> Self {
        Self {
            max_y,
            x_margin: 100,
        }
    }

    /// Sets how far past `n/2` the fallback scan takes `x`.
    pub fn with_x_margin(mut self, x_margin: u64) -> Self {
        self.x_margin = x_margin;
        self
    }

    pub fn max_y(&self) -> u64 {
        self.max_y
    }

    pub fn x_margin(&self) -> u64 {
        self.x_margin
    }

    /// Returns the closed-form solution for `n`, if one of the identities applies.
    ///
    /// ```
    /// use erdos_core::Solution;
    /// use erdos_solver::ParametrizedSearch;
    /// use num_bigint::BigUint;
    ///
    /// let five = BigUint::from(5u32);
    /// assert_eq!(
    ///     ParametrizedSearch::closed_form(&five),
    ///     Some(Solution::new(5u32, 2u32, 10u32))
    /// );
    /// assert_eq!(ParametrizedSearch::closed_form(&BigUint::from(7u32)), None);
    /// ```
    pub fn closed_form(n: &BigUint) -> Option<Solution> {
        if n.is_zero() {
            return None;
        }
        if n.is_even() {
            let half = n >> 1u32;
            return Some(Solution::new(half, n.clone(), n.clone()));
        }
        // n ≡ 1 (mod 4) rules out n < 5, so n - 2 cannot underflow.
        if (n % 4u32).is_one() && n > &BigUint::one() {
            let (q, r) = (n - 2u32).div_rem(&BigUint::from(3u32));
            if r.is_zero() {
                let y = q + 1u32;
                let z = n * &y;
                return Some(Solution::new(n.clone(), y, z));
            }
        }
        None
    }

    fn scan(&self, n: &BigUint) -> Option<Solution> {
        let x_end = (n >> 1u32) + self.x_margin;
        let mut x = min_x(n);
        while x < x_end {
            let four_x = &x << 2u32;
            if four_x > *n {
                let denom_x = four_x - n;
                let y_min = ceil_div(&(n * &x), &denom_x);
                let y_end = &y_min + self.max_y;
                let mut y = y_min;
                while y < y_end {
                    if let Some(z) = solve_for_z(n, &x, &y) {
                        if z >= y {
                            return Some(Solution::new(x, y, z));
                        }
                    }
                    y += 1u32;
                }
            }
            x += 1u32;
        }
        None
    }
}

impl Default for ParametrizedSearch {
    fn default() -> Self {
        Self::new(100)
    }
}

impl Strategy for ParametrizedSearch {
    fn name(&self) -> &str {
        "Parametrized"
    }

    fn search(&self, n: &BigUint) -> SearchResult {
        ensure_positive(n)?;

        if let Some(solution) = Self::closed_form(n) {
            debug!(strategy = "Parametrized", %n, %solution, "closed form");
            return Ok(Some(solution));
        }

        let found = self.scan(n);
        match &found {
            Some(solution) => debug!(strategy = "Parametrized", %n, %solution, "scan hit"),
            None => debug!(strategy = "Parametrized", %n, max_y = self.max_y, "window exhausted"),
        }
        Ok(found)
    }
}
