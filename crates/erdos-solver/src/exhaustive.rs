//! Exhaustive triple search.

use erdos_core::{is_valid_triple, SearchResult, Solution};
use num_bigint::BigUint;
use tracing::debug;

use crate::strategy::{ensure_positive, Strategy};

/// Brute force over `1 <= x <= y <= z < max_range`.
///
/// Every triple is checked with the exact validator, so the first hit in
/// lexicographic order is returned. Cost is cubic in `max_range`; only
/// useful for small `n`.
///
/// # Example
///
/// ```
/// use erdos_core::Solution;
/// use erdos_solver::{ExhaustiveSearch, Strategy};
/// use num_bigint::BigUint;
///
/// let search = ExhaustiveSearch::new(50);
/// let found = search.search(&BigUint::from(5u32)).unwrap();
/// assert_eq!(found, Some(Solution::new(2u32, 4u32, 20u32)));
/// ```
#[derive(Debug, Clone)]
pub struct ExhaustiveSearch {
    max_range: u64,
}

impl ExhaustiveSearch {
    pub fn new(max_range: u64) -> Self {
        Self { max_range }
    }

    pub fn max_range(&self) -> u64 {
        self.max_range
    }
}

impl Default for ExhaustiveSearch {
    fn default() -> Self {
        Self::new(50)
    }
}

impl Strategy for ExhaustiveSearch {
    fn name(&self) -> &str {
        "Exhaustive"
    }

    fn search(&self, n: &BigUint) -> SearchResult {
        ensure_positive(n)?;

        for x in 1..self.max_range {
            let bx = BigUint::from(x);
            for y in x..self.max_range {
                let by = BigUint::from(y);
                for z in y..self.max_range {
                    let bz = BigUint::from(z);
                    if is_valid_triple(n, &bx, &by, &bz) {
                        debug!(strategy = "Exhaustive", %n, x, y, z, "solution found");
                        return Ok(Some(Solution::new(bx, by, bz)));
                    }
                }
            }
        }

        debug!(strategy = "Exhaustive", %n, max_range = self.max_range, "range exhausted");
        Ok(None)
    }
}
