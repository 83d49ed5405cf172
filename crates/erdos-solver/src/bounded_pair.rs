//! Bounded-pair ("naive") search.

use std::collections::BTreeSet;

use erdos_core::arith::solve_for_z;
use erdos_core::{SearchError, SearchResult, Solution};
use num_bigint::BigUint;
use tracing::debug;

use crate::strategy::{ensure_positive, Strategy};

/// Quadratic scan over `1 <= x <= y <= max_trials`, solving for `z`.
///
/// For each pair, `denom = 4xy - n(x + y)`; when it is positive and divides
/// `nxy` exactly, `z = nxy / denom`. Every triple with `z >= y` is collected
/// and the lexicographically smallest one is returned.
///
/// # Example
///
/// ```
/// use erdos_core::Solution;
/// use erdos_solver::{BoundedPairSearch, Strategy};
/// use num_bigint::BigUint;
///
/// let search = BoundedPairSearch::new(100);
/// let found = search.search(&BigUint::from(7u32)).unwrap();
/// assert_eq!(found, Some(Solution::new(2u32, 15u32, 210u32)));
/// ```
#[derive(Debug, Clone)]
pub struct BoundedPairSearch {
    max_trials: u64,
}

impl BoundedPairSearch {
    pub fn new(max_trials: u64) -> Self {
        Self { max_trials }
    }

    pub fn max_trials(&self) -> u64 {
        self.max_trials
    }

    /// Returns every triple the scan finds, deduplicated and ordered.
    pub fn solutions(&self, n: &BigUint) -> Result<BTreeSet<Solution>, SearchError> {
        ensure_positive(n)?;

        let mut solutions = BTreeSet::new();
        for x in 1..=self.max_trials {
            let bx = BigUint::from(x);
            for y in x..=self.max_trials {
                let by = BigUint::from(y);
                if let Some(z) = solve_for_z(n, &bx, &by) {
                    if z >= by {
                        solutions.insert(Solution::new(bx.clone(), by, z));
                    }
                }
            }
        }
        Ok(solutions)
    }
}

impl Default for BoundedPairSearch {
    fn default() -> Self {
        Self::new(1000)
    }
}

impl Strategy for BoundedPairSearch {
    fn name(&self) -> &str {
        "Naive"
    }

    fn search(&self, n: &BigUint) -> SearchResult {
        let solutions = self.solutions(n)?;
        debug!(
            strategy = "Naive",
            %n,
            found = solutions.len() as u64,
            "pair scan complete"
        );
        Ok(solutions.into_iter().next())
    }
}
