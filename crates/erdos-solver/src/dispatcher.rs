//! Universal dispatcher: first validated answer from an ordered lineup.

use erdos_config::SearchConfig;
use erdos_core::{is_valid, SearchResult};
use num_bigint::BigUint;
use tracing::{debug, warn};

use crate::strategy::{ensure_positive, Strategy};
use crate::{BoundedPairSearch, FractionDecompositionSearch, ParametrizedSearch};

/// Tries strategies in order and returns the first validated solution.
///
/// The default lineup is parametrized → fraction-decomposition → bounded-pair.
/// That order is fixed so benchmark runs stay reproducible; custom lineups can
/// be assembled with [`UniversalSolver::new`]. A candidate the validator
/// rejects is skipped, never returned.
///
/// # Example
///
/// ```
/// use erdos_core::is_valid;
/// use erdos_solver::{Strategy, UniversalSolver};
/// use num_bigint::BigUint;
///
/// let solver = UniversalSolver::default();
/// let n = BigUint::from(1001u32);
/// let found = solver.search(&n).unwrap();
/// assert!(is_valid(&n, found.as_ref()));
/// ```
#[derive(Debug)]
pub struct UniversalSolver {
    strategies: Vec<Box<dyn Strategy>>,
}

impl UniversalSolver {
    /// Creates a dispatcher over an explicit lineup.
    pub fn new(strategies: Vec<Box<dyn Strategy>>) -> Self {
        Self { strategies }
    }

    /// Creates the default lineup with bounds taken from `config`.
    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new(vec![
            Box::new(
                ParametrizedSearch::new(config.parametrized.max_y)
                    .with_x_margin(config.parametrized.x_margin),
            ),
            Box::new(FractionDecompositionSearch::new(config.fraction.max_yz)),
            Box::new(BoundedPairSearch::new(config.naive.max_trials)),
        ])
    }

    /// Appends a strategy to the end of the lineup.
    pub fn with_strategy(mut self, strategy: Box<dyn Strategy>) -> Self {
        self.strategies.push(strategy);
        self
    }

    /// Names of the strategies in the order they are tried.
    pub fn lineup(&self) -> Vec<&str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }
}

impl Default for UniversalSolver {
    fn default() -> Self {
        Self::from_config(&SearchConfig::default())
    }
}

impl Strategy for UniversalSolver {
    fn name(&self) -> &str {
        "Universal"
    }

    fn search(&self, n: &BigUint) -> SearchResult {
        ensure_positive(n)?;

        for strategy in &self.strategies {
            match strategy.search(n)? {
                Some(solution) if is_valid(n, Some(&solution)) => {
                    debug!(
                        strategy = "Universal",
                        %n,
                        via = strategy.name(),
                        %solution,
                        "dispatch resolved"
                    );
                    return Ok(Some(solution));
                }
                Some(solution) => {
                    warn!(
                        event = "candidate_rejected",
                        strategy = "Universal",
                        %n,
                        via = strategy.name(),
                        %solution,
                        "candidate failed validation"
                    );
                }
                None => {
                    debug!(strategy = "Universal", %n, via = strategy.name(), "no result, falling through");
                }
            }
        }
        Ok(None)
    }
}
