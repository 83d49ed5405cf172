//! Builder module for constructing strategies from configuration
//!
//! This module provides the wiring between configuration types and
//! the actual search implementations.

use erdos_config::{SearchConfig, StrategyKind};

use crate::{
    BoundedPairSearch, ExhaustiveSearch, FractionDecompositionSearch, MonteCarloSearch,
    ParametrizedSearch, PrimeFactorSearch, Strategy, UniversalSolver,
};

/// Builder for constructing strategies from configuration.
pub struct StrategyBuilder;

impl StrategyBuilder {
    /// Builds one strategy with the bounds from `config`.
    ///
    /// # Example
    ///
    /// ```
    /// use erdos_config::{SearchConfig, StrategyKind};
    /// use erdos_solver::{Strategy, StrategyBuilder};
    ///
    /// let config = SearchConfig::default();
    /// let strategy = StrategyBuilder::build(StrategyKind::Fraction, &config);
    /// assert_eq!(strategy.name(), "Fraction");
    /// ```
    pub fn build(kind: StrategyKind, config: &SearchConfig) -> Box<dyn Strategy> {
        match kind {
            StrategyKind::Exhaustive => Box::new(ExhaustiveSearch::new(config.exhaustive.max_range)),
            StrategyKind::Naive => Box::new(BoundedPairSearch::new(config.naive.max_trials)),
            StrategyKind::Fraction => {
                Box::new(FractionDecompositionSearch::new(config.fraction.max_yz))
            }
            StrategyKind::Parametrized => Box::new(
                ParametrizedSearch::new(config.parametrized.max_y)
                    .with_x_margin(config.parametrized.x_margin),
            ),
            StrategyKind::PrimeFactor => {
                Box::new(PrimeFactorSearch::new(config.prime_factor.max_range))
            }
            StrategyKind::MonteCarlo => {
                let trials = config.monte_carlo.trials;
                match config.random_seed {
                    Some(seed) => Box::new(MonteCarloSearch::with_seed(trials, seed)),
                    None => Box::new(MonteCarloSearch::new(trials)),
                }
            }
            StrategyKind::Universal => Box::new(UniversalSolver::from_config(config)),
        }
    }

    /// Builds the configured benchmark lineup, preserving its order.
    pub fn build_lineup(config: &SearchConfig) -> Vec<Box<dyn Strategy>> {
        config
            .benchmark
            .strategies
            .iter()
            .map(|&kind| Self::build(kind, config))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_match_kinds() {
        let config = SearchConfig::default();
        for kind in StrategyKind::ALL {
            let strategy = StrategyBuilder::build(kind, &config);
            assert_eq!(strategy.name(), kind.display_name());
        }
    }

    #[test]
    fn test_lineup_preserves_order() {
        let config = SearchConfig::default().with_strategies([
            StrategyKind::Universal,
            StrategyKind::Naive,
            StrategyKind::Universal,
        ]);
        let names: Vec<String> = StrategyBuilder::build_lineup(&config)
            .iter()
            .map(|s| s.name().to_string())
            .collect();
        assert_eq!(names, vec!["Universal", "Naive", "Universal"]);
    }

    #[test]
    fn test_default_lineup() {
        let lineup = StrategyBuilder::build_lineup(&SearchConfig::default());
        let names: Vec<&str> = lineup.iter().map(|s| s.name()).collect();
        assert_eq!(
            names,
            vec!["Exhaustive", "Naive", "Fraction", "Parametrized", "Universal"]
        );
    }
}
