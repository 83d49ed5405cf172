//! Erdős–Straus Search Strategies
//!
//! This crate provides the searches for `4/n = 1/x + 1/y + 1/z`:
//! - [`ExhaustiveSearch`] - cubic brute force over small triples
//! - [`BoundedPairSearch`] - quadratic `(x, y)` scan solving for `z`
//! - [`FractionDecompositionSearch`] - per-`x` remainder decomposition
//! - [`ParametrizedSearch`] - closed-form identities with a scan fallback
//! - [`PrimeFactorSearch`] - `x` restricted to multiples of prime factors of `n`
//! - [`MonteCarloSearch`] - random sampling of `(x, y)`
//! - [`UniversalSolver`] - ordered dispatch with independent validation
//!
//! Every search implements [`Strategy`], and [`StrategyBuilder`] wires them up
//! from an [`erdos_config::SearchConfig`].
//!
//! Logging levels:
//! - **WARN**: Candidates rejected by the validator inside the dispatcher
//! - **DEBUG**: One event per search outcome
//! - **TRACE**: Per-window and per-factor progress

pub mod bounded_pair;
pub mod builder;
pub mod dispatcher;
pub mod exhaustive;
pub mod fraction;
pub mod monte_carlo;
pub mod parametrized;
pub mod prime_factor;
pub mod strategy;

pub use bounded_pair::BoundedPairSearch;
pub use builder::StrategyBuilder;
pub use dispatcher::UniversalSolver;
pub use exhaustive::ExhaustiveSearch;
pub use fraction::FractionDecompositionSearch;
pub use monte_carlo::MonteCarloSearch;
pub use parametrized::ParametrizedSearch;
pub use prime_factor::PrimeFactorSearch;
pub use strategy::{FnStrategy, Strategy};
