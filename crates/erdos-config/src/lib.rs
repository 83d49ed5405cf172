//! Configuration system for Erdős–Straus searches.
//!
//! Load search bounds, the Monte Carlo seed, benchmark settings and the sets
//! of `n` under test from TOML or YAML instead of hard-coding them.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use erdos_config::{SearchConfig, StrategyKind};
//!
//! let config = SearchConfig::from_toml_str(r#"
//!     random_seed = 7
//!
//!     [naive]
//!     max_trials = 200
//!
//!     [benchmark]
//!     repeat_count = 3
//!     strategies = ["parametrized", "universal"]
//!
//!     [n_values]
//!     small = [5, 7, 11]
//! "#).unwrap();
//!
//! assert_eq!(config.naive.max_trials, 200);
//! assert_eq!(config.fraction.max_yz, 5000);
//! assert_eq!(config.benchmark.strategies, vec![StrategyKind::Parametrized, StrategyKind::Universal]);
//! assert_eq!(config.n_values.small, vec![5, 7, 11]);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use erdos_config::SearchConfig;
//!
//! let config = SearchConfig::load("erdos.toml").unwrap_or_default();
//! assert_eq!(config.benchmark.repeat_count, 10);
//! ```

use std::fmt;
use std::path::Path;

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main search configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SearchConfig {
    /// Random seed for reproducible Monte Carlo runs.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Exhaustive triple search bounds.
    #[serde(default)]
    pub exhaustive: ExhaustiveConfig,

    /// Bounded-pair ("naive") search bounds.
    #[serde(default)]
    pub naive: NaiveConfig,

    /// Fraction-decomposition search bounds.
    #[serde(default)]
    pub fraction: FractionConfig,

    /// Parametrized search bounds.
    #[serde(default)]
    pub parametrized: ParametrizedConfig,

    /// Prime-factor-guided search bounds.
    #[serde(default)]
    pub prime_factor: PrimeFactorConfig,

    /// Monte Carlo search budget.
    #[serde(default)]
    pub monte_carlo: MonteCarloConfig,

    /// Benchmark harness settings.
    #[serde(default)]
    pub benchmark: BenchmarkSettings,

    /// Values of `n` to benchmark and verify.
    #[serde(default)]
    pub n_values: NValueSets,
}

impl SearchConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or fails
    /// [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = Self::from_toml_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Sets the number of timed repeats per (strategy, n) pair.
    pub fn with_repeat_count(mut self, count: usize) -> Self {
        self.benchmark.repeat_count = count;
        self
    }

    /// Replaces the benchmark strategy lineup.
    pub fn with_strategies(mut self, strategies: impl IntoIterator<Item = StrategyKind>) -> Self {
        self.benchmark.strategies = strategies.into_iter().collect();
        self
    }

    /// Sets the Monte Carlo trial budget.
    pub fn with_monte_carlo_trials(mut self, trials: u64) -> Self {
        self.monte_carlo.trials = trials;
        self
    }

    /// Checks that every bound is usable and the benchmark lineup has no repeats.
    ///
    /// # Examples
    ///
    /// ```
    /// use erdos_config::SearchConfig;
    ///
    /// let config = SearchConfig::from_toml_str("[fraction]\nmax_yz = 0").unwrap();
    /// assert!(config.validate().is_err());
    /// assert!(SearchConfig::default().validate().is_ok());
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        let bounds = [
            ("exhaustive.max_range", self.exhaustive.max_range),
            ("naive.max_trials", self.naive.max_trials),
            ("fraction.max_yz", self.fraction.max_yz),
            ("parametrized.max_y", self.parametrized.max_y),
            ("prime_factor.max_range", self.prime_factor.max_range),
            ("monte_carlo.trials", self.monte_carlo.trials),
        ];
        if let Some((name, _)) = bounds.iter().find(|(_, value)| *value == 0) {
            return Err(ConfigError::Invalid(format!("{} must be positive", name)));
        }
        if self.benchmark.repeat_count == 0 {
            return Err(ConfigError::Invalid(
                "benchmark.repeat_count must be positive".to_string(),
            ));
        }
        if self.benchmark.strategies.is_empty() {
            return Err(ConfigError::Invalid(
                "benchmark.strategies must name at least one strategy".to_string(),
            ));
        }
        let strategies = &self.benchmark.strategies;
        if let Some(kind) = strategies
            .iter()
            .enumerate()
            .find_map(|(i, kind)| strategies[..i].contains(kind).then_some(kind))
        {
            return Err(ConfigError::Invalid(format!(
                "benchmark.strategies lists `{}` more than once",
                kind
            )));
        }
        if self.n_values.iter_all().any(|n| n == 0) {
            return Err(ConfigError::Invalid(
                "n_values must contain positive integers only".to_string(),
            ));
        }
        Ok(())
    }
}

/// Exhaustive triple search configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ExhaustiveConfig {
    /// Exclusive upper bound for every component.
    pub max_range: u64,
}

impl Default for ExhaustiveConfig {
    fn default() -> Self {
        Self { max_range: 50 }
    }
}

/// Bounded-pair search configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct NaiveConfig {
    /// Inclusive upper bound for `x` and `y`.
    pub max_trials: u64,
}

impl Default for NaiveConfig {
    fn default() -> Self {
        Self { max_trials: 1000 }
    }
}

/// Fraction-decomposition search configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct FractionConfig {
    /// Number of `y` candidates scanned per `x`.
    pub max_yz: u64,
}

impl Default for FractionConfig {
    fn default() -> Self {
        Self { max_yz: 5000 }
    }
}

/// Parametrized search configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ParametrizedConfig {
    /// Number of `y` candidates scanned per `x` in the fallback scan.
    pub max_y: u64,

    /// How far past `n/2` the fallback scan takes `x`.
    pub x_margin: u64,
}

impl Default for ParametrizedConfig {
    fn default() -> Self {
        Self {
            max_y: 100,
            x_margin: 100,
        }
    }
}

/// Prime-factor-guided search configuration.
///
/// `max_range` defaults to 1000, not the exhaustive search's 50. It bounds both
/// `x` and `y`, and with `x` pinned to multiples of a prime factor `y` usually
/// lands in the hundreds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct PrimeFactorConfig {
    /// Inclusive upper bound for `x` and `y`.
    pub max_range: u64,
}

impl Default for PrimeFactorConfig {
    fn default() -> Self {
        Self { max_range: 1000 }
    }
}

/// Monte Carlo search configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct MonteCarloConfig {
    /// Number of random `(x, y)` samples.
    pub trials: u64,
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self { trials: 1_000_000 }
    }
}

/// Search strategies known to the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Cubic brute force over `(x, y, z)`.
    Exhaustive,

    /// Quadratic scan over `(x, y)` solving for `z`.
    Naive,

    /// Two-term remainder decomposition per `x`.
    Fraction,

    /// Closed-form identities with a bounded scan fallback.
    Parametrized,

    /// Scan over multiples of the prime factors of `n`.
    PrimeFactor,

    /// Random sampling of `(x, y)`.
    MonteCarlo,

    /// Parametrized, then fraction, then naive.
    Universal,
}

impl StrategyKind {
    /// Every strategy, in declaration order.
    pub const ALL: [StrategyKind; 7] = [
        StrategyKind::Exhaustive,
        StrategyKind::Naive,
        StrategyKind::Fraction,
        StrategyKind::Parametrized,
        StrategyKind::PrimeFactor,
        StrategyKind::MonteCarlo,
        StrategyKind::Universal,
    ];

    /// Display name used in benchmark tables.
    pub fn display_name(self) -> &'static str {
        match self {
            StrategyKind::Exhaustive => "Exhaustive",
            StrategyKind::Naive => "Naive",
            StrategyKind::Fraction => "Fraction",
            StrategyKind::Parametrized => "Parametrized",
            StrategyKind::PrimeFactor => "PrimeFactor",
            StrategyKind::MonteCarlo => "MonteCarlo",
            StrategyKind::Universal => "Universal",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Benchmark harness settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct BenchmarkSettings {
    /// Benchmark name used in reports.
    pub name: String,

    /// Timed runs per (strategy, n); the minimum is kept.
    pub repeat_count: usize,

    /// Untimed runs per (strategy, n) before timing starts.
    pub warmup_count: usize,

    /// Strategies to benchmark, in report order.
    pub strategies: Vec<StrategyKind>,

    /// Optional CSV export path.
    pub csv_output: Option<String>,

    /// Optional Markdown export path.
    pub markdown_output: Option<String>,
}

impl Default for BenchmarkSettings {
    fn default() -> Self {
        Self {
            name: "Erdős–Straus".to_string(),
            repeat_count: 10,
            warmup_count: 0,
            strategies: vec![
                StrategyKind::Exhaustive,
                StrategyKind::Naive,
                StrategyKind::Fraction,
                StrategyKind::Parametrized,
                StrategyKind::Universal,
            ],
            csv_output: None,
            markdown_output: None,
        }
    }
}

/// Values of `n` grouped by magnitude.
///
/// Defaults reproduce the reference benchmark ranges.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct NValueSets {
    pub small: Vec<u64>,
    pub medium: Vec<u64>,
    pub large: Vec<u64>,

    /// Values checked with the universal dispatcher only.
    pub verify: Vec<u64>,
}

impl Default for NValueSets {
    fn default() -> Self {
        let mut small: Vec<u64> = (5..50).step_by(10).collect();
        small.extend([100, 101, 1001]);
        Self {
            small,
            medium: vec![10_000, 100_000, 1_000_000, 1_000_001, 1_000_007],
            large: vec![10_000_000, 100_000_000, 1_000_000_000, 10_000_000_000],
            verify: vec![
                100_000_000_000_001,
                100_000_000_000_004,
                100_000_000_000_007,
            ],
        }
    }
}

impl NValueSets {
    /// Benchmark values: small, then medium, then large.
    pub fn benchmark_values(&self) -> Vec<BigUint> {
        self.small
            .iter()
            .chain(&self.medium)
            .chain(&self.large)
            .map(|&n| BigUint::from(n))
            .collect()
    }

    /// Values for the conjecture check.
    pub fn verify_values(&self) -> Vec<BigUint> {
        self.verify.iter().map(|&n| BigUint::from(n)).collect()
    }

    fn iter_all(&self) -> impl Iterator<Item = u64> + '_ {
        self.small
            .iter()
            .chain(&self.medium)
            .chain(&self.large)
            .chain(&self.verify)
            .copied()
    }
}

#[cfg(test)]
mod tests;
