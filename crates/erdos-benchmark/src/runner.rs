//! Benchmark runner.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};

use erdos_config::SearchConfig;
use erdos_core::Solution;
use erdos_solver::{Strategy, StrategyBuilder};
use num_bigint::BigUint;
use tracing::{debug, info, warn};

use crate::config::BenchmarkConfig;
use crate::result::{BenchmarkRecord, BenchmarkResults};

/// Times an ordered registry of strategies over an ordered list of `n`.
///
/// For every `n`, each strategy in registration order gets `warmup_count`
/// untimed calls, then `repeat_count` timed calls (the minimum is kept), then
/// one more call whose answer is validated and recorded. An error or panic at
/// any point turns the pair into a failed record; the run always continues, so
/// every series ends up with one record per `n`.
///
/// Series are keyed by strategy name. A name registered more than once gets a
/// `#2`, `#3`, ... suffix on its later series, so repeats never share records.
///
/// # Example
///
/// ```
/// use erdos_benchmark::{Benchmark, BenchmarkConfig};
/// use erdos_solver::ParametrizedSearch;
/// use num_bigint::BigUint;
///
/// let benchmark = Benchmark::new(BenchmarkConfig::new("Even n").with_repeat_count(2))
///     .with_strategy(Box::new(ParametrizedSearch::default()));
///
/// let ns: Vec<BigUint> = [4u32, 6, 8].into_iter().map(BigUint::from).collect();
/// let results = benchmark.run(&ns);
///
/// let series = results.get("Parametrized").unwrap();
/// assert_eq!(series.len(), 3);
/// assert_eq!(series.success_count(), 3);
/// ```
#[derive(Debug)]
pub struct Benchmark {
    config: BenchmarkConfig,
    strategies: Vec<Box<dyn Strategy>>,
}

impl Benchmark {
    /// Creates a benchmark with an empty strategy registry.
    pub fn new(config: BenchmarkConfig) -> Self {
        Self {
            config,
            strategies: Vec::new(),
        }
    }

    /// Creates a benchmark with the settings and lineup from `config`.
    pub fn from_search_config(config: &SearchConfig) -> Self {
        Self {
            config: BenchmarkConfig::from_settings(&config.benchmark),
            strategies: StrategyBuilder::build_lineup(config),
        }
    }

    /// Registers a strategy after the ones already present.
    pub fn with_strategy(mut self, strategy: Box<dyn Strategy>) -> Self {
        self.strategies.push(strategy);
        self
    }

    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Series labels in run order: strategy names, with repeats suffixed.
    ///
    /// ```
    /// use erdos_benchmark::BenchmarkBuilder;
    /// use erdos_solver::{ParametrizedSearch, UniversalSolver};
    ///
    /// let benchmark = BenchmarkBuilder::new("Repeats")
    ///     .with_strategy(Box::new(UniversalSolver::default()))
    ///     .with_strategy(Box::new(ParametrizedSearch::default()))
    ///     .with_strategy(Box::new(UniversalSolver::default()))
    ///     .build();
    ///
    /// assert_eq!(
    ///     benchmark.strategy_names(),
    ///     vec!["Universal", "Parametrized", "Universal #2"]
    /// );
    /// ```
    pub fn strategy_names(&self) -> Vec<String> {
        let mut labels: Vec<String> = Vec::with_capacity(self.strategies.len());
        for strategy in &self.strategies {
            let name = strategy.name();
            let mut label = name.to_string();
            let mut copy = 1;
            while labels.contains(&label) {
                copy += 1;
                label = format!("{} #{}", name, copy);
            }
            labels.push(label);
        }
        labels
    }

    /// Runs every registered strategy over `ns`.
    pub fn run(&self, ns: &[BigUint]) -> BenchmarkResults {
        let started = Instant::now();
        let labels = self.strategy_names();
        let mut results = BenchmarkResults::new(self.config.name());
        for label in &labels {
            results.add_strategy(label);
        }

        info!(
            event = "benchmark_start",
            name = self.config.name(),
            strategy_count = self.strategies.len() as u64,
            n_count = ns.len() as u64,
            repeat_count = self.config.repeat_count() as u64,
        );

        for n in ns {
            info!(event = "n_start", n = %n);
            for (strategy, label) in self.strategies.iter().zip(&labels) {
                let record = self.measure(strategy.as_ref(), n);
                info!(
                    event = "record",
                    strategy = label.as_str(),
                    n = %n,
                    solution = %record.solution_label(),
                    success = record.success,
                    elapsed_us = record.elapsed.as_micros() as u64,
                );
                results.push(label, record);
            }
        }

        info!(
            event = "benchmark_end",
            name = self.config.name(),
            records = results.record_count() as u64,
            successes = results.success_count() as u64,
            duration_ms = started.elapsed().as_millis() as u64,
        );
        results
    }

    /// Measures one (strategy, n) pair.
    pub fn measure(&self, strategy: &dyn Strategy, n: &BigUint) -> BenchmarkRecord {
        match self.try_measure(strategy, n) {
            Ok((elapsed, solution)) => BenchmarkRecord::measured(n.clone(), elapsed, solution),
            Err(message) => {
                warn!(
                    event = "strategy_failed",
                    strategy = strategy.name(),
                    n = %n,
                    error = %message,
                );
                BenchmarkRecord::failed(n.clone(), message)
            }
        }
    }

    fn try_measure(
        &self,
        strategy: &dyn Strategy,
        n: &BigUint,
    ) -> Result<(Duration, Option<Solution>), String> {
        for _ in 0..self.config.warmup_count() {
            guarded_search(strategy, n)?;
        }

        // repeat_count >= 1, so `best` is always overwritten.
        let mut best = Duration::MAX;
        for _ in 0..self.config.repeat_count() {
            let start = Instant::now();
            guarded_search(strategy, n)?;
            best = best.min(start.elapsed());
        }

        let solution = guarded_search(strategy, n)?;
        debug!(strategy = strategy.name(), n = %n, "captured");
        Ok((best, solution))
    }
}

// Runs one search, folding both `Err` and panics into a message.
fn guarded_search(strategy: &dyn Strategy, n: &BigUint) -> Result<Option<Solution>, String> {
    match panic::catch_unwind(AssertUnwindSafe(|| strategy.search(n))) {
        Ok(Ok(found)) => Ok(found),
        Ok(Err(err)) => Err(err.to_string()),
        Err(payload) => Err(format!("panicked: {}", panic_message(payload.as_ref()))),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        *s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "unknown panic payload"
    }
}

/// Builder for creating benchmarks with a fluent API.
///
/// ```
/// use erdos_benchmark::BenchmarkBuilder;
/// use erdos_solver::{FractionDecompositionSearch, ParametrizedSearch};
///
/// let benchmark = BenchmarkBuilder::new("Lineup")
///     .with_repeat_count(1)
///     .with_strategy(Box::new(ParametrizedSearch::default()))
///     .with_strategy(Box::new(FractionDecompositionSearch::default()))
///     .build();
///
/// assert_eq!(benchmark.strategy_names(), vec!["Parametrized", "Fraction"]);
/// ```
#[derive(Debug)]
pub struct BenchmarkBuilder {
    config: BenchmarkConfig,
    strategies: Vec<Box<dyn Strategy>>,
}

impl BenchmarkBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            config: BenchmarkConfig::new(name),
            strategies: Vec::new(),
        }
    }

    pub fn with_warmup_count(mut self, count: usize) -> Self {
        self.config = self.config.with_warmup_count(count);
        self
    }

    pub fn with_repeat_count(mut self, count: usize) -> Self {
        self.config = self.config.with_repeat_count(count);
        self
    }

    pub fn with_strategy(mut self, strategy: Box<dyn Strategy>) -> Self {
        self.strategies.push(strategy);
        self
    }

    pub fn build(self) -> Benchmark {
        Benchmark {
            config: self.config,
            strategies: self.strategies,
        }
    }
}
