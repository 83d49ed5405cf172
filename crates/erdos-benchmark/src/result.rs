//! Benchmark result types.

use std::time::Duration;

use erdos_core::{is_valid, Solution};
use num_bigint::BigUint;

/// Outcome of one (strategy, n) pair.
///
/// `success` is set only when the validator confirms the captured solution;
/// a strategy's own answer is never trusted.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkRecord {
    /// The `n` that was searched.
    pub n: BigUint,
    /// Best elapsed wall-clock time across the timed repeats.
    pub elapsed: Duration,
    /// Whether the captured solution validates.
    pub success: bool,
    /// The captured solution, if any.
    pub solution: Option<Solution>,
    /// Error or panic message when the strategy failed outright.
    pub error: Option<String>,
}

impl BenchmarkRecord {
    /// Creates a record for a completed search, validating `solution` against `n`.
    ///
    /// # Example
    ///
    /// ```
    /// use erdos_benchmark::BenchmarkRecord;
    /// use erdos_core::Solution;
    /// use num_bigint::BigUint;
    /// use std::time::Duration;
    ///
    /// let n = BigUint::from(5u32);
    /// let good = BenchmarkRecord::measured(
    ///     n.clone(),
    ///     Duration::from_micros(40),
    ///     Some(Solution::new(2u32, 4u32, 20u32)),
    /// );
    /// assert!(good.success);
    ///
    /// let bad = BenchmarkRecord::measured(n, Duration::ZERO, Some(Solution::new(1u32, 1u32, 1u32)));
    /// assert!(!bad.success);
    /// ```
    pub fn measured(n: BigUint, elapsed: Duration, solution: Option<Solution>) -> Self {
        let success = is_valid(&n, solution.as_ref());
        Self {
            n,
            elapsed,
            success,
            solution,
            error: None,
        }
    }

    /// Creates a failed record for a strategy that errored or panicked.
    pub fn failed(n: BigUint, message: impl Into<String>) -> Self {
        Self {
            n,
            elapsed: Duration::ZERO,
            success: false,
            solution: None,
            error: Some(message.into()),
        }
    }

    /// Elapsed time in seconds.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Solution as `(x, y, z)`, or `-` when absent.
    pub fn solution_label(&self) -> String {
        match &self.solution {
            Some(solution) => solution.to_string(),
            None => "-".to_string(),
        }
    }
}

/// Ordered records of one strategy, one per tested `n`.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategySeries {
    /// Strategy name.
    pub strategy: String,
    /// Records in the order `n` values were tested.
    pub records: Vec<BenchmarkRecord>,
}

impl StrategySeries {
    pub fn new(strategy: impl Into<String>) -> Self {
        Self {
            strategy: strategy.into(),
            records: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of validated records.
    pub fn success_count(&self) -> usize {
        self.records.iter().filter(|r| r.success).count()
    }

    /// Fraction of validated records, `0.0` when empty.
    pub fn success_rate(&self) -> f64 {
        if self.records.is_empty() {
            0.0
        } else {
            self.success_count() as f64 / self.records.len() as f64
        }
    }

    /// Sum of elapsed times.
    pub fn total_elapsed(&self) -> Duration {
        self.records.iter().map(|r| r.elapsed).sum()
    }

    /// Average elapsed time.
    ///
    /// # Example
    ///
    /// ```
    /// use erdos_benchmark::{BenchmarkRecord, StrategySeries};
    /// use num_bigint::BigUint;
    /// use std::time::Duration;
    ///
    /// let mut series = StrategySeries::new("Naive");
    /// series.records.push(BenchmarkRecord::measured(BigUint::from(5u32), Duration::from_millis(10), None));
    /// series.records.push(BenchmarkRecord::measured(BigUint::from(7u32), Duration::from_millis(30), None));
    ///
    /// assert_eq!(series.avg_elapsed(), Duration::from_millis(20));
    /// assert_eq!(series.success_count(), 0);
    /// ```
    pub fn avg_elapsed(&self) -> Duration {
        let total = self.total_elapsed();
        match u32::try_from(self.records.len()) {
            Ok(0) => Duration::ZERO,
            Ok(len) => total / len,
            Err(_) => Duration::from_secs_f64(total.as_secs_f64() / self.records.len() as f64),
        }
    }

    pub fn min_elapsed(&self) -> Duration {
        self.records
            .iter()
            .map(|r| r.elapsed)
            .min()
            .unwrap_or(Duration::ZERO)
    }

    pub fn max_elapsed(&self) -> Duration {
        self.records
            .iter()
            .map(|r| r.elapsed)
            .max()
            .unwrap_or(Duration::ZERO)
    }
}

/// Strategy name → ordered records.
///
/// Series keep the order in which strategies were first added; records keep
/// the order of the tested `n` values.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkResults {
    /// Benchmark name.
    pub name: String,
    series: Vec<StrategySeries>,
}

impl BenchmarkResults {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            series: Vec::new(),
        }
    }

    /// Ensures a (possibly empty) series exists for `strategy`.
    pub fn add_strategy(&mut self, strategy: &str) {
        if self.get(strategy).is_none() {
            self.series.push(StrategySeries::new(strategy));
        }
    }

    /// Appends a record to the series for `strategy`, creating it if needed.
    ///
    /// # Example
    ///
    /// ```
    /// use erdos_benchmark::{BenchmarkRecord, BenchmarkResults};
    /// use num_bigint::BigUint;
    ///
    /// let mut results = BenchmarkResults::new("Test");
    /// results.push("Naive", BenchmarkRecord::failed(BigUint::from(5u32), "boom"));
    /// results.push("Fraction", BenchmarkRecord::failed(BigUint::from(5u32), "boom"));
    /// results.push("Naive", BenchmarkRecord::failed(BigUint::from(7u32), "boom"));
    ///
    /// assert_eq!(results.strategy_names(), vec!["Naive", "Fraction"]);
    /// assert_eq!(results.get("Naive").unwrap().len(), 2);
    /// ```
    pub fn push(&mut self, strategy: &str, record: BenchmarkRecord) {
        match self.series.iter_mut().find(|s| s.strategy == strategy) {
            Some(series) => series.records.push(record),
            None => {
                let mut series = StrategySeries::new(strategy);
                series.records.push(record);
                self.series.push(series);
            }
        }
    }

    pub fn get(&self, strategy: &str) -> Option<&StrategySeries> {
        self.series.iter().find(|s| s.strategy == strategy)
    }

    pub fn series(&self) -> &[StrategySeries] {
        &self.series
    }

    pub fn strategy_names(&self) -> Vec<&str> {
        self.series.iter().map(|s| s.strategy.as_str()).collect()
    }

    /// Number of records across every series.
    pub fn record_count(&self) -> usize {
        self.series.iter().map(StrategySeries::len).sum()
    }

    /// Number of validated records across every series.
    pub fn success_count(&self) -> usize {
        self.series.iter().map(StrategySeries::success_count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}
