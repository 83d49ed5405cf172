//! Benchmarking harness for Erdős–Straus search strategies.
//!
//! This crate times a registry of strategies against a list of `n` values,
//! validates every captured answer, and exports the results.
//!
//! # Overview
//!
//! - Warmup calls, then best-of-`repeat_count` timing per (strategy, n)
//! - A failing or panicking strategy becomes a failed record, never an abort
//! - Per-strategy summary statistics
//! - Conjecture checks on large `n` via [`verify_values`]
//! - Export to CSV and Markdown
//!
//! Logging levels:
//! - **INFO**: `benchmark_start`, `n_start`, `record`, `benchmark_end`, `verify`
//! - **WARN**: Strategies that returned an error or panicked
//!
//! # Example
//!
//! ```
//! use erdos_benchmark::{Benchmark, BenchmarkConfig, MarkdownReport};
//! use erdos_solver::{BoundedPairSearch, UniversalSolver};
//! use num_bigint::BigUint;
//!
//! let benchmark = Benchmark::new(BenchmarkConfig::new("Small n").with_repeat_count(1))
//!     .with_strategy(Box::new(BoundedPairSearch::new(100)))
//!     .with_strategy(Box::new(UniversalSolver::default()));
//!
//! let ns: Vec<BigUint> = [5u32, 7, 10].into_iter().map(BigUint::from).collect();
//! let results = benchmark.run(&ns);
//!
//! assert_eq!(results.strategy_names(), vec!["Naive", "Universal"]);
//! assert_eq!(results.get("Universal").unwrap().success_count(), 3);
//! println!("{}", MarkdownReport::to_string(&results));
//! ```

mod config;
mod report;
mod result;
mod runner;
mod verify;

pub use config::BenchmarkConfig;
pub use report::{CsvExporter, MarkdownReport};
pub use result::{BenchmarkRecord, BenchmarkResults, StrategySeries};
pub use runner::{Benchmark, BenchmarkBuilder};
pub use verify::{verify_values, VerificationRecord};
