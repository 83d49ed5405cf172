//! Erdős–Straus - unit fraction decompositions of `4/n`
//!
//! Search strategies for `4/n = 1/x + 1/y + 1/z`, an exact validator, and a
//! benchmark harness that compares the strategies over ranges of `n`.
//!
//! # Example
//!
//! ```rust
//! use erdos_straus::prelude::*;
//!
//! let n = BigUint::from(7u32);
//! let solution = UniversalSolver::default().search(&n).unwrap().unwrap();
//! assert!(is_valid(&n, Some(&solution)));
//! ```

// Core types
pub use erdos_core::{arith, is_valid, is_valid_triple, BigUint, SearchError, SearchResult, Solution};

// Strategies
pub use erdos_solver::{
    BoundedPairSearch, ExhaustiveSearch, FnStrategy, FractionDecompositionSearch, MonteCarloSearch,
    ParametrizedSearch, PrimeFactorSearch, Strategy, StrategyBuilder, UniversalSolver,
};

// Configuration
pub use erdos_config::{ConfigError, SearchConfig, StrategyKind};

// Benchmarking and reports
pub use erdos_benchmark::{
    verify_values, Benchmark, BenchmarkBuilder, BenchmarkConfig, BenchmarkRecord,
    BenchmarkResults, CsvExporter, MarkdownReport, StrategySeries, VerificationRecord,
};

mod run;
pub use run::{run_benchmark, run_reference_benchmark, ReferenceRun};

pub mod prelude {
    pub use super::{is_valid, BigUint, SearchError, Solution};
    pub use super::{Strategy, StrategyBuilder, UniversalSolver};
    pub use super::{SearchConfig, StrategyKind};
    pub use super::{run_benchmark, run_reference_benchmark, BenchmarkResults};
}
