//! Benchmark entry points that hide the harness wiring.

use erdos_benchmark::{
    verify_values, Benchmark, BenchmarkConfig, BenchmarkResults, CsvExporter, MarkdownReport,
    VerificationRecord,
};
use erdos_config::{ConfigError, SearchConfig};
use erdos_solver::UniversalSolver;
use num_bigint::BigUint;
use tracing::info;

/// Benchmark results plus the conjecture check over `n_values.verify`.
#[derive(Debug, Clone)]
pub struct ReferenceRun {
    pub results: BenchmarkResults,
    pub verification: Vec<VerificationRecord>,
}

/// Runs the configured strategy lineup over `ns`.
///
/// The config is validated first. When `benchmark.csv_output` or
/// `benchmark.markdown_output` is set, the report is written there.
pub fn run_benchmark(
    config: &SearchConfig,
    ns: &[BigUint],
) -> Result<BenchmarkResults, ConfigError> {
    #[cfg(feature = "console")]
    erdos_console::init();

    config.validate()?;

    let benchmark = Benchmark::from_search_config(config);
    let results = benchmark.run(ns);
    export(benchmark.config(), &results)?;
    Ok(results)
}

/// Runs the lineup over small, medium and large `n`, then checks the
/// `verify` values with the universal dispatcher.
pub fn run_reference_benchmark(config: &SearchConfig) -> Result<ReferenceRun, ConfigError> {
    let results = run_benchmark(config, &config.n_values.benchmark_values())?;

    let solver = UniversalSolver::from_config(config);
    let verification = verify_values(&solver, &config.n_values.verify_values());

    Ok(ReferenceRun {
        results,
        verification,
    })
}

fn export(config: &BenchmarkConfig, results: &BenchmarkResults) -> Result<(), ConfigError> {
    if let Some(path) = config.csv_output_path() {
        CsvExporter::to_file(results, path)?;
        info!(event = "export", format = "csv", path);
    }
    if let Some(path) = config.markdown_output_path() {
        MarkdownReport::to_file(results, path)?;
        info!(event = "export", format = "markdown", path);
    }
    Ok(())
}
