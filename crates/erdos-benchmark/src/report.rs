//! Report generation for benchmark results.

use std::fmt::Write as _;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::result::BenchmarkResults;
use crate::verify::VerificationRecord;

/// CSV exporter for benchmark results.
///
/// One row per record: strategy, n, elapsed seconds, success flag, and the
/// solution components (empty when absent).
///
/// # Example
///
/// ```
/// use erdos_benchmark::{BenchmarkRecord, BenchmarkResults, CsvExporter};
/// use erdos_core::Solution;
/// use num_bigint::BigUint;
/// use std::time::Duration;
///
/// let mut results = BenchmarkResults::new("Test");
/// results.push(
///     "Naive",
///     BenchmarkRecord::measured(
///         BigUint::from(5u32),
///         Duration::from_millis(2),
///         Some(Solution::new(2u32, 4u32, 20u32)),
///     ),
/// );
///
/// let csv = CsvExporter::to_string(&results);
/// assert!(csv.starts_with("strategy,n,elapsed_secs,success,x,y,z,error\n"));
/// assert!(csv.contains("Naive,5,0.002000000,true,2,4,20,"));
/// ```
pub struct CsvExporter;

impl CsvExporter {
    /// Exports results to a CSV string.
    pub fn to_string(results: &BenchmarkResults) -> String {
        let mut output = String::new();

        let _ = writeln!(output, "strategy,n,elapsed_secs,success,x,y,z,error");

        for series in results.series() {
            for record in &series.records {
                let (x, y, z) = match &record.solution {
                    Some(s) => (s.x().to_string(), s.y().to_string(), s.z().to_string()),
                    None => Default::default(),
                };
                let _ = writeln!(
                    output,
                    "{},{},{:.9},{},{},{},{},{}",
                    csv_field(&series.strategy),
                    record.n,
                    record.elapsed_secs(),
                    record.success,
                    x,
                    y,
                    z,
                    csv_field(record.error.as_deref().unwrap_or("")),
                );
            }
        }

        output
    }

    /// Exports results to a CSV file.
    pub fn to_file(results: &BenchmarkResults, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, Self::to_string(results))
    }

    /// Writes results as CSV to a writer.
    pub fn write<W: Write>(results: &BenchmarkResults, mut writer: W) -> io::Result<()> {
        writer.write_all(Self::to_string(results).as_bytes())
    }
}

// Quotes a field containing a separator, quote or newline.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Markdown report generator.
///
/// # Example
///
/// ```
/// use erdos_benchmark::{BenchmarkResults, MarkdownReport};
///
/// let results = BenchmarkResults::new("Test");
/// let md = MarkdownReport::to_string(&results);
/// assert!(md.contains("# Benchmark: Test"));
/// assert!(md.contains("*No strategies registered.*"));
/// ```
pub struct MarkdownReport;

impl MarkdownReport {
    /// Generates a Markdown report: a summary table, then one table per strategy.
    pub fn to_string(results: &BenchmarkResults) -> String {
        let mut output = String::new();

        let _ = writeln!(output, "# Benchmark: {}", results.name);
        let _ = writeln!(output);

        if results.is_empty() {
            let _ = writeln!(output, "*No strategies registered.*");
            return output;
        }

        output.push_str(&Self::comparison(results));
        let _ = writeln!(output);

        for series in results.series() {
            let _ = writeln!(output, "## {}", series.strategy);
            let _ = writeln!(output);

            if series.is_empty() {
                let _ = writeln!(output, "*No records.*");
                let _ = writeln!(output);
                continue;
            }

            let _ = writeln!(output, "| n | Time (ms) | Solution | Valid |");
            let _ = writeln!(output, "|---|-----------|----------|-------|");
            for record in &series.records {
                let status = match &record.error {
                    Some(err) => format!("✗ ({})", err.replace('|', "\\|")),
                    None if record.success => "✓".to_string(),
                    None => "✗".to_string(),
                };
                let _ = writeln!(
                    output,
                    "| {} | {:.3} | {} | {} |",
                    record.n,
                    record.elapsed_secs() * 1000.0,
                    record.solution_label(),
                    status,
                );
            }
            let _ = writeln!(output);
        }

        output
    }

    /// Generates the per-strategy summary table.
    ///
    /// ```
    /// use erdos_benchmark::{BenchmarkRecord, BenchmarkResults, MarkdownReport};
    /// use num_bigint::BigUint;
    ///
    /// let mut results = BenchmarkResults::new("Test");
    /// results.push("Broken", BenchmarkRecord::failed(BigUint::from(7u32), "boom"));
    ///
    /// let table = MarkdownReport::comparison(&results);
    /// assert!(table.contains("## Comparison"));
    /// assert!(table.contains("| Broken | 0/1 | 0.0% |"));
    /// ```
    pub fn comparison(results: &BenchmarkResults) -> String {
        let mut output = String::new();

        let _ = writeln!(output, "## Comparison");
        let _ = writeln!(output);
        let _ = writeln!(
            output,
            "| Strategy | Solved | Rate | Total (ms) | Avg (ms) | Min (ms) | Max (ms) |"
        );
        let _ = writeln!(
            output,
            "|----------|--------|------|------------|----------|----------|----------|"
        );

        for series in results.series() {
            let _ = writeln!(
                output,
                "| {} | {}/{} | {:.1}% | {:.3} | {:.3} | {:.3} | {:.3} |",
                series.strategy,
                series.success_count(),
                series.len(),
                series.success_rate() * 100.0,
                series.total_elapsed().as_secs_f64() * 1000.0,
                series.avg_elapsed().as_secs_f64() * 1000.0,
                series.min_elapsed().as_secs_f64() * 1000.0,
                series.max_elapsed().as_secs_f64() * 1000.0,
            );
        }

        output
    }

    /// Generates a table for a conjecture check.
    pub fn verification(records: &[VerificationRecord]) -> String {
        let mut output = String::new();

        let _ = writeln!(output, "## Verification");
        let _ = writeln!(output);
        let _ = writeln!(output, "| n | Solution | Valid |");
        let _ = writeln!(output, "|---|----------|-------|");
        for record in records {
            let solution = record
                .solution
                .as_ref()
                .map_or_else(|| "-".to_string(), ToString::to_string);
            let mark = if record.valid { "✓" } else { "✗" };
            let _ = writeln!(output, "| {} | {} | {} |", record.n, solution, mark);
        }

        output
    }

    /// Writes a Markdown report to a file.
    pub fn to_file(results: &BenchmarkResults, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, Self::to_string(results))
    }

    /// Writes a Markdown report to a writer.
    pub fn write<W: Write>(results: &BenchmarkResults, mut writer: W) -> io::Result<()> {
        writer.write_all(Self::to_string(results).as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::BenchmarkRecord;
    use erdos_core::Solution;
    use num_bigint::BigUint;
    use std::time::Duration;

    fn sample() -> BenchmarkResults {
        let mut results = BenchmarkResults::new("Sample");
        results.push(
            "Parametrized",
            BenchmarkRecord::measured(
                BigUint::from(10u32),
                Duration::from_millis(1),
                Some(Solution::new(5u32, 10u32, 10u32)),
            ),
        );
        results.push(
            "Broken",
            BenchmarkRecord::failed(BigUint::from(10u32), "injected, with comma"),
        );
        results
    }

    #[test]
    fn test_csv_rows_follow_series_order() {
        let csv = CsvExporter::to_string(&sample());
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("Parametrized,10,"));
        assert!(lines[1].contains(",true,5,10,10,"));
        assert_eq!(
            lines[2],
            "Broken,10,0.000000000,false,,,,\"injected, with comma\""
        );
    }

    #[test]
    fn test_csv_write_matches_to_string() {
        let results = sample();
        let mut buffer = Vec::new();
        CsvExporter::write(&results, &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), CsvExporter::to_string(&results));
    }

    #[test]
    fn test_markdown_sections() {
        let md = MarkdownReport::to_string(&sample());

        assert!(md.contains("# Benchmark: Sample"));
        assert!(md.contains("## Comparison"));
        assert!(md.contains("## Parametrized"));
        assert!(md.contains("## Broken"));
        assert!(md.contains("| 10 | 1.000 | (5, 10, 10) | ✓ |"));
        assert!(md.contains("✗ (injected, with comma)"));
        assert!(md.contains("| Parametrized | 1/1 | 100.0% |"));
    }

    #[test]
    fn test_markdown_empty_series() {
        let mut results = BenchmarkResults::new("Empty");
        results.add_strategy("Naive");
        let md = MarkdownReport::to_string(&results);
        assert!(md.contains("## Naive"));
        assert!(md.contains("*No records.*"));
        assert!(md.contains("| Naive | 0/0 | 0.0% |"));
    }

    #[test]
    fn test_verification_table() {
        let records = vec![
            VerificationRecord {
                n: BigUint::from(4u32),
                solution: Some(Solution::new(2u32, 4u32, 4u32)),
                valid: true,
            },
            VerificationRecord {
                n: BigUint::from(7u32),
                solution: None,
                valid: false,
            },
        ];
        let md = MarkdownReport::verification(&records);
        assert!(md.contains("| 4 | (2, 4, 4) | ✓ |"));
        assert!(md.contains("| 7 | - | ✗ |"));
    }
}
