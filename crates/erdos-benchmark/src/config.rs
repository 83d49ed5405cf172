//! Benchmark configuration.

use erdos_config::BenchmarkSettings;

/// Configuration for a benchmark run.
///
/// Controls warmup calls, timed repeats, and optional output paths.
///
/// # Example
///
/// ```
/// use erdos_benchmark::BenchmarkConfig;
///
/// let config = BenchmarkConfig::new("Small n")
///     .with_warmup_count(1)
///     .with_repeat_count(5);
///
/// assert_eq!(config.name(), "Small n");
/// assert_eq!(config.warmup_count(), 1);
/// assert_eq!(config.repeat_count(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    name: String,
    warmup_count: usize,
    repeat_count: usize,
    csv_output_path: Option<String>,
    markdown_output_path: Option<String>,
}

impl BenchmarkConfig {
    /// Creates a new benchmark configuration with the given name.
    ///
    /// Defaults:
    /// - warmup_count: 0
    /// - repeat_count: 10
    ///
    /// # Example
    ///
    /// ```
    /// use erdos_benchmark::BenchmarkConfig;
    ///
    /// let config = BenchmarkConfig::new("Test");
    /// assert_eq!(config.warmup_count(), 0);
    /// assert_eq!(config.repeat_count(), 10);
    /// ```
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            warmup_count: 0,
            repeat_count: 10,
            csv_output_path: None,
            markdown_output_path: None,
        }
    }

    /// Builds a configuration from the `[benchmark]` section of a search config.
    ///
    /// # Example
    ///
    /// ```
    /// use erdos_benchmark::BenchmarkConfig;
    /// use erdos_config::SearchConfig;
    ///
    /// let search = SearchConfig::new().with_repeat_count(3);
    /// let config = BenchmarkConfig::from_settings(&search.benchmark);
    /// assert_eq!(config.repeat_count(), 3);
    /// assert_eq!(config.name(), "Erdős–Straus");
    /// ```
    pub fn from_settings(settings: &BenchmarkSettings) -> Self {
        Self {
            name: settings.name.clone(),
            warmup_count: settings.warmup_count,
            repeat_count: settings.repeat_count.max(1),
            csv_output_path: settings.csv_output.clone(),
            markdown_output_path: settings.markdown_output.clone(),
        }
    }

    /// Sets the number of untimed calls per (strategy, n).
    pub fn with_warmup_count(mut self, count: usize) -> Self {
        self.warmup_count = count;
        self
    }

    /// Sets the number of timed calls per (strategy, n), at least 1.
    ///
    /// ```
    /// use erdos_benchmark::BenchmarkConfig;
    ///
    /// assert_eq!(BenchmarkConfig::new("Test").with_repeat_count(0).repeat_count(), 1);
    /// ```
    pub fn with_repeat_count(mut self, count: usize) -> Self {
        self.repeat_count = count.max(1);
        self
    }

    /// Sets the output path for CSV export.
    ///
    /// ```
    /// use erdos_benchmark::BenchmarkConfig;
    ///
    /// let config = BenchmarkConfig::new("Test").with_csv_output("results.csv");
    /// assert_eq!(config.csv_output_path(), Some("results.csv"));
    /// ```
    pub fn with_csv_output(mut self, path: impl Into<String>) -> Self {
        self.csv_output_path = Some(path.into());
        self
    }

    /// Sets the output path for the Markdown report.
    pub fn with_markdown_output(mut self, path: impl Into<String>) -> Self {
        self.markdown_output_path = Some(path.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn warmup_count(&self) -> usize {
        self.warmup_count
    }

    pub fn repeat_count(&self) -> usize {
        self.repeat_count
    }

    pub fn csv_output_path(&self) -> Option<&str> {
        self.csv_output_path.as_deref()
    }

    pub fn markdown_output_path(&self) -> Option<&str> {
        self.markdown_output_path.as_deref()
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self::new("Benchmark")
    }
}
