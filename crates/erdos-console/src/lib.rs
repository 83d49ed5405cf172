//! Colorful console output for benchmark runs.
//!
//! Provides a custom `tracing` layer that formats harness events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Benchmark lifecycle, one line per record, conjecture checks,
//!   report exports
//! - **WARN**: Strategies that errored or panicked, dispatcher candidates that
//!   failed validation
//! - **DEBUG**: Per-strategy hits and misses (not rendered by this layer)

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static RUN_START_NANOS: AtomicU64 = AtomicU64::new(0);

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initializes console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the banner and installs the layer behind an `EnvFilter`.
/// `RUST_LOG` sets the base filter (default `erdos_benchmark=info`); the
/// directives from [`DEFAULT_DIRECTIVES`] are always added on top.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let _ = tracing_subscriber::registry()
            .with(default_filter())
            .with(BenchmarkConsoleLayer)
            .try_init();
    });
}

/// Per-target directives added on top of the base filter.
pub const DEFAULT_DIRECTIVES: &[&str] = &["erdos_straus=info", "erdos_solver=warn"];

fn default_filter() -> EnvFilter {
    let mut builder = EnvFilter::builder();
    if let Ok(directive) = "erdos_benchmark=info".parse::<Directive>() {
        builder = builder.with_default_directive(directive);
    }
    let mut filter = builder.from_env_lossy();
    for directive in DEFAULT_DIRECTIVES {
        if let Ok(directive) = directive.parse::<Directive>() {
            filter = filter.add_directive(directive);
        }
    }
    filter
}

fn mark_run_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    RUN_START_NANOS.store(nanos, Ordering::Relaxed);
}

fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = RUN_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

fn print_banner() {
    let banner = r#"
  4     1   1   1
 --- = - + - + -
  n     x   y   z
"#;

    let version_line = format!("  Erdős–Straus benchmark v{}\n", VERSION);

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats harness events with colors.
pub struct BenchmarkConsoleLayer;

impl<S: Subscriber> Layer<S> for BenchmarkConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("erdos_") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    name: Option<String>,
    strategy: Option<String>,
    n: Option<String>,
    solution: Option<String>,
    error: Option<String>,
    via: Option<String>,
    format: Option<String>,
    path: Option<String>,
    success: Option<bool>,
    valid: Option<bool>,
    elapsed_us: Option<u64>,
    duration_ms: Option<u64>,
    strategy_count: Option<u64>,
    n_count: Option<u64>,
    repeat_count: Option<u64>,
    records: Option<u64>,
    successes: Option<u64>,
}

impl EventVisitor {
    fn set_text(&mut self, field: &Field, value: String) {
        match field.name() {
            "event" => self.event = Some(value),
            "name" => self.name = Some(value),
            "strategy" => self.strategy = Some(value),
            "n" => self.n = Some(value),
            "solution" => self.solution = Some(value),
            "error" => self.error = Some(value),
            "via" => self.via = Some(value),
            "format" => self.format = Some(value),
            "path" => self.path = Some(value),
            _ => {}
        }
    }
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.set_text(field, s.trim_matches('"').to_string());
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.set_text(field, value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "elapsed_us" => self.elapsed_us = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "strategy_count" => self.strategy_count = Some(value),
            "n_count" => self.n_count = Some(value),
            "repeat_count" => self.repeat_count = Some(value),
            "records" => self.records = Some(value),
            "successes" => self.successes = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        if let Ok(value) = u64::try_from(value) {
            self.record_u64(field, value);
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        match field.name() {
            "success" => self.success = Some(value),
            "valid" => self.valid = Some(value),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    match v.event.as_deref().unwrap_or("") {
        "benchmark_start" => format_benchmark_start(v),
        "n_start" => format_n_start(v),
        "record" => format_record(v),
        "benchmark_end" => format_benchmark_end(v),
        "verify" => format_verify(v),
        "export" => format_export(v),
        "strategy_failed" | "verify_failed" if level <= Level::WARN => format_failure(v),
        "candidate_rejected" if level <= Level::WARN => format_rejected(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_benchmark_start(v: &EventVisitor) -> String {
    mark_run_start();
    let name = v.name.as_deref().unwrap_or("Benchmark");

    format!(
        "{} {} {} │ {} strategies │ {} values of n │ best of {}",
        format_elapsed(),
        "▶".bright_green().bold(),
        name.white().bold(),
        v.strategy_count.unwrap_or(0).bright_yellow(),
        v.n_count.unwrap_or(0).bright_yellow(),
        v.repeat_count.unwrap_or(0).bright_yellow(),
    )
}

fn format_n_start(v: &EventVisitor) -> String {
    let n = v.n.as_deref().unwrap_or("?");
    format!(
        "{} {} n = {}",
        format_elapsed(),
        "▸".bright_blue(),
        format_n(n).bright_white().bold()
    )
}

fn format_record(v: &EventVisitor) -> String {
    let strategy = v.strategy.as_deref().unwrap_or("Unknown");
    let solution = v.solution.as_deref().unwrap_or("-");
    let icon = if v.success.unwrap_or(false) {
        "✓".bright_green().to_string()
    } else {
        "✗".bright_red().to_string()
    };

    format!(
        "{}   {:<14} {} {} ({})",
        format_elapsed(),
        strategy.cyan(),
        solution,
        icon,
        format_duration_us(v.elapsed_us.unwrap_or(0)).yellow()
    )
}

fn format_benchmark_end(v: &EventVisitor) -> String {
    let records = v.records.unwrap_or(0);
    let successes = v.successes.unwrap_or(0);
    let ratio = format!("{}/{}", successes, records);
    let ratio = if successes == records {
        ratio.bright_green().bold().to_string()
    } else {
        ratio.bright_yellow().bold().to_string()
    };

    format!(
        "{} {} Benchmark complete │ {} validated │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        ratio,
        format_duration_us(v.duration_ms.unwrap_or(0).saturating_mul(1000)).yellow()
    )
}

fn format_verify(v: &EventVisitor) -> String {
    let n = v.n.as_deref().unwrap_or("?");
    let solution = v.solution.as_deref().unwrap_or("-");
    let icon = if v.valid.unwrap_or(false) {
        "✓".bright_green().to_string()
    } else {
        "✗".bright_red().to_string()
    };

    format!(
        "{} {} 4/{} = {} {}",
        format_elapsed(),
        "◆".bright_magenta(),
        format_n(n),
        solution,
        icon
    )
}

fn format_failure(v: &EventVisitor) -> String {
    let strategy = v.strategy.as_deref().unwrap_or("Unknown");
    let n = v.n.as_deref().unwrap_or("?");
    let error = v.error.as_deref().unwrap_or("unknown error");

    format!(
        "{} {} {} failed on n = {}: {}",
        format_elapsed(),
        "!".bright_red().bold(),
        strategy.cyan(),
        format_n(n),
        error.red()
    )
}

fn format_export(v: &EventVisitor) -> String {
    let format = v.format.as_deref().unwrap_or("report");
    let path = v.path.as_deref().unwrap_or("?");

    format!(
        "{} {} {} report written to {}",
        format_elapsed(),
        "↓".bright_cyan(),
        format.white().bold(),
        path.underline()
    )
}

fn format_rejected(v: &EventVisitor) -> String {
    let via = v.via.as_deref().unwrap_or("Unknown");
    let n = v.n.as_deref().unwrap_or("?");
    let solution = v.solution.as_deref().unwrap_or("-");

    format!(
        "{} {} {} proposed {} for n = {}, rejected",
        format_elapsed(),
        "!".bright_yellow().bold(),
        via.cyan(),
        solution,
        format_n(n)
    )
}

// Groups digits when `n` fits in a u64; larger values are printed as-is.
fn format_n(n: &str) -> String {
    match n.parse::<u64>() {
        Ok(value) => value.to_formatted_string(&Locale::en),
        Err(_) => n.to_string(),
    }
}

fn format_duration_us(us: u64) -> String {
    if us < 1000 {
        format!("{}µs", us)
    } else if us < 1_000_000 {
        format!("{:.2}ms", us as f64 / 1000.0)
    } else if us < 60_000_000 {
        format!("{:.2}s", us as f64 / 1_000_000.0)
    } else {
        let secs = us / 1_000_000;
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_n_groups_digits() {
        assert_eq!(format_n("1000007"), "1,000,007");
        assert_eq!(format_n("45"), "45");
        let huge = "123456789012345678901234567890";
        assert_eq!(format_n(huge), huge);
    }

    #[test]
    fn test_format_duration_us() {
        assert_eq!(format_duration_us(250), "250µs");
        assert_eq!(format_duration_us(1_500), "1.50ms");
        assert_eq!(format_duration_us(2_250_000), "2.25s");
        assert_eq!(format_duration_us(125_000_000), "2m 5s");
    }

    #[test]
    fn test_unknown_event_is_silent() {
        let visitor = EventVisitor {
            event: Some("phase_start".to_string()),
            ..EventVisitor::default()
        };
        assert!(format_event(&visitor, Level::INFO).is_empty());
    }

    #[test]
    fn test_record_line_contains_solution() {
        let visitor = EventVisitor {
            event: Some("record".to_string()),
            strategy: Some("Naive".to_string()),
            solution: Some("(2, 4, 20)".to_string()),
            success: Some(true),
            elapsed_us: Some(42),
            ..EventVisitor::default()
        };
        let line = format_event(&visitor, Level::INFO);
        assert!(line.contains("(2, 4, 20)"));
        assert!(line.contains("42µs"));
    }

    #[test]
    fn test_failures_render_at_warn_only() {
        let visitor = EventVisitor {
            event: Some("strategy_failed".to_string()),
            strategy: Some("Broken".to_string()),
            n: Some("7".to_string()),
            error: Some("boom".to_string()),
            ..EventVisitor::default()
        };
        assert!(format_event(&visitor, Level::WARN).contains("boom"));
        assert!(format_event(&visitor, Level::DEBUG).is_empty());
    }

    #[test]
    fn test_export_line_names_format_and_path() {
        let visitor = EventVisitor {
            event: Some("export".to_string()),
            format: Some("csv".to_string()),
            path: Some("out/results.csv".to_string()),
            ..EventVisitor::default()
        };
        let line = format_event(&visitor, Level::INFO);
        assert!(line.contains("csv"));
        assert!(line.contains("out/results.csv"));
    }

    #[test]
    fn test_rejected_candidate_renders_at_warn() {
        let visitor = EventVisitor {
            event: Some("candidate_rejected".to_string()),
            strategy: Some("Universal".to_string()),
            via: Some("Liar".to_string()),
            n: Some("1000003".to_string()),
            solution: Some("(1, 1, 1)".to_string()),
            ..EventVisitor::default()
        };
        let line = format_event(&visitor, Level::WARN);
        assert!(line.contains("Liar"));
        assert!(line.contains("(1, 1, 1)"));
        assert!(line.contains("1,000,003"));
        assert!(format_event(&visitor, Level::INFO).is_empty());
    }

    #[test]
    fn test_default_filter_covers_export_and_dispatch_targets() {
        let rendered = default_filter().to_string().to_lowercase();
        assert!(rendered.contains("erdos_straus=info"));
        assert!(rendered.contains("erdos_solver=warn"));
    }
}
