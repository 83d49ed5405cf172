//! Integration tests for the benchmark harness.
//!
//! These tests register misbehaving strategies next to real ones and check
//! that every run still produces one record per (strategy, n).

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use erdos_benchmark::{verify_values, Benchmark, BenchmarkBuilder, BenchmarkConfig};
use erdos_config::{ConfigError, SearchConfig, StrategyKind};
use erdos_core::{is_valid, Solution};
use erdos_solver::{FnStrategy, ParametrizedSearch, Strategy, UniversalSolver};
use erdos_test::big;
use erdos_test::faulty::{
    always_error, always_panic, even_or_error, never_found, panics_on, wrong_answer,
};
use num_bigint::BigUint;

fn ns(values: &[u64]) -> Vec<BigUint> {
    values.iter().map(|&n| big(n)).collect()
}

fn quick(name: &str) -> BenchmarkConfig {
    BenchmarkConfig::new(name).with_repeat_count(2)
}

#[test]
fn test_erroring_strategy_yields_full_failed_series() {
    let benchmark = Benchmark::new(quick("Errors"))
        .with_strategy(Box::new(FnStrategy::new("Broken", always_error)));
    let results = benchmark.run(&ns(&[5, 7, 10]));

    let series = results.get("Broken").unwrap();
    assert_eq!(series.len(), 3);
    for (record, n) in series.records.iter().zip([5u64, 7, 10]) {
        assert_eq!(record.n, big(n));
        assert!(!record.success);
        assert_eq!(record.elapsed, Duration::ZERO);
        assert!(record.solution.is_none());
        assert!(record.error.as_deref().unwrap().contains("injected failure"));
    }
}

#[test]
fn test_panicking_strategy_does_not_abort_run() {
    let benchmark = Benchmark::new(quick("Panics"))
        .with_strategy(Box::new(FnStrategy::new("Panicky", always_panic)))
        .with_strategy(Box::new(ParametrizedSearch::default()));
    let results = benchmark.run(&ns(&[4, 5, 6]));

    let panicky = results.get("Panicky").unwrap();
    assert_eq!(panicky.len(), 3);
    assert_eq!(panicky.success_count(), 0);
    assert!(panicky
        .records
        .iter()
        .all(|r| r.error.as_deref().is_some_and(|e| e.starts_with("panicked"))));

    let parametrized = results.get("Parametrized").unwrap();
    assert_eq!(parametrized.len(), 3);
    assert_eq!(parametrized.success_count(), 3);
}

#[test]
fn test_panic_on_single_n_only_fails_that_record() {
    let benchmark = Benchmark::new(quick("Mixed")).with_strategy(Box::new(FnStrategy::new(
        "Flaky",
        panics_on(6, even_or_error),
    )));
    let results = benchmark.run(&ns(&[4, 6, 8, 9]));

    let flaky = results.get("Flaky").unwrap();
    let outcomes: Vec<bool> = flaky.records.iter().map(|r| r.success).collect();
    assert_eq!(outcomes, vec![true, false, true, false]);
    assert!(flaky.records[1].error.as_deref().unwrap().contains("panicked"));
    assert!(flaky.records[3].error.as_deref().unwrap().contains("odd n = 9"));
}

#[test]
fn test_self_reported_answers_are_not_trusted() {
    let benchmark = Benchmark::new(quick("Liars"))
        .with_strategy(Box::new(FnStrategy::new("Liar", wrong_answer)))
        .with_strategy(Box::new(FnStrategy::new("Nothing", never_found)));
    let results = benchmark.run(&ns(&[5, 7]));

    for record in &results.get("Liar").unwrap().records {
        assert!(!record.success);
        assert_eq!(record.solution, Some(Solution::new(1u32, 1u32, 1u32)));
        assert!(record.error.is_none());
    }
    for record in &results.get("Nothing").unwrap().records {
        assert!(!record.success);
        assert!(record.solution.is_none());
        assert!(record.error.is_none());
    }
}

#[test]
fn test_series_follow_registration_order() {
    let benchmark = BenchmarkBuilder::new("Order")
        .with_repeat_count(1)
        .with_strategy(Box::new(UniversalSolver::default()))
        .with_strategy(Box::new(FnStrategy::new("Nothing", never_found)))
        .with_strategy(Box::new(ParametrizedSearch::default()))
        .build();
    let results = benchmark.run(&ns(&[13, 5, 10]));

    assert_eq!(
        results.strategy_names(),
        vec!["Universal", "Nothing", "Parametrized"]
    );
    let tested: Vec<BigUint> = results
        .get("Universal")
        .unwrap()
        .records
        .iter()
        .map(|r| r.n.clone())
        .collect();
    assert_eq!(tested, ns(&[13, 5, 10]));
}

#[test]
fn test_empty_input_keeps_registered_series() {
    let benchmark =
        Benchmark::new(quick("Empty")).with_strategy(Box::new(ParametrizedSearch::default()));
    let results = benchmark.run(&[]);

    assert_eq!(results.strategy_names(), vec!["Parametrized"]);
    assert!(results.get("Parametrized").unwrap().is_empty());
    assert_eq!(results.record_count(), 0);
}

#[test]
fn test_warmup_repeat_and_capture_call_counts() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let counting = FnStrategy::new("Counting", move |n: &BigUint| {
        counter.fetch_add(1, Ordering::SeqCst);
        never_found(n)
    });

    let benchmark = BenchmarkBuilder::new("Counts")
        .with_warmup_count(2)
        .with_repeat_count(3)
        .with_strategy(Box::new(counting))
        .build();
    benchmark.run(&ns(&[5, 7]));

    // 2 warmups + 3 timed + 1 capture, per n.
    assert_eq!(calls.load(Ordering::SeqCst), 12);
}

#[test]
fn test_zero_repeat_count_still_times_once() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let counting = FnStrategy::new("Counting", move |n: &BigUint| {
        counter.fetch_add(1, Ordering::SeqCst);
        ParametrizedSearch::default().search(n)
    });

    let benchmark = BenchmarkBuilder::new("NoRepeats")
        .with_repeat_count(0)
        .with_strategy(Box::new(counting))
        .build();
    assert_eq!(benchmark.config().repeat_count(), 1);
    let results = benchmark.run(&ns(&[1001]));

    // 1 timed + 1 capture.
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    let record = &results.get("Counting").unwrap().records[0];
    assert!(record.success);
    assert!(record.error.is_none());
}

#[test]
fn test_error_during_warmup_skips_timing() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let failing = FnStrategy::new("FailsFast", move |n: &BigUint| {
        counter.fetch_add(1, Ordering::SeqCst);
        always_error(n)
    });

    let benchmark = BenchmarkBuilder::new("Warmup")
        .with_warmup_count(1)
        .with_repeat_count(5)
        .with_strategy(Box::new(failing))
        .build();
    let results = benchmark.run(&ns(&[5]));

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(results.get("FailsFast").unwrap().success_count(), 0);
}

#[test]
fn test_default_config_lineup() {
    let config = SearchConfig::default().with_repeat_count(1);
    let benchmark = Benchmark::from_search_config(&config);

    assert_eq!(
        benchmark.strategy_names(),
        vec!["Exhaustive", "Naive", "Fraction", "Parametrized", "Universal"]
    );
    assert_eq!(benchmark.config().repeat_count(), 1);
}

#[test]
fn test_repeated_strategy_is_rejected_by_config() {
    let config = SearchConfig::default()
        .with_repeat_count(1)
        .with_strategies([StrategyKind::Parametrized, StrategyKind::Parametrized]);

    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_repeated_strategy_names_keep_separate_series() {
    // Built without validation, so the lineup still holds the repeat.
    let config = SearchConfig::default()
        .with_repeat_count(1)
        .with_strategies([StrategyKind::Parametrized, StrategyKind::Parametrized]);
    let tested = ns(&[4, 6, 8]);
    let results = Benchmark::from_search_config(&config).run(&tested);

    assert_eq!(
        results.strategy_names(),
        vec!["Parametrized", "Parametrized #2"]
    );
    for series in results.series() {
        assert_eq!(series.len(), tested.len());
        let order: Vec<BigUint> = series.records.iter().map(|r| r.n.clone()).collect();
        assert_eq!(order, tested);
    }
    assert_eq!(results.record_count(), 2 * tested.len());
}

#[test]
fn test_same_named_custom_strategies_keep_separate_series() {
    let empty = UniversalSolver::new(vec![Box::new(FnStrategy::new("Nothing", never_found))]);
    let wide = UniversalSolver::new(vec![Box::new(ParametrizedSearch::default())]);
    let benchmark = BenchmarkBuilder::new("Twins")
        .with_repeat_count(1)
        .with_strategy(Box::new(empty))
        .with_strategy(Box::new(wide))
        .build();
    let results = benchmark.run(&ns(&[5, 7]));

    assert_eq!(results.get("Universal").unwrap().success_count(), 0);
    assert_eq!(results.get("Universal #2").unwrap().success_count(), 2);
    assert_eq!(results.record_count(), 4);
}

#[test]
fn test_reference_small_values_all_solved_by_universal() {
    let config = SearchConfig::default();
    let benchmark = Benchmark::new(quick("Small")).with_strategy(Box::new(
        UniversalSolver::from_config(&config),
    ));
    let small: Vec<BigUint> = config.n_values.small.iter().map(|&n| big(n)).collect();
    let results = benchmark.run(&small);

    let series = results.get("Universal").unwrap();
    assert_eq!(series.len(), small.len());
    assert_eq!(series.success_count(), small.len());
    for record in &series.records {
        assert!(is_valid(&record.n, record.solution.as_ref()));
    }
}

#[test]
fn test_verify_values_flags_failures() {
    let ns = ns(&[8, 9]);

    let good = verify_values(&UniversalSolver::default(), &ns);
    assert!(good.iter().all(|r| r.valid));

    let bad = verify_values(&FnStrategy::new("Broken", even_or_error), &ns);
    assert!(bad[0].valid);
    assert!(!bad[1].valid);
    assert!(bad[1].solution.is_none());
}
