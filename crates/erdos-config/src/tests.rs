//! Tests for search configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        random_seed = 42

        [exhaustive]
        max_range = 30

        [parametrized]
        max_y = 250
        x_margin = 10

        [benchmark]
        name = "Small n"
        repeat_count = 5
        strategies = ["naive", "prime_factor", "monte_carlo"]

        [n_values]
        small = [5, 7]
        medium = []
        large = []
    "#;

    let config = SearchConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.exhaustive.max_range, 30);
    assert_eq!(config.parametrized.max_y, 250);
    assert_eq!(config.parametrized.x_margin, 10);
    assert_eq!(config.benchmark.name, "Small n");
    assert_eq!(config.benchmark.repeat_count, 5);
    assert_eq!(
        config.benchmark.strategies,
        vec![
            StrategyKind::Naive,
            StrategyKind::PrimeFactor,
            StrategyKind::MonteCarlo
        ]
    );
    assert_eq!(config.n_values.benchmark_values().len(), 2);
    // Unspecified sections fall back to defaults.
    assert_eq!(config.naive.max_trials, 1000);
    assert_eq!(config.monte_carlo.trials, 1_000_000);
    assert!(config.validate().is_ok());
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        random_seed: 42
        fraction:
          max_yz: 64
        benchmark:
          repeat_count: 2
          strategies: [parametrized, universal]
    "#;

    let config = SearchConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.fraction.max_yz, 64);
    assert_eq!(config.benchmark.repeat_count, 2);
    assert_eq!(config.benchmark.warmup_count, 0);
}

#[test]
fn test_defaults_match_reference_bounds() {
    let config = SearchConfig::default();
    assert_eq!(config.naive.max_trials, 1000);
    assert_eq!(config.exhaustive.max_range, 50);
    assert_eq!(config.fraction.max_yz, 5000);
    assert_eq!(config.parametrized.max_y, 100);
    assert_eq!(config.monte_carlo.trials, 1_000_000);
    assert_eq!(config.benchmark.repeat_count, 10);
    assert_eq!(config.random_seed, None);
}

#[test]
fn test_default_n_values() {
    let sets = NValueSets::default();
    assert_eq!(sets.small, vec![5, 15, 25, 35, 45, 100, 101, 1001]);
    assert_eq!(sets.benchmark_values().len(), 8 + 5 + 4);
    assert_eq!(sets.verify_values()[1], BigUint::from(100_000_000_000_004u64));
}

#[test]
fn test_unknown_strategy_rejected() {
    let result = SearchConfig::from_toml_str("[benchmark]\nstrategies = [\"quantum\"]");
    assert!(matches!(result, Err(ConfigError::Toml(_))));
}

#[test]
fn test_validate_rejects_bad_values() {
    let zero_repeat = SearchConfig::new().with_repeat_count(0);
    assert!(matches!(zero_repeat.validate(), Err(ConfigError::Invalid(_))));

    let empty_lineup = SearchConfig::new().with_strategies(Vec::new());
    assert!(empty_lineup.validate().is_err());

    let zero_n = SearchConfig::from_toml_str("[n_values]\nsmall = [0, 5]").unwrap();
    let err = zero_n.validate().unwrap_err();
    assert!(err.to_string().contains("positive integers"));

    let zero_trials = SearchConfig::new().with_monte_carlo_trials(0);
    let err = zero_trials.validate().unwrap_err();
    assert!(err.to_string().contains("monte_carlo.trials"));
}

#[test]
fn test_builder() {
    let config = SearchConfig::new()
        .with_random_seed(123)
        .with_repeat_count(3)
        .with_strategies([StrategyKind::Universal]);

    assert_eq!(config.random_seed, Some(123));
    assert_eq!(config.benchmark.repeat_count, 3);
    assert_eq!(config.benchmark.strategies, vec![StrategyKind::Universal]);
}

#[test]
fn test_load_missing_file() {
    let result = SearchConfig::load("does/not/exist.toml");
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_strategy_display_names_unique() {
    let mut names: Vec<&str> = StrategyKind::ALL.iter().map(|k| k.display_name()).collect();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), StrategyKind::ALL.len());
    assert_eq!(StrategyKind::PrimeFactor.to_string(), "PrimeFactor");
}

#[test]
fn test_validate_rejects_repeated_strategy() {
    let config = SearchConfig::new()
        .with_strategies([StrategyKind::Parametrized, StrategyKind::Naive, StrategyKind::Parametrized]);
    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
    assert!(err.to_string().contains("`Parametrized` more than once"));
}

#[test]
fn test_prime_factor_default_range() {
    assert_eq!(SearchConfig::default().prime_factor.max_range, 1000);
}
