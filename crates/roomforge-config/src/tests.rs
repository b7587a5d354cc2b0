//! Tests for engine configuration.

use std::io::Write;

use super::*;

#[test]
fn test_empty_toml_gives_defaults() {
    let config = EngineConfig::from_toml_str("").unwrap();
    assert_eq!(config, EngineConfig::default());
    assert_eq!(config.construction.little_work_tasks_per_unit, 5);
    assert_eq!(config.construction.transition_penalty_factor, 15.0);
    assert_eq!(config.balance.constrained.iteration_limit, 15);
    assert_eq!(config.balance.relaxed.pair_tolerance, 15.0);
    assert_eq!(config.balance.final_pass.activation_spread, 30.0);
    assert_eq!(config.trolley.available, 2);
    assert_eq!(config.trolley.penalty_minutes, 3.0);
}

#[test]
fn test_toml_parsing() {
    let toml = r#"
        [workday]
        day_start = "07:45"
        break_minutes = 30

        [construction]
        little_work_tasks_per_unit = 3

        [balance]
        min_improvement = 0.5

        [balance.relaxed]
        activation_spread = 45
        target_weight = 0.25
    "#;

    let config = EngineConfig::from_toml_str(toml).unwrap();
    assert_eq!(
        config.workday.day_start.format("%H:%M").to_string(),
        "07:45"
    );
    assert_eq!(config.workday.break_minutes, 30.0);
    assert_eq!(config.workday.length_minutes, 360.0);
    assert_eq!(config.construction.little_work_tasks_per_unit, 3);
    assert_eq!(config.balance.min_improvement, 0.5);
    assert_eq!(config.balance.relaxed.activation_spread, 45.0);
    assert_eq!(config.balance.relaxed.target_weight, 0.25);
    assert_eq!(config.balance.relaxed.iteration_limit, 10);
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        workday:
          length_minutes: 480
        trolley:
          available: 4
          penalty_minutes: 5
    "#;

    let config = EngineConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.workday.length_minutes, 480.0);
    assert_eq!(config.trolley.available, 4);
    assert_eq!(config.trolley.penalty_minutes, 5.0);
}

#[test]
fn test_bad_clock_is_rejected() {
    let err = EngineConfig::from_toml_str("[workday]\nday_start = \"nine\"").unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_builder() {
    let config = EngineConfig::new()
        .with_trolleys(1)
        .with_constrained_iterations(3)
        .with_relaxed_iterations(0)
        .with_min_improvement(1.0);

    assert_eq!(config.trolley.available, 1);
    assert_eq!(config.balance.constrained.iteration_limit, 3);
    assert_eq!(config.balance.relaxed.iteration_limit, 0);
    assert_eq!(config.balance.min_improvement, 1.0);
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_rejects_bad_values() {
    let mut config = EngineConfig::default();
    config.workday.length_minutes = 0.0;
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

    let mut config = EngineConfig::default();
    config.trolley.penalty_minutes = -1.0;
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("trolley.penalty_minutes"));

    let mut config = EngineConfig::default();
    config.workday.break_threshold_minutes = -5.0;
    assert!(config.validate().is_err());
}

#[test]
fn test_load_toml_file() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[trolley]\navailable = 5").unwrap();

    let config = EngineConfig::load(file.path()).unwrap();
    assert_eq!(config.trolley.available, 5);
}

#[test]
fn test_load_yaml_file() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(file, "balance:\n  constrained:\n    spread_tolerance: 20").unwrap();

    let config = EngineConfig::load(file.path()).unwrap();
    assert_eq!(config.balance.constrained.spread_tolerance, 20.0);
}

#[test]
fn test_load_validates() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[workday]\nlength_minutes = -60").unwrap();

    let err = EngineConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = EngineConfig::load(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}
