//! Tests for scope types.

use super::*;
use roomforge_config::EngineConfig;
use roomforge_test::units::solo_unit;

#[test]
fn test_phase_indices_increase() {
    let config = EngineConfig::default();
    let mut scope = SolverScope::new(&config, Vec::new(), Vec::new());

    let first = PhaseScope::new(&mut scope, "First");
    assert_eq!(first.phase_index(), 0);
    first.complete();

    let mut second = PhaseScope::new(&mut scope, "Second");
    assert_eq!(second.phase_index(), 1);
    second.record_step();
    second.record_move(true);
    second.complete();

    assert_eq!(scope.stats().phase_count, 2);
    assert_eq!(scope.stats().step_count, 1);
    assert_eq!(scope.stats().moves_accepted, 1);
}

#[test]
fn test_spread_and_result() {
    let config = EngineConfig::default();
    let units = vec![
        solo_unit("Anna", &[(30, 45.0), (31, 45.0)]),
        solo_unit("Boris", &[(40, 15.0)]),
    ];
    let mut scope = SolverScope::new(&config, units, Vec::new());
    assert_eq!(scope.spread(), 75.0);
    assert_eq!(scope.assigned_count(), 3);

    scope.set_trolleys(vec!["Anna".to_string()], false);
    let (result, _) = scope.into_result();
    assert_eq!(result.assignments.len(), 2);
    assert_eq!(result.trolley_units, ["Anna"]);
    assert!(!result.too_many_trolleys);
}

#[test]
fn test_spread_of_empty_scope() {
    let config = EngineConfig::default();
    let scope = SolverScope::new(&config, Vec::new(), Vec::new());
    assert_eq!(scope.spread(), 0.0);
}
