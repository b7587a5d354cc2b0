use super::*;
use crate::phase::Phase;
use crate::scope::SolverScope;
use roomforge_config::EngineConfig;
use roomforge_test::{solo_unit, team_unit};

fn rooms(unit: &WorkUnit) -> Vec<u32> {
    let mut rooms: Vec<u32> = unit.tasks.iter().map(|t| t.room).collect();
    rooms.sort_unstable();
    rooms
}

#[test]
fn test_extremes_prefer_first_index() {
    let units = vec![
        solo_unit("Anna", &[(30, 15.0)]),
        solo_unit("Boris", &[(40, 45.0)]),
        solo_unit("Clara", &[(101, 15.0)]),
        solo_unit("Dina", &[(201, 45.0)]),
    ];
    assert_eq!(extremes(&units, |_| true), Some((1, 0)));
    assert_eq!(extremes(&units, |i| i >= 2), Some((3, 2)));
    assert_eq!(extremes(&units, |i| i == 2), Some((2, 2)));
    assert_eq!(extremes(&units, |_| false), None);
}

#[test]
fn test_ranked_extremes_prefer_last_least_loaded() {
    let units = vec![
        solo_unit("Anna", &[(30, 15.0)]),
        solo_unit("Boris", &[(40, 45.0)]),
        solo_unit("Clara", &[(101, 15.0)]),
        solo_unit("Dina", &[(201, 45.0)]),
    ];
    assert_eq!(ranked_extremes(&units, |_| true), Some((1, 2)));
    assert_eq!(ranked_extremes(&units, |i| i != 2), Some((1, 0)));
    assert_eq!(ranked_extremes(&units, |i| i == 2), Some((2, 2)));
    assert_eq!(ranked_extremes(&units, |_| false), None);
}

#[test]
fn test_spread_and_variance() {
    assert_eq!(spread_of(&[120.0, 30.0, 75.0]), 90.0);
    assert_eq!(spread_of(&[]), 0.0);
    assert_eq!(variance_from(&[350.0, 370.0], 360.0), 100.0);
    assert_eq!(variance_from(&[], 360.0), 0.0);
}

#[test]
fn test_longest_first_is_stable() {
    let unit = solo_unit("Anna", &[(30, 15.0), (31, 45.0), (32, 15.0), (33, 45.0)]);
    assert_eq!(longest_first(&unit), [1, 3, 0, 2]);
}

#[test]
fn test_transfer_rescales_for_receiver() {
    let workday = roomforge_core::Workday::default();
    let source = solo_unit("Anna", &[(30, 45.0), (31, 30.0)]);
    let target = team_unit(1, &["Boris", "Clara"], &[]);

    let transfer = Transfer::simulate(&source, &target, 0, &workday);

    assert_eq!(transfer.room, 30);
    assert_eq!(transfer.source.total_effective_time, 30.0);
    let moved = &transfer.target.tasks[0];
    assert_eq!(moved.raw_estimated_time, 45.0);
    assert_eq!(moved.estimated_time, 22.5);
    assert_eq!(transfer.target.total_effective_time, 22.5);
    // Inputs stay untouched.
    assert_eq!(source.tasks.len(), 2);
    assert!(target.tasks.is_empty());
}

#[test]
fn test_constrained_moves_toward_balance() {
    let config = EngineConfig::default();
    let units = vec![
        solo_unit("Anna", &[(30, 45.0), (31, 45.0), (32, 45.0), (33, 45.0)]),
        solo_unit("Boris", &[(40, 15.0)]),
    ];
    let mut scope = SolverScope::new(&config, units, Vec::new());

    ConstrainedBalancePhase::new().solve(&mut scope).unwrap();

    let anna = &scope.units()[0];
    let boris = &scope.units()[1];
    assert_eq!(rooms(anna), [32, 33]);
    assert_eq!(rooms(boris), [30, 31, 40]);
    assert_eq!(anna.total_effective_time, 105.0);
    assert_eq!(boris.total_effective_time, 126.0);
    assert_eq!(boris.break_time_added, 15.0);
    assert_eq!(scope.stats().step_count, 2);
    assert_eq!(scope.stats().phase_count, 1);
}

#[test]
fn test_constrained_ignores_distance_to_receiver_rooms() {
    let config = EngineConfig::default();
    let units = vec![
        solo_unit("Anna", &[(30, 15.0), (36, 15.0)]),
        solo_unit("Boris", &[(37, 5.0)]),
    ];
    let mut scope = SolverScope::new(&config, units, Vec::new());

    ConstrainedBalancePhase::new().solve(&mut scope).unwrap();

    assert_eq!(rooms(&scope.units()[0]), [36]);
    assert_eq!(rooms(&scope.units()[1]), [30, 37]);
    assert_eq!(scope.units()[1].total_effective_time, 20.0);
    assert_eq!(scope.stats().step_count, 1);
}

#[test]
fn test_constrained_respects_corridor_cap() {
    let config = EngineConfig::default();
    let units = vec![
        solo_unit("Anna", &[(30, 45.0), (31, 45.0), (32, 45.0)]),
        solo_unit("Boris", &[(40, 15.0), (1, 15.0)]),
    ];
    let before = units.clone();
    let mut scope = SolverScope::new(&config, units, Vec::new());

    ConstrainedBalancePhase::new().solve(&mut scope).unwrap();

    assert_eq!(scope.units(), &before[..]);
    assert_eq!(scope.stats().step_count, 0);
}

#[test]
fn test_constrained_respects_corridor_occupancy() {
    let config = EngineConfig::default();
    let units = vec![
        solo_unit("Anna", &[(30, 45.0), (31, 45.0), (32, 45.0)]),
        solo_unit("Boris", &[(40, 15.0)]),
        solo_unit("Clara", &[(34, 60.0)]),
    ];
    let mut scope = SolverScope::new(&config, units, Vec::new());

    ConstrainedBalancePhase::new().solve(&mut scope).unwrap();

    assert_eq!(rooms(&scope.units()[1]), [40]);
    assert_eq!(scope.stats().step_count, 0);
}

#[test]
fn test_relaxed_allows_one_extra_corridor() {
    let config = EngineConfig::default();
    let units = vec![
        solo_unit(
            "Anna",
            &[(30, 30.0), (31, 30.0), (32, 30.0), (33, 30.0), (34, 30.0), (35, 30.0)],
        ),
        solo_unit("Boris", &[(40, 15.0), (1, 15.0)]),
    ];
    let mut scope = SolverScope::new(&config, units, Vec::new());

    RelaxedBalancePhase::new().solve(&mut scope).unwrap();

    let boris = &scope.units()[1];
    assert_eq!(rooms(boris), [1, 30, 31, 40]);
    assert_eq!(boris.corridors().len(), 3);
    assert_eq!(scope.units()[0].total_effective_time, 135.0);
    assert_eq!(boris.total_effective_time, 126.0);
    assert_eq!(scope.stats().step_count, 2);
}

#[test]
fn test_relaxed_moves_on_to_next_pair() {
    let config = EngineConfig::default();
    let units = vec![
        solo_unit("Anna", &[(30, 200.0)]),
        solo_unit("Boris", &[(40, 10.0)]),
        solo_unit("Clara", &[(101, 45.0), (102, 45.0), (103, 45.0)]),
        solo_unit("Dina", &[(20, 15.0)]),
    ];
    let mut scope = SolverScope::new(&config, units, Vec::new());

    RelaxedBalancePhase::new().solve(&mut scope).unwrap();

    assert_eq!(rooms(&scope.units()[0]), [30]);
    assert_eq!(rooms(&scope.units()[1]), [40]);
    assert_eq!(rooms(&scope.units()[2]), [102, 103]);
    assert_eq!(rooms(&scope.units()[3]), [20, 101]);
    assert_eq!(scope.units()[3].total_effective_time, 63.0);
    assert_eq!(scope.stats().step_count, 1);
}

#[test]
fn test_relaxed_blocks_short_task_from_shared_corridor() {
    let config = EngineConfig::default();
    let units = vec![
        solo_unit("Anna", &[(40, 30.0), (41, 30.0), (42, 30.0), (43, 30.0)]),
        solo_unit("Boris", &[(44, 60.0)]),
        solo_unit("Clara", &[(1, 15.0)]),
    ];
    let before = units.clone();
    let mut scope = SolverScope::new(&config, units, Vec::new());

    RelaxedBalancePhase::new().solve(&mut scope).unwrap();

    assert_eq!(scope.units(), &before[..]);
    assert_eq!(scope.stats().phase_count, 1);
    assert_eq!(scope.stats().step_count, 0);
}

#[test]
fn test_relaxed_lets_long_task_open_third_slot() {
    let config = EngineConfig::default();
    let units = vec![
        solo_unit("Anna", &[(40, 45.0), (41, 45.0), (42, 45.0)]),
        solo_unit("Boris", &[(44, 60.0)]),
        solo_unit("Clara", &[(1, 15.0)]),
    ];
    let mut scope = SolverScope::new(&config, units, Vec::new());

    RelaxedBalancePhase::new().solve(&mut scope).unwrap();

    let clara = &scope.units()[2];
    assert_eq!(rooms(clara), [1, 40]);
    assert_eq!(clara.total_effective_time, 75.0);
    assert_eq!(rooms(&scope.units()[0]), [41, 42]);
    assert_eq!(rooms(&scope.units()[1]), [44]);
    assert_eq!(scope.stats().step_count, 1);
}

#[test]
fn test_relaxed_receiver_in_corridor_takes_short_task() {
    let config = EngineConfig::default();
    let units = vec![
        solo_unit("Anna", &[(40, 30.0), (41, 30.0), (42, 30.0), (43, 30.0)]),
        solo_unit("Boris", &[(44, 15.0)]),
        solo_unit("Clara", &[(45, 60.0)]),
    ];
    let mut scope = SolverScope::new(&config, units, Vec::new());

    RelaxedBalancePhase::new().solve(&mut scope).unwrap();

    let boris = &scope.units()[1];
    assert_eq!(rooms(boris), [40, 41, 44]);
    assert_eq!(boris.total_effective_time, 75.0);
    assert_eq!(rooms(&scope.units()[0]), [42, 43]);
    assert_eq!(scope.units()[0].total_effective_time, 75.0);
    assert_eq!(scope.stats().step_count, 2);
}

#[test]
fn test_relaxed_skipped_for_small_spread() {
    let config = EngineConfig::default();
    let units = vec![
        solo_unit("Anna", &[(30, 45.0)]),
        solo_unit("Boris", &[(40, 30.0)]),
    ];
    let mut scope = SolverScope::new(&config, units, Vec::new());

    RelaxedBalancePhase::new().solve(&mut scope).unwrap();

    assert_eq!(scope.stats().phase_count, 0);
}

#[test]
fn test_final_pass_takes_best_single_move() {
    let config = EngineConfig::default();
    let units = vec![
        solo_unit("Anna", &[(30, 45.0), (31, 45.0)]),
        solo_unit("Boris", &[(40, 15.0)]),
    ];
    let mut scope = SolverScope::new(&config, units, Vec::new());

    FinalPassPhase::new().solve(&mut scope).unwrap();

    let anna = &scope.units()[0];
    let boris = &scope.units()[1];
    assert_eq!(rooms(anna), [31]);
    assert_eq!(rooms(boris), [30, 40]);
    assert_eq!(anna.total_effective_time, 45.0);
    assert_eq!(boris.total_effective_time, 66.0);
    assert_eq!(scope.stats().step_count, 1);
}

#[test]
fn test_final_pass_gives_tie_to_last_idle_unit() {
    let config = EngineConfig::default();
    let units = vec![
        solo_unit("Anna", &[(30, 45.0), (31, 45.0)]),
        solo_unit("Boris", &[]),
        solo_unit("Clara", &[]),
    ];
    let mut scope = SolverScope::new(&config, units, Vec::new());

    FinalPassPhase::new().solve(&mut scope).unwrap();

    assert_eq!(rooms(&scope.units()[0]), [31]);
    assert!(scope.units()[1].tasks.is_empty());
    assert_eq!(rooms(&scope.units()[2]), [30]);
    assert_eq!(scope.units()[2].total_effective_time, 45.0);
}

#[test]
fn test_final_pass_keeps_single_task_source() {
    let config = EngineConfig::default();
    let units = vec![
        solo_unit("Anna", &[(30, 100.0)]),
        solo_unit("Boris", &[]),
    ];
    let mut scope = SolverScope::new(&config, units, Vec::new());

    FinalPassPhase::new().solve(&mut scope).unwrap();

    assert_eq!(rooms(&scope.units()[0]), [30]);
    assert_eq!(scope.stats().phase_count, 0);
}
