//! Assignment solver entry point.

use roomforge_config::EngineConfig;
use roomforge_core::domain::{AssignmentInput, AssignmentResult};
use roomforge_core::{NothingToAssign, Result};
use tracing::info;

use crate::phase::{
    ConstrainedBalancePhase, FinalPassPhase, GreedyConstructionPhase, Phase,
    RelaxedBalancePhase, TrolleyPhase,
};
use crate::pool::build_units;
use crate::prepare::prepare_tasks;
use crate::scope::SolverScope;
use crate::stats::SolverStats;

/// Runs the full assignment pipeline over an input snapshot.
///
/// The solver holds only configuration; each call builds its own units, so
/// one solver can serve any number of runs.
///
/// # Example
///
/// ```
/// use roomforge_core::domain::{AssignmentInput, Employee, RoomTask};
/// use roomforge_solver::Solver;
///
/// let input = AssignmentInput::new(
///     vec![Employee::working("Anna")],
///     vec![RoomTask::new(30, "B"), RoomTask::new(31, "B")],
/// );
/// let result = Solver::default().solve(&input).unwrap();
///
/// let anna = result.assignment("Anna").unwrap();
/// assert_eq!(anna.total_effective_time, 30.0);
/// assert_eq!(anna.estimated_finish_time.to_string(), "09:30:00");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: EngineConfig,
}

impl Solver {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Assigns every eligible task of `input` to a work unit.
    ///
    /// # Errors
    ///
    /// - [`NothingToAssign::NoWorkingEmployees`] / [`NothingToAssign::NoEligibleTasks`]
    ///   for empty input.
    /// - [`roomforge_core::RoomForgeError::InvalidInput`] for duplicate rooms or
    ///   employee names.
    /// - [`roomforge_core::RoomForgeError::Unsolvable`] when tasks without a
    ///   corridor cannot be placed.
    pub fn solve(&self, input: &AssignmentInput) -> Result<AssignmentResult> {
        self.solve_with_stats(input).map(|(result, _)| result)
    }

    /// Like [`Solver::solve`], also returning run statistics.
    pub fn solve_with_stats(&self, input: &AssignmentInput) -> Result<(AssignmentResult, SolverStats)> {
        info!(
            event = "solve_start",
            employee_count = input.employees.len(),
            task_count = input.room_tasks.len(),
            team_count = input.teams.len(),
        );

        if input.working_employees().next().is_none() {
            return Err(NothingToAssign::NoWorkingEmployees.into());
        }
        let tasks = prepare_tasks(&input.room_tasks)?;
        if tasks.is_empty() {
            return Err(NothingToAssign::NoEligibleTasks.into());
        }
        let units = build_units(input, &self.config.workday)?;

        let mut solver_scope = SolverScope::new(&self.config, units, tasks);
        solver_scope.start_solving();

        let mut phases: Vec<Box<dyn Phase>> = vec![
            Box::new(GreedyConstructionPhase::new()),
            Box::new(ConstrainedBalancePhase::new()),
            Box::new(RelaxedBalancePhase::new()),
            Box::new(FinalPassPhase::new()),
            Box::new(TrolleyPhase::new()),
        ];
        for phase in phases.iter_mut() {
            phase.solve(&mut solver_scope)?;
        }

        let (result, stats) = solver_scope.into_result();
        info!(
            event = "solve_end",
            unit_count = result.assignments.len(),
            task_count = result.task_count(),
            spread = result.spread(),
            too_many_trolleys = result.too_many_trolleys,
            steps = stats.step_count,
            moves_evaluated = stats.moves_evaluated,
            duration_ms = stats.elapsed().as_millis() as u64,
        );
        Ok((result, stats))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roomforge_core::domain::{AssignmentInput, Employee};
    use roomforge_core::RoomForgeError;
    use roomforge_test::{off_duty, quiet_day, room_task, room_task_with_note, sample_day, worker};

    #[test]
    fn test_sample_day_assigns_every_task() {
        let input = sample_day();
        let result = Solver::default().solve(&input).unwrap();

        assert_eq!(result.assignments.len(), 4);
        assert_eq!(result.task_count(), 48);

        let mut rooms: Vec<u32> = result
            .assignments
            .iter()
            .flat_map(|a| a.tasks.iter().map(|t| t.room))
            .collect();
        rooms.sort_unstable();
        rooms.dedup();
        assert_eq!(rooms.len(), 48);
        assert!(!rooms.contains(&208));

        for unit in &result.assignments {
            let identity =
                unit.total_task_time + unit.total_transition_time + unit.break_time_added;
            assert!((unit.total_effective_time - identity).abs() < 1e-6);
            assert!(unit.break_time_added == 0.0 || unit.break_time_added == 15.0);
            assert_eq!(unit.is_overtime, unit.total_effective_time > 360.0);
        }
        assert!(result.trolley_units.len() <= 2);
        let team = result.assignment("Team 1").unwrap();
        assert_eq!(team.team_size, 2);
        assert_eq!(team.efficiency_factor, 2.0);
    }

    #[test]
    fn test_note_surcharge_on_departure() {
        let input = AssignmentInput::new(
            vec![worker("Anna")],
            vec![room_task_with_note(40, "V", "другое")],
        );
        let result = Solver::default().solve(&input).unwrap();

        let anna = result.assignment("Anna").unwrap();
        assert_eq!(anna.tasks[0].estimated_time, 55.0);
        assert_eq!(anna.total_effective_time, 55.0);
    }

    #[test]
    fn test_quiet_day_stats() {
        let (result, stats) = Solver::default().solve_with_stats(&quiet_day()).unwrap();
        assert_eq!(result.task_count(), 5);
        assert!(stats.phase_count >= 3);
        assert!(stats.step_count >= 5);
    }

    #[test]
    fn test_nobody_working() {
        let input = AssignmentInput::new(vec![off_duty("Anna")], vec![room_task(30, "B")]);
        let err = Solver::default().solve(&input).unwrap_err();
        assert!(matches!(
            err,
            RoomForgeError::NothingToAssign(NothingToAssign::NoWorkingEmployees)
        ));
    }

    #[test]
    fn test_no_working_employees_checked_first() {
        let input = AssignmentInput::new(Vec::<Employee>::new(), vec![room_task(30, "")]);
        let err = Solver::default().solve(&input).unwrap_err();
        assert!(matches!(
            err,
            RoomForgeError::NothingToAssign(NothingToAssign::NoWorkingEmployees)
        ));
    }

    #[test]
    fn test_no_eligible_tasks() {
        let input = AssignmentInput::new(vec![worker("Anna")], vec![room_task(30, " ")]);
        let err = Solver::default().solve(&input).unwrap_err();
        assert!(matches!(
            err,
            RoomForgeError::NothingToAssign(NothingToAssign::NoEligibleTasks)
        ));
    }

    #[test]
    fn test_duplicate_rooms_rejected() {
        let input = AssignmentInput::new(
            vec![worker("Anna")],
            vec![room_task(30, "B"), room_task(30, "V")],
        );
        let err = Solver::default().solve(&input).unwrap_err();
        assert!(matches!(err, RoomForgeError::InvalidInput(_)));
    }
}
