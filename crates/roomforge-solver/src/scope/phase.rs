//! Phase-level scope.

use roomforge_config::EngineConfig;
use roomforge_core::domain::WorkUnit;
use roomforge_core::workday::Workday;
use tracing::info;

use super::SolverScope;
use crate::stats::PhaseStats;

/// Scope for a single phase of a run.
///
/// Logs `phase_start` on creation and `phase_end` on [`complete`].
///
/// [`complete`]: PhaseScope::complete
pub struct PhaseScope<'s, 'a> {
    solver_scope: &'s mut SolverScope<'a>,
    stats: PhaseStats,
}

impl<'s, 'a> PhaseScope<'s, 'a> {
    /// Creates a new phase scope.
    pub fn new(solver_scope: &'s mut SolverScope<'a>, phase_type: &'static str) -> Self {
        let phase_index = solver_scope.next_phase_index();
        info!(
            event = "phase_start",
            phase = phase_type,
            phase_index = phase_index,
        );
        Self {
            solver_scope,
            stats: PhaseStats::new(phase_index, phase_type),
        }
    }

    pub fn phase_index(&self) -> usize {
        self.stats.phase_index
    }

    pub fn phase_type(&self) -> &'static str {
        self.stats.phase_type
    }

    pub fn step_count(&self) -> u64 {
        self.stats.step_count
    }

    pub fn config(&self) -> &'a EngineConfig {
        self.solver_scope.config()
    }

    pub fn workday(&self) -> &'a Workday {
        self.solver_scope.workday()
    }

    pub fn units(&self) -> &[WorkUnit] {
        self.solver_scope.units()
    }

    pub fn units_mut(&mut self) -> &mut Vec<WorkUnit> {
        self.solver_scope.units_mut()
    }

    pub fn solver_scope(&self) -> &SolverScope<'a> {
        self.solver_scope
    }

    pub fn solver_scope_mut(&mut self) -> &mut SolverScope<'a> {
        self.solver_scope
    }

    /// Records a step completion, returning the new phase step count.
    pub fn record_step(&mut self) -> u64 {
        self.stats.record_step();
        self.stats.step_count
    }

    pub fn record_move(&mut self, accepted: bool) {
        self.stats.record_move(accepted);
    }

    /// Records a batch of scored candidates.
    pub fn record_evaluations(&mut self, count: u64) {
        self.stats.record_evaluations(count);
    }

    /// Records that a scored candidate was applied.
    pub fn record_acceptance(&mut self) {
        self.stats.record_acceptance();
    }

    /// Logs the end of the phase and folds its counters into the run.
    pub fn complete(self) {
        let spread = self.solver_scope.spread();
        info!(
            event = "phase_end",
            phase = self.stats.phase_type,
            phase_index = self.stats.phase_index,
            duration_ms = self.stats.elapsed().as_millis() as u64,
            steps = self.stats.step_count,
            moves_evaluated = self.stats.moves_evaluated,
            speed = self.stats.moves_per_second(),
            spread = spread,
        );
        self.solver_scope.stats_mut().absorb(&self.stats);
    }
}
