//! Solver-level scope.

use roomforge_config::EngineConfig;
use roomforge_core::domain::{
    AssignmentResult, CalculatedTask, UnitAssignment, WorkUnit,
};
use roomforge_core::workday::Workday;

use crate::stats::SolverStats;

/// Top-level scope for one assignment run.
///
/// Owns the working units; phases borrow it mutably one after another.
#[derive(Debug)]
pub struct SolverScope<'a> {
    config: &'a EngineConfig,
    units: Vec<WorkUnit>,
    pending: Vec<CalculatedTask>,
    trolley_units: Vec<String>,
    too_many_trolleys: bool,
    stats: SolverStats,
    phase_count: usize,
}

impl<'a> SolverScope<'a> {
    pub fn new(config: &'a EngineConfig, units: Vec<WorkUnit>, pending: Vec<CalculatedTask>) -> Self {
        Self {
            config,
            units,
            pending,
            trolley_units: Vec::new(),
            too_many_trolleys: false,
            stats: SolverStats::default(),
            phase_count: 0,
        }
    }

    pub fn start_solving(&mut self) {
        self.stats.start();
    }

    pub fn config(&self) -> &'a EngineConfig {
        self.config
    }

    pub fn workday(&self) -> &'a Workday {
        &self.config.workday
    }

    pub fn units(&self) -> &[WorkUnit] {
        &self.units
    }

    pub fn units_mut(&mut self) -> &mut Vec<WorkUnit> {
        &mut self.units
    }

    /// Tasks not yet given to a unit.
    pub fn pending(&self) -> &[CalculatedTask] {
        &self.pending
    }

    pub fn pending_mut(&mut self) -> &mut Vec<CalculatedTask> {
        &mut self.pending
    }

    /// Records the outcome of trolley allocation.
    pub fn set_trolleys(&mut self, trolley_units: Vec<String>, too_many_trolleys: bool) {
        self.trolley_units = trolley_units;
        self.too_many_trolleys = too_many_trolleys;
    }

    pub fn too_many_trolleys(&self) -> bool {
        self.too_many_trolleys
    }

    pub fn stats(&self) -> &SolverStats {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut SolverStats {
        &mut self.stats
    }

    /// Returns the index for the next phase and counts it.
    pub fn next_phase_index(&mut self) -> usize {
        let index = self.phase_count;
        self.phase_count += 1;
        index
    }

    /// Largest minus smallest effective time over all units.
    pub fn spread(&self) -> f64 {
        load_spread(&self.units)
    }

    /// Total number of tasks held by units.
    pub fn assigned_count(&self) -> usize {
        self.units.iter().map(|u| u.tasks.len()).sum()
    }

    /// Consumes the scope into the public result and the run statistics.
    pub fn into_result(self) -> (AssignmentResult, SolverStats) {
        let result = AssignmentResult {
            assignments: self.units.iter().map(UnitAssignment::from).collect(),
            too_many_trolleys: self.too_many_trolleys,
            trolley_units: self.trolley_units,
        };
        (result, self.stats)
    }
}

/// Largest minus smallest effective time; 0 for fewer than two units.
pub(crate) fn load_spread(units: &[WorkUnit]) -> f64 {
    let mut times = units.iter().map(|u| u.total_effective_time);
    let Some(first) = times.next() else {
        return 0.0;
    };
    let (min, max) = times.fold((first, first), |(lo, hi), t| (lo.min(t), hi.max(t)));
    max - min
}
