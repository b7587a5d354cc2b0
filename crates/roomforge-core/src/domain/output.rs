//! Result snapshot returned by the engine.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::{AssignedTask, WorkUnit};
use crate::workday::clock;

/// Final plan for one work unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitAssignment {
    pub unit_id: String,
    pub display_name: String,
    pub member_names: Vec<String>,
    pub team_size: usize,
    pub efficiency_factor: f64,
    pub tasks: Vec<AssignedTask>,
    pub total_task_time: f64,
    pub total_transition_time: f64,
    pub total_time_before_break: f64,
    pub break_time_added: f64,
    pub total_effective_time: f64,
    pub needs_trolley: bool,
    pub is_overtime: bool,
    #[serde(with = "clock")]
    pub estimated_finish_time: NaiveTime,
}

impl From<&WorkUnit> for UnitAssignment {
    fn from(unit: &WorkUnit) -> Self {
        Self {
            unit_id: unit.id.clone(),
            display_name: unit.kind.display_name(),
            member_names: unit.kind.members(),
            team_size: unit.team_size(),
            efficiency_factor: unit.efficiency_factor,
            tasks: unit.tasks.clone(),
            total_task_time: unit.total_task_time,
            total_transition_time: unit.total_transition_time,
            total_time_before_break: unit.total_time_before_break,
            break_time_added: unit.break_time_added,
            total_effective_time: unit.total_effective_time,
            needs_trolley: unit.needs_trolley,
            is_overtime: unit.is_overtime,
            estimated_finish_time: unit.estimated_finish_time,
        }
    }
}

/// Outcome of an assignment run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentResult {
    pub assignments: Vec<UnitAssignment>,
    /// More units need a trolley than there are trolleys.
    pub too_many_trolleys: bool,
    /// Ids of the units that were given a trolley.
    #[serde(default)]
    pub trolley_units: Vec<String>,
}

impl AssignmentResult {
    /// Looks up the plan of a unit by id.
    pub fn assignment(&self, unit_id: &str) -> Option<&UnitAssignment> {
        self.assignments.iter().find(|a| a.unit_id == unit_id)
    }

    /// Total number of tasks across all units.
    pub fn task_count(&self) -> usize {
        self.assignments.iter().map(|a| a.tasks.len()).sum()
    }

    /// Largest minus smallest effective time, 0 with fewer than two units.
    pub fn spread(&self) -> f64 {
        let times = self.assignments.iter().map(|a| a.total_effective_time);
        let max = times.clone().fold(f64::NEG_INFINITY, f64::max);
        let min = times.fold(f64::INFINITY, f64::min);
        if self.assignments.len() < 2 {
            0.0
        } else {
            max - min
        }
    }
}
