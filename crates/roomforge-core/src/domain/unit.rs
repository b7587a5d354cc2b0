//! Work units: a solo employee or a team acting as one assignee.

use chrono::NaiveTime;
use smallvec::SmallVec;

use crate::corridor::{transition_time, CorridorId};
use crate::domain::AssignedTask;
use crate::workday::Workday;

/// Distinct corridors a unit works in. Units rarely exceed seven.
pub type CorridorSet = SmallVec<[CorridorId; 8]>;

/// Who performs a unit's tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitKind {
    Solo { employee: String },
    Team { id: u32, members: Vec<String> },
}

impl UnitKind {
    /// Number of people in the unit.
    pub fn size(&self) -> usize {
        match self {
            UnitKind::Solo { .. } => 1,
            UnitKind::Team { members, .. } => members.len(),
        }
    }

    /// Names of everyone in the unit.
    pub fn members(&self) -> Vec<String> {
        match self {
            UnitKind::Solo { employee } => vec![employee.clone()],
            UnitKind::Team { members, .. } => members.clone(),
        }
    }

    /// Stable identifier: the employee name or `Team <id>`.
    pub fn id(&self) -> String {
        match self {
            UnitKind::Solo { employee } => employee.clone(),
            UnitKind::Team { id, .. } => format!("Team {id}"),
        }
    }

    /// Label listing the members of a team.
    pub fn display_name(&self) -> String {
        match self {
            UnitKind::Solo { employee } => employee.clone(),
            UnitKind::Team { id, members } => format!("Team {id} ({})", members.join(", ")),
        }
    }

    /// Speed-up relative to one worker. Capped at three people.
    pub fn efficiency_factor(&self) -> f64 {
        match self.size() {
            0 | 1 => 1.0,
            2 => 2.0,
            _ => 3.0,
        }
    }

    /// Distinct corridors the unit may hold during construction and phase 1.
    pub fn corridor_cap(&self) -> usize {
        match self.size() {
            0 | 1 => 2,
            2 => 4,
            _ => 6,
        }
    }

    /// Looser corridor cap used by the relaxed balancing phase.
    pub fn relaxed_corridor_cap(&self) -> usize {
        self.corridor_cap() + 1
    }
}

/// An assignee with its task list and derived timings.
///
/// Timing identity: `total_effective_time = total_task_time +
/// total_transition_time + break_time_added`.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkUnit {
    pub kind: UnitKind,
    pub id: String,
    pub efficiency_factor: f64,
    pub tasks: Vec<AssignedTask>,
    pub total_task_time: f64,
    pub total_transition_time: f64,
    pub total_time_before_break: f64,
    /// 0 until the break becomes due, then the break length for good.
    pub break_time_added: f64,
    pub total_effective_time: f64,
    pub needs_trolley: bool,
    pub is_overtime: bool,
    pub estimated_finish_time: NaiveTime,
}

impl WorkUnit {
    /// Creates an idle unit starting at the beginning of the workday.
    pub fn new(kind: UnitKind, workday: &Workday) -> Self {
        let id = kind.id();
        let efficiency_factor = kind.efficiency_factor();
        Self {
            kind,
            id,
            efficiency_factor,
            tasks: Vec::new(),
            total_task_time: 0.0,
            total_transition_time: 0.0,
            total_time_before_break: 0.0,
            break_time_added: 0.0,
            total_effective_time: 0.0,
            needs_trolley: false,
            is_overtime: false,
            estimated_finish_time: workday.day_start,
        }
    }

    pub fn team_size(&self) -> usize {
        self.kind.size()
    }

    /// Corridor of the most recently appended task.
    pub fn last_corridor(&self) -> Option<CorridorId> {
        self.tasks.last().and_then(|t| t.corridor)
    }

    /// Distinct corridors in task order.
    pub fn corridors(&self) -> CorridorSet {
        let mut set = CorridorSet::new();
        for corridor in self.tasks.iter().filter_map(|t| t.corridor) {
            if !set.contains(&corridor) {
                set.push(corridor);
            }
        }
        set
    }

    pub fn works_in(&self, corridor: CorridorId) -> bool {
        self.tasks.iter().any(|t| t.corridor == Some(corridor))
    }

    pub fn tasks_in_corridor(&self, corridor: CorridorId) -> usize {
        self.tasks
            .iter()
            .filter(|t| t.corridor == Some(corridor))
            .count()
    }

    /// Distance from `room` to the closest room this unit already holds.
    pub fn nearest_room_distance(&self, room: u32) -> Option<u32> {
        self.tasks.iter().map(|t| t.room.abs_diff(room)).min()
    }

    /// Number of tasks in rooms without a storage closet.
    pub fn no_storage_task_count(&self) -> usize {
        self.tasks.iter().filter(|t| !t.has_storage).count()
    }

    /// Appends a task after the current last one and updates the running
    /// totals. Returns the walking time added.
    pub fn push_task(&mut self, task: AssignedTask, workday: &Workday) -> f64 {
        let transition = transition_time(self.last_corridor(), task.corridor);
        self.total_task_time += task.estimated_time;
        self.total_transition_time += transition;
        self.tasks.push(task);
        self.refresh_break(workday);
        transition
    }

    /// Removes the task at `index`, leaving totals stale until [`recalc`].
    ///
    /// [`recalc`]: WorkUnit::recalc
    pub fn take_task(&mut self, index: usize) -> AssignedTask {
        self.tasks.remove(index)
    }

    /// Recomputes every derived value from the task list.
    ///
    /// Tasks are reordered by corridor first so that walking is minimal.
    /// Running it twice in a row yields the same unit.
    pub fn recalc(&mut self, workday: &Workday) {
        self.tasks.sort_by_key(|t| t.corridor.unwrap_or(0));

        self.total_task_time = self.tasks.iter().map(|t| t.estimated_time).sum();
        self.total_transition_time = self
            .tasks
            .windows(2)
            .map(|pair| transition_time(pair[0].corridor, pair[1].corridor))
            .sum();

        self.refresh_break(workday);
        self.finalize(workday);
    }

    /// Refreshes the overtime flag and the projected finish time.
    pub fn finalize(&mut self, workday: &Workday) {
        self.is_overtime = workday.is_overtime(self.total_effective_time);
        self.estimated_finish_time = workday.finish_time(self.total_effective_time);
    }

    fn refresh_break(&mut self, workday: &Workday) {
        self.total_time_before_break = self.total_task_time + self.total_transition_time;
        if self.break_time_added == 0.0
            && self.total_time_before_break > workday.break_threshold_minutes
        {
            self.break_time_added = workday.break_minutes;
        }
        self.total_effective_time = self.total_time_before_break + self.break_time_added;
    }
}

#[cfg(test)]
#[path = "unit_tests.rs"]
mod tests;
