//! Load balancing phases
//!
//! All three phases move single tasks from a heavily loaded unit to a
//! lightly loaded one. Candidate moves are simulated on cloned units and
//! only a winning move touches the working units.

mod constrained;
mod final_pass;
mod relaxed;

use roomforge_core::domain::WorkUnit;
use roomforge_core::workday::Workday;

pub use constrained::ConstrainedBalancePhase;
pub use final_pass::FinalPassPhase;
pub use relaxed::RelaxedBalancePhase;

/// Outcome of moving one task between two units, computed on copies.
#[derive(Debug, Clone)]
pub struct Transfer {
    /// Index of the moved task in the source's task list before the move.
    pub task_index: usize,
    pub room: u32,
    /// Source unit after losing the task, recalculated.
    pub source: WorkUnit,
    /// Target unit after receiving the task, recalculated.
    pub target: WorkUnit,
}

impl Transfer {
    /// Simulates moving `source.tasks[task_index]` to `target`.
    ///
    /// The task keeps its raw time; its estimated time is rescaled to the
    /// target's efficiency.
    pub fn simulate(
        source: &WorkUnit,
        target: &WorkUnit,
        task_index: usize,
        workday: &Workday,
    ) -> Self {
        let mut source_after = source.clone();
        let task = source_after.take_task(task_index);
        let room = task.room;

        let mut target_after = target.clone();
        target_after
            .tasks
            .push(task.rebind(target_after.efficiency_factor));

        source_after.recalc(workday);
        target_after.recalc(workday);

        Self {
            task_index,
            room,
            source: source_after,
            target: target_after,
        }
    }

    /// Effective times of all units if this transfer were applied.
    pub fn times_after(&self, units: &[WorkUnit], source: usize, target: usize) -> Vec<f64> {
        units
            .iter()
            .enumerate()
            .map(|(i, u)| {
                if i == source {
                    self.source.total_effective_time
                } else if i == target {
                    self.target.total_effective_time
                } else {
                    u.total_effective_time
                }
            })
            .collect()
    }

    /// Replaces the two units with their simulated versions.
    pub fn commit(self, units: &mut [WorkUnit], source: usize, target: usize) {
        units[source] = self.source;
        units[target] = self.target;
    }
}

/// Most and least loaded units among those accepted by `active`.
///
/// Ties resolve to the lowest index on both ends.
pub fn extremes(units: &[WorkUnit], active: impl Fn(usize) -> bool) -> Option<(usize, usize)> {
    let mut most: Option<usize> = None;
    let mut least: Option<usize> = None;
    for (i, unit) in units.iter().enumerate().filter(|&(i, _)| active(i)) {
        let load = unit.total_effective_time;
        if most.map_or(true, |m| load > units[m].total_effective_time) {
            most = Some(i);
        }
        if least.map_or(true, |l| load < units[l].total_effective_time) {
            least = Some(i);
        }
    }
    most.zip(least)
}

/// Like [`extremes`], but as if the units were ranked by load, heaviest
/// first, and both ends of the ranking taken.
///
/// Ties resolve to the lowest index for the most loaded unit and to the
/// highest index for the least loaded one.
pub fn ranked_extremes(
    units: &[WorkUnit],
    active: impl Fn(usize) -> bool,
) -> Option<(usize, usize)> {
    let mut most: Option<usize> = None;
    let mut least: Option<usize> = None;
    for (i, unit) in units.iter().enumerate().filter(|&(i, _)| active(i)) {
        let load = unit.total_effective_time;
        if most.map_or(true, |m| load > units[m].total_effective_time) {
            most = Some(i);
        }
        if least.map_or(true, |l| load <= units[l].total_effective_time) {
            least = Some(i);
        }
    }
    most.zip(least)
}

/// Largest minus smallest value.
pub fn spread_of(times: &[f64]) -> f64 {
    let max = times.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = times.iter().copied().fold(f64::INFINITY, f64::min);
    if times.is_empty() {
        0.0
    } else {
        max - min
    }
}

/// Mean squared distance of each time from the workday length.
pub fn variance_from(times: &[f64], target: f64) -> f64 {
    if times.is_empty() {
        return 0.0;
    }
    times.iter().map(|t| (t - target).powi(2)).sum::<f64>() / times.len() as f64
}

/// Task indices of a unit, longest task first. Equal tasks keep their order.
pub fn longest_first(unit: &WorkUnit) -> Vec<usize> {
    let mut order: Vec<usize> = (0..unit.tasks.len()).collect();
    order.sort_by(|&a, &b| {
        unit.tasks[b]
            .estimated_time
            .total_cmp(&unit.tasks[a].estimated_time)
    });
    order
}

#[cfg(test)]
mod tests;
