//! Foragers for construction placement selection
//!
//! Foragers return a [`Placement`] naming a pending task and a unit by
//! index. The phase takes ownership of the task via that index.

use std::fmt::Debug;

use roomforge_core::corridor::transition_time;
use roomforge_core::domain::{CalculatedTask, WorkUnit};
use tracing::trace;

use crate::penalty::{corridor_integrity_penalty, room_placement_penalty};

/// A pending task paired with the unit that should take it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Index into the unit list.
    pub unit: usize,
    /// Index into the pending task list.
    pub task: usize,
    /// Cost the forager assigned to this placement.
    pub cost: f64,
}

/// Trait for selecting the next placement during construction.
///
/// Returns `None` if no unit can take any pending task under the forager's
/// rules.
pub trait ConstructionForager: Send + Debug {
    fn pick_placement(&self, units: &[WorkUnit], pending: &[CalculatedTask]) -> Option<Placement>;
}

/// Best cost forager - evaluates every (unit, task) pair.
///
/// The cost of a pair is the unit's projected load after taking the task
/// plus penalties for walking, scattered rooms and shared corridors. Ties
/// go to the unit that is currently less loaded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestCostForager {
    little_work: bool,
    transition_penalty_factor: f64,
}

impl BestCostForager {
    /// Creates a forager. With `little_work` set, corridor caps are ignored.
    pub fn new(little_work: bool, transition_penalty_factor: f64) -> Self {
        Self {
            little_work,
            transition_penalty_factor,
        }
    }
}

impl ConstructionForager for BestCostForager {
    fn pick_placement(&self, units: &[WorkUnit], pending: &[CalculatedTask]) -> Option<Placement> {
        let mut best: Option<Placement> = None;
        let mut best_load = f64::INFINITY;

        for (unit_idx, unit) in units.iter().enumerate() {
            let corridors = unit.corridors();
            let cap = unit.kind.corridor_cap();
            let last_corridor = unit.last_corridor();
            let load = unit.total_effective_time;

            for (task_idx, task) in pending.iter().enumerate() {
                let Some(corridor) = task.corridor else {
                    continue;
                };
                if !self.little_work && !corridors.contains(&corridor) && corridors.len() >= cap {
                    continue;
                }

                let transition = transition_time(last_corridor, Some(corridor));
                let adjusted = task.estimated_time / unit.efficiency_factor;
                let dynamic_penalty = if transition > 0.0 {
                    transition * self.transition_penalty_factor
                } else {
                    0.0
                };
                let cost = load
                    + transition
                    + adjusted
                    + dynamic_penalty
                    + room_placement_penalty(unit, task.room)
                    + corridor_integrity_penalty(units, corridor, unit_idx);

                trace!(
                    event = "candidate",
                    unit = %unit.id,
                    room = task.room,
                    cost = cost,
                );

                let better = match best {
                    None => true,
                    Some(b) => cost < b.cost || (cost == b.cost && load < best_load),
                };
                if better {
                    best = Some(Placement {
                        unit: unit_idx,
                        task: task_idx,
                        cost,
                    });
                    best_load = load;
                }
            }
        }

        best
    }
}

/// Fallback forager - the least loaded unit takes its cheapest task.
///
/// Corridor caps and penalties are ignored; only walking plus cleaning time
/// counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FallbackForager;

impl ConstructionForager for FallbackForager {
    fn pick_placement(&self, units: &[WorkUnit], pending: &[CalculatedTask]) -> Option<Placement> {
        let mut least: Option<usize> = None;
        for (i, unit) in units.iter().enumerate() {
            if least.map_or(true, |l| unit.total_effective_time < units[l].total_effective_time) {
                least = Some(i);
            }
        }
        let unit_idx = least?;
        let unit = &units[unit_idx];

        let last_corridor = unit.last_corridor();
        let mut best: Option<Placement> = None;
        for (task_idx, task) in pending.iter().enumerate() {
            let Some(corridor) = task.corridor else {
                continue;
            };
            let cost = transition_time(last_corridor, Some(corridor))
                + task.estimated_time / unit.efficiency_factor;
            if best.map_or(true, |b| cost < b.cost) {
                best = Some(Placement {
                    unit: unit_idx,
                    task: task_idx,
                    cost,
                });
            }
        }
        best
    }
}

#[cfg(test)]
#[path = "forager_tests.rs"]
mod tests;
