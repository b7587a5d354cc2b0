//! Greedy construction phase
//!
//! Places every pending task on a unit, one task per step, always taking the
//! globally cheapest (unit, task) pair. When corridor caps leave no pair, a
//! fallback gives the least loaded unit its cheapest task.

mod forager;

use roomforge_core::domain::AssignedTask;
use roomforge_core::{Result, RoomForgeError};
use tracing::{debug, warn};

use crate::phase::Phase;
use crate::scope::{PhaseScope, SolverScope};

pub use forager::{BestCostForager, ConstructionForager, FallbackForager, Placement};

/// Construction phase that assigns every pending task.
///
/// # Errors
///
/// Fails with [`RoomForgeError::Unsolvable`] when neither forager can place
/// the remaining tasks, which happens when none of them has a corridor.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyConstructionPhase;

impl GreedyConstructionPhase {
    pub fn new() -> Self {
        Self
    }
}

impl Phase for GreedyConstructionPhase {
    fn solve(&mut self, solver_scope: &mut SolverScope<'_>) -> Result<()> {
        let mut phase_scope = PhaseScope::new(solver_scope, self.phase_type_name());
        let config = &phase_scope.config().construction;
        let workday = phase_scope.workday();

        let mut pending = std::mem::take(phase_scope.solver_scope_mut().pending_mut());
        pending.sort_by_key(|t| (t.corridor.unwrap_or(0), t.room));

        let unit_count = phase_scope.units().len();
        let little_work = pending.len() <= config.little_work_tasks_per_unit * unit_count;
        debug!(
            event = "construction_mode",
            little_work = little_work,
            task_count = pending.len(),
            unit_count = unit_count,
        );

        let forager = BestCostForager::new(little_work, config.transition_penalty_factor);

        while !pending.is_empty() {
            let placement = match forager.pick_placement(phase_scope.units(), &pending) {
                Some(placement) => placement,
                None => match FallbackForager.pick_placement(phase_scope.units(), &pending) {
                    Some(placement) => {
                        warn!(
                            event = "construction_fallback",
                            room = pending[placement.task].room,
                            unit = %phase_scope.units()[placement.unit].id,
                            "no placement within corridor limits, ignoring limits"
                        );
                        placement
                    }
                    None => {
                        let mut rooms: Vec<u32> = pending.iter().map(|t| t.room).collect();
                        rooms.sort_unstable();
                        warn!(
                            event = "construction_failed",
                            remaining = rooms.len(),
                            "no unit can take the remaining tasks"
                        );
                        phase_scope.complete();
                        return Err(RoomForgeError::Unsolvable { rooms });
                    }
                },
            };

            let task = pending.remove(placement.task);
            let unit = &mut phase_scope.units_mut()[placement.unit];
            let assigned = AssignedTask::bind(&task, unit.efficiency_factor);
            let transition = unit.push_task(assigned, workday);
            let unit_id = unit.id.clone();
            let load = unit.total_effective_time;

            phase_scope.record_move(true);
            let step = phase_scope.record_step();
            debug!(
                event = "step",
                step = step,
                room = task.room,
                unit = %unit_id,
                transition = transition,
                load = load,
                cost = placement.cost,
            );
        }

        phase_scope.complete();
        Ok(())
    }

    fn phase_type_name(&self) -> &'static str {
        "GreedyConstruction"
    }
}
