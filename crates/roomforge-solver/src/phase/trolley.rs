//! Trolley allocation and final bookkeeping
//!
//! Units working in rooms without a storage closet want a linen trolley.
//! Only a few trolleys exist; units that go without pay a walking surcharge
//! on every such room. Afterwards every unit gets its overtime flag and
//! finish time refreshed.

use roomforge_core::Result;
use tracing::{debug, info, warn};

use crate::phase::Phase;
use crate::scope::{PhaseScope, SolverScope};

/// Grants trolleys to the units with the most rooms lacking storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrolleyPhase;

impl TrolleyPhase {
    pub fn new() -> Self {
        Self
    }
}

impl Phase for TrolleyPhase {
    fn solve(&mut self, solver_scope: &mut SolverScope<'_>) -> Result<()> {
        let mut phase_scope = PhaseScope::new(solver_scope, self.phase_type_name());
        let config = &phase_scope.config().trolley;
        let workday = phase_scope.workday();

        let units = phase_scope.units_mut();
        for unit in units.iter_mut() {
            unit.needs_trolley = false;
        }

        let mut candidates: Vec<(usize, usize)> = units
            .iter()
            .enumerate()
            .map(|(i, u)| (i, u.no_storage_task_count()))
            .filter(|&(_, count)| count > 0)
            .collect();
        candidates.sort_by(|a, b| b.1.cmp(&a.1));

        let mut trolley_units = Vec::with_capacity(config.available);
        for &(i, count) in candidates.iter().take(config.available) {
            units[i].needs_trolley = true;
            trolley_units.push(units[i].id.clone());
            debug!(event = "trolley_granted", unit = %units[i].id, rooms = count);
        }

        for unit in units.iter_mut().filter(|u| !u.needs_trolley) {
            let mut surcharge = 0.0;
            for task in unit.tasks.iter_mut().filter(|t| !t.has_storage) {
                task.estimated_time += config.penalty_minutes;
                surcharge += config.penalty_minutes;
            }
            if surcharge > 0.0 {
                unit.recalc(workday);
                debug!(event = "trolley_surcharge", unit = %unit.id, minutes = surcharge);
            }
        }

        for unit in units.iter_mut() {
            unit.finalize(workday);
        }

        let too_many = candidates.len() > config.available;
        if too_many {
            warn!(
                event = "trolley_shortage",
                candidates = candidates.len(),
                available = config.available,
                "more units need a trolley than are available"
            );
        }
        info!(
            event = "trolleys_allocated",
            granted = trolley_units.len(),
            candidates = candidates.len(),
        );

        phase_scope
            .solver_scope_mut()
            .set_trolleys(trolley_units, too_many);
        phase_scope.complete();
        Ok(())
    }

    fn phase_type_name(&self) -> &'static str {
        "Trolley"
    }
}
