//! Phase 3: one last unconstrained move.

use tracing::{debug, trace};

use roomforge_core::Result;

use super::{ranked_extremes, Transfer};
use crate::phase::Phase;
use crate::scope::{PhaseScope, SolverScope};

/// Moves at most one task from the most to the least loaded unit, ignoring
/// corridor limits, if that narrows the gap between the two.
#[derive(Debug, Clone, Copy, Default)]
pub struct FinalPassPhase;

impl FinalPassPhase {
    pub fn new() -> Self {
        Self
    }
}

impl Phase for FinalPassPhase {
    fn solve(&mut self, solver_scope: &mut SolverScope<'_>) -> Result<()> {
        let config = &solver_scope.config().balance.final_pass;
        let spread = solver_scope.spread();
        let Some((source, target)) = ranked_extremes(solver_scope.units(), |_| true) else {
            return Ok(());
        };
        if spread <= config.activation_spread
            || source == target
            || solver_scope.units()[source].tasks.len() <= 1
        {
            debug!(
                event = "phase_skipped",
                phase_type = self.phase_type_name(),
                spread = spread,
            );
            return Ok(());
        }

        let mut phase_scope = PhaseScope::new(solver_scope, self.phase_type_name());
        let workday = phase_scope.workday();
        let units = phase_scope.units();

        let mut best_difference = spread;
        let mut best: Option<Transfer> = None;
        for index in 0..units[source].tasks.len() {
            let transfer = Transfer::simulate(&units[source], &units[target], index, workday);
            let difference =
                (transfer.source.total_effective_time - transfer.target.total_effective_time).abs();
            trace!(event = "candidate", room = transfer.room, difference = difference);
            if difference < best_difference {
                best_difference = difference;
                best = Some(transfer);
            }
        }
        let evaluated = units[source].tasks.len() as u64;
        phase_scope.record_evaluations(evaluated);

        if let Some(transfer) = best {
            let room = transfer.room;
            let from = phase_scope.units()[source].id.clone();
            let to = phase_scope.units()[target].id.clone();
            transfer.commit(phase_scope.units_mut(), source, target);
            phase_scope.record_acceptance();
            let step = phase_scope.record_step();
            debug!(
                event = "step",
                step = step,
                room = room,
                from = %from,
                to = %to,
                difference = best_difference,
            );
        }

        phase_scope.complete();
        Ok(())
    }

    fn phase_type_name(&self) -> &'static str {
        "FinalPass"
    }
}
