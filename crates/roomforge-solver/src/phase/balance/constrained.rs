//! Phase 1: balancing within corridor caps.

use tracing::{debug, trace};

use roomforge_core::Result;

use super::{extremes, longest_first, spread_of, variance_from, Transfer};
use crate::penalty::{corridor_split_penalty, room_placement_penalty, Occupancy};
use crate::phase::Phase;
use crate::scope::{PhaseScope, SolverScope};

/// Moves tasks from the most to the least loaded unit.
///
/// A move must keep the receiver within its corridor cap and must not bring
/// a third unit into a corridor, unless the receiver already works there.
/// Moves are scored by how much they shrink the spread and the variance
/// around the workday length, minus weighted room-placement and
/// corridor-split penalties. Both penalties are taken on the units as they
/// would be after the move.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstrainedBalancePhase;

/// Units allowed in one corridor during this phase.
const MAX_UNITS_PER_CORRIDOR: usize = 2;

impl ConstrainedBalancePhase {
    pub fn new() -> Self {
        Self
    }
}

impl Phase for ConstrainedBalancePhase {
    fn solve(&mut self, solver_scope: &mut SolverScope<'_>) -> Result<()> {
        let mut phase_scope = PhaseScope::new(solver_scope, self.phase_type_name());
        let balance = &phase_scope.config().balance;
        let config = &balance.constrained;
        let workday = phase_scope.workday();

        for iteration in 0..config.iteration_limit {
            let units = phase_scope.units();
            let Some((source, target)) = extremes(units, |_| true) else {
                break;
            };
            let spread = units[source].total_effective_time - units[target].total_effective_time;
            if source == target || spread <= config.spread_tolerance {
                debug!(event = "balanced", iteration = iteration, spread = spread);
                break;
            }
            if units[source].tasks.len() <= 1 {
                debug!(
                    event = "source_exhausted",
                    unit = %units[source].id,
                    tasks = units[source].tasks.len(),
                );
                break;
            }

            let occupancy = Occupancy::of(units);
            let receiver = &units[target];
            let receiver_corridors = receiver.corridors();
            let cap = receiver.kind.corridor_cap();

            let times: Vec<f64> = units.iter().map(|u| u.total_effective_time).collect();
            let variance = variance_from(&times, workday.length_minutes);

            let mut evaluated = 0u64;
            let mut best: Option<(f64, Transfer)> = None;
            for index in longest_first(&units[source]) {
                let task = &units[source].tasks[index];
                let Some(corridor) = task.corridor else {
                    continue;
                };
                let present = receiver_corridors.contains(&corridor);
                if !present
                    && (receiver_corridors.len() >= cap
                        || occupancy.get(corridor) >= MAX_UNITS_PER_CORRIDOR)
                {
                    continue;
                }

                let transfer = Transfer::simulate(&units[source], receiver, index, workday);
                let placement_penalty = room_placement_penalty(&transfer.target, transfer.room);
                let split_penalty =
                    corridor_split_penalty(units, source, &transfer.source, corridor);

                let times_after = transfer.times_after(units, source, target);
                let score = (spread - spread_of(&times_after))
                    + (variance - variance_from(&times_after, workday.length_minutes))
                    - config.room_placement_weight * placement_penalty
                    - config.corridor_integrity_weight * split_penalty;
                evaluated += 1;
                trace!(event = "candidate", room = transfer.room, score = score);

                let threshold = best.as_ref().map_or(balance.min_improvement, |(s, _)| *s);
                if score > threshold {
                    best = Some((score, transfer));
                }
            }

            phase_scope.record_evaluations(evaluated);
            let Some((score, transfer)) = best else {
                debug!(event = "no_improving_move", iteration = iteration);
                break;
            };

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
                score = score,
            );
        }

        phase_scope.complete();
        Ok(())
    }

    fn phase_type_name(&self) -> &'static str {
        "ConstrainedBalance"
    }
}
