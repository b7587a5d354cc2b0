//! Phase 2: balancing with widened corridor caps.

use smallvec::SmallVec;
use tracing::{debug, trace};

use roomforge_core::Result;

use super::{longest_first, ranked_extremes, Transfer};
use crate::penalty::Occupancy;
use crate::phase::Phase;
use crate::scope::{PhaseScope, SolverScope};

/// Units allowed in one corridor for ordinary tasks.
const MAX_UNITS_PER_CORRIDOR: usize = 2;

/// Units allowed in one corridor for long tasks.
const MAX_UNITS_PER_CORRIDOR_HIGH_VOLUME: usize = 3;

/// Second balancing pass, run only when a large spread survives phase 1.
///
/// Receivers may take one corridor more than their normal cap, and long
/// tasks may bring a third unit into a corridor. When the current pair of
/// extremes has no useful move, both are set aside and the next most and
/// least loaded units are tried.
#[derive(Debug, Clone, Copy, Default)]
pub struct RelaxedBalancePhase;

impl RelaxedBalancePhase {
    pub fn new() -> Self {
        Self
    }
}

impl Phase for RelaxedBalancePhase {
    fn solve(&mut self, solver_scope: &mut SolverScope<'_>) -> Result<()> {
        let balance = &solver_scope.config().balance;
        let config = &balance.relaxed;
        let spread = solver_scope.spread();
        if spread <= config.activation_spread {
            debug!(
                event = "phase_skipped",
                phase_type = self.phase_type_name(),
                spread = spread,
            );
            return Ok(());
        }

        let mut phase_scope = PhaseScope::new(solver_scope, self.phase_type_name());
        let workday = phase_scope.workday();
        let target_minutes = workday.length_minutes;
        let mut excluded: SmallVec<[usize; 8]> = SmallVec::new();

        for iteration in 0..config.iteration_limit {
            let units = phase_scope.units();
            let Some((source, target)) = ranked_extremes(units, |i| !excluded.contains(&i)) else {
                break;
            };
            if source == target {
                debug!(event = "pairs_exhausted", iteration = iteration);
                break;
            }

            let source_load = units[source].total_effective_time;
            let target_load = units[target].total_effective_time;
            let difference = source_load - target_load;
            if difference <= config.pair_tolerance {
                debug!(event = "balanced", iteration = iteration, difference = difference);
                break;
            }

            let mut best: Option<(f64, Transfer)> = None;
            let mut evaluated = 0u64;
            if units[source].tasks.len() > 1 {
                let occupancy = Occupancy::of(units);
                let receiver = &units[target];
                let receiver_corridors = receiver.corridors();
                let cap = receiver.kind.relaxed_corridor_cap();
                let distance =
                    (source_load - target_minutes).abs() + (target_load - target_minutes).abs();

                for index in longest_first(&units[source]) {
                    let task = &units[source].tasks[index];
                    let Some(corridor) = task.corridor else {
                        continue;
                    };
                    let present = receiver_corridors.contains(&corridor);
                    if !present {
                        if receiver_corridors.len() >= cap {
                            continue;
                        }
                        let max_units = if task.estimated_time > config.high_volume_task_minutes {
                            MAX_UNITS_PER_CORRIDOR_HIGH_VOLUME
                        } else {
                            MAX_UNITS_PER_CORRIDOR
                        };
                        if occupancy.get(corridor) >= max_units {
                            continue;
                        }
                    }

                    let transfer = Transfer::simulate(&units[source], receiver, index, workday);
                    let source_after = transfer.source.total_effective_time;
                    let target_after = transfer.target.total_effective_time;
                    let distance_after = (source_after - target_minutes).abs()
                        + (target_after - target_minutes).abs();
                    let score = (difference - (source_after - target_after).abs())
                        + config.target_weight * (distance - distance_after);
                    evaluated += 1;
                    trace!(event = "candidate", room = transfer.room, score = score);

                    let threshold = best.as_ref().map_or(balance.min_improvement, |(s, _)| *s);
                    if score > threshold {
                        best = Some((score, transfer));
                    }
                }
            }
            phase_scope.record_evaluations(evaluated);

            let Some((score, transfer)) = best else {
                let units = phase_scope.units();
                debug!(
                    event = "pair_excluded",
                    iteration = iteration,
                    source = %units[source].id,
                    target = %units[target].id,
                );
                excluded.push(source);
                excluded.push(target);
                continue;
            };

            let room = transfer.room;
            let from = phase_scope.units()[source].id.clone();
            let to = phase_scope.units()[target].id.clone();
            transfer.commit(phase_scope.units_mut(), source, target);
            excluded.clear();
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
        "RelaxedBalance"
    }
}
