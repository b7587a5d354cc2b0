//! Solver statistics.
//!
//! Counters for solver and phase progress tracking.

use std::time::{Duration, Instant};

/// Solver-level statistics.
///
/// Tracks aggregate metrics across all phases of a run.
///
/// # Example
///
/// ```
/// use roomforge_solver::stats::SolverStats;
///
/// let mut stats = SolverStats::default();
/// stats.start();
/// stats.record_step();
/// stats.record_move(true);
/// stats.record_move(false);
///
/// assert_eq!(stats.step_count, 1);
/// assert_eq!(stats.moves_evaluated, 2);
/// assert_eq!(stats.moves_accepted, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SolverStats {
    start_time: Option<Instant>,
    /// Total steps taken across all phases.
    pub step_count: u64,
    /// Total candidate moves or placements evaluated.
    pub moves_evaluated: u64,
    /// Total moves applied.
    pub moves_accepted: u64,
    /// Number of phases that ran.
    pub phase_count: usize,
}

impl SolverStats {
    /// Marks the start of solving.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Returns the elapsed time since solving started.
    pub fn elapsed(&self) -> Duration {
        self.start_time.map(|t| t.elapsed()).unwrap_or_default()
    }

    /// Records a move evaluation and whether it was accepted.
    pub fn record_move(&mut self, accepted: bool) {
        self.moves_evaluated += 1;
        if accepted {
            self.moves_accepted += 1;
        }
    }

    /// Records a step completion.
    pub fn record_step(&mut self) {
        self.step_count += 1;
    }

    /// Folds the counters of a finished phase into the run totals.
    pub fn absorb(&mut self, phase: &PhaseStats) {
        self.step_count += phase.step_count;
        self.moves_evaluated += phase.moves_evaluated;
        self.moves_accepted += phase.moves_accepted;
        self.phase_count += 1;
    }

    /// Returns the acceptance rate (accepted / evaluated).
    pub fn acceptance_rate(&self) -> f64 {
        if self.moves_evaluated == 0 {
            0.0
        } else {
            self.moves_accepted as f64 / self.moves_evaluated as f64
        }
    }
}

/// Phase-level statistics.
///
/// # Example
///
/// ```
/// use roomforge_solver::stats::PhaseStats;
///
/// let mut stats = PhaseStats::new(1, "ConstrainedBalance");
/// stats.record_step();
/// stats.record_move(true);
///
/// assert_eq!(stats.phase_index, 1);
/// assert_eq!(stats.phase_type, "ConstrainedBalance");
/// assert_eq!(stats.step_count, 1);
/// assert_eq!(stats.moves_accepted, 1);
/// ```
#[derive(Debug, Clone)]
pub struct PhaseStats {
    /// Index of this phase (0-based).
    pub phase_index: usize,
    /// Type name of the phase.
    pub phase_type: &'static str,
    start_time: Instant,
    /// Number of steps taken in this phase.
    pub step_count: u64,
    /// Number of moves evaluated in this phase.
    pub moves_evaluated: u64,
    /// Number of moves applied in this phase.
    pub moves_accepted: u64,
}

impl PhaseStats {
    /// Creates new phase statistics.
    pub fn new(phase_index: usize, phase_type: &'static str) -> Self {
        Self {
            phase_index,
            phase_type,
            start_time: Instant::now(),
            step_count: 0,
            moves_evaluated: 0,
            moves_accepted: 0,
        }
    }

    /// Returns the elapsed time for this phase.
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Records a step completion.
    pub fn record_step(&mut self) {
        self.step_count += 1;
    }

    /// Records a move evaluation and whether it was accepted.
    pub fn record_move(&mut self, accepted: bool) {
        self.moves_evaluated += 1;
        if accepted {
            self.moves_accepted += 1;
        }
    }

    /// Records candidate moves that were scored but not yet decided on.
    pub fn record_evaluations(&mut self, count: u64) {
        self.moves_evaluated += count;
    }

    /// Records that one of the evaluated moves was applied.
    pub fn record_acceptance(&mut self) {
        self.moves_accepted += 1;
    }

    /// Returns the moves per second rate.
    pub fn moves_per_second(&self) -> u64 {
        let secs = self.elapsed().as_secs_f64();
        if secs > 0.0 {
            (self.moves_evaluated as f64 / secs) as u64
        } else {
            0
        }
    }
}
