//! Scope hierarchy for a solver run.
//!
//! - [`SolverScope`]: Top-level, holds the units being built and the tasks
//!   still waiting for a unit
//! - [`PhaseScope`]: Per-phase counters and lifecycle logging

mod phase;
mod solver;

pub use phase::PhaseScope;
pub use solver::SolverScope;

#[cfg(test)]
mod tests;
