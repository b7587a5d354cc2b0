//! RoomForge Solver Engine
//!
//! This crate provides the assignment engine including:
//! - Task preparation (durations, descriptions, corridors)
//! - Work unit pool building (solo workers and teams)
//! - Phases (greedy construction, three balancing passes, trolley allocation)
//! - Scopes and statistics shared by the phases
//! - The `Solver` entry point

pub mod penalty;
pub mod phase;
pub mod pool;
pub mod prepare;
pub mod scope;
pub mod solver;
pub mod stats;

pub use phase::{
    ConstrainedBalancePhase, FinalPassPhase, GreedyConstructionPhase, Phase,
    RelaxedBalancePhase, TrolleyPhase,
};
pub use pool::build_units;
pub use prepare::{prepare_task, prepare_tasks};
pub use scope::{PhaseScope, SolverScope};
pub use solver::Solver;
pub use stats::{PhaseStats, SolverStats};
