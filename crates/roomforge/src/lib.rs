//! RoomForge - housekeeping task assignment for hotels
//!
//! Hand the engine today's employees, teams and room tasks; get back one
//! balanced task list per worker or team.
//!
//! # Example
//!
//! ```rust
//! use roomforge::prelude::*;
//!
//! let input = AssignmentInput::new(
//!     vec![Employee::working("Anna"), Employee::working("Boris")],
//!     vec![RoomTask::new(30, "V"), RoomTask::new(104, "B")],
//! );
//! let result = roomforge::assign(&input).unwrap();
//! assert_eq!(result.task_count(), 2);
//! ```

mod io;

pub use io::{corridor_table, load_config, load_input, Error, DEFAULT_CONFIG_FILE};

// Domain types
pub use roomforge_core::domain::{
    AssignedTask, AssignmentInput, AssignmentResult, Employee, RoomTask, TaskType, Team,
    UnitAssignment,
};
pub use roomforge_core::{
    transition_time, Corridor, CorridorId, HotelSide, NothingToAssign, RoomForgeError, Workday,
    CORRIDORS,
};

// Configuration
pub use roomforge_config::{ConfigError, EngineConfig};

// Engine
pub use roomforge_solver::{Solver, SolverStats};

/// Console output for runs.
pub use roomforge_console as console;

/// Assigns `input` with the default configuration.
///
/// # Errors
///
/// See [`Solver::solve`].
pub fn assign(input: &AssignmentInput) -> roomforge_core::Result<AssignmentResult> {
    Solver::default().solve(input)
}

pub mod prelude {
    pub use super::{
        AssignmentInput, AssignmentResult, Employee, EngineConfig, RoomTask, Solver, Team,
        UnitAssignment,
    };
}
