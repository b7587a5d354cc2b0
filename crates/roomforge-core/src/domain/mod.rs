//! Domain model for housekeeping assignment
//!
//! Tasks move through three stages:
//! - `RoomTask`: raw input, one per room
//! - `CalculatedTask`: duration and description worked out
//! - `AssignedTask`: bound to a `WorkUnit` and scaled by its efficiency

mod input;
mod output;
mod task;
mod unit;

pub use input::{AssignmentInput, Employee, Team};
pub use output::{AssignmentResult, UnitAssignment};
pub use task::{AssignedTask, CalculatedTask, RoomTask, TaskType};
pub use unit::{CorridorSet, UnitKind, WorkUnit};
