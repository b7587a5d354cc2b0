//! RoomForge Core - Domain types for housekeeping assignment
//!
//! This crate provides the building blocks shared by the engine:
//! - Corridor geometry and walking times
//! - Room tasks and work units
//! - Workday rules (start, break, overtime)
//! - Error types

pub mod corridor;
pub mod domain;
pub mod error;
pub mod workday;

pub use corridor::{transition_time, Corridor, CorridorId, HotelSide, CORRIDORS};
pub use domain::{
    AssignedTask, AssignmentInput, AssignmentResult, CalculatedTask, Employee, RoomTask, TaskType,
    Team, UnitAssignment, UnitKind, WorkUnit,
};
pub use error::{NothingToAssign, Result, RoomForgeError};
pub use workday::Workday;
