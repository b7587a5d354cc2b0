//! Error types for RoomForge

use thiserror::Error;

/// Reason a run was rejected before construction started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NothingToAssign {
    /// No employee is marked as working today.
    #[error("no employees are working today")]
    NoWorkingEmployees,
    /// No room task carries a cleaning type.
    #[error("no room task has a cleaning type")]
    NoEligibleTasks,
}

/// Main error type for RoomForge operations
#[derive(Debug, Error)]
pub enum RoomForgeError {
    /// Empty input, detected before any assignment was attempted
    #[error("Nothing to assign: {0}")]
    NothingToAssign(#[from] NothingToAssign),

    /// Construction could not place the remaining tasks on any unit
    #[error("Unsolvable assignment: no reachable corridor for remaining rooms {rooms:?}")]
    Unsolvable {
        /// Rooms still unassigned when construction gave up.
        rooms: Vec<u32>,
    },

    /// Input snapshot violates a structural rule
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for RoomForge operations
pub type Result<T> = std::result::Result<T, RoomForgeError>;
