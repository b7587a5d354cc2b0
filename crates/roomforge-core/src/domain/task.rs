//! Room tasks at their three stages: raw input, costed, and bound to a unit.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::corridor::{CorridorId, HotelSide};

/// Cleaning type of a room, parsed from the task's type code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TaskType {
    /// `V`: guest checked out.
    Departure,
    /// `B`: daily service for a staying guest.
    Stayover,
    /// `N`: room prepared for a new guest.
    Arrival,
    /// `V/N`: checkout followed by a same-day arrival.
    DepartureArrival,
    /// `-`: listed but needs no cleaning.
    NoCleaning,
    /// Any other non-empty code.
    Other(String),
}

impl TaskType {
    /// Parses a type code; blank codes yield `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use roomforge_core::domain::TaskType;
    ///
    /// assert_eq!(TaskType::parse("V/N"), Some(TaskType::DepartureArrival));
    /// assert_eq!(TaskType::parse("  "), None);
    /// assert_eq!(TaskType::parse("X"), Some(TaskType::Other("X".to_string())));
    /// ```
    pub fn parse(code: &str) -> Option<Self> {
        let code = code.trim();
        let parsed = match code {
            "" => return None,
            "V" => TaskType::Departure,
            "B" => TaskType::Stayover,
            "N" => TaskType::Arrival,
            "V/N" => TaskType::DepartureArrival,
            "-" => TaskType::NoCleaning,
            other => TaskType::Other(other.to_string()),
        };
        Some(parsed)
    }

    /// Returns the code as written in task data.
    pub fn code(&self) -> &str {
        match self {
            TaskType::Departure => "V",
            TaskType::Stayover => "B",
            TaskType::Arrival => "N",
            TaskType::DepartureArrival => "V/N",
            TaskType::NoCleaning => "-",
            TaskType::Other(code) => code,
        }
    }

    /// Human-readable name used in task descriptions.
    pub fn label(&self) -> &str {
        match self {
            TaskType::Departure => "Departure",
            TaskType::Stayover => "Stayover cleaning",
            TaskType::Arrival => "New arrival",
            TaskType::DepartureArrival => "Departure with arrival",
            TaskType::NoCleaning => "No cleaning required",
            TaskType::Other(code) => code,
        }
    }

    /// Base cleaning duration in minutes, `None` for unknown codes.
    pub fn base_minutes(&self) -> Option<f64> {
        match self {
            TaskType::Departure | TaskType::DepartureArrival => Some(45.0),
            TaskType::Stayover => Some(15.0),
            TaskType::Arrival => Some(5.0),
            TaskType::NoCleaning => Some(0.0),
            TaskType::Other(_) => None,
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A room task as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomTask {
    pub room: u32,

    /// Type code (`V`, `B`, `N`, `V/N`, `-`); blank means "not today".
    #[serde(rename = "type", default)]
    pub task_type: String,

    #[serde(default)]
    pub note: String,

    /// Corridor id; 0 or absent means "derive it".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corridor: Option<CorridorId>,

    #[serde(
        default,
        alias = "hotelside",
        skip_serializing_if = "Option::is_none"
    )]
    pub hotel_side: Option<HotelSide>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor: Option<u32>,

    /// Storage flag from upstream data. Never trusted: storage is always
    /// recomputed from the room number.
    #[serde(
        default,
        alias = "hasstorage",
        skip_serializing_if = "Option::is_none"
    )]
    pub has_storage: Option<bool>,
}

impl RoomTask {
    /// Creates a task for a room with the given type code.
    pub fn new(room: u32, task_type: impl Into<String>) -> Self {
        Self {
            room,
            task_type: task_type.into(),
            note: String::new(),
            corridor: None,
            hotel_side: None,
            floor: None,
            has_storage: None,
        }
    }

    /// Sets the free-text note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// Sets an explicit corridor id.
    pub fn with_corridor(mut self, corridor: CorridorId) -> Self {
        self.corridor = Some(corridor);
        self
    }

    /// Sets wing and floor, used when no corridor id is given.
    pub fn with_location(mut self, side: HotelSide, floor: u32) -> Self {
        self.hotel_side = Some(side);
        self.floor = Some(floor);
        self
    }

    /// Explicit corridor id, treating 0 as absent.
    pub fn explicit_corridor(&self) -> Option<CorridorId> {
        self.corridor.filter(|&c| c != 0)
    }
}

/// A task with its duration worked out, ready for assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatedTask {
    pub room: u32,
    pub task_type: TaskType,
    pub note: String,
    pub corridor: Option<CorridorId>,
    pub has_storage: bool,
    /// Duration in minutes for a single worker.
    pub estimated_time: f64,
    pub description: String,
}

/// A task bound to a work unit.
///
/// `raw_estimated_time` never changes once the task is prepared;
/// `estimated_time` follows the unit the task currently belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignedTask {
    pub room: u32,
    pub description: String,
    pub estimated_time: f64,
    pub raw_estimated_time: f64,
    pub corridor: Option<CorridorId>,
    #[serde(skip)]
    pub has_storage: bool,
}

impl AssignedTask {
    /// Binds a prepared task to a unit with the given efficiency factor.
    pub fn bind(task: &CalculatedTask, efficiency_factor: f64) -> Self {
        Self {
            room: task.room,
            description: task.description.clone(),
            estimated_time: task.estimated_time / efficiency_factor,
            raw_estimated_time: task.estimated_time,
            corridor: task.corridor,
            has_storage: task.has_storage,
        }
    }

    /// Copy of this task rescaled for another unit.
    ///
    /// Any surcharge folded into `estimated_time` is dropped.
    pub fn rebind(&self, efficiency_factor: f64) -> Self {
        Self {
            estimated_time: self.raw_estimated_time / efficiency_factor,
            ..self.clone()
        }
    }
}
