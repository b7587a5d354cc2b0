//! Task preparation: durations, descriptions and corridors.

use std::collections::HashSet;

use roomforge_core::corridor::{derive_corridor, room_has_storage};
use roomforge_core::domain::{CalculatedTask, RoomTask, TaskType};
use roomforge_core::{Result, RoomForgeError};
use tracing::{debug, warn};

/// Minutes assumed for a type code the engine does not know.
pub const UNKNOWN_TYPE_MINUTES: f64 = 20.0;

/// Extra minutes for notes that mean additional setup work.
pub const NOTE_SURCHARGE_MINUTES: f64 = 10.0;

/// Notes (lowercase) that trigger [`NOTE_SURCHARGE_MINUTES`].
const SURCHARGE_NOTES: [&str; 3] = [
    "дополнительная кровать",
    "установка детской кровати",
    "другое",
];

/// Note value meaning "nothing to add".
const EMPTY_NOTE: &str = "-";

/// Turns raw room tasks into costed tasks.
///
/// Tasks with a blank type are dropped. Room numbers must be unique across
/// the whole input, blank tasks included.
///
/// # Errors
///
/// Returns [`RoomForgeError::InvalidInput`] when a room number repeats.
pub fn prepare_tasks(tasks: &[RoomTask]) -> Result<Vec<CalculatedTask>> {
    let mut seen = HashSet::with_capacity(tasks.len());
    if let Some(dup) = tasks.iter().find(|t| !seen.insert(t.room)) {
        return Err(RoomForgeError::InvalidInput(format!(
            "room {} is listed more than once",
            dup.room
        )));
    }

    let prepared: Vec<CalculatedTask> = tasks.iter().filter_map(prepare_task).collect();
    debug!(
        event = "tasks_prepared",
        input = tasks.len(),
        eligible = prepared.len(),
    );
    Ok(prepared)
}

/// Costs a single task, or `None` if it has no type today.
pub fn prepare_task(task: &RoomTask) -> Option<CalculatedTask> {
    let task_type = TaskType::parse(&task.task_type)?;

    let base = task_type.base_minutes().unwrap_or_else(|| {
        warn!(
            event = "unknown_task_type",
            room = task.room,
            code = task_type.code(),
            minutes = UNKNOWN_TYPE_MINUTES,
            "unknown task type, assuming default duration"
        );
        UNKNOWN_TYPE_MINUTES
    });

    let surcharge = if has_surcharge(&task.note) {
        NOTE_SURCHARGE_MINUTES
    } else {
        0.0
    };

    let note = task.note.trim();
    let corridor = task
        .explicit_corridor()
        .or_else(|| derive_corridor(task.room, task.hotel_side, task.floor));
    if corridor.is_none() {
        warn!(
            event = "missing_corridor",
            room = task.room,
            "missing corridor info, task cannot be placed by corridor"
        );
    }

    Some(CalculatedTask {
        room: task.room,
        description: describe(&task_type, note),
        task_type,
        note: note.to_string(),
        corridor,
        has_storage: room_has_storage(task.room),
        estimated_time: base + surcharge,
    })
}

fn has_surcharge(note: &str) -> bool {
    let note = note.to_lowercase();
    SURCHARGE_NOTES.contains(&note.as_str())
}

fn describe(task_type: &TaskType, note: &str) -> String {
    if note.is_empty() || note == EMPTY_NOTE {
        task_type.label().to_string()
    } else {
        format!("{} ({note})", task_type.label())
    }
}
