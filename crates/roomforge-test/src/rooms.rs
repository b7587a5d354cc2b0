//! Room task fixtures.
//!
//! # Example
//!
//! ```
//! use roomforge_test::rooms::room_task;
//!
//! let task = room_task(104, "V");
//! assert_eq!(task.corridor, Some(5));
//! ```

use roomforge_core::corridor::corridor_for_room;
use roomforge_core::domain::RoomTask;

/// A task with its corridor filled in from the room number.
pub fn room_task(room: u32, code: &str) -> RoomTask {
    let task = RoomTask::new(room, code);
    match corridor_for_room(room) {
        Some(corridor) => task.with_corridor(corridor),
        None => task,
    }
}

/// Like [`room_task`], with a note.
pub fn room_task_with_note(room: u32, code: &str, note: &str) -> RoomTask {
    room_task(room, code).with_note(note)
}

/// Tasks of the same type for a range of rooms.
pub fn room_tasks(rooms: impl IntoIterator<Item = u32>, code: &str) -> Vec<RoomTask> {
    rooms.into_iter().map(|room| room_task(room, code)).collect()
}
