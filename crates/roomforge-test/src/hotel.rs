//! Whole-day input snapshots.

use roomforge_core::domain::{AssignmentInput, Team};

use crate::rooms::{room_task, room_task_with_note};
use crate::staff::{off_duty, team_member, worker};

/// A busy day: three solo workers, one team of two, one worker off, and
/// tasks in every corridor.
pub fn sample_day() -> AssignmentInput {
    let employees = vec![
        worker("Anna"),
        team_member("Boris", 1),
        worker("Clara"),
        off_duty("Dmitri"),
        team_member("Elena", 1),
        worker("Farid"),
    ];

    let mut tasks = Vec::new();
    // West wing
    for room in 29..=37 {
        tasks.push(room_task(room, if room % 3 == 0 { "V" } else { "B" }));
    }
    for room in 38..=46 {
        tasks.push(room_task(room, if room % 2 == 0 { "B" } else { "N" }));
    }
    // East wing
    for room in 1..=6 {
        tasks.push(room_task(room, "V/N"));
    }
    for room in 15..=22 {
        tasks.push(if room == 17 {
            room_task_with_note(room, "V", "другое")
        } else {
            room_task(room, "B")
        });
    }
    for room in 101..=109 {
        tasks.push(room_task(room, if room % 2 == 0 { "V" } else { "-" }));
    }
    for room in 201..=207 {
        tasks.push(room_task(room, "B"));
    }
    // Listed, but nothing to do today.
    tasks.push(room_task(208, ""));

    AssignmentInput::new(employees, tasks).with_teams(vec![Team::new(1, ["Boris", "Elena"])])
}

/// Two workers and a handful of rooms; corridor caps do not apply.
pub fn quiet_day() -> AssignmentInput {
    AssignmentInput::new(
        vec![worker("Anna"), worker("Boris")],
        vec![
            room_task(30, "V"),
            room_task(31, "B"),
            room_task(40, "B"),
            room_task(104, "V"),
            room_task(105, "N"),
        ],
    )
}
