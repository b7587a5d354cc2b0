//! Work unit fixtures.
//!
//! Units are built by appending tasks in the given order and then
//! recalculating, the way balanced units look after construction.

use roomforge_core::corridor::{corridor_for_room, room_has_storage};
use roomforge_core::domain::{AssignedTask, UnitKind, WorkUnit};
use roomforge_core::workday::Workday;

/// A task in `room` taking `minutes` for one worker.
pub fn assigned(room: u32, minutes: f64, efficiency_factor: f64) -> AssignedTask {
    AssignedTask {
        room,
        description: "Departure".to_string(),
        estimated_time: minutes / efficiency_factor,
        raw_estimated_time: minutes,
        corridor: corridor_for_room(room),
        has_storage: room_has_storage(room),
    }
}

/// A unit of `kind` holding `(room, raw minutes)` tasks.
pub fn unit_with(kind: UnitKind, tasks: &[(u32, f64)]) -> WorkUnit {
    let day = Workday::default();
    let mut unit = WorkUnit::new(kind, &day);
    let efficiency_factor = unit.efficiency_factor;
    for &(room, minutes) in tasks {
        unit.push_task(assigned(room, minutes, efficiency_factor), &day);
    }
    unit.recalc(&day);
    unit
}

/// A solo employee holding `(room, minutes)` tasks.
pub fn solo_unit(name: &str, tasks: &[(u32, f64)]) -> WorkUnit {
    unit_with(
        UnitKind::Solo {
            employee: name.to_string(),
        },
        tasks,
    )
}

/// A team holding `(room, raw minutes)` tasks.
pub fn team_unit(id: u32, members: &[&str], tasks: &[(u32, f64)]) -> WorkUnit {
    unit_with(
        UnitKind::Team {
            id,
            members: members.iter().map(|m| m.to_string()).collect(),
        },
        tasks,
    )
}
