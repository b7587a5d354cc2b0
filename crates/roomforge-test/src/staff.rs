//! Employee fixtures.

use roomforge_core::domain::Employee;

/// An employee working today, not in a team.
pub fn worker(name: &str) -> Employee {
    Employee::working(name)
}

/// An employee who is off today.
pub fn off_duty(name: &str) -> Employee {
    Employee::off(name)
}

/// An employee working today as part of `team`.
pub fn team_member(name: &str, team: u32) -> Employee {
    Employee::working(name).with_team(team)
}
