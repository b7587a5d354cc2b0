//! Input snapshot handed to the engine.

use serde::{Deserialize, Serialize};

use super::RoomTask;

/// A housekeeping employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub name: String,

    #[serde(default, alias = "istodayworking")]
    pub is_working_today: bool,

    /// Team the employee belongs to, if any.
    #[serde(default, alias = "team", skip_serializing_if = "Option::is_none")]
    pub team_id: Option<u32>,
}

impl Employee {
    /// Creates an employee who is working today.
    pub fn working(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_working_today: true,
            team_id: None,
        }
    }

    /// Creates an employee who is off today.
    pub fn off(name: impl Into<String>) -> Self {
        Self {
            is_working_today: false,
            ..Self::working(name)
        }
    }

    pub fn with_team(mut self, team_id: u32) -> Self {
        self.team_id = Some(team_id);
        self
    }
}

/// A team declared by name list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: u32,
    #[serde(default)]
    pub member_names: Vec<String>,
}

impl Team {
    pub fn new<I, S>(id: u32, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id,
            member_names: members.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true if the team lists `name` as a member.
    pub fn lists(&self, name: &str) -> bool {
        self.member_names.iter().any(|m| m == name)
    }
}

/// Everything one assignment run needs.
///
/// # Examples
///
/// ```
/// use roomforge_core::domain::AssignmentInput;
///
/// let json = r#"{
///     "employees": [{"name": "Anna", "isWorkingToday": true}],
///     "roomTasks": [{"room": 30, "type": "B", "note": ""}]
/// }"#;
/// let input: AssignmentInput = serde_json::from_str(json).unwrap();
/// assert_eq!(input.employees.len(), 1);
/// assert!(input.teams.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentInput {
    #[serde(default)]
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub room_tasks: Vec<RoomTask>,
    #[serde(default)]
    pub teams: Vec<Team>,
}

impl AssignmentInput {
    pub fn new(employees: Vec<Employee>, room_tasks: Vec<RoomTask>) -> Self {
        Self {
            employees,
            room_tasks,
            teams: Vec::new(),
        }
    }

    pub fn with_teams(mut self, teams: Vec<Team>) -> Self {
        self.teams = teams;
        self
    }

    /// Employees marked as working today, in input order.
    pub fn working_employees(&self) -> impl Iterator<Item = &Employee> {
        self.employees.iter().filter(|e| e.is_working_today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_field_names() {
        let json = r#"{"name": "Olga", "istodayworking": true, "team": 2}"#;
        let employee: Employee = serde_json::from_str(json).unwrap();
        assert!(employee.is_working_today);
        assert_eq!(employee.team_id, Some(2));
    }

    #[test]
    fn test_working_filter_keeps_order() {
        let input = AssignmentInput::new(
            vec![
                Employee::working("Anna"),
                Employee::off("Boris"),
                Employee::working("Clara"),
            ],
            Vec::new(),
        );
        let names: Vec<_> = input.working_employees().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Anna", "Clara"]);
    }
}
