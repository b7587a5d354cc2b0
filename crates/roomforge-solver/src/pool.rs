//! Builds work units from the employees working today.

use std::collections::HashSet;

use roomforge_core::domain::{AssignmentInput, Employee, UnitKind, WorkUnit};
use roomforge_core::workday::Workday;
use roomforge_core::{NothingToAssign, Result, RoomForgeError};
use tracing::debug;

#[derive(Debug, PartialEq, Eq)]
enum GroupKey {
    Team(u32),
    Solo(String),
}

/// Groups working employees into units.
///
/// An employee belongs to a team through its `team_id` or by being listed in
/// a team's member names. A team with a single working member becomes a solo
/// unit. Units keep the order in which their first member appears.
///
/// # Errors
///
/// - [`NothingToAssign::NoWorkingEmployees`] if nobody works today.
/// - [`RoomForgeError::InvalidInput`] if two working employees share a name.
pub fn build_units(input: &AssignmentInput, workday: &Workday) -> Result<Vec<WorkUnit>> {
    let mut names = HashSet::new();
    let mut groups: Vec<(GroupKey, Vec<String>)> = Vec::new();

    for employee in input.working_employees() {
        if !names.insert(employee.name.as_str()) {
            return Err(RoomForgeError::InvalidInput(format!(
                "employee {} is listed more than once",
                employee.name
            )));
        }

        let key = match team_of(input, employee) {
            Some(id) => GroupKey::Team(id),
            None => GroupKey::Solo(employee.name.clone()),
        };
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, members)) => members.push(employee.name.clone()),
            None => groups.push((key, vec![employee.name.clone()])),
        }
    }

    if groups.is_empty() {
        return Err(NothingToAssign::NoWorkingEmployees.into());
    }

    let units: Vec<WorkUnit> = groups
        .into_iter()
        .map(|(key, mut members)| {
            let kind = match key {
                GroupKey::Team(id) if members.len() > 1 => UnitKind::Team { id, members },
                _ => UnitKind::Solo {
                    employee: members.swap_remove(0),
                },
            };
            WorkUnit::new(kind, workday)
        })
        .collect();

    debug!(
        event = "units_built",
        unit_count = units.len(),
        team_count = units
            .iter()
            .filter(|u| matches!(u.kind, UnitKind::Team { .. }))
            .count(),
    );
    Ok(units)
}

fn team_of(input: &AssignmentInput, employee: &Employee) -> Option<u32> {
    employee.team_id.filter(|&id| id != 0).or_else(|| {
        input
            .teams
            .iter()
            .find(|team| team.lists(&employee.name))
            .map(|team| team.id)
    })
}
