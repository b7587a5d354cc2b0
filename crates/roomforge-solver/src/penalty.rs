//! Soft penalties steering tasks toward compact, unshared corridors.

use roomforge_core::corridor::CorridorId;
use roomforge_core::domain::WorkUnit;
use smallvec::SmallVec;

/// Penalty for giving a unit a room far from the rooms it already holds.
///
/// 0 within one room, 10 within two, 30 within five, 50 beyond. An empty
/// unit pays nothing.
pub fn room_placement_penalty(unit: &WorkUnit, room: u32) -> f64 {
    match unit.nearest_room_distance(room) {
        None | Some(0..=1) => 0.0,
        Some(2) => 10.0,
        Some(3..=5) => 30.0,
        Some(_) => 50.0,
    }
}

/// Penalty for joining a corridor other units already work in.
///
/// 0 if nobody else is there, 200 if exactly one other unit is, 50 if two or
/// more already share it.
pub fn corridor_integrity_penalty(units: &[WorkUnit], corridor: CorridorId, unit: usize) -> f64 {
    let others = units
        .iter()
        .enumerate()
        .filter(|&(i, u)| i != unit && u.works_in(corridor))
        .count();
    match others {
        0 => 0.0,
        1 => 200.0,
        _ => 50.0,
    }
}

/// Penalty for moving a task out of a corridor the source has to itself.
pub const CORRIDOR_SPLIT_PENALTY: f64 = 150.0;

/// Penalty for a balancing move of a `corridor` task away from `source`.
///
/// Applies only while the source is the only unit in that corridor and it
/// would keep at least one task there after the move (`source_after`). Handing
/// over the whole corridor costs nothing.
pub fn corridor_split_penalty(
    units: &[WorkUnit],
    source: usize,
    source_after: &WorkUnit,
    corridor: CorridorId,
) -> f64 {
    let monopolized = units
        .iter()
        .enumerate()
        .all(|(i, u)| i == source || !u.works_in(corridor));
    if monopolized && source_after.works_in(corridor) {
        CORRIDOR_SPLIT_PENALTY
    } else {
        0.0
    }
}

/// Number of distinct units per corridor.
#[derive(Debug, Clone, Default)]
pub struct Occupancy {
    counts: SmallVec<[(CorridorId, usize); 8]>,
}

impl Occupancy {
    /// Counts the units working in each corridor.
    pub fn of(units: &[WorkUnit]) -> Self {
        let mut occupancy = Self::default();
        for unit in units {
            for corridor in unit.corridors() {
                match occupancy.counts.iter_mut().find(|(c, _)| *c == corridor) {
                    Some((_, n)) => *n += 1,
                    None => occupancy.counts.push((corridor, 1)),
                }
            }
        }
        occupancy
    }

    /// Units currently working in `corridor`.
    pub fn get(&self, corridor: CorridorId) -> usize {
        self.counts
            .iter()
            .find(|(c, _)| *c == corridor)
            .map_or(0, |&(_, n)| n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roomforge_test::units::solo_unit;
    use roomforge_test::team_unit;

    #[test]
    fn test_room_placement_steps() {
        let unit = solo_unit("Anna", &[(30, 15.0), (40, 15.0)]);
        assert_eq!(room_placement_penalty(&unit, 31), 0.0);
        assert_eq!(room_placement_penalty(&unit, 42), 10.0);
        assert_eq!(room_placement_penalty(&unit, 35), 30.0);
        assert_eq!(room_placement_penalty(&unit, 104), 50.0);

        let empty = solo_unit("Boris", &[]);
        assert_eq!(room_placement_penalty(&empty, 104), 0.0);
    }

    #[test]
    fn test_corridor_integrity_counts_other_units() {
        let units = vec![
            solo_unit("Anna", &[(30, 15.0)]),
            solo_unit("Boris", &[(31, 15.0)]),
            solo_unit("Clara", &[(40, 15.0)]),
        ];
        // Corridor 2 is Clara's alone.
        assert_eq!(corridor_integrity_penalty(&units, 2, 0), 200.0);
        assert_eq!(corridor_integrity_penalty(&units, 2, 2), 0.0);
        // Corridor 1 already has two units.
        assert_eq!(corridor_integrity_penalty(&units, 1, 2), 50.0);
        assert_eq!(corridor_integrity_penalty(&units, 1, 0), 200.0);
        assert_eq!(corridor_integrity_penalty(&units, 4, 0), 0.0);
    }

    #[test]
    fn test_split_penalty_when_source_keeps_tasks() {
        let units = vec![
            team_unit(1, &["Anna", "Boris"], &[(101, 45.0), (102, 45.0), (103, 45.0)]),
            team_unit(2, &["Clara", "Dina"], &[(30, 45.0)]),
        ];
        let keeps = team_unit(1, &["Anna", "Boris"], &[(101, 45.0), (102, 45.0)]);
        assert_eq!(corridor_split_penalty(&units, 0, &keeps, 5), 150.0);

        let units = vec![
            team_unit(1, &["Anna", "Boris"], &[(101, 45.0)]),
            team_unit(2, &["Clara", "Dina"], &[(30, 45.0)]),
        ];
        let empty = team_unit(1, &["Anna", "Boris"], &[]);
        assert_eq!(corridor_split_penalty(&units, 0, &empty, 5), 0.0);
    }

    #[test]
    fn test_no_split_penalty_in_shared_corridor() {
        let units = vec![
            solo_unit("Anna", &[(101, 45.0), (102, 45.0)]),
            solo_unit("Boris", &[(103, 45.0)]),
        ];
        let keeps = solo_unit("Anna", &[(101, 45.0)]);
        assert_eq!(corridor_split_penalty(&units, 0, &keeps, 5), 0.0);
    }

    #[test]
    fn test_occupancy() {
        let units = vec![
            solo_unit("Anna", &[(30, 15.0), (40, 15.0)]),
            solo_unit("Boris", &[(31, 15.0), (32, 15.0)]),
        ];
        let occupancy = Occupancy::of(&units);
        assert_eq!(occupancy.get(1), 2);
        assert_eq!(occupancy.get(2), 1);
        assert_eq!(occupancy.get(6), 0);
    }
}
