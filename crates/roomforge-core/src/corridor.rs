//! Corridor geometry.
//!
//! The hotel has six corridors spread over two wings. Changing wings always
//! happens on the ground floor, so a walk between wings is: descend to floor 1,
//! cross over, climb to the target floor.

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Corridor identifier as found in task data.
pub type CorridorId = u32;

/// Wing of the hotel a corridor belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HotelSide {
    East,
    West,
}

impl fmt::Display for HotelSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HotelSide::East => write!(f, "east"),
            HotelSide::West => write!(f, "west"),
        }
    }
}

/// Static description of one corridor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Corridor {
    pub id: CorridorId,
    pub side: HotelSide,
    pub floor: u32,
    /// First room number served by this corridor.
    pub first_room: u32,
    /// Last room number served by this corridor (inclusive).
    pub last_room: u32,
    /// Whether a linen storage room sits on this corridor.
    pub has_storage: bool,
}

impl Corridor {
    /// Returns true if the room number belongs to this corridor.
    pub fn contains_room(&self, room: u32) -> bool {
        (self.first_room..=self.last_room).contains(&room)
    }
}

/// Every corridor of the hotel, ordered by id.
pub const CORRIDORS: [Corridor; 6] = [
    Corridor {
        id: 1,
        side: HotelSide::West,
        floor: 1,
        first_room: 29,
        last_room: 37,
        has_storage: false,
    },
    Corridor {
        id: 2,
        side: HotelSide::West,
        floor: 2,
        first_room: 38,
        last_room: 46,
        has_storage: true,
    },
    Corridor {
        id: 3,
        side: HotelSide::East,
        floor: 1,
        first_room: 1,
        last_room: 6,
        has_storage: false,
    },
    Corridor {
        id: 4,
        side: HotelSide::East,
        floor: 2,
        first_room: 15,
        last_room: 22,
        has_storage: true,
    },
    Corridor {
        id: 5,
        side: HotelSide::East,
        floor: 2,
        first_room: 101,
        last_room: 109,
        has_storage: false,
    },
    Corridor {
        id: 6,
        side: HotelSide::East,
        floor: 3,
        first_room: 201,
        last_room: 207,
        has_storage: true,
    },
];

/// Rooms that have a storage closet next door.
const STORAGE_ROOMS: [RangeInclusive<u32>; 3] = [15..=22, 201..=207, 38..=46];

/// Corridors 4 and 5 share floor 2 of the east wing through a short passage.
const ADJACENT_SEGMENTS: (CorridorId, CorridorId) = (4, 5);

const ADJACENT_SEGMENT_MINUTES: u32 = 1;
const FLOOR_CHANGE_MINUTES: u32 = 2;
const WING_CROSSING_MINUTES: u32 = 3;
const UNKNOWN_CORRIDOR_MINUTES: u32 = 2;

/// Every walking estimate is scaled by this factor (cart, stairs, lifts).
const TRANSITION_SCALE: u32 = 3;

/// Floor on which the wings connect.
const CONNECTING_FLOOR: u32 = 1;

/// Looks up a corridor by id.
pub fn corridor(id: CorridorId) -> Option<&'static Corridor> {
    CORRIDORS.iter().find(|c| c.id == id)
}

/// Returns true if the room has a storage closet.
///
/// Derived from the room number only; any flag carried by input data is
/// ignored.
pub fn room_has_storage(room: u32) -> bool {
    STORAGE_ROOMS.iter().any(|range| range.contains(&room))
}

/// Walking time in minutes between two corridors.
///
/// Returns 0 when either corridor is unknown to the caller (`None`) or both
/// are the same. Corridor ids missing from [`CORRIDORS`] fall back to an
/// average walk and are reported as a data-quality warning.
///
/// # Examples
///
/// ```
/// use roomforge_core::corridor::transition_time;
///
/// assert_eq!(transition_time(Some(4), Some(5)), 3.0);
/// assert_eq!(transition_time(Some(2), Some(6)), 21.0);
/// assert_eq!(transition_time(None, Some(6)), 0.0);
/// ```
pub fn transition_time(from: Option<CorridorId>, to: Option<CorridorId>) -> f64 {
    let (Some(from), Some(to)) = (from, to) else {
        return 0.0;
    };
    if from == to {
        return 0.0;
    }

    let (a, b) = ADJACENT_SEGMENTS;
    if (from == a && to == b) || (from == b && to == a) {
        return f64::from(ADJACENT_SEGMENT_MINUTES * TRANSITION_SCALE);
    }

    let (Some(origin), Some(target)) = (corridor(from), corridor(to)) else {
        warn!(
            event = "unknown_corridor",
            from = from,
            to = to,
            "no geometry for corridor pair, using average walk"
        );
        return f64::from(UNKNOWN_CORRIDOR_MINUTES * TRANSITION_SCALE);
    };

    let mut minutes = 0;
    let mut floor = origin.floor;

    if origin.side != target.side {
        if floor != CONNECTING_FLOOR {
            minutes += FLOOR_CHANGE_MINUTES;
            floor = CONNECTING_FLOOR;
        }
        minutes += WING_CROSSING_MINUTES;
    }

    if floor != target.floor {
        minutes += FLOOR_CHANGE_MINUTES;
    }

    f64::from(minutes * TRANSITION_SCALE)
}

/// Finds the corridor serving a room number, if any.
pub fn corridor_for_room(room: u32) -> Option<CorridorId> {
    CORRIDORS
        .iter()
        .find(|c| c.contains_room(room))
        .map(|c| c.id)
}

/// Derives a corridor from wing and floor, falling back to room ranges.
///
/// East floor 2 is split between corridors 4 and 5; rooms 101-109 belong to
/// corridor 5.
pub fn derive_corridor(
    room: u32,
    side: Option<HotelSide>,
    floor: Option<u32>,
) -> Option<CorridorId> {
    if let (Some(side), Some(floor)) = (side, floor) {
        if side == HotelSide::East && floor == 2 {
            let segment = corridor(5).filter(|c| c.contains_room(room));
            return Some(if segment.is_some() { 5 } else { 4 });
        }
        if let Some(found) = CORRIDORS
            .iter()
            .find(|c| c.side == side && c.floor == floor)
        {
            return Some(found.id);
        }
    }
    corridor_for_room(room)
}
