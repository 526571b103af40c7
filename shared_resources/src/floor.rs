//! Floor numbering helpers.
//!
//! Floors are signed: basements are `-basements..=-1`, the ground floor is `1`
//! and there is no floor `0`.

use crate::call::Direction;

pub type Floor = i32;

/// The ground floor, served by every column.
pub const LOBBY: Floor = 1;

pub fn is_real(floor: Floor) -> bool {
    floor != 0
}

/// Floor reached after moving one floor in `direction`.
pub fn next_floor(floor: Floor, direction: Direction) -> Floor {
    let next = match direction {
        Direction::Up => floor + 1,
        Direction::Down => floor - 1,
    };
    if is_real(next) {
        next
    } else {
        match direction {
            Direction::Up => next + 1,
            Direction::Down => next - 1,
        }
    }
}

/// Every real floor of `[min, max]`, ascending.
pub fn floors_between(min: Floor, max: Floor) -> impl Iterator<Item = Floor> {
    (min..=max).filter(|floor| is_real(*floor))
}

/// Floors a column (and each of its elevators) keeps devices for: its own
/// range plus the lobby.
pub fn served_floors(min: Floor, max: Floor) -> Vec<Floor> {
    let mut floors: Vec<Floor> = floors_between(min, max).collect();
    if !floors.contains(&LOBBY) {
        floors.push(LOBBY);
        floors.sort_unstable();
    }
    floors
}
