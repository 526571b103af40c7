//! Buttons, doors and displays, and the per-floor registries that hold them.
//!
//! Every registry is keyed by floor. Touching a floor that has no device is a
//! silent no-op: callers get `false`/`None` back, never an error.

use std::collections::BTreeMap;

use crate::call::Direction;
use crate::floor::Floor;
use crate::status::{ButtonStatus, DisplayStatus, DoorStatus, OnOff};

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button {
    pub id: u32,
    pub floor: Floor,
    pub status: ButtonStatus,
}

impl Button {
    pub fn new(id: u32, floor: Floor) -> Self {
        Button { id, floor, status: OnOff::Off }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Door {
    pub id: u32,
    pub floor: Floor,
    pub status: DoorStatus,
}

impl Door {
    pub fn new(id: u32, floor: Floor) -> Self {
        Door { id, floor, status: DoorStatus::Closed }
    }

    pub fn is_open(&self) -> bool {
        self.status == DoorStatus::Opened
    }
}

/// Position indicator. `floor` is the floor currently shown.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Display {
    pub id: u32,
    pub floor: Floor,
    pub status: DisplayStatus,
}

impl Display {
    pub fn new(id: u32, floor: Floor) -> Self {
        Display { id, floor, status: OnOff::On }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FloorRegistry<T> {
    entries: BTreeMap<Floor, T>,
}

impl<T> Default for FloorRegistry<T> {
    fn default() -> Self {
        FloorRegistry { entries: BTreeMap::new() }
    }
}

impl<T> FloorRegistry<T> {
    /// Builds one device per floor, ids numbered from 1 in floor order.
    pub fn from_floors(floors: &[Floor], make: impl Fn(u32, Floor) -> T) -> Self {
        let entries = floors
            .iter()
            .enumerate()
            .map(|(index, floor)| (*floor, make(index as u32 + 1, *floor)))
            .collect();
        FloorRegistry { entries }
    }

    pub fn get(&self, floor: Floor) -> Option<&T> {
        self.entries.get(&floor)
    }

    /// Applies `update` to the device of `floor`. Returns whether one existed.
    pub fn update(&mut self, floor: Floor, update: impl FnOnce(&mut T)) -> bool {
        match self.entries.get_mut(&floor) {
            Some(entry) => {
                update(entry);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, floor: Floor) -> bool {
        self.entries.contains_key(&floor)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn floors(&self) -> impl Iterator<Item = Floor> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.entries.values_mut()
    }
}

impl FloorRegistry<Button> {
    pub fn set(&mut self, floor: Floor, status: ButtonStatus) -> bool {
        self.update(floor, |button| button.status = status)
    }

    pub fn status(&self, floor: Floor) -> Option<ButtonStatus> {
        self.get(floor).map(|button| button.status)
    }
}

/// The up and down call buttons a column keeps on each floor it serves.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct HallButtons {
    pub up: FloorRegistry<Button>,
    pub down: FloorRegistry<Button>,
}

impl HallButtons {
    pub fn new(floors: &[Floor]) -> Self {
        HallButtons {
            up: FloorRegistry::from_floors(floors, Button::new),
            down: FloorRegistry::from_floors(floors, Button::new),
        }
    }

    fn registry_mut(&mut self, direction: Direction) -> &mut FloorRegistry<Button> {
        match direction {
            Direction::Up => &mut self.up,
            Direction::Down => &mut self.down,
        }
    }

    pub fn set(&mut self, direction: Direction, floor: Floor, status: ButtonStatus) -> bool {
        self.registry_mut(direction).set(floor, status)
    }

    pub fn status(&self, direction: Direction, floor: Floor) -> Option<ButtonStatus> {
        match direction {
            Direction::Up => self.up.status(floor),
            Direction::Down => self.down.status(floor),
        }
    }

    /// Turns off both call buttons of `floor`.
    pub fn clear_floor(&mut self, floor: Floor) {
        self.up.set(floor, OnOff::Off);
        self.down.set(floor, OnOff::Off);
    }

    /// Floors with a lit button, per direction.
    pub fn lit(&self, direction: Direction) -> Vec<Floor> {
        let registry = match direction {
            Direction::Up => &self.up,
            Direction::Down => &self.down,
        };
        registry
            .iter()
            .filter(|button| button.status.is_on())
            .map(|button| button.floor)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_ids_follow_floor_order() {
        let doors = FloorRegistry::from_floors(&[-2, -1, 1], Door::new);
        let ids: Vec<u32> = doors.iter().map(|door| door.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(doors.get(-2).unwrap().floor, -2);
        assert_eq!(doors.len(), 3);
    }

    #[test]
    fn unknown_floor_is_a_no_op() {
        let mut buttons = HallButtons::new(&[1, 2, 3]);
        assert!(!buttons.set(Direction::Up, 42, OnOff::On));
        assert_eq!(buttons.status(Direction::Up, 42), None);
        buttons.clear_floor(42);
        assert!(buttons.lit(Direction::Up).is_empty());
    }

    #[test]
    fn clearing_a_floor_turns_off_both_directions() {
        let mut buttons = HallButtons::new(&[1, 2, 3]);
        assert!(buttons.set(Direction::Up, 2, OnOff::On));
        assert!(buttons.set(Direction::Down, 2, OnOff::On));
        assert!(buttons.set(Direction::Down, 3, OnOff::On));
        assert_eq!(buttons.lit(Direction::Down), vec![2, 3]);

        buttons.clear_floor(2);
        assert_eq!(buttons.status(Direction::Up, 2), Some(OnOff::Off));
        assert_eq!(buttons.lit(Direction::Down), vec![3]);
    }

    #[test]
    fn new_devices_start_in_their_resting_state() {
        assert_eq!(Button::new(1, 4).status, OnOff::Off);
        assert!(!Door::new(1, 4).is_open());
        assert_eq!(Display::new(1, 4).status, OnOff::On);
    }
}
