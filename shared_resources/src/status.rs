use std::fmt;

use crate::call::Direction;

/// Movement state of an elevator car.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ElevatorStatus {
    #[default]
    Idle,
    Up,
    Down,
}

impl ElevatorStatus {
    pub fn as_string(&self) -> String {
        match self {
            ElevatorStatus::Idle => String::from("idle"),
            ElevatorStatus::Up => String::from("up"),
            ElevatorStatus::Down => String::from("down"),
        }
    }

    /// Travel direction, `None` when idle.
    pub fn direction(self) -> Option<Direction> {
        match self {
            ElevatorStatus::Idle => None,
            ElevatorStatus::Up => Some(Direction::Up),
            ElevatorStatus::Down => Some(Direction::Down),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            ElevatorStatus::Up => ElevatorStatus::Down,
            ElevatorStatus::Down => ElevatorStatus::Up,
            ElevatorStatus::Idle => ElevatorStatus::Idle,
        }
    }
}

impl From<Direction> for ElevatorStatus {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => ElevatorStatus::Up,
            Direction::Down => ElevatorStatus::Down,
        }
    }
}

impl fmt::Display for ElevatorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DoorStatus {
    Opened,
    #[default]
    Closed,
}

impl fmt::Display for DoorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DoorStatus::Opened => write!(f, "opened"),
            DoorStatus::Closed => write!(f, "closed"),
        }
    }
}

/// Shared by buttons, displays and the weight/obstruction sensors.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OnOff {
    On,
    #[default]
    Off,
}

impl OnOff {
    pub fn is_on(self) -> bool {
        self == OnOff::On
    }
}

pub type ButtonStatus = OnOff;
pub type DisplayStatus = OnOff;
pub type SensorStatus = OnOff;

/// Operating status of a battery or a column.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActiveStatus {
    #[default]
    Active,
    Inactive,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_a_freshly_installed_car() {
        assert_eq!(ElevatorStatus::default(), ElevatorStatus::Idle);
        assert_eq!(DoorStatus::default(), DoorStatus::Closed);
        assert_eq!(SensorStatus::default(), OnOff::Off);
        assert_eq!(ActiveStatus::default(), ActiveStatus::Active);
    }

    #[test]
    fn opposite_keeps_idle() {
        assert_eq!(ElevatorStatus::Up.opposite(), ElevatorStatus::Down);
        assert_eq!(ElevatorStatus::Down.opposite(), ElevatorStatus::Up);
        assert_eq!(ElevatorStatus::Idle.opposite(), ElevatorStatus::Idle);
    }

    #[test]
    fn status_and_direction_convert_both_ways() {
        for direction in [Direction::Up, Direction::Down] {
            assert_eq!(ElevatorStatus::from(direction).direction(), Some(direction));
        }
        assert_eq!(ElevatorStatus::Idle.direction(), None);
    }

    #[test]
    fn only_on_is_on() {
        assert!(OnOff::On.is_on());
        assert!(!OnOff::Off.is_on());
    }
}
