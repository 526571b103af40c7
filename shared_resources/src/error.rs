//! Error types shared by the battery and elevator packages.
//!
//! - [`ConfigError`]: the building description cannot be used. Fatal at startup.
//! - [`DispatchError`]: a column has nobody to send. Cannot happen with a
//!   validated configuration.
//! - [`ElevatorError`]: a call could not be carried out to the end.
//!
//! Each enum offers `as_label` for log fields.

use thiserror::Error;

use crate::floor::Floor;

#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("a battery needs at least one column")]
    NoColumns,

    #[error("columns are named A to Z, {columns} columns is too many")]
    TooManyColumns { columns: u32 },
    #[error("a column needs at least one elevator")]
    NoElevators,

    #[error("total floor count must be positive, got {total_floors}")]
    NoFloors { total_floors: i32 },

    #[error("basement count cannot be negative, got {basements}")]
    NegativeBasements { basements: i32 },

    #[error("{basements} basements leave no floor above ground out of {total_floors}")]
    NoAboveGroundFloors { total_floors: i32, basements: i32 },

    #[error("{above_ground} above-ground floors cannot be split across {columns} columns")]
    TooFewFloors { above_ground: i32, columns: u32 },

    #[error("could not read configuration file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ConfigError {
    pub fn as_label(&self) -> &'static str {
        match self {
            ConfigError::NoColumns => "config_no_columns",
            ConfigError::TooManyColumns { .. } => "config_too_many_columns",
            ConfigError::NoElevators => "config_no_elevators",
            ConfigError::NoFloors { .. } => "config_no_floors",
            ConfigError::NegativeBasements { .. } => "config_negative_basements",
            ConfigError::NoAboveGroundFloors { .. } => "config_no_above_ground_floors",
            ConfigError::TooFewFloors { .. } => "config_too_few_floors",
            ConfigError::Io { .. } => "config_io",
            ConfigError::Parse(_) => "config_parse",
        }
    }
}

#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("column {column} has no elevator to dispatch")]
    NoElevator { column: char },
}

impl DispatchError {
    pub fn as_label(&self) -> &'static str {
        match self {
            DispatchError::NoElevator { .. } => "dispatch_no_elevator",
        }
    }
}

#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ElevatorError {
    /// The doors could not close; the car keeps them open and keeps its queue.
    #[error("elevator {elevator} doors blocked at floor {floor} after {attempts} attempts")]
    DoorBlocked {
        elevator: String,
        floor: Floor,
        attempts: u32,
    },

    #[error("floor {floor} is not served (served range {min}..={max})")]
    FloorNotServed { floor: Floor, min: Floor, max: Floor },

    #[error("no column named {0}")]
    UnknownColumn(char),

    #[error("column {column} has no elevator {elevator}")]
    UnknownElevator { column: char, elevator: u32 },

    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

impl ElevatorError {
    pub fn as_label(&self) -> &'static str {
        match self {
            ElevatorError::DoorBlocked { .. } => "elevator_door_blocked",
            ElevatorError::FloorNotServed { .. } => "elevator_floor_not_served",
            ElevatorError::UnknownColumn(_) => "elevator_unknown_column",
            ElevatorError::UnknownElevator { .. } => "elevator_unknown_elevator",
            ElevatorError::Dispatch(err) => err.as_label(),
        }
    }

    /// Whether the same call may succeed later without any change of input.
    pub fn is_transient(&self) -> bool {
        matches!(self, ElevatorError::DoorBlocked { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_stable() {
        assert_eq!(ConfigError::NoColumns.as_label(), "config_no_columns");
        let blocked = ElevatorError::DoorBlocked { elevator: "B5".into(), floor: 3, attempts: 4 };
        assert_eq!(blocked.as_label(), "elevator_door_blocked");
        let dispatch: ElevatorError = DispatchError::NoElevator { column: 'A' }.into();
        assert_eq!(dispatch.as_label(), "dispatch_no_elevator");
    }

    #[test]
    fn only_blocked_doors_are_transient() {
        let blocked = ElevatorError::DoorBlocked { elevator: "A1".into(), floor: 1, attempts: 1 };
        assert!(blocked.is_transient());
        assert!(!ElevatorError::UnknownColumn('Z').is_transient());
    }

    #[test]
    fn messages_carry_the_details() {
        let err = ElevatorError::FloorNotServed { floor: 70, min: 41, max: 60 };
        assert_eq!(err.to_string(), "floor 70 is not served (served range 41..=60)");
    }
}
