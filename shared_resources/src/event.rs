//! # Structured events emitted by the battery, its columns and its elevators.
//!
//! Components never print. They push [`Event`]s on a `crossbeam_channel`
//! sender and whoever holds the receiving end decides what to do with them
//! (log, render, assert in tests). A sender whose receiver is gone simply
//! drops events.

use crossbeam_channel::{unbounded, Sender};

use crate::call::Direction;
use crate::floor::Floor;
use crate::status::ElevatorStatus;

pub type EventSender = Sender<Event>;

/// Severity used by consumers to pick a log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    BatteryCreated {
        battery: u32,
        columns: u32,
        basements: i32,
        elevators_per_column: u32,
    },
    ColumnCreated {
        column: char,
        min_floor: Floor,
        max_floor: Floor,
        served_floors: u32,
    },
    ElevatorCreated {
        elevator: String,
        floor: Floor,
    },
    /// A hall button was pressed.
    ElevatorRequested {
        column: char,
        floor: Floor,
        direction: Direction,
    },
    /// The dispatcher picked `elevator` for a hall call.
    ElevatorCalled {
        column: char,
        elevator: String,
        floor: Floor,
        direction: Direction,
    },
    /// A car button was pressed.
    FloorRequested {
        elevator: String,
        floor: Floor,
    },
    StatusChanged {
        elevator: String,
        status: ElevatorStatus,
    },
    Moved {
        elevator: String,
        from: Floor,
        to: Floor,
    },
    DisplaysUpdated {
        elevator: String,
        floor: Floor,
    },
    FloorReached {
        elevator: String,
        floor: Floor,
    },
    DoorsOpened {
        elevator: String,
        floor: Floor,
    },
    DoorsClosed {
        elevator: String,
        floor: Floor,
    },
    CapacityExceeded {
        elevator: String,
        attempt: u32,
    },
    CapacityOk {
        elevator: String,
    },
    ObstructionDetected {
        elevator: String,
        attempt: u32,
    },
    DoorwayClear {
        elevator: String,
    },
    DoorBlocked {
        elevator: String,
        floor: Floor,
        attempts: u32,
    },
}

impl Event {
    pub fn as_label(&self) -> &'static str {
        match self {
            Event::BatteryCreated { .. } => "battery_created",
            Event::ColumnCreated { .. } => "column_created",
            Event::ElevatorCreated { .. } => "elevator_created",
            Event::ElevatorRequested { .. } => "elevator_requested",
            Event::ElevatorCalled { .. } => "elevator_called",
            Event::FloorRequested { .. } => "floor_requested",
            Event::StatusChanged { .. } => "status_changed",
            Event::Moved { .. } => "moved",
            Event::DisplaysUpdated { .. } => "displays_updated",
            Event::FloorReached { .. } => "floor_reached",
            Event::DoorsOpened { .. } => "doors_opened",
            Event::DoorsClosed { .. } => "doors_closed",
            Event::CapacityExceeded { .. } => "capacity_exceeded",
            Event::CapacityOk { .. } => "capacity_ok",
            Event::ObstructionDetected { .. } => "obstruction_detected",
            Event::DoorwayClear { .. } => "doorway_clear",
            Event::DoorBlocked { .. } => "door_blocked",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Event::CapacityExceeded { .. } | Event::ObstructionDetected { .. } => Severity::Warning,
            Event::DoorBlocked { .. } => Severity::Error,
            _ => Severity::Info,
        }
    }
}

/// Sends `event`, ignoring a disconnected receiver.
pub fn emit(events: &EventSender, event: Event) {
    let _ = events.send(event);
}

/// A sender nobody listens to.
pub fn discard() -> EventSender {
    let (tx, _) = unbounded();
    tx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emitting_without_a_listener_is_harmless() {
        let events = discard();
        emit(&events, Event::CapacityOk { elevator: "A1".into() });
    }

    #[test]
    fn events_serialize_with_a_tag() {
        let event = Event::FloorReached { elevator: "B5".into(), floor: 1 };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"event":"floor_reached","elevator":"B5","floor":1}"#);
        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn sensor_faults_are_warnings() {
        let warning = Event::ObstructionDetected { elevator: "C2".into(), attempt: 0 };
        assert_eq!(warning.severity(), Severity::Warning);
        let blocked = Event::DoorBlocked { elevator: "C2".into(), floor: 4, attempts: 3 };
        assert_eq!(blocked.severity(), Severity::Error);
        assert_eq!(blocked.as_label(), "door_blocked");
    }
}
