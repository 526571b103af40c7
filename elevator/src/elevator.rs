/// ----- ELEVATOR MODULE -----
/// State of one car: where it is, where it is heading, its doors,
/// displays and buttons, and the floors it still has to stop at.
/// Movement lives in `movement.rs`, the interlocks in `doors.rs`.

use std::fmt;

use shared_resources::config::ElevatorSettings;
use shared_resources::devices::{Button, Display, Door, FloorRegistry, HallButtons};
use shared_resources::error::ElevatorError;
use shared_resources::event::{emit, Event, EventSender};
use shared_resources::floor::{served_floors, Floor, LOBBY};
use shared_resources::request_queue::RequestQueue;
use shared_resources::status::{ElevatorStatus, OnOff, SensorStatus};

use crate::sensor::{NoLoadSensor, Sensor, SimulatedSensor};

#[derive(Debug)]
pub struct Elevator {
    /// 1-based within the column.
    pub id: u32,
    pub column: char,
    pub floor: Floor,
    pub status: ElevatorStatus,
    pub door: Door,
    pub display: Display,
    pub weight_sensor: SensorStatus,
    pub obstruction_sensor: SensorStatus,
    pub requests: RequestQueue,
    pub floor_doors: FloorRegistry<Door>,
    pub floor_displays: FloorRegistry<Display>,
    pub floor_buttons: FloorRegistry<Button>,
    pub(crate) min_floor: Floor,
    pub(crate) max_floor: Floor,
    pub(crate) settings: ElevatorSettings,
    pub(crate) sensor: Box<dyn Sensor>,
    pub(crate) events: EventSender,
}

impl Elevator {
    /// A car parked at the lobby, idle with its doors closed. It keeps a
    /// door, a display and a car button for every floor of
    /// `[min_floor, max_floor]` and for the lobby.
    pub fn new(
        id: u32,
        column: char,
        min_floor: Floor,
        max_floor: Floor,
        settings: ElevatorSettings,
        events: EventSender,
    ) -> Self {
        let floors = served_floors(min_floor, max_floor);
        let sensor: Box<dyn Sensor> = if settings.simulate_sensors {
            Box::new(SimulatedSensor::new(settings.max_weight_kg, settings.obstruction_percent))
        } else {
            Box::new(NoLoadSensor)
        };
        let elevator = Elevator {
            id,
            column,
            floor: LOBBY,
            status: ElevatorStatus::Idle,
            door: Door::new(id, LOBBY),
            display: Display::new(id, LOBBY),
            weight_sensor: OnOff::Off,
            obstruction_sensor: OnOff::Off,
            requests: RequestQueue::new(),
            floor_doors: FloorRegistry::from_floors(&floors, Door::new),
            floor_displays: FloorRegistry::from_floors(&floors, |display_id, _| Display::new(display_id, LOBBY)),
            floor_buttons: FloorRegistry::from_floors(&floors, Button::new),
            min_floor,
            max_floor,
            settings,
            sensor,
            events,
        };
        emit(&elevator.events, Event::ElevatorCreated { elevator: elevator.name(), floor: elevator.floor });
        elevator
    }

    /// Column letter followed by the id, e.g. `B5`.
    pub fn name(&self) -> String {
        format!("{}{}", self.column, self.id)
    }

    pub fn set_sensor(&mut self, sensor: impl Sensor + 'static) {
        self.sensor = Box::new(sensor);
    }

    pub fn min_floor(&self) -> Floor {
        self.min_floor
    }

    pub fn max_floor(&self) -> Floor {
        self.max_floor
    }

    pub fn serves(&self, floor: Floor) -> bool {
        self.floor_buttons.contains(floor)
    }

    /// Teleports the car, for setting up a scenario. Displays follow.
    pub fn place(&mut self, floor: Floor, status: ElevatorStatus) -> Result<(), ElevatorError> {
        if !self.serves(floor) {
            return Err(ElevatorError::FloorNotServed {
                floor,
                min: self.min_floor,
                max: self.max_floor,
            });
        }
        self.floor = floor;
        self.set_status(status);
        self.update_displays(floor);
        Ok(())
    }

    pub fn add_floor_to_floor_list(&mut self, floor: Floor) -> bool {
        self.requests.add_floor(floor)
    }

    pub fn delete_floor_from_list(&mut self, floor: Floor) -> bool {
        self.requests.delete_floor(floor)
    }

    pub(crate) fn set_status(&mut self, status: ElevatorStatus) {
        if self.status != status {
            self.status = status;
            emit(&self.events, Event::StatusChanged { elevator: self.name(), status });
        }
    }

    /// Car button pressed inside the elevator.
    pub fn request_floor(&mut self, floor: Floor, hall_buttons: &mut HallButtons) -> Result<(), ElevatorError> {
        if !self.serves(floor) {
            return Err(ElevatorError::FloorNotServed {
                floor,
                min: self.min_floor,
                max: self.max_floor,
            });
        }
        emit(&self.events, Event::FloorRequested { elevator: self.name(), floor });
        if floor == self.floor {
            return Ok(());
        }
        self.floor_buttons.set(floor, OnOff::On);
        self.add_floor_to_floor_list(floor);
        self.move_elevator(floor, hall_buttons)
    }
}

impl fmt::Display for Elevator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "elevator{} | Floor: {} | Status: {}", self.name(), self.floor, self.status)
    }
}
