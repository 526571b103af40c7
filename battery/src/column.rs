use std::fmt;

use elevator::Elevator;
use shared_resources::call::Direction;
use shared_resources::config::ElevatorSettings;
use shared_resources::devices::HallButtons;
use shared_resources::error::{DispatchError, ElevatorError};
use shared_resources::event::{emit, Event, EventSender};
use shared_resources::floor::{served_floors, Floor};
use shared_resources::status::{ActiveStatus, OnOff};

use crate::dispatcher;
use crate::topology::ColumnSpec;

/// A group of elevators sharing one range of floors and one set of hall
/// buttons.
#[derive(Debug)]
pub struct Column {
    pub id: u32,
    pub name: char,
    pub status: ActiveStatus,
    pub min_floor: Floor,
    pub max_floor: Floor,
    pub served_floors: u32,
    pub elevators: Vec<Elevator>,
    pub hall_buttons: HallButtons,
    events: EventSender,
}

impl Column {
    pub fn new(spec: &ColumnSpec, elevators_per_column: u32, settings: &ElevatorSettings, events: EventSender) -> Self {
        emit(&events, Event::ColumnCreated {
            column: spec.name,
            min_floor: spec.min_floor,
            max_floor: spec.max_floor,
            served_floors: spec.served_floors,
        });
        let elevators = (1..=elevators_per_column)
            .map(|id| Elevator::new(id, spec.name, spec.min_floor, spec.max_floor, settings.clone(), events.clone()))
            .collect();
        Column {
            id: spec.id,
            name: spec.name,
            status: ActiveStatus::Active,
            min_floor: spec.min_floor,
            max_floor: spec.max_floor,
            served_floors: spec.served_floors,
            elevators,
            hall_buttons: HallButtons::new(&served_floors(spec.min_floor, spec.max_floor)),
            events,
        }
    }

    /// Whether the column has hall buttons on `floor`.
    pub fn serves(&self, floor: Floor) -> bool {
        self.hall_buttons.up.contains(floor)
    }

    pub fn elevator(&self, id: u32) -> Option<&Elevator> {
        self.elevators.iter().find(|elevator| elevator.id == id)
    }

    pub fn elevator_mut(&mut self, id: u32) -> Option<&mut Elevator> {
        self.elevators.iter_mut().find(|elevator| elevator.id == id)
    }

    pub fn elevator_index(&self, id: u32) -> Option<usize> {
        self.elevators.iter().position(|elevator| elevator.id == id)
    }

    pub fn select_elevator(&self, floor: Floor, direction: Direction) -> Result<usize, DispatchError> {
        dispatcher::select_elevator(self.name, &self.elevators, floor, direction)
    }

    /// Hall button pressed on `floor`. Sends the best elevator, drives it
    /// until its queue is empty and returns its index.
    pub fn request_elevator(&mut self, floor: Floor, direction: Direction) -> Result<usize, ElevatorError> {
        if !self.serves(floor) {
            return Err(self.not_served(floor));
        }
        self.hall_buttons.set(direction, floor, OnOff::On);
        emit(&self.events, Event::ElevatorRequested { column: self.name, floor, direction });

        let index = self.select_elevator(floor, direction)?;
        let elevator = &mut self.elevators[index];
        emit(&self.events, Event::ElevatorCalled {
            column: self.name,
            elevator: elevator.name(),
            floor,
            direction,
        });
        // a car already standing here is served in place by move_elevator
        elevator.add_floor_to_floor_list(floor);
        elevator.move_elevator(floor, &mut self.hall_buttons)?;
        Ok(index)
    }

    /// Car button `floor` pressed inside the elevator at `elevator_index`.
    pub fn request_floor(&mut self, elevator_index: usize, floor: Floor) -> Result<(), ElevatorError> {
        let name = self.name;
        let elevator = self
            .elevators
            .get_mut(elevator_index)
            .ok_or(ElevatorError::UnknownElevator { column: name, elevator: elevator_index as u32 + 1 })?;
        elevator.request_floor(floor, &mut self.hall_buttons)
    }

    fn not_served(&self, floor: Floor) -> ElevatorError {
        ElevatorError::FloorNotServed { floor, min: self.min_floor, max: self.max_floor }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "column{} | Floors: {} to {} | Served floors: {} | Elevators: {}",
            self.name,
            self.min_floor,
            self.max_floor,
            self.served_floors,
            self.elevators.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use elevator::ScriptedSensor;
    use shared_resources::event::discard;
    use shared_resources::status::ElevatorStatus;

    fn residential() -> Column {
        let spec = ColumnSpec { id: 1, name: 'A', min_floor: 1, max_floor: 10, served_floors: 10 };
        Column::new(&spec, 2, &ElevatorSettings::instant(), discard())
    }

    #[test]
    fn elevators_are_numbered_from_one() {
        let column = residential();
        let ids: Vec<u32> = column.elevators.iter().map(|elevator| elevator.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(column.elevator_index(2), Some(1));
        assert!(column.elevator(3).is_none());
    }

    #[test]
    fn hall_call_brings_the_car_and_turns_the_button_off() {
        let mut column = residential();
        column.elevators[1].place(8, ElevatorStatus::Idle).unwrap();
        let index = column.request_elevator(7, Direction::Down).unwrap();
        assert_eq!(index, 1);
        assert_eq!(column.elevators[1].floor, 7);
        assert_eq!(column.hall_buttons.status(Direction::Down, 7), Some(OnOff::Off));
    }

    #[test]
    fn car_already_there_opens_in_place() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let spec = ColumnSpec { id: 1, name: 'A', min_floor: 1, max_floor: 10, served_floors: 10 };
        let mut column = Column::new(&spec, 2, &ElevatorSettings::instant(), tx);
        let index = column.request_elevator(1, Direction::Up).unwrap();
        assert_eq!(index, 0);
        let events: Vec<Event> = rx.try_iter().collect();
        assert!(events.iter().any(|event| matches!(event, Event::DoorsOpened { floor: 1, .. })));
        assert!(!events.iter().any(|event| matches!(event, Event::Moved { .. })));
        assert_eq!(column.hall_buttons.lit(Direction::Up), Vec::<Floor>::new());
    }

    #[test]
    fn car_jammed_at_its_last_stop_goes_idle_and_is_passed_over() {
        let mut column = residential();
        column.elevators[0].set_sensor(ScriptedSensor::new().stuck_obstruction());
        let err = column.request_floor(0, 5).unwrap_err();
        assert!(err.is_transient());

        let jammed = &column.elevators[0];
        assert_eq!(jammed.floor, 5);
        assert_eq!(jammed.status, ElevatorStatus::Idle);
        assert!(jammed.requests.is_empty());
        assert!(jammed.doors_open());

        column.elevators[1].place(7, ElevatorStatus::Idle).unwrap();
        assert_eq!(column.request_elevator(7, Direction::Up), Ok(1));
        assert_eq!(column.hall_buttons.status(Direction::Up, 7), Some(OnOff::Off));
        assert!(column.elevators[0].requests.is_empty());
    }

    #[test]
    fn unserved_floors_are_rejected() {
        let mut column = residential();
        assert_eq!(
            column.request_elevator(11, Direction::Up),
            Err(ElevatorError::FloorNotServed { floor: 11, min: 1, max: 10 })
        );
        assert_eq!(
            column.request_floor(0, 12),
            Err(ElevatorError::FloorNotServed { floor: 12, min: 1, max: 10 })
        );
    }

    #[test]
    fn unknown_elevator_index_is_an_error() {
        let mut column = residential();
        assert_eq!(
            column.request_floor(5, 3),
            Err(ElevatorError::UnknownElevator { column: 'A', elevator: 6 })
        );
    }

    #[test]
    fn display_summarises_the_column() {
        assert_eq!(
            residential().to_string(),
            "columnA | Floors: 1 to 10 | Served floors: 10 | Elevators: 2"
        );
    }
}
