use std::fmt;

use shared_resources::call::Direction;
use shared_resources::config::{BuildingConfig, Config, ElevatorSettings, ElevatorSetup};
use shared_resources::error::{ConfigError, ElevatorError};
use shared_resources::event::{emit, Event, EventSender};
use shared_resources::floor::Floor;
use shared_resources::status::ActiveStatus;

use crate::column::Column;
use crate::topology::compute_layout;

/// Every column of a building, built once from a validated configuration.
#[derive(Debug)]
pub struct Battery {
    pub id: u32,
    pub status: ActiveStatus,
    pub building: BuildingConfig,
    pub columns: Vec<Column>,
}

impl Battery {
    pub fn new(building: BuildingConfig, settings: &ElevatorSettings, events: EventSender) -> Result<Self, ConfigError> {
        building.validate()?;
        emit(&events, Event::BatteryCreated {
            battery: building.battery_id,
            columns: building.columns,
            basements: building.basements,
            elevators_per_column: building.elevators_per_column,
        });
        let columns = compute_layout(&building)
            .iter()
            .map(|spec| Column::new(spec, building.elevators_per_column, settings, events.clone()))
            .collect();
        Ok(Battery {
            id: building.battery_id,
            status: ActiveStatus::Active,
            building,
            columns,
        })
    }

    pub fn from_config(config: &Config, events: EventSender) -> Result<Self, ConfigError> {
        Battery::new(config.building.clone(), &config.elevator, events)
    }

    pub fn column(&self, name: char) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn column_mut(&mut self, name: char) -> Option<&mut Column> {
        self.columns.iter_mut().find(|column| column.name == name)
    }

    /// First column whose floor range holds `floor`. The lobby belongs to
    /// the basement column when there is one.
    pub fn find_column(&self, floor: Floor) -> Option<&Column> {
        self.columns
            .iter()
            .find(|column| column.min_floor <= floor && floor <= column.max_floor)
    }

    pub fn request_elevator(&mut self, column: char, floor: Floor, direction: Direction) -> Result<usize, ElevatorError> {
        self.column_mut(column)
            .ok_or(ElevatorError::UnknownColumn(column))?
            .request_elevator(floor, direction)
    }

    /// Car call from elevator `elevator_id` (1-based) of `column`.
    pub fn request_floor(&mut self, column: char, elevator_id: u32, floor: Floor) -> Result<(), ElevatorError> {
        let target = self.column_mut(column).ok_or(ElevatorError::UnknownColumn(column))?;
        let index = target
            .elevator_index(elevator_id)
            .ok_or(ElevatorError::UnknownElevator { column, elevator: elevator_id })?;
        target.request_floor(index, floor)
    }

    /// Places one elevator and queues its pending floors without moving it.
    pub fn apply_setup(&mut self, setup: &ElevatorSetup) -> Result<(), ElevatorError> {
        let column = self
            .column_mut(setup.column)
            .ok_or(ElevatorError::UnknownColumn(setup.column))?;
        let elevator = column
            .elevator_mut(setup.elevator)
            .ok_or(ElevatorError::UnknownElevator { column: setup.column, elevator: setup.elevator })?;
        if let Some(floor) = std::iter::once(&setup.floor)
            .chain(&setup.targets)
            .find(|floor| !elevator.serves(**floor))
        {
            return Err(ElevatorError::FloorNotServed {
                floor: *floor,
                min: elevator.min_floor(),
                max: elevator.max_floor(),
            });
        }
        elevator.place(setup.floor, setup.status)?;
        for floor in &setup.targets {
            elevator.add_floor_to_floor_list(*floor);
        }
        Ok(())
    }
}

impl fmt::Display for Battery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = match self.status {
            ActiveStatus::Active => "active",
            ActiveStatus::Inactive => "inactive",
        };
        write!(
            f,
            "battery{} | Status: {} | Columns: {} | Floors: {} ({} basements)",
            self.id,
            status,
            self.columns.len(),
            self.building.total_floors,
            self.building.basements
        )
    }
}
