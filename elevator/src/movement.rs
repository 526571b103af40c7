/// ----- MOVEMENT MODULE -----
/// Drives a car floor by floor until its request queue is empty.
/// Going up the car heads for the highest queued floor, going down for
/// the lowest, stopping at every queued floor on the way. When a run is
/// over and floors remain, the car turns around.

use shared_resources::call::Direction;
use shared_resources::devices::HallButtons;
use shared_resources::error::ElevatorError;
use shared_resources::event::{emit, Event};
use shared_resources::floor::{next_floor, Floor};
use shared_resources::status::{ElevatorStatus, OnOff};

use crate::elevator::Elevator;

impl Elevator {
    /// Serves the queue to the end. An idle car heads for `requested_floor`
    /// while it is queued, otherwise for the nearest queued floor.
    pub fn move_elevator(&mut self, requested_floor: Floor, hall_buttons: &mut HallButtons) -> Result<(), ElevatorError> {
        while !self.requests.is_empty() {
            match self.status {
                ElevatorStatus::Idle => {
                    let target = if self.requests.contains(requested_floor) {
                        requested_floor
                    } else {
                        match self.requests.nearest_to(self.floor) {
                            Some(floor) => floor,
                            None => break,
                        }
                    };
                    if target > self.floor {
                        self.set_status(ElevatorStatus::Up);
                    } else if target < self.floor {
                        self.set_status(ElevatorStatus::Down);
                    } else {
                        self.stop_at(target, hall_buttons)?;
                    }
                }
                ElevatorStatus::Up => self.move_up(hall_buttons)?,
                ElevatorStatus::Down => self.move_down(hall_buttons)?,
            }
        }
        self.set_status(ElevatorStatus::Idle);
        Ok(())
    }

    pub fn move_up(&mut self, hall_buttons: &mut HallButtons) -> Result<(), ElevatorError> {
        self.run(Direction::Up, hall_buttons)
    }

    pub fn move_down(&mut self, hall_buttons: &mut HallButtons) -> Result<(), ElevatorError> {
        self.run(Direction::Down, hall_buttons)
    }

    fn run(&mut self, direction: Direction, hall_buttons: &mut HallButtons) -> Result<(), ElevatorError> {
        let result = self.run_towards(direction, hall_buttons);
        // a car stuck at its last stop has nowhere left to go
        if result.is_err() && self.requests.is_empty() {
            self.set_status(ElevatorStatus::Idle);
        }
        result
    }

    fn run_towards(&mut self, direction: Direction, hall_buttons: &mut HallButtons) -> Result<(), ElevatorError> {
        if self.requests.contains(self.floor) {
            self.stop_at(self.floor, hall_buttons)?;
        }
        loop {
            let ahead = match direction {
                Direction::Up => self.requests.highest().is_some_and(|top| top > self.floor),
                Direction::Down => self.requests.lowest().is_some_and(|bottom| bottom < self.floor),
            };
            if !ahead {
                break;
            }
            if self.doors_open() {
                self.close_doors()?;
            }
            let from = self.floor;
            self.floor = next_floor(from, direction);
            emit(&self.events, Event::Moved { elevator: self.name(), from, to: self.floor });
            self.update_displays(self.floor);
            if self.requests.contains(self.floor) {
                self.stop_at(self.floor, hall_buttons)?;
            }
        }
        let next = if self.requests.is_empty() {
            ElevatorStatus::Idle
        } else {
            ElevatorStatus::from(direction.opposite())
        };
        self.set_status(next);
        Ok(())
    }

    /// Stamps `floor` on the car display and on every floor display.
    pub fn update_displays(&mut self, floor: Floor) {
        self.display.floor = floor;
        for display in self.floor_displays.iter_mut() {
            display.floor = floor;
        }
        emit(&self.events, Event::DisplaysUpdated { elevator: self.name(), floor });
    }

    /// Serves `floor`: dequeues it, turns off its hall and car buttons and
    /// cycles the doors.
    pub(crate) fn stop_at(&mut self, floor: Floor, hall_buttons: &mut HallButtons) -> Result<(), ElevatorError> {
        emit(&self.events, Event::FloorReached { elevator: self.name(), floor });
        self.delete_floor_from_list(floor);
        hall_buttons.clear_floor(floor);
        self.floor_buttons.set(floor, OnOff::Off);
        self.open_doors()
    }
}
