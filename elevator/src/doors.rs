/// ----- DOORS MODULE -----
/// Opens the car door together with the door of the current floor,
/// holds them for the dwell time and closes them again. The doors only
/// close once the car is not overloaded and the doorway is clear; both
/// checks retry with backoff and give up after a bounded number of polls.

use std::thread;

use shared_resources::error::ElevatorError;
use shared_resources::event::{emit, Event};
use shared_resources::status::{DoorStatus, OnOff};

use crate::elevator::Elevator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Interlock {
    Weight,
    Obstruction,
}

impl Elevator {
    pub fn open_doors(&mut self) -> Result<(), ElevatorError> {
        self.set_doors(DoorStatus::Opened);
        emit(&self.events, Event::DoorsOpened { elevator: self.name(), floor: self.floor });
        let dwell = self.settings.door_dwell();
        if !dwell.is_zero() {
            thread::sleep(dwell);
        }
        self.close_doors()
    }

    /// On failure the doors stay open.
    pub fn close_doors(&mut self) -> Result<(), ElevatorError> {
        self.check_weight()?;
        self.check_obstruction()?;
        self.set_doors(DoorStatus::Closed);
        emit(&self.events, Event::DoorsClosed { elevator: self.name(), floor: self.floor });
        Ok(())
    }

    pub fn check_weight(&mut self) -> Result<(), ElevatorError> {
        self.wait_for_clear(Interlock::Weight)
    }

    pub fn check_obstruction(&mut self) -> Result<(), ElevatorError> {
        self.wait_for_clear(Interlock::Obstruction)
    }

    /// Whether the car door or the door of the current floor is open.
    pub fn doors_open(&self) -> bool {
        self.door.is_open() || self.floor_doors.get(self.floor).is_some_and(|door| door.is_open())
    }

    fn set_doors(&mut self, status: DoorStatus) {
        self.door.status = status;
        self.door.floor = self.floor;
        self.floor_doors.update(self.floor, |door| door.status = status);
    }

    fn wait_for_clear(&mut self, interlock: Interlock) -> Result<(), ElevatorError> {
        let policy = self.settings.door_retry;
        let attempts = policy.attempts();
        for attempt in 0..attempts {
            let faulty = match interlock {
                Interlock::Weight => self.sensor.weight_exceeded(),
                Interlock::Obstruction => self.sensor.obstruction_detected(),
            };
            if !faulty {
                self.set_sensor_status(interlock, OnOff::Off);
                let elevator = self.name();
                let event = match interlock {
                    Interlock::Weight => Event::CapacityOk { elevator },
                    Interlock::Obstruction => Event::DoorwayClear { elevator },
                };
                emit(&self.events, event);
                return Ok(());
            }
            self.set_sensor_status(interlock, OnOff::On);
            let elevator = self.name();
            let event = match interlock {
                Interlock::Weight => Event::CapacityExceeded { elevator, attempt },
                Interlock::Obstruction => Event::ObstructionDetected { elevator, attempt },
            };
            emit(&self.events, event);
            // no point waiting after the last poll
            if attempt + 1 < attempts {
                let delay = policy.delay(attempt);
                if !delay.is_zero() {
                    thread::sleep(delay);
                }
            }
        }
        emit(&self.events, Event::DoorBlocked { elevator: self.name(), floor: self.floor, attempts });
        Err(ElevatorError::DoorBlocked { elevator: self.name(), floor: self.floor, attempts })
    }

    fn set_sensor_status(&mut self, interlock: Interlock, status: OnOff) {
        match interlock {
            Interlock::Weight => self.weight_sensor = status,
            Interlock::Obstruction => self.obstruction_sensor = status,
        }
    }
}
