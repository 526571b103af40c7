//! Replays the `scenario` section of the configuration against a battery:
//! elevators are placed first, then every call runs to completion in order.

use shared_resources::config::{CallConfig, ElevatorSetup};
use shared_resources::error::ElevatorError;
use shared_resources::floor::Floor;

use crate::battery::Battery;

/// What a replayed call led to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Hall call answered by `elevator`.
    Dispatched { elevator: String, floor: Floor },
    /// Car call carried out by `elevator`.
    Arrived { elevator: String, floor: Floor },
}

pub fn apply_setup(battery: &mut Battery, setup: &[ElevatorSetup]) -> Result<(), ElevatorError> {
    for placement in setup {
        battery.apply_setup(placement)?;
    }
    Ok(())
}

pub fn replay_call(battery: &mut Battery, call: &CallConfig) -> Result<Outcome, ElevatorError> {
    match *call {
        CallConfig::Hall { column, floor, direction } => {
            let index = battery.request_elevator(column, floor, direction)?;
            let elevator = battery
                .column(column)
                .and_then(|column| column.elevators.get(index))
                .map(|elevator| elevator.name())
                .ok_or(ElevatorError::UnknownColumn(column))?;
            Ok(Outcome::Dispatched { elevator, floor })
        }
        CallConfig::Car { column, elevator, floor } => {
            battery.request_floor(column, elevator, floor)?;
            Ok(Outcome::Arrived { elevator: format!("{}{}", column, elevator), floor })
        }
    }
}

/// Replays every call, carrying on after a failed one.
pub fn run(battery: &mut Battery, calls: &[CallConfig]) -> Vec<Result<Outcome, ElevatorError>> {
    calls.iter().map(|call| replay_call(battery, call)).collect()
}
