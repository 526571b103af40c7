//! One elevator car: its state and devices, the sensor boundary, the door
//! interlocks and the movement engine driving it through its request queue.
//!
//! The car is synchronous. A call returns once the queue is empty or the
//! doors could not be closed.

pub mod doors;
pub mod elevator;
pub mod movement;
pub mod sensor;

pub use crate::elevator::Elevator;
pub use crate::sensor::{NoLoadSensor, ScriptedSensor, Sensor, SimulatedSensor};
