/// ----- SENSOR MODULE -----
/// The door interlocks poll a `Sensor` before the doors may close. The
/// hardware is out of reach here, so the trait has three stand-ins: a car
/// that is never loaded, a scripted one for deterministic runs and a
/// simulated one drawing random readings.

use std::collections::VecDeque;
use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait Sensor: Send + fmt::Debug {
    fn weight_exceeded(&mut self) -> bool;
    fn obstruction_detected(&mut self) -> bool;
}

/// Always reports an empty car and a free doorway.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLoadSensor;

impl Sensor for NoLoadSensor {
    fn weight_exceeded(&mut self) -> bool {
        false
    }

    fn obstruction_detected(&mut self) -> bool {
        false
    }
}

/// Replays fixed readings, one per poll. Once a script runs out, the
/// matching fallback reading is returned forever.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSensor {
    weight: VecDeque<bool>,
    obstruction: VecDeque<bool>,
    weight_fallback: bool,
    obstruction_fallback: bool,
}

impl ScriptedSensor {
    pub fn new() -> Self {
        ScriptedSensor::default()
    }

    pub fn with_weight(mut self, readings: &[bool]) -> Self {
        self.weight.extend(readings);
        self
    }

    pub fn with_obstruction(mut self, readings: &[bool]) -> Self {
        self.obstruction.extend(readings);
        self
    }

    /// Something sits in the doorway for good.
    pub fn stuck_obstruction(mut self) -> Self {
        self.obstruction_fallback = true;
        self
    }

    /// The car stays overloaded for good.
    pub fn stuck_overweight(mut self) -> Self {
        self.weight_fallback = true;
        self
    }
}

impl Sensor for ScriptedSensor {
    fn weight_exceeded(&mut self) -> bool {
        self.weight.pop_front().unwrap_or(self.weight_fallback)
    }

    fn obstruction_detected(&mut self) -> bool {
        self.obstruction.pop_front().unwrap_or(self.obstruction_fallback)
    }
}

/// Random readings: a load drawn in `0..max_weight_kg + 100` and an
/// obstruction with probability `obstruction_percent`.
#[derive(Debug, Clone)]
pub struct SimulatedSensor {
    rng: StdRng,
    max_weight_kg: u32,
    obstruction_percent: u32,
}

impl SimulatedSensor {
    pub fn new(max_weight_kg: u32, obstruction_percent: u32) -> Self {
        SimulatedSensor {
            rng: StdRng::from_entropy(),
            max_weight_kg,
            obstruction_percent: obstruction_percent.min(100),
        }
    }

    pub fn seeded(seed: u64, max_weight_kg: u32, obstruction_percent: u32) -> Self {
        SimulatedSensor {
            rng: StdRng::seed_from_u64(seed),
            ..SimulatedSensor::new(max_weight_kg, obstruction_percent)
        }
    }
}

impl Sensor for SimulatedSensor {
    fn weight_exceeded(&mut self) -> bool {
        let weight = self.rng.gen_range(0..self.max_weight_kg + 100);
        weight > self.max_weight_kg
    }

    fn obstruction_detected(&mut self) -> bool {
        self.rng.gen_range(0..100) < self.obstruction_percent
    }
}
