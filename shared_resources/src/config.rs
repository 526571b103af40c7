use std::env;
use std::fs;
use std::time::Duration;

use crate::backoff::RetryPolicy;
use crate::call::Direction;
use crate::error::ConfigError;
use crate::floor::Floor;
use crate::status::ElevatorStatus;

const CONFIG_FILE: &str = "config.json";
const FALLBACK_CONFIG_FILE: &str = "_config.json";

/// One letter per column, `A` to `Z`.
pub const MAX_COLUMNS: u32 = 26;

/// Shape of the building. Validated once, immutable afterwards.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BuildingConfig {
    pub battery_id: u32,
    pub columns: u32,
    /// Above-ground floors plus basements.
    pub total_floors: i32,
    pub basements: i32,
    pub elevators_per_column: u32,
}

impl BuildingConfig {
    pub fn above_ground_floors(&self) -> i32 {
        self.total_floors - self.basements
    }

    pub fn has_basements(&self) -> bool {
        self.basements > 0
    }

    /// Columns sharing the above-ground floors.
    pub fn above_ground_columns(&self) -> u32 {
        if self.has_basements() && self.columns > 1 {
            self.columns - 1
        } else {
            self.columns
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns == 0 {
            return Err(ConfigError::NoColumns);
        }
        if self.columns > MAX_COLUMNS {
            return Err(ConfigError::TooManyColumns { columns: self.columns });
        }
        if self.elevators_per_column == 0 {
            return Err(ConfigError::NoElevators);
        }
        if self.total_floors <= 0 {
            return Err(ConfigError::NoFloors { total_floors: self.total_floors });
        }
        if self.basements < 0 {
            return Err(ConfigError::NegativeBasements { basements: self.basements });
        }
        let above_ground = self.above_ground_floors();
        if above_ground <= 0 {
            return Err(ConfigError::NoAboveGroundFloors {
                total_floors: self.total_floors,
                basements: self.basements,
            });
        }
        if (above_ground as i64) < self.above_ground_columns() as i64 {
            return Err(ConfigError::TooFewFloors {
                above_ground,
                columns: self.above_ground_columns(),
            });
        }
        Ok(())
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ElevatorSettings {
    /// How long doors stay open before a close attempt.
    pub door_dwell_ms: u64,
    pub max_weight_kg: u32,
    /// Chance, in percent, that the simulated doorway is obstructed.
    pub obstruction_percent: u32,
    /// Use random weight/obstruction readings instead of an always-clear sensor.
    pub simulate_sensors: bool,
    pub door_retry: RetryPolicy,
}

impl Default for ElevatorSettings {
    fn default() -> Self {
        ElevatorSettings {
            door_dwell_ms: 1_000,
            max_weight_kg: 500,
            obstruction_percent: 30,
            simulate_sensors: false,
            door_retry: RetryPolicy::default(),
        }
    }
}

impl ElevatorSettings {
    /// No dwell and no backoff: calls resolve instantly.
    pub fn instant() -> Self {
        ElevatorSettings {
            door_dwell_ms: 0,
            door_retry: RetryPolicy::immediate(3),
            ..ElevatorSettings::default()
        }
    }

    pub fn door_dwell(&self) -> Duration {
        Duration::from_millis(self.door_dwell_ms)
    }
}

/// Places an elevator before the calls are replayed.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ElevatorSetup {
    pub column: char,
    /// 1-based id within the column.
    pub elevator: u32,
    pub floor: Floor,
    #[serde(default)]
    pub status: ElevatorStatus,
    #[serde(default)]
    pub targets: Vec<Floor>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CallConfig {
    Hall {
        column: char,
        floor: Floor,
        direction: Direction,
    },
    Car {
        column: char,
        elevator: u32,
        floor: Floor,
    },
}

impl CallConfig {
    pub fn column(&self) -> char {
        match self {
            CallConfig::Hall { column, .. } | CallConfig::Car { column, .. } => *column,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ScenarioConfig {
    pub setup: Vec<ElevatorSetup>,
    pub calls: Vec<CallConfig>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    pub building: BuildingConfig,
    #[serde(default)]
    pub elevator: ElevatorSettings,
    #[serde(default)]
    pub scenario: ScenarioConfig,
}

impl Config {
    /// Reads the configuration file and applies command line overrides.
    ///
    /// Returns the validated config and a note for every skipped argument.
    pub fn get() -> Result<(Self, Vec<String>), ConfigError> {
        let args: Vec<String> = env::args().skip(1).collect();
        let path = config_path(&args);
        let mut config = match path {
            Some(path) => Config::load(&path)?,
            None => match Config::load(CONFIG_FILE) {
                Ok(config) => config,
                Err(ConfigError::Io { .. }) => Config::load(FALLBACK_CONFIG_FILE)?,
                Err(err) => return Err(err),
            },
        };
        let skipped = config.apply_args(&args);
        config.building.validate()?;
        Ok((config, skipped))
    }

    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Config::from_json(&contents)
    }

    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Applies `--flag value` pairs on top of the file settings.
    pub fn apply_args(&mut self, args: &[String]) -> Vec<String> {
        let mut skipped = Vec::new();
        for arg_pair in args.chunks(2) {
            let (flag, value) = match arg_pair {
                [flag, value] => (flag.as_str(), value.as_str()),
                [flag] => {
                    skipped.push(format!("argument {} has no value, skipping...", flag));
                    continue;
                }
                _ => continue,
            };
            let building = &mut self.building;
            let parsed = match flag {
                "--config" => Ok(()),
                "--battery" => value.parse().map(|v| building.battery_id = v),
                "--columns" => value.parse().map(|v| building.columns = v),
                "--floors" => value.parse().map(|v| building.total_floors = v),
                "--basements" => value.parse().map(|v| building.basements = v),
                "--elevators" => value.parse().map(|v| building.elevators_per_column = v),
                _ => {
                    skipped.push(format!("illegal argument {}, skipping...", flag));
                    continue;
                }
            };
            if parsed.is_err() {
                skipped.push(format!("{} {} is not a number, skipping...", flag, value));
            }
        }
        skipped
    }
}

fn config_path(args: &[String]) -> Option<String> {
    args.chunks_exact(2)
        .find(|pair| pair[0] == "--config")
        .map(|pair| pair[1].clone())
}
