/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::warn;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/***************************************/
/*             Constants               */
/***************************************/
pub const DEFAULT_MIN_FLOOR: i32 = 1;
pub const DEFAULT_MAX_FLOOR: i32 = 5;
pub const DEFAULT_STEP_DELAY_MS: u64 = 500;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub elevator: ElevatorConfig,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ElevatorConfig {
    pub min_floor: i32,
    pub max_floor: i32,
    pub step_delay_ms: u64,
}

impl Default for ElevatorConfig {
    fn default() -> ElevatorConfig {
        ElevatorConfig {
            min_floor: DEFAULT_MIN_FLOOR,
            max_floor: DEFAULT_MAX_FLOOR,
            step_delay_ms: DEFAULT_STEP_DELAY_MS,
        }
    }
}

impl ElevatorConfig {
    pub fn contains(&self, floor: i32) -> bool {
        floor >= self.min_floor && floor <= self.max_floor
    }

    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid floor range: min_floor {min} is above max_floor {max}")]
    InvalidRange { min: i32, max: i32 },
}

/***************************************/
/*             Public API              */
/***************************************/

/// Loads the configuration from `path`. A missing file is not an error, the
/// defaults are used instead.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    match fs::read_to_string(path) {
        Ok(config_str) => parse_config(&config_str),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!(
                "No configuration file at {}, using default settings",
                path.display()
            );
            Ok(Config::default())
        }
        Err(e) => Err(ConfigError::Io(e)),
    }
}

pub fn parse_config(config_str: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(config_str)?;
    if config.elevator.min_floor > config.elevator.max_floor {
        return Err(ConfigError::InvalidRange {
            min: config.elevator.min_floor,
            max: config.elevator.max_floor,
        });
    }
    Ok(config)
}

/***************************************/
/*             Unit tests              */
/***************************************/
