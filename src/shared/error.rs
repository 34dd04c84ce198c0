/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::fmt;
use std::io;
use std::path::PathBuf;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Debug)]
pub enum ConfigError {
    Read { path: PathBuf, source: io::Error },
    Parse(toml::de::Error),
    NoFloors,
    NoElevators,
    ZeroTravelTime,
    InvalidInterval { min: u64, max: u64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read { path, source } => {
                write!(f, "failed to read configuration file {}: {}", path.display(), source)
            }
            ConfigError::Parse(e) => write!(f, "failed to parse configuration file: {}", e),
            ConfigError::NoFloors => write!(f, "a building needs at least one floor"),
            ConfigError::NoElevators => write!(f, "a building needs at least one elevator"),
            ConfigError::ZeroTravelTime => write!(f, "floor_travel_time must be greater than zero"),
            ConfigError::InvalidInterval { min, max } => write!(
                f,
                "request interval range [{}, {}) ms is empty, min_interval must be below max_interval",
                min, max
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Read { source, .. } => Some(source),
            ConfigError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    FloorOutOfRange { floor: u8, n_floors: u8 },
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::FloorOutOfRange { floor, n_floors } => {
                write!(f, "floor {} is outside the building (floors 1..={})", floor, n_floors)
            }
        }
    }
}

impl std::error::Error for DispatchError {}
