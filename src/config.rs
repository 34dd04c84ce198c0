/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::ConfigError;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    pub building: BuildingConfig,
    pub elevator: ElevatorConfig,
    pub generator: GeneratorConfig,
}

#[derive(Deserialize, Clone, Debug)]
pub struct BuildingConfig {
    pub n_floors: u8,
    pub n_elevators: u8,
}

/// Timings in milliseconds.
#[derive(Deserialize, Clone, Debug)]
pub struct ElevatorConfig {
    pub floor_travel_time: u64,
    pub dwell_time: u64,
    pub idle_poll_time: u64,
}

#[derive(Deserialize, Clone, Debug)]
pub struct GeneratorConfig {
    pub min_interval: u64,
    pub max_interval: u64,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl ElevatorConfig {
    pub fn floor_travel(&self) -> Duration {
        Duration::from_millis(self.floor_travel_time)
    }

    pub fn dwell(&self) -> Duration {
        Duration::from_millis(self.dwell_time)
    }

    pub fn idle_poll(&self) -> Duration {
        Duration::from_millis(self.idle_poll_time)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            building: BuildingConfig {
                n_floors: 10,
                n_elevators: 3,
            },
            elevator: ElevatorConfig {
                floor_travel_time: 10_000,
                dwell_time: 10_000,
                idle_poll_time: 1_000,
            },
            generator: GeneratorConfig {
                min_interval: 5_000,
                max_interval: 15_000,
                seed: None,
            },
        }
    }
}

impl Config {
    /// Replaces file values with the ones given on the command line.
    pub fn with_overrides(
        mut self,
        n_floors: Option<u8>,
        n_elevators: Option<u8>,
        seed: Option<u64>,
    ) -> Config {
        if let Some(n_floors) = n_floors {
            self.building.n_floors = n_floors;
        }
        if let Some(n_elevators) = n_elevators {
            self.building.n_elevators = n_elevators;
        }
        if seed.is_some() {
            self.generator.seed = seed;
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.building.n_floors == 0 {
            return Err(ConfigError::NoFloors);
        }
        if self.building.n_elevators == 0 {
            return Err(ConfigError::NoElevators);
        }
        if self.elevator.floor_travel_time == 0 {
            return Err(ConfigError::ZeroTravelTime);
        }
        if self.generator.min_interval >= self.generator.max_interval {
            return Err(ConfigError::InvalidInterval {
                min: self.generator.min_interval,
                max: self.generator.max_interval,
            });
        }
        Ok(())
    }
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let config_str = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&config_str)
}

/// Deserializes only. Call `Config::validate` once all overrides are applied.
pub fn parse_config(config_str: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(config_str)?)
}

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod config_tests {
    use super::*;

    const VALID: &str = r#"
        [building]
        n_floors = 5
        n_elevators = 2

        [elevator]
        floor_travel_time = 100
        dwell_time = 200
        idle_poll_time = 10

        [generator]
        min_interval = 50
        max_interval = 150
        seed = 7
    "#;

    #[test]
    fn test_parse_valid_config() {
        let config = parse_config(VALID).unwrap();

        assert_eq!(config.building.n_floors, 5);
        assert_eq!(config.building.n_elevators, 2);
        assert_eq!(config.elevator.floor_travel(), Duration::from_millis(100));
        assert_eq!(config.elevator.dwell(), Duration::from_millis(200));
        assert_eq!(config.generator.seed, Some(7));
    }

    #[test]
    fn test_seed_is_optional() {
        let without_seed = VALID.replace("seed = 7", "");

        let config = parse_config(&without_seed).unwrap();

        assert_eq!(config.generator.seed, None);
    }

    #[test]
    fn test_zero_floors_rejected() {
        let input = VALID.replace("n_floors = 5", "n_floors = 0");

        let config = parse_config(&input).unwrap();

        assert!(matches!(config.validate(), Err(ConfigError::NoFloors)));
    }

    #[test]
    fn test_zero_elevators_rejected() {
        let input = VALID.replace("n_elevators = 2", "n_elevators = 0");

        let config = parse_config(&input).unwrap();

        assert!(matches!(config.validate(), Err(ConfigError::NoElevators)));
    }

    #[test]
    fn test_inverted_interval_rejected() {
        let input = VALID.replace("min_interval = 50", "min_interval = 500");

        match parse_config(&input).unwrap().validate() {
            Err(ConfigError::InvalidInterval { min, max }) => {
                assert_eq!((min, max), (500, 150));
            }
            other => panic!("Expected InvalidInterval, got {:?}", other),
        }
    }

    #[test]
    fn test_override_replaces_invalid_file_value() {
        // Arrange
        let input = VALID
            .replace("n_floors = 5", "n_floors = 0")
            .replace("n_elevators = 2", "n_elevators = 0");
        let config = parse_config(&input).unwrap();

        // Act
        let config = config.with_overrides(Some(8), Some(3), Some(11));

        // Assert
        assert!(config.validate().is_ok());
        assert_eq!(config.building.n_floors, 8);
        assert_eq!(config.building.n_elevators, 3);
        assert_eq!(config.generator.seed, Some(11));
    }

    #[test]
    fn test_override_can_invalidate_file_value() {
        let config = parse_config(VALID).unwrap().with_overrides(Some(0), None, None);

        assert!(matches!(config.validate(), Err(ConfigError::NoFloors)));
    }

    #[test]
    fn test_no_overrides_keep_file_values() {
        let config = parse_config(VALID).unwrap().with_overrides(None, None, None);

        assert_eq!(config.building.n_floors, 5);
        assert_eq!(config.building.n_elevators, 2);
        assert_eq!(config.generator.seed, Some(7));
    }

    #[test]
    fn test_missing_section_is_parse_error() {
        let input = "[building]\nn_floors = 3\nn_elevators = 1\n";

        assert!(matches!(parse_config(input), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let result = load_config(Path::new("does/not/exist.toml"));

        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }
}
