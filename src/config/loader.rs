//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading shift
//! configurations from YAML files.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::attendance::select_active_shift;
use crate::error::{EngineError, EngineResult};
use crate::models::ShiftConfig;

use super::types::{AttendanceConfig, ShiftsFile};

/// Loads and provides access to shift configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// └── shifts.yaml   # Shift definitions
/// ```
///
/// `shifts.yaml` holds a `shifts` list:
///
/// ```yaml
/// shifts:
///   - id: general
///     name: General
///     start_time: "09:00"
///     end_time: "18:00"
///     grace_minutes: 15
///     is_ramadan: false
///     is_active: true
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// let shift = loader.active_shift().unwrap();
/// println!("Classifying against {} ({}-{})", shift.name, shift.start_time, shift.end_time);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AttendanceConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/default")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `shifts.yaml` is missing
    /// - the file contains invalid YAML or malformed times
    /// - a shift fails validation or two shifts share an id
    ///
    /// An empty shift list loads successfully; the missing active shift is
    /// reported when attendance is classified.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let shifts_path = path.as_ref().join("shifts.yaml");
        let shifts_file = Self::load_yaml::<ShiftsFile>(&shifts_path)?;

        Self::from_shifts(shifts_file.shifts)
    }

    /// Builds a loader from shifts already in memory, applying the same
    /// validation as [`ConfigLoader::load`].
    pub fn from_shifts(shifts: Vec<ShiftConfig>) -> EngineResult<Self> {
        let mut seen = HashSet::new();
        for shift in &shifts {
            shift.validate()?;
            if !seen.insert(shift.id.as_str()) {
                return Err(EngineError::InvalidShift {
                    shift_id: shift.id.clone(),
                    message: "duplicate shift id".to_string(),
                });
            }
        }

        Ok(Self {
            config: AttendanceConfig::new(shifts),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying attendance configuration.
    pub fn config(&self) -> &AttendanceConfig {
        &self.config
    }

    /// Returns all configured shifts.
    pub fn shifts(&self) -> &[ShiftConfig] {
        self.config.shifts()
    }

    /// Gets a shift by its id.
    ///
    /// Returns [`EngineError::ShiftNotFound`] if no shift has that id.
    pub fn get_shift(&self, shift_id: &str) -> EngineResult<&ShiftConfig> {
        self.shifts()
            .iter()
            .find(|s| s.id == shift_id)
            .ok_or_else(|| EngineError::ShiftNotFound {
                shift_id: shift_id.to_string(),
            })
    }

    /// Returns the shift attendance is classified against.
    ///
    /// See [`select_active_shift`] for the selection rule.
    pub fn active_shift(&self) -> EngineResult<&ShiftConfig> {
        select_active_shift(self.shifts())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn config_path() -> &'static str {
        "./config/default"
    }

    fn write_shifts(yaml: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let mut file = fs::File::create(dir.path().join("shifts.yaml")).unwrap();
        file.write_all(yaml.as_bytes()).unwrap();
        dir
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.shifts().len(), 3);
    }

    #[test]
    fn test_default_general_shift() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let general = loader.get_shift("general").unwrap();

        assert_eq!(general.name, "General");
        assert_eq!(general.start_time.to_string(), "09:00");
        assert_eq!(general.end_time.to_string(), "18:00");
        assert_eq!(general.grace_minutes, 15);
        assert!(general.is_active);
        assert!(!general.is_ramadan);
    }

    #[test]
    fn test_default_active_shift_is_general() {
        // The Ramadan shift ships inactive.
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.active_shift().unwrap().id, "general");
    }

    #[test]
    fn test_get_shift_unknown_returns_error() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        match loader.get_shift("unknown") {
            Err(EngineError::ShiftNotFound { shift_id }) => assert_eq!(shift_id, "unknown"),
            other => panic!("Expected ShiftNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        match ConfigLoader::load("/nonexistent/path") {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("shifts.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_invalid_yaml_returns_parse_error() {
        let dir = write_shifts("shifts: [this is: not: valid");

        assert!(matches!(
            ConfigLoader::load(dir.path()),
            Err(EngineError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn test_load_malformed_time_returns_parse_error() {
        let dir = write_shifts(
            r#"
shifts:
  - id: general
    name: General
    start_time: "nine"
    end_time: "18:00"
"#,
        );

        match ConfigLoader::load(dir.path()) {
            Err(EngineError::ConfigParseError { message, .. }) => {
                assert!(message.contains("nine"), "unexpected message: {}", message);
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_load_zero_length_shift_is_invalid() {
        let dir = write_shifts(
            r#"
shifts:
  - id: broken
    name: Broken
    start_time: "09:00"
    end_time: "09:00"
"#,
        );

        assert!(matches!(
            ConfigLoader::load(dir.path()),
            Err(EngineError::InvalidShift { shift_id, .. }) if shift_id == "broken"
        ));
    }

    #[test]
    fn test_duplicate_ids_are_invalid() {
        let dir = write_shifts(
            r#"
shifts:
  - id: general
    name: General
    start_time: "09:00"
    end_time: "18:00"
  - id: general
    name: General Again
    start_time: "10:00"
    end_time: "19:00"
"#,
        );

        match ConfigLoader::load(dir.path()) {
            Err(EngineError::InvalidShift { shift_id, message }) => {
                assert_eq!(shift_id, "general");
                assert_eq!(message, "duplicate shift id");
            }
            other => panic!("Expected InvalidShift, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_shift_list_loads_but_has_no_active_shift() {
        let dir = write_shifts("shifts: []\n");

        let loader = ConfigLoader::load(dir.path()).unwrap();
        assert!(matches!(
            loader.active_shift(),
            Err(EngineError::NoActiveShift)
        ));
    }

    #[test]
    fn test_active_ramadan_shift_preferred() {
        let dir = write_shifts(
            r#"
shifts:
  - id: general
    name: General
    start_time: "09:00"
    end_time: "18:00"
  - id: ramadan
    name: Ramadan
    start_time: "09:00"
    end_time: "15:00"
    grace_minutes: 10
    is_ramadan: true
"#,
        );

        let loader = ConfigLoader::load(dir.path()).unwrap();
        let active = loader.active_shift().unwrap();
        assert_eq!(active.id, "ramadan");
        assert_eq!(active.grace_minutes, 10);
    }
}
