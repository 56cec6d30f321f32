//! Configuration types for attendance classification.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::models::ShiftConfig;

/// Shifts configuration file structure (`shifts.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct ShiftsFile {
    /// Configured shifts, in the order they were defined.
    pub shifts: Vec<ShiftConfig>,
}

/// The complete attendance configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct AttendanceConfig {
    /// Shifts in configuration order.
    shifts: Vec<ShiftConfig>,
}

impl AttendanceConfig {
    /// Creates a new AttendanceConfig from its shifts.
    pub fn new(shifts: Vec<ShiftConfig>) -> Self {
        Self { shifts }
    }

    /// Returns all configured shifts.
    pub fn shifts(&self) -> &[ShiftConfig] {
        &self.shifts
    }
}
