//! Shift configuration model.
//!
//! This module defines the [`ShiftConfig`] struct describing a named daily
//! work window that attendance is classified against.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::time_of_day::{MINUTES_PER_DAY, TimeOfDay};

fn default_grace_minutes() -> u32 {
    15
}

fn default_true() -> bool {
    true
}

/// A configured work shift.
///
/// Shifts may cross midnight (e.g. `22:00`–`06:00`); the expected duration
/// wraps accordingly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftConfig {
    /// Unique identifier for the shift.
    pub id: String,
    /// Display name (e.g. "General", "Ramadan").
    pub name: String,
    /// Nominal start of the shift.
    pub start_time: TimeOfDay,
    /// Nominal end of the shift.
    pub end_time: TimeOfDay,
    /// Minutes after `start_time` during which a check-in still counts as on time.
    #[serde(default = "default_grace_minutes")]
    pub grace_minutes: u32,
    /// Whether this is the Ramadan variant of the working day.
    #[serde(default)]
    pub is_ramadan: bool,
    /// Whether this shift is eligible for selection.
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl ShiftConfig {
    /// Returns the nominal length of the shift in minutes.
    ///
    /// # Examples
    ///
    /// ```
    /// use attendance_engine::models::ShiftConfig;
    ///
    /// let night = ShiftConfig {
    ///     id: "night".to_string(),
    ///     name: "Night".to_string(),
    ///     start_time: "22:00".parse().unwrap(),
    ///     end_time: "06:00".parse().unwrap(),
    ///     grace_minutes: 10,
    ///     is_ramadan: false,
    ///     is_active: true,
    /// };
    /// assert_eq!(night.expected_minutes(), 480);
    /// ```
    pub fn expected_minutes(&self) -> i32 {
        let expected = i32::from(self.end_time.minutes()) - i32::from(self.start_time.minutes());
        if expected < 0 {
            expected + MINUTES_PER_DAY
        } else {
            expected
        }
    }

    /// Returns true if the shift ends on the calendar day after it starts.
    pub fn crosses_midnight(&self) -> bool {
        self.end_time < self.start_time
    }

    /// Checks the shift definition for inconsistencies.
    ///
    /// A shift needs a non-blank name and distinct start and end times.
    pub fn validate(&self) -> EngineResult<()> {
        if self.name.trim().is_empty() {
            return Err(EngineError::InvalidShift {
                shift_id: self.id.clone(),
                message: "name must not be blank".to_string(),
            });
        }

        if self.start_time == self.end_time {
            return Err(EngineError::InvalidShift {
                shift_id: self.id.clone(),
                message: format!(
                    "start and end time are both {}",
                    self.start_time
                ),
            });
        }

        Ok(())
    }
}
