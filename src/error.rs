//! Error types for the Attendance Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading shifts, classifying
//! attendance and marking records.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Attendance Engine.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/shifts.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/shifts.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A time-of-day string was not in `HH:MM` form.
    #[error("Invalid time '{value}': expected HH:MM")]
    InvalidTime {
        /// The rejected input.
        value: String,
    },

    /// A shift definition was invalid or contained inconsistent data.
    #[error("Invalid shift '{shift_id}': {message}")]
    InvalidShift {
        /// The ID of the invalid shift.
        shift_id: String,
        /// A description of what made the shift invalid.
        message: String,
    },

    /// A shift was requested by id but is not configured.
    #[error("Shift not found: {shift_id}")]
    ShiftNotFound {
        /// The shift id that was requested.
        shift_id: String,
    },

    /// No active shift is configured, so attendance cannot be classified.
    #[error("No active shift configuration found")]
    NoActiveShift,

    /// A mark request did not name an attendance status.
    #[error("Attendance status is required")]
    MissingStatus,

    /// A mark request named a status that cannot be recorded manually.
    #[error("Status '{status}' cannot be marked manually")]
    InvalidStatus {
        /// The rejected status.
        status: String,
    },

    /// A timed status was requested without a check-in time.
    #[error("Check-in time is required for employee '{employee_id}'")]
    MissingCheckIn {
        /// The employee being marked.
        employee_id: String,
    },

    /// Attendance was marked for a day other than today.
    #[error("Attendance can only be marked for the current day ({today}), got {date}")]
    NotCurrentDay {
        /// The requested date.
        date: NaiveDate,
        /// The current date.
        today: NaiveDate,
    },

    /// Writing an export failed.
    #[error("Export failed: {message}")]
    ExportError {
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

impl From<csv::Error> for EngineError {
    fn from(err: csv::Error) -> Self {
        EngineError::ExportError {
            message: err.to_string(),
        }
    }
}
