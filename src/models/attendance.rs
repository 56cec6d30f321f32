//! Attendance status and record models.
//!
//! This module contains the [`AttendanceStatus`] values stored per employee
//! per day, the raw [`AttendanceMark`] an operator enters, the
//! [`MarkRequest`] wrapping it, and the resulting [`AttendanceRecord`].

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::time_of_day::TimeOfDay;

/// The status recorded for an employee on a given day.
///
/// # Example
///
/// ```
/// use attendance_engine::models::AttendanceStatus;
///
/// assert_eq!(
///     serde_json::to_string(&AttendanceStatus::HalfDay).unwrap(),
///     "\"half-day\""
/// );
/// assert!(AttendanceStatus::Late.is_timed());
/// assert!(!AttendanceStatus::Remote.is_timed());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttendanceStatus {
    /// Checked in within the grace period and worked close to the full shift.
    Present,
    /// Checked in after the grace period, before noon.
    Late,
    /// Checked in after noon, or left four or more hours short.
    HalfDay,
    /// Did not attend.
    Absent,
    /// Worked remotely.
    Remote,
    /// On approved leave; derived from leave requests, never marked directly.
    Leave,
    /// Worked from home.
    Wfh,
}

impl AttendanceStatus {
    /// Every status, in display order.
    pub const ALL: [AttendanceStatus; 7] = [
        AttendanceStatus::Present,
        AttendanceStatus::Late,
        AttendanceStatus::HalfDay,
        AttendanceStatus::Absent,
        AttendanceStatus::Remote,
        AttendanceStatus::Leave,
        AttendanceStatus::Wfh,
    ];

    /// Returns true for statuses that carry check-in/check-out times and
    /// are decided by the classifier.
    pub fn is_timed(self) -> bool {
        matches!(
            self,
            AttendanceStatus::Present | AttendanceStatus::Late | AttendanceStatus::HalfDay
        )
    }

    /// The stored string form of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Late => "late",
            AttendanceStatus::HalfDay => "half-day",
            AttendanceStatus::Absent => "absent",
            AttendanceStatus::Remote => "remote",
            AttendanceStatus::Leave => "leave",
            AttendanceStatus::Wfh => "wfh",
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw check times for one employee on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceMark {
    /// When the employee arrived.
    pub check_in: TimeOfDay,
    /// When the employee left, if recorded.
    #[serde(default)]
    pub check_out: Option<TimeOfDay>,
}

/// An operator's request to record attendance for an employee.
///
/// `status` is the operator's pick. For timed statuses it is only a hint:
/// the classifier decides between present, late and half-day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkRequest {
    /// The employee being marked.
    pub employee_id: String,
    /// The day being marked.
    pub date: NaiveDate,
    /// The status picked by the operator.
    #[serde(default)]
    pub status: Option<AttendanceStatus>,
    /// Arrival time, required for timed statuses.
    #[serde(default)]
    pub check_in: Option<TimeOfDay>,
    /// Departure time.
    #[serde(default)]
    pub check_out: Option<TimeOfDay>,
    /// Free-form note stored with the record.
    #[serde(default)]
    pub remarks: Option<String>,
}

/// A single day's attendance for one employee, ready to persist.
///
/// Records are written once and never recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The employee this record belongs to.
    pub employee_id: String,
    /// The calendar day.
    pub date: NaiveDate,
    /// The recorded status.
    pub status: AttendanceStatus,
    /// Check-in anchored to `date`, for timed statuses.
    #[serde(default)]
    pub check_in: Option<NaiveDateTime>,
    /// Check-out anchored to `date`, when supplied.
    #[serde(default)]
    pub check_out: Option<NaiveDateTime>,
    /// The shift the record was classified against.
    #[serde(default)]
    pub shift_id: Option<String>,
    /// Free-form note.
    #[serde(default)]
    pub remarks: Option<String>,
}
