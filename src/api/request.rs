//! Request types for the Attendance Engine API.
//!
//! This module defines the JSON request structures for the API endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{
    AttendanceMark, AttendanceRecord, AttendanceStatus, Employee, LeaveRequest, MarkRequest,
    TimeOfDay,
};

/// Request body for the `/classify` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyRequest {
    /// The check-in and optional check-out times.
    #[serde(flatten)]
    pub mark: AttendanceMark,
    /// Shift to classify against; the active shift when omitted.
    #[serde(default)]
    pub shift_id: Option<String>,
}

/// Request body for the `/attendance/mark` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkAttendanceRequest {
    /// The employee being marked.
    pub employee_id: String,
    /// The day being marked; must be today.
    pub date: NaiveDate,
    /// The status picked by the operator.
    #[serde(default)]
    pub status: Option<AttendanceStatus>,
    /// Arrival time, required for present/late/half-day.
    #[serde(default)]
    pub check_in: Option<TimeOfDay>,
    /// Departure time.
    #[serde(default)]
    pub check_out: Option<TimeOfDay>,
    /// Free-form note.
    #[serde(default)]
    pub remarks: Option<String>,
}

/// Request body for the `/attendance/day-sheet` and `/attendance/export` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaySheetRequest {
    /// The day to build the sheet for.
    pub date: NaiveDate,
    /// Recorded attendance; records for other dates are ignored.
    #[serde(default)]
    pub records: Vec<AttendanceRecord>,
    /// Leave requests; approved ones covering `date` become leave entries.
    #[serde(default)]
    pub leaves: Vec<LeaveRequest>,
    /// Employees used to label the export.
    #[serde(default)]
    pub employees: Vec<Employee>,
}

/// Request body for the `/working-days` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkingDaysRequest {
    /// First day of the range (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the range (inclusive).
    pub end_date: NaiveDate,
}

impl From<MarkAttendanceRequest> for MarkRequest {
    fn from(req: MarkAttendanceRequest) -> Self {
        MarkRequest {
            employee_id: req.employee_id,
            date: req.date,
            status: req.status,
            check_in: req.check_in,
            check_out: req.check_out,
            remarks: req.remarks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_classify_request() {
        let json = r#"{ "check_in": "09:20" }"#;

        let request: ClassifyRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.mark.check_in.to_string(), "09:20");
        assert!(request.mark.check_out.is_none());
        assert!(request.shift_id.is_none());
    }

    #[test]
    fn test_deserialize_classify_request_rejects_bad_time() {
        let json = r#"{ "check_in": "quarter past nine" }"#;
        assert!(serde_json::from_str::<ClassifyRequest>(json).is_err());
    }

    #[test]
    fn test_mark_request_conversion() {
        let json = r#"{
            "employee_id": "emp_001",
            "date": "2026-03-02",
            "status": "present",
            "check_in": "09:00",
            "check_out": "18:00",
            "remarks": "badge reader down"
        }"#;

        let request: MarkAttendanceRequest = serde_json::from_str(json).unwrap();
        let mark: MarkRequest = request.into();
        assert_eq!(mark.employee_id, "emp_001");
        assert_eq!(mark.status, Some(AttendanceStatus::Present));
        assert_eq!(mark.check_out.map(|t| t.to_string()).as_deref(), Some("18:00"));
        assert_eq!(mark.remarks.as_deref(), Some("badge reader down"));
    }

    #[test]
    fn test_day_sheet_request_defaults() {
        let json = r#"{ "date": "2026-03-02" }"#;

        let request: DaySheetRequest = serde_json::from_str(json).unwrap();
        assert!(request.records.is_empty());
        assert!(request.leaves.is_empty());
        assert!(request.employees.is_empty());
    }
}
