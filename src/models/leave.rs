//! Leave request model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Workflow state of a leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    /// Awaiting a decision.
    Pending,
    /// Granted by an administrator.
    Approved,
    /// Declined by an administrator.
    Rejected,
}

/// A request for leave over an inclusive range of dates.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{LeaveRequest, LeaveStatus};
/// use chrono::NaiveDate;
///
/// let leave = LeaveRequest {
///     employee_id: "emp_001".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 3, 4).unwrap(),
///     status: LeaveStatus::Approved,
/// };
/// assert!(leave.covers(NaiveDate::from_ymd_opt(2026, 3, 4).unwrap()));
/// assert!(!leave.covers(NaiveDate::from_ymd_opt(2026, 3, 5).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// The employee requesting leave.
    pub employee_id: String,
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// Current workflow state.
    pub status: LeaveStatus,
}

impl LeaveRequest {
    /// Returns true if `date` falls within the leave range.
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Returns true if the leave is approved and covers `date`.
    pub fn is_approved_on(&self, date: NaiveDate) -> bool {
        self.status == LeaveStatus::Approved && self.covers(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn make_leave(status: LeaveStatus) -> LeaveRequest {
        LeaveRequest {
            employee_id: "emp_001".to_string(),
            start_date: make_date("2026-03-02"),
            end_date: make_date("2026-03-04"),
            status,
        }
    }

    #[test]
    fn test_covers_is_inclusive() {
        let leave = make_leave(LeaveStatus::Approved);
        assert!(!leave.covers(make_date("2026-03-01")));
        assert!(leave.covers(make_date("2026-03-02")));
        assert!(leave.covers(make_date("2026-03-03")));
        assert!(leave.covers(make_date("2026-03-04")));
        assert!(!leave.covers(make_date("2026-03-05")));
    }

    #[test]
    fn test_pending_and_rejected_are_not_approved() {
        let date = make_date("2026-03-03");
        assert!(make_leave(LeaveStatus::Approved).is_approved_on(date));
        assert!(!make_leave(LeaveStatus::Pending).is_approved_on(date));
        assert!(!make_leave(LeaveStatus::Rejected).is_approved_on(date));
    }

    #[test]
    fn test_status_deserialization() {
        let leave: LeaveRequest = serde_json::from_str(
            r#"{
                "employee_id": "emp_002",
                "start_date": "2026-03-02",
                "end_date": "2026-03-02",
                "status": "pending"
            }"#,
        )
        .unwrap();
        assert_eq!(leave.status, LeaveStatus::Pending);
    }
}
