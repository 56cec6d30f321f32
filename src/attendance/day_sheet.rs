//! Daily attendance sheet and status summary.
//!
//! A day sheet is the set of attendance records for one date, with an entry
//! added for every employee on approved leave that day.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{AttendanceRecord, AttendanceStatus, LeaveRequest};

/// Remark attached to records synthesized from approved leave.
pub const ON_LEAVE_REMARK: &str = "On approved leave";

/// Builds the attendance sheet for `date`.
///
/// Records dated `date` are kept in their original order. Each employee with
/// approved leave covering `date` and no record of their own gets a `leave`
/// entry with no times and no shift. An employee appears at most once among
/// the leave entries even if several approved requests overlap.
///
/// # Example
///
/// ```
/// use attendance_engine::attendance::build_day_sheet;
/// use attendance_engine::models::{AttendanceStatus, LeaveRequest, LeaveStatus};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2026, 3, 3).unwrap();
/// let leaves = vec![LeaveRequest {
///     employee_id: "emp_002".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 3, 4).unwrap(),
///     status: LeaveStatus::Approved,
/// }];
///
/// let sheet = build_day_sheet(date, &[], &leaves);
/// assert_eq!(sheet.len(), 1);
/// assert_eq!(sheet[0].status, AttendanceStatus::Leave);
/// ```
pub fn build_day_sheet(
    date: NaiveDate,
    records: &[AttendanceRecord],
    leaves: &[LeaveRequest],
) -> Vec<AttendanceRecord> {
    let mut sheet: Vec<AttendanceRecord> =
        records.iter().filter(|r| r.date == date).cloned().collect();

    let mut seen: HashSet<String> = sheet.iter().map(|r| r.employee_id.clone()).collect();

    for leave in leaves.iter().filter(|l| l.is_approved_on(date)) {
        if !seen.insert(leave.employee_id.clone()) {
            continue;
        }
        sheet.push(AttendanceRecord {
            employee_id: leave.employee_id.clone(),
            date,
            status: AttendanceStatus::Leave,
            check_in: None,
            check_out: None,
            shift_id: None,
            remarks: Some(ON_LEAVE_REMARK.to_string()),
        });
    }

    sheet
}

/// Per-status counts over a set of attendance records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    /// Records with status `present`.
    pub present: usize,
    /// Records with status `late`.
    pub late: usize,
    /// Records with status `half-day`.
    pub half_day: usize,
    /// Records with status `absent`.
    pub absent: usize,
    /// Records with status `remote`.
    pub remote: usize,
    /// Records with status `leave`.
    pub leave: usize,
    /// Records with status `wfh`.
    pub wfh: usize,
    /// All records counted.
    pub total: usize,
}

impl AttendanceSummary {
    /// Returns the count for a single status.
    pub fn count(&self, status: AttendanceStatus) -> usize {
        match status {
            AttendanceStatus::Present => self.present,
            AttendanceStatus::Late => self.late,
            AttendanceStatus::HalfDay => self.half_day,
            AttendanceStatus::Absent => self.absent,
            AttendanceStatus::Remote => self.remote,
            AttendanceStatus::Leave => self.leave,
            AttendanceStatus::Wfh => self.wfh,
        }
    }

    fn record(&mut self, status: AttendanceStatus) {
        let slot = match status {
            AttendanceStatus::Present => &mut self.present,
            AttendanceStatus::Late => &mut self.late,
            AttendanceStatus::HalfDay => &mut self.half_day,
            AttendanceStatus::Absent => &mut self.absent,
            AttendanceStatus::Remote => &mut self.remote,
            AttendanceStatus::Leave => &mut self.leave,
            AttendanceStatus::Wfh => &mut self.wfh,
        };
        *slot += 1;
        self.total += 1;
    }
}

/// Counts records by status.
pub fn summarize(records: &[AttendanceRecord]) -> AttendanceSummary {
    records
        .iter()
        .fold(AttendanceSummary::default(), |mut summary, record| {
            summary.record(record.status);
            summary
        })
}
