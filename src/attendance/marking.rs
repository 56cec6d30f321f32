//! Attendance marking.
//!
//! Turns an operator's [`MarkRequest`] into an [`AttendanceRecord`]. Timed
//! statuses (present, late, half-day) are decided by the classifier from the
//! supplied check times; absent, remote and wfh are stored as picked.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, AttendanceStatus, AuditStep, MarkRequest, ShiftConfig};

use super::status::determine_status;

/// The record produced by marking attendance, with the classifier's audit
/// step when the classifier ran.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkAttendanceResult {
    /// The record to persist.
    pub record: AttendanceRecord,
    /// Present only for timed statuses.
    pub audit_step: Option<AuditStep>,
}

/// Builds the attendance record for a mark request.
///
/// # Arguments
///
/// * `request` - The operator's request
/// * `shift` - The active shift, if one is configured
/// * `today` - The current date; attendance can only be marked for today
///
/// # Errors
///
/// - [`EngineError::NotCurrentDay`] if `request.date` is not `today`
/// - [`EngineError::MissingStatus`] if no status was picked
/// - [`EngineError::NoActiveShift`] if `shift` is `None`
/// - [`EngineError::InvalidStatus`] for `leave`, which only comes from approved leave
/// - [`EngineError::MissingCheckIn`] for a timed status without a check-in
///
/// # Example
///
/// ```
/// use attendance_engine::attendance::mark_attendance;
/// use attendance_engine::models::{AttendanceStatus, MarkRequest, ShiftConfig};
/// use chrono::NaiveDate;
///
/// let shift = ShiftConfig {
///     id: "general".to_string(),
///     name: "General".to_string(),
///     start_time: "09:00".parse().unwrap(),
///     end_time: "18:00".parse().unwrap(),
///     grace_minutes: 15,
///     is_ramadan: false,
///     is_active: true,
/// };
/// let today = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
///
/// let request = MarkRequest {
///     employee_id: "emp_001".to_string(),
///     date: today,
///     status: Some(AttendanceStatus::Present),
///     check_in: Some("09:20".parse().unwrap()),
///     check_out: None,
///     remarks: None,
/// };
///
/// let result = mark_attendance(&request, Some(&shift), today).unwrap();
/// assert_eq!(result.record.status, AttendanceStatus::Late);
/// assert_eq!(result.record.shift_id.as_deref(), Some("general"));
/// ```
pub fn mark_attendance(
    request: &MarkRequest,
    shift: Option<&ShiftConfig>,
    today: NaiveDate,
) -> EngineResult<MarkAttendanceResult> {
    if request.date != today {
        return Err(EngineError::NotCurrentDay {
            date: request.date,
            today,
        });
    }

    let requested = request.status.ok_or(EngineError::MissingStatus)?;
    let shift = shift.ok_or(EngineError::NoActiveShift)?;

    if requested == AttendanceStatus::Leave {
        return Err(EngineError::InvalidStatus {
            status: requested.to_string(),
        });
    }

    let mut record = AttendanceRecord {
        employee_id: request.employee_id.clone(),
        date: request.date,
        status: requested,
        check_in: None,
        check_out: None,
        shift_id: Some(shift.id.clone()),
        remarks: request.remarks.clone(),
    };

    if !requested.is_timed() {
        debug!(
            employee_id = %request.employee_id,
            status = %requested,
            "Recording manual status"
        );
        return Ok(MarkAttendanceResult {
            record,
            audit_step: None,
        });
    }

    let check_in = request.check_in.ok_or_else(|| EngineError::MissingCheckIn {
        employee_id: request.employee_id.clone(),
    })?;

    let determination = determine_status(shift, check_in, request.check_out, 1);
    debug!(
        employee_id = %request.employee_id,
        requested = %requested,
        status = %determination.status,
        minutes_late = determination.minutes_late,
        "Classified attendance"
    );

    record.status = determination.status;
    record.check_in = Some(check_in.on(request.date));
    record.check_out = request.check_out.map(|t| t.on(request.date));

    Ok(MarkAttendanceResult {
        record,
        audit_step: Some(determination.audit_step),
    })
}
