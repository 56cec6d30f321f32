//! Attendance status determination.
//!
//! This module classifies a day's check-in and optional check-out against a
//! shift as `present`, `late` or `half-day`.
//!
//! The rules:
//!
//! 1. Minutes late is `check_in - shift_start`. When that is below -720 the
//!    check-in is taken to belong to the following day and 1440 is added,
//!    so a shift starting late in the evening still matches a check-in
//!    just after midnight.
//! 2. More than `grace_minutes` late: `half-day` when checking in at or
//!    after 12:00, otherwise `late`. Check-out is not consulted.
//! 3. Within grace and checked out: `half-day` when the time worked falls
//!    240 or more minutes short of the shift's length. Both durations wrap
//!    past midnight.
//! 4. Otherwise `present`.
//!
//! The wrap heuristic assumes a shift is shorter than 24 hours and that no
//! one checks in more than 12 hours before the shift starts.

use serde::{Deserialize, Serialize};

use crate::models::{AttendanceStatus, AuditStep, MINUTES_PER_DAY, ShiftConfig, TimeOfDay};

/// Check-ins at or after this minute of the day count as a half day when late (12:00).
pub const HALF_DAY_CHECK_IN_CUTOFF: i32 = 720;

/// A shortfall of at least this many minutes against the shift length is a half day.
pub const EARLY_DEPARTURE_SHORTFALL: i32 = 240;

/// Minutes-late values below this are shifted forward one day.
pub const MIDNIGHT_WRAP_THRESHOLD: i32 = -720;

/// The outcome of classifying one attendance mark.
///
/// # Example
///
/// ```
/// use attendance_engine::attendance::determine_status;
/// use attendance_engine::models::{AttendanceStatus, ShiftConfig};
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
///
/// let result = determine_status(&shift, "09:00".parse().unwrap(), Some("13:30".parse().unwrap()), 1);
/// assert_eq!(result.status, AttendanceStatus::HalfDay);
/// assert_eq!(result.worked_minutes, Some(270));
/// assert_eq!(result.expected_minutes, Some(540));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusDetermination {
    /// The classified status: present, late or half-day.
    pub status: AttendanceStatus,
    /// Minutes between shift start and check-in, after the midnight wrap.
    /// Negative when the employee arrived early.
    pub minutes_late: i32,
    /// Minutes between check-in and check-out, when check-out was consulted.
    pub worked_minutes: Option<i32>,
    /// Nominal shift length, when check-out was consulted.
    pub expected_minutes: Option<i32>,
    /// The audit step recording this decision.
    pub audit_step: AuditStep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    AfternoonArrival,
    LateArrival,
    EarlyDeparture,
    FullDay,
    OnTime,
}

#[derive(Debug, Clone, Copy)]
struct Decision {
    status: AttendanceStatus,
    rule: Rule,
    minutes_late: i32,
    worked_minutes: Option<i32>,
    expected_minutes: Option<i32>,
}

fn minutes_of(time: TimeOfDay) -> i32 {
    i32::from(time.minutes())
}

fn decide(shift: &ShiftConfig, check_in: TimeOfDay, check_out: Option<TimeOfDay>) -> Decision {
    let check_in_minutes = minutes_of(check_in);

    let mut minutes_late = check_in_minutes - minutes_of(shift.start_time);
    if minutes_late < MIDNIGHT_WRAP_THRESHOLD {
        minutes_late += MINUTES_PER_DAY;
    }

    if i64::from(minutes_late) > i64::from(shift.grace_minutes) {
        let (status, rule) = if check_in_minutes >= HALF_DAY_CHECK_IN_CUTOFF {
            (AttendanceStatus::HalfDay, Rule::AfternoonArrival)
        } else {
            (AttendanceStatus::Late, Rule::LateArrival)
        };
        return Decision {
            status,
            rule,
            minutes_late,
            worked_minutes: None,
            expected_minutes: None,
        };
    }

    if let Some(check_out) = check_out {
        let mut worked = minutes_of(check_out) - check_in_minutes;
        if worked < 0 {
            worked += MINUTES_PER_DAY;
        }
        let expected = shift.expected_minutes();

        let (status, rule) = if expected - worked >= EARLY_DEPARTURE_SHORTFALL {
            (AttendanceStatus::HalfDay, Rule::EarlyDeparture)
        } else {
            (AttendanceStatus::Present, Rule::FullDay)
        };
        return Decision {
            status,
            rule,
            minutes_late,
            worked_minutes: Some(worked),
            expected_minutes: Some(expected),
        };
    }

    Decision {
        status: AttendanceStatus::Present,
        rule: Rule::OnTime,
        minutes_late,
        worked_minutes: None,
        expected_minutes: None,
    }
}

/// Classifies a check-in (and optional check-out) against a shift.
///
/// Always returns [`AttendanceStatus::Present`], [`AttendanceStatus::Late`]
/// or [`AttendanceStatus::HalfDay`]. Pure: the result depends only on the
/// arguments.
///
/// # Examples
///
/// ```
/// use attendance_engine::attendance::classify;
/// use attendance_engine::models::{AttendanceStatus, ShiftConfig};
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
///
/// assert_eq!(classify(&shift, "09:10".parse().unwrap(), None), AttendanceStatus::Present);
/// assert_eq!(classify(&shift, "09:20".parse().unwrap(), None), AttendanceStatus::Late);
/// assert_eq!(classify(&shift, "13:00".parse().unwrap(), None), AttendanceStatus::HalfDay);
/// ```
pub fn classify(
    shift: &ShiftConfig,
    check_in: TimeOfDay,
    check_out: Option<TimeOfDay>,
) -> AttendanceStatus {
    decide(shift, check_in, check_out).status
}

/// Classifies a mark and records the decision as an audit step.
///
/// # Arguments
///
/// * `shift` - The shift to classify against
/// * `check_in` - Arrival time
/// * `check_out` - Departure time, if recorded
/// * `step_number` - The step number for audit trail sequencing
pub fn determine_status(
    shift: &ShiftConfig,
    check_in: TimeOfDay,
    check_out: Option<TimeOfDay>,
    step_number: u32,
) -> StatusDetermination {
    let decision = decide(shift, check_in, check_out);

    let reasoning = match decision.rule {
        Rule::AfternoonArrival => format!(
            "Checked in at {}, {} minutes after {} start exceeds {} minute grace; \
             arrival at or after 12:00 is a half day",
            check_in, decision.minutes_late, shift.start_time, shift.grace_minutes
        ),
        Rule::LateArrival => format!(
            "Checked in at {}, {} minutes after {} start exceeds {} minute grace",
            check_in, decision.minutes_late, shift.start_time, shift.grace_minutes
        ),
        Rule::EarlyDeparture => format!(
            "Worked {} of {} expected minutes; shortfall of {} reaches the {} minute half-day threshold",
            decision.worked_minutes.unwrap_or_default(),
            decision.expected_minutes.unwrap_or_default(),
            decision.expected_minutes.unwrap_or_default() - decision.worked_minutes.unwrap_or_default(),
            EARLY_DEPARTURE_SHORTFALL
        ),
        Rule::FullDay => format!(
            "On time and worked {} of {} expected minutes",
            decision.worked_minutes.unwrap_or_default(),
            decision.expected_minutes.unwrap_or_default()
        ),
        Rule::OnTime => format!(
            "Checked in at {}, within {} minute grace of {} start",
            check_in, shift.grace_minutes, shift.start_time
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "attendance_status".to_string(),
        rule_name: "Attendance Status Determination".to_string(),
        input: serde_json::json!({
            "shift_id": shift.id,
            "shift_start": shift.start_time,
            "shift_end": shift.end_time,
            "grace_minutes": shift.grace_minutes,
            "check_in": check_in,
            "check_out": check_out,
        }),
        output: serde_json::json!({
            "status": decision.status,
            "minutes_late": decision.minutes_late,
            "worked_minutes": decision.worked_minutes,
            "expected_minutes": decision.expected_minutes,
        }),
        reasoning,
    };

    StatusDetermination {
        status: decision.status,
        minutes_late: decision.minutes_late,
        worked_minutes: decision.worked_minutes,
        expected_minutes: decision.expected_minutes,
        audit_step,
    }
}
