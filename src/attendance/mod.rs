//! Attendance rules for the Attendance Engine.
//!
//! This module contains the attendance status classifier and the
//! caller-side policy around it: active shift selection, the marking
//! workflow with its manual status override, the daily sheet that folds in
//! approved leave, status summaries, working day counting and CSV export.

mod active_shift;
mod day_sheet;
mod export;
mod marking;
mod status;
mod working_days;

pub use active_shift::select_active_shift;
pub use day_sheet::{AttendanceSummary, ON_LEAVE_REMARK, build_day_sheet, summarize};
pub use export::{EXPORT_HEADER, export_day_sheet_csv};
pub use marking::{MarkAttendanceResult, mark_attendance};
pub use status::{
    EARLY_DEPARTURE_SHORTFALL, HALF_DAY_CHECK_IN_CUTOFF, MIDNIGHT_WRAP_THRESHOLD,
    StatusDetermination, classify, determine_status,
};
pub use working_days::{count_working_days, is_working_day};
