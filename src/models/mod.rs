//! Core data models for the Attendance Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod audit;
mod employee;
mod leave;
mod shift;
mod time_of_day;

pub use attendance::{AttendanceMark, AttendanceRecord, AttendanceStatus, MarkRequest};
pub use audit::AuditStep;
pub use employee::Employee;
pub use leave::{LeaveRequest, LeaveStatus};
pub use shift::ShiftConfig;
pub use time_of_day::{MINUTES_PER_DAY, TimeOfDay};
