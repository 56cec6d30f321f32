//! HTTP API module for the Attendance Engine.
//!
//! This module exposes shift-aware attendance classification, manual
//! marking and day-sheet reporting over a JSON REST API.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ClassifyRequest, DaySheetRequest, MarkAttendanceRequest, WorkingDaysRequest};
pub use response::{
    ApiError, ApiErrorResponse, ClassificationResponse, DaySheetResponse, WorkingDaysResponse,
};
pub use state::AppState;
