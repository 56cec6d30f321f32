//! Response types for the Attendance Engine API.
//!
//! This module defines the success payloads, the error response structure
//! and the mapping from [`EngineError`] to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::attendance::{AttendanceSummary, StatusDetermination};
use crate::error::EngineError;
use crate::models::AttendanceRecord;

/// Response body for the `/classify` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationResponse {
    /// Identifier correlating the response with server logs.
    pub correlation_id: Uuid,
    /// The shift the mark was classified against.
    pub shift_id: String,
    /// The classification and its audit step.
    #[serde(flatten)]
    pub determination: StatusDetermination,
}

/// Response body for the `/attendance/day-sheet` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaySheetResponse {
    /// The day the sheet covers.
    pub date: NaiveDate,
    /// Recorded attendance followed by leave entries.
    pub records: Vec<AttendanceRecord>,
    /// Per-status counts over `records`.
    pub summary: AttendanceSummary,
}

/// Response body for the `/working-days` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkingDaysResponse {
    /// First day of the range.
    pub start_date: NaiveDate,
    /// Last day of the range.
    pub end_date: NaiveDate,
    /// Monday–Friday days in the range.
    pub working_days: u32,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an invalid time error response.
    pub fn invalid_time(message: impl Into<String>) -> Self {
        Self::with_details("INVALID_TIME", message, "Times must be given as HH:MM")
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 response with the given body.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidShift { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "INVALID_SHIFT",
                    message,
                    "The shift configuration contains invalid information",
                ),
            },
            EngineError::NoActiveShift => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "NO_ACTIVE_SHIFT",
                    message,
                    "Activate a shift in the configuration before marking attendance",
                ),
            },
            EngineError::ExportError { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::new("EXPORT_ERROR", message),
            },
            EngineError::InvalidTime { .. } => {
                ApiErrorResponse::bad_request(ApiError::invalid_time(message))
            }
            EngineError::ShiftNotFound { .. } => {
                ApiErrorResponse::bad_request(ApiError::new("SHIFT_NOT_FOUND", message))
            }
            EngineError::MissingStatus => {
                ApiErrorResponse::bad_request(ApiError::validation_error(message))
            }
            EngineError::InvalidStatus { .. } => {
                ApiErrorResponse::bad_request(ApiError::with_details(
                    "INVALID_STATUS",
                    message,
                    "Leave entries are derived from approved leave requests",
                ))
            }
            EngineError::MissingCheckIn { .. } => {
                ApiErrorResponse::bad_request(ApiError::new("MISSING_CHECK_IN", message))
            }
            EngineError::NotCurrentDay { .. } => {
                ApiErrorResponse::bad_request(ApiError::new("NOT_CURRENT_DAY", message))
            }
        }
    }
}
