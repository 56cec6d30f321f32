//! HTTP request handlers for the Attendance Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::attendance::{
    build_day_sheet, count_working_days, determine_status, export_day_sheet_csv, mark_attendance,
    summarize,
};
use crate::models::MarkRequest;

use super::request::{ClassifyRequest, DaySheetRequest, MarkAttendanceRequest, WorkingDaysRequest};
use super::response::{
    ApiError, ApiErrorResponse, ClassificationResponse, DaySheetResponse, WorkingDaysResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/shifts/active", get(active_shift_handler))
        .route("/classify", post(classify_handler))
        .route("/attendance/mark", post(mark_handler))
        .route("/attendance/day-sheet", post(day_sheet_handler))
        .route("/attendance/export", post(export_handler))
        .route("/working-days", post(working_days_handler))
        .with_state(state)
}

/// Turns a JSON extraction failure into a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's message, including time parse failures
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else if body_text.contains("Invalid time") {
                ApiError::invalid_time(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    ApiErrorResponse::bad_request(error).into_response()
}

fn json_ok<T: serde::Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Handler for GET /shifts/active.
///
/// Returns the shift attendance is currently classified against.
async fn active_shift_handler(State(state): State<AppState>) -> Response {
    match state.config().active_shift() {
        Ok(shift) => json_ok(shift),
        Err(err) => {
            warn!(error = %err, "Active shift lookup failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /classify.
///
/// Classifies a check-in/check-out pair against the requested shift, or the
/// active shift when none is named, and returns the decision with its audit step.
async fn classify_handler(
    State(state): State<AppState>,
    payload: Result<Json<ClassifyRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing classification request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let config = state.config();
    let shift = match request.shift_id.as_deref() {
        Some(shift_id) => config.get_shift(shift_id),
        None => config.active_shift(),
    };
    let shift = match shift {
        Ok(shift) => shift,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Shift lookup failed"
            );
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let start_time = Instant::now();
    let determination = determine_status(shift, request.mark.check_in, request.mark.check_out, 1);
    info!(
        correlation_id = %correlation_id,
        shift_id = %shift.id,
        status = %determination.status,
        minutes_late = determination.minutes_late,
        duration_us = start_time.elapsed().as_micros(),
        "Classification completed"
    );

    json_ok(ClassificationResponse {
        correlation_id,
        shift_id: shift.id.clone(),
        determination,
    })
}

/// Handler for POST /attendance/mark.
///
/// Validates a manual mark for today and returns the record to store.
async fn mark_handler(
    State(state): State<AppState>,
    payload: Result<Json<MarkAttendanceRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing attendance mark");

    let request: MarkRequest = match payload {
        Ok(Json(req)) => req.into(),
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let shift = state.config().active_shift().ok();
    match mark_attendance(&request, shift, state.today()) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %result.record.employee_id,
                status = %result.record.status,
                "Attendance marked"
            );
            json_ok(result)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                employee_id = %request.employee_id,
                error = %err,
                "Attendance mark rejected"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /attendance/day-sheet.
///
/// Merges recorded attendance with approved leave for one day and
/// returns the combined list with per-status counts.
async fn day_sheet_handler(payload: Result<Json<DaySheetRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let records = build_day_sheet(request.date, &request.records, &request.leaves);
    let summary = summarize(&records);
    info!(
        correlation_id = %correlation_id,
        date = %request.date,
        total = summary.total,
        "Day sheet built"
    );

    json_ok(DaySheetResponse {
        date: request.date,
        records,
        summary,
    })
}

/// Handler for POST /attendance/export.
///
/// Builds the day sheet and returns it as a CSV attachment.
async fn export_handler(payload: Result<Json<DaySheetRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let records = build_day_sheet(request.date, &request.records, &request.leaves);
    let mut body = Vec::new();
    if let Err(err) = export_day_sheet_csv(&records, &request.employees, &mut body) {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Export failed"
        );
        return ApiErrorResponse::from(err).into_response();
    }

    info!(
        correlation_id = %correlation_id,
        date = %request.date,
        rows = records.len(),
        "Day sheet exported"
    );
    let disposition = format!("attachment; filename=\"attendance_{}.csv\"", request.date);
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response()
}

/// Handler for POST /working-days.
async fn working_days_handler(
    payload: Result<Json<WorkingDaysRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    json_ok(WorkingDaysResponse {
        start_date: request.start_date,
        end_date: request.end_date,
        working_days: count_working_days(request.start_date, request.end_date),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use chrono::NaiveDate;
    use tower::ServiceExt;

    use crate::config::ConfigLoader;
    use crate::models::AttendanceStatus;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
    }

    fn create_test_router() -> Router {
        let config = ConfigLoader::load("./config/default").expect("Failed to load config");
        create_router(AppState::with_today(config, today()))
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_classify_late_arrival() {
        let (status, body) = send(
            create_test_router(),
            post_json("/classify", r#"{ "check_in": "09:20" }"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "late");
        assert_eq!(body["minutes_late"], 20);
        assert_eq!(body["shift_id"], "general");
        assert_eq!(body["audit_step"]["rule_id"], "attendance_status");
    }

    #[tokio::test]
    async fn test_classify_named_shift() {
        let (status, body) = send(
            create_test_router(),
            post_json(
                "/classify",
                r#"{ "check_in": "22:05", "check_out": "06:00", "shift_id": "night" }"#,
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "present");
        assert_eq!(body["shift_id"], "night");
    }

    #[tokio::test]
    async fn test_classify_unknown_shift() {
        let (status, body) = send(
            create_test_router(),
            post_json("/classify", r#"{ "check_in": "09:00", "shift_id": "swing" }"#),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "SHIFT_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_classify_invalid_time() {
        let (status, body) = send(
            create_test_router(),
            post_json("/classify", r#"{ "check_in": "25:99" }"#),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_TIME");
    }

    #[tokio::test]
    async fn test_classify_missing_check_in() {
        let (status, body) = send(create_test_router(), post_json("/classify", "{}")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_mark_overrides_requested_status() {
        let (status, body) = send(
            create_test_router(),
            post_json(
                "/attendance/mark",
                r#"{
                    "employee_id": "emp_001",
                    "date": "2026-03-02",
                    "status": "present",
                    "check_in": "13:00"
                }"#,
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["record"]["status"], "half-day");
        assert_eq!(body["record"]["check_in"], "2026-03-02T13:00:00");
        assert_eq!(body["record"]["shift_id"], "general");
    }

    #[tokio::test]
    async fn test_mark_rejects_other_days() {
        let (status, body) = send(
            create_test_router(),
            post_json(
                "/attendance/mark",
                r#"{ "employee_id": "emp_001", "date": "2026-03-01", "status": "absent" }"#,
            ),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "NOT_CURRENT_DAY");
    }

    #[tokio::test]
    async fn test_mark_without_active_shift() {
        let config = ConfigLoader::from_shifts(vec![]).unwrap();
        let router = create_router(AppState::with_today(config, today()));

        let (status, body) = send(
            router,
            post_json(
                "/attendance/mark",
                r#"{ "employee_id": "emp_001", "date": "2026-03-02", "status": "wfh" }"#,
            ),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], "NO_ACTIVE_SHIFT");
    }

    #[tokio::test]
    async fn test_active_shift_endpoint() {
        let request = Request::builder()
            .uri("/shifts/active")
            .body(Body::empty())
            .unwrap();

        let (status, body) = send(create_test_router(), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], "general");
        assert_eq!(body["start_time"], "09:00");
    }

    #[tokio::test]
    async fn test_day_sheet_summary() {
        let (status, body) = send(
            create_test_router(),
            post_json(
                "/attendance/day-sheet",
                r#"{
                    "date": "2026-03-02",
                    "records": [
                        { "employee_id": "emp_001", "date": "2026-03-02", "status": "late" }
                    ],
                    "leaves": [
                        {
                            "employee_id": "emp_002",
                            "start_date": "2026-03-01",
                            "end_date": "2026-03-04",
                            "status": "approved"
                        }
                    ]
                }"#,
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["records"].as_array().unwrap().len(), 2);
        assert_eq!(body["summary"]["late"], 1);
        assert_eq!(body["summary"]["leave"], 1);
        assert_eq!(body["summary"]["total"], 2);
        assert_eq!(
            serde_json::from_value::<AttendanceStatus>(body["records"][1]["status"].clone())
                .unwrap(),
            AttendanceStatus::Leave
        );
    }

    #[tokio::test]
    async fn test_export_returns_csv() {
        let response = create_test_router()
            .oneshot(post_json(
                "/attendance/export",
                r#"{
                    "date": "2026-03-02",
                    "records": [
                        { "employee_id": "emp_001", "date": "2026-03-02", "status": "absent" }
                    ]
                }"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/csv");

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let csv = String::from_utf8(body.to_vec()).unwrap();
        assert!(csv.starts_with("Date,Employee,Department,Status,Check In,Check Out\n"));
        assert!(csv.contains("2026-03-02,emp_001,-,absent,-,-"));
    }

    #[tokio::test]
    async fn test_working_days() {
        let (status, body) = send(
            create_test_router(),
            post_json(
                "/working-days",
                r#"{ "start_date": "2026-03-02", "end_date": "2026-03-08" }"#,
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["working_days"], 5);
    }

    #[tokio::test]
    async fn test_malformed_json() {
        let (status, body) = send(
            create_test_router(),
            post_json("/classify", "{ not json"),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "MALFORMED_JSON");
    }
}
